// Per-phase timing: each query phase returns its own elapsed time
use std::time::{Duration, Instant};

/// A phase result paired with the time it took to compute.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Run `f` and record how long it took.
    pub fn measure(f: impl FnOnce() -> T) -> Self {
        let start = Instant::now();
        let value = f();
        Self {
            value,
            elapsed: start.elapsed(),
        }
    }

    /// Like [`Timed::measure`] for fallible phases. Nothing is returned on
    /// error, so a failed phase contributes no time.
    pub fn try_measure<E>(f: impl FnOnce() -> Result<T, E>) -> Result<Self, E> {
        let Timed { value, elapsed } = Timed::measure(f);
        Ok(Self {
            value: value?,
            elapsed,
        })
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    #[inline]
    pub fn into_parts(self) -> (T, Duration) {
        (self.value, self.elapsed)
    }
}

/// Nanosecond-precision milliseconds, as reported in query results.
#[inline]
pub fn as_millis_f64(elapsed: Duration) -> f64 {
    elapsed.as_nanos() as f64 / 1_000_000.0
}
