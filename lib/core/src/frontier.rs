// Min-priority frontier for Dijkstra with lazy deletion
use crate::graph::NodeIx;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Tentative distance from the source
pub type Distance = u64;

/// Sentinel for "not reached yet". Only ever compared against, never
/// reported as a distance.
pub(crate) const UNREACHED: Distance = Distance::MAX;

/// Frontier entry with the distance it was pushed with
#[derive(Clone, Copy, Debug)]
struct Candidate<'a> {
    dist: Distance,
    ix: NodeIx,
    name: &'a str,
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist && self.ix == other.ix
    }
}

impl Eq for Candidate<'_> {}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: smaller distance first, ties by name ascending
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.name.cmp(self.name))
            .then_with(|| other.ix.cmp(&self.ix))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Nodes not yet finalized, ordered by tentative distance.
///
/// Decrease-key is a re-push: the old entry stays in the heap and is
/// dropped on pop because its distance no longer matches the
/// authoritative table, or because its node was already settled.
pub(crate) struct Frontier<'a> {
    heap: BinaryHeap<Candidate<'a>>,
    settled: Vec<bool>,
}

impl<'a> Frontier<'a> {
    pub(crate) fn with_capacity(node_count: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(node_count * 2),
            settled: vec![false; node_count],
        }
    }

    /// Insert `ix`, or refresh its position after its distance changed.
    #[inline]
    pub(crate) fn push(&mut self, ix: NodeIx, name: &'a str, dist: Distance) {
        self.heap.push(Candidate { dist, ix, name });
    }

    /// Extract the unsettled node with the smallest current distance.
    pub(crate) fn pop(&mut self, distances: &[Distance]) -> Option<(NodeIx, Distance)> {
        while let Some(candidate) = self.heap.pop() {
            if self.settled[candidate.ix] || candidate.dist != distances[candidate.ix] {
                continue;
            }
            self.settled[candidate.ix] = true;
            return Some((candidate.ix, candidate.dist));
        }
        None
    }

    #[inline]
    pub(crate) fn is_settled(&self, ix: NodeIx) -> bool {
        self.settled[ix]
    }
}
