//! Candidate partner sampling.

use crate::graph::Graph;
use rand::seq::index;
use rand::Rng;
use std::fmt;

/// Where swap candidates for a node come from.
///
/// Reference: Rahimian et al. (2013), Section 4.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeSelectionPolicy {
    /// Only direct neighbours.
    Local,
    /// Only uniformly drawn nodes from the whole graph.
    Random,
    /// Neighbours first; random nodes if no neighbour is an acceptable partner.
    #[default]
    Hybrid,
}

impl NodeSelectionPolicy {
    pub fn uses_local(self) -> bool {
        matches!(self, NodeSelectionPolicy::Local | NodeSelectionPolicy::Hybrid)
    }

    pub fn uses_random(self) -> bool {
        matches!(self, NodeSelectionPolicy::Random | NodeSelectionPolicy::Hybrid)
    }
}

impl fmt::Display for NodeSelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeSelectionPolicy::Local => "LOCAL",
            NodeSelectionPolicy::Random => "RANDOM",
            NodeSelectionPolicy::Hybrid => "HYBRID",
        };
        f.write_str(name)
    }
}

/// Draws candidate partner indices.
///
/// Both modes sample without replacement and return every eligible index
/// when fewer are available than requested, so a call never loops.
#[derive(Debug, Clone, Copy)]
pub struct CandidateSampler {
    local_sample_size: usize,
    random_sample_size: usize,
}

impl CandidateSampler {
    pub fn new(local_sample_size: usize, random_sample_size: usize) -> Self {
        Self {
            local_sample_size,
            random_sample_size,
        }
    }

    /// Replaces `out` with up to `local_sample_size` distinct neighbours of `node`.
    pub fn local<R: Rng + ?Sized>(
        &self,
        graph: &Graph,
        node: usize,
        rng: &mut R,
        out: &mut Vec<usize>,
    ) {
        out.clear();
        let adjacency = graph.adjacency(node);
        if adjacency.len() <= self.local_sample_size {
            out.extend_from_slice(adjacency);
            return;
        }
        out.extend(
            index::sample(rng, adjacency.len(), self.local_sample_size)
                .into_iter()
                .map(|i| adjacency[i]),
        );
    }

    /// Replaces `out` with up to `random_sample_size` distinct nodes other than `node`.
    pub fn random<R: Rng + ?Sized>(
        &self,
        graph: &Graph,
        node: usize,
        rng: &mut R,
        out: &mut Vec<usize>,
    ) {
        out.clear();
        let eligible = graph.len().saturating_sub(1);
        if eligible <= self.random_sample_size {
            out.extend((0..graph.len()).filter(|&i| i != node));
            return;
        }
        // Sample from the n - 1 slots that skip `node`, then shift back.
        out.extend(
            index::sample(rng, eligible, self.random_sample_size)
                .into_iter()
                .map(|i| if i < node { i } else { i + 1 }),
        );
    }
}
