//! Color-degree energy of hypothetical swaps.

use crate::graph::{Color, Graph};

/// Energy before and after swapping a node with one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapEnergy {
    /// Index of the candidate partner.
    pub candidate: usize,
    /// `util(p, c_p) + util(q, c_q)`.
    pub old_energy: f64,
    /// `util(p, c_q) + util(q, c_p)`.
    pub new_energy: f64,
}

impl SwapEnergy {
    pub fn diff(&self) -> f64 {
        self.new_energy - self.old_energy
    }
}

/// Scores swaps with `util(node, color) = degree_with_color(node, color) ^ alpha`.
#[derive(Debug, Clone, Copy)]
pub struct UtilityEvaluator {
    alpha: f64,
}

impl UtilityEvaluator {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn utility(&self, graph: &Graph, node: usize, color: Color) -> f64 {
        (graph.degree_with_color_at(node, color) as f64).powf(self.alpha)
    }

    /// Energy terms for swapping `p` with `q`.
    pub fn evaluate(&self, graph: &Graph, p: usize, q: usize) -> SwapEnergy {
        let color_p = graph.color_at(p);
        let color_q = graph.color_at(q);
        SwapEnergy {
            candidate: q,
            old_energy: self.utility(graph, p, color_p) + self.utility(graph, q, color_q),
            new_energy: self.utility(graph, p, color_q) + self.utility(graph, q, color_p),
        }
    }

    /// Replaces `out` with the energies of every candidate, in candidate order.
    ///
    /// Candidates already holding `p`'s color are scored like any other: their
    /// old and new energies are equal.
    pub fn evaluate_all(&self, graph: &Graph, p: usize, candidates: &[usize], out: &mut Vec<SwapEnergy>) {
        out.clear();
        out.extend(candidates.iter().map(|&q| self.evaluate(graph, p, q)));
    }
}
