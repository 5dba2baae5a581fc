//! Graph store, loading and initial coloring.
//!
//! A [`Graph`] holds a static adjacency structure and one mutable color per
//! node. Colors are assigned once before a run (see [`InitialColoring`]) and
//! only ever exchanged pairwise afterwards.

mod coloring;
mod loader;
mod store;

pub use coloring::InitialColoring;
pub use loader::{load_metis, read_metis};
pub use store::{Color, Graph, Node, NodeId};

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Color, Graph, NodeId};

    /// Cycle `0 - 1 - ... - (n-1) - 0` with the given colors.
    pub fn cycle(colors: &[Color]) -> Graph {
        let n = colors.len() as NodeId;
        Graph::from_adjacency(colors.iter().enumerate().map(|(i, &c)| {
            let i = i as NodeId;
            (i, c, vec![(i + n - 1) % n, (i + 1) % n])
        }))
        .unwrap()
    }

    /// Path `0 - 1 - ... - (n-1)` with the given colors.
    pub fn path(colors: &[Color]) -> Graph {
        let n = colors.len() as NodeId;
        Graph::from_adjacency(colors.iter().enumerate().map(|(i, &c)| {
            let i = i as NodeId;
            let mut adj = Vec::new();
            if i > 0 {
                adj.push(i - 1);
            }
            if i + 1 < n {
                adj.push(i + 1);
            }
            (i, c, adj)
        }))
        .unwrap()
    }

    /// Graph on ids `0..colors.len()` with the given undirected edges.
    pub fn from_edges(colors: &[Color], edges: &[(NodeId, NodeId)]) -> Graph {
        let mut adjacency = vec![Vec::new(); colors.len()];
        for &(a, b) in edges {
            adjacency[a as usize].push(b);
            adjacency[b as usize].push(a);
        }
        Graph::from_adjacency(
            adjacency
                .into_iter()
                .enumerate()
                .map(|(i, adj)| (i as NodeId, colors[i], adj)),
        )
        .unwrap()
    }

    /// Two cliques of size `k` joined by a single bridge edge, colors given
    /// per node in id order.
    pub fn two_cliques(k: NodeId, colors: &[Color]) -> Graph {
        assert_eq!(colors.len() as NodeId, 2 * k);
        Graph::from_adjacency((0..2 * k).map(|i| {
            let base = if i < k { 0 } else { k };
            let mut adj: Vec<NodeId> = (base..base + k).filter(|&j| j != i).collect();
            if i == k - 1 {
                adj.push(k);
            }
            if i == k {
                adj.push(k - 1);
            }
            (i, colors[i as usize], adj)
        }))
        .unwrap()
    }
}
