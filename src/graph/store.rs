//! Node storage, colors and adjacency.

use crate::error::{JabejaError, Result};
use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Externally assigned node identifier.
pub type NodeId = u32;

/// Partition label.
pub type Color = u32;

/// A graph vertex with its current and initial color.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    color: Color,
    init_color: Color,
    neighbours: Vec<NodeId>,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Current color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Color recorded when the node was created or last initially colored.
    pub fn init_color(&self) -> Color {
        self.init_color
    }

    /// Neighbour ids in input order.
    pub fn neighbours(&self) -> &[NodeId] {
        &self.neighbours
    }

    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    /// Whether the node's color differs from its initial color.
    pub fn has_migrated(&self) -> bool {
        self.color != self.init_color
    }
}

/// Static-topology graph whose nodes carry a mutable color.
///
/// Nodes are stored densely in ascending id order. The position of a node
/// in that order is its *index*; indices are stable for the lifetime of the
/// graph and are what the search loop works with. Id-based accessors are
/// provided for callers holding external ids.
///
/// During a run the only color mutation is [`Graph::swap`] (or
/// [`Graph::swap_at`]), so the multiset of colors never changes.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Builds a graph from `(id, color, neighbours)` entries.
    ///
    /// The color given for each node is also recorded as its initial color.
    /// Fails if an id is repeated, a node lists itself, a neighbour id is
    /// unknown, or an edge has no matching reverse edge.
    pub fn from_adjacency<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, Color, Vec<NodeId>)>,
    {
        let mut nodes: Vec<Node> = entries
            .into_iter()
            .map(|(id, color, neighbours)| Node {
                id,
                color,
                init_color: color,
                neighbours,
            })
            .collect();
        nodes.sort_by_key(|n| n.id);

        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id, i).is_some() {
                return Err(JabejaError::DuplicateNode(node.id));
            }
        }

        let mut adjacency = Vec::with_capacity(nodes.len());
        let mut directed: HashMap<(usize, usize), u32> = HashMap::new();
        for (i, node) in nodes.iter().enumerate() {
            let mut adj = Vec::with_capacity(node.neighbours.len());
            for &neighbour in &node.neighbours {
                if neighbour == node.id {
                    return Err(JabejaError::SelfLoop(node.id));
                }
                let j = *index
                    .get(&neighbour)
                    .ok_or(JabejaError::UnknownNeighbour {
                        node: node.id,
                        neighbour,
                    })?;
                *directed.entry((i, j)).or_insert(0) += 1;
                adj.push(j);
            }
            adjacency.push(adj);
        }

        for (i, adj) in adjacency.iter().enumerate() {
            for &j in adj {
                if directed.get(&(i, j)) != directed.get(&(j, i)) {
                    return Err(JabejaError::AsymmetricEdge {
                        from: nodes[i].id,
                        to: nodes[j].id,
                    });
                }
            }
        }

        let edge_count = adjacency.iter().map(Vec::len).sum::<usize>() / 2;
        let ids = nodes.iter().map(|n| n.id).collect();

        Ok(Self {
            nodes,
            ids,
            index,
            adjacency,
            edge_count,
        })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All node ids in ascending order (the visiting order of a round).
    pub fn node_ids(&self) -> &[NodeId] {
        &self.ids
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Index of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not part of the graph.
    pub fn index(&self, id: NodeId) -> usize {
        match self.index.get(&id) {
            Some(&i) => i,
            None => panic!("node {id} is not part of the graph"),
        }
    }

    pub fn try_index(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Id of the node at `index`.
    pub fn id_at(&self, index: usize) -> NodeId {
        self.ids[index]
    }

    /// Node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not part of the graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[self.index(id)]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.try_index(id).map(|i| &self.nodes[i])
    }

    pub fn node_at(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Current color of `id`. Panics on an unknown id.
    pub fn color(&self, id: NodeId) -> Color {
        self.node(id).color
    }

    pub fn color_at(&self, index: usize) -> Color {
        self.nodes[index].color
    }

    /// Resolved neighbour indices of the node at `index`.
    pub fn adjacency(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    /// Number of neighbours of `id` currently holding `color`.
    ///
    /// Panics on an unknown id.
    pub fn degree_with_color(&self, id: NodeId, color: Color) -> u32 {
        self.degree_with_color_at(self.index(id), color)
    }

    pub fn degree_with_color_at(&self, index: usize, color: Color) -> u32 {
        self.adjacency[index]
            .iter()
            .filter(|&&j| self.nodes[j].color == color)
            .count() as u32
    }

    /// Exchanges the colors of two nodes. Panics on an unknown id.
    pub fn swap(&mut self, a: NodeId, b: NodeId) {
        let (a, b) = (self.index(a), self.index(b));
        self.swap_at(a, b);
    }

    pub fn swap_at(&mut self, a: usize, b: usize) {
        let color_a = self.nodes[a].color;
        self.nodes[a].color = self.nodes[b].color;
        self.nodes[b].color = color_a;
    }

    /// Sets every node's color (and initial color) from `color_of(index, id)`.
    ///
    /// This is the only non-swap color mutation and is meant for preparing a
    /// graph before a run.
    pub fn assign_initial_colors<F>(&mut self, mut color_of: F)
    where
        F: FnMut(usize, NodeId) -> Color,
    {
        for (i, node) in self.nodes.iter_mut().enumerate() {
            let color = color_of(i, node.id);
            node.color = color;
            node.init_color = color;
        }
    }

    /// Records the current colors as the initial colors.
    pub fn reset_initial_colors(&mut self) {
        for node in &mut self.nodes {
            node.init_color = node.color;
        }
    }

    /// Number of nodes per color.
    pub fn color_counts(&self) -> BTreeMap<Color, usize> {
        let mut counts = BTreeMap::new();
        for node in &self.nodes {
            *counts.entry(node.color).or_insert(0) += 1;
        }
        counts
    }

    /// Number of distinct colors in use.
    pub fn partition_count(&self) -> usize {
        self.color_counts().len()
    }

    fn cut_at(&self, index: usize) -> usize {
        let color = self.nodes[index].color;
        self.adjacency[index]
            .iter()
            .filter(|&&j| self.nodes[j].color != color)
            .count()
    }

    /// Number of edges whose endpoints hold different colors.
    pub fn edge_cut(&self) -> usize {
        #[cfg(feature = "parallel")]
        let gray_links: usize = (0..self.len()).into_par_iter().map(|i| self.cut_at(i)).sum();
        #[cfg(not(feature = "parallel"))]
        let gray_links: usize = (0..self.len()).map(|i| self.cut_at(i)).sum();

        gray_links / 2
    }

    /// Number of nodes whose color differs from their initial color.
    pub fn migrations(&self) -> usize {
        #[cfg(feature = "parallel")]
        let migrated = self.nodes.par_iter().filter(|n| n.has_migrated()).count();
        #[cfg(not(feature = "parallel"))]
        let migrated = self.nodes.iter().filter(|n| n.has_migrated()).count();

        migrated
    }
}
