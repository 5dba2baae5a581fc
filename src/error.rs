//! Error types.

use crate::graph::NodeId;

/// Errors produced while building graphs, loading files or starting a run.
///
/// Precondition violations inside a run (looking up an id that is not in
/// the graph) are not represented here: they panic.
#[derive(Debug, thiserror::Error)]
pub enum JabejaError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("duplicate node id {0}")]
    DuplicateNode(NodeId),

    #[error("node {0} lists itself as a neighbour")]
    SelfLoop(NodeId),

    #[error("node {node} lists unknown neighbour {neighbour}")]
    UnknownNeighbour { node: NodeId, neighbour: NodeId },

    #[error("edge {from} -> {to} has no reverse edge")]
    AsymmetricEdge { from: NodeId, to: NodeId },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, JabejaError>;
