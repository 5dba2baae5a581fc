//! METIS adjacency file loader.
//!
//! Format: an optional run of comment lines (`%` or `#`), a header
//! `<nodes> <edges> [fmt]`, then one line per node listing the 1-based ids
//! of its neighbours. An empty line is a node without neighbours. Node ids
//! in the resulting graph are the 1-based line numbers. Every node starts
//! with color 0; use [`InitialColoring`](super::InitialColoring) to assign
//! real colors.

use super::store::{Graph, NodeId};
use crate::error::{JabejaError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads a METIS graph from a file.
pub fn load_metis<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let file = File::open(path.as_ref())?;
    log::info!("loading graph from {}", path.as_ref().display());
    read_metis(BufReader::new(file))
}

/// Reads a METIS graph from any buffered reader.
pub fn read_metis<R: BufRead>(reader: R) -> Result<Graph> {
    let mut lines = reader.lines().enumerate();

    let (header_line, header) = loop {
        match lines.next() {
            Some((i, line)) => {
                let line = line?;
                let trimmed = line.trim();
                if trimmed.is_empty() || is_comment(trimmed) {
                    continue;
                }
                break (i + 1, line);
            }
            None => {
                return Err(JabejaError::Parse {
                    line: 0,
                    message: "missing header line".into(),
                })
            }
        }
    };

    let fields: Vec<&str> = header.split_ascii_whitespace().collect();
    if fields.len() < 2 {
        return Err(JabejaError::Parse {
            line: header_line,
            message: format!("header needs node and edge counts, got {:?}", header.trim()),
        });
    }
    let node_count: usize = parse_field(fields[0], header_line, "node count")?;
    let declared_edges: usize = parse_field(fields[1], header_line, "edge count")?;
    if let Some(fmt) = fields.get(2) {
        if !fmt.trim_start_matches('0').is_empty() {
            return Err(JabejaError::Parse {
                line: header_line,
                message: format!("weighted graphs (fmt {fmt}) are not supported"),
            });
        }
    }

    let mut entries: Vec<(NodeId, u32, Vec<NodeId>)> = Vec::with_capacity(node_count);
    for (i, line) in lines {
        let line_no = i + 1;
        let line = line?;
        let trimmed = line.trim();
        if is_comment(trimmed) {
            continue;
        }
        if entries.len() == node_count {
            if trimmed.is_empty() {
                continue;
            }
            return Err(JabejaError::Parse {
                line: line_no,
                message: format!("more than {node_count} adjacency lines"),
            });
        }

        let id = entries.len() as NodeId + 1;
        let mut neighbours = Vec::new();
        for field in trimmed.split_ascii_whitespace() {
            let neighbour: NodeId = parse_field(field, line_no, "neighbour id")?;
            if neighbour == 0 || neighbour as usize > node_count {
                return Err(JabejaError::Parse {
                    line: line_no,
                    message: format!("neighbour {neighbour} outside 1..={node_count}"),
                });
            }
            neighbours.push(neighbour);
        }
        entries.push((id, 0, neighbours));
    }

    if entries.len() != node_count {
        return Err(JabejaError::Parse {
            line: header_line,
            message: format!(
                "header declares {node_count} nodes but {} adjacency lines follow",
                entries.len()
            ),
        });
    }

    let graph = Graph::from_adjacency(entries)?;
    if graph.edge_count() != declared_edges {
        log::warn!(
            "header declares {declared_edges} edges, adjacency lists contain {}",
            graph.edge_count()
        );
    }
    log::info!(
        "loaded graph with {} nodes and {} edges",
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}

fn is_comment(line: &str) -> bool {
    line.starts_with('%') || line.starts_with('#')
}

fn parse_field<T: std::str::FromStr>(field: &str, line: usize, what: &str) -> Result<T> {
    field.parse().map_err(|_| JabejaError::Parse {
        line,
        message: format!("could not parse {what} from {field:?}"),
    })
}
