//! Balanced graph partitioning with the Ja-Be-Ja heuristic.
//!
//! - **Graph**: static adjacency with one mutable color per node, a METIS
//!   loader, and initial coloring policies.
//! - **Ja-Be-Ja**: the round loop, candidate sampling, swap utility,
//!   pluggable acceptance policies and cooling schedules, per-round metrics.
//! - **Reporting**: a [`report::Reporter`] trait receiving one snapshot per
//!   round, with a tab-delimited file writer.
//!
//! The search is a deterministic, single-threaded simulation of the
//! decentralized protocol: given the same graph, configuration and seed,
//! two runs produce identical histories.
//!
//! # Examples
//!
//! ```
//! use jabeja::graph::{Graph, InitialColoring};
//! use jabeja::jabeja::{JabejaConfig, JabejaRunner};
//! use rand::SeedableRng;
//!
//! // A 6-cycle.
//! let mut graph = Graph::from_adjacency(
//!     (0..6u32).map(|i| (i, 0, vec![(i + 5) % 6, (i + 1) % 6])),
//! )
//! .unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! InitialColoring::RoundRobin.apply(&mut graph, 2, &mut rng).unwrap();
//!
//! let config = JabejaConfig::default().with_rounds(20).with_seed(1);
//! let result = JabejaRunner::run(&mut graph, &config).unwrap();
//! assert_eq!(result.history.len(), 20);
//! assert_eq!(graph.color_counts().values().copied().collect::<Vec<_>>(), vec![3, 3]);
//! ```

pub mod error;
pub mod graph;
pub mod jabeja;
pub mod report;

pub use error::{JabejaError, Result};
