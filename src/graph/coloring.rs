//! Initial color assignment.

use super::store::{Color, Graph};
use crate::error::{JabejaError, Result};
use rand::Rng;
use std::fmt;

/// How colors are assigned before the first round.
///
/// Nodes are addressed in ascending id order. Applying a coloring sets both
/// the current and the initial color of every node, so migrations are
/// counted relative to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialColoring {
    /// The `i`-th node gets color `i % k`.
    #[default]
    RoundRobin,
    /// Each node draws a uniform color. Partition sizes are not balanced.
    Random,
    /// Consecutive blocks of `ceil(n / k)` nodes share a color.
    Batch,
}

impl InitialColoring {
    /// Colors `graph` with `partitions` colors.
    pub fn apply<R: Rng + ?Sized>(
        self,
        graph: &mut Graph,
        partitions: u32,
        rng: &mut R,
    ) -> Result<()> {
        if partitions == 0 {
            return Err(JabejaError::InvalidConfig(
                "number of partitions must be positive".into(),
            ));
        }

        match self {
            InitialColoring::RoundRobin => {
                graph.assign_initial_colors(|i, _| (i % partitions as usize) as Color);
            }
            InitialColoring::Random => {
                graph.assign_initial_colors(|_, _| rng.random_range(0..partitions));
            }
            InitialColoring::Batch => {
                let block = graph.len().div_ceil(partitions as usize).max(1);
                graph.assign_initial_colors(|i, _| (i / block) as Color);
            }
        }

        log::debug!(
            "{self} coloring with {partitions} partitions: {:?}",
            graph.color_counts()
        );
        Ok(())
    }
}

impl fmt::Display for InitialColoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InitialColoring::RoundRobin => "ROUND_ROBIN",
            InitialColoring::Random => "RANDOM",
            InitialColoring::Batch => "BATCH",
        };
        f.write_str(name)
    }
}
