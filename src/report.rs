//! Per-round result reporting.

use crate::jabeja::{JabejaConfig, RoundMetrics};
use std::fs::{self, File};
use std::io::{BufWriter, Result, Write};
use std::path::Path;

/// Receives one snapshot per completed round, in round order.
pub trait Reporter {
    fn report(&mut self, metrics: &RoundMetrics) -> Result<()>;

    /// Called once after the last round (or after cancellation).
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Discards all snapshots.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _metrics: &RoundMetrics) -> Result<()> {
        Ok(())
    }
}

impl Reporter for Vec<RoundMetrics> {
    fn report(&mut self, metrics: &RoundMetrics) -> Result<()> {
        self.push(*metrics);
        Ok(())
    }
}

const DELIMITER: &str = "\t\t";

/// Writes snapshots as a delimited text table.
///
/// The output starts with a comment line and a header row:
///
/// ```text
/// # Migration is number of nodes that have changed color.
///
/// Round\t\tEdge-Cut\t\tSwaps\t\tMigrations
/// ```
///
/// followed by one row per round.
pub struct TsvReporter<W: Write> {
    writer: W,
}

impl<W: Write> TsvReporter<W> {
    /// Wraps `writer` and writes the header.
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "# Migration is number of nodes that have changed color.")?;
        writeln!(writer)?;
        writeln!(
            writer,
            "Round{DELIMITER}Edge-Cut{DELIMITER}Swaps{DELIMITER}Migrations"
        )?;
        Ok(Self { writer })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TsvReporter<BufWriter<File>> {
    /// Creates `dir` if needed and writes to `dir/file_name(graph_name, config)`.
    pub fn create<P: AsRef<Path>>(dir: P, graph_name: &str, config: &JabejaConfig) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(file_name(graph_name, config));
        log::info!("writing round results to {}", path.display());
        Self::new(BufWriter::new(File::create(path)?))
    }
}

impl<W: Write> Reporter for TsvReporter<W> {
    fn report(&mut self, m: &RoundMetrics) -> Result<()> {
        writeln!(
            self.writer,
            "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            m.round, m.edge_cut, m.swaps, m.migrations
        )
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()
    }
}

/// Result file name encoding the graph and the run parameters.
pub fn file_name(graph_name: &str, config: &JabejaConfig) -> String {
    format!(
        "{graph_name}_NS_{}_AP_{}_CS_{}_T_{}_RNSS_{}_URSS_{}_A_{}_R_{}.txt",
        config.node_selection,
        config.acceptance,
        config.cooling,
        config.initial_temperature,
        config.local_sample_size,
        config.random_sample_size,
        config.alpha,
        config.rounds,
    )
}
