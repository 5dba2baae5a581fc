//! Per-round metrics.

use crate::graph::Graph;

/// Snapshot taken after a round, after cooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundMetrics {
    /// 0-based index of the completed round.
    pub round: usize,
    /// Edges whose endpoints hold different colors.
    pub edge_cut: usize,
    /// Swaps committed since the start of the run.
    pub swaps: u64,
    /// Nodes whose color differs from their initial color.
    pub migrations: usize,
}

/// Computes snapshots and remembers the best edge cut.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    history: Vec<RoundMetrics>,
    best: Option<(usize, usize)>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `graph` and records a snapshot for `round`.
    pub fn collect(&mut self, graph: &Graph, round: usize, swaps: u64) -> RoundMetrics {
        let metrics = RoundMetrics {
            round,
            edge_cut: graph.edge_cut(),
            swaps,
            migrations: graph.migrations(),
        };
        if self.best.is_none_or(|(_, cut)| metrics.edge_cut < cut) {
            self.best = Some((round, metrics.edge_cut));
        }
        self.history.push(metrics);
        metrics
    }

    /// `(round, edge_cut)` of the lowest edge cut seen; earliest on ties.
    pub fn best(&self) -> Option<(usize, usize)> {
        self.best
    }

    pub fn history(&self) -> &[RoundMetrics] {
        &self.history
    }

    pub fn into_history(self) -> Vec<RoundMetrics> {
        self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::cycle;

    #[test]
    fn test_collect_reads_graph() {
        let mut g = cycle(&[0, 1, 0, 1]);
        let mut collector = MetricsCollector::new();

        let m = collector.collect(&g, 0, 0);
        assert_eq!(m.edge_cut, 4);
        assert_eq!(m.migrations, 0);

        g.swap(0, 1);
        let m = collector.collect(&g, 1, 1);
        assert_eq!(
            m,
            RoundMetrics {
                round: 1,
                edge_cut: 2,
                swaps: 1,
                migrations: 2
            }
        );
        assert_eq!(collector.history().len(), 2);
    }

    #[test]
    fn test_best_keeps_earliest_minimum() {
        let mut g = cycle(&[0, 1, 0, 1]);
        let mut collector = MetricsCollector::new();

        collector.collect(&g, 0, 0);
        g.swap(0, 1);
        collector.collect(&g, 1, 1);
        collector.collect(&g, 2, 1);
        g.swap(0, 1);
        collector.collect(&g, 3, 2);

        assert_eq!(collector.best(), Some((1, 2)));
    }
}
