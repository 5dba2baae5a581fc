//! Ja-Be-Ja round loop.
//!
//! # Algorithm
//!
//! For each round:
//! 1. Visit every node in ascending id order:
//!    a. sample candidates (local, random, or local then random)
//!    b. score each candidate swap with the utility evaluator
//!    c. let the acceptance policy pick at most one partner
//!    d. swap colors with it; later visits see the new colors
//! 2. Cool down once.
//! 3. Collect metrics and hand them to the reporter.
//!
//! # Reference
//!
//! Rahimian, Payberah, Girdzijauskas, Jelasity & Haridi (2013),
//! "JA-BE-JA: A Distributed Algorithm for Balanced Graph Partitioning", SASO.

use super::config::JabejaConfig;
use super::metrics::{MetricsCollector, RoundMetrics};
use super::sampler::CandidateSampler;
use super::utility::{SwapEnergy, UtilityEvaluator};
use crate::error::{JabejaError, Result};
use crate::graph::Graph;
use crate::report::{NullReporter, Reporter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Mutable search state carried from one round to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    /// Rounds completed so far.
    pub round: usize,
    /// Temperature used by the next round.
    pub temperature: f64,
    /// Swaps committed since the start of the run.
    pub swaps: u64,
}

impl SimulationState {
    pub fn new(config: &JabejaConfig) -> Self {
        Self {
            round: 0,
            temperature: config.initial_temperature,
            swaps: 0,
        }
    }
}

/// Executes rounds against a graph, reusing candidate buffers across visits.
pub struct RoundStepper<'c> {
    config: &'c JabejaConfig,
    sampler: CandidateSampler,
    evaluator: UtilityEvaluator,
    candidates: Vec<usize>,
    scored: Vec<SwapEnergy>,
}

impl<'c> RoundStepper<'c> {
    pub fn new(config: &'c JabejaConfig) -> Self {
        Self {
            config,
            sampler: CandidateSampler::new(config.local_sample_size, config.random_sample_size),
            evaluator: UtilityEvaluator::new(config.alpha),
            candidates: Vec::new(),
            scored: Vec::new(),
        }
    }

    /// Runs one full round and the cooldown that follows it.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        graph: &mut Graph,
        state: SimulationState,
        rng: &mut R,
    ) -> SimulationState {
        let temperature = state.temperature;
        let mut swaps = state.swaps;

        for p in 0..graph.len() {
            if let Some(q) = self.find_partner(graph, p, temperature, rng) {
                graph.swap_at(p, q);
                swaps += 1;
            }
        }

        SimulationState {
            round: state.round + 1,
            temperature: self.config.cooling.next_temperature(
                temperature,
                self.config.initial_temperature,
                state.round,
            ),
            swaps,
        }
    }

    /// Partner for node `p` under the configured selection policy, if any.
    pub fn find_partner<R: Rng + ?Sized>(
        &mut self,
        graph: &Graph,
        p: usize,
        temperature: f64,
        rng: &mut R,
    ) -> Option<usize> {
        let policy = self.config.node_selection;
        let mut partner = None;

        if policy.uses_local() {
            self.sampler.local(graph, p, rng, &mut self.candidates);
            partner = self.select(graph, p, temperature, rng);
        }
        if partner.is_none() && policy.uses_random() {
            self.sampler.random(graph, p, rng, &mut self.candidates);
            partner = self.select(graph, p, temperature, rng);
        }
        partner
    }

    fn select<R: Rng + ?Sized>(
        &mut self,
        graph: &Graph,
        p: usize,
        temperature: f64,
        rng: &mut R,
    ) -> Option<usize> {
        self.evaluator
            .evaluate_all(graph, p, &self.candidates, &mut self.scored);
        self.config.acceptance.select(&self.scored, temperature, rng)
    }
}

/// Runs a single round plus cooldown. See [`RoundStepper`] for repeated use.
pub fn run_round<R: Rng + ?Sized>(
    graph: &mut Graph,
    config: &JabejaConfig,
    state: SimulationState,
    rng: &mut R,
) -> SimulationState {
    RoundStepper::new(config).step(graph, state, rng)
}

/// Result of a Ja-Be-Ja run.
#[derive(Debug, Clone)]
pub struct JabejaResult {
    /// One snapshot per completed round.
    pub history: Vec<RoundMetrics>,

    /// Edge cut before round 0.
    pub initial_edge_cut: usize,

    /// Lowest edge cut after any round (initial cut for an empty history).
    pub best_edge_cut: usize,

    /// Round at which `best_edge_cut` was first reached.
    pub best_round: Option<usize>,

    /// Temperature after the last cooldown.
    pub final_temperature: f64,

    /// Total committed swaps.
    pub total_swaps: u64,

    /// Number of rounds actually run.
    pub rounds_completed: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Seed of the random source used for the run.
    pub seed: u64,
}

/// Executes the Ja-Be-Ja algorithm.
pub struct JabejaRunner;

impl JabejaRunner {
    /// Runs all configured rounds on `graph`, recoloring it in place.
    pub fn run(graph: &mut Graph, config: &JabejaConfig) -> Result<JabejaResult> {
        Self::run_with_cancel(graph, config, &mut NullReporter, None)
    }

    /// Runs and hands every round's snapshot to `reporter`.
    pub fn run_with_reporter(
        graph: &mut Graph,
        config: &JabejaConfig,
        reporter: &mut dyn Reporter,
    ) -> Result<JabejaResult> {
        Self::run_with_cancel(graph, config, reporter, None)
    }

    /// Runs with an optional cancellation token, checked before each round.
    pub fn run_with_cancel(
        graph: &mut Graph,
        config: &JabejaConfig,
        reporter: &mut dyn Reporter,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<JabejaResult> {
        config.validate().map_err(JabejaError::InvalidConfig)?;

        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random();
                log::info!("no seed configured, using {seed}");
                seed
            }
        };
        let mut rng = StdRng::seed_from_u64(seed);

        let initial_edge_cut = graph.edge_cut();
        log::info!(
            "starting {} rounds on {} nodes / {} edges: selection {}, acceptance {}, cooling {}, T0 {}, alpha {}",
            config.rounds,
            graph.len(),
            graph.edge_count(),
            config.node_selection,
            config.acceptance,
            config.cooling,
            config.initial_temperature,
            config.alpha,
        );
        log::info!("initial edge cut: {initial_edge_cut}");

        let mut stepper = RoundStepper::new(config);
        let mut collector = MetricsCollector::new();
        let mut state = SimulationState::new(config);
        let mut cancelled = false;

        while state.round < config.rounds {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    log::info!("cancelled after {} rounds", state.round);
                    cancelled = true;
                    break;
                }
            }

            let round = state.round;
            state = stepper.step(graph, state, &mut rng);
            let metrics = collector.collect(graph, round, state.swaps);
            log::debug!(
                "round: {}, edge cut: {}, swaps: {}, migrations: {}",
                metrics.round,
                metrics.edge_cut,
                metrics.swaps,
                metrics.migrations
            );
            reporter.report(&metrics)?;
        }
        reporter.finish()?;

        let (best_round, best_edge_cut) = match collector.best() {
            Some((round, cut)) => (Some(round), cut),
            None => (None, initial_edge_cut),
        };
        log::info!(
            "finished {} rounds: best edge cut {best_edge_cut}, {} swaps",
            state.round,
            state.swaps
        );

        Ok(JabejaResult {
            history: collector.into_history(),
            initial_edge_cut,
            best_edge_cut,
            best_round,
            final_temperature: state.temperature,
            total_swaps: state.swaps,
            rounds_completed: state.round,
            cancelled,
            seed,
        })
    }
}
