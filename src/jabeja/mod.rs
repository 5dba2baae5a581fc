//! Ja-Be-Ja balanced graph partitioning.
//!
//! Every node repeatedly looks for a partner (among its neighbours, random
//! nodes, or both) and swaps colors with it when the swap makes both sit
//! among more same-colored neighbours. Because every move is a swap, the
//! size of each partition never changes. A temperature lets early rounds
//! accept swaps that are not strict improvements.
//!
//! The acceptance rule ([`AcceptancePolicy`]) and the temperature update
//! ([`CoolingSchedule`]) are independent configuration choices.
//!
//! # References
//!
//! - Rahimian, Payberah, Girdzijauskas, Jelasity & Haridi (2013),
//!   "JA-BE-JA: A Distributed Algorithm for Balanced Graph Partitioning"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod acceptance;
mod config;
mod cooling;
mod metrics;
mod runner;
mod sampler;
mod utility;

pub use acceptance::AcceptancePolicy;
pub use config::JabejaConfig;
pub use cooling::{CoolingSchedule, DEFAULT_MIN_TEMPERATURE};
pub use metrics::{MetricsCollector, RoundMetrics};
pub use runner::{run_round, JabejaResult, JabejaRunner, RoundStepper, SimulationState};
pub use sampler::{CandidateSampler, NodeSelectionPolicy};
pub use utility::{SwapEnergy, UtilityEvaluator};
