//! Ja-Be-Ja run configuration.

use super::acceptance::AcceptancePolicy;
use super::cooling::CoolingSchedule;
use super::sampler::NodeSelectionPolicy;

/// Configuration for a Ja-Be-Ja run.
///
/// Acceptance policy and cooling schedule are independent choices; every
/// combination is valid.
///
/// # Examples
///
/// ```
/// use jabeja::jabeja::{AcceptancePolicy, CoolingSchedule, JabejaConfig, NodeSelectionPolicy};
///
/// let config = JabejaConfig::default()
///     .with_rounds(500)
///     .with_initial_temperature(2.0)
///     .with_cooling(CoolingSchedule::Linear { delta: 0.01 })
///     .with_acceptance(AcceptancePolicy::StrictImprovement)
///     .with_node_selection(NodeSelectionPolicy::Hybrid)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JabejaConfig {
    /// Number of rounds. Every round visits every node once.
    pub rounds: usize,

    /// Temperature in effect during round 0. Must be at least 1.
    pub initial_temperature: f64,

    /// Temperature update applied after each round.
    pub cooling: CoolingSchedule,

    /// Exponent of the color-degree utility. Must be at least 1; higher
    /// values reward nodes that already sit among same-colored neighbours.
    pub alpha: f64,

    /// Where swap candidates come from.
    pub node_selection: NodeSelectionPolicy,

    /// Neighbours sampled per node visit (Local / Hybrid).
    pub local_sample_size: usize,

    /// Random nodes sampled per node visit (Random / Hybrid fallback).
    pub random_sample_size: usize,

    /// Rule for committing a swap.
    pub acceptance: AcceptancePolicy,

    /// Random seed for reproducibility. `None` draws a fresh seed, which is
    /// logged and reported in the result.
    pub seed: Option<u64>,
}

impl Default for JabejaConfig {
    fn default() -> Self {
        Self {
            rounds: 1000,
            initial_temperature: 2.0,
            cooling: CoolingSchedule::default(),
            alpha: 2.0,
            node_selection: NodeSelectionPolicy::default(),
            local_sample_size: 3,
            random_sample_size: 6,
            acceptance: AcceptancePolicy::default(),
            seed: None,
        }
    }
}

impl JabejaConfig {
    pub fn with_rounds(mut self, n: usize) -> Self {
        self.rounds = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_node_selection(mut self, policy: NodeSelectionPolicy) -> Self {
        self.node_selection = policy;
        self
    }

    /// Sets the local (neighbour) and random sample sizes.
    pub fn with_sample_sizes(mut self, local: usize, random: usize) -> Self {
        self.local_sample_size = local;
        self.random_sample_size = random;
        self
    }

    pub fn with_acceptance(mut self, acceptance: AcceptancePolicy) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.rounds == 0 {
            return Err("rounds must be positive".into());
        }
        if !(self.initial_temperature >= 1.0 && self.initial_temperature.is_finite()) {
            return Err(format!(
                "initial_temperature must be >= 1, got {}",
                self.initial_temperature
            ));
        }
        if !(self.alpha >= 1.0 && self.alpha.is_finite()) {
            return Err(format!("alpha must be >= 1, got {}", self.alpha));
        }
        if self.node_selection.uses_local() && self.local_sample_size == 0 {
            return Err(format!(
                "local_sample_size must be positive for {} selection",
                self.node_selection
            ));
        }
        if self.node_selection.uses_random() && self.random_sample_size == 0 {
            return Err(format!(
                "random_sample_size must be positive for {} selection",
                self.node_selection
            ));
        }
        self.cooling.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JabejaConfig::default();
        assert_eq!(config.rounds, 1000);
        assert!((config.initial_temperature - 2.0).abs() < 1e-10);
        assert!((config.alpha - 2.0).abs() < 1e-10);
        assert_eq!(config.node_selection, NodeSelectionPolicy::Hybrid);
        assert_eq!(config.acceptance, AcceptancePolicy::StrictImprovement);
        assert_eq!(config.cooling, CoolingSchedule::Linear { delta: 0.003 });
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validate_ok() {
        assert!(JabejaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_rounds() {
        let config = JabejaConfig::default().with_rounds(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = JabejaConfig::default().with_initial_temperature(0.5);
        assert!(config.validate().is_err());

        let config = JabejaConfig::default().with_initial_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = JabejaConfig::default().with_alpha(0.9);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_sample_sizes_follow_policy() {
        let config = JabejaConfig::default()
            .with_node_selection(NodeSelectionPolicy::Local)
            .with_sample_sizes(3, 0);
        assert!(config.validate().is_ok());

        let config = JabejaConfig::default()
            .with_node_selection(NodeSelectionPolicy::Hybrid)
            .with_sample_sizes(3, 0);
        assert!(config.validate().is_err());

        let config = JabejaConfig::default()
            .with_node_selection(NodeSelectionPolicy::Random)
            .with_sample_sizes(0, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_delegates_to_cooling() {
        let config = JabejaConfig::default().with_cooling(CoolingSchedule::geometric(1.5));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let config = JabejaConfig::default()
            .with_rounds(50)
            .with_initial_temperature(3.0)
            .with_cooling(CoolingSchedule::geometric_restart(0.9, 20))
            .with_alpha(1.0)
            .with_node_selection(NodeSelectionPolicy::Random)
            .with_sample_sizes(2, 8)
            .with_acceptance(AcceptancePolicy::Metropolis)
            .with_seed(7);

        assert_eq!(config.rounds, 50);
        assert_eq!(config.local_sample_size, 2);
        assert_eq!(config.random_sample_size, 8);
        assert_eq!(config.acceptance, AcceptancePolicy::Metropolis);
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }
}
