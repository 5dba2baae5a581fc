//! Acceptance policies: which scored candidate, if any, to swap with.

use super::utility::SwapEnergy;
use rand::Rng;
use std::fmt;

/// Rule for committing one of a node's scored candidates.
///
/// Both policies look only at the scores, the temperature and (for
/// `Metropolis`) the random source; they never touch the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AcceptancePolicy {
    /// Canonical Ja-Be-Ja rule.
    ///
    /// Scores each candidate with `benefit = new_energy * T - old_energy`
    /// and picks the strictly largest positive benefit; ties keep the
    /// earliest candidate. While `T > 1` this favours exploration; at
    /// `T = 1` it only accepts improving swaps.
    ///
    /// Reference: Rahimian et al. (2013), Algorithm 1.
    #[default]
    StrictImprovement,

    /// Metropolis criterion on the best candidate.
    ///
    /// Picks the candidate maximizing `diff = new_energy - old_energy`
    /// (ties keep the earliest), then accepts it if `diff > 0` or with
    /// probability `exp(diff / T)` otherwise.
    ///
    /// Reference: Kirkpatrick, Gelatt & Vecchi (1983)
    Metropolis,
}

impl AcceptancePolicy {
    /// Returns the index of the partner to swap with, or `None` for no swap.
    pub fn select<R: Rng + ?Sized>(
        self,
        scored: &[SwapEnergy],
        temperature: f64,
        rng: &mut R,
    ) -> Option<usize> {
        match self {
            AcceptancePolicy::StrictImprovement => strict_improvement(scored, temperature),
            AcceptancePolicy::Metropolis => metropolis(scored, temperature, rng),
        }
    }
}

fn strict_improvement(scored: &[SwapEnergy], temperature: f64) -> Option<usize> {
    let mut best = None;
    let mut highest_benefit = 0.0;
    for energy in scored {
        let benefit = energy.new_energy * temperature - energy.old_energy;
        if benefit > highest_benefit {
            highest_benefit = benefit;
            best = Some(energy.candidate);
        }
    }
    best
}

fn metropolis<R: Rng + ?Sized>(scored: &[SwapEnergy], temperature: f64, rng: &mut R) -> Option<usize> {
    let mut best: Option<&SwapEnergy> = None;
    for energy in scored {
        if best.is_none_or(|b| energy.diff() > b.diff()) {
            best = Some(energy);
        }
    }

    let best = best?;
    let diff = best.diff();
    if diff > 0.0 {
        return Some(best.candidate);
    }
    let probability = (diff / temperature).exp();
    if rng.random::<f64>() < probability {
        Some(best.candidate)
    } else {
        None
    }
}

impl fmt::Display for AcceptancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AcceptancePolicy::StrictImprovement => "STRICT",
            AcceptancePolicy::Metropolis => "METROPOLIS",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn energy(candidate: usize, old_energy: f64, new_energy: f64) -> SwapEnergy {
        SwapEnergy {
            candidate,
            old_energy,
            new_energy,
        }
    }

    #[test]
    fn test_strict_picks_largest_benefit() {
        let scored = [energy(4, 2.0, 2.0), energy(7, 1.0, 5.0), energy(9, 0.0, 1.0)];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            AcceptancePolicy::StrictImprovement.select(&scored, 1.0, &mut rng),
            Some(7)
        );
    }

    #[test]
    fn test_strict_requires_positive_benefit() {
        let scored = [energy(1, 4.0, 3.0), energy(2, 4.0, 4.0)];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            AcceptancePolicy::StrictImprovement.select(&scored, 1.0, &mut rng),
            None
        );
    }

    #[test]
    fn test_strict_temperature_enables_exploration() {
        // Worsening swap at T = 1, positive benefit at T = 2.
        let scored = [energy(3, 4.0, 3.0)];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            AcceptancePolicy::StrictImprovement.select(&scored, 1.0, &mut rng),
            None
        );
        assert_eq!(
            AcceptancePolicy::StrictImprovement.select(&scored, 2.0, &mut rng),
            Some(3)
        );
    }

    #[test]
    fn test_strict_tie_keeps_earliest() {
        let scored = [energy(5, 1.0, 3.0), energy(6, 1.0, 3.0)];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            AcceptancePolicy::StrictImprovement.select(&scored, 1.0, &mut rng),
            Some(5)
        );
    }

    #[test]
    fn test_empty_candidates_never_swap() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(AcceptancePolicy::StrictImprovement.select(&[], 2.0, &mut rng), None);
        assert_eq!(AcceptancePolicy::Metropolis.select(&[], 2.0, &mut rng), None);
    }

    #[test]
    fn test_metropolis_accepts_improvement() {
        let scored = [energy(1, 3.0, 2.0), energy(2, 1.0, 4.0), energy(3, 0.0, 2.0)];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(AcceptancePolicy::Metropolis.select(&scored, 0.5, &mut rng), Some(2));
    }

    #[test]
    fn test_metropolis_tie_keeps_earliest() {
        let scored = [energy(8, 0.0, 1.0), energy(9, 1.0, 2.0)];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(AcceptancePolicy::Metropolis.select(&scored, 1.0, &mut rng), Some(8));
    }

    #[test]
    fn test_metropolis_rejects_steep_worsening_when_cold() {
        let scored = [energy(1, 100.0, 0.0)];
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(AcceptancePolicy::Metropolis.select(&scored, 1e-5, &mut rng), None);
        }
    }

    #[test]
    fn test_metropolis_accepts_worsening_sometimes_when_hot() {
        // exp(-1 / 2) ~ 0.61
        let scored = [energy(1, 1.0, 0.0)];
        let mut rng = StdRng::seed_from_u64(42);
        let accepted = (0..1000)
            .filter(|_| AcceptancePolicy::Metropolis.select(&scored, 2.0, &mut rng).is_some())
            .count();
        assert!(
            (450..750).contains(&accepted),
            "expected roughly 61% acceptance, got {accepted}/1000"
        );
    }

    #[test]
    fn test_metropolis_zero_diff_always_accepted() {
        let scored = [energy(4, 2.0, 2.0)];
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            assert_eq!(AcceptancePolicy::Metropolis.select(&scored, 0.1, &mut rng), Some(4));
        }
    }
}
