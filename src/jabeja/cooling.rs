//! Cooling schedules applied once per round.

use std::fmt;

/// Default lower bound for geometric schedules.
pub const DEFAULT_MIN_TEMPERATURE: f64 = 1e-5;

/// Temperature update applied after every round.
///
/// # References
///
/// - Linear: Rahimian et al. (2013), Section 4.3
/// - Geometric: standard textbook approach
/// - Restarts: Ingber (1989), "Very fast simulated re-annealing"
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// `T <- max(1, T - delta)`.
    Linear {
        /// Amount subtracted per round. Typical: 0.001–0.01.
        delta: f64,
    },

    /// `T <- max(min_temperature, T * alpha)`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
        /// Floor that keeps `exp(diff / T)` well defined.
        min_temperature: f64,
    },

    /// Geometric cooling, reset to the initial temperature at the end of
    /// every `period`-th round.
    GeometricRestart {
        /// Cooling factor in (0, 1).
        alpha: f64,
        /// Floor between restarts.
        min_temperature: f64,
        /// Rounds between restarts.
        period: usize,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Linear { delta: 0.003 }
    }
}

impl CoolingSchedule {
    /// Geometric cooling with the default floor.
    pub fn geometric(alpha: f64) -> Self {
        CoolingSchedule::Geometric {
            alpha,
            min_temperature: DEFAULT_MIN_TEMPERATURE,
        }
    }

    /// Geometric cooling with restarts and the default floor.
    pub fn geometric_restart(alpha: f64, period: usize) -> Self {
        CoolingSchedule::GeometricRestart {
            alpha,
            min_temperature: DEFAULT_MIN_TEMPERATURE,
            period,
        }
    }

    /// Lowest temperature the schedule can produce.
    pub fn floor(&self) -> f64 {
        match *self {
            CoolingSchedule::Linear { .. } => 1.0,
            CoolingSchedule::Geometric {
                min_temperature, ..
            }
            | CoolingSchedule::GeometricRestart {
                min_temperature, ..
            } => min_temperature,
        }
    }

    /// Temperature for the round after `completed_round` (0-based).
    pub fn next_temperature(&self, temperature: f64, initial: f64, completed_round: usize) -> f64 {
        match *self {
            CoolingSchedule::Linear { delta } => (temperature - delta).max(1.0),

            CoolingSchedule::Geometric {
                alpha,
                min_temperature,
            } => (temperature * alpha).max(min_temperature),

            CoolingSchedule::GeometricRestart {
                alpha,
                min_temperature,
                period,
            } => {
                if (completed_round + 1) % period == 0 {
                    log::debug!("round {completed_round}: temperature restart to {initial}");
                    initial
                } else {
                    (temperature * alpha).max(min_temperature)
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match *self {
            CoolingSchedule::Linear { delta } => {
                if !(delta >= 0.0 && delta.is_finite()) {
                    return Err(format!("linear delta must be non-negative, got {delta}"));
                }
            }
            CoolingSchedule::Geometric {
                alpha,
                min_temperature,
            } => validate_geometric(alpha, min_temperature)?,
            CoolingSchedule::GeometricRestart {
                alpha,
                min_temperature,
                period,
            } => {
                validate_geometric(alpha, min_temperature)?;
                if period == 0 {
                    return Err("restart period must be positive".into());
                }
            }
        }
        Ok(())
    }
}

fn validate_geometric(alpha: f64, min_temperature: f64) -> Result<(), String> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(format!("geometric alpha must be in (0, 1), got {alpha}"));
    }
    if !(min_temperature > 0.0) {
        return Err(format!(
            "min_temperature must be positive, got {min_temperature}"
        ));
    }
    Ok(())
}

impl fmt::Display for CoolingSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CoolingSchedule::Linear { delta } => write!(f, "LINEAR-{delta}"),
            CoolingSchedule::Geometric { alpha, .. } => write!(f, "GEOMETRIC-{alpha}"),
            CoolingSchedule::GeometricRestart { alpha, period, .. } => {
                write!(f, "RESTART-{alpha}-{period}")
            }
        }
    }
}
