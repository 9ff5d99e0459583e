//! Mutation-rate schedules.
//!
//! The rate is a pure function of the round index — no shared mutable state —
//! so a schedule can be evaluated out of order, from tests, or from a
//! restarted engine and always agree with itself.

use crate::error::{Error, Result};

/// Per-round mutation rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationSchedule {
    /// The same rate every round.
    Constant(f64),

    /// Three phases: a high exploration rate, a low refinement rate, then
    /// geometric decay of the refinement rate.
    Phased {
        /// Rate during the first `explore_rounds` rounds.
        explore_rate: f64,
        /// Length of the exploration phase.
        explore_rounds: usize,
        /// Rate during the following `refine_rounds` rounds.
        refine_rate: f64,
        /// Length of the refinement phase.
        refine_rounds: usize,
        /// Per-round decay factor applied after both phases end.
        decay: f64,
    },
}

impl Default for MutationSchedule {
    fn default() -> Self {
        MutationSchedule::Constant(0.1)
    }
}

impl MutationSchedule {
    /// A phased schedule with the classic explore/refine/decay shape:
    /// 0.15 for 50 rounds, 0.01 for 50 rounds, then ×0.95 per round.
    pub fn phased() -> Self {
        MutationSchedule::Phased {
            explore_rate: 0.15,
            explore_rounds: 50,
            refine_rate: 0.01,
            refine_rounds: 50,
            decay: 0.95,
        }
    }

    /// The mutation rate for a round.
    pub fn rate(&self, round: usize) -> f64 {
        match *self {
            MutationSchedule::Constant(rate) => rate,
            MutationSchedule::Phased {
                explore_rate,
                explore_rounds,
                refine_rate,
                refine_rounds,
                decay,
            } => {
                if round < explore_rounds {
                    explore_rate
                } else if round < explore_rounds + refine_rounds {
                    refine_rate
                } else {
                    let past = (round - explore_rounds - refine_rounds + 1) as i32;
                    refine_rate * decay.powi(past)
                }
            }
        }
    }

    /// Validates all rates and the decay factor.
    pub fn validate(&self) -> Result<()> {
        let check_rate = |name: &str, rate: f64| -> Result<()> {
            if !(0.0..=1.0).contains(&rate) || !rate.is_finite() {
                return Err(Error::Config(format!("{name} must be in [0, 1], got {rate}")));
            }
            Ok(())
        };
        match *self {
            MutationSchedule::Constant(rate) => check_rate("mutation rate", rate),
            MutationSchedule::Phased {
                explore_rate,
                refine_rate,
                decay,
                ..
            } => {
                check_rate("explore_rate", explore_rate)?;
                check_rate("refine_rate", refine_rate)?;
                if !(decay > 0.0 && decay <= 1.0) {
                    return Err(Error::Config(format!(
                        "decay must be in (0, 1], got {decay}"
                    )));
                }
                Ok(())
            }
        }
    }
}
