//! Progress reporting and termination reasons shared by both engines.
//!
//! The engines never draw, print, or sleep; their only externally observable
//! effect besides the returned result is a synchronous callback after each
//! scored round. A visualizer (or logger, or nothing at all) implements
//! [`ProgressObserver`] and decides what to do with the notification.

/// Why an engine stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationReason {
    /// The best cost reached the configured target (for most objectives,
    /// exactly zero).
    TargetReached,

    /// The round/iteration budget or the wall-clock limit was exhausted.
    BudgetExhausted,

    /// The best cost did not improve for the configured number of
    /// consecutive rounds and injection was disabled.
    Stagnation,

    /// The cancellation token was set; the best solution found so far is
    /// still returned.
    Cancelled,
}

/// One-way sink for per-round progress.
///
/// Called synchronously exactly once per scored round, on the thread driving
/// the engine, with the best solution seen so far. The GA reports
/// [`Genome`](crate::ga::Genome)s; the ACO engine reports tours as `[usize]`
/// slices.
///
/// Closures work directly:
///
/// ```
/// use evocore::progress::ProgressObserver;
///
/// let mut history = Vec::new();
/// let mut observer = |round: usize, _tour: &[usize], cost: f64| {
///     history.push((round, cost));
/// };
/// observer.on_round(0, &[0, 1, 2], 10.0);
/// assert_eq!(history, vec![(0, 10.0)]);
/// ```
pub trait ProgressObserver<S: ?Sized> {
    /// Receives the zero-based round index, the best solution so far, and
    /// its cost.
    fn on_round(&mut self, round: usize, best: &S, best_cost: f64);
}

impl<S: ?Sized, F> ProgressObserver<S> for F
where
    F: FnMut(usize, &S, f64),
{
    fn on_round(&mut self, round: usize, best: &S, best_cost: f64) {
        self(round, best, best_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut obs = |round: usize, best: &[usize], cost: f64| {
                seen.push((round, best.to_vec(), cost));
            };
            obs.on_round(0, &[2, 0, 1], 3.5);
            obs.on_round(1, &[0, 1, 2], 2.0);
        }
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1], (1, vec![0, 1, 2], 2.0));
    }
}
