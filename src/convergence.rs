use serde::{Deserialize, Serialize};

use crate::distance::euclidian_distance;
use crate::point::Point;

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Seeding,
    Iterating { iteration: usize },
    Converged { iterations: usize },
    MaxIterationsReached { iterations: usize },
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunState::Converged { .. } | RunState::MaxIterationsReached { .. }
        )
    }
}

/// How a finished run stopped. Both outcomes carry a valid partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Converged,
    MaxIterationsReached,
}

/// Largest distance any single centroid moved between two passes.
pub fn max_centroid_shift(previous: &[Point], next: &[Point]) -> f64 {
    previous
        .iter()
        .zip(next.iter())
        .map(|(a, b)| euclidian_distance(a, b))
        .fold(0.0, f64::max)
}

#[derive(Debug, Clone)]
pub struct ConvergenceChecker {
    tolerance: f64,
    max_iterations: usize,
    state: RunState,
}

impl ConvergenceChecker {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            state: RunState::Seeding,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Seeding is done; the first pass may start.
    pub fn start(&mut self) {
        self.state = RunState::Iterating { iteration: 0 };
    }

    /// Records one finished assign+update pass and returns the new state.
    pub fn check(&mut self, previous: &[Point], next: &[Point]) -> RunState {
        let iteration = match self.state {
            RunState::Iterating { iteration } => iteration + 1,
            terminal => return terminal,
        };

        let shift = max_centroid_shift(previous, next);
        log::debug!("iteration {}: max centroid shift {}", iteration, shift);

        self.state = if shift <= self.tolerance {
            RunState::Converged {
                iterations: iteration,
            }
        } else if iteration >= self.max_iterations {
            RunState::MaxIterationsReached {
                iterations: iteration,
            }
        } else {
            RunState::Iterating { iteration }
        };
        self.state
    }

    pub fn status(&self) -> Option<RunStatus> {
        match self.state {
            RunState::Converged { .. } => Some(RunStatus::Converged),
            RunState::MaxIterationsReached { .. } => Some(RunStatus::MaxIterationsReached),
            _ => None,
        }
    }
}
