//! Simulation clock — wall-clock time into fixed simulation steps.

use vanguard_core::constants::{DT, MAX_CATCHUP_STEPS};

/// Accumulates real elapsed time and drains it as whole fixed steps,
/// bounding catch-up work per call. Catch-up is capped, never
/// unbounded: if the host stalled long enough to owe more steps than
/// the bound, the remaining accumulated time is discarded so the
/// simulation never enters a feedback loop of perpetual lag.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    fixed_step: f64,
    max_steps: u32,
    accumulator: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DT, MAX_CATCHUP_STEPS)
    }
}

impl SimulationClock {
    pub fn new(fixed_step: f64, max_steps: u32) -> Self {
        Self {
            fixed_step,
            max_steps,
            accumulator: 0.0,
        }
    }

    /// Feed elapsed wall-clock seconds; returns how many fixed steps
    /// the caller should execute now (0..=max_steps).
    pub fn advance(&mut self, real_dt: f64) -> u32 {
        self.accumulator += real_dt.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.fixed_step && steps < self.max_steps {
            self.accumulator -= self.fixed_step;
            steps += 1;
        }

        // Bound reached with time still owed: discard the backlog.
        if steps == self.max_steps && self.accumulator >= self.fixed_step {
            self.accumulator = 0.0;
        }

        steps
    }

    /// Unconsumed time currently in the accumulator.
    pub fn pending_secs(&self) -> f64 {
        self.accumulator
    }
}
