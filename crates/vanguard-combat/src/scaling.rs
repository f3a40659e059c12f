//! Stat scaling — designer-authored formulas mapping a base value and a
//! stat magnitude to a derived number.

use serde::{Deserialize, Serialize};

use vanguard_core::enums::{StatKind, StatValueSource};

use crate::actor::Combatant;

/// The add-per-stat formula variant:
///
/// `result = base + add + max(0, stat) * per_stat`, clamped to `min`
/// and (when present) `max`. A negative stat magnitude contributes
/// zero — it never pulls the result below the `add` term.
///
/// Side-effect free; safe to evaluate every frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScalingProfile {
    /// Which stat feeds the formula.
    pub stat: StatKind,
    /// Which layer of the owner's stat stack to read.
    #[serde(default)]
    pub source: StatValueSource,
    #[serde(default)]
    pub add: f64,
    pub per_stat: f64,
    pub min: f64,
    #[serde(default)]
    pub max: Option<f64>,
}

impl ScalingProfile {
    /// Evaluate the formula for a stat magnitude already in hand.
    pub fn apply(&self, stat_magnitude: f64, base_value: f64) -> f64 {
        let scaled = base_value + self.add + stat_magnitude.max(0.0) * self.per_stat;
        let clamped = scaled.max(self.min);
        match self.max {
            Some(max) => clamped.min(max),
            None => clamped,
        }
    }

    /// Resolve the owner's stat through the configured source, then apply.
    pub fn evaluate(&self, owner: &dyn Combatant, base_value: f64) -> f64 {
        self.apply(owner.stat(self.stat, self.source), base_value)
    }
}
