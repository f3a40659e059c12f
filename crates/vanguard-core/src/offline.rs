//! Offline (AFK) progress data model.
//!
//! All accrual math is f64: the drop carry must survive very large
//! elapsed times and many short sessions without precision loss.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Cap policy for offline accrual.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OfflineAfkRule {
    /// Maximum rewarded offline duration in hours.
    pub max_hours_cap: f64,
}

impl Default for OfflineAfkRule {
    fn default() -> Self {
        Self {
            max_hours_cap: crate::constants::DEFAULT_AFK_CAP_HOURS,
        }
    }
}

/// Input to one offline computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OfflineAfkInput {
    /// Wall-clock seconds since the player was last seen.
    pub elapsed_secs: f64,
    pub stage_index: i32,
    pub power_tier: i32,
    /// Fractional drop remainder carried from the previous computation.
    pub drop_carry: f64,
}

/// Per-second reward rates for one (stage, tier) cell.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OfflineRateCell {
    pub gold_per_sec: f64,
    pub exp_per_sec: f64,
    pub drop_per_sec: f64,
}

/// Result of one offline computation.
///
/// Invariants: `capped_secs` is `elapsed_secs` clamped to
/// `[0, max_hours_cap * 3600]`; `next_drop_carry` is in `[0, 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OfflineAfkResult {
    pub capped_secs: f64,
    pub capped_hours: f64,
    pub gold: i64,
    pub exp: i64,
    pub drop_count: i64,
    pub next_drop_carry: f64,
}

/// One row of the designer-authored rate table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OfflineRateRow {
    pub stage_index: i32,
    pub power_tier: i32,
    #[serde(flatten)]
    pub cell: OfflineRateCell,
}

/// Reward-rate table keyed by exact (stage, tier) match.
#[derive(Debug, Clone, Default)]
pub struct OfflineRateTable {
    cells: HashMap<(i32, i32), OfflineRateCell>,
}

impl OfflineRateTable {
    pub fn from_rows(rows: impl IntoIterator<Item = OfflineRateRow>) -> Self {
        let cells = rows
            .into_iter()
            .map(|r| ((r.stage_index, r.power_tier), r.cell))
            .collect();
        Self { cells }
    }

    /// Exact-match lookup. A missing cell yields the all-zero cell
    /// (no reward), not an error.
    pub fn cell(&self, stage_index: i32, power_tier: i32) -> OfflineRateCell {
        self.cells
            .get(&(stage_index, power_tier))
            .copied()
            .unwrap_or_default()
    }
}
