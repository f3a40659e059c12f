//! Startup offline-progress settlement.

use vanguard_core::offline::{OfflineAfkInput, OfflineAfkResult, OfflineAfkRule, OfflineRateTable};
use vanguard_economy::offline::compute_offline;

/// Settle offline progress for the elapsed absence against the bundled
/// rate table.
pub fn settle(
    rates: &OfflineRateTable,
    elapsed_secs: f64,
    stage_index: i32,
    power_tier: i32,
    drop_carry: f64,
) -> OfflineAfkResult {
    let rule = OfflineAfkRule::default();
    let input = OfflineAfkInput {
        elapsed_secs,
        stage_index,
        power_tier,
        drop_carry,
    };
    compute_offline(&rule, &input, |stage, tier| rates.cell(stage, tier))
}

/// Human-readable welcome-back summary.
pub fn describe(result: &OfflineAfkResult) -> String {
    format!(
        "welcome back: {:.2}h away, +{} gold, +{} exp, {} drops (carry {:.3})",
        result.capped_hours, result.gold, result.exp, result.drop_count, result.next_drop_carry
    )
}
