//! Offline (AFK) progress calculator.
//!
//! Pure function of its inputs; the cell resolver is injected so the
//! calculator has no table-loading dependency. All math is f64 — the
//! drop carry must stay exact across very long elapsed times and many
//! short sessions.

use vanguard_core::offline::{OfflineAfkInput, OfflineAfkResult, OfflineAfkRule, OfflineRateCell};

/// Convert elapsed offline time into capped gold/exp/drop totals.
///
/// Elapsed time is clamped to `[0, max_hours_cap * 3600]`. Gold and
/// exp scale linearly with the capped duration. Item drops accrue
/// continuously with carry-forward: the fractional remainder of the
/// accrual is returned in `next_drop_carry` (always in `[0, 1)`) so
/// repeated short sessions neither lose nor double-count a fractional
/// unit. Stage index is floored to >= 1 and power tier to >= 0 before
/// the lookup; an unknown cell resolves to all-zero rates (no reward,
/// not an error).
pub fn compute_offline(
    rule: &OfflineAfkRule,
    input: &OfflineAfkInput,
    resolve_cell: impl Fn(i32, i32) -> OfflineRateCell,
) -> OfflineAfkResult {
    let cap_secs = rule.max_hours_cap.max(0.0) * 3600.0;
    let capped_secs = input.elapsed_secs.clamp(0.0, cap_secs);
    let carry = input.drop_carry.max(0.0);

    if capped_secs <= 0.0 {
        // Nothing accrued; the carry passes through untouched.
        return OfflineAfkResult {
            next_drop_carry: carry,
            ..Default::default()
        };
    }

    let cell = resolve_cell(input.stage_index.max(1), input.power_tier.max(0));

    let gold = (cell.gold_per_sec.max(0.0) * capped_secs).floor() as i64;
    let exp = (cell.exp_per_sec.max(0.0) * capped_secs).floor() as i64;

    let raw_drop = carry + cell.drop_per_sec.max(0.0) * capped_secs;
    let drop_count = raw_drop.floor() as i64;
    let next_drop_carry = raw_drop - raw_drop.floor();

    OfflineAfkResult {
        capped_secs,
        capped_hours: capped_secs / 3600.0,
        gold,
        exp,
        drop_count,
        next_drop_carry,
    }
}
