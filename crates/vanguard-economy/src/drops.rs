//! Drop resolution — one combat-kill event into a concrete reward bundle.

use vanguard_core::drops::DropTable;
use vanguard_core::rewards::{Reward, RewardBundle};
use vanguard_core::rng::RandomSource;

/// Resolve a drop table into rewards for one kill.
///
/// Gold is expected-value sampled (floor plus a probabilistic extra
/// unit on the fractional remainder — variance-preserving, not a fixed
/// amount). Exp is a uniform integer in its range. Each item entry is
/// an independent Bernoulli trial; a monster can drop several item
/// kinds in one resolution, or none. Inverted ranges are swapped,
/// out-of-range chances clamped — designer data mistakes are
/// normalized, never rejected. Amounts <= 0 never enter the bundle.
pub fn resolve_drops(table: &DropTable, rng: &mut dyn RandomSource) -> RewardBundle {
    let mut bundle = RewardBundle::new();

    bundle.push(Reward::gold(sample_ev_amount(
        table.gold_ev_min,
        table.gold_ev_max,
        rng,
    )));

    let (exp_min, exp_max) = ordered(table.exp_min, table.exp_max);
    bundle.push(Reward::exp(rng.range_int(exp_min, exp_max)));

    for entry in &table.entries {
        let chance = entry.chance.clamp(0.0, 1.0);
        if rng.next01() < chance {
            let (min, max) = ordered(entry.count_min, entry.count_max);
            bundle.push(Reward::item(entry.item_id.clone(), rng.range_int(min, max)));
        }
    }

    bundle
}

/// Sample a whole-number payout whose long-run average equals a uniform
/// draw from the expected-value range: `floor(ev)` plus one more unit
/// with probability equal to the fractional remainder. Negative
/// expectations yield zero, not an error.
fn sample_ev_amount(ev_min: f64, ev_max: f64, rng: &mut dyn RandomSource) -> i64 {
    let (lo, hi) = if ev_min <= ev_max {
        (ev_min, ev_max)
    } else {
        (ev_max, ev_min)
    };

    let ev = lo + rng.next01() * (hi - lo);
    if ev <= 0.0 {
        return 0;
    }

    let base = ev.floor();
    let fraction = ev - base;
    let mut amount = base as i64;
    if fraction > 0.0 && rng.next01() < fraction {
        amount += 1;
    }
    amount
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
