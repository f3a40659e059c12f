//! On-hit status effects.
//!
//! Effects live on the skill as an ordered list with legal `null`
//! slots. They are collected here and applied by the simulation layer,
//! once each, in declaration order, only after a successful hit.

use vanguard_core::enums::{StatKind, StatusEffectKind};
use vanguard_core::skill::{SkillDefinition, StatusEffectDef};

/// The skill's on-hit effects in declaration order, null slots skipped.
pub fn collect_on_hit_effects(skill: &SkillDefinition) -> Vec<StatusEffectDef> {
    skill.on_hit_effects.iter().filter_map(|e| *e).collect()
}

/// Stat delta contributed by one active effect to one stat dimension.
/// Debuffs subtract their magnitude from the affected stat.
pub fn stat_delta(kind: StatusEffectKind, magnitude: f64, stat: StatKind) -> f64 {
    match (kind, stat) {
        (StatusEffectKind::Slow, StatKind::MoveSpeed) => -magnitude,
        (StatusEffectKind::Weaken, StatKind::Attack) => -magnitude,
        _ => 0.0,
    }
}

/// Whether an effect prevents the bearer from acting.
pub fn blocks_action(kind: StatusEffectKind) -> bool {
    kind == StatusEffectKind::Stun
}

/// Damage per second dealt by an effect over its duration.
pub fn periodic_damage_per_sec(effect: &StatusEffectDef) -> f64 {
    match effect.kind {
        StatusEffectKind::Burn => effect.magnitude.max(0.0),
        _ => 0.0,
    }
}
