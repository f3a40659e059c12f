//! Damage resolvers — attack-type-specific, applied only after a hit.

use vanguard_core::constants::{DEFENSE_MITIGATION, MIN_DAMAGE};
use vanguard_core::enums::{StatKind, StatValueSource};
use vanguard_core::skill::SkillDefinition;

use crate::actor::Combatant;
use crate::scaling::ScalingProfile;

/// Basic attack: the attacker's scaled attack stat, reduced by the
/// defender's defense. A connected hit always deals at least
/// `MIN_DAMAGE`.
pub fn basic_attack_damage(
    attacker: &dyn Combatant,
    defender: &dyn Combatant,
    scaling: &ScalingProfile,
) -> i64 {
    let raw = scaling.evaluate(attacker, 0.0);
    mitigate(raw, defender)
}

/// Skill damage: the skill's base power scaled by the attacker's stat,
/// then mitigated the same way as a basic attack.
pub fn skill_damage(
    attacker: &dyn Combatant,
    defender: &dyn Combatant,
    skill: &SkillDefinition,
    scaling: &ScalingProfile,
) -> i64 {
    let raw = scaling.evaluate(attacker, skill.base_power);
    mitigate(raw, defender)
}

fn mitigate(raw: f64, defender: &dyn Combatant) -> i64 {
    let defense = defender
        .stat(StatKind::Defense, StatValueSource::FinalWithStatus)
        .max(0.0);
    let reduced = raw - defense * DEFENSE_MITIGATION;
    (reduced.floor() as i64).max(MIN_DAMAGE)
}
