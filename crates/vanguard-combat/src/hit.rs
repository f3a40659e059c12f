//! Hit check — the boolean gate deciding whether an attack connects.

use serde::{Deserialize, Serialize};

use vanguard_core::enums::{DamageType, StatKind, StatValueSource};

use crate::actor::Combatant;

/// Evasion is less effective against magic.
const MAGIC_EVASION_FACTOR: f64 = 0.5;

/// Outcome of one hit check. Transient, computed per attack attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitCheckResult {
    pub is_hit: bool,
    pub attacker_value: f64,
    pub defender_value: f64,
}

/// Compare the attacker's accuracy against the defender's evasion for
/// the given damage channel. `force_hit` bypasses the comparison but
/// the derived values are still reported for diagnostics.
pub fn check_hit(
    attacker: &dyn Combatant,
    defender: &dyn Combatant,
    damage_type: DamageType,
    force_hit: bool,
) -> HitCheckResult {
    let attacker_value = attacker.stat(StatKind::Accuracy, StatValueSource::FinalWithStatus);
    let evasion = defender.stat(StatKind::Evasion, StatValueSource::FinalWithStatus);
    let defender_value = match damage_type {
        DamageType::Physical => evasion,
        DamageType::Magic => evasion * MAGIC_EVASION_FACTOR,
    };

    HitCheckResult {
        is_hit: force_hit || attacker_value >= defender_value,
        attacker_value,
        defender_value,
    }
}
