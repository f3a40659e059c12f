//! Skill and status-effect designer data.
//!
//! Loaded once at startup, shared read-only by every caster.
//! Never mutated at runtime.

use serde::{Deserialize, Serialize};

use crate::enums::{CasterTag, DamageType, StatusEffectKind};

/// Designer-assigned skill identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillId(pub u32);

/// A status effect a skill applies on hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusEffectDef {
    pub kind: StatusEffectKind,
    /// Effect strength. Meaning depends on the kind (stat delta for
    /// Slow/Weaken, damage per second for Burn, unused for Stun).
    pub magnitude: f64,
    pub duration_secs: f64,
}

/// Immutable skill record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub id: SkillId,
    /// Which actor kinds may select/execute this skill.
    #[serde(default)]
    pub allowed_casters: CasterTag,
    #[serde(default)]
    pub damage_type: DamageType,
    /// Base power fed to the skill damage resolver.
    pub base_power: f64,
    /// Wind-up before the hit lands (seconds).
    #[serde(default)]
    pub cast_time_secs: f64,
    /// Maximum range to the target (meters).
    pub range: f64,
    pub cooldown_secs: f64,
    /// When set, the hit check is bypassed and the skill always connects.
    #[serde(default)]
    pub force_hit: bool,
    /// On-hit effects, applied in declaration order after a successful
    /// hit. A `null` slot is legal designer data and is skipped.
    #[serde(default)]
    pub on_hit_effects: Vec<Option<StatusEffectDef>>,
}

/// Per-caster readiness view of one skill, for skill selection.
#[derive(Debug, Clone, Copy)]
pub struct SkillStatus {
    pub id: SkillId,
    pub allowed_casters: CasterTag,
    /// Off cooldown and any resource gates satisfied.
    pub ready: bool,
}
