//! Attack execution strategies.
//!
//! A strategy consumes one intent against one target and produces an
//! `AttackOutcome` describing what happened. The simulation layer
//! applies the outcome (damage, then statuses) with buffered mutation,
//! so strategies stay read-only over both combatants.

use vanguard_core::constants::MELEE_RANGE;
use vanguard_core::enums::DamageType;
use vanguard_core::skill::{SkillDefinition, SkillId, StatusEffectDef};

use crate::actor::Combatant;
use crate::damage::{basic_attack_damage, skill_damage};
use crate::hit::{check_hit, HitCheckResult};
use crate::scaling::ScalingProfile;
use crate::status::collect_on_hit_effects;

/// What one executed attack did. `damage` is zero and `effects` empty
/// when the hit check failed — a miss mutates nothing downstream.
#[derive(Debug, Clone)]
pub struct AttackOutcome {
    pub hit: HitCheckResult,
    pub damage: i64,
    pub damage_type: DamageType,
    pub skill: Option<SkillId>,
    pub effects: Vec<StatusEffectDef>,
}

/// An interchangeable attack/skill executor.
///
/// `execute` returns `None` when preconditions fail (either combatant
/// dead, or a caster-ineligible skill) — a silent abort, not an error.
pub trait AttackStrategy {
    /// Maximum range at which this attack may be attempted.
    fn range(&self) -> f64;

    fn execute(&self, attacker: &dyn Combatant, target: &dyn Combatant) -> Option<AttackOutcome>;
}

/// Plain melee swing: hit check, physical damage, no status effects.
#[derive(Debug, Clone)]
pub struct BasicMeleeAttack {
    pub scaling: ScalingProfile,
}

impl AttackStrategy for BasicMeleeAttack {
    fn range(&self) -> f64 {
        MELEE_RANGE
    }

    fn execute(&self, attacker: &dyn Combatant, target: &dyn Combatant) -> Option<AttackOutcome> {
        if !attacker.is_alive() || !target.is_alive() {
            return None;
        }

        let hit = check_hit(attacker, target, DamageType::Physical, false);
        if !hit.is_hit {
            return Some(AttackOutcome {
                hit,
                damage: 0,
                damage_type: DamageType::Physical,
                skill: None,
                effects: Vec::new(),
            });
        }

        let damage = basic_attack_damage(attacker, target, &self.scaling);
        Some(AttackOutcome {
            hit,
            damage,
            damage_type: DamageType::Physical,
            skill: None,
            effects: Vec::new(),
        })
    }
}

/// Instant-damage skill: caster-eligibility gate, hit check honoring
/// the force-hit flag, scaled damage, on-hit effects in declaration
/// order.
#[derive(Debug, Clone)]
pub struct InstantDamageSkill<'a> {
    pub skill: &'a SkillDefinition,
    pub scaling: ScalingProfile,
}

impl AttackStrategy for InstantDamageSkill<'_> {
    fn range(&self) -> f64 {
        self.skill.range
    }

    fn execute(&self, attacker: &dyn Combatant, target: &dyn Combatant) -> Option<AttackOutcome> {
        if !attacker.is_alive() || !target.is_alive() {
            return None;
        }
        // Eligibility gate before anything else.
        if !self.skill.allowed_casters.allows(attacker.kind()) {
            return None;
        }

        let hit = check_hit(attacker, target, self.skill.damage_type, self.skill.force_hit);
        if !hit.is_hit {
            return Some(AttackOutcome {
                hit,
                damage: 0,
                damage_type: self.skill.damage_type,
                skill: Some(self.skill.id),
                effects: Vec::new(),
            });
        }

        let damage = skill_damage(attacker, target, self.skill, &self.scaling);
        Some(AttackOutcome {
            hit,
            damage,
            damage_type: self.skill.damage_type,
            skill: Some(self.skill.id),
            effects: collect_on_hit_effects(self.skill),
        })
    }
}
