//! Combat execution system — consumes intents, runs the hit/damage/
//! status pipeline through attack strategies, applies the outcomes.

use std::collections::HashMap;

use hecs::World;

use vanguard_core::constants::{BASIC_ATTACK_INTERVAL_SECS, TICK_RATE};
use vanguard_core::data::GameData;
use vanguard_core::enums::{StatKind, StatValueSource};
use vanguard_core::events::CombatEvent;
use vanguard_core::intent::CombatIntent;
use vanguard_core::types::ActorId;

use vanguard_combat::scaling::ScalingProfile;
use vanguard_combat::strategy::{
    AttackOutcome, AttackStrategy, BasicMeleeAttack, InstantDamageSkill,
};

use crate::components::{ActiveStatuses, AttackGate, CombatantRow, Cooldowns, Health};

/// Both resolvers scale 1:1 with the attack stat; skills differ by
/// feeding their base power into the formula.
fn attack_scaling() -> ScalingProfile {
    ScalingProfile {
        stat: StatKind::Attack,
        source: StatValueSource::FinalWithStatus,
        add: 0.0,
        per_stat: 1.0,
        min: 1.0,
        max: None,
    }
}

pub fn run(
    world: &mut World,
    intents: &[(ActorId, CombatIntent)],
    index: &HashMap<ActorId, hecs::Entity>,
    data: &GameData,
    tick: u64,
    events: &mut Vec<CombatEvent>,
) {
    for (actor_id, intent) in intents {
        if !intent.engage {
            continue;
        }
        let target_id = match intent.target {
            Some(t) => t,
            None => continue,
        };
        let (entity, target_entity) = match (index.get(actor_id), index.get(&target_id)) {
            (Some(e), Some(t)) => (*e, *t),
            _ => continue,
        };

        let attacker = match CombatantRow::from_world(world, entity) {
            Some(row) => row,
            None => continue,
        };
        if !attacker.alive || attacker.statuses.is_stunned() {
            continue;
        }

        // Attack cadence gate.
        let gate_ready = world
            .get::<&AttackGate>(entity)
            .map_or(true, |g| tick >= g.ready_at_tick);
        if !gate_ready {
            continue;
        }

        let target = match CombatantRow::from_world(world, target_entity) {
            Some(row) => row,
            None => continue,
        };
        if !target.alive {
            continue;
        }

        // Pick the strategy and check its reach.
        let skill_def = intent.requested_skill.and_then(|s| data.skills.get(&s));
        let (outcome, reach) = match skill_def {
            Some(skill) => {
                let strategy = InstantDamageSkill {
                    skill,
                    scaling: attack_scaling(),
                };
                let reach = strategy.range();
                (strategy.execute(&attacker, &target), reach)
            }
            None => {
                let strategy = BasicMeleeAttack {
                    scaling: attack_scaling(),
                };
                let reach = strategy.range();
                (strategy.execute(&attacker, &target), reach)
            }
        };

        if attacker.position.horizontal_range_to(&target.position) > reach {
            // Still approaching; movement closes the gap.
            continue;
        }

        let outcome = match outcome {
            Some(o) => o,
            None => continue,
        };

        apply_outcome(
            world,
            *actor_id,
            target_id,
            entity,
            target_entity,
            &outcome,
            tick,
            events,
        );

        // Stamp cooldown and cadence. A miss still consumes the swing.
        if let Some(skill) = skill_def {
            if let Ok(mut cooldowns) = world.get::<&mut Cooldowns>(entity) {
                cooldowns.trigger(skill, tick);
            }
        }
        let interval = skill_def
            .map(|s| s.cast_time_secs.max(BASIC_ATTACK_INTERVAL_SECS))
            .unwrap_or(BASIC_ATTACK_INTERVAL_SECS);
        if let Ok(mut gate) = world.get::<&mut AttackGate>(entity) {
            gate.ready_at_tick = tick + (interval * TICK_RATE as f64).round() as u64;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn apply_outcome(
    world: &mut World,
    attacker_id: ActorId,
    target_id: ActorId,
    _attacker_entity: hecs::Entity,
    target_entity: hecs::Entity,
    outcome: &AttackOutcome,
    tick: u64,
    events: &mut Vec<CombatEvent>,
) {
    if !outcome.hit.is_hit {
        // A miss leaves the target completely untouched.
        events.push(CombatEvent::AttackMissed {
            attacker: attacker_id,
            target: target_id,
        });
        return;
    }

    if let Ok(mut health) = world.get::<&mut Health>(target_entity) {
        health.take_damage(outcome.damage);
    }
    events.push(CombatEvent::DamageDealt {
        attacker: attacker_id,
        target: target_id,
        amount: outcome.damage,
        damage_type: outcome.damage_type,
        skill: outcome.skill,
    });

    // Status effects land only after a connected hit, in declaration order.
    if !outcome.effects.is_empty() {
        if let Ok(mut statuses) = world.get::<&mut ActiveStatuses>(target_entity) {
            for def in &outcome.effects {
                statuses.apply(*def, tick);
                events.push(CombatEvent::StatusApplied {
                    target: target_id,
                    kind: def.kind,
                    duration_secs: def.duration_secs,
                });
            }
        }
    }
}
