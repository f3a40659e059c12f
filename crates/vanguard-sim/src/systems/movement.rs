//! Movement system — engaged actors close to attack range.
//!
//! Moves are collected first and applied after, so position reads stay
//! consistent within one pass.

use std::collections::HashMap;

use hecs::World;

use vanguard_core::constants::MELEE_RANGE;
use vanguard_core::data::GameData;
use vanguard_core::enums::{StatKind, StatValueSource};
use vanguard_core::intent::CombatIntent;
use vanguard_core::types::{ActorId, Position};

use crate::components::{resolve_stat, ActiveStatuses, Health, StatBlock};

pub fn run(
    world: &mut World,
    intents: &[(ActorId, CombatIntent)],
    index: &HashMap<ActorId, hecs::Entity>,
    data: &GameData,
    dt: f64,
) {
    let mut moves: Vec<(hecs::Entity, Position)> = Vec::new();

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

        let alive = world.get::<&Health>(entity).map_or(false, |h| h.is_alive());
        if !alive {
            continue;
        }
        let stunned = world
            .get::<&ActiveStatuses>(entity)
            .map_or(false, |s| s.is_stunned());
        if stunned {
            continue;
        }

        let position = match world.get::<&Position>(entity) {
            Ok(p) => *p,
            Err(_) => continue,
        };
        let target_position = match world.get::<&Position>(target_entity) {
            Ok(p) => *p,
            Err(_) => continue,
        };

        // Approach until inside the reach of whatever we intend to use.
        let reach = intent
            .requested_skill
            .and_then(|s| data.skills.get(&s))
            .map_or(MELEE_RANGE, |skill| skill.range);

        let distance = position.horizontal_range_to(&target_position);
        if distance <= reach {
            continue;
        }

        let speed = {
            let stats = match world.get::<&StatBlock>(entity) {
                Ok(s) => s,
                Err(_) => continue,
            };
            let statuses = match world.get::<&ActiveStatuses>(entity) {
                Ok(s) => s,
                Err(_) => continue,
            };
            resolve_stat(
                &stats,
                &statuses,
                StatKind::MoveSpeed,
                StatValueSource::FinalWithStatus,
            )
            .max(0.0)
        };
        if speed <= 0.0 {
            continue;
        }

        let step = (speed * dt).min(distance - reach);
        let dx = (target_position.x - position.x) / distance;
        let dz = (target_position.z - position.z) / distance;
        moves.push((
            entity,
            Position::new(position.x + dx * step, position.y, position.z + dz * step),
        ));
    }

    for (entity, new_position) in moves {
        if let Ok(mut position) = world.get::<&mut Position>(entity) {
            *position = new_position;
        }
    }
}
