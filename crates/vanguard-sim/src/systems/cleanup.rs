//! Cleanup system — corpse despawn and player revival.

use hecs::World;

use vanguard_core::constants::{CORPSE_LINGER_SECS, DT, RESPAWN_DELAY_SECS};
use vanguard_core::types::ActorId;

use crate::components::{ActiveStatuses, Dead, Health, Identity, MonsterTag};

/// Despawn monster corpses past their linger time and revive the
/// player after the respawn delay. Returns the ids of despawned
/// monsters so the engine can prune its brain and entity maps.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<hecs::Entity>, tick: u64) -> Vec<ActorId> {
    let mut removed = Vec::new();
    let mut revive: Vec<hecs::Entity> = Vec::new();
    {
        let mut query = world.query::<(&Identity, &Dead, Option<&MonsterTag>)>();
        for (entity, (identity, dead, monster)) in query.iter() {
            let dead_secs = tick.saturating_sub(dead.at_tick) as f64 * DT;
            if monster.is_some() {
                if dead_secs >= CORPSE_LINGER_SECS {
                    despawn_buffer.push(entity);
                    removed.push(identity.id);
                }
            } else if dead_secs >= RESPAWN_DELAY_SECS {
                revive.push(entity);
            }
        }
    }

    for entity in revive {
        let _ = world.remove_one::<Dead>(entity);
        if let Ok(mut health) = world.get::<&mut Health>(entity) {
            health.current = health.max;
        }
        if let Ok(mut statuses) = world.get::<&mut ActiveStatuses>(entity) {
            statuses.effects.clear();
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    removed.sort();
    removed
}
