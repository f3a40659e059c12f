//! Snapshot builder — the complete visible state for one tick.

use std::collections::HashMap;

use hecs::World;

use vanguard_core::events::CombatEvent;
use vanguard_core::state::{ActorView, BattleSnapshot, WalletView};
use vanguard_core::types::{ActorId, Position, SimTime};

use vanguard_combat::brain::Brain;

use crate::components::{ActiveStatuses, Health, Identity};

pub fn build(
    world: &World,
    time: &SimTime,
    paused: bool,
    stage_index: i32,
    wallet: &WalletView,
    brains: &HashMap<ActorId, Box<dyn Brain>>,
    events: Vec<CombatEvent>,
) -> BattleSnapshot {
    let mut actors: Vec<ActorView> = Vec::new();
    {
        let mut query = world.query::<(&Identity, &Position, &Health, &ActiveStatuses)>();
        for (_entity, (identity, position, health, statuses)) in query.iter() {
            actors.push(ActorView {
                id: identity.id,
                kind: identity.kind,
                position: *position,
                health: health.current,
                max_health: health.max,
                alive: health.is_alive(),
                target: brains.get(&identity.id).and_then(|b| b.target()),
                statuses: statuses.effects.iter().map(|s| s.def.kind).collect(),
            });
        }
    }
    // Stable order: equal states must serialize to equal JSON.
    actors.sort_by_key(|a| a.id);

    BattleSnapshot {
        time: *time,
        paused,
        stage_index,
        actors,
        wallet: wallet.clone(),
        events,
    }
}
