//! Entity spawn factories for setting up the battle world.

use hecs::World;

use vanguard_core::data::{GameData, MonsterArchetype, PlayerConfig};
use vanguard_core::enums::{ActorKind, StatKind};
use vanguard_core::events::CombatEvent;
use vanguard_core::rng::RandomSource;
use vanguard_core::types::{ActorId, Position};

use crate::components::*;

/// Ring within which wave monsters spawn around the player.
const SPAWN_RING_MIN: f64 = 4.0;
const SPAWN_RING_MAX: f64 = 9.0;

/// Spawn the player's character at the origin.
pub fn spawn_player(world: &mut World, config: &PlayerConfig, id: ActorId) -> hecs::Entity {
    let stats = StatBlock::from_invested([
        (StatKind::Attack, config.attack),
        (StatKind::Defense, config.defense),
        (StatKind::Accuracy, config.accuracy),
        (StatKind::Evasion, config.evasion),
        (StatKind::MaxHealth, config.max_health as f64),
        (StatKind::MoveSpeed, config.move_speed),
    ]);

    world.spawn((
        PlayerTag,
        Identity {
            id,
            kind: ActorKind::Player,
        },
        Position::new(0.0, 0.0, 0.0),
        Health::full(config.max_health),
        stats,
        ActiveStatuses::default(),
        Cooldowns::default(),
        SkillBook(config.skills.clone()),
        AttackGate::default(),
    ))
}

/// Spawn a single monster from its archetype at the given position.
pub fn spawn_monster(
    world: &mut World,
    archetype: &MonsterArchetype,
    id: ActorId,
    position: Position,
) -> hecs::Entity {
    let stats = StatBlock::from_invested([
        (StatKind::Attack, archetype.attack),
        (StatKind::Defense, archetype.defense),
        (StatKind::Accuracy, archetype.accuracy),
        (StatKind::Evasion, archetype.evasion),
        (StatKind::MaxHealth, archetype.max_health as f64),
        (StatKind::MoveSpeed, archetype.move_speed),
    ]);

    world.spawn((
        MonsterTag,
        Identity {
            id,
            kind: ActorKind::Monster,
        },
        position,
        Health::full(archetype.max_health),
        stats,
        ActiveStatuses::default(),
        Cooldowns::default(),
        SkillBook(archetype.skills.clone()),
        AttackGate::default(),
        DetectRadius(archetype.detect_radius),
        Loot {
            table: archetype.drop_table.clone(),
        },
    ))
}

/// Spawn one stage wave at random bearings around the player.
/// Unknown archetype references are skipped (designer data oddity, not
/// an error). Returns the spawned (id, entity) pairs in spawn order.
pub fn spawn_wave(
    world: &mut World,
    data: &GameData,
    stage_index: i32,
    rng: &mut dyn RandomSource,
    next_actor_id: &mut u32,
    events: &mut Vec<CombatEvent>,
) -> Vec<(ActorId, hecs::Entity)> {
    let mut spawned = Vec::new();

    let stage = match data.stages.get(&stage_index) {
        Some(s) => s,
        None => return spawned,
    };

    for group in &stage.spawns {
        let archetype = match data.archetypes.get(&group.archetype) {
            Some(a) => a,
            None => continue,
        };

        for _ in 0..group.count {
            let bearing = rng.next01() * std::f64::consts::TAU;
            let radius = SPAWN_RING_MIN + rng.next01() * (SPAWN_RING_MAX - SPAWN_RING_MIN);
            let position = Position::new(radius * bearing.sin(), 0.0, radius * bearing.cos());

            let id = ActorId(*next_actor_id);
            *next_actor_id += 1;

            let entity = spawn_monster(world, archetype, id, position);
            events.push(CombatEvent::MonsterSpawned { actor: id });
            spawned.push((id, entity));
        }
    }

    spawned
}
