//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic; logic lives
//! in systems. Stat resolution layers invested values, equipment, and
//! active status deltas per `StatValueSource`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use vanguard_core::constants::TICK_RATE;
use vanguard_core::enums::{ActorKind, StatKind, StatValueSource};
use vanguard_core::skill::{SkillDefinition, SkillId, StatusEffectDef};
use vanguard_core::types::{ActorId, Position};

use vanguard_combat::actor::Combatant;
use vanguard_combat::status;

/// Marks the player's character.
#[derive(Debug, Clone, Copy)]
pub struct PlayerTag;

/// Marks a hostile mob.
#[derive(Debug, Clone, Copy)]
pub struct MonsterTag;

/// Stable identity component (survives respawn-wave entity churn).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Identity {
    pub id: ActorId,
    pub kind: ActorKind,
}

/// Liveness and health.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i64,
    pub max: i64,
}

impl Health {
    pub fn full(max: i64) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Apply damage, clamping at zero.
    pub fn take_damage(&mut self, amount: i64) {
        self.current = (self.current - amount.max(0)).max(0);
    }
}

/// The invested/equipment layers of an actor's stat stack.
/// Status deltas live on `ActiveStatuses` and are folded in at query
/// time for `FinalWithStatus`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatBlock {
    invested: HashMap<StatKind, f64>,
    equipment: HashMap<StatKind, f64>,
}

impl StatBlock {
    pub fn from_invested(pairs: impl IntoIterator<Item = (StatKind, f64)>) -> Self {
        Self {
            invested: pairs.into_iter().collect(),
            equipment: HashMap::new(),
        }
    }

    pub fn set_equipment(&mut self, stat: StatKind, value: f64) {
        self.equipment.insert(stat, value);
    }

    fn invested(&self, stat: StatKind) -> f64 {
        self.invested.get(&stat).copied().unwrap_or(0.0)
    }

    fn equipment_bonus(&self, stat: StatKind) -> f64 {
        self.equipment.get(&stat).copied().unwrap_or(0.0)
    }
}

/// One status effect currently on an actor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActiveStatus {
    pub def: StatusEffectDef,
    pub expires_tick: u64,
    /// Fractional periodic damage accrued but not yet applied.
    pub damage_accrual: f64,
}

/// Status effects on an actor, in application order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveStatuses {
    pub effects: Vec<ActiveStatus>,
}

impl ActiveStatuses {
    pub fn apply(&mut self, def: StatusEffectDef, now_tick: u64) {
        let expires_tick = now_tick + (def.duration_secs.max(0.0) * TICK_RATE as f64).round() as u64;
        self.effects.push(ActiveStatus {
            def,
            expires_tick,
            damage_accrual: 0.0,
        });
    }

    pub fn is_stunned(&self) -> bool {
        self.effects.iter().any(|s| status::blocks_action(s.def.kind))
    }
}

/// Resolve one stat at the requested layer of the stack.
pub fn resolve_stat(
    block: &StatBlock,
    statuses: &ActiveStatuses,
    stat: StatKind,
    source: StatValueSource,
) -> f64 {
    let invested = block.invested(stat);
    match source {
        StatValueSource::Invested => invested,
        StatValueSource::BaseFinal => invested + block.equipment_bonus(stat),
        StatValueSource::FinalWithStatus => {
            let status_delta: f64 = statuses
                .effects
                .iter()
                .map(|s| status::stat_delta(s.def.kind, s.def.magnitude, stat))
                .sum();
            invested + block.equipment_bonus(stat) + status_delta
        }
    }
}

/// Per-skill cooldown bookkeeping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cooldowns {
    ready_at: HashMap<SkillId, u64>,
}

impl Cooldowns {
    pub fn is_ready(&self, skill: SkillId, now_tick: u64) -> bool {
        self.ready_at.get(&skill).map_or(true, |&t| now_tick >= t)
    }

    pub fn trigger(&mut self, skill: &SkillDefinition, now_tick: u64) {
        let ticks = (skill.cooldown_secs.max(0.0) * TICK_RATE as f64).round() as u64;
        self.ready_at.insert(skill.id, now_tick + ticks);
    }
}

/// Skills this actor may select, in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillBook(pub Vec<SkillId>);

/// Attack cadence gate: no attack before this tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AttackGate {
    pub ready_at_tick: u64,
}

/// Monster aggro range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DetectRadius(pub f64);

/// Key into the drop table set, paid out on this monster's death.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loot {
    pub table: String,
}

/// Marks a dead actor awaiting corpse cleanup or revival.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dead {
    pub at_tick: u64,
}

/// Owned row snapshot of one combatant, implementing the combat port.
/// Built per attack attempt so strategies stay read-only over the world.
#[derive(Debug, Clone)]
pub struct CombatantRow {
    pub id: ActorId,
    pub kind: ActorKind,
    pub alive: bool,
    pub position: Position,
    pub stats: StatBlock,
    pub statuses: ActiveStatuses,
}

impl CombatantRow {
    /// Snapshot one entity's combat-relevant components. Returns `None`
    /// if the entity is gone or missing a combat component.
    pub fn from_world(world: &hecs::World, entity: hecs::Entity) -> Option<Self> {
        let identity = *world.get::<&Identity>(entity).ok()?;
        let position = *world.get::<&Position>(entity).ok()?;
        let health = *world.get::<&Health>(entity).ok()?;
        let stats = (*world.get::<&StatBlock>(entity).ok()?).clone();
        let statuses = (*world.get::<&ActiveStatuses>(entity).ok()?).clone();
        Some(Self {
            id: identity.id,
            kind: identity.kind,
            alive: health.is_alive(),
            position,
            stats,
            statuses,
        })
    }
}

impl Combatant for CombatantRow {
    fn id(&self) -> ActorId {
        self.id
    }

    fn kind(&self) -> ActorKind {
        self.kind
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn stat(&self, stat: StatKind, source: StatValueSource) -> f64 {
        resolve_stat(&self.stats, &self.statuses, stat, source)
    }

    fn position(&self) -> Position {
        self.position
    }
}
