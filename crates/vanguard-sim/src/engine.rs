//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player
//! commands, runs all systems, and produces `BattleSnapshot`s.
//! Completely headless, enabling deterministic testing: the injected
//! seed is the only source of non-determinism.

use std::collections::{HashMap, VecDeque};

use hecs::World;

use vanguard_core::commands::PlayerCommand;
use vanguard_core::constants::{DT, RESPAWN_DELAY_SECS, TICK_RATE};
use vanguard_core::data::{GameData, PlayerConfig};
use vanguard_core::events::CombatEvent;
use vanguard_core::skill::SkillId;
use vanguard_core::state::{BattleSnapshot, WalletView};
use vanguard_core::types::{ActorId, Position, SimTime};

use vanguard_combat::brain::{Brain, MonsterBrain, PlayerBrain};

use vanguard_economy::rng::SeededSource;

use crate::components::{Cooldowns, Health, Identity, MonsterTag, SkillBook};
use crate::picker::ScreenToWorldPicker;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Designer data, loaded once by the host.
    pub data: GameData,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            data: GameData::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all battle state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    paused: bool,
    stage_index: i32,
    rng: SeededSource,
    data: GameData,
    next_actor_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<CombatEvent>,
    wallet: WalletView,
    brains: HashMap<ActorId, Box<dyn Brain>>,
    entity_index: HashMap<ActorId, hecs::Entity>,
    despawn_buffer: Vec<hecs::Entity>,
    picker: ScreenToWorldPicker,
    player_id: Option<ActorId>,
    /// Tap resolved to a monster this tick, consumed by the next decision pass.
    pointer_pick: Option<ActorId>,
    /// Pending explicit skill cast, consumed by the next decision pass.
    requested_cast: Option<SkillId>,
    /// Tick at which the next wave spawns (set once the field is clear).
    respawn_at_tick: Option<u64>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            paused: false,
            stage_index: 0,
            rng: SeededSource::seed_from_u64(config.seed),
            data: config.data,
            next_actor_id: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            wallet: WalletView::default(),
            brains: HashMap::new(),
            entity_index: HashMap::new(),
            despawn_buffer: Vec::new(),
            picker: ScreenToWorldPicker::default(),
            player_id: None,
            pointer_pick: None,
            requested_cast: None,
            respawn_at_tick: None,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one fixed step and return the snapshot.
    pub fn tick(&mut self) -> BattleSnapshot {
        self.process_commands();

        if !self.paused {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.paused,
            self.stage_index,
            &self.wallet,
            &self.brains,
            events,
        )
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn wallet(&self) -> &WalletView {
        &self.wallet
    }

    pub fn player_id(&self) -> Option<ActorId> {
        self.player_id
    }

    /// The player brain's current target (for hosts and tests).
    pub fn player_target(&self) -> Option<ActorId> {
        self.player_id
            .and_then(|id| self.brains.get(&id))
            .and_then(|b| b.target())
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartBattle { stage_index } => {
                self.start_battle(stage_index);
            }
            PlayerCommand::TapAt { point } => {
                // Resolve screen -> world -> nearest living monster now;
                // the pick is consumed by the next decision pass.
                let candidates: Vec<(ActorId, Position)> = {
                    let mut query =
                        self.world
                            .query::<(&Identity, &Position, &Health, &MonsterTag)>();
                    query
                        .iter()
                        .filter(|(_, (_, _, health, _))| health.is_alive())
                        .map(|(_, (identity, position, _, _))| (identity.id, *position))
                        .collect()
                };
                self.pointer_pick = self.picker.pick(point, candidates);
            }
            PlayerCommand::CastSkill { skill_id } => {
                if self.validate_cast(skill_id) {
                    self.requested_cast = Some(skill_id);
                }
            }
            PlayerCommand::ClearTarget => {
                if let Some(brain) = self.player_id.and_then(|id| self.brains.get_mut(&id)) {
                    brain.forget();
                }
            }
            PlayerCommand::Pause => {
                self.paused = true;
            }
            PlayerCommand::Resume => {
                self.paused = false;
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let tick = self.time.tick;
        let pointer_pick = self.pointer_pick.take();
        let requested_cast = self.requested_cast.take();

        // 1. Decision: brains produce intents.
        let intents = systems::decision::run(
            &self.world,
            &mut self.brains,
            &self.data,
            tick,
            pointer_pick,
            requested_cast,
            &mut self.events,
        );
        // 2. Movement: engaged actors close to attack range.
        systems::movement::run(&mut self.world, &intents, &self.entity_index, &self.data, DT);
        // 3. Combat execution: hit check, damage, status application.
        systems::combat::run(
            &mut self.world,
            &intents,
            &self.entity_index,
            &self.data,
            tick,
            &mut self.events,
        );
        // 4. Status upkeep: periodic damage, expiry.
        systems::status::run(&mut self.world, tick, DT);
        // 5. Loot: deaths pay out through the drop resolver.
        systems::loot::run(
            &mut self.world,
            &self.data,
            &mut self.rng,
            &mut self.wallet,
            &mut self.events,
            tick,
        );
        // 6. Cleanup: corpse despawn, player revival.
        let removed = systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, tick);
        for id in removed {
            self.entity_index.remove(&id);
            self.brains.remove(&id);
        }
        // 7. Wave respawn once the field is clear.
        self.run_respawn(tick);
    }

    fn run_respawn(&mut self, tick: u64) {
        if self.stage_index == 0 {
            return;
        }

        let monsters_left = {
            let mut query = self.world.query::<&MonsterTag>();
            query.iter().count()
        };

        match self.respawn_at_tick {
            None => {
                if monsters_left == 0 {
                    let delay = (RESPAWN_DELAY_SECS * TICK_RATE as f64).round() as u64;
                    self.respawn_at_tick = Some(tick + delay);
                }
            }
            Some(at) if tick >= at => {
                self.respawn_at_tick = None;
                self.spawn_stage_wave();
            }
            Some(_) => {}
        }
    }

    fn start_battle(&mut self, stage_index: i32) {
        self.world.clear();
        self.brains.clear();
        self.entity_index.clear();
        self.events.clear();
        self.next_actor_id = 0;
        self.time = SimTime::default();
        self.stage_index = stage_index;
        self.respawn_at_tick = None;
        self.pointer_pick = None;
        self.requested_cast = None;
        self.paused = false;

        let player_config = self.data.player.clone().unwrap_or_else(default_player);
        let player_id = ActorId(self.next_actor_id);
        self.next_actor_id += 1;
        let entity = world_setup::spawn_player(&mut self.world, &player_config, player_id);
        self.entity_index.insert(player_id, entity);
        self.brains
            .insert(player_id, Box::new(PlayerBrain::default()));
        self.player_id = Some(player_id);

        self.spawn_stage_wave();
    }

    fn spawn_stage_wave(&mut self) {
        let spawned = world_setup::spawn_wave(
            &mut self.world,
            &self.data,
            self.stage_index,
            &mut self.rng,
            &mut self.next_actor_id,
            &mut self.events,
        );
        for (id, entity) in spawned {
            self.entity_index.insert(id, entity);
            self.brains.insert(id, Box::new(MonsterBrain::default()));
        }
    }

    /// An explicit cast is honored only when the player knows the
    /// skill, the skill exists, and it is off cooldown. Anything else
    /// is an ordinary no-op, not an error.
    fn validate_cast(&self, skill_id: SkillId) -> bool {
        let player_entity = match self.player_id.and_then(|id| self.entity_index.get(&id)) {
            Some(e) => *e,
            None => return false,
        };
        let known = self
            .world
            .get::<&SkillBook>(player_entity)
            .map_or(false, |book| book.0.contains(&skill_id));
        if !known || !self.data.skills.contains_key(&skill_id) {
            return false;
        }
        self.world
            .get::<&Cooldowns>(player_entity)
            .map_or(false, |cd| cd.is_ready(skill_id, self.time.tick))
    }
}

/// Fallback player baseline when the data set carries no player record.
fn default_player() -> PlayerConfig {
    PlayerConfig {
        max_health: 100,
        attack: 10.0,
        defense: 5.0,
        accuracy: 10.0,
        evasion: 5.0,
        move_speed: 3.0,
        skills: Vec::new(),
    }
}
