//! Designer data records and JSON loaders.
//!
//! All designer assets are immutable value records parsed once at
//! startup. The core never persists or mutates them; load errors
//! propagate to the host as `serde_json::Error`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::drops::DropTable;
use crate::offline::{OfflineRateRow, OfflineRateTable};
use crate::skill::{SkillDefinition, SkillId};

/// Designer-authored monster archetype.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterArchetype {
    pub id: String,
    pub max_health: i64,
    pub attack: f64,
    pub defense: f64,
    pub accuracy: f64,
    pub evasion: f64,
    pub move_speed: f64,
    /// How far this monster notices the player (meters).
    #[serde(default = "default_detect_radius")]
    pub detect_radius: f64,
    /// Skills in declaration order; order matters for selection.
    #[serde(default)]
    pub skills: Vec<SkillId>,
    /// Key into the drop table set.
    pub drop_table: String,
}

fn default_detect_radius() -> f64 {
    crate::constants::DEFAULT_DETECT_RADIUS
}

/// Designer-authored player baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub max_health: i64,
    pub attack: f64,
    pub defense: f64,
    pub accuracy: f64,
    pub evasion: f64,
    pub move_speed: f64,
    #[serde(default)]
    pub skills: Vec<SkillId>,
}

/// One monster group within a stage wave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageSpawn {
    pub archetype: String,
    pub count: u32,
}

/// A stage: which monsters spawn per wave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDefinition {
    pub stage_index: i32,
    pub spawns: Vec<StageSpawn>,
}

/// Every designer asset the simulation needs, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct GameData {
    pub skills: HashMap<SkillId, SkillDefinition>,
    pub archetypes: HashMap<String, MonsterArchetype>,
    pub stages: HashMap<i32, StageDefinition>,
    pub drop_tables: HashMap<String, DropTable>,
    pub player: Option<PlayerConfig>,
}

impl GameData {
    pub fn from_parts(
        skills: Vec<SkillDefinition>,
        archetypes: Vec<MonsterArchetype>,
        stages: Vec<StageDefinition>,
        drop_tables: HashMap<String, DropTable>,
        player: PlayerConfig,
    ) -> Self {
        Self {
            skills: skills.into_iter().map(|s| (s.id, s)).collect(),
            archetypes: archetypes.into_iter().map(|a| (a.id.clone(), a)).collect(),
            stages: stages.into_iter().map(|s| (s.stage_index, s)).collect(),
            drop_tables,
            player: Some(player),
        }
    }
}

pub fn load_skills(json: &str) -> Result<Vec<SkillDefinition>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_player(json: &str) -> Result<PlayerConfig, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_monster_archetypes(json: &str) -> Result<Vec<MonsterArchetype>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_stages(json: &str) -> Result<Vec<StageDefinition>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Drop tables keyed by the id monsters reference them with.
pub fn load_drop_tables(json: &str) -> Result<HashMap<String, DropTable>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_offline_rates(json: &str) -> Result<OfflineRateTable, serde_json::Error> {
    let rows: Vec<OfflineRateRow> = serde_json::from_str(json)?;
    Ok(OfflineRateTable::from_rows(rows))
}
