//! Bundled designer data, compiled into the binary.

use vanguard_core::data::{self, GameData};
use vanguard_core::offline::OfflineRateTable;

const SKILLS_JSON: &str = include_str!("../data/skills.json");
const PLAYER_JSON: &str = include_str!("../data/player.json");
const MONSTERS_JSON: &str = include_str!("../data/monsters.json");
const STAGES_JSON: &str = include_str!("../data/stages.json");
const DROP_TABLES_JSON: &str = include_str!("../data/drop_tables.json");
const OFFLINE_RATES_JSON: &str = include_str!("../data/offline_rates.json");

/// Parse all bundled combat/economy data into one `GameData`.
pub fn load_game_data() -> Result<GameData, serde_json::Error> {
    Ok(GameData::from_parts(
        data::load_skills(SKILLS_JSON)?,
        data::load_monster_archetypes(MONSTERS_JSON)?,
        data::load_stages(STAGES_JSON)?,
        data::load_drop_tables(DROP_TABLES_JSON)?,
        data::load_player(PLAYER_JSON)?,
    ))
}

pub fn load_offline_rates() -> Result<OfflineRateTable, serde_json::Error> {
    data::load_offline_rates(OFFLINE_RATES_JSON)
}
