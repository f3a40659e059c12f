//! Loot system — detects deaths, resolves drop tables, pays the wallet.

use std::collections::BTreeSet;

use hecs::World;

use vanguard_core::data::GameData;
use vanguard_core::enums::RewardKind;
use vanguard_core::events::CombatEvent;
use vanguard_core::rng::RandomSource;
use vanguard_core::state::WalletView;
use vanguard_core::types::ActorId;

use vanguard_economy::drops::resolve_drops;

use crate::components::{Dead, Health, Identity, Loot};

pub fn run(
    world: &mut World,
    data: &GameData,
    rng: &mut dyn RandomSource,
    wallet: &mut WalletView,
    events: &mut Vec<CombatEvent>,
    tick: u64,
) {
    // Collect fresh deaths first; component insertion during a query
    // is not allowed. Sorted by id so payout order (and therefore RNG
    // consumption) is deterministic.
    let mut deaths: Vec<(hecs::Entity, ActorId, Option<String>)> = Vec::new();
    {
        let mut query = world.query::<(&Identity, &Health, Option<&Loot>, Option<&Dead>)>();
        for (entity, (identity, health, loot, dead)) in query.iter() {
            if health.is_alive() || dead.is_some() {
                continue;
            }
            deaths.push((entity, identity.id, loot.map(|l| l.table.clone())));
        }
    }
    deaths.sort_by_key(|d| d.1);

    for (entity, actor_id, loot_table) in deaths {
        let _ = world.insert_one(entity, Dead { at_tick: tick });
        events.push(CombatEvent::ActorDied { actor: actor_id });

        let table = match loot_table.as_deref().and_then(|k| data.drop_tables.get(k)) {
            Some(t) => t,
            None => continue,
        };

        let bundle = resolve_drops(table, rng);
        let gold = bundle.total_gold();
        let exp = bundle.total_exp();

        let mut item_ids: BTreeSet<String> = BTreeSet::new();
        for reward in bundle {
            match reward.kind {
                RewardKind::Gold => wallet.gold += reward.amount,
                RewardKind::Exp => wallet.exp += reward.amount,
                RewardKind::Item => {
                    if let Some(item_id) = reward.item_id {
                        *wallet.items.entry(item_id.clone()).or_insert(0) += reward.amount;
                        item_ids.insert(item_id);
                    }
                }
            }
        }

        events.push(CombatEvent::RewardGranted {
            source: actor_id,
            gold,
            exp,
            item_kinds: item_ids.len() as u32,
        });
    }
}
