//! Decision system — builds a `BrainContext` per living actor and
//! collects their intents for this tick.
//!
//! Actors are processed in `ActorId` order so brain memory updates and
//! emitted events are deterministic regardless of archetype storage
//! order.

use std::collections::HashMap;

use hecs::World;

use vanguard_core::data::GameData;
use vanguard_core::enums::ActorKind;
use vanguard_core::events::CombatEvent;
use vanguard_core::intent::CombatIntent;
use vanguard_core::skill::{SkillId, SkillStatus};
use vanguard_core::types::{ActorId, Position};

use vanguard_combat::brain::{Brain, BrainContext, TargetInfo};

use crate::components::{Cooldowns, DetectRadius, Health, Identity, SkillBook};

struct ActorRow {
    id: ActorId,
    kind: ActorKind,
    alive: bool,
    position: Position,
    detect_radius: f64,
    skills: Vec<SkillStatus>,
}

/// Run one decision pass. `pointer_pick` and `requested_cast` are
/// player-only inputs already validated by the engine.
pub fn run(
    world: &World,
    brains: &mut HashMap<ActorId, Box<dyn Brain>>,
    data: &GameData,
    tick: u64,
    pointer_pick: Option<ActorId>,
    requested_cast: Option<SkillId>,
    events: &mut Vec<CombatEvent>,
) -> Vec<(ActorId, CombatIntent)> {
    // One pass to gather target-resolution facts for every actor,
    // dead ones included (brains must see a dead target to drop it).
    let mut infos: HashMap<ActorId, TargetInfo> = HashMap::new();
    let mut rows: Vec<ActorRow> = Vec::new();
    {
        let mut query = world.query::<(
            &Identity,
            &Position,
            &Health,
            &SkillBook,
            &Cooldowns,
            Option<&DetectRadius>,
        )>();
        for (_entity, (identity, position, health, book, cooldowns, detect)) in query.iter() {
            infos.insert(
                identity.id,
                TargetInfo {
                    id: identity.id,
                    position: *position,
                    alive: health.is_alive(),
                },
            );

            let skills = book
                .0
                .iter()
                .filter_map(|skill_id| data.skills.get(skill_id))
                .map(|def| SkillStatus {
                    id: def.id,
                    allowed_casters: def.allowed_casters,
                    ready: cooldowns.is_ready(def.id, tick),
                })
                .collect();

            rows.push(ActorRow {
                id: identity.id,
                kind: identity.kind,
                alive: health.is_alive(),
                position: *position,
                detect_radius: detect.map_or(0.0, |d| d.0),
                skills,
            });
        }
    }
    rows.sort_by_key(|r| r.id);

    let mut intents = Vec::with_capacity(rows.len());
    for row in &rows {
        let brain = match brains.get_mut(&row.id) {
            Some(b) => b,
            None => continue,
        };

        let previous_target = brain.target();
        let current_target = previous_target.and_then(|t| infos.get(&t).copied());

        let nearest_enemy = match row.kind {
            ActorKind::Monster => nearest_living(&infos, rows.iter(), row, ActorKind::Player),
            ActorKind::Player => None,
        };

        let (pick, cast) = match row.kind {
            ActorKind::Player => (
                pointer_pick.and_then(|p| infos.get(&p).copied()),
                requested_cast,
            ),
            ActorKind::Monster => (None, None),
        };

        let ctx = BrainContext {
            self_id: row.id,
            kind: row.kind,
            alive: row.alive,
            position: row.position,
            detect_radius: row.detect_radius,
            current_target,
            nearest_enemy,
            pointer_pick: pick,
            requested_cast: cast,
            skills: &row.skills,
        };

        let intent = brain.decide(&ctx);
        if intent.engage && previous_target != intent.target {
            if let Some(target) = intent.target {
                events.push(CombatEvent::EngageStart {
                    actor: row.id,
                    target,
                });
            }
        }
        intents.push((row.id, intent));
    }

    intents
}

fn nearest_living<'a>(
    infos: &HashMap<ActorId, TargetInfo>,
    rows: impl Iterator<Item = &'a ActorRow>,
    from: &ActorRow,
    kind: ActorKind,
) -> Option<TargetInfo> {
    rows.filter(|r| r.kind == kind && r.alive && r.id != from.id)
        .min_by(|a, b| {
            let da = from.position.horizontal_range_to(&a.position);
            let db = from.position.horizontal_range_to(&b.position);
            da.partial_cmp(&db)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.id.cmp(&b.id))
        })
        .and_then(|r| infos.get(&r.id).copied())
}
