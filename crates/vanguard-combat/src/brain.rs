//! Decision brains — per-actor decision layer producing intents.
//!
//! Brains are pure with respect to game state except for brain-local
//! memory (the remembered target). The simulation builds a
//! `BrainContext` from resolved world data each cycle; brains never
//! query the world themselves.

use vanguard_core::enums::ActorKind;
use vanguard_core::intent::CombatIntent;
use vanguard_core::skill::{SkillId, SkillStatus};
use vanguard_core::types::{ActorId, Position};

/// Resolved facts about a candidate target.
#[derive(Debug, Clone, Copy)]
pub struct TargetInfo {
    pub id: ActorId,
    pub position: Position,
    pub alive: bool,
}

/// Everything a brain may look at for one decision cycle.
pub struct BrainContext<'a> {
    pub self_id: ActorId,
    pub kind: ActorKind,
    pub alive: bool,
    pub position: Position,
    /// Monster aggro range. Ignored by player brains.
    pub detect_radius: f64,
    /// Resolved info for this brain's remembered target, if any.
    pub current_target: Option<TargetInfo>,
    /// Monster acquisition candidate: the nearest living enemy.
    pub nearest_enemy: Option<TargetInfo>,
    /// Player only: target resolved from a screen-space tap this cycle.
    pub pointer_pick: Option<TargetInfo>,
    /// Player only: pending explicit skill cast request.
    pub requested_cast: Option<SkillId>,
    /// Readiness of the actor's skills, in declaration order.
    pub skills: &'a [SkillStatus],
}

/// A decision source. Called once per decision cycle.
pub trait Brain {
    /// The brain's remembered target, so the caller can resolve
    /// `current_target` before the next decision.
    fn target(&self) -> Option<ActorId>;

    fn decide(&mut self, ctx: &BrainContext) -> CombatIntent;

    /// Drop the remembered target (explicit disengage).
    fn forget(&mut self);
}

/// Declaration-order skill selection: the first skill that is both
/// usable by this caster kind and off cooldown. No ready skill is
/// "no skill", not an error.
pub fn select_skill(kind: ActorKind, skills: &[SkillStatus]) -> Option<SkillId> {
    skills
        .iter()
        .find(|s| s.ready && s.allowed_casters.allows(kind))
        .map(|s| s.id)
}

/// Player decision source: taps pick targets, explicit casts override
/// the default attack, otherwise the remembered target is auto-attacked.
#[derive(Debug, Default)]
pub struct PlayerBrain {
    remembered: Option<ActorId>,
}

impl Brain for PlayerBrain {
    fn target(&self) -> Option<ActorId> {
        self.remembered
    }

    fn forget(&mut self) {
        self.remembered = None;
    }

    fn decide(&mut self, ctx: &BrainContext) -> CombatIntent {
        if !ctx.alive {
            return CombatIntent::idle();
        }

        // A fresh tap replaces the remembered target.
        if let Some(pick) = ctx.pointer_pick {
            self.remembered = Some(pick.id);
        }

        let target = match pick_or_current(ctx) {
            Some(t) if t.alive => t,
            _ => {
                self.remembered = None;
                return CombatIntent::idle();
            }
        };

        // An explicit cast request wins; it was validated for
        // readiness by the caller before reaching the context.
        if let Some(skill) = ctx.requested_cast {
            return CombatIntent::engage_with_skill(target.id, skill);
        }

        match select_skill(ctx.kind, ctx.skills) {
            Some(skill) => CombatIntent::engage_with_skill(target.id, skill),
            None => CombatIntent::engage(target.id),
        }
    }
}

fn pick_or_current(ctx: &BrainContext) -> Option<TargetInfo> {
    ctx.pointer_pick.or(ctx.current_target)
}

/// Monster decision source: acquires the nearest enemy inside the
/// detection radius, drops the target once it leaves that radius.
#[derive(Debug, Default)]
pub struct MonsterBrain {
    remembered: Option<ActorId>,
}

impl Brain for MonsterBrain {
    fn target(&self) -> Option<ActorId> {
        self.remembered
    }

    fn forget(&mut self) {
        self.remembered = None;
    }

    fn decide(&mut self, ctx: &BrainContext) -> CombatIntent {
        if !ctx.alive {
            self.remembered = None;
            return CombatIntent::idle();
        }

        let candidate = match ctx.current_target.filter(|t| t.alive) {
            Some(t) => Some(t),
            None => ctx.nearest_enemy.filter(|t| t.alive),
        };

        let target = match candidate {
            Some(t) => t,
            None => {
                self.remembered = None;
                return CombatIntent::idle();
            }
        };

        // Distance gate: out of detection range clears the intent.
        if ctx.position.horizontal_range_to(&target.position) > ctx.detect_radius {
            self.remembered = None;
            return CombatIntent::idle();
        }

        self.remembered = Some(target.id);
        match select_skill(ctx.kind, ctx.skills) {
            Some(skill) => CombatIntent::engage_with_skill(target.id, skill),
            None => CombatIntent::engage(target.id),
        }
    }
}
