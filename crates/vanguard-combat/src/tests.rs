#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use vanguard_core::enums::*;
    use vanguard_core::skill::{SkillDefinition, SkillId, SkillStatus, StatusEffectDef};
    use vanguard_core::types::{ActorId, Position};

    use crate::actor::Combatant;
    use crate::brain::{select_skill, Brain, BrainContext, MonsterBrain, PlayerBrain, TargetInfo};
    use crate::hit::check_hit;
    use crate::scaling::ScalingProfile;
    use crate::status::collect_on_hit_effects;
    use crate::strategy::{AttackStrategy, BasicMeleeAttack, InstantDamageSkill};

    /// Plain-struct combatant for pipeline tests.
    struct TestCombatant {
        id: ActorId,
        kind: ActorKind,
        alive: bool,
        stats: HashMap<StatKind, f64>,
        position: Position,
    }

    impl TestCombatant {
        fn new(id: u32, kind: ActorKind) -> Self {
            Self {
                id: ActorId(id),
                kind,
                alive: true,
                stats: HashMap::new(),
                position: Position::default(),
            }
        }

        fn with_stat(mut self, stat: StatKind, value: f64) -> Self {
            self.stats.insert(stat, value);
            self
        }
    }

    impl Combatant for TestCombatant {
        fn id(&self) -> ActorId {
            self.id
        }
        fn kind(&self) -> ActorKind {
            self.kind
        }
        fn is_alive(&self) -> bool {
            self.alive
        }
        fn stat(&self, stat: StatKind, _source: StatValueSource) -> f64 {
            self.stats.get(&stat).copied().unwrap_or(0.0)
        }
        fn position(&self) -> Position {
            self.position
        }
    }

    fn attack_scaling() -> ScalingProfile {
        ScalingProfile {
            stat: StatKind::Attack,
            source: StatValueSource::FinalWithStatus,
            add: 0.0,
            per_stat: 1.0,
            min: 1.0,
            max: None,
        }
    }

    fn test_skill() -> SkillDefinition {
        SkillDefinition {
            id: SkillId(1),
            allowed_casters: CasterTag::Player,
            damage_type: DamageType::Magic,
            base_power: 10.0,
            cast_time_secs: 0.0,
            range: 6.0,
            cooldown_secs: 4.0,
            force_hit: false,
            on_hit_effects: vec![
                None,
                Some(StatusEffectDef {
                    kind: StatusEffectKind::Burn,
                    magnitude: 2.0,
                    duration_secs: 3.0,
                }),
            ],
        }
    }

    // ---- Stat scaling ----

    #[test]
    fn test_scaling_negative_stat_clamped_to_zero() {
        let profile = ScalingProfile {
            stat: StatKind::Attack,
            source: StatValueSource::FinalWithStatus,
            add: 0.0,
            per_stat: 0.1,
            min: 0.1,
            max: None,
        };
        // Negative stat magnitude contributes zero, never subtracts.
        assert_eq!(profile.apply(-5.0, 1.0), 1.0);
    }

    #[test]
    fn test_scaling_clamps_to_min_and_max() {
        let profile = ScalingProfile {
            stat: StatKind::Attack,
            source: StatValueSource::FinalWithStatus,
            add: 2.0,
            per_stat: 0.5,
            min: 5.0,
            max: Some(10.0),
        };
        assert_eq!(profile.apply(0.0, 0.0), 5.0); // clamped up to min
        assert_eq!(profile.apply(100.0, 0.0), 10.0); // clamped down to max
        assert_eq!(profile.apply(10.0, 0.0), 7.0); // 2 + 10*0.5
    }

    // ---- Hit check ----

    #[test]
    fn test_hit_check_accuracy_vs_evasion() {
        let attacker = TestCombatant::new(1, ActorKind::Player).with_stat(StatKind::Accuracy, 10.0);
        let nimble = TestCombatant::new(2, ActorKind::Monster).with_stat(StatKind::Evasion, 11.0);
        let sluggish = TestCombatant::new(3, ActorKind::Monster).with_stat(StatKind::Evasion, 10.0);

        let miss = check_hit(&attacker, &nimble, DamageType::Physical, false);
        assert!(!miss.is_hit);
        assert_eq!(miss.attacker_value, 10.0);
        assert_eq!(miss.defender_value, 11.0);

        // Ties go to the attacker.
        assert!(check_hit(&attacker, &sluggish, DamageType::Physical, false).is_hit);
    }

    #[test]
    fn test_hit_check_force_hit_overrides() {
        let attacker = TestCombatant::new(1, ActorKind::Player).with_stat(StatKind::Accuracy, 0.0);
        let defender = TestCombatant::new(2, ActorKind::Monster).with_stat(StatKind::Evasion, 99.0);
        let result = check_hit(&attacker, &defender, DamageType::Physical, true);
        assert!(result.is_hit);
        // Derived values are still reported.
        assert_eq!(result.defender_value, 99.0);
    }

    // ---- Strategies ----

    #[test]
    fn test_melee_miss_produces_no_damage_no_effects() {
        let attacker = TestCombatant::new(1, ActorKind::Player)
            .with_stat(StatKind::Accuracy, 1.0)
            .with_stat(StatKind::Attack, 50.0);
        let defender = TestCombatant::new(2, ActorKind::Monster).with_stat(StatKind::Evasion, 9.0);

        let strategy = BasicMeleeAttack {
            scaling: attack_scaling(),
        };
        let outcome = strategy.execute(&attacker, &defender).unwrap();
        assert!(!outcome.hit.is_hit);
        assert_eq!(outcome.damage, 0);
        assert!(outcome.effects.is_empty());
    }

    #[test]
    fn test_melee_hit_damage_mitigated_by_defense() {
        let attacker = TestCombatant::new(1, ActorKind::Player)
            .with_stat(StatKind::Accuracy, 10.0)
            .with_stat(StatKind::Attack, 20.0);
        let defender = TestCombatant::new(2, ActorKind::Monster).with_stat(StatKind::Defense, 10.0);

        let strategy = BasicMeleeAttack {
            scaling: attack_scaling(),
        };
        let outcome = strategy.execute(&attacker, &defender).unwrap();
        assert!(outcome.hit.is_hit);
        // 20 attack - 10 * 0.5 defense = 15
        assert_eq!(outcome.damage, 15);
    }

    #[test]
    fn test_dead_combatant_aborts_silently() {
        let mut attacker = TestCombatant::new(1, ActorKind::Player);
        let defender = TestCombatant::new(2, ActorKind::Monster);
        attacker.alive = false;

        let strategy = BasicMeleeAttack {
            scaling: attack_scaling(),
        };
        assert!(strategy.execute(&attacker, &defender).is_none());
    }

    #[test]
    fn test_skill_caster_eligibility_gate() {
        let skill = test_skill(); // Player-only
        let monster = TestCombatant::new(1, ActorKind::Monster).with_stat(StatKind::Attack, 5.0);
        let player = TestCombatant::new(2, ActorKind::Player);

        let strategy = InstantDamageSkill {
            skill: &skill,
            scaling: attack_scaling(),
        };
        assert!(strategy.execute(&monster, &player).is_none());
    }

    #[test]
    fn test_skill_hit_carries_effects_in_order() {
        let skill = test_skill();
        let attacker = TestCombatant::new(1, ActorKind::Player)
            .with_stat(StatKind::Accuracy, 10.0)
            .with_stat(StatKind::Attack, 5.0);
        let defender = TestCombatant::new(2, ActorKind::Monster);

        let strategy = InstantDamageSkill {
            skill: &skill,
            scaling: attack_scaling(),
        };
        let outcome = strategy.execute(&attacker, &defender).unwrap();
        assert!(outcome.hit.is_hit);
        assert_eq!(outcome.skill, Some(SkillId(1)));
        // The null slot is skipped; one Burn remains.
        assert_eq!(outcome.effects.len(), 1);
        assert_eq!(outcome.effects[0].kind, StatusEffectKind::Burn);
        // 10 base power + 5 attack = 15
        assert_eq!(outcome.damage, 15);
    }

    #[test]
    fn test_null_effect_slots_skipped() {
        let skill = test_skill();
        let effects = collect_on_hit_effects(&skill);
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].kind, StatusEffectKind::Burn);
    }

    // ---- Skill selection ----

    fn status(id: u32, tag: CasterTag, ready: bool) -> SkillStatus {
        SkillStatus {
            id: SkillId(id),
            allowed_casters: tag,
            ready,
        }
    }

    #[test]
    fn test_select_skill_first_ready_in_declaration_order() {
        let skills = [
            status(1, CasterTag::Both, false), // on cooldown
            status(2, CasterTag::Player, true), // wrong caster
            status(3, CasterTag::Monster, true), // first eligible + ready
            status(4, CasterTag::Both, true),
        ];
        assert_eq!(
            select_skill(ActorKind::Monster, &skills),
            Some(SkillId(3))
        );
    }

    #[test]
    fn test_select_skill_none_ready_yields_none() {
        let skills = [
            status(1, CasterTag::Both, false),
            status(2, CasterTag::Monster, true),
        ];
        assert_eq!(select_skill(ActorKind::Player, &skills), None);
    }

    // ---- Brains ----

    fn target_at(id: u32, x: f64, alive: bool) -> TargetInfo {
        TargetInfo {
            id: ActorId(id),
            position: Position::new(x, 0.0, 0.0),
            alive,
        }
    }

    fn monster_ctx<'a>(
        current: Option<TargetInfo>,
        nearest: Option<TargetInfo>,
        skills: &'a [SkillStatus],
    ) -> BrainContext<'a> {
        BrainContext {
            self_id: ActorId(100),
            kind: ActorKind::Monster,
            alive: true,
            position: Position::default(),
            detect_radius: 8.0,
            current_target: current,
            nearest_enemy: nearest,
            pointer_pick: None,
            requested_cast: None,
            skills,
        }
    }

    #[test]
    fn test_monster_brain_acquires_in_range_enemy() {
        let mut brain = MonsterBrain::default();
        let ctx = monster_ctx(None, Some(target_at(1, 5.0, true)), &[]);
        let intent = brain.decide(&ctx);
        assert!(intent.engage);
        assert_eq!(intent.target, Some(ActorId(1)));
        assert_eq!(brain.target(), Some(ActorId(1)));
    }

    #[test]
    fn test_monster_brain_distance_gate_clears_intent() {
        let mut brain = MonsterBrain::default();
        // Acquire first.
        let ctx = monster_ctx(None, Some(target_at(1, 5.0, true)), &[]);
        assert!(brain.decide(&ctx).engage);

        // Target moved out of detection range: intent cleared.
        let ctx = monster_ctx(Some(target_at(1, 20.0, true)), None, &[]);
        let intent = brain.decide(&ctx);
        assert!(intent.is_idle());
        assert_eq!(brain.target(), None);
    }

    #[test]
    fn test_monster_brain_dead_target_yields_idle() {
        let mut brain = MonsterBrain::default();
        let ctx = monster_ctx(Some(target_at(1, 3.0, false)), None, &[]);
        assert!(brain.decide(&ctx).is_idle());
    }

    #[test]
    fn test_monster_brain_requests_first_ready_skill() {
        let skills = [status(7, CasterTag::Monster, true)];
        let mut brain = MonsterBrain::default();
        let ctx = monster_ctx(None, Some(target_at(1, 2.0, true)), &skills);
        let intent = brain.decide(&ctx);
        assert_eq!(intent.requested_skill, Some(SkillId(7)));
    }

    #[test]
    fn test_player_brain_tap_replaces_target() {
        let mut brain = PlayerBrain::default();
        let ctx = BrainContext {
            self_id: ActorId(0),
            kind: ActorKind::Player,
            alive: true,
            position: Position::default(),
            detect_radius: 0.0,
            current_target: None,
            nearest_enemy: None,
            pointer_pick: Some(target_at(9, 4.0, true)),
            requested_cast: None,
            skills: &[],
        };
        let intent = brain.decide(&ctx);
        assert!(intent.engage);
        assert_eq!(intent.target, Some(ActorId(9)));
        assert_eq!(brain.target(), Some(ActorId(9)));
    }

    #[test]
    fn test_player_brain_explicit_cast_wins() {
        let skills = [status(2, CasterTag::Player, true)];
        let mut brain = PlayerBrain::default();
        let ctx = BrainContext {
            self_id: ActorId(0),
            kind: ActorKind::Player,
            alive: true,
            position: Position::default(),
            detect_radius: 0.0,
            current_target: Some(target_at(9, 4.0, true)),
            nearest_enemy: None,
            pointer_pick: None,
            requested_cast: Some(SkillId(5)),
            skills: &skills,
        };
        let intent = brain.decide(&ctx);
        assert_eq!(intent.requested_skill, Some(SkillId(5)));
    }

    #[test]
    fn test_player_brain_dead_self_is_idle() {
        let mut brain = PlayerBrain::default();
        let ctx = BrainContext {
            self_id: ActorId(0),
            kind: ActorKind::Player,
            alive: false,
            position: Position::default(),
            detect_radius: 0.0,
            current_target: Some(target_at(9, 1.0, true)),
            nearest_enemy: None,
            pointer_pick: None,
            requested_cast: None,
            skills: &[],
        };
        assert!(brain.decide(&ctx).is_idle());
    }
}
