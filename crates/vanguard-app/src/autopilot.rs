//! Idle auto-battle pilot.
//!
//! Watches each snapshot and, when the player has no target, taps the
//! nearest living monster so the battle keeps itself running. The
//! pilot goes through the same screen-space tap path a real player
//! would; it has no backdoor into the simulation.

use std::cell::RefCell;
use std::rc::Rc;

use vanguard_core::commands::PlayerCommand;
use vanguard_core::enums::ActorKind;
use vanguard_core::state::BattleSnapshot;
use vanguard_sim::picker::ScreenToWorldPicker;
use vanguard_sim::scheduler::{TickRoles, Tickable};

/// Seconds between retarget attempts.
const RETARGET_INTERVAL_SECS: f64 = 0.5;

pub struct Autopilot {
    snapshot: Rc<RefCell<Option<BattleSnapshot>>>,
    outbox: Rc<RefCell<Vec<PlayerCommand>>>,
    picker: ScreenToWorldPicker,
    cooldown: f64,
}

impl Autopilot {
    pub fn new(
        snapshot: Rc<RefCell<Option<BattleSnapshot>>>,
        outbox: Rc<RefCell<Vec<PlayerCommand>>>,
    ) -> Self {
        Self {
            snapshot,
            outbox,
            picker: ScreenToWorldPicker::default(),
            cooldown: 0.0,
        }
    }

    fn pick_next_target(&self, snapshot: &BattleSnapshot) -> Option<PlayerCommand> {
        let player = snapshot
            .actors
            .iter()
            .find(|a| a.kind == ActorKind::Player && a.alive)?;
        if player.target.is_some() {
            return None;
        }

        let nearest = snapshot
            .actors
            .iter()
            .filter(|a| a.kind == ActorKind::Monster && a.alive)
            .min_by(|a, b| {
                let da = player.position.horizontal_range_to(&a.position);
                let db = player.position.horizontal_range_to(&b.position);
                da.total_cmp(&db)
            })?;

        Some(PlayerCommand::TapAt {
            point: self.picker.to_screen(&nearest.position),
        })
    }
}

impl Tickable for Autopilot {
    fn roles(&self) -> TickRoles {
        TickRoles {
            frame: true,
            ..Default::default()
        }
    }

    fn frame(&mut self, dt: f64) {
        self.cooldown -= dt;
        if self.cooldown > 0.0 {
            return;
        }

        let command = match self.snapshot.borrow().as_ref() {
            Some(snapshot) if !snapshot.paused => self.pick_next_target(snapshot),
            _ => None,
        };
        if let Some(command) = command {
            self.outbox.borrow_mut().push(command);
            self.cooldown = RETARGET_INTERVAL_SECS;
        }
    }
}
