//! Tick scheduler — per-role registries of tickable participants.
//!
//! The host owns one scheduler instance and hands references to the
//! components that need to register; there is no ambient global
//! registry. Single-threaded by design: dispatch walks a snapshot of
//! each registry, so registering or unregistering from inside a tick
//! method is safe and takes effect on the next pass.

use std::cell::RefCell;
use std::rc::Rc;

/// Which per-tick calls a participant wants. An object may implement
/// any subset; membership is kept per role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickRoles {
    /// Fixed simulation step.
    pub sim_step: bool,
    /// Scaled per-frame update.
    pub frame: bool,
    /// Late per-frame update (after all frame updates).
    pub late_frame: bool,
    /// Unscaled per-frame update (ignores pause/time scale).
    pub unscaled: bool,
}

/// A scheduler participant. Default method bodies are no-ops so an
/// implementor only overrides the roles it declares.
pub trait Tickable {
    fn roles(&self) -> TickRoles;

    fn sim_step(&mut self, _dt: f64) {}
    fn frame(&mut self, _dt: f64) {}
    fn late_frame(&mut self, _dt: f64) {}
    fn unscaled(&mut self, _dt: f64) {}
}

pub type TickHandle = Rc<RefCell<dyn Tickable>>;

/// Registries of participants, one list per role, deduplicated by
/// identity and dispatched in registration order.
#[derive(Default)]
pub struct TickScheduler {
    sim_step: Vec<TickHandle>,
    frame: Vec<TickHandle>,
    late_frame: Vec<TickHandle>,
    unscaled: Vec<TickHandle>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant to each list matching its declared roles.
    /// Idempotent: a participant already in a list is not added again.
    pub fn register(&mut self, participant: &TickHandle) {
        let roles = participant.borrow().roles();
        if roles.sim_step {
            Self::insert(&mut self.sim_step, participant);
        }
        if roles.frame {
            Self::insert(&mut self.frame, participant);
        }
        if roles.late_frame {
            Self::insert(&mut self.late_frame, participant);
        }
        if roles.unscaled {
            Self::insert(&mut self.unscaled, participant);
        }
    }

    /// Remove a participant from every list it may be in.
    /// Unregistering a non-member is a no-op.
    pub fn unregister(&mut self, participant: &TickHandle) {
        for list in [
            &mut self.sim_step,
            &mut self.frame,
            &mut self.late_frame,
            &mut self.unscaled,
        ] {
            list.retain(|p| !Rc::ptr_eq(p, participant));
        }
    }

    /// Dispatch one fixed simulation step to every registered participant.
    pub fn dispatch_sim_step(&mut self, dt: f64) {
        Self::dispatch(&self.sim_step, |p, dt| p.sim_step(dt), dt);
    }

    /// Dispatch a scaled frame update.
    pub fn dispatch_frame(&mut self, dt: f64) {
        Self::dispatch(&self.frame, |p, dt| p.frame(dt), dt);
    }

    /// Dispatch a late frame update.
    pub fn dispatch_late_frame(&mut self, dt: f64) {
        Self::dispatch(&self.late_frame, |p, dt| p.late_frame(dt), dt);
    }

    /// Dispatch an unscaled frame update.
    pub fn dispatch_unscaled(&mut self, dt: f64) {
        Self::dispatch(&self.unscaled, |p, dt| p.unscaled(dt), dt);
    }

    pub fn sim_step_count(&self) -> usize {
        self.sim_step.len()
    }

    pub fn frame_count(&self) -> usize {
        self.frame.len()
    }

    fn insert(list: &mut Vec<TickHandle>, participant: &TickHandle) {
        if !list.iter().any(|p| Rc::ptr_eq(p, participant)) {
            list.push(Rc::clone(participant));
        }
    }

    fn dispatch(list: &[TickHandle], call: fn(&mut dyn Tickable, f64), dt: f64) {
        // Snapshot before iterating: registry mutation during a pass
        // must not invalidate the walk.
        let snapshot: Vec<TickHandle> = list.to_vec();
        for participant in snapshot {
            call(&mut *participant.borrow_mut(), dt);
        }
    }
}
