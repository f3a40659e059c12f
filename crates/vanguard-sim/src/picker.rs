//! Screen-space tap to world-space target resolution.
//!
//! The host delivers raw pointer events; the input layer itself
//! (capture, gestures) is outside this core. Resolution here assumes a
//! fixed top-down orthographic view over the battle area.

use vanguard_core::commands::ScreenPoint;
use vanguard_core::constants::PICK_RADIUS;
use vanguard_core::types::{ActorId, Position};

/// Maps screen points onto the ground plane and picks the nearest
/// living monster within the pick radius.
#[derive(Debug, Clone)]
pub struct ScreenToWorldPicker {
    pub screen_width: f64,
    pub screen_height: f64,
    /// World meters per screen pixel.
    pub meters_per_pixel: f64,
    /// World position at the screen center.
    pub center: Position,
}

impl Default for ScreenToWorldPicker {
    fn default() -> Self {
        Self {
            screen_width: 1080.0,
            screen_height: 1920.0,
            meters_per_pixel: 0.02,
            center: Position::default(),
        }
    }
}

impl ScreenToWorldPicker {
    /// Project a screen point onto the ground plane (y = 0).
    /// Screen y grows downward; world z grows toward the top of the view.
    pub fn to_world(&self, point: ScreenPoint) -> Position {
        let dx = (point.x - self.screen_width / 2.0) * self.meters_per_pixel;
        let dz = (self.screen_height / 2.0 - point.y) * self.meters_per_pixel;
        Position::new(self.center.x + dx, 0.0, self.center.z + dz)
    }

    /// Inverse projection: the screen point directly over a world
    /// position. Hosts use this to synthesize taps.
    pub fn to_screen(&self, position: &Position) -> ScreenPoint {
        ScreenPoint {
            x: self.screen_width / 2.0 + (position.x - self.center.x) / self.meters_per_pixel,
            y: self.screen_height / 2.0 - (position.z - self.center.z) / self.meters_per_pixel,
        }
    }

    /// Pick the candidate nearest to the tapped point, if any lies
    /// within the pick radius. Ties break toward the lower id so picks
    /// are deterministic.
    pub fn pick(
        &self,
        point: ScreenPoint,
        candidates: impl IntoIterator<Item = (ActorId, Position)>,
    ) -> Option<ActorId> {
        let tap = self.to_world(point);

        let mut best: Option<(ActorId, f64)> = None;
        for (id, pos) in candidates {
            let dist = tap.horizontal_range_to(&pos);
            if dist > PICK_RADIUS {
                continue;
            }
            let closer = match best {
                None => true,
                Some((best_id, best_dist)) => {
                    dist < best_dist || (dist == best_dist && id < best_id)
                }
            };
            if closer {
                best = Some((id, dist));
            }
        }
        best.map(|(id, _)| id)
    }
}
