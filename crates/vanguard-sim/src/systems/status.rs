//! Status effect upkeep — periodic damage and expiry.

use hecs::World;

use vanguard_combat::status;

use crate::components::{ActiveStatuses, Health};

pub fn run(world: &mut World, tick: u64, dt: f64) {
    for (_entity, (health, statuses)) in world.query_mut::<(&mut Health, &mut ActiveStatuses)>() {
        for active in statuses.effects.iter_mut() {
            let dps = status::periodic_damage_per_sec(&active.def);
            if dps > 0.0 && health.is_alive() {
                // Accrue fractionally; apply whole points only.
                active.damage_accrual += dps * dt;
                let whole = active.damage_accrual.floor();
                if whole >= 1.0 {
                    health.take_damage(whole as i64);
                    active.damage_accrual -= whole;
                }
            }
        }

        statuses.effects.retain(|s| s.expires_tick > tick);
    }
}
