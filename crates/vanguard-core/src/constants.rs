//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per fixed simulation step.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Maximum fixed steps drained per clock advance. If the host stalls
/// long enough to owe more than this, the excess time is discarded.
pub const MAX_CATCHUP_STEPS: u32 = 5;

// --- Combat ---

/// Reach of a basic melee swing (meters).
pub const MELEE_RANGE: f64 = 1.6;

/// Damage floor for any connected hit.
pub const MIN_DAMAGE: i64 = 1;

/// Fraction of defense subtracted from incoming damage.
pub const DEFENSE_MITIGATION: f64 = 0.5;

/// Seconds between basic attacks.
pub const BASIC_ATTACK_INTERVAL_SECS: f64 = 1.0;

// --- Targeting ---

/// World-space radius around a resolved pick point within which a
/// monster counts as tapped.
pub const PICK_RADIUS: f64 = 1.5;

/// Default monster detection radius when the archetype omits one.
pub const DEFAULT_DETECT_RADIUS: f64 = 8.0;

// --- Lifecycle ---

/// Seconds a dead monster lingers before despawn.
pub const CORPSE_LINGER_SECS: f64 = 1.0;

/// Seconds after a wave is cleared before the next one spawns.
pub const RESPAWN_DELAY_SECS: f64 = 3.0;

// --- Offline ---

/// Default AFK reward cap in hours when no rule is configured.
pub const DEFAULT_AFK_CAP_HOURS: f64 = 8.0;
