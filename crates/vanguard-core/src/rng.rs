//! Random source port.
//!
//! Resolvers never construct randomness themselves; the source is
//! injected by whoever owns the simulation. The source is the only
//! authority over non-determinism and must be owned per simulation.

/// An explicit, swappable source of randomness.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next01(&mut self) -> f64;

    /// Uniform integer in `[min, max]`, both inclusive.
    /// Callers must pass `min <= max`.
    fn range_int(&mut self, min: i64, max: i64) -> i64;
}
