//! Reward economy — live combat drops and offline progress accrual.
//!
//! Everything here is a pure function over explicit arguments plus an
//! injected random source, so resolutions are replayable under a fixed
//! seed and safe to call from independent simulation instances.

pub mod drops;
pub mod offline;
pub mod rng;

#[cfg(test)]
mod tests;
