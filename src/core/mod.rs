//! Core deterministic primitives.
//!
//! Domain-free building blocks under the simulation: tuning constants,
//! world-space vectors and the seeded PRNG every run draws from.

pub mod constants;
pub mod rng;
pub mod vec3;

// Re-export core types
pub use rng::DeterministicRng;
pub use vec3::Vec3;
