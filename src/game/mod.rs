//! Game Simulation Module
//!
//! All gameplay logic. One seeded world, stepped frame by frame.
//!
//! ## Module Structure
//!
//! - `questions`: tense categories and the static question bank
//! - `state`: single-writer store for score, lives, speed, buffs
//! - `shop`: item catalog and purchase rules
//! - `objects`: lane objects and their collision policy
//! - `player`: lane steering and jump physics
//! - `input`: control command queue
//! - `spawn`: question wave placement
//! - `collision`: depth band and overlap checks
//! - `tick`: per-frame orchestration
//! - `world`: composition root and embedder surface
//! - `events`: per-frame event stream

pub mod collision;
pub mod events;
pub mod input;
pub mod objects;
pub mod player;
pub mod questions;
pub mod shop;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod world;

// Re-export key types
pub use events::{GameEvent, GameEventData};
pub use input::{Command, CommandQueue};
pub use state::{GameState, GameStatus};
pub use tick::{TickResult, WorldConfig};
pub use world::GameWorld;
