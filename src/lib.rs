//! # Tense Runner Core
//!
//! Deterministic gameplay simulation for Tense Runner, a lane-based
//! grammar quiz endless runner: steer through the gate carrying the right
//! answer, jump the bad food, and spend your score at the cafeteria.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      TENSE RUNNER CORE                       │
//! ├──────────────────────────────────────────────────────────────┤
//! │  core/             - Deterministic primitives                │
//! │  ├── constants.rs  - Lane geometry, physics, economy tuning  │
//! │  ├── vec3.rs       - World vector (lane X, height Y, depth Z)│
//! │  └── rng.rs        - Seeded xorshift128+ PRNG                │
//! │                                                              │
//! │  game/             - Simulation (single-writer store)        │
//! │  ├── questions.rs  - Tense categories + question bank        │
//! │  ├── state.rs      - Score, lives, streaks, status machine   │
//! │  ├── shop.rs       - Item catalog and purchases              │
//! │  ├── objects.rs    - Gates, pickups, collision policy        │
//! │  ├── player.rs     - Lane steering + jump physics            │
//! │  ├── input.rs      - Control command queue                   │
//! │  ├── spawn.rs      - Question wave placement                 │
//! │  ├── collision.rs  - Depth band / lane overlap checks        │
//! │  ├── tick.rs       - Frame orchestration                     │
//! │  ├── world.rs      - Composition root + embedder surface     │
//! │  └── events.rs     - Per-frame event stream                  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! A run is fully determined by its seed and the per-frame sequence of
//! `(delta, commands)`. All randomness (question picks, pickup lanes,
//! gate colors, question ids) draws from one seeded xorshift128+
//! instance owned by the world, so replaying the same frame record
//! reproduces the same events, scores and object layout.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types at the crate root
pub use core::constants::{DEFAULT_LANE_COUNT, RUN_SPEED_BASE, RUN_SPEED_MAX};
pub use core::rng::DeterministicRng;
pub use core::vec3::Vec3;
pub use game::events::{GameEvent, GameEventData};
pub use game::input::{Command, CommandQueue};
pub use game::objects::{GameObject, ObjectId, ObjectKind};
pub use game::player::{JumpKind, Player};
pub use game::questions::{ActiveQuestion, QuestionId, QuestionTemplate, Tense, QUESTION_BANK};
pub use game::shop::{catalog, PurchaseError, ShopItem, ShopItemId};
pub use game::spawn::SpawnConfig;
pub use game::state::{GameState, GameStatus, Milestone};
pub use game::tick::{TickResult, WorldConfig};
pub use game::world::{GameWorld, HudSnapshot};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reference simulation rate the tuning assumes (Hz). The loop itself is
/// variable-rate with a clamped frame delta.
pub const TICK_RATE: u32 = 60;
