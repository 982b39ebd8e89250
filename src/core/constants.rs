//! Gameplay Tuning Constants
//!
//! One home for lane geometry, player physics, run speed, scoring and
//! timer durations. Distances are world units, times are seconds. The
//! track runs along Z: objects spawn at negative depth and travel toward
//! the player plane at Z = 0, ending up at positive depth behind them.

// =============================================================================
// LANE GEOMETRY
// =============================================================================

/// Distance between adjacent lane centers
pub const LANE_WIDTH: f32 = 4.5;

/// Number of lanes a fresh run starts with
pub const DEFAULT_LANE_COUNT: usize = 4;

/// Lane the player snaps to when a run starts
pub const START_LANE: usize = 1;

/// Center X coordinate of a lane, with the lane row centered on X = 0.
#[inline]
pub fn lane_center_x(lane: usize, lane_count: usize) -> f32 {
    let offset = lane_count.saturating_sub(1) as f32 * LANE_WIDTH / 2.0;
    lane as f32 * LANE_WIDTH - offset
}

// =============================================================================
// DEPTH AXIS
// =============================================================================

/// Depth of the player plane
pub const PLAYER_DEPTH: f32 = 0.0;

/// Depth answer gates spawn at
pub const GATE_SPAWN_DEPTH: f32 = -220.0;

/// Side pickups spawn this much closer than the gates of their wave
pub const SIDE_SPAWN_LEAD: f32 = 60.0;

/// A new wave may spawn only once nothing active remains ahead of this depth
pub const CLEAR_AHEAD_DEPTH: f32 = -50.0;

/// Objects past this depth are retired from the world
pub const REMOVAL_DEPTH: f32 = 20.0;

// =============================================================================
// OBJECT PLACEMENT HEIGHTS
// =============================================================================

/// Gate center height
pub const GATE_HEIGHT: f32 = 2.0;

/// Heal pickups float at jump height
pub const HEAL_HEIGHT: f32 = 2.5;

/// Bad food sits on the ground
pub const BAD_FOOD_HEIGHT: f32 = 0.5;

// =============================================================================
// PLAYER PHYSICS
// =============================================================================

/// Downward acceleration while airborne (units/s^2)
pub const GRAVITY: f32 = 50.0;

/// Upward velocity applied by a jump (units/s)
pub const JUMP_VELOCITY: f32 = 16.0;

/// Exponential smoothing rate toward the target lane center (1/s)
pub const LANE_SMOOTHING_RATE: f32 = 15.0;

/// Cosmetic post-damage flicker window (seconds)
pub const INVINCIBILITY_WINDOW: f32 = 1.5;

// =============================================================================
// RUN SPEED
// =============================================================================

/// Forward speed right after a run starts (units/s)
pub const RUN_SPEED_BASE: f32 = 35.0;

/// Speed cap no matter the answer streak
pub const RUN_SPEED_MAX: f32 = 90.0;

/// Speed gained per correct answer and lost per wrong one
pub const SPEED_STEP: f32 = 5.0;

/// Frame deltas are clamped to this before anything moves (seconds).
/// Keeps fast objects from tunneling through the collision band after a
/// stalled frame.
pub const MAX_FRAME_DELTA: f32 = 0.05;

// =============================================================================
// SCORING AND PROGRESSION
// =============================================================================

/// Points for a correct answer
pub const ANSWER_SCORE: u32 = 100;

/// Points lost to bad food (score floors at zero)
pub const BAD_FOOD_PENALTY: u32 = 100;

/// Lives at the start of a run (also the cap)
pub const INITIAL_LIVES: u8 = 5;

/// Correct answers needed for the first shop visit; doubles per visit
pub const SHOP_THRESHOLD_START: u32 = 5;

/// Streak length that earns the immortality buff
pub const COMBO_INTERVAL: u32 = 3;

/// How long the immortality buff lasts (seconds)
pub const CARSI_IZNI_DURATION: f32 = 10.0;

// =============================================================================
// NOTICE BANNER DURATIONS (seconds)
// =============================================================================

/// Score milestones and streak rewards
pub const MILESTONE_TTL_ANSWER: f32 = 4.0;

/// Pickup feedback (heal, bad food)
pub const MILESTONE_TTL_PICKUP: f32 = 2.0;

/// Shop welcome banner
pub const MILESTONE_TTL_SHOP: f32 = 3.0;

// =============================================================================
// TESTS
// =============================================================================
