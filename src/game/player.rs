//! Player Controller
//!
//! Lane steering with exponential smoothing plus a small jump state
//! machine. The controller owns motion state only; everything scored
//! lives in the state store.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    lane_center_x, DEFAULT_LANE_COUNT, GRAVITY, INVINCIBILITY_WINDOW, JUMP_VELOCITY,
    LANE_SMOOTHING_RATE, PLAYER_DEPTH, START_LANE,
};
use crate::core::vec3::Vec3;

/// Which kind of jump a command produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpKind {
    /// Off the ground
    Ground,
    /// Mid-air kick (double jump upgrade)
    Air,
}

/// Lane position, jump physics and the cosmetic damage flicker window.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    lane: usize,
    x: f32,
    y: f32,
    velocity_y: f32,
    jumping: bool,
    jumps_used: u8,
    invincible_timer: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Fresh controller parked at the starting lane.
    pub fn new() -> Self {
        Player {
            lane: START_LANE,
            x: lane_center_x(START_LANE, DEFAULT_LANE_COUNT),
            y: 0.0,
            velocity_y: 0.0,
            jumping: false,
            jumps_used: 0,
            invincible_timer: 0.0,
        }
    }

    /// Snap back to the starting lane with all motion state cleared.
    /// Called when a run starts.
    pub fn reset(&mut self, lane_count: usize) {
        self.lane = START_LANE.min(lane_count.saturating_sub(1));
        self.x = lane_center_x(self.lane, lane_count);
        self.y = 0.0;
        self.velocity_y = 0.0;
        self.jumping = false;
        self.jumps_used = 0;
        self.invincible_timer = 0.0;
    }

    /// Steer one lane left; clamped at the edge.
    pub fn steer_left(&mut self) {
        if self.lane > 0 {
            self.lane -= 1;
        }
    }

    /// Steer one lane right; clamped at the edge.
    pub fn steer_right(&mut self, lane_count: usize) {
        if self.lane + 1 < lane_count {
            self.lane += 1;
        }
    }

    /// Try to jump. Grounded always works; one mid-air kick is allowed
    /// when the double jump upgrade is owned. Returns what happened, or
    /// None when jumps are spent.
    pub fn try_jump(&mut self, double_jump_owned: bool) -> Option<JumpKind> {
        if !self.jumping {
            self.jumping = true;
            self.jumps_used = 1;
            self.velocity_y = JUMP_VELOCITY;
            return Some(JumpKind::Ground);
        }
        let max_jumps: u8 = if double_jump_owned { 2 } else { 1 };
        if self.jumps_used < max_jumps {
            self.jumps_used += 1;
            self.velocity_y = JUMP_VELOCITY;
            return Some(JumpKind::Air);
        }
        None
    }

    /// Integrate one frame of motion: lane smoothing, jump arc, flicker
    /// timer. `delta` is the clamped frame delta.
    pub fn update(&mut self, delta: f32, lane_count: usize) {
        let target = lane_center_x(self.lane.min(lane_count.saturating_sub(1)), lane_count);
        let blend = (delta * LANE_SMOOTHING_RATE).min(1.0);
        self.x += (target - self.x) * blend;

        if self.jumping {
            self.y += self.velocity_y * delta;
            self.velocity_y -= GRAVITY * delta;
            if self.y <= 0.0 {
                self.y = 0.0;
                self.velocity_y = 0.0;
                self.jumping = false;
                self.jumps_used = 0;
            }
        }

        if self.invincible_timer > 0.0 {
            self.invincible_timer = (self.invincible_timer - delta).max(0.0);
        }
    }

    /// Start the post-damage flicker window.
    pub fn begin_invincibility(&mut self) {
        self.invincible_timer = INVINCIBILITY_WINDOW;
    }

    /// Target lane index.
    #[inline]
    pub fn lane(&self) -> usize {
        self.lane
    }

    /// Smoothed X position.
    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Height above the ground.
    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// World position. The player's depth is fixed at the player plane.
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, PLAYER_DEPTH)
    }

    /// Whether a jump is in flight.
    #[inline]
    pub fn airborne(&self) -> bool {
        self.jumping
    }

    /// Whether the cosmetic flicker window is open.
    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.invincible_timer > 0.0
    }

    /// Seconds of flicker left.
    #[inline]
    pub fn invincibility_remaining(&self) -> f32 {
        self.invincible_timer
    }
}
