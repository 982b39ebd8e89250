//! Lane Objects
//!
//! Everything that travels down the track toward the player: answer gates,
//! pickups and scenery. Collision policy lives with the kind so the frame
//! loop can stay a plain pattern match away from the rules.

use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;

/// Gates span most of the lane
const GATE_HALF_WIDTH: f32 = 1.8;
/// Pickups need a closer pass
const PICKUP_HALF_WIDTH: f32 = 1.0;
/// Heal wants the player up near its float height
const HEAL_VERTICAL_WINDOW: f32 = 1.5;
/// Bad food catches grounded players only
const BAD_FOOD_VERTICAL_WINDOW: f32 = 1.2;

/// Unique lane-object identifier, monotonic per world.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct ObjectId(pub u32);

/// What a lane object is and how it reacts to contact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// An answer gate carrying one option of the current question.
    AnswerGate {
        /// Option text on the gate face
        text: String,
        /// Whether steering through it answers correctly
        correct: bool,
        /// Display color (hex); the correct gate wears its tense color
        color: String,
    },
    /// Floating heal pickup: +1 life below the cap, collected airborne.
    HealPickup,
    /// Ground-level bad food: score penalty unless jumped over.
    BadFood,
    /// Scenery. Never collides.
    Decoration,
}

impl ObjectKind {
    /// Horizontal hit tolerance around the object's lane center.
    #[inline]
    pub fn lane_half_width(&self) -> f32 {
        match self {
            ObjectKind::AnswerGate { .. } => GATE_HALF_WIDTH,
            ObjectKind::HealPickup | ObjectKind::BadFood => PICKUP_HALF_WIDTH,
            ObjectKind::Decoration => 0.0,
        }
    }

    /// Vertical hit window, if this kind gates on height at all.
    ///
    /// Gates span the whole lane top to bottom, so they have no window.
    #[inline]
    pub fn vertical_tolerance(&self) -> Option<f32> {
        match self {
            ObjectKind::HealPickup => Some(HEAL_VERTICAL_WINDOW),
            ObjectKind::BadFood => Some(BAD_FOOD_VERTICAL_WINDOW),
            ObjectKind::AnswerGate { .. } | ObjectKind::Decoration => None,
        }
    }

    /// Whether this kind participates in collision at all.
    #[inline]
    pub fn collides(&self) -> bool {
        !matches!(self, ObjectKind::Decoration)
    }

    /// True for answer gates.
    #[inline]
    pub fn is_gate(&self) -> bool {
        matches!(self, ObjectKind::AnswerGate { .. })
    }
}

/// One object on the track.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    /// Unique id, stable for the object's lifetime
    pub id: ObjectId,
    /// What it is
    pub kind: ObjectKind,
    /// World position (lane X, height Y, depth Z)
    pub position: Vec3,
    /// Cleared objects go inactive and are retired at frame end
    pub active: bool,
}

impl GameObject {
    /// Create a new active object.
    pub fn new(id: ObjectId, kind: ObjectKind, position: Vec3) -> Self {
        GameObject {
            id,
            kind,
            position,
            active: true,
        }
    }
}
