//! Collision Checks
//!
//! An object hits the player when its depth crosses the band around the
//! player plane during a frame's travel while overlapping on the lane
//! axis, plus a height window for pickups. Checking the crossing against
//! the pre-advance depth is what keeps fast waves from tunneling through
//! the band between frames.

use crate::core::constants::PLAYER_DEPTH;
use crate::game::objects::GameObject;

/// Depth tolerance around the player plane for a band crossing.
pub const BAND_TOLERANCE: f32 = 1.0;

/// A resolved gate clears every object within this depth of the hit.
pub const ROW_CLEAR_RADIUS: f32 = 5.0;

/// Did an object cross the player's depth band this frame?
/// `prev_z` is its depth before the advance, `new_z` after.
#[inline]
pub fn crossed_player_band(prev_z: f32, new_z: f32) -> bool {
    prev_z < PLAYER_DEPTH + BAND_TOLERANCE && new_z > PLAYER_DEPTH - BAND_TOLERANCE
}

/// Lane-axis overlap within a half-width.
#[inline]
pub fn lane_overlap(object_x: f32, player_x: f32, half_width: f32) -> bool {
    (object_x - player_x).abs() < half_width
}

/// Height overlap within a tolerance.
#[inline]
pub fn height_overlap(object_y: f32, player_y: f32, tolerance: f32) -> bool {
    (object_y - player_y).abs() < tolerance
}

/// Full hit test for one object across one frame of travel.
pub fn object_hits_player(object: &GameObject, prev_z: f32, player_x: f32, player_y: f32) -> bool {
    if !object.active || !object.kind.collides() {
        return false;
    }
    if !crossed_player_band(prev_z, object.position.z) {
        return false;
    }
    if !lane_overlap(object.position.x, player_x, object.kind.lane_half_width()) {
        return false;
    }
    match object.kind.vertical_tolerance() {
        Some(tolerance) => height_overlap(object.position.y, player_y, tolerance),
        None => true,
    }
}

/// Advance every object by `travel` along Z and collect the indices of
/// those that hit the player this frame, in track order.
pub fn advance_and_collect_hits(
    objects: &mut [GameObject],
    travel: f32,
    player_x: f32,
    player_y: f32,
) -> Vec<usize> {
    let mut hits = Vec::new();
    for (index, object) in objects.iter_mut().enumerate() {
        let prev_z = object.position.z;
        object.position.z += travel;
        if object_hits_player(object, prev_z, player_x, player_y) {
            hits.push(index);
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec3::Vec3;
    use crate::game::objects::{ObjectId, ObjectKind};

    fn gate_at(x: f32, z: f32) -> GameObject {
        GameObject::new(
            ObjectId(1),
            ObjectKind::AnswerGate {
                text: "goes".to_string(),
                correct: true,
                color: "#00e676".to_string(),
            },
            Vec3::new(x, 2.0, z),
        )
    }

    #[test]
    fn test_band_crossing_strictness() {
        // Entering the band from ahead
        assert!(crossed_player_band(-0.5, 0.5));
        // Still far ahead
        assert!(!crossed_player_band(-10.0, -5.0));
        // Exactly on the far edge stays out (strict comparison)
        assert!(!crossed_player_band(-10.0, -BAND_TOLERANCE));
        assert!(!crossed_player_band(BAND_TOLERANCE, 2.0));
        // Sitting inside the band counts
        assert!(crossed_player_band(-0.2, 0.1));
    }

    #[test]
    fn test_band_catches_tunneling() {
        // A whole band skipped in one frame still registers
        assert!(crossed_player_band(-5.0, 5.0));
    }

    #[test]
    fn test_lane_widths_per_kind() {
        let mut gate = gate_at(0.0, -0.5);
        gate.position.z = 0.5;
        // Gate is generous across the lane
        assert!(object_hits_player(&gate, -0.5, 1.7, 0.0));
        assert!(!object_hits_player(&gate, -0.5, 1.9, 0.0));

        let heal = GameObject::new(ObjectId(2), ObjectKind::HealPickup, Vec3::new(0.0, 2.5, 0.5));
        // Pickup needs a closer pass
        assert!(object_hits_player(&heal, -0.5, 0.9, 2.0));
        assert!(!object_hits_player(&heal, -0.5, 1.1, 2.0));
    }

    #[test]
    fn test_heal_needs_an_airborne_player() {
        let heal = GameObject::new(ObjectId(3), ObjectKind::HealPickup, Vec3::new(0.0, 2.5, 0.0));
        // Grounded: 2.5 away from the float height, outside the 1.5 window
        assert!(!object_hits_player(&heal, -0.5, 0.0, 0.0));
        // Mid-jump
        assert!(object_hits_player(&heal, -0.5, 0.0, 2.0));
    }

    #[test]
    fn test_bad_food_catches_grounded_player_only() {
        let bad = GameObject::new(ObjectId(4), ObjectKind::BadFood, Vec3::new(0.0, 0.5, 0.0));
        assert!(object_hits_player(&bad, -0.5, 0.0, 0.0));
        // Jumped over: 0.5 vs 2.4 is outside the 1.2 window
        assert!(!object_hits_player(&bad, -0.5, 0.0, 2.4));
    }

    #[test]
    fn test_inactive_and_decoration_never_hit() {
        let mut gate = gate_at(0.0, 0.0);
        gate.active = false;
        assert!(!object_hits_player(&gate, -0.5, 0.0, 0.0));

        let tree = GameObject::new(ObjectId(5), ObjectKind::Decoration, Vec3::new(0.0, 0.0, 0.0));
        assert!(!object_hits_player(&tree, -0.5, 0.0, 0.0));
    }

    #[test]
    fn test_advance_moves_and_collects_in_order() {
        let mut objects = vec![
            gate_at(0.0, -40.0),
            GameObject::new(ObjectId(6), ObjectKind::BadFood, Vec3::new(0.0, 0.5, -0.4)),
            gate_at(0.0, -0.5),
        ];

        let hits = advance_and_collect_hits(&mut objects, 0.6, 0.0, 0.0);
        // Far gate advanced but out of range
        assert_eq!(objects[0].position.z, -39.4);
        // Both near objects crossed, reported in vector order
        assert_eq!(hits, vec![1, 2]);
    }
}
