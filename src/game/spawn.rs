//! Wave Spawning
//!
//! Places one gate row per question far down the track, with an occasional
//! side pickup riding ahead of it. Spawning is gated two ways: a question
//! spawns at most once (its selection id is remembered), and never while an
//! earlier wave is still beyond the clear-ahead depth.

use tracing::debug;

use crate::core::constants::{
    lane_center_x, BAD_FOOD_HEIGHT, CLEAR_AHEAD_DEPTH, GATE_HEIGHT, GATE_SPAWN_DEPTH, HEAL_HEIGHT,
    SIDE_SPAWN_LEAD,
};
use crate::core::vec3::Vec3;
use crate::game::events::GameEvent;
use crate::game::objects::{GameObject, ObjectId, ObjectKind};
use crate::game::questions::distractor_color;
use crate::game::state::GameStatus;
use crate::game::world::GameWorld;

/// Wave spawning tunables.
#[derive(Clone, Copy, Debug)]
pub struct SpawnConfig {
    /// Chance a wave brings a side pickup with it
    pub side_object_chance: f32,
    /// Chance the side pickup is a heal (otherwise bad food)
    pub heal_chance: f32,
    /// Depth gates spawn at
    pub gate_depth: f32,
    /// Side pickups spawn this much closer than their gates
    pub side_lead: f32,
    /// No spawn while anything active is still ahead of this depth
    pub clear_ahead_depth: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        SpawnConfig {
            side_object_chance: 0.5,
            heal_chance: 0.5,
            gate_depth: GATE_SPAWN_DEPTH,
            side_lead: SIDE_SPAWN_LEAD,
            clear_ahead_depth: CLEAR_AHEAD_DEPTH,
        }
    }
}

/// Spawn the current question's wave if the track ahead is clear.
pub(crate) fn maybe_spawn_wave(world: &mut GameWorld) {
    if world.state.status() != GameStatus::Playing {
        return;
    }

    let config = world.config.spawn;

    let (question_id, correct_index, tense, options) = match world.state.current_question() {
        Some(question) => (
            question.id,
            question.correct_index,
            question.tense,
            question.options.clone(),
        ),
        None => return,
    };

    // Each selection spawns at most once
    if world.last_spawned == Some(question_id) {
        return;
    }
    // And never on top of a wave still ahead of the player
    if world
        .objects
        .iter()
        .any(|object| object.active && object.position.z < config.clear_ahead_depth)
    {
        return;
    }

    let lane_count = world.state.lane_count();

    // Side pickup goes in first: it sits closer than the gates, so it must
    // also resolve first on any shared frame
    let mut with_side_object = false;
    if world.rng.chance(config.side_object_chance) {
        let lane = world.rng.next_index(lane_count);
        let (kind, height) = if world.rng.chance(config.heal_chance) {
            (ObjectKind::HealPickup, HEAL_HEIGHT)
        } else {
            (ObjectKind::BadFood, BAD_FOOD_HEIGHT)
        };
        let position = Vec3::new(
            lane_center_x(lane, lane_count),
            height,
            config.gate_depth + config.side_lead,
        );
        push_object(world, kind, position);
        with_side_object = true;
    }

    let correct_color = tense.color();
    let mut gate_count: u8 = 0;
    for (index, text) in options.into_iter().enumerate() {
        if index >= lane_count {
            break;
        }
        let correct = index == correct_index;
        let color = if correct {
            correct_color.to_string()
        } else {
            distractor_color(&mut world.rng, correct_color).to_string()
        };
        let position = Vec3::new(
            lane_center_x(index, lane_count),
            GATE_HEIGHT,
            config.gate_depth,
        );
        push_object(world, ObjectKind::AnswerGate { text, correct, color }, position);
        gate_count += 1;
    }

    world.last_spawned = Some(question_id);
    debug!(
        "wave spawned: {} gates, side object: {}",
        gate_count, with_side_object
    );
    let frame = world.state.frame();
    world.state.push_event(GameEvent::wave_spawned(
        frame,
        question_id,
        gate_count,
        with_side_object,
    ));
}

fn push_object(world: &mut GameWorld, kind: ObjectKind, position: Vec3) {
    let id = ObjectId(world.next_object_id);
    world.next_object_id += 1;
    world.objects.push(GameObject::new(id, kind, position));
}
