//! Game Events
//!
//! One event per audible or visible beat of the run, buffered by the store
//! during a frame and drained into the frame result. Display layers map
//! these to audio cues, flashes and overlays; tests read them as the
//! ground truth of what happened.

use serde::{Deserialize, Serialize};

use crate::game::questions::QuestionId;
use crate::game::shop::ShopItemId;

/// Event payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEventData {
    /// A gate was crossed and the answer judged.
    AnswerResolved {
        /// Selection id of the question that was answered
        question_id: QuestionId,
        /// Whether the crossed gate carried the right option
        correct: bool,
        /// Score after the answer
        score: u32,
        /// Streak after the answer (zero on a wrong one)
        combo: u32,
    },
    /// A life was lost. Suppressed entirely while immortal.
    DamageTaken {
        /// Lives remaining
        lives: u8,
    },
    /// Heal pickup touched; `gained` is false at full lives.
    HealCollected {
        /// Whether a life was actually added
        gained: bool,
        /// Lives after the touch
        lives: u8,
    },
    /// Bad food hit.
    BadFoodCollected {
        /// Score after the penalty
        score: u32,
    },
    /// The player left the ground, or kicked again mid-air.
    Jumped {
        /// True for the mid-air kick
        double: bool,
    },
    /// Immortality switched on, from a streak or a purchase.
    CarsiIzniActivated {
        /// Duration granted
        seconds: f32,
    },
    /// Immortality ran out.
    CarsiIzniExpired,
    /// A reward banner was raised (score milestone or streak reward).
    MilestoneReached {
        /// Banner text
        message: String,
    },
    /// Answer threshold crossed; the world pauses for shopping.
    ShopEntered {
        /// Correct answers needed for the visit after this one
        next_threshold: u32,
    },
    /// An item was bought.
    ItemPurchased {
        /// What was bought
        item: ShopItemId,
        /// Score after the deduction
        score: u32,
    },
    /// Out of lives.
    GameOver {
        /// Final score
        score: u32,
        /// Correct answers over the run
        questions_answered: u32,
        /// Gems banked over the run
        gems_collected: u32,
    },
    /// A question wave materialized down the track.
    WaveSpawned {
        /// Selection id the wave belongs to
        question_id: QuestionId,
        /// Gates placed (capped at the lane count)
        gate_count: u8,
        /// Whether a side pickup rode along
        with_side_object: bool,
    },
}

/// A game event stamped with the frame it fired on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Frame counter value at fire time
    pub frame: u64,
    /// Payload
    pub data: GameEventData,
}

impl GameEvent {
    /// Answer resolution event.
    pub fn answer_resolved(
        frame: u64,
        question_id: QuestionId,
        correct: bool,
        score: u32,
        combo: u32,
    ) -> Self {
        GameEvent {
            frame,
            data: GameEventData::AnswerResolved {
                question_id,
                correct,
                score,
                combo,
            },
        }
    }

    /// Damage event.
    pub fn damage_taken(frame: u64, lives: u8) -> Self {
        GameEvent {
            frame,
            data: GameEventData::DamageTaken { lives },
        }
    }

    /// Heal pickup event.
    pub fn heal_collected(frame: u64, gained: bool, lives: u8) -> Self {
        GameEvent {
            frame,
            data: GameEventData::HealCollected { gained, lives },
        }
    }

    /// Bad food event.
    pub fn bad_food_collected(frame: u64, score: u32) -> Self {
        GameEvent {
            frame,
            data: GameEventData::BadFoodCollected { score },
        }
    }

    /// Jump event.
    pub fn jumped(frame: u64, double: bool) -> Self {
        GameEvent {
            frame,
            data: GameEventData::Jumped { double },
        }
    }

    /// Immortality-on event.
    pub fn carsi_izni_activated(frame: u64, seconds: f32) -> Self {
        GameEvent {
            frame,
            data: GameEventData::CarsiIzniActivated { seconds },
        }
    }

    /// Immortality-off event.
    pub fn carsi_izni_expired(frame: u64) -> Self {
        GameEvent {
            frame,
            data: GameEventData::CarsiIzniExpired,
        }
    }

    /// Reward banner event.
    pub fn milestone_reached(frame: u64, message: String) -> Self {
        GameEvent {
            frame,
            data: GameEventData::MilestoneReached { message },
        }
    }

    /// Shop entry event.
    pub fn shop_entered(frame: u64, next_threshold: u32) -> Self {
        GameEvent {
            frame,
            data: GameEventData::ShopEntered { next_threshold },
        }
    }

    /// Purchase event.
    pub fn item_purchased(frame: u64, item: ShopItemId, score: u32) -> Self {
        GameEvent {
            frame,
            data: GameEventData::ItemPurchased { item, score },
        }
    }

    /// Run-over event.
    pub fn game_over(frame: u64, score: u32, questions_answered: u32, gems_collected: u32) -> Self {
        GameEvent {
            frame,
            data: GameEventData::GameOver {
                score,
                questions_answered,
                gems_collected,
            },
        }
    }

    /// Wave spawn event.
    pub fn wave_spawned(
        frame: u64,
        question_id: QuestionId,
        gate_count: u8,
        with_side_object: bool,
    ) -> Self {
        GameEvent {
            frame,
            data: GameEventData::WaveSpawned {
                question_id,
                gate_count,
                with_side_object,
            },
        }
    }
}
