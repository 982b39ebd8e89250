//! Game State Store
//!
//! The single owner of every scalar gameplay value: score, lives, speed,
//! streaks, buffs, the active question and the notice banner. All writes
//! go through the operations here; the frame loop and embedders read
//! through getters. Events are buffered as operations run and drained
//! once per frame.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    ANSWER_SCORE, BAD_FOOD_PENALTY, CARSI_IZNI_DURATION, COMBO_INTERVAL, DEFAULT_LANE_COUNT,
    INITIAL_LIVES, MILESTONE_TTL_ANSWER, MILESTONE_TTL_PICKUP, MILESTONE_TTL_SHOP, RUN_SPEED_BASE,
    RUN_SPEED_MAX, SHOP_THRESHOLD_START, SPEED_STEP,
};
use crate::core::rng::DeterministicRng;
use crate::game::events::GameEvent;
use crate::game::questions::{ActiveQuestion, QuestionId, QUESTION_BANK};
use crate::game::shop::{PurchaseError, ShopItemId};

// =============================================================================
// STATUS
// =============================================================================

/// Top-level run status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameStatus {
    /// Title screen; nothing simulates
    #[default]
    Menu,
    /// The run is live
    Playing,
    /// Paused at the cafeteria between question batches
    Shop,
    /// Out of lives
    GameOver,
}

// =============================================================================
// NOTICE TEXTS (user-facing, Turkish like the rest of the theme)
// =============================================================================

/// +1 life from a heal pickup
pub const MSG_HEAL_GAINED: &str = "REVİRDEN RAPOR ALDIN! (+1 CAN)";
/// Heal touched at full lives
pub const MSG_HEAL_FULL: &str = "ZATEN TURP GİBİSİN ASKER!";
/// Bad food penalty
pub const MSG_BAD_FOOD: &str = "KAPUSKA YEDİN! (-100 COF)";
/// Immortality earned from an answer streak
pub const MSG_COMBO_REWARD: &str = "ŞAFAK DOĞAN GÜNEŞ! ÇARŞI İZNİ KAZANDIN!";
/// Shop entry banner
pub const MSG_SHOP_WELCOME: &str = "ÇİPA KAFETERYAYA HOŞGELDİN!";
/// Score milestone at 500
pub const MSG_SCORE_500: &str = "Çipa kafeteryadan pasto kazandın!";
/// Score milestone at 1000
pub const MSG_SCORE_1000: &str = "Derste 10 dakika uyuyabilirsin!";
/// Score milestone at 1500
pub const MSG_SCORE_1500: &str = "Kaşarlı tost almaya hak kazandın!";
/// Score milestone at 2000
pub const MSG_SCORE_2000: &str = "Extra çarşı izni kazandın!";
/// Crossing 2500, fires once per run
pub const MSG_SCORE_2500: &str = "SÜPER EVCİ!!!";

// =============================================================================
// MILESTONE BANNER
// =============================================================================

/// Transient notice banner with its remaining display time.
///
/// Banners expire on their own after `remaining` seconds. A display layer
/// that wants to dismiss one early must present the matching generation,
/// so a stale dismissal cannot eat a newer banner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Text to display
    pub text: String,
    /// Generation token for deferred dismissal
    pub generation: u64,
    /// Seconds left before self-expiry
    pub remaining: f32,
}

// =============================================================================
// GAME STATE
// =============================================================================

/// The scalar game state and its operations.
///
/// Fields are private: every mutation is an operation with its rules
/// applied, and operations outside the right status are ignored rather
/// than trusted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    status: GameStatus,
    frame: u64,
    score: u32,
    lives: u8,
    max_lives: u8,
    speed: f32,
    lane_count: usize,
    current_question: Option<ActiveQuestion>,
    questions_answered: u32,
    gems_collected: u32,
    shop_threshold: u32,
    combo_count: u32,
    carsi_izni_active: bool,
    carsi_izni_timer: f32,
    has_double_jump: bool,
    milestone: Option<Milestone>,
    milestone_seq: u64,
    #[serde(skip)]
    pending_events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh store at the menu.
    pub fn new() -> Self {
        GameState {
            status: GameStatus::Menu,
            frame: 0,
            score: 0,
            lives: INITIAL_LIVES,
            max_lives: INITIAL_LIVES,
            speed: 0.0,
            lane_count: DEFAULT_LANE_COUNT,
            current_question: None,
            questions_answered: 0,
            gems_collected: 0,
            shop_threshold: SHOP_THRESHOLD_START,
            combo_count: 0,
            carsi_izni_active: false,
            carsi_izni_timer: 0.0,
            has_double_jump: false,
            milestone: None,
            milestone_seq: 0,
            pending_events: Vec::new(),
        }
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Current run status.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Frames simulated since the run started.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Current score.
    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Lives remaining.
    #[inline]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Life cap.
    #[inline]
    pub fn max_lives(&self) -> u8 {
        self.max_lives
    }

    /// Current forward speed (units/s).
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Speed as a multiple of the base run speed. Display layers scale
    /// animation and audio tempo off this.
    #[inline]
    pub fn speed_ratio(&self) -> f32 {
        self.speed / RUN_SPEED_BASE
    }

    /// Number of lanes on the track.
    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    /// The question currently in play, if any.
    #[inline]
    pub fn current_question(&self) -> Option<&ActiveQuestion> {
        self.current_question.as_ref()
    }

    /// Correct answers over the run.
    #[inline]
    pub fn questions_answered(&self) -> u32 {
        self.questions_answered
    }

    /// Gems banked over the run (one per correct answer).
    #[inline]
    pub fn gems_collected(&self) -> u32 {
        self.gems_collected
    }

    /// Correct answers needed to trigger the next shop visit.
    #[inline]
    pub fn shop_threshold(&self) -> u32 {
        self.shop_threshold
    }

    /// Current answer streak.
    #[inline]
    pub fn combo_count(&self) -> u32 {
        self.combo_count
    }

    /// Whether immortality is live.
    #[inline]
    pub fn carsi_izni_active(&self) -> bool {
        self.carsi_izni_active
    }

    /// Seconds of immortality left (zero when inactive).
    #[inline]
    pub fn carsi_izni_timer(&self) -> f32 {
        self.carsi_izni_timer
    }

    /// Whether the double jump upgrade is owned this run.
    #[inline]
    pub fn has_double_jump(&self) -> bool {
        self.has_double_jump
    }

    /// The notice banner, if one is up.
    #[inline]
    pub fn milestone(&self) -> Option<&Milestone> {
        self.milestone.as_ref()
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Start a fresh run: every per-run value resets, then the first
    /// question is picked.
    pub fn start_game(&mut self, rng: &mut DeterministicRng) {
        self.status = GameStatus::Playing;
        self.frame = 0;
        self.score = 0;
        self.lives = INITIAL_LIVES;
        self.max_lives = INITIAL_LIVES;
        self.speed = RUN_SPEED_BASE;
        self.current_question = None;
        self.questions_answered = 0;
        self.gems_collected = 0;
        self.shop_threshold = SHOP_THRESHOLD_START;
        self.combo_count = 0;
        self.carsi_izni_active = false;
        self.carsi_izni_timer = 0.0;
        self.has_double_jump = false;
        self.milestone = None;
        self.milestone_seq = 0;
        self.pending_events.clear();
        self.pick_next_question(rng);
    }

    /// Restart after game over. Identical to a fresh start.
    pub fn restart_game(&mut self, rng: &mut DeterministicRng) {
        self.start_game(rng);
    }

    /// Pick the next question uniformly from the bank under a fresh id.
    pub fn pick_next_question(&mut self, rng: &mut DeterministicRng) {
        let id = QuestionId::generate(rng);
        if let Some(template) = rng.choose(QUESTION_BANK) {
            self.current_question = Some(ActiveQuestion::from_template(id, template));
        }
    }

    // =========================================================================
    // ANSWERS
    // =========================================================================

    /// Resolve the current question against the gate the player crossed.
    ///
    /// On a correct answer: score, streak and speed rise, and a milestone
    /// banner may go up. On a wrong one: damage (or nothing under
    /// immortality), the streak dies and speed drops toward base. Either
    /// way the run then moves on to the shop or the next question, unless
    /// the wrong answer was the last life.
    pub fn submit_answer(&mut self, correct: bool, rng: &mut DeterministicRng) {
        if self.status != GameStatus::Playing {
            return;
        }
        let question_id = match &self.current_question {
            Some(question) => question.id,
            None => return,
        };

        if correct {
            let old_score = self.score;
            self.score = self.score.saturating_add(ANSWER_SCORE);
            self.gems_collected += 1;
            self.questions_answered += 1;
            self.speed = (self.speed + SPEED_STEP).min(RUN_SPEED_MAX);
            self.combo_count += 1;

            let mut message: Option<&'static str> = None;
            if self.combo_count % COMBO_INTERVAL == 0 && !self.carsi_izni_active {
                self.carsi_izni_active = true;
                self.carsi_izni_timer = CARSI_IZNI_DURATION;
                self.push_event(GameEvent::carsi_izni_activated(
                    self.frame,
                    CARSI_IZNI_DURATION,
                ));
                message = Some(MSG_COMBO_REWARD);
            }
            // A score milestone on the same answer wins the banner slot
            if let Some(milestone) = score_milestone(old_score, self.score) {
                message = Some(milestone);
            }
            if let Some(text) = message {
                self.raise_milestone(text, MILESTONE_TTL_ANSWER);
                self.push_event(GameEvent::milestone_reached(self.frame, text.to_string()));
            }
            self.push_event(GameEvent::answer_resolved(
                self.frame,
                question_id,
                true,
                self.score,
                self.combo_count,
            ));
        } else {
            self.take_damage();
            self.combo_count = 0;
            if self.status == GameStatus::Playing {
                self.speed = (self.speed - SPEED_STEP).max(RUN_SPEED_BASE);
            }
            self.push_event(GameEvent::answer_resolved(
                self.frame,
                question_id,
                false,
                self.score,
                0,
            ));
        }

        if self.status == GameStatus::Playing {
            if self.questions_answered >= self.shop_threshold {
                self.enter_shop();
            } else {
                self.pick_next_question(rng);
            }
        }
    }

    fn enter_shop(&mut self) {
        self.status = GameStatus::Shop;
        self.speed = 0.0;
        self.shop_threshold = self.shop_threshold.saturating_mul(2);
        self.raise_milestone(MSG_SHOP_WELCOME, MILESTONE_TTL_SHOP);
        self.push_event(GameEvent::shop_entered(self.frame, self.shop_threshold));
    }

    // =========================================================================
    // DAMAGE AND PICKUPS
    // =========================================================================

    /// Lose a life, unless immortality is live. The last life ends the run
    /// with speed zeroed.
    pub fn take_damage(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        if self.carsi_izni_active {
            return;
        }
        self.combo_count = 0;
        if self.lives > 1 {
            self.lives -= 1;
            self.push_event(GameEvent::damage_taken(self.frame, self.lives));
        } else {
            self.lives = 0;
            self.status = GameStatus::GameOver;
            self.speed = 0.0;
            self.push_event(GameEvent::damage_taken(self.frame, 0));
            self.push_event(GameEvent::game_over(
                self.frame,
                self.score,
                self.questions_answered,
                self.gems_collected,
            ));
        }
    }

    /// Touch a heal pickup: +1 life below the cap, a consolation banner at
    /// it.
    pub fn collect_heal(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        if self.lives < self.max_lives {
            self.lives += 1;
            self.raise_milestone(MSG_HEAL_GAINED, MILESTONE_TTL_PICKUP);
            self.push_event(GameEvent::heal_collected(self.frame, true, self.lives));
        } else {
            self.raise_milestone(MSG_HEAL_FULL, MILESTONE_TTL_PICKUP);
            self.push_event(GameEvent::heal_collected(self.frame, false, self.lives));
        }
    }

    /// Eat bad food: score penalty, floored at zero. Never touches lives.
    pub fn collect_bad_food(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.score = self.score.saturating_sub(BAD_FOOD_PENALTY);
        self.raise_milestone(MSG_BAD_FOOD, MILESTONE_TTL_PICKUP);
        self.push_event(GameEvent::bad_food_collected(self.frame, self.score));
    }

    // =========================================================================
    // TIMERS
    // =========================================================================

    /// Count the immortality window down. Only runs while playing, which
    /// is what freezes the buff across a shop visit.
    pub fn update_carsi_izni(&mut self, delta: f32) {
        if self.status != GameStatus::Playing || !self.carsi_izni_active {
            return;
        }
        self.carsi_izni_timer -= delta;
        if self.carsi_izni_timer <= 0.0 {
            self.carsi_izni_active = false;
            self.carsi_izni_timer = 0.0;
            self.push_event(GameEvent::carsi_izni_expired(self.frame));
        }
    }

    /// Count the notice banner down; it clears itself at zero. Runs in
    /// every status so banners keep expiring on menus and overlays.
    pub fn update_milestone(&mut self, delta: f32) {
        if let Some(milestone) = &mut self.milestone {
            milestone.remaining -= delta;
        }
        if self
            .milestone
            .as_ref()
            .is_some_and(|milestone| milestone.remaining <= 0.0)
        {
            self.milestone = None;
        }
    }

    /// Dismiss the banner early if `generation` still matches the one on
    /// display. Stale dismissals are ignored.
    pub fn clear_milestone(&mut self, generation: u64) {
        if self
            .milestone
            .as_ref()
            .is_some_and(|milestone| milestone.generation == generation)
        {
            self.milestone = None;
        }
    }

    fn raise_milestone(&mut self, text: &str, ttl: f32) {
        self.milestone_seq += 1;
        self.milestone = Some(Milestone {
            text: text.to_string(),
            generation: self.milestone_seq,
            remaining: ttl,
        });
    }

    // =========================================================================
    // SHOP
    // =========================================================================

    /// Buy an item with score. The store is untouched when the purchase is
    /// refused.
    pub fn buy_item(&mut self, item: ShopItemId) -> Result<(), PurchaseError> {
        let price = item.price();
        if self.score < price {
            return Err(PurchaseError::InsufficientScore {
                price,
                score: self.score,
            });
        }
        match item {
            ShopItemId::Heal => {
                if self.lives >= self.max_lives {
                    return Err(PurchaseError::LivesFull);
                }
                self.lives += 1;
            }
            ShopItemId::DoubleJump => {
                if self.has_double_jump {
                    return Err(PurchaseError::AlreadyOwned);
                }
                self.has_double_jump = true;
            }
            ShopItemId::Immortal => {
                // Repurchasable; a re-buy refreshes the window
                self.carsi_izni_active = true;
                self.carsi_izni_timer = CARSI_IZNI_DURATION;
                self.push_event(GameEvent::carsi_izni_activated(
                    self.frame,
                    CARSI_IZNI_DURATION,
                ));
            }
        }
        self.score -= price;
        self.push_event(GameEvent::item_purchased(self.frame, item, self.score));
        Ok(())
    }

    /// Leave the shop: back to playing at no less than base speed, with a
    /// fresh question picked.
    pub fn resume_from_shop(&mut self, rng: &mut DeterministicRng) {
        if self.status != GameStatus::Shop {
            return;
        }
        self.status = GameStatus::Playing;
        self.speed = self.speed.max(RUN_SPEED_BASE);
        self.pick_next_question(rng);
    }

    // =========================================================================
    // FRAME PLUMBING
    // =========================================================================

    /// Advance the frame counter. Called once per simulated frame.
    pub(crate) fn advance_frame(&mut self) {
        self.frame += 1;
    }

    /// Buffer an event for this frame.
    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }

    /// Drain everything buffered so far, in fire order.
    pub(crate) fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

/// Milestone text for crossing a fixed score mark, if the answer crossed
/// one. The four lower marks fire on the exact value; the top one fires
/// once when 2500 is first crossed.
fn score_milestone(old_score: u32, new_score: u32) -> Option<&'static str> {
    if new_score == 500 {
        Some(MSG_SCORE_500)
    } else if new_score == 1000 {
        Some(MSG_SCORE_1000)
    } else if new_score == 1500 {
        Some(MSG_SCORE_1500)
    } else if new_score == 2000 {
        Some(MSG_SCORE_2000)
    } else if new_score >= 2500 && old_score < 2500 {
        Some(MSG_SCORE_2500)
    } else {
        None
    }
}
