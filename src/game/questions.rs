//! Grammar Question Bank
//!
//! Static tense-quiz templates plus the owned per-run copy handed to the
//! store. Each selection stamps a fresh random id so the spawn controller
//! can tell consecutive picks of the same template apart.

use serde::{Deserialize, Serialize};

use crate::core::rng::DeterministicRng;

// =============================================================================
// TENSE CATEGORIES
// =============================================================================

/// Grammar tense category of a question. Drives gate coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tense {
    /// Simple and continuous present
    Present = 0,
    /// Simple past
    Past = 1,
    /// Future forms
    Future = 2,
    /// Mixed drills
    Mixed = 3,
}

impl Tense {
    /// Display color (hex) worn by the correct gate of this tense.
    pub fn color(self) -> &'static str {
        match self {
            Tense::Present => "#00e676",
            Tense::Past => "#ff1744",
            Tense::Future => "#2979ff",
            Tense::Mixed => "#ffea00",
        }
    }
}

/// Pick a gate color different from the correct one.
///
/// Draws uniformly from the three primary tense colors minus the correct
/// color, so wrong gates never give the answer away by matching it.
pub fn distractor_color(rng: &mut DeterministicRng, correct_color: &str) -> &'static str {
    const PRIMARY: [Tense; 3] = [Tense::Present, Tense::Past, Tense::Future];
    let pool: Vec<&'static str> = PRIMARY
        .iter()
        .map(|tense| tense.color())
        .filter(|color| *color != correct_color)
        .collect();
    match rng.choose(&pool) {
        Some(color) => color,
        None => Tense::Mixed.color(),
    }
}

// =============================================================================
// QUESTION IDENTITY
// =============================================================================

/// Unique id stamped on each question selection (16 random bytes).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct QuestionId(pub [u8; 16]);

impl QuestionId {
    /// Create an id from raw bytes.
    pub const fn new(bytes: [u8; 16]) -> Self {
        QuestionId(bytes)
    }

    /// Draw a fresh id from the world RNG.
    pub fn generate(rng: &mut DeterministicRng) -> Self {
        QuestionId(rng.id_bytes())
    }

    /// Format as a UUID string for logs and display layers.
    pub fn to_uuid_string(&self) -> String {
        uuid::Uuid::from_bytes(self.0).to_string()
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

// =============================================================================
// TEMPLATES AND THE ACTIVE QUESTION
// =============================================================================

/// One immutable entry in the question bank.
#[derive(Clone, Copy, Debug)]
pub struct QuestionTemplate {
    /// Sentence with a `______` blank to fill
    pub sentence: &'static str,
    /// Answer options, one gate each (up to the lane count)
    pub options: &'static [&'static str],
    /// Index into `options` of the right answer
    pub correct_index: usize,
    /// Tense category
    pub tense: Tense,
}

/// The question currently in play: an owned copy of a bank template with
/// its selection id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActiveQuestion {
    /// Selection id (fresh per pick)
    pub id: QuestionId,
    /// Sentence with the blank
    pub sentence: String,
    /// Answer options in gate order
    pub options: Vec<String>,
    /// Index of the right answer
    pub correct_index: usize,
    /// Tense category
    pub tense: Tense,
}

impl ActiveQuestion {
    /// Copy a template out of the bank under a fresh id.
    pub fn from_template(id: QuestionId, template: &QuestionTemplate) -> Self {
        ActiveQuestion {
            id,
            sentence: template.sentence.to_string(),
            options: template.options.iter().map(|s| s.to_string()).collect(),
            correct_index: template.correct_index,
            tense: template.tense,
        }
    }

    /// Text of the correct option.
    pub fn correct_option(&self) -> &str {
        self.options
            .get(self.correct_index)
            .map(String::as_str)
            .unwrap_or("")
    }
}

// =============================================================================
// THE BANK
// =============================================================================

/// Full question bank. Selection is uniform per pick.
pub const QUESTION_BANK: &[QuestionTemplate] = &[
    // Present tense
    QuestionTemplate {
        sentence: "I usually ______ early in the morning.",
        options: &["wake up", "wakes up", "woke up", "is waking"],
        correct_index: 0,
        tense: Tense::Present,
    },
    QuestionTemplate {
        sentence: "She ______ to school by bus every day.",
        options: &["go", "goes", "went", "going"],
        correct_index: 1,
        tense: Tense::Present,
    },
    QuestionTemplate {
        sentence: "He ______ not like pizza.",
        options: &["do", "does", "did", "is"],
        correct_index: 1,
        tense: Tense::Present,
    },
    QuestionTemplate {
        sentence: "______ you visit your grandmother often?",
        options: &["Do", "Does", "Did", "Are"],
        correct_index: 0,
        tense: Tense::Present,
    },
    QuestionTemplate {
        sentence: "The sun ______ in the east.",
        options: &["rise", "rises", "rose", "rising"],
        correct_index: 1,
        tense: Tense::Present,
    },
    QuestionTemplate {
        sentence: "Look! It ______ right now.",
        options: &["rain", "rains", "rained", "is raining"],
        correct_index: 3,
        tense: Tense::Present,
    },
    QuestionTemplate {
        sentence: "I ______ busy right now.",
        options: &["am", "is", "are", "be"],
        correct_index: 0,
        tense: Tense::Present,
    },
    QuestionTemplate {
        sentence: "My father ______ work on Sundays.",
        options: &["don't", "isn't", "doesn't", "didn't"],
        correct_index: 2,
        tense: Tense::Present,
    },
    QuestionTemplate {
        sentence: "______ she like ice cream?",
        options: &["Do", "Does", "Is", "Are"],
        correct_index: 1,
        tense: Tense::Present,
    },
    QuestionTemplate {
        sentence: "Water ______ at 100 degrees Celsius.",
        options: &["boil", "boils", "boiled", "boiling"],
        correct_index: 1,
        tense: Tense::Present,
    },
    // Past tense
    QuestionTemplate {
        sentence: "They ______ football yesterday.",
        options: &["play", "plays", "played", "playing"],
        correct_index: 2,
        tense: Tense::Past,
    },
    QuestionTemplate {
        sentence: "We ______ happy to see you last night.",
        options: &["was", "were", "are", "is"],
        correct_index: 1,
        tense: Tense::Past,
    },
    QuestionTemplate {
        sentence: "I ______ buy a new car last week.",
        options: &["didn't", "don't", "doesn't", "wasn't"],
        correct_index: 0,
        tense: Tense::Past,
    },
    QuestionTemplate {
        sentence: "Where ______ she go yesterday?",
        options: &["do", "does", "did", "is"],
        correct_index: 2,
        tense: Tense::Past,
    },
    QuestionTemplate {
        sentence: "They ______ ready for the exam two days ago.",
        options: &["aren't", "weren't", "wasn't", "didn't"],
        correct_index: 1,
        tense: Tense::Past,
    },
    QuestionTemplate {
        sentence: "We ______ a great movie last weekend.",
        options: &["watch", "watches", "watched", "watching"],
        correct_index: 2,
        tense: Tense::Past,
    },
    QuestionTemplate {
        sentence: "I ______ my keys yesterday.",
        options: &["lose", "loses", "lost", "losing"],
        correct_index: 2,
        tense: Tense::Past,
    },
    QuestionTemplate {
        sentence: "______ you tired last night?",
        options: &["Do", "Did", "Are", "Were"],
        correct_index: 3,
        tense: Tense::Past,
    },
    QuestionTemplate {
        sentence: "Why ______ you crying?",
        options: &["do", "did", "are", "have"],
        correct_index: 2,
        tense: Tense::Past,
    },
    QuestionTemplate {
        sentence: "She ______ Paris in 2010.",
        options: &["visit", "visits", "visited", "visiting"],
        correct_index: 2,
        tense: Tense::Past,
    },
    // Future tense
    QuestionTemplate {
        sentence: "I ______ call you tomorrow.",
        options: &["will", "did", "am", "do"],
        correct_index: 0,
        tense: Tense::Future,
    },
    QuestionTemplate {
        sentence: "We ______ to the cinema tonight.",
        options: &["go", "are going", "went", "gone"],
        correct_index: 1,
        tense: Tense::Future,
    },
    QuestionTemplate {
        sentence: "It ______ rain tomorrow.",
        options: &["is", "did", "will", "has"],
        correct_index: 2,
        tense: Tense::Future,
    },
    QuestionTemplate {
        sentence: "______ you help me later?",
        options: &["Do", "Did", "Will", "Are"],
        correct_index: 2,
        tense: Tense::Future,
    },
];
