use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Deck {
    pub id: i64,
    pub title: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DeckList {
    pub decks: Vec<Deck>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewDeck {
    pub title: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: i64,
    pub front: String,
    pub back: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CardList {
    pub cards: Vec<Card>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewCard {
    pub front: String,
    pub back: String,
}

/// A card due for review, with its Leitner box (1..=5).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StudyCard {
    pub id: i64,
    pub front: String,
    pub back: String,
    pub box_level: u8,
}

/// `card` is null once nothing in the deck is due.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct NextCard {
    pub card: Option<StudyCard>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub correct: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReviewOutcome {
    pub success: bool,
    pub new_box_level: u8,
    pub next_review_days: u32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DeckProgress {
    pub total_cards: u64,
    pub mastered_cards: u64,
    pub studied_cards: u64,
    pub mastery_percentage: f64,
    pub study_percentage: f64,
    /// Keyed `box_1` .. `box_5`.
    #[serde(default)]
    pub box_distribution: BTreeMap<String, u64>,
}

impl DeckProgress {
    /// Card count per box in ascending box order, missing boxes as zero.
    pub fn boxes(&self) -> [(u8, u64); 5] {
        let mut out = [(0u8, 0u64); 5];
        for (i, slot) in out.iter_mut().enumerate() {
            let level = i as u8 + 1;
            let count = self
                .box_distribution
                .get(&format!("box_{level}"))
                .copied()
                .unwrap_or(0);
            *slot = (level, count);
        }
        out
    }
}
