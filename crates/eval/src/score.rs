// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and their scores.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::Classification;

/// A hand category, ordered from the weakest to the strongest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No matching category.
    HighCard,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Straight flush from ten to ace.
    RoyalFlush,
}

impl HandCategory {
    /// The lowest score.
    pub const MIN_SCORE: u32 = 1;

    /// The highest score.
    pub const MAX_SCORE: u32 = 20;

    /// Applies the precedence table to a classification, first match wins.
    pub fn from_classification(c: &Classification) -> Self {
        let counts = &c.counts;

        if c.is_royal_flush() {
            HandCategory::RoyalFlush
        } else if c.is_straight_flush() {
            HandCategory::StraightFlush
        } else if counts.max_count() >= 4 {
            HandCategory::FourOfAKind
        } else if counts.has_exactly(3) && counts.has_exactly(2) {
            HandCategory::FullHouse
        } else if c.flush {
            HandCategory::Flush
        } else if c.straight {
            HandCategory::Straight
        } else if counts.has_exactly(3) {
            HandCategory::ThreeOfAKind
        } else if counts.pairs() >= 2 {
            HandCategory::TwoPair
        } else if counts.pairs() == 1 {
            HandCategory::OnePair
        } else {
            HandCategory::HighCard
        }
    }

    /// The category score.
    pub fn score(&self) -> u32 {
        match self {
            HandCategory::RoyalFlush => 20,
            HandCategory::StraightFlush => 15,
            HandCategory::FourOfAKind => 12,
            HandCategory::FullHouse => 9,
            HandCategory::Flush => 7,
            HandCategory::Straight => 5,
            HandCategory::ThreeOfAKind => 4,
            HandCategory::TwoPair => 3,
            HandCategory::OnePair => 2,
            HandCategory::HighCard => 1,
        }
    }

    /// Returns all categories from the weakest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}
