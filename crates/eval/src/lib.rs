// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildcard poker hand scoring.
//!
//! Scores a hand of cards, jokers included, with a single integer for the hand
//! category, from 1 for a high card up to 20 for a royal flush:
//!
//! | Category        | Score |
//! |-----------------|-------|
//! | Royal Flush     | 20    |
//! | Straight Flush  | 15    |
//! | Four of a Kind  | 12    |
//! | Full House      | 9     |
//! | Flush           | 7     |
//! | Straight        | 5     |
//! | Three of a Kind | 4     |
//! | Two Pair        | 3     |
//! | One Pair        | 2     |
//! | High Card       | 1     |
//!
//! Jokers are wildcards, the evaluator tries substitutions for them and keeps
//! the one with the highest score:
//!
//! ```
//! # use wildcard_eval::*;
//! assert_eq!(calculate_score(&["HT", "HJ", "HQ", "HK", "HA"]).unwrap(), 20);
//! assert_eq!(calculate_score(&["H2", "H3", "H4", "H5", "BJ"]).unwrap(), 15);
//! assert_eq!(calculate_score(&["SK", "HK", "DK", "S3", "C3"]).unwrap(), 9);
//! assert!(calculate_score(&["H2", "ZZ"]).is_err());
//! ```
//!
//! Use an [Evaluator] to change the jokers search or to find the best subset
//! of a larger set of cards:
//!
//! ```
//! # use wildcard_eval::*;
//! let cards = parse_hand(&["RJ", "ST", "SQ", "C5", "SK", "SJ", "HQ"]).unwrap();
//! let best = Evaluator::default().best_hand(&cards, 5).unwrap();
//! assert_eq!(best.resolution.category, HandCategory::RoyalFlush);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod classify;
pub mod eval;
pub use eval::{BestHand, Config, Evaluator, parse_hand};
pub mod resolve;
pub use resolve::{JokerSearch, Resolution};
pub mod score;
pub use score::HandCategory;

mod error;
pub use error::EvalError;

mod subsets;

// Reexport cards types.
pub use wildcard_cards::{Card, CardError, Deck, Joker, Rank, Suit};

/// Scores a hand of card tokens using the default configuration.
///
/// Fails if a token is not a valid card or if the hand is empty.
pub fn calculate_score<S: AsRef<str>>(hand: &[S]) -> Result<u32, EvalError> {
    Evaluator::default().score_tokens(hand)
}

/// Evaluates a hand using the default configuration.
pub fn evaluate(hand: &[Card]) -> Result<Resolution, EvalError> {
    Evaluator::default().eval(hand)
}
