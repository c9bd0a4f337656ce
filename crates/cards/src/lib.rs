// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildcard poker cards types.
//!
//! This crate define types to create cards, a card is either a ranked card
//! or one of the two jokers:
//!
//! ```
//! # use wildcard_cards::{Card, Joker, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let bj = Card::joker(Joker::Black);
//! assert!(bj.is_joker());
//! assert_eq!(ah.rank().unwrap(), Rank::Ace);
//! ```
//!
//! Cards are parsed from two characters tokens, suit first for ranked cards
//! (`"HA"`, `"DT"`, `"C2"`) and `"BJ"`, `"RJ"` for the jokers:
//!
//! ```
//! # use wildcard_cards::{Card, Rank, Suit};
//! let card = "ST".parse::<Card>().unwrap();
//! assert_eq!(card, Card::new(Rank::Ten, Suit::Spades));
//! assert_eq!(card.to_string(), "ST");
//! assert!("XX".parse::<Card>().is_err());
//! ```
//!
//! The [Deck] type gives access to the 54 distinct cards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, Joker, Rank, Suit};

mod error;
pub use error::CardError;
