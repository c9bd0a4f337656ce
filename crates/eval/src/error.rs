// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use wildcard_cards::CardError;

/// Errors returned when scoring a hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A card token could not be parsed or a card is invalid.
    #[error(transparent)]
    Card(#[from] CardError),
    /// The hand has no cards.
    #[error("empty hand")]
    EmptyHand,
    /// Asked for a subset larger than the hand.
    #[error("cannot choose {size} cards from a hand of {hand}")]
    SubsetTooLarge {
        /// The requested subset size.
        size: usize,
        /// The hand size.
        hand: usize,
    },
}
