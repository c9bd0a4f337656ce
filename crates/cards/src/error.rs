// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

use crate::Card;

/// Errors returned when building or inspecting cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token is not a suit and rank pair or a joker.
    #[error("invalid card code {0:?}")]
    InvalidCardCode(String),
    /// Rank or suit requested from a joker.
    #[error("card {0} has no rank or suit")]
    InvalidCard(Card),
    /// Rank index out of the 0..=12 range.
    #[error("unknown rank index {0}")]
    UnknownRank(u8),
}
