// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardError;

/// A Poker card.
///
/// A card is either a ranked card with a suit or a joker, jokers have no rank
/// and suit and act as wildcards when a hand is evaluated.
///
/// Cards are serialized using their two characters token, see [Card::from_str].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Card {
    /// A card with a rank and a suit.
    Ranked {
        /// The card rank.
        rank: Rank,
        /// The card suit.
        suit: Suit,
    },
    /// A wildcard.
    Joker(Joker),
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card::Ranked { rank, suit }
    }

    /// Create a joker card.
    pub fn joker(joker: Joker) -> Card {
        Card::Joker(joker)
    }

    /// Checks if this card is a joker.
    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker(_))
    }

    /// Returns the card rank, fails for jokers.
    pub fn rank(&self) -> Result<Rank, CardError> {
        match self {
            Card::Ranked { rank, .. } => Ok(*rank),
            Card::Joker(_) => Err(CardError::InvalidCard(*self)),
        }
    }

    /// Returns the card suit, fails for jokers.
    pub fn suit(&self) -> Result<Suit, CardError> {
        match self {
            Card::Ranked { suit, .. } => Ok(*suit),
            Card::Joker(_) => Err(CardError::InvalidCard(*self)),
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card token.
    ///
    /// Ranked cards use the suit character followed by the rank character
    /// (`"HA"`, `"S9"`, `"DT"`), jokers use `"BJ"` and `"RJ"`. Parsing is case
    /// sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidCardCode(s.to_string());

        if let Some(joker) = Joker::jokers().find(|j| j.code() == s) {
            return Ok(Card::Joker(joker));
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(suit), Some(rank), None) => {
                let suit = Suit::from_char(suit).ok_or_else(invalid)?;
                let rank = Rank::from_char(rank).ok_or_else(invalid)?;
                Ok(Card::new(rank, suit))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Ranked { rank, suit } => write!(f, "{suit}{rank}"),
            Card::Joker(joker) => write!(f, "{}", joker.code()),
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// Returns all ranks from the lowest to the highest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> + ExactSizeIterator + Clone {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank index, 0 for a deuce up to 12 for an ace.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the rank for the given index.
    pub fn from_index(index: u8) -> Result<Rank, CardError> {
        Rank::ranks()
            .nth(index as usize)
            .ok_or(CardError::UnknownRank(index))
    }

    /// Returns the rank for a token character.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> + ExactSizeIterator + Clone {
        [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// Returns the suit for a token character.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// The two jokers, they have the same scoring semantics.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Joker {
    /// Black joker, `"BJ"`.
    Black,
    /// Red joker, `"RJ"`.
    Red,
}

impl Joker {
    /// Returns both jokers.
    pub fn jokers() -> impl DoubleEndedIterator<Item = Joker> {
        [Joker::Black, Joker::Red].into_iter()
    }

    /// The joker token.
    pub fn code(&self) -> &'static str {
        match self {
            Joker::Black => "BJ",
            Joker::Red => "RJ",
        }
    }
}

/// The full set of distinct cards, 52 ranked cards followed by the jokers.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 54;

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The deck cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes the jokers from the deck.
    pub fn without_jokers(mut self) -> Self {
        self.cards.retain(|c| !c.is_joker());
        self
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .chain(Joker::jokers().map(Card::joker))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
