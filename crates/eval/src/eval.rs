// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluator.
use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;

use wildcard_cards::Card;

use crate::{
    EvalError, HandCategory,
    resolve::{JokerSearch, Resolution, resolve},
    subsets::for_each_ksubset,
};

/// The evaluator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How jokers are substituted.
    pub search: JokerSearch,
    /// Maximum number of jokers substitutions per suit for the exhaustive
    /// search, hands above it use the high ranks search.
    pub exhaustive_limit: usize,
}

impl Config {
    /// The default exhaustive search limit, enough for six jokers.
    pub const EXHAUSTIVE_LIMIT: usize = 20_000;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: JokerSearch::default(),
            exhaustive_limit: Self::EXHAUSTIVE_LIMIT,
        }
    }
}

/// Scores hands with the given configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: Config,
}

impl Evaluator {
    /// Creates an evaluator.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The evaluator configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluates a hand, replacing jokers with the best cards.
    pub fn eval(&self, hand: &[Card]) -> Result<Resolution, EvalError> {
        resolve(hand, &self.config)
    }

    /// Returns the hand score.
    pub fn score(&self, hand: &[Card]) -> Result<u32, EvalError> {
        self.eval(hand).map(|r| r.score())
    }

    /// Parses and scores a list of card tokens.
    pub fn score_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<u32, EvalError> {
        self.score(&parse_hand(tokens)?)
    }

    /// Finds the best `size` cards subset of the given cards.
    ///
    /// Subsets are visited in colexicographic order of the cards positions and
    /// the first subset with the highest score wins, the search stops at the
    /// first royal flush.
    pub fn best_hand(&self, cards: &[Card], size: usize) -> Result<BestHand, EvalError> {
        if cards.is_empty() || size == 0 {
            return Err(EvalError::EmptyHand);
        }

        if size > cards.len() {
            return Err(EvalError::SubsetTooLarge {
                size,
                hand: cards.len(),
            });
        }

        let mut best: Option<BestHand> = None;
        let mut error = None;
        let mut subset = Vec::with_capacity(size);

        for_each_ksubset(cards.len(), size, |positions| {
            subset.clear();
            subset.extend(positions.iter().map(|&p| cards[p]));

            match self.eval(&subset) {
                Ok(resolution) => {
                    let is_better = best
                        .as_ref()
                        .is_none_or(|b| resolution.category > b.resolution.category);
                    if is_better {
                        best = Some(BestHand {
                            cards: subset.clone(),
                            resolution,
                        });
                    }
                }
                Err(e) => {
                    error = Some(e);
                    return ControlFlow::Break(());
                }
            }

            let is_royal = best
                .as_ref()
                .is_some_and(|b| b.resolution.category == HandCategory::RoyalFlush);
            if is_royal {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        if let Some(e) = error {
            return Err(e);
        }

        let best = best.ok_or(EvalError::EmptyHand)?;
        debug!(
            "Best {size} cards of {cards:?}: {:?} {}",
            best.cards, best.resolution.category
        );

        Ok(best)
    }
}

/// The best subset of a set of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestHand {
    /// The chosen cards, jokers included.
    pub cards: Vec<Card>,
    /// The resolved subset.
    pub resolution: Resolution,
}

impl BestHand {
    /// The subset score.
    pub fn score(&self) -> u32 {
        self.resolution.score()
    }
}

/// Parses a list of card tokens.
pub fn parse_hand<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, EvalError> {
    tokens
        .iter()
        .map(|t| t.as_ref().parse::<Card>().map_err(EvalError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildcard_cards::CardError;

    fn hand(tokens: &str) -> Vec<Card> {
        parse_hand(&tokens.split_whitespace().collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn parse_tokens() {
        let cards = parse_hand(&["HA", "BJ", "CT"]).unwrap();
        assert_eq!(cards.len(), 3);
        assert!(cards[1].is_joker());

        assert_eq!(
            parse_hand(&["HA", "H1"]),
            Err(EvalError::Card(CardError::InvalidCardCode("H1".to_string())))
        );

        let empty: [&str; 0] = [];
        assert_eq!(parse_hand(&empty), Ok(vec![]));
    }

    #[test]
    fn score_tokens() {
        let eval = Evaluator::default();
        assert_eq!(eval.score_tokens(&["HT", "HJ", "HQ", "HK", "HA"]), Ok(20));
        assert_eq!(
            eval.score_tokens(&["HT", "XX"]),
            Err(EvalError::Card(CardError::InvalidCardCode("XX".to_string())))
        );

        let empty: [String; 0] = [];
        assert_eq!(eval.score_tokens(&empty), Err(EvalError::EmptyHand));
    }

    #[test]
    fn config_search() {
        let h = hand("H2 H3 H4 H5 BJ");

        let eval = Evaluator::new(Config::default());
        assert_eq!(eval.config().search, JokerSearch::Exhaustive);
        assert_eq!(eval.score(&h), Ok(15));

        let eval = Evaluator::new(Config {
            search: JokerSearch::HighRanks,
            ..Config::default()
        });
        assert_eq!(eval.score(&h), Ok(7));

        // No room for the exhaustive search.
        let eval = Evaluator::new(Config {
            exhaustive_limit: 0,
            ..Config::default()
        });
        assert_eq!(eval.config().search, JokerSearch::Exhaustive);
        assert_eq!(eval.score(&h), Ok(7));
    }

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert_eq!(config.search, JokerSearch::Exhaustive);
        assert_eq!(config.exhaustive_limit, Config::EXHAUSTIVE_LIMIT);
    }

    #[test]
    fn best_hand_combines_cards() {
        // Dealer cards followed by player cards.
        let cards = hand("RJ ST SQ C5 SK SJ HQ S3");
        let best = Evaluator::default().best_hand(&cards, 5).unwrap();
        assert_eq!(best.score(), 20);
        assert_eq!(best.cards, hand("RJ ST SQ SK SJ"));
        assert_eq!(best.resolution.category, HandCategory::RoyalFlush);
    }

    #[test]
    fn best_hand_stops_at_royal_flush() {
        // Both flushes are royal, the first one wins.
        let cards = hand("HT HJ HQ HK HA ST SJ SQ SK SA");
        let best = Evaluator::default().best_hand(&cards, 5).unwrap();
        assert_eq!(best.cards, hand("HT HJ HQ HK HA"));
        assert_eq!(best.score(), 20);
    }

    #[test]
    fn best_hand_first_wins() {
        let cards = hand("H2 D2 S2 C9");
        let best = Evaluator::default().best_hand(&cards, 2).unwrap();
        assert_eq!(best.cards, hand("H2 D2"));
        assert_eq!(best.resolution.category, HandCategory::OnePair);
    }

    #[test]
    fn best_hand_errors() {
        let eval = Evaluator::default();
        let cards = hand("H2 D2 S2");

        assert_eq!(eval.best_hand(&cards, 0), Err(EvalError::EmptyHand));
        assert_eq!(eval.best_hand(&[], 3), Err(EvalError::EmptyHand));
        assert_eq!(
            eval.best_hand(&cards, 4),
            Err(EvalError::SubsetTooLarge { size: 4, hand: 3 })
        );

        let best = eval.best_hand(&cards, 3).unwrap();
        assert_eq!(best.cards, cards);
    }
}
