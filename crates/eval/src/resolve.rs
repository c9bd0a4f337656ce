// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jokers resolution.
//!
//! A joker can stand for any card, the resolver replaces the jokers in a hand
//! with ranked cards and keeps the substitution with the highest score. When
//! the ranked cards already form a flush the jokers only take that suit,
//! otherwise all four suits are tried, with all jokers in a substitution
//! sharing the same suit.
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;

use wildcard_cards::{Card, Rank, Suit};

use crate::{
    Config, EvalError,
    classify::{Classification, RankCounts, is_flush},
    score::HandCategory,
    subsets::{for_each_multiset, multisets_count},
};

/// How jokers ranks are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JokerSearch {
    /// Try every multiset of ranks for the jokers.
    ///
    /// Falls back to [JokerSearch::HighRanks] when the multisets for a suit
    /// exceed [Config::exhaustive_limit].
    #[default]
    Exhaustive,
    /// Give the jokers distinct ranks descending from the ace, skipping the
    /// ranks already in the hand.
    ///
    /// This is a single substitution per suit, it doesn't always find the
    /// best hand (jokers can't complete low straights or add to a pair).
    HighRanks,
}

/// A resolved hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The hand category.
    pub category: HandCategory,
    /// The hand with jokers replaced by ranked cards.
    pub hand: Vec<Card>,
}

impl Resolution {
    /// The hand score.
    pub fn score(&self) -> u32 {
        self.category.score()
    }
}

/// Categorizes a hand as it is, jokers are only used to fill straights gaps.
pub fn categorize(hand: &[Card]) -> HandCategory {
    HandCategory::from_classification(&Classification::new(hand))
}

/// Finds the best substitution for the jokers in a hand.
///
/// Returns the hand unchanged if there are no jokers, stops searching as soon
/// as a substitution makes a royal flush.
pub fn resolve(hand: &[Card], config: &Config) -> Result<Resolution, EvalError> {
    if hand.is_empty() {
        return Err(EvalError::EmptyHand);
    }

    let jokers = hand
        .iter()
        .enumerate()
        .filter_map(|(pos, c)| c.is_joker().then_some(pos))
        .collect::<Vec<_>>();

    if jokers.is_empty() {
        return Ok(Resolution {
            category: categorize(hand),
            hand: hand.to_vec(),
        });
    }

    let best = search_jokers(hand, &jokers, joker_search(config, jokers.len()));
    let resolution = best.resolution.ok_or(EvalError::EmptyHand)?;
    debug!(
        "Resolved {} jokers in {hand:?} as {:?}: {} ({} candidates)",
        jokers.len(),
        resolution.hand,
        resolution.category,
        best.evaluated
    );

    Ok(resolution)
}

/// Tries substitutions for the jokers at the given positions.
fn search_jokers(hand: &[Card], jokers: &[usize], search: JokerSearch) -> Best {
    let mut best = Best::default();
    let mut candidate = hand.to_vec();

    for suit in candidate_suits(hand) {
        match search {
            JokerSearch::Exhaustive => {
                let ranks = Rank::ranks().collect::<Vec<_>>();
                for_each_multiset(Rank::COUNT, jokers.len(), |m| {
                    for (&pos, &idx) in jokers.iter().zip(m) {
                        candidate[pos] = Card::new(ranks[idx], suit);
                    }

                    best.consider(&candidate);
                    if best.is_royal_flush() {
                        ControlFlow::Break(())
                    } else {
                        ControlFlow::Continue(())
                    }
                });
            }
            JokerSearch::HighRanks => {
                let ranks = high_ranks(&RankCounts::new(hand), jokers.len());
                for (&pos, &rank) in jokers.iter().zip(&ranks) {
                    candidate[pos] = Card::new(rank, suit);
                }

                best.consider(&candidate);
            }
        }

        if best.is_royal_flush() {
            break;
        }
    }

    best
}

/// The search to use for the given number of jokers.
fn joker_search(config: &Config, jokers: usize) -> JokerSearch {
    match config.search {
        JokerSearch::Exhaustive => {
            let size = multisets_count(Rank::COUNT, jokers);
            if size > config.exhaustive_limit {
                debug!(
                    "{jokers} jokers need {size} substitutions per suit, limit {}",
                    config.exhaustive_limit
                );
                JokerSearch::HighRanks
            } else {
                JokerSearch::Exhaustive
            }
        }
        search => search,
    }
}

/// The suits jokers can take.
fn candidate_suits(hand: &[Card]) -> Vec<Suit> {
    let first = hand.iter().find_map(|c| c.suit().ok());
    match first {
        Some(suit) if is_flush(hand) => vec![suit],
        _ => Suit::suits().collect(),
    }
}

/// Distinct ranks from the ace down not in the hand, repeats ranks from the
/// ace when the free ranks are not enough.
fn high_ranks(counts: &RankCounts, n: usize) -> Vec<Rank> {
    Rank::ranks()
        .rev()
        .filter(|&r| counts.count(r) == 0)
        .chain(Rank::ranks().rev().cycle())
        .take(n)
        .collect()
}

/// Tracks the best candidate.
#[derive(Default)]
struct Best {
    resolution: Option<Resolution>,
    evaluated: usize,
}

impl Best {
    fn consider(&mut self, candidate: &[Card]) {
        self.evaluated += 1;

        let category = categorize(candidate);
        trace!("Candidate {candidate:?}: {category}");

        let is_better = self
            .resolution
            .as_ref()
            .is_none_or(|r| category > r.category);
        if is_better {
            self.resolution = Some(Resolution {
                category,
                hand: candidate.to_vec(),
            });
        }
    }

    /// Nothing beats a royal flush.
    fn is_royal_flush(&self) -> bool {
        self.resolution
            .as_ref()
            .is_some_and(|r| r.category == HandCategory::RoyalFlush)
    }
}
