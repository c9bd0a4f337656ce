// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification.
//!
//! Computes the rank counts of a hand and the flush, straight, straight flush
//! and royal flush predicates used by the scorer. Jokers are counted apart
//! from the ranked cards and can bridge gaps when checking for straights.
use wildcard_cards::{Card, Rank};

/// Number of cards needed for a royal flush.
const ROYAL_SIZE: usize = 5;

/// Occurrences of each rank among the ranked cards of a hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankCounts {
    counts: [usize; Rank::COUNT],
    jokers: usize,
}

impl RankCounts {
    /// Counts the ranks and jokers of a hand.
    pub fn new(hand: &[Card]) -> Self {
        let mut rc = Self::default();
        for card in hand {
            match card {
                Card::Ranked { rank, .. } => rc.counts[rank.index()] += 1,
                Card::Joker(_) => rc.jokers += 1,
            }
        }

        rc
    }

    /// How many cards have the given rank.
    pub fn count(&self, rank: Rank) -> usize {
        self.counts[rank.index()]
    }

    /// Number of jokers in the hand.
    pub fn jokers(&self) -> usize {
        self.jokers
    }

    /// Number of ranked cards.
    pub fn ranked(&self) -> usize {
        self.counts.iter().sum()
    }

    /// The highest count of any rank, 0 if there are no ranked cards.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Checks if some rank appears exactly `n` times.
    pub fn has_exactly(&self, n: usize) -> bool {
        self.counts.iter().any(|&c| c == n)
    }

    /// Number of ranks that appear exactly twice.
    pub fn pairs(&self) -> usize {
        self.counts.iter().filter(|&&c| c == 2).count()
    }

    /// Ranks that appear in the hand.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().filter(|r| self.count(*r) > 0)
    }
}

/// Checks if all the ranked cards share the same suit.
///
/// Jokers are ignored so a hand made only of jokers, or with a single ranked
/// card, is a flush.
pub fn is_flush(hand: &[Card]) -> bool {
    let mut suits = hand.iter().filter_map(|c| c.suit().ok());
    match suits.next() {
        Some(first) => suits.all(|s| s == first),
        None => true,
    }
}

/// Checks if sorted rank indices form a straight using jokers to fill gaps.
///
/// Walks adjacent pairs and for each pair that is not consecutive, including
/// tied ranks, uses one joker. Returns false when a gap is found and there are
/// no more jokers left.
pub fn is_straight(rank_indices: &[usize], jokers: usize) -> bool {
    let mut jokers = jokers;
    for w in rank_indices.windows(2) {
        if w[1].checked_sub(w[0]) != Some(1) {
            if jokers == 0 {
                return false;
            }

            jokers -= 1;
        }
    }

    true
}

/// Sorted rank indices of the ranked cards in a hand, duplicates included.
pub fn sorted_rank_indices(hand: &[Card]) -> Vec<usize> {
    let mut indices = hand
        .iter()
        .filter_map(|c| c.rank().ok())
        .map(|r| r.index())
        .collect::<Vec<_>>();
    indices.sort_unstable();
    indices
}

/// The classification of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// The hand rank counts.
    pub counts: RankCounts,
    /// All ranked cards have the same suit.
    pub flush: bool,
    /// The ranks are consecutive once jokers fill the gaps.
    pub straight: bool,
}

impl Classification {
    /// Classifies a hand.
    pub fn new(hand: &[Card]) -> Self {
        let counts = RankCounts::new(hand);
        let straight = is_straight(&sorted_rank_indices(hand), counts.jokers());

        Self {
            counts,
            flush: is_flush(hand),
            straight,
        }
    }

    /// Straight and flush.
    pub fn is_straight_flush(&self) -> bool {
        self.straight && self.flush
    }

    /// Straight flush with at least five cards from ten up to ace, counting
    /// jokers as high cards.
    pub fn is_royal_flush(&self) -> bool {
        let high = Rank::ranks()
            .filter(|&r| r >= Rank::Ten)
            .map(|r| self.counts.count(r))
            .sum::<usize>();
        self.is_straight_flush() && high + self.counts.jokers() >= ROYAL_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(tokens: &str) -> Vec<Card> {
        tokens
            .split_whitespace()
            .map(|t| t.parse().unwrap())
            .collect()
    }

    #[test]
    fn rank_counts() {
        let rc = RankCounts::new(&hand("HK DK SK C3 BJ"));
        assert_eq!(rc.count(Rank::King), 3);
        assert_eq!(rc.count(Rank::Trey), 1);
        assert_eq!(rc.count(Rank::Ace), 0);
        assert_eq!(rc.jokers(), 1);
        assert_eq!(rc.ranked() + rc.jokers(), 5);
        assert_eq!(rc.max_count(), 3);
        assert!(rc.has_exactly(3) && rc.has_exactly(1));
        assert!(!rc.has_exactly(2));
        assert_eq!(rc.ranks().collect::<Vec<_>>(), vec![Rank::Trey, Rank::King]);

        let rc = RankCounts::new(&hand("BJ RJ"));
        assert_eq!(rc.ranked(), 0);
        assert_eq!(rc.max_count(), 0);
        assert_eq!(rc.pairs(), 0);
    }

    #[test]
    fn flush() {
        assert!(is_flush(&hand("H2 H5 H9 HJ HK")));
        assert!(!is_flush(&hand("H2 H5 H9 HJ SK")));

        // Jokers are ignored, even in first position.
        assert!(is_flush(&hand("BJ H5 H9 RJ HK")));
        assert!(!is_flush(&hand("BJ H5 D9 RJ HK")));

        assert!(is_flush(&hand("BJ RJ")));
        assert!(is_flush(&hand("CA")));
        assert!(is_flush(&hand("RJ CA")));
    }

    #[test]
    fn straight_without_jokers() {
        assert!(is_straight(&[0, 1, 2, 3, 4], 0));
        assert!(is_straight(&[8, 9, 10, 11, 12], 0));
        assert!(!is_straight(&[0, 1, 2, 3, 12], 0));

        // Tied ranks break the sequence.
        assert!(!is_straight(&[0, 1, 1, 2, 3], 0));

        // Trivial sequences.
        assert!(is_straight(&[7], 0));
        assert!(is_straight(&[], 0));
    }

    #[test]
    fn straight_with_jokers() {
        // One joker per gap regardless of the gap width.
        assert!(is_straight(&[0, 1, 3, 4], 1));
        assert!(is_straight(&[0, 2, 4], 2));
        assert!(is_straight(&[0, 5], 1));
        assert!(!is_straight(&[0, 2, 4], 1));

        // A tie also uses a joker.
        assert!(is_straight(&[3, 3, 4, 5], 1));
        assert!(!is_straight(&[3, 3, 5, 6], 1));
    }

    #[test]
    fn classification() {
        let c = Classification::new(&hand("HT HJ HQ HK HA"));
        assert!(c.flush && c.straight);
        assert!(c.is_straight_flush());
        assert!(c.is_royal_flush());

        let c = Classification::new(&hand("H2 H3 H4 H5 H6"));
        assert!(c.is_straight_flush());
        assert!(!c.is_royal_flush());

        // Jokers count as high cards.
        let c = Classification::new(&hand("SJ SQ BJ SK RJ"));
        assert!(c.is_straight_flush());
        assert!(c.is_royal_flush());

        let c = Classification::new(&hand("H9 DT SJ HQ CK"));
        assert!(c.straight && !c.flush);
        assert!(!c.is_straight_flush());

        // Four high cards are not enough for a royal flush.
        let c = Classification::new(&hand("HQ HK HA"));
        assert!(c.is_straight_flush());
        assert!(!c.is_royal_flush());
    }
}
