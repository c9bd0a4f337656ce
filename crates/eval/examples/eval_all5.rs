// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ```
//
// Scores all the 5 cards hands from the 54 cards deck, jokers included.
use std::time::Instant;

use wildcard_eval::*;

#[rustfmt::skip]
fn main() -> Result<(), EvalError> {
    let cards = Deck::default().cards().to_vec();
    let n = cards.len();
    let eval = Evaluator::default();

    let now = Instant::now();
    let mut counts = [0usize; HandCategory::MAX_SCORE as usize + 1];
    let mut hand = [cards[0]; 5];

    for c1 in 0..n {
        hand[0] = cards[c1];
        for c2 in (c1 + 1)..n {
            hand[1] = cards[c2];
            for c3 in (c2 + 1)..n {
                hand[2] = cards[c3];
                for c4 in (c3 + 1)..n {
                    hand[3] = cards[c4];
                    for c5 in (c4 + 1)..n {
                        hand[4] = cards[c5];
                        counts[eval.score(&hand)? as usize] += 1;
                    }
                }
            }
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        println!("{:<16} {}", format!("{category}:"), counts[category.score() as usize]);
    }

    Ok(())
}
