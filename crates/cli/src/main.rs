// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildcard CLI, scores poker hands with jokers.
//!
//! ```bash
//! $ wildcard HJ HQ HK BJ RJ
//! HJ HQ HK BJ RJ: Royal Flush (20)
//! $ wildcard --best 5 "RJ ST SQ C5 SK" "SJ HQ S3"
//! RJ ST SQ SK SJ: Royal Flush (20)
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::info;

use wildcard_eval::{Card, Config, Evaluator, JokerSearch, Resolution, parse_hand};

/// Jokers search strategy.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Search {
    /// Try every rank for each joker.
    #[default]
    Exhaustive,
    /// Replace jokers with the highest ranks not in the hand.
    HighRanks,
}

impl From<Search> for JokerSearch {
    fn from(search: Search) -> Self {
        match search {
            Search::Exhaustive => JokerSearch::Exhaustive,
            Search::HighRanks => JokerSearch::HighRanks,
        }
    }
}

#[derive(Debug, Parser)]
struct Cli {
    /// The cards tokens, suit and rank (HA, DT, C2) or jokers (BJ, RJ).
    #[clap(required = true)]
    cards: Vec<String>,
    /// The jokers search strategy.
    #[clap(long, short, value_enum, default_value_t = Search::default())]
    search: Search,
    /// Maximum jokers substitutions per suit for the exhaustive search.
    #[clap(long, default_value_t = Config::EXHAUSTIVE_LIMIT)]
    exhaustive_limit: usize,
    /// Score the best subset with this many cards.
    #[clap(long, short, value_parser = clap::value_parser!(u8).range(1..))]
    best: Option<u8>,
    /// Log the jokers substitutions.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    println!("{}", run(&cli)?);
    Ok(())
}

/// Scores the cards and returns the report line.
fn run(cli: &Cli) -> Result<String> {
    let tokens = cli
        .cards
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .collect::<Vec<_>>();

    if tokens.is_empty() {
        bail!("No cards to score");
    }

    let hand = parse_hand(&tokens)?;
    let eval = Evaluator::new(Config {
        search: cli.search.into(),
        exhaustive_limit: cli.exhaustive_limit,
    });

    info!("Scoring {} cards with {:?} search", hand.len(), cli.search);

    let line = match cli.best {
        Some(size) => {
            let best = eval.best_hand(&hand, size as usize)?;
            report(&best.cards, &best.resolution)
        }
        None => report(&hand, &eval.eval(&hand)?),
    };

    Ok(line)
}

fn report(cards: &[Card], resolution: &Resolution) -> String {
    let cards = cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{cards}: {} ({})", resolution.category, resolution.score())
}
