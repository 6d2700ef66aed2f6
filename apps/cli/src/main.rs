mod session;

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carddrill_core::{parse, CardDeck, CombinedOrganizer, FlashCard, MatchingMode, OrderingMode};

use crate::session::Judge;

#[derive(Parser)]
#[command(name = "carddrill")]
#[command(about = "Drill flashcards from a plain-text card file", long_about = None)]
#[command(version)]
struct Cli {
    /// Card file with one `question,answer` pair per line
    cards_file: PathBuf,

    /// Card order: random, worst-first or recent-mistakes-first
    #[arg(short, long, default_value = "random", value_parser = parse_order)]
    order: OrderingMode,

    /// Keep each card until it has been answered correctly this many times
    #[arg(short, long)]
    repetitions: Option<usize>,

    /// Swap each card's question and answer
    #[arg(short, long)]
    invert_cards: bool,

    /// Answer comparison: exact, case-insensitive or fuzzy
    #[arg(short, long, default_value = "case-insensitive", value_parser = parse_matching)]
    matching: MatchingMode,

    /// Minimum similarity a fuzzy match must reach, in (0, 1]
    #[arg(long, default_value_t = 0.8)]
    fuzzy_threshold: f64,

    /// Write a JSON session summary to this path when the session ends
    #[arg(long)]
    report: Option<PathBuf>,
}

fn parse_order(value: &str) -> Result<OrderingMode, String> {
    OrderingMode::from_str(value).ok_or_else(|| {
        String::from("valid orders are: random, worst-first, recent-mistakes-first")
    })
}

fn parse_matching(value: &str) -> Result<MatchingMode, String> {
    MatchingMode::from_str(value)
        .ok_or_else(|| String::from("valid modes are: exact, case-insensitive, fuzzy"))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    if !(cli.fuzzy_threshold > 0.0 && cli.fuzzy_threshold <= 1.0) {
        bail!("--fuzzy-threshold must be greater than 0 and at most 1");
    }

    let content = fs::read_to_string(&cli.cards_file)
        .with_context(|| format!("failed to read {}", cli.cards_file.display()))?;
    let mut cards = parse(&content)
        .with_context(|| format!("invalid card file {}", cli.cards_file.display()))?;
    if cli.invert_cards {
        cards = cards.iter().map(FlashCard::inverted).collect();
    }

    info!(
        cards = cards.len(),
        order = cli.order.as_str(),
        repetitions = ?cli.repetitions,
        matching = cli.matching.as_str(),
        "session configured"
    );

    let organizer = CombinedOrganizer::for_session(cli.order, cli.repetitions)?;
    let mut deck = CardDeck::new(cards, organizer);
    let judge = Judge {
        mode: cli.matching,
        fuzzy_threshold: cli.fuzzy_threshold,
    };

    let stdin = io::stdin();
    let summary = session::run(&mut deck, &judge, stdin.lock(), io::stdout())?;

    if let Some(path) = &cli.report {
        let file = fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &summary)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    Ok(())
}
