//! Game assistant CLI
//!
//! Analyzes a Go, Guandan, Mahjong, poker or Xiangqi snapshot read from a file or
//! stdin and prints the report to stdout.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use assistant_cli::input::{
    go_snapshot, guandan_snapshot, mahjong_snapshot, poker_snapshot, xiangqi_snapshot,
};
use assistant_cli::render::render;
use assistant_cli::{AssistantConfig, OutputFormat};
use board_analyzers::{analyze_snapshot, display_tag, Snapshot};
use board_core::tiles::MahjongRule;
use board_core::xiangqi::XiangqiBoard;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "game-assistant", version, about = "Board and card game assistant")]
struct Cli {
    /// Read the snapshot from this file instead of stdin
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Output format (defaults to OUTPUT_FORMAT)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Groups, liberties and territory of a Go position
    Go,
    /// Bombs and structured ordering of a Guandan hand
    Guandan {
        /// Cards already played, checked against the two-deck limit
        #[arg(long)]
        played: Option<String>,
    },
    /// Winning tiles and scores for a 13-tile Mahjong hand
    Mahjong {
        /// Scoring rule (defaults to MAHJONG_RULE)
        #[arg(long)]
        rule: Option<MahjongRule>,
        /// Visible discards, checked against the four-copy limit
        #[arg(long)]
        discards: Option<String>,
    },
    /// Win odds and a fold/call/raise mix for hold'em hole cards
    Poker {
        /// Community cards on the board, up to five
        #[arg(long)]
        community: Option<String>,
        /// Opponent cards seen so far
        #[arg(long)]
        opponent: Option<String>,
    },
    /// Best red move for a Xiangqi position given as FEN
    Xiangqi {
        /// Use the standard opening position instead of reading input
        #[arg(long)]
        initial: bool,
    },
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    // Load .env file for local dev
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = AssistantConfig::load()?;
    info!(
        mahjong_rule = %config.mahjong_rule,
        go_board_size = config.go_board_size,
        output_format = ?config.output_format,
        "Configuration loaded"
    );

    let snapshot: Snapshot = match &cli.command {
        Command::Go => go_snapshot(&read_input(cli.input.as_ref())?, config.go_board_size)?,
        Command::Guandan { played } => {
            guandan_snapshot(&read_input(cli.input.as_ref())?, played.as_deref())?
        }
        Command::Mahjong { rule, discards } => mahjong_snapshot(
            &read_input(cli.input.as_ref())?,
            discards.as_deref(),
            rule.unwrap_or(config.mahjong_rule),
        )?,
        Command::Poker {
            community,
            opponent,
        } => poker_snapshot(
            &read_input(cli.input.as_ref())?,
            community.as_deref(),
            opponent.as_deref(),
        )?,
        Command::Xiangqi { initial: true } => Snapshot::Xiangqi {
            board: XiangqiBoard::initial(),
        },
        Command::Xiangqi { initial: false } => {
            xiangqi_snapshot(&read_input(cli.input.as_ref())?)?
        }
    };
    debug!(game = snapshot.game(), "Snapshot validated");

    let report = analyze_snapshot(&snapshot);
    info!(analyzer = display_tag(snapshot.game()), summary = %report.summary(), "Analysis complete");

    let format = cli.format.unwrap_or(config.output_format);
    println!("{}", render(&report, format)?.trim_end());
    Ok(())
}
