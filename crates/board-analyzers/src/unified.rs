//! Unified dispatcher that routes a game snapshot to its analyzer.

use board_core::cards::Card;
use board_core::go::GoBoard;
use board_core::poker::PokerTable;
use board_core::tiles::{MahjongRule, Tile};
use board_core::xiangqi::XiangqiBoard;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analyzer_trait::Analyzer;
use crate::analyzers::go::{GoAnalysis, GoAnalyzer};
use crate::analyzers::guandan::{GuandanAnalysis, GuandanAnalyzer};
use crate::analyzers::mahjong::{MahjongAnalysis, MahjongAnalyzer};
use crate::analyzers::poker::{PokerAnalysis, PokerAnalyzer};
use crate::analyzers::xiangqi::{XiangqiAnalyzer, XiangqiVerdict};

/// A game state handed over by the caller, already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum Snapshot {
    Go {
        board: GoBoard,
    },
    Guandan {
        hand: Vec<Card>,
    },
    Mahjong {
        hand: Vec<Tile>,
        #[serde(default)]
        rule: MahjongRule,
    },
    Poker {
        table: PokerTable,
    },
    Xiangqi {
        board: XiangqiBoard,
    },
}

impl Snapshot {
    /// Name of the analyzer this snapshot is routed to.
    pub fn game(&self) -> &'static str {
        match self {
            Snapshot::Go { .. } => GoAnalyzer.name(),
            Snapshot::Guandan { .. } => GuandanAnalyzer.name(),
            Snapshot::Mahjong { rule, .. } => MahjongAnalyzer::new(*rule).name(),
            Snapshot::Poker { .. } => PokerAnalyzer.name(),
            Snapshot::Xiangqi { .. } => XiangqiAnalyzer.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "game", content = "report", rename_all = "snake_case")]
pub enum Report {
    Go(GoAnalysis),
    Guandan(GuandanAnalysis),
    Mahjong(MahjongAnalysis),
    Poker(PokerAnalysis),
    Xiangqi(XiangqiVerdict),
}

impl Report {
    /// One-line description, used for logs and the text output.
    pub fn summary(&self) -> String {
        match self {
            Report::Go(a) => format!(
                "{} groups; black {} stones +{} territory; white {} stones +{} territory",
                a.groups.len(),
                a.black_stones,
                a.black_territory,
                a.white_stones,
                a.white_territory,
            ),
            Report::Guandan(a) => format!("{} bombs in {} cards", a.bombs.len(), a.sorted_hand.len()),
            Report::Mahjong(a) => {
                if a.waiting_results.is_empty() {
                    "no winning tiles".to_string()
                } else {
                    let tiles: Vec<&str> = a.waiting_results.iter().map(|w| w.tile.code()).collect();
                    format!("waiting on {}", tiles.join(" "))
                }
            }
            Report::Poker(a) => match a.action {
                Some(action) => format!("win {}%, {action:?}", a.win),
                None => "waiting for hole cards".to_string(),
            },
            Report::Xiangqi(v) => v.best_move().to_string(),
        }
    }
}

fn run<A: Analyzer + ?Sized>(analyzer: &A, snapshot: &A::Snapshot) -> A::Report {
    debug!(analyzer = analyzer.name(), "Running analyzer");
    analyzer.analyze(snapshot)
}

/// Route the snapshot to its analyzer and wrap the result.
pub fn analyze(snapshot: &Snapshot) -> Report {
    let report = match snapshot {
        Snapshot::Go { board } => Report::Go(run(&GoAnalyzer, board)),
        Snapshot::Guandan { hand } => Report::Guandan(run(&GuandanAnalyzer, hand.as_slice())),
        Snapshot::Mahjong { hand, rule } => {
            Report::Mahjong(run(&MahjongAnalyzer::new(*rule), hand.as_slice()))
        }
        Snapshot::Poker { table } => Report::Poker(run(&PokerAnalyzer, table)),
        Snapshot::Xiangqi { board } => Report::Xiangqi(run(&XiangqiAnalyzer, board)),
    };
    debug!(game = snapshot.game(), summary = %report.summary(), "Analysis complete");
    report
}
