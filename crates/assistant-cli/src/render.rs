//! Output rendering for reports

use board_analyzers::analyzers::go::{Color, GoAnalysis};
use board_analyzers::analyzers::guandan::{BombKind, GuandanAnalysis};
use board_analyzers::analyzers::mahjong::MahjongAnalysis;
use board_analyzers::analyzers::poker::{PokerAction, PokerAnalysis};
use board_analyzers::analyzers::xiangqi::XiangqiVerdict;
use board_analyzers::{display_tag, Report};

use crate::config::OutputFormat;
use crate::error::AssistantError;

pub fn render(report: &Report, format: OutputFormat) -> Result<String, AssistantError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_text(report: &Report) -> String {
    let (game, lines) = match report {
        Report::Go(a) => ("go", go_lines(a)),
        Report::Guandan(a) => ("guandan", guandan_lines(a)),
        Report::Mahjong(a) => ("mahjong", mahjong_lines(a)),
        Report::Poker(a) => ("poker", poker_lines(a)),
        Report::Xiangqi(v) => ("xiangqi", xiangqi_lines(v)),
    };
    let mut out = display_tag(game).to_string();
    for line in lines {
        out.push('\n');
        out.push_str(&line);
    }
    out.push('\n');
    out
}

fn go_lines(a: &GoAnalysis) -> Vec<String> {
    let size = a.territory.len();
    let mut lines = vec![
        format!("Black: {} stones, {} territory", a.black_stones, a.black_territory),
        format!("White: {} stones, {} territory", a.white_stones, a.white_territory),
        format!("Groups: {}", a.groups.len()),
    ];
    lines.extend(a.groups_in_atari().map(|group| {
        let color = match group.color {
            Color::Black => "Black",
            Color::White => "White",
        };
        let stones = join(group.stones.iter().map(|p| p.label(size)));
        format!("  {color} group in atari: {stones}")
    }));
    lines
}

fn guandan_lines(a: &GuandanAnalysis) -> Vec<String> {
    let mut lines = vec![format!("Hand: {}", join(&a.sorted_hand))];
    if a.bombs.is_empty() {
        lines.push("No bombs.".to_string());
    }
    lines.extend(a.bombs.iter().map(|bomb| {
        let kind = match bomb.kind {
            BombKind::FourOfAKind => "Four of a kind",
            BombKind::FourKings => "Four kings",
            BombKind::StraightFlush => "Straight flush",
        };
        format!("  {kind}: {}", join(&bomb.cards))
    }));
    lines
}

fn mahjong_lines(a: &MahjongAnalysis) -> Vec<String> {
    let mut lines = vec![format!("Hand: {}", join(&a.sorted_hand))];
    if a.waiting_results.is_empty() {
        lines.push("No winning tiles.".to_string());
    }
    lines.extend(
        a.waiting_results
            .iter()
            .map(|w| format!("  {:<3} {:>2} fan  {}", w.tile.code(), w.fan, w.label)),
    );
    lines
}

fn poker_lines(a: &PokerAnalysis) -> Vec<String> {
    let Some(action) = a.action else {
        return vec!["Need both hole cards.".to_string()];
    };
    let action = match action {
        PokerAction::Fold => "Fold",
        PokerAction::Call => "Call",
        PokerAction::Raise => "Raise",
    };
    vec![
        format!("Win: {}%", a.win),
        format!("Raise {}%  Call {}%  Fold {}%", a.raise, a.call, a.fold),
        format!("Suggested: {action}"),
    ]
}

fn xiangqi_lines(v: &XiangqiVerdict) -> Vec<String> {
    match v {
        XiangqiVerdict::Move {
            best_move,
            reasoning,
            future_steps,
            ..
        } => {
            let mut lines = vec![format!("Best move: {best_move} ({reasoning})")];
            if !future_steps.is_empty() {
                lines.push(format!("Also considered: {}", join(future_steps)));
            }
            lines
        }
        XiangqiVerdict::Resign { .. } => vec!["Resign".to_string()],
    }
}
