use board_core::go::{GoBoard, Point, Stone};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

use crate::analyzer_trait::Analyzer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    fn of(stone: Stone) -> Option<Color> {
        match stone {
            Stone::Empty => None,
            Stone::Black => Some(Color::Black),
            Stone::White => Some(Color::White),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Territory {
    #[default]
    Neutral,
    Black,
    White,
}

impl From<Color> for Territory {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Territory::Black,
            Color::White => Territory::White,
        }
    }
}

/// A maximal 4-connected chain of same-colored stones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub color: Color,
    /// Stones in discovery order, starting from the chain's first cell in row-major order.
    pub stones: Vec<Point>,
    /// Distinct empty points adjacent to any stone of the group.
    pub liberties: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoAnalysis {
    pub groups: Vec<Group>,
    /// Same shape as the board.
    pub territory: Vec<Vec<Territory>>,
    pub black_stones: usize,
    pub white_stones: usize,
    pub black_territory: usize,
    pub white_territory: usize,
}

impl GoAnalysis {
    /// The group containing the stone at `p`, if any.
    pub fn group_at(&self, p: Point) -> Option<&Group> {
        self.groups.iter().find(|g| g.stones.contains(&p))
    }

    /// Groups reduced to a single liberty.
    pub fn groups_in_atari(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter().filter(|g| g.liberties == 1)
    }
}

/// Groups, liberties and single-color-bordered territory for a Go position.
pub struct GoAnalyzer;

impl Analyzer for GoAnalyzer {
    type Snapshot = GoBoard;
    type Report = GoAnalysis;

    fn name(&self) -> &'static str {
        "go"
    }

    fn analyze(&self, board: &GoBoard) -> GoAnalysis {
        analyze_board(board)
    }
}

pub fn analyze_board(board: &GoBoard) -> GoAnalysis {
    let size = board.size();

    // Pass 1: stone groups
    let mut visited = vec![vec![false; size]; size];
    let mut groups = Vec::new();
    for p in board.points() {
        let Some(color) = Color::of(board.get(p)) else {
            continue;
        };
        if visited[p.row][p.col] {
            continue;
        }
        groups.push(collect_group(board, p, color, &mut visited));
    }

    // Pass 2: empty regions
    let mut territory = vec![vec![Territory::Neutral; size]; size];
    let mut black_territory = 0;
    let mut white_territory = 0;
    let mut seen = vec![vec![false; size]; size];
    for p in board.points() {
        if !board.get(p).is_empty() || seen[p.row][p.col] {
            continue;
        }
        let region = flood_region(board, p, &mut seen);
        let Some(owner) = region.owner() else {
            continue;
        };
        match owner {
            Color::Black => black_territory += region.points.len(),
            Color::White => white_territory += region.points.len(),
        }
        for q in &region.points {
            territory[q.row][q.col] = owner.into();
        }
    }

    let stones_of = |color: Color| -> usize {
        groups
            .iter()
            .filter(|g| g.color == color)
            .map(|g| g.stones.len())
            .sum()
    };

    GoAnalysis {
        black_stones: stones_of(Color::Black),
        white_stones: stones_of(Color::White),
        black_territory,
        white_territory,
        territory,
        groups,
    }
}

/// Breadth-first walk over same-colored neighbours, collecting liberties on the way.
fn collect_group(
    board: &GoBoard,
    start: Point,
    color: Color,
    visited: &mut [Vec<bool>],
) -> Group {
    let mut stones = Vec::new();
    let mut liberties: HashSet<Point> = HashSet::new();
    let mut queue = VecDeque::from([start]);
    visited[start.row][start.col] = true;

    while let Some(p) = queue.pop_front() {
        stones.push(p);
        for n in board.neighbors(p) {
            let stone = board.get(n);
            if stone.is_empty() {
                liberties.insert(n);
            } else if Color::of(stone) == Some(color) && !visited[n.row][n.col] {
                visited[n.row][n.col] = true;
                queue.push_back(n);
            }
        }
    }

    Group {
        color,
        stones,
        liberties: liberties.len(),
    }
}

struct Region {
    points: Vec<Point>,
    touches_black: bool,
    touches_white: bool,
}

impl Region {
    /// Credited only when exactly one color borders the region.
    fn owner(&self) -> Option<Color> {
        match (self.touches_black, self.touches_white) {
            (true, false) => Some(Color::Black),
            (false, true) => Some(Color::White),
            _ => None,
        }
    }
}

fn flood_region(board: &GoBoard, start: Point, seen: &mut [Vec<bool>]) -> Region {
    let mut region = Region {
        points: Vec::new(),
        touches_black: false,
        touches_white: false,
    };
    let mut queue = VecDeque::from([start]);
    seen[start.row][start.col] = true;

    while let Some(p) = queue.pop_front() {
        region.points.push(p);
        for n in board.neighbors(p) {
            match board.get(n) {
                Stone::Empty => {
                    if !seen[n.row][n.col] {
                        seen[n.row][n.col] = true;
                        queue.push_back(n);
                    }
                }
                Stone::Black => region.touches_black = true,
                Stone::White => region.touches_white = true,
            }
        }
    }

    region
}
