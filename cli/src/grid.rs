//! Text grid maps.
//!
//! `#` is a wall, `.` an open cell, `1`-`9` an open cell whose entry cost is
//! the digit, `S` and `G` mark the start and goal (entry cost 1). Rows may be
//! ragged; cells past the end of a row are walls.

use crate::error::CliError;
use statepath_core::{Cost, StateGraph};
use std::f64::consts::SQRT_2;

pub type Position = (usize, usize);

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Terrain {
    Wall,
    Open(Cost),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridMap {
    rows: Vec<Vec<Terrain>>,
    pub start: Option<Position>,
    pub goal: Option<Position>,
}

impl GridMap {
    pub fn parse(text: &str) -> Result<Self, CliError> {
        let mut rows = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (row_index, line) in text.trim_end().lines().enumerate() {
            let mut row = Vec::new();
            for (col_index, ch) in line.trim_end_matches('\r').chars().enumerate() {
                let terrain = match ch {
                    '#' => Terrain::Wall,
                    '.' => Terrain::Open(1.0),
                    '1'..='9' => Terrain::Open(Cost::from(ch as u8 - b'0')),
                    'S' | 'G' => {
                        let marker = if ch == 'S' { &mut start } else { &mut goal };
                        if marker.replace((row_index, col_index)).is_some() {
                            return Err(CliError::DuplicateMarker { marker: ch });
                        }
                        Terrain::Open(1.0)
                    }
                    found => {
                        return Err(CliError::MapCharacter {
                            line: row_index + 1,
                            column: col_index + 1,
                            found,
                        });
                    }
                };
                row.push(terrain);
            }
            rows.push(row);
        }

        Ok(Self { rows, start, goal })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn terrain(&self, (row, col): Position) -> Terrain {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(Terrain::Wall)
    }

    pub fn is_open(&self, position: Position) -> bool {
        matches!(self.terrain(position), Terrain::Open(_))
    }

    fn offset(&self, (row, col): Position, (dr, dc): (isize, isize)) -> Option<Position> {
        let next = (row.checked_add_signed(dr)?, col.checked_add_signed(dc)?);
        self.is_open(next).then_some(next)
    }

    /// Moves out of `position` with their costs: up, down, left, right, then
    /// the diagonals when `diagonal` is set. A diagonal move needs both
    /// orthogonal cells beside it to be open.
    pub fn moves(&self, position: Position, diagonal: bool) -> Vec<(Position, Cost)> {
        let mut moves: Vec<(Position, Cost)> = ORTHOGONAL
            .iter()
            .filter_map(|&step| self.offset(position, step))
            .filter_map(|next| self.entry_cost(next).map(|cost| (next, cost)))
            .collect();

        if diagonal {
            for (dr, dc) in DIAGONAL {
                let clear = self.offset(position, (dr, 0)).is_some()
                    && self.offset(position, (0, dc)).is_some();
                if let Some(next) = self.offset(position, (dr, dc)).filter(|_| clear) {
                    if let Some(cost) = self.entry_cost(next) {
                        moves.push((next, cost * SQRT_2));
                    }
                }
            }
        }

        moves
    }

    fn entry_cost(&self, position: Position) -> Option<Cost> {
        match self.terrain(position) {
            Terrain::Open(cost) => Some(cost),
            Terrain::Wall => None,
        }
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, terrain)| matches!(terrain, Terrain::Open(_)))
                .map(move |(col, _)| (row, col))
        })
    }

    pub fn to_state_graph(&self, diagonal: bool) -> Result<StateGraph<Position>, CliError> {
        let adjacency = self
            .open_cells()
            .map(|cell| (cell, self.moves(cell, diagonal)));
        Ok(StateGraph::from_adjacency(adjacency)?)
    }

    /// The map with `path` drawn over it as `*`, keeping the S and G cells
    pub fn render(&self, path: &[Position]) -> String {
        let mut canvas: Vec<Vec<char>> = self
            .rows
            .iter()
            .map(|cells| cells.iter().map(|terrain| terrain_char(*terrain)).collect())
            .collect();

        let marked = path.iter().map(|&cell| (cell, '*')).chain(
            [(self.start, 'S'), (self.goal, 'G')]
                .into_iter()
                .filter_map(|(cell, marker)| Some((cell?, marker))),
        );
        for ((row, col), marker) in marked {
            if let Some(slot) = canvas.get_mut(row).and_then(|cells| cells.get_mut(col)) {
                *slot = marker;
            }
        }

        canvas
            .into_iter()
            .map(|cells| cells.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn terrain_char(terrain: Terrain) -> char {
    match terrain {
        Terrain::Wall => '#',
        Terrain::Open(cost) if cost > 1.0 => {
            char::from_digit(cost as u32, 10).unwrap_or('.')
        }
        Terrain::Open(_) => '.',
    }
}

/// Parse `ROW,COL`
pub fn parse_position(text: &str) -> Result<Position, CliError> {
    let invalid = || CliError::InvalidPosition(text.to_string());
    let (row, col) = text.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok((row, col))
}
