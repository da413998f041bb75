//! Terminal front-end: a [`GameView`] that keeps a text picture of both
//! boards, plus coordinate parsing for typed input.

use std::fmt::Write as _;
use std::string::{String, ToString};
use std::vec::Vec;

use crate::{
    board::ShipStats,
    common::{ShotOutcome, Side},
    grid::Coord,
    view::{CellView, GameEvent, GameView},
};

/// Format a coordinate the way the boards are labelled, e.g. `C5`.
pub fn coord_to_string(coord: Coord) -> String {
    let col = (b'A' + coord.x as u8) as char;
    format!("{}{}", col, coord.y + 1)
}

/// Parse `C5`-style input into a coordinate on a `size`×`size` board.
pub fn parse_coord(input: &str, size: usize) -> Result<Coord, String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    let last_col = (b'A' + size as u8 - 1) as char;
    if !col_ch.is_ascii_uppercase() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= size {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    if !row_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid row '{}' - must be a number 1-{}", row_str, size));
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, size))?;
    if row == 0 || row > size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, size));
    }
    Ok(Coord::new(col as i32, row as i32 - 1))
}

fn glyph(view: CellView) -> char {
    match view {
        CellView::Hidden | CellView::Water => '.',
        CellView::Ship => 'S',
        CellView::Miss => 'o',
        CellView::Hit => 'X',
        CellView::Sunk => '#',
    }
}

fn describe(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::AlreadyDecided => "already fired there",
        ShotOutcome::Miss => "miss",
        ShotOutcome::Hit => "hit",
        ShotOutcome::HitAndSunk => "hit and sunk",
    }
}

/// Text rendering of both boards, updated through [`GameView`].
#[derive(Debug, Clone)]
pub struct TextView {
    size: usize,
    own: Vec<CellView>,
    theirs: Vec<CellView>,
    messages: Vec<String>,
}

impl TextView {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            own: vec![CellView::Water; size * size],
            theirs: vec![CellView::Hidden; size * size],
            messages: Vec::new(),
        }
    }

    /// Last known view of a cell. Out-of-range cells read as `Hidden`.
    pub fn cell(&self, side: Side, coord: Coord) -> CellView {
        self.index(coord)
            .map_or(CellView::Hidden, |i| self.grid(side)[i])
    }

    /// Status lines produced since the last call.
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    fn grid(&self, side: Side) -> &[CellView] {
        match side {
            Side::Player => &self.own,
            Side::Opponent => &self.theirs,
        }
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        let n = self.size as i32;
        ((0..n).contains(&coord.x) && (0..n).contains(&coord.y))
            .then(|| coord.y as usize * self.size + coord.x as usize)
    }

    /// Both boards side by side with a fleet status line under each.
    pub fn render(&self, own_stats: &ShipStats, their_stats: &ShipStats) -> String {
        let mut out = String::new();
        let width = self.size * 2 + 3;
        let _ = writeln!(out, "{:<width$}    {}", "Your board", "Opponent board", width = width);

        let mut header = String::from("   ");
        for c in 0..self.size {
            header.push(' ');
            header.push((b'A' + c as u8) as char);
        }
        let _ = writeln!(out, "{:<width$}    {}", header, header, width = width);

        for y in 0..self.size {
            let mut rows = [format!("{:2} ", y + 1), format!("{:2} ", y + 1)];
            for (row, side) in rows.iter_mut().zip(Side::ALL) {
                for x in 0..self.size {
                    row.push(' ');
                    row.push(glyph(self.cell(side, Coord::new(x as i32, y as i32))));
                }
            }
            let _ = writeln!(out, "{:<width$}    {}", rows[0], rows[1], width = width);
        }
        let _ = writeln!(
            out,
            "{:<width$}    {}",
            own_stats.to_string(),
            their_stats.to_string(),
            width = width
        );
        out.push_str("Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Unknown\n");
        out
    }
}

impl GameView for TextView {
    fn show_cell(&mut self, side: Side, coord: Coord, view: CellView) {
        if let Some(i) = self.index(coord) {
            match side {
                Side::Player => self.own[i] = view,
                Side::Opponent => self.theirs[i] = view,
            }
        }
    }

    fn announce(&mut self, event: &GameEvent) {
        let line = match event {
            GameEvent::ShipPlaced { side, size } => {
                format!("Ship of size {} placed on the {} board", size, side)
            }
            GameEvent::Shot(shot) => {
                let shooter = match shot.side {
                    Side::Opponent => "You fire",
                    Side::Player => "AI fires",
                };
                format!(
                    "{} at {}: {}",
                    shooter,
                    coord_to_string(shot.coord),
                    describe(shot.outcome)
                )
            }
            GameEvent::GameOver { winner } => match winner {
                Side::Player => "Game ended: you have won!!!".to_string(),
                Side::Opponent => "Game ended: AI has won!!!".to_string(),
            },
        };
        self.messages.push(line);
    }
}
