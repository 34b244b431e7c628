//! Board view: projects game state into styled text rows.
//!
//! This module is pure (no I/O) so it can be unit-tested; the terminal
//! half of `term` flushes its output.

use crossterm::style::Color;

use crate::core::Game;
use crate::types::TileId;

/// A run of text in one color.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub fg: Color,
}

impl Span {
    fn new(text: impl Into<String>, fg: Color) -> Self {
        Self {
            text: text.into(),
            fg,
        }
    }
}

pub type Row = Vec<Span>;

const BORDER: Color = Color::Grey;
const EMPTY: Color = Color::DarkGrey;
/// Terminal glyphs are tall; two columns per cell evens the aspect out.
const FILLED_CELL: &str = "██";
const EMPTY_CELL: &str = " ·";

/// Map an opaque tile reference to a terminal color.
pub fn tile_color(tile: TileId) -> Color {
    match tile.0 {
        0 => Color::Cyan,
        1 => Color::Yellow,
        2 => Color::Magenta,
        3 => Color::Blue,
        4 => Color::DarkYellow,
        5 => Color::Green,
        6 => Color::Red,
        7 => Color::White,
        _ => Color::DarkGrey,
    }
}

/// Render the whole scene: score line, bordered playfield (top row
/// first), and status line.
pub fn render(game: &Game) -> Vec<Row> {
    let grid = game.board().grid();
    let inner_width = (grid.width() as usize) * 2;

    let mut rows: Vec<Row> = Vec::with_capacity(grid.height() as usize + 3);

    rows.push(vec![Span::new(format!("score: {}", game.score()), BORDER)]);
    rows.push(vec![Span::new(
        format!("┌{}┐", "─".repeat(inner_width)),
        BORDER,
    )]);

    for y in (grid.bottom()..grid.top()).rev() {
        let mut row: Row = vec![Span::new("│", BORDER)];
        for x in grid.left()..grid.right() {
            match grid.tile_at((x, y)) {
                Some(tile) => row.push(Span::new(FILLED_CELL, tile_color(tile))),
                None => row.push(Span::new(EMPTY_CELL, EMPTY)),
            }
        }
        row.push(Span::new("│", BORDER));
        rows.push(row);
    }

    rows.push(vec![Span::new(
        format!("└{}┘", "─".repeat(inner_width)),
        BORDER,
    )]);

    let status = if game.game_over() {
        Span::new("GAME OVER - r to restart, q to quit", Color::Red)
    } else {
        Span::new("a/d move  s drop  w/z rotate  space hard drop", EMPTY)
    };
    rows.push(vec![status]);

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn row_text(row: &Row) -> String {
        row.iter().map(|span| span.text.as_str()).collect()
    }

    #[test]
    fn renders_one_row_per_board_line_plus_chrome() {
        let game = Game::new(GameConfig::default()).unwrap();
        let rows = render(&game);
        // Score, top border, 20 board rows, bottom border, status.
        assert_eq!(rows.len(), 24);
        assert!(row_text(&rows[0]).starts_with("score: 0"));
    }

    #[test]
    fn board_rows_share_one_width() {
        let game = Game::new(GameConfig::default()).unwrap();
        let rows = render(&game);
        let widths: Vec<usize> = rows[1..23]
            .iter()
            .map(|row| row_text(row).chars().count())
            .collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
    }

    #[test]
    fn spawned_piece_is_visible() {
        let game = Game::new(GameConfig::default()).unwrap();
        let filled = render(&game)
            .iter()
            .flatten()
            .filter(|span| span.text == FILLED_CELL)
            .count();
        let piece_cells = game.board().active_piece().unwrap().cells().len();
        assert_eq!(filled, piece_cells);
    }

    #[test]
    fn game_over_shows_in_status_line() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        for _ in 0..200 {
            if game.game_over() {
                break;
            }
            game.handle_input(crate::types::InputEvent::HardDrop);
        }
        assert!(game.game_over());

        let rows = render(&game);
        let status = row_text(rows.last().unwrap());
        assert!(status.contains("GAME OVER"));
    }
}
