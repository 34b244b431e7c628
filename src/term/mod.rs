//! Terminal lifecycle and drawing.
//!
//! Raw mode plus alternate screen, restored on exit even when the game
//! loop returns an error. Drawing is a full redraw of the styled rows
//! produced by `view`; the main loop only asks for one when cell events
//! or the status line report a change.

pub mod view;

pub use view::{render, tile_color, Row, Span};

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, rows: &[Row]) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        for (y, row) in rows.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, y as u16))?;
            for span in row {
                self.stdout.queue(SetForegroundColor(span.fg))?;
                self.stdout.queue(Print(span.text.as_str()))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}
