//! Terminal game runner.
//!
//! Hosts the fixed-timestep loop: poll input until the next frame, feed
//! elapsed time into the game controller, and redraw when the core
//! reports cell changes.

use std::env;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{Game, GameConfig};
use gridfall::input::{handle_key_event, is_reset_key, should_quit};
use gridfall::term::{render, Terminal};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let mut game = Game::new(config)?;

    let mut term = Terminal::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut Terminal, game: &mut Game) -> Result<()> {
    let mut last_tick = Instant::now();
    let mut last_score = game.score();
    let mut last_over = game.game_over();
    let mut dirty = true;

    loop {
        if dirty {
            term.draw(&render(game))?;
            dirty = false;
        }

        // Input with timeout until the next frame.
        let timeout = FRAME
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_reset_key(key) {
                        game.reset();
                    } else if let Some(input) = handle_key_event(key) {
                        game.handle_input(input);
                    }
                }
            }
        }

        if last_tick.elapsed() >= FRAME {
            let delta = last_tick.elapsed().as_secs_f32();
            last_tick = Instant::now();
            game.tick(delta);
        }

        if !game.take_cell_events().is_empty()
            || game.score() != last_score
            || game.game_over() != last_over
        {
            last_score = game.score();
            last_over = game.game_over();
            dirty = true;
        }
    }
}
