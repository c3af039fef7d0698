//! Terminal Tetris runner (default binary).
//!
//! Shows a start screen, runs the fixed-tick game loop against the real
//! terminal, then restores the terminal and prints the final score.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use log::{error, info};

use term_tetris::core::Session;
use term_tetris::engine::{GameConfig, GameLoop, LoopExit, MonotonicClock};
use term_tetris::input::TerminalInput;
use term_tetris::logging::init_logging;
use term_tetris::term::TerminalScreen;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    if let Some(path) = &config.log_path {
        init_logging(path, config.log_level)?;
    }
    info!("starting with {:?}", config);

    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut session = Session::new(seed);
    info!("seed {}", seed);

    let mut screen = TerminalScreen::new();
    let result = screen
        .enter()
        .and_then(|()| play(&config, &mut session, &mut screen));

    // Always try to restore terminal state.
    if let Err(e) = screen.exit() {
        error!("terminal restore failed: {:#}", e);
    }

    let exit = result?;
    match exit {
        LoopExit::GameOver => println!("GAME OVER! Final score: {}", session.score()),
        LoopExit::Quit => println!("Final score: {}", session.score()),
    }
    Ok(())
}

fn play(
    config: &GameConfig,
    session: &mut Session,
    screen: &mut TerminalScreen,
) -> Result<LoopExit> {
    let mut input = TerminalInput::new();

    screen.show_title()?;
    input.wait_for_key()?;

    let mut game = GameLoop::new(MonotonicClock::new(), config);
    let exit = game.run(session, &mut input, screen)?;

    if exit == LoopExit::GameOver {
        input.wait_for_key()?;
    }
    Ok(exit)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
