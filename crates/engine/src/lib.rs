//! Game engine module - drives a session in real time.
//!
//! The engine owns the timing loop and the port traits that decouple it from
//! the terminal:
//!
//! - [`ports`]: `InputPort` (non-blocking event poll) and `RenderPort` (frame sink)
//! - [`clock`]: monotonic clock abstraction with a manual clock for tests
//! - [`timing`]: gravity accumulator independent of the polling cadence
//! - [`game_loop`]: input → gravity → render, once per tick
//! - [`config`]: `TETRIS_*` environment configuration
//!
//! Everything runs on one thread. The loop owns the session for the duration
//! of [`GameLoop::run`] and only suspends between iterations.

pub mod clock;
pub mod config;
pub mod game_loop;
pub mod ports;
pub mod timing;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::GameConfig;
pub use game_loop::{GameLoop, LoopExit};
pub use ports::{InputPort, RecordingRender, RenderPort, ScriptedInput};
pub use timing::GravityTimer;
