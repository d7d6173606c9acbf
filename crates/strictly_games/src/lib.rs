//! Strictly Games - sessions and a terminal front-end for strictly_tictactoe.
//!
//! # Architecture
//!
//! - **Config**: board size, run length and player names from TOML
//! - **Session**: isolated, individually locked games
//! - **Play**: line-oriented command loop over any reader/writer
//! - **Replay**: rebuild a game from a recorded JSON history
//!
//! # Example
//!
//! ```
//! use strictly_games::{GameConfig, SessionManager};
//!
//! # fn example() -> anyhow::Result<()> {
//! let manager = SessionManager::new();
//! let game = GameConfig::new().new_game()?;
//! manager.create_session("local".to_string(), game)?;
//! manager.submit_move("local", 1, 1)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod play;
mod replay;
mod session;

pub use config::{ConfigError, GameConfig};
pub use play::{ParseCommandError, PlayCommand, run_session, status_line};
pub use replay::{ReplayError, load_history, parse_history, replay};
pub use session::{GameSession, SessionError, SessionId, SessionManager};
