//! Noughts - tic-tac-toe engine with a computer opponent
//!
//! Pure game logic for a presentation layer to drive: board model, rules,
//! a three-tier computer opponent and a match controller that keeps score.
//!
//! # Architecture
//!
//! - **Board**: fixed nine-cell [`Board`] addressed by [`Position`]
//! - **Rules**: [`rules::check_win`] and [`rules::evaluate`]
//! - **AI**: [`ai::choose_move`], random play or full [`ai::minimax`] search
//! - **Controller**: [`MatchController`] owns the match and the score tally
//!
//! # Example
//!
//! ```
//! use noughts::{Difficulty, GameMode, MatchController, Outcome};
//!
//! # fn example() -> Result<(), noughts::GameError> {
//! let mut session = MatchController::seeded(7);
//! session.start_match(GameMode::HumanVsAi, Some(Difficulty::Hard), Some("Ada"), None);
//!
//! // The computer replies before the call returns.
//! let state = session.apply_human_move(4)?;
//! assert_eq!(*state.status(), Outcome::InProgress);
//! assert_eq!(state.history().len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod controller;
mod error;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use ai::Difficulty;
pub use controller::{
    AI_PLAYER, COMPUTER_NAME, DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, GameMode,
    MatchController, MatchState, PlayerNames, ScoreTally,
};
pub use error::{GameError, IllegalMove};
pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, Cell, Player};
