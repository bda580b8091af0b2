//! Match and score controller.
//!
//! [`MatchController`] owns the only mutable game state: the current
//! [`MatchState`] and the session's [`ScoreTally`]. A presentation layer
//! calls its operations and renders whatever state comes back.

use super::ai::{self, Difficulty};
use super::{Board, GameError, IllegalMove, Move, Outcome, Player, Position, invariants, rules};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The symbol the computer plays.
pub const AI_PLAYER: Player = Player::O;

/// Default display name for the player using X.
pub const DEFAULT_PLAYER1_NAME: &str = "Player 1";
/// Default display name for the player using O.
pub const DEFAULT_PLAYER2_NAME: &str = "Player 2";
/// Display name for the computer opponent.
pub const COMPUTER_NAME: &str = "Computer";

/// Who sits in the O seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameMode {
    /// Two people share the board.
    #[default]
    HumanVsHuman,
    /// The computer plays O.
    HumanVsAi,
}

impl GameMode {
    /// Returns true when the computer takes part.
    pub fn ai_enabled(self) -> bool {
        matches!(self, GameMode::HumanVsAi)
    }
}

/// Wins accumulated over a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct ScoreTally {
    /// Matches won by X.
    player1_wins: u32,
    /// Matches won by O.
    player2_wins: u32,
}

impl ScoreTally {
    fn credit(&mut self, winner: Player) {
        match winner {
            Player::X => self.player1_wins += 1,
            Player::O => self.player2_wins += 1,
        }
    }
}

/// Display names for both seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PlayerNames {
    /// Name of the player using X.
    player1: String,
    /// Name of the player using O.
    player2: String,
}

impl PlayerNames {
    /// Resolves names for a mode, falling back to defaults for blank input.
    ///
    /// When the computer plays, the O seat is always named [`COMPUTER_NAME`].
    pub fn new(mode: GameMode, player1: Option<&str>, player2: Option<&str>) -> Self {
        fn or_default(name: Option<&str>, default: &str) -> String {
            name.map(str::trim)
                .filter(|n| !n.is_empty())
                .unwrap_or(default)
                .to_string()
        }

        let player2 = if mode.ai_enabled() {
            COMPUTER_NAME.to_string()
        } else {
            or_default(player2, DEFAULT_PLAYER2_NAME)
        };

        Self {
            player1: or_default(player1, DEFAULT_PLAYER1_NAME),
            player2,
        }
    }

    /// Returns the name of whoever plays `player`.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player1,
            Player::O => &self.player2,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new(GameMode::HumanVsHuman, None, None)
    }
}

/// State of the match being played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MatchState {
    /// The board.
    pub(crate) board: Board,
    /// Player whose move is expected next (the winner, once won).
    pub(crate) active_player: Player,
    /// Match status.
    pub(crate) status: Outcome,
    /// Computer difficulty.
    pub(crate) difficulty: Difficulty,
    /// Whether the computer plays O.
    pub(crate) ai_enabled: bool,
    /// Moves applied this match, oldest first.
    pub(crate) history: Vec<Move>,
}

impl MatchState {
    /// Creates a fresh match: empty board, X to move.
    pub fn new(difficulty: Difficulty, ai_enabled: bool) -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
            status: Outcome::InProgress,
            difficulty,
            ai_enabled,
            history: Vec::new(),
        }
    }
}

/// Drives matches and keeps score for one session.
///
/// Generic over its random source so tests can seed it; production code
/// uses [`MatchController::new`].
#[derive(Debug)]
pub struct MatchController<R = StdRng> {
    state: MatchState,
    tally: ScoreTally,
    names: PlayerNames,
    mode: GameMode,
    rng: R,
}

impl MatchController<StdRng> {
    /// Starts a session with an OS-seeded random source.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Starts a session with a reproducible random source.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for MatchController<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MatchController<R> {
    /// Starts a session: zero scores, human vs human, easy difficulty.
    pub fn with_rng(rng: R) -> Self {
        info!("Starting new session");
        Self {
            state: MatchState::new(Difficulty::default(), false),
            tally: ScoreTally::default(),
            names: PlayerNames::default(),
            mode: GameMode::default(),
            rng,
        }
    }

    /// Returns the current match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Returns the session's score tally.
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// Returns the display names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Returns the current game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Configures a new match and starts it from an empty board.
    ///
    /// `difficulty` defaults to easy. Names default as described on
    /// [`PlayerNames::new`]. The score tally is kept.
    #[instrument(skip(self))]
    pub fn start_match(
        &mut self,
        mode: GameMode,
        difficulty: Option<Difficulty>,
        player1: Option<&str>,
        player2: Option<&str>,
    ) -> &MatchState {
        self.mode = mode;
        self.names = PlayerNames::new(mode, player1, player2);
        self.state = MatchState::new(difficulty.unwrap_or_default(), mode.ai_enabled());
        info!(
            %mode,
            difficulty = %self.state.difficulty,
            player1 = %self.names.player1,
            player2 = %self.names.player2,
            "Match started"
        );
        &self.state
    }

    /// Resets the board for another match with the same settings and names.
    #[instrument(skip(self))]
    pub fn restart_match(&mut self) -> &MatchState {
        self.state = MatchState::new(self.state.difficulty, self.state.ai_enabled);
        info!("Match restarted");
        &self.state
    }

    /// Zeroes the score tally and restarts the match.
    #[instrument(skip(self))]
    pub fn restart_session(&mut self) -> &MatchState {
        self.tally = ScoreTally::default();
        info!("Session restarted");
        self.restart_match()
    }

    /// Places the active player's mark at `index` (0-8).
    ///
    /// When the computer is playing and the match is still going, its reply
    /// is made before this returns.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidMove`] if `index` is outside 0-8.
    /// - [`GameError::IllegalMove`] if the match is over, the computer is
    ///   to move, or the cell is occupied.
    #[instrument(skip(self), fields(player = %self.state.active_player))]
    pub fn apply_human_move(&mut self, index: usize) -> Result<&MatchState, GameError> {
        let pos = Position::from_index(index).ok_or(GameError::InvalidMove(index))?;

        if self.state.status.is_terminal() {
            return Err(IllegalMove::MatchOver.into());
        }
        if self.is_computer_turn() {
            return Err(IllegalMove::ComputerToMove.into());
        }
        if !self.state.board.is_empty(pos) {
            return Err(IllegalMove::CellOccupied(pos).into());
        }

        self.play(pos)?;

        if self.is_computer_turn() {
            self.apply_ai_turn()?;
        }
        Ok(&self.state)
    }

    /// Lets the computer make its move.
    ///
    /// # Errors
    ///
    /// - [`GameError::IllegalMove`] if the computer is not playing, not on
    ///   turn, or the match is over.
    /// - [`GameError::AiInvokedOnTerminalBoard`] if no cell is empty.
    #[instrument(skip(self), fields(difficulty = %self.state.difficulty))]
    pub fn apply_ai_turn(&mut self) -> Result<&MatchState, GameError> {
        if self.state.status.is_terminal() {
            return Err(IllegalMove::MatchOver.into());
        }
        if !self.is_computer_turn() {
            return Err(IllegalMove::NotComputerTurn.into());
        }

        let pos = ai::choose_move(
            &self.state.board,
            AI_PLAYER,
            self.state.difficulty,
            &mut self.rng,
        )?;
        self.play(pos)?;
        Ok(&self.state)
    }

    /// Describes whose turn it is or how the match ended.
    pub fn status_line(&self) -> String {
        match self.state.status {
            Outcome::Won(winner) => format!("{} has won!", self.names.name_of(winner)),
            Outcome::Drawn => "It's a draw!".to_string(),
            Outcome::InProgress => {
                format!("It's {}'s turn", self.names.name_of(self.state.active_player))
            }
        }
    }

    fn is_computer_turn(&self) -> bool {
        self.state.ai_enabled
            && self.state.active_player == AI_PLAYER
            && !self.state.status.is_terminal()
    }

    /// Applies a pre-validated move, then settles status, score and turn.
    fn play(&mut self, pos: Position) -> Result<(), GameError> {
        let player = self.state.active_player;
        self.state.board = self.state.board.place(pos.to_index(), player)?;
        self.state.history.push(Move::new(player, pos));

        let outcome = rules::evaluate(&self.state.board);
        self.state.status = outcome;
        match outcome {
            Outcome::Won(winner) => {
                self.tally.credit(winner);
                info!(
                    %winner,
                    player1_wins = self.tally.player1_wins,
                    player2_wins = self.tally.player2_wins,
                    "Match won"
                );
            }
            Outcome::Drawn => info!("Match drawn"),
            Outcome::InProgress => self.state.active_player = player.opponent(),
        }
        debug!(%player, %pos, %outcome, "Move applied");

        debug_assert!(
            invariants::violations(&self.state).is_empty(),
            "Invariant violation: {:?}",
            invariants::violations(&self.state)
        );
        Ok(())
    }
}
