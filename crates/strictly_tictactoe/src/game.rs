//! Game aggregate owning one session's state.

use super::action::{Move, MoveError};
use super::invariants::InvariantViolation;
use super::registry::PlayerRegistry;
use super::{
    Coord, Dimensions, MoveLog, Outcome, Rules, Symbol, active_player, derive_board,
    derive_outcome, legal_moves, rematch, rename_player, submit_move, winning_line,
};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{info, instrument};

/// One game: rules, the authoritative move log and player names.
///
/// All mutation goes through [`Game::submit_move`], [`Game::rematch`] and
/// [`Game::rename_player`]; everything else is derived from the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    rules: Rules,
    log: MoveLog,
    players: PlayerRegistry,
}

impl Game {
    /// Creates a game with default player names.
    #[instrument(skip(rules), fields(dimensions = %rules.dimensions()))]
    pub fn new(rules: Rules) -> Self {
        Self::with_players(rules, PlayerRegistry::new())
    }

    /// Creates a classic 3x3 game.
    pub fn classic() -> Self {
        Self::new(Rules::classic())
    }

    /// Creates a game with the given player names.
    pub fn with_players(rules: Rules, players: PlayerRegistry) -> Self {
        Self {
            rules,
            log: MoveLog::new(),
            players,
        }
    }

    /// The rules this game is played under.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The move history, oldest first.
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// Player names.
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// The player to move.
    pub fn active_player(&self) -> Symbol {
        active_player(&self.log)
    }

    /// The current board.
    pub fn board(&self) -> Result<super::Board, InvariantViolation> {
        derive_board(&self.log, self.rules.dimensions())
    }

    /// The current outcome.
    pub fn outcome(&self) -> Result<Outcome, InvariantViolation> {
        let board = self.board()?;
        Ok(derive_outcome(
            &board,
            self.rules.patterns(),
            self.rules.total_cells(),
        ))
    }

    /// Cells the active player may claim.
    pub fn legal_moves(&self) -> Result<Vec<Coord>, InvariantViolation> {
        legal_moves(&self.log, &self.rules)
    }

    /// Plays a move for the active player and returns the new outcome.
    ///
    /// On error the game is left exactly as it was.
    #[instrument(skip(self), fields(moves = self.log.len()))]
    pub fn submit_move(&mut self, row: usize, column: usize) -> Result<Outcome, MoveError> {
        let next = submit_move(&self.log, &self.rules, row, column)?;
        let board = derive_board(&next, self.rules.dimensions())?;
        let outcome = derive_outcome(&board, self.rules.patterns(), self.rules.total_cells());
        self.log = next;
        if outcome.is_terminal() {
            info!(%outcome, moves = self.log.len(), "Game finished");
        }
        Ok(outcome)
    }

    /// Clears the board for a new game. Player names are kept.
    #[instrument(skip(self), fields(moves = self.log.len()))]
    pub fn rematch(&mut self) {
        self.log = rematch();
    }

    /// Changes a player's display name.
    #[instrument(skip(self))]
    pub fn rename_player(&mut self, symbol: Symbol, name: &str) {
        self.players = rename_player(&self.players, symbol, name);
        info!(%symbol, name = self.players.name(symbol), "Player renamed");
    }

    /// Serializable view of everything a presentation layer renders.
    pub fn snapshot(&self) -> Result<GameSnapshot, InvariantViolation> {
        let board = self.board()?;
        let outcome = derive_outcome(&board, self.rules.patterns(), self.rules.total_cells());
        let winning_line = winning_line(&board, self.rules.patterns())
            .map(|pattern| pattern.cells().to_vec());

        Ok(GameSnapshot {
            dimensions: self.rules.dimensions(),
            cells: board.rows().map(<[Option<Symbol>]>::to_vec).collect(),
            rendered: board.render(),
            outcome,
            to_move: (!outcome.is_terminal()).then(|| self.active_player()),
            winning_line,
            history: self.log.moves().to_vec(),
            players: self.players.clone(),
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::classic()
    }
}

/// Point-in-time view of a game for rendering or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameSnapshot {
    /// Board size.
    dimensions: Dimensions,
    /// Grid rows, top first.
    cells: Vec<Vec<Option<Symbol>>>,
    /// Text rendering of the grid.
    rendered: String,
    /// Current outcome.
    outcome: Outcome,
    /// Player to move; `None` once the game is over.
    to_move: Option<Symbol>,
    /// Cells of the completed pattern after a win.
    winning_line: Option<Vec<Coord>>,
    /// Moves played, oldest first.
    history: Vec<Move>,
    /// Player names.
    players: PlayerRegistry,
}
