//! Engine operations.
//!
//! Every query is a pure function of the move log. Nothing derived is
//! cached: boards and outcomes are recomputed on demand, which is cheap at
//! this board size.

use super::action::{Move, MoveError};
use super::contracts::{Contract, GameView, LegalMove, MoveContract};
use super::invariants::InvariantViolation;
use super::registry::PlayerRegistry;
use super::{Board, Coord, Dimensions, MoveLog, Rules, Symbol};
use tracing::{debug, info, instrument, warn};

/// The player whose turn it is.
///
/// X moves on even log lengths, O on odd ones.
pub fn active_player(log: &MoveLog) -> Symbol {
    if log.len() % 2 == 0 {
        Symbol::FIRST
    } else {
        Symbol::FIRST.opponent()
    }
}

/// Replays a log onto an empty board.
///
/// # Errors
///
/// Returns [`InvariantViolation`] if a move lies off the board or claims a
/// cell that is already taken. Logs built through [`submit_move`] never do.
#[instrument(skip(log), fields(moves = log.len()))]
pub fn derive_board(log: &MoveLog, dimensions: Dimensions) -> Result<Board, InvariantViolation> {
    let mut board = Board::empty(dimensions);
    for (index, action) in log.iter().enumerate() {
        if let Err(violation) = board.place(action) {
            warn!(index, %action, %violation, "Move log replays into a conflict");
            return Err(violation);
        }
    }
    debug!(occupied = board.occupied_count(), "Derived board");
    Ok(board)
}

/// Validates a move and returns the log extended by it.
///
/// The move is attributed to [`active_player`]. The input log is never
/// modified; on rejection the caller still holds the unchanged log.
///
/// # Errors
///
/// Checked in this order, identically in every build profile:
///
/// - [`MoveError::Invariant`] if the existing log is corrupt (a shared cell,
///   an off-board move or turns out of order)
/// - [`MoveError::GameOver`] once the game is won or drawn, for any coordinate
/// - [`MoveError::OutOfBounds`] for coordinates off the board
/// - [`MoveError::CellOccupied`] for a claimed cell
#[instrument(skip(log, rules), fields(moves = log.len()))]
pub fn submit_move(
    log: &MoveLog,
    rules: &Rules,
    row: usize,
    column: usize,
) -> Result<MoveLog, MoveError> {
    let before = GameView::new(log, rules);
    if let Err(e) = MoveContract::pre(&before, &Coord::new(row, column)) {
        warn!(error = %e, "Move rejected");
        return Err(e);
    }

    let player = active_player(log);
    let next = log.appended(Move::new(player, row, column));

    MoveContract::post(&before, &GameView::new(&next, rules))?;

    info!(%player, row, column, "Move accepted");
    Ok(next)
}

/// Cells the active player may claim, in row-major order.
///
/// Empty once the game is over.
///
/// # Errors
///
/// Fails only for a corrupt log.
#[instrument(skip(log, rules), fields(moves = log.len()))]
pub fn legal_moves(log: &MoveLog, rules: &Rules) -> Result<Vec<Coord>, InvariantViolation> {
    let board = derive_board(log, rules.dimensions())?;
    let outcome = super::derive_outcome(&board, rules.patterns(), rules.total_cells());
    if outcome.is_terminal() {
        return Ok(Vec::new());
    }
    Ok(board.vacant_cells())
}

/// A fresh, empty log for a new game between the same players.
pub fn rematch() -> MoveLog {
    info!("Rematch");
    MoveLog::new()
}

/// Returns a registry with one display name changed.
///
/// Names never influence game logic, so this may be called mid-game.
#[instrument(skip(registry))]
pub fn rename_player(registry: &PlayerRegistry, symbol: Symbol, name: &str) -> PlayerRegistry {
    registry.renamed(symbol, name)
}

/// Checks whether a coordinate would be accepted, without building a log.
pub fn is_legal(log: &MoveLog, rules: &Rules, row: usize, column: usize) -> bool {
    LegalMove::check(Coord::new(row, column), &GameView::new(log, rules)).is_ok()
}
