//! Game session management.
//!
//! Each session owns one isolated [`Game`]. Sessions are individually
//! locked, so moves, rematches and renames on one session are serialized
//! while other sessions proceed independently.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use strictly_tictactoe::{Game, GameSnapshot, MoveError, Outcome, Symbol};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// A single game and its identifier.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    game: Game,
}

impl GameSession {
    /// Creates a new game session.
    #[instrument(skip(game))]
    pub fn new(id: SessionId, game: Game) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self { id, game }
    }

    /// Session ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The game state.
    pub fn game(&self) -> &Game {
        &self.game
    }
}

/// Session lookup or mutation failure.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// No session with this ID.
    #[display("Session {} not found", _0)]
    NotFound(SessionId),

    /// A session with this ID already exists.
    #[display("Session {} already exists", _0)]
    AlreadyExists(SessionId),

    /// A thread panicked while holding a session lock.
    #[display("Session state is poisoned")]
    Poisoned,

    /// The engine refused the operation.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, SessionError> {
    mutex.lock().map_err(|_| {
        warn!("Lock poisoned");
        SessionError::Poisoned
    })
}

/// Manages all game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, Arc<Mutex<GameSession>>>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    /// Creates a new game session.
    #[instrument(skip(self, game))]
    pub fn create_session(&self, id: SessionId, game: Game) -> Result<SessionId, SessionError> {
        let mut sessions = lock(&self.sessions)?;

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }

        let session = GameSession::new(id.clone(), game);
        sessions.insert(id.clone(), Arc::new(Mutex::new(session)));

        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Removes a session.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<(), SessionError> {
        let mut sessions = lock(&self.sessions)?;
        if sessions.remove(id).is_none() {
            return Err(SessionError::NotFound(id.to_string()));
        }
        info!(session_id = id, "Removed session");
        Ok(())
    }

    /// Lists all session IDs, sorted.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Result<Vec<SessionId>, SessionError> {
        let sessions = lock(&self.sessions)?;
        let mut ids: Vec<_> = sessions.keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        Ok(ids)
    }

    /// Runs `f` while holding only this session's lock.
    fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        let session = {
            let sessions = lock(&self.sessions)?;
            sessions.get(id).cloned().ok_or_else(|| {
                debug!(session_id = id, "Session not found");
                SessionError::NotFound(id.to_string())
            })?
        };
        let mut guard = lock(&session)?;
        f(&mut guard)
    }

    /// Plays a move for the session's active player.
    #[instrument(skip(self))]
    pub fn submit_move(&self, id: &str, row: usize, column: usize) -> Result<Outcome, SessionError> {
        self.with_session(id, |session| {
            let outcome = session.game.submit_move(row, column)?;
            info!(session_id = id, row, column, %outcome, "Move completed successfully");
            Ok(outcome)
        })
    }

    /// Starts a new game in the session, keeping player names.
    #[instrument(skip(self))]
    pub fn rematch(&self, id: &str) -> Result<(), SessionError> {
        self.with_session(id, |session| {
            session.game.rematch();
            Ok(())
        })
    }

    /// Renames a player in the session.
    #[instrument(skip(self))]
    pub fn rename_player(&self, id: &str, symbol: Symbol, name: &str) -> Result<(), SessionError> {
        self.with_session(id, |session| {
            session.game.rename_player(symbol, name);
            Ok(())
        })
    }

    /// Current view of the session's game.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: &str) -> Result<GameSnapshot, SessionError> {
        self.with_session(id, |session| {
            session
                .game
                .snapshot()
                .map_err(|violation| SessionError::Move(violation.into()))
        })
    }
}
