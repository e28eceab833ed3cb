//! In-memory session store keyed by game id.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

use crate::game::{GameSession, MoveError, MoveRecord, PlayerId, QuitPolicy};

/// Unique identifier for a game.
pub type GameId = u64;

/// Owns every live game session.
///
/// Mutations run while the map lock is held, so each session sees at most
/// one in-flight read-modify-write at a time. Cloning the store shares the
/// same map.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Live sessions keyed by game id.
    sessions: Arc<Mutex<HashMap<GameId, GameSession>>>,
    /// Next id to hand out.
    next_id: Arc<AtomicU64>,
}

impl SessionStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session store");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Creates a session for the two players and returns its id.
    ///
    /// Ids ascend from 1 in creation order.
    #[instrument(skip(self))]
    pub fn create(&self, players: [PlayerId; 2]) -> GameId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let session = GameSession::new(players);
        self.sessions.lock().unwrap().insert(id, session);
        info!(game_id = id, "Created new game");
        id
    }

    /// Lists every game id in ascending order.
    #[instrument(skip(self))]
    pub fn ids(&self) -> Vec<GameId> {
        let sessions = self.sessions.lock().unwrap();
        let mut ids: Vec<_> = sessions.keys().copied().collect();
        ids.sort_unstable();
        debug!(count = ids.len(), "Listed games");
        ids
    }

    /// Returns a clone of the session, if it exists.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: GameId) -> Option<GameSession> {
        let session = self.sessions.lock().unwrap().get(&id).cloned();
        if session.is_none() {
            debug!(game_id = id, "Game not found");
        }
        session
    }

    /// Drops a token for `player`, returning the recorded move number.
    ///
    /// # Errors
    ///
    /// [`MoveError::NotFound`] when the game does not exist; otherwise
    /// whatever [`GameSession::apply_move`] reports.
    #[instrument(skip(self))]
    pub fn apply_move(&self, id: GameId, player: &str, column: usize) -> Result<usize, MoveError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(&id).ok_or_else(|| {
            warn!(game_id = id, "Move on unknown game");
            MoveError::NotFound
        })?;
        session.apply_move(player, column)
    }

    /// Withdraws `player` from the game under `policy`.
    ///
    /// # Errors
    ///
    /// [`MoveError::NotFound`] when the game does not exist; otherwise
    /// whatever [`GameSession::apply_quit`] reports.
    #[instrument(skip(self))]
    pub fn apply_quit(
        &self,
        id: GameId,
        player: &str,
        policy: QuitPolicy,
    ) -> Result<usize, MoveError> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(&id).ok_or_else(|| {
            warn!(game_id = id, "Quit on unknown game");
            MoveError::NotFound
        })?;
        session.apply_quit(player, policy)
    }

    /// Looks up one recorded move of a game.
    ///
    /// # Errors
    ///
    /// [`MoveError::NotFound`] when the game or the move does not exist.
    #[instrument(skip(self))]
    pub fn move_at(&self, id: GameId, number: usize) -> Result<MoveRecord, MoveError> {
        let sessions = self.sessions.lock().unwrap();
        let session = sessions.get(&id).ok_or(MoveError::NotFound)?;
        session.get_move(number).cloned()
    }

    /// Returns the inclusive move window `start..=until` of a game.
    ///
    /// # Errors
    ///
    /// [`MoveError::NotFound`] when the game does not exist or the window
    /// falls outside the recorded log.
    #[instrument(skip(self))]
    pub fn moves_range(
        &self,
        id: GameId,
        start: usize,
        until: Option<usize>,
    ) -> Result<Vec<MoveRecord>, MoveError> {
        let sessions = self.sessions.lock().unwrap();
        let session = sessions.get(&id).ok_or(MoveError::NotFound)?;
        session.get_moves(start, until).map(|moves| moves.to_vec())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
