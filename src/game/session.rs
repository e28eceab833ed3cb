//! Game session state machine: turn order and lifecycle for one game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::{Board, BoardOutcome, MoveKind, MoveRecord, PlayerId};

/// Side length of the only supported board configuration.
pub const BOARD_SIZE: usize = 4;

/// Why the session rejected a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The move itself is invalid: a column outside the board, a full
    /// column, or a game that is already over.
    #[display("illegal move")]
    IllegalMove,
    /// The player is part of the game but it is not their turn.
    #[display("out of turn")]
    OutOfTurn,
    /// The game, player, move, or move range does not exist.
    #[display("not found")]
    NotFound,
}

/// Whether a session is still being played, and who won if it is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum Status {
    /// Moves are still being accepted.
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    /// The game is over. No winner means a tie.
    #[serde(rename = "DONE")]
    Done {
        /// The player who completed a winning line, if any.
        winner: Option<PlayerId>,
    },
}

/// What a player's withdrawal does to the session.
///
/// The session does not hard-code a policy; callers pick one per quit,
/// typically from server configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum QuitPolicy {
    /// Drop the quitter from rotation; the game plays on.
    #[serde(rename = "remove")]
    #[strum(serialize = "remove")]
    RemoveFromRotation,
    /// End the game immediately with no winner.
    #[serde(rename = "end")]
    #[strum(serialize = "end")]
    EndGame,
    /// Award the win to the player who stayed.
    #[serde(rename = "forfeit")]
    #[strum(serialize = "forfeit")]
    Forfeit,
}

impl Default for QuitPolicy {
    fn default() -> Self {
        Self::Forfeit
    }
}

/// A single game of Drop Token: the players, whose turn it is, the board,
/// and the append-only move log.
///
/// `original_players` is fixed at creation and resolves slot indices back to
/// identities; `current_players` shrinks when someone quits. The session is
/// the only writer of its board and log, and every mutation either completes
/// fully or leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSession {
    /// The two players from game creation, in registration order.
    original_players: [PlayerId; 2],
    /// Players still in the turn rotation.
    current_players: Vec<PlayerId>,
    /// Index into `current_players` of the player to act next.
    turn: usize,
    /// The token grid.
    board: Board,
    /// Whether the game is live or decided.
    #[serde(flatten)]
    status: Status,
    /// Every accepted move and quit, in order.
    moves: Vec<MoveRecord>,
}

impl GameSession {
    /// Creates a session for exactly two players with an empty 4×4 board.
    #[instrument]
    pub fn new(players: [PlayerId; 2]) -> Self {
        info!(players = ?players, "Creating new game session");
        Self {
            current_players: players.to_vec(),
            original_players: players,
            turn: 0,
            board: Board::new(BOARD_SIZE),
            status: Status::InProgress,
            moves: Vec::new(),
        }
    }

    /// Checks whether the game has ended.
    pub fn is_done(&self) -> bool {
        matches!(self.status, Status::Done { .. })
    }

    /// Drops a token into `column` on behalf of `player`, returning the
    /// number of the recorded move.
    ///
    /// # Errors
    ///
    /// * [`MoveError::IllegalMove`] when the column is outside the board or
    ///   full, or the game is already over.
    /// * [`MoveError::OutOfTurn`] when `player` is in the game but it is not
    ///   their turn.
    /// * [`MoveError::NotFound`] when `player` is not part of this game.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, player: &str, column: usize) -> Result<usize, MoveError> {
        if column >= self.board.size() {
            warn!(player, column, "Rejecting move outside the board");
            return Err(MoveError::IllegalMove);
        }

        if self.is_done() {
            warn!(player, "Rejecting move on a finished game");
            return Err(MoveError::IllegalMove);
        }

        if self.current_players.get(self.turn).map(String::as_str) != Some(player) {
            return if self.current_players.iter().any(|p| p == player) {
                warn!(player, turn = self.turn, "Player moved out of turn");
                Err(MoveError::OutOfTurn)
            } else {
                warn!(player, "Player is not part of this game");
                Err(MoveError::NotFound)
            };
        }

        // The occupant marker is the player's slot in the original join
        // order, stable across quits.
        let slot = self
            .original_players
            .iter()
            .position(|p| p == player)
            .ok_or(MoveError::NotFound)?;

        self.board.drop_token(column, slot).map_err(|error| {
            warn!(player, column, %error, "Board rejected the drop");
            MoveError::IllegalMove
        })?;

        let number = self.moves.len();
        self.moves
            .push(MoveRecord::new(number, player.to_owned(), MoveKind::Place { column }));
        self.turn = (self.turn + 1) % self.current_players.len();

        match self.board.outcome() {
            BoardOutcome::InProgress => {
                info!(player, column, number, "Move accepted");
            }
            BoardOutcome::Done(winner) => {
                let winner = winner.map(|slot| self.original_players[slot].clone());
                info!(player, column, number, winner = ?winner, "Game finished");
                self.status = Status::Done { winner };
            }
        }

        Ok(number)
    }

    /// Withdraws `player` from the game under `policy`, returning the
    /// number of the recorded `QUIT` move.
    ///
    /// Quitting is deliberately not turn-checked: a player may withdraw
    /// while waiting on the opponent.
    ///
    /// # Errors
    ///
    /// * [`MoveError::IllegalMove`] when the game is already over.
    /// * [`MoveError::NotFound`] when `player` is not an active player.
    #[instrument(skip(self))]
    pub fn apply_quit(&mut self, player: &str, policy: QuitPolicy) -> Result<usize, MoveError> {
        if self.is_done() {
            warn!(player, "Rejecting quit on a finished game");
            return Err(MoveError::IllegalMove);
        }

        let Some(index) = self.current_players.iter().position(|p| p == player) else {
            warn!(player, "Quitting player is not part of this game");
            return Err(MoveError::NotFound);
        };

        let number = self.moves.len();
        self.moves
            .push(MoveRecord::new(number, player.to_owned(), MoveKind::Quit));
        self.current_players.remove(index);

        // Keep `turn` aimed at the same next player after the removal.
        if index < self.turn {
            self.turn -= 1;
        }
        match self.current_players.len() {
            0 => self.turn = 0,
            len => self.turn %= len,
        }

        match policy {
            QuitPolicy::RemoveFromRotation => {
                // With nobody left to move the game cannot resolve itself.
                if self.current_players.is_empty() {
                    self.status = Status::Done { winner: None };
                }
            }
            QuitPolicy::EndGame => {
                self.status = Status::Done { winner: None };
            }
            QuitPolicy::Forfeit => {
                self.status = Status::Done {
                    winner: self.current_players.first().cloned(),
                };
            }
        }

        info!(player, number, %policy, status = ?self.status, "Player withdrew");
        Ok(number)
    }

    /// Looks up a recorded move by sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotFound`] when no move has that number.
    pub fn get_move(&self, number: usize) -> Result<&MoveRecord, MoveError> {
        self.moves.get(number).ok_or(MoveError::NotFound)
    }

    /// Returns the inclusive window `start..=until` of the move log.
    ///
    /// `until` defaults to the latest recorded move. Bounds outside the log,
    /// or a reversed range, are reported as [`MoveError::NotFound`] rather
    /// than clamped.
    pub fn get_moves(&self, start: usize, until: Option<usize>) -> Result<&[MoveRecord], MoveError> {
        if start >= self.moves.len() {
            return Err(MoveError::NotFound);
        }
        let until = match until {
            Some(until) if until >= self.moves.len() => return Err(MoveError::NotFound),
            Some(until) => until,
            None => self.moves.len() - 1,
        };
        if until < start {
            return Err(MoveError::NotFound);
        }
        Ok(&self.moves[start..=until])
    }
}
