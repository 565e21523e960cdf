use log::{debug, info};

use super::board::{self, Board, Dimensions, Position};
use super::player::{Players, Seat};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Seat),
    Tie,
}

/// Why a drop was ignored. None of these mutate the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    NotStarted,
    GameOver,
    InvalidColumn,
    ColumnFull,
}

/// What happened to a single `drop_piece` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropResult<P> {
    Ignored(IgnoredReason),
    Continue { placed_at: Position },
    Win { placed_at: Position, winner: P },
    Tie { placed_at: Position },
}

impl<P> DropResult<P> {
    pub fn placed_at(&self) -> Option<Position> {
        match self {
            DropResult::Ignored(_) => None,
            DropResult::Continue { placed_at }
            | DropResult::Win { placed_at, .. }
            | DropResult::Tie { placed_at } => Some(*placed_at),
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, DropResult::Ignored(_))
    }

    /// True for the move that ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DropResult::Win { .. } | DropResult::Tie { .. })
    }
}

/// A single game: board, the two players, whose turn it is, and the outcome
/// once the game has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState<P> {
    board: Board,
    players: Players<P>,
    current: Seat,
    outcome: Option<GameOutcome>,
    last_move: Option<Position>,
}

impl<P: Clone> GameState<P> {
    /// Create a fresh game. The first player moves first.
    pub fn new(first: P, second: P, dims: Dimensions) -> Result<Self, GameError> {
        Ok(Self::with_board(first, second, Board::new(dims)?))
    }

    pub(crate) fn with_board(first: P, second: P, board: Board) -> Self {
        info!(
            "new game on a {}x{} board",
            board.width(),
            board.height()
        );
        GameState {
            board,
            players: Players::new(first, second),
            current: Seat::First,
            outcome: None,
            last_move: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &Players<P> {
        &self.players
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Get current player
    pub fn current_player(&self) -> &P {
        self.players.get(self.current)
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_active(&self) -> bool {
        self.outcome.is_none()
    }

    pub fn winner(&self) -> Option<&P> {
        match self.outcome {
            Some(GameOutcome::Winner(seat)) => Some(self.players.get(seat)),
            _ => None,
        }
    }

    pub fn is_tie(&self) -> bool {
        self.outcome == Some(GameOutcome::Tie)
    }

    /// Position of the most recently placed piece
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if !self.is_active() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Ended games, out-of-range columns and full columns are ignored
    /// without touching any state.
    pub fn drop_piece(&mut self, column: usize) -> DropResult<P> {
        if !self.is_active() {
            debug!("drop in column {column} ignored: game is over");
            return DropResult::Ignored(IgnoredReason::GameOver);
        }

        let row = match self.board.drop_piece(column, self.current) {
            Ok(row) => row,
            Err(e) => {
                let reason = match e {
                    board::MoveError::ColumnFull => IgnoredReason::ColumnFull,
                    board::MoveError::InvalidColumn => IgnoredReason::InvalidColumn,
                };
                debug!("drop in column {column} ignored: {reason:?}");
                return DropResult::Ignored(reason);
            }
        };
        let placed_at = Position { row, col: column };
        self.last_move = Some(placed_at);
        debug!("{:?} placed at row {row}, column {column}", self.current);

        if self.board.has_four(self.current) {
            self.outcome = Some(GameOutcome::Winner(self.current));
            info!("{:?} wins after {} pieces", self.current, self.board.piece_count());
            return DropResult::Win {
                placed_at,
                winner: self.current_player().clone(),
            };
        }

        if self.board.is_full() {
            self.outcome = Some(GameOutcome::Tie);
            info!("board full, game tied");
            return DropResult::Tie { placed_at };
        }

        self.current = self.current.other();
        DropResult::Continue { placed_at }
    }
}

/// Column order that fills a 7x6 board with alternating moves and never
/// forms four in a row.
#[cfg(test)]
pub(crate) const TIE_SEQUENCE: [usize; 42] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 4, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4,
    5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6,
];
