use super::board::{Board, Dimensions};
use super::state::{DropResult, GameOutcome, GameState, IgnoredReason};
use crate::error::GameError;

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Ended(GameOutcome),
}

/// Owns the current game, if any, and is the only thing that mutates it.
///
/// Front ends forward column choices to [`GameEngine::drop_piece`] and draw
/// from the returned [`DropResult`] and the query methods. Starting a new
/// game discards the previous one.
#[derive(Debug, Clone)]
pub struct GameEngine<P> {
    game: Option<GameState<P>>,
}

impl<P: Clone> GameEngine<P> {
    pub fn new() -> Self {
        GameEngine { game: None }
    }

    /// Start a game on the default 7x6 board.
    pub fn start_default(&mut self, first: P, second: P) -> &GameState<P> {
        self.game
            .insert(GameState::with_board(first, second, Board::default()))
    }

    /// Start a game with `first` to move. On invalid dimensions the previous
    /// game, if any, is left in place.
    pub fn start_game(
        &mut self,
        first: P,
        second: P,
        dims: Dimensions,
    ) -> Result<&GameState<P>, GameError> {
        let game = GameState::new(first, second, dims)?;
        Ok(self.game.insert(game))
    }

    pub fn drop_piece(&mut self, column: usize) -> DropResult<P> {
        match self.game.as_mut() {
            Some(game) => game.drop_piece(column),
            None => DropResult::Ignored(IgnoredReason::NotStarted),
        }
    }

    pub fn state(&self) -> Option<&GameState<P>> {
        self.game.as_ref()
    }

    pub fn phase(&self) -> Phase {
        match &self.game {
            None => Phase::NotStarted,
            Some(game) => match game.outcome() {
                None => Phase::InProgress,
                Some(outcome) => Phase::Ended(outcome),
            },
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase() == Phase::InProgress
    }

    pub fn current_player(&self) -> Option<&P> {
        self.game.as_ref().map(GameState::current_player)
    }

    pub fn winner(&self) -> Option<&P> {
        self.game.as_ref().and_then(GameState::winner)
    }

    pub fn is_tie(&self) -> bool {
        self.game.as_ref().is_some_and(GameState::is_tie)
    }

    pub fn legal_columns(&self) -> Vec<usize> {
        self.game
            .as_ref()
            .map(GameState::legal_columns)
            .unwrap_or_default()
    }
}

impl<P: Clone> Default for GameEngine<P> {
    fn default() -> Self {
        Self::new()
    }
}
