use crate::config::{AppConfig, PlayerConfig};
use crate::error::GameError;
use crate::game::{DropResult, GameEngine, IgnoredReason};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: AppConfig,
    engine: GameEngine<PlayerConfig>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Build the app and start the first game from `config`.
    pub fn new(config: AppConfig) -> Result<Self, GameError> {
        let mut app = App {
            config,
            engine: GameEngine::new(),
            selected_column: 0,
            should_quit: false,
            message: None,
        };
        app.start_game()?;
        Ok(app)
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn engine(&self) -> &GameEngine<PlayerConfig> {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn width(&self) -> usize {
        self.config.board.width
    }

    /// Start (or restart) a game with the configured players and board.
    fn start_game(&mut self) -> Result<(), GameError> {
        let players = &self.config.players;
        self.engine.start_game(
            players.first.clone(),
            players.second.clone(),
            self.config.board.dimensions(),
        )?;
        self.selected_column = self.width() / 2; // Start in middle
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_column + 1 < self.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < self.width() {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Char('r') => {
                match self.start_game() {
                    Ok(()) => self.message = Some("New game started!".to_string()),
                    Err(e) => self.message = Some(e.to_string()),
                }
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        self.message = match self.engine.drop_piece(self.selected_column) {
            DropResult::Continue { .. } => None,
            DropResult::Win { winner, .. } => Some(format!("Player {} won!", winner.name)),
            DropResult::Tie { .. } => Some("Tie!".to_string()),
            DropResult::Ignored(IgnoredReason::ColumnFull) => Some("Column is full!".to_string()),
            DropResult::Ignored(IgnoredReason::InvalidColumn) => {
                Some("Invalid column!".to_string())
            }
            DropResult::Ignored(IgnoredReason::GameOver | IgnoredReason::NotStarted) => {
                Some("Game over! Press 'r' to restart.".to_string())
            }
        };
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.engine, self.selected_column, self.message());
    }
}
