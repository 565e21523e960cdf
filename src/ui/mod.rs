//! Terminal UI: renders the engine's board and forwards column choices from
//! the keyboard to it.

mod app;
mod game_view;

pub use app::App;
