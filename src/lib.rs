//! # Connect Four
//!
//! A two-player Connect Four game: a self-contained engine that owns the
//! board, turn order and win/tie detection, plus a terminal front end built
//! with Ratatui that drives it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, seats, game state, engine
//! - [`ui`] — Terminal UI: board view and key handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
