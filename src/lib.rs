//! # Bluefeed - blue post TUI client
//!
//! A terminal client for browsing the latest developer ("blue") posts and
//! searching indexed post fragments, built with Rust and Ratatui.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state split into sub-states
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (HTTP requests, terminal control)
//! - **View** (`presentation`): rendering based on the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use bluefeed::core::{msg::{ui::UiMsg, Msg}, state::AppState, update::update};
//!
//! let state = AppState::default();
//! let (state, commands) = update(Msg::Ui(UiMsg::FocusSearch), state);
//!
//! assert!(state.ui.is_searching_input());
//! assert!(commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - state, messages, update and commands
//! - [`domain`] - posts, fragments, rich text, markup and layout math
//! - [`infrastructure`] - HTTP client, configuration, terminal
//! - [`integration`] - runtime and app runner
//! - [`presentation`] - components and widgets
//! - [`utils`] - logging, panic handling, paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
