//! Integration layer
//!
//! Ties the Elm core to the terminal:
//! - `Runtime` owns the state and drives translate → update → execute
//! - `Renderer` draws a frame from the current state
//! - `AppRunner` pumps terminal events through both

pub mod app_runner;
pub mod renderer;
pub mod runtime;
