//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - HTTP client for the blue-post API
//! - CLI argument processing
//! - Configuration loading
//! - TUI foundation

pub mod api;
pub mod cli;
pub mod config;
pub mod tui;
