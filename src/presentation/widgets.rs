//! Reusable UI widgets
//!
//! Widgets are stateless: they borrow what they draw and the named styles
//! from the config.

pub mod filter_bar;
pub mod fragment_card;
pub mod hero;
pub mod post_card;
pub mod status_bar;
pub mod suggestions;
