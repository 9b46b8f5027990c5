//! Domain logic
//!
//! This module contains the data model and the pure computations of the
//! client:
//! - Posts and fragments as returned by the API
//! - Rich-text and inline highlight handling for fragment bodies
//! - Scroll-linked docking of the hero search bar
//! - Text wrapping, topic matching and scroll geometry

pub mod dock;
pub mod fragment;
pub mod markup;
pub mod post;
pub mod rich_text;
pub mod scroll;
pub mod text;
pub mod topics;
