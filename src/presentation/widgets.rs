//! Reusable UI widgets
//!
//! Widgets render data handed to them and hold no application state.

pub mod blog_item;
pub mod blog_stats;
pub mod notification_line;
pub mod popup;
pub mod text_input;
