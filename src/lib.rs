//! # bloglist - Blog list TUI client
//!
//! A terminal client for a blog-list REST service, built with Rust and Ratatui.
//! Users log in, browse, filter and like blogs, add new ones and delete
//! their own. The library implements an Elm-like architecture for
//! predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): Application state, owned by the runtime
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (HTTP, storage, timers)
//! - **View** (`presentation::components`): Rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use bloglist::core::{
//!     cmd::Cmd,
//!     msg::{blog::BlogMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//!
//! let (_state, commands) = update(Msg::Blog(BlogMsg::Refresh), AppState::default());
//!
//! // Fetching is a side effect handed to the command executor
//! assert!(matches!(commands.as_slice(), [Cmd::FetchBlogs { generation: 0 }]));
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm architecture: state, messages, update, commands
//! - [`domain`] - Blog, user and notification records, errors, list views
//! - [`infrastructure`] - REST client, storage, config, CLI, terminal
//! - [`integration`] - Runtime and the application event loop
//! - [`presentation`] - Components, widgets, keybindings and styles
//! - [`utils`] - Logging, panic handling and paths

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
