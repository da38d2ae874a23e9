//! Integration layer
//!
//! Wires the Elm core to the outside world:
//! - `Runtime` owns the state and the message/command queues
//! - `AppRunner` drives the event loop against a terminal
//! - `Renderer` draws the state with the presentation components

pub mod app_runner;
pub mod renderer;
pub mod runtime;
