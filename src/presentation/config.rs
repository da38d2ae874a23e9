//! Keybindings and styles read from the `keybindings` and `styles`
//! sections of the config file

pub mod keybindings;
pub mod styles;

pub use keybindings::{Action, KeyBindings};
pub use styles::Styles;
