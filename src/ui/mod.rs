// src/ui/mod.rs
pub mod client;
pub mod clipboard;
pub mod controller;
pub mod error;
pub mod keys;
pub mod state;
pub mod strength;

pub use client::{HttpPasswordApi, PasswordApi};
pub use clipboard::{Clipboard, SystemClipboard};
pub use controller::{PageController, UiEvent};
pub use error::ActionError;
pub use keys::{KeyEvent, Shortcut};
pub use state::PageState;
