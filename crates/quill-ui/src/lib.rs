//! # Quill UI
//!
//! The editor window, built with the iced framework.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: `App`, which owns the `Document` and the editor widget state
//! - **Message**: everything that can happen, from a menu click to a finished save
//! - **Update**: `App::update` applies a message and may return a `Task`
//! - **View**: `App::view` renders the nav bar, code input and status bar
//!
//! Editor state lives in `quill-core`; this crate only wires it to widgets.

pub mod app;
pub mod keys;
pub mod style;
pub mod theme;

pub use app::{run, App, Flags};
