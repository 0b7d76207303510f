//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, event loop, key and mouse dispatch
//! - **[`keymap`]** — keyboard characters to calculator [`Button`]s
//! - **[`panes`]** — render functions for the display, keypad and status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Session`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Button`]: crate::session::Button
//! [`Session`]: crate::session::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod keymap;
pub mod panes;
pub mod theme;

pub use app::App;
pub use keymap::{KeyAction, Keymap, ReplayError};
