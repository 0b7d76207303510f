//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`readout`]: the calculator display with the pending-expression hint
//! - [`keypad`]: the button grid, with the last press highlighted
//! - [`status`]: status bar with session phase, message and keybindings
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! the area and the borrowed state it draws.

pub mod keypad;
pub mod readout;
pub mod status;

pub use keypad::{render_keypad_pane, KeypadHit, KEYPAD_ROWS};
pub use readout::render_readout_pane;
pub use status::render_status_bar;
