// src/display/mod.rs

//! Display dispatch layer.
//!
//! Routes text to either the firmware terminal or the direct VGA text
//! console, and gates the mode 13h graphics engine on the active mode.

mod backend;
mod screen;

pub use backend::{DisplayMode, FirmwareTerminal};
pub use screen::{Screen, FIRMWARE_DEFAULT_BACKGROUND, FIRMWARE_DEFAULT_FOREGROUND};
