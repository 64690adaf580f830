// src/display/backend.rs

//! Text backend selection.
//!
//! A machine booted through firmware keeps using the firmware's own text
//! output until the driver takes over the adapter directly. The firmware
//! side is reached through [`FirmwareTerminal`], implemented by whoever owns
//! the firmware services; this crate never calls firmware itself.

use crate::vga_buffer::VgaColor;

/// Which backend currently owns the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Text goes to the firmware terminal; graphics is unavailable.
    #[default]
    Firmware,
    /// Text goes to the VGA text console; graphics is driven in mode 13h.
    Direct,
}

impl DisplayMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Firmware => "firmware",
            Self::Direct => "direct",
        }
    }

    /// Whether graphics calls are serviced in this mode
    #[must_use]
    pub const fn supports_graphics(&self) -> bool {
        matches!(self, Self::Direct)
    }
}

impl core::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Firmware-provided text output.
///
/// Colors use the 16-entry text palette; firmware text protocols number
/// their colors the same way as [`VgaColor`].
pub trait FirmwareTerminal {
    /// Prepare the firmware console for output.
    fn initialize(&mut self);

    fn clear(&mut self);

    fn write_str(&mut self, text: &str);

    fn cursor_column(&self) -> usize;

    fn cursor_row(&self) -> usize;

    fn set_cursor_column(&mut self, column: usize);

    fn set_cursor_row(&mut self, row: usize);

    fn set_foreground_color(&mut self, color: VgaColor);

    fn set_background_color(&mut self, color: VgaColor);
}

impl<T: FirmwareTerminal + ?Sized> FirmwareTerminal for &mut T {
    fn initialize(&mut self) {
        (**self).initialize()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn write_str(&mut self, text: &str) {
        (**self).write_str(text)
    }

    fn cursor_column(&self) -> usize {
        (**self).cursor_column()
    }

    fn cursor_row(&self) -> usize {
        (**self).cursor_row()
    }

    fn set_cursor_column(&mut self, column: usize) {
        (**self).set_cursor_column(column)
    }

    fn set_cursor_row(&mut self, row: usize) {
        (**self).set_cursor_row(row)
    }

    fn set_foreground_color(&mut self, color: VgaColor) {
        (**self).set_foreground_color(color)
    }

    fn set_background_color(&mut self, color: VgaColor) {
        (**self).set_background_color(color)
    }
}
