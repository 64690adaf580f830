// src/config.rs

//! Runtime configuration for the text console.

use crate::vga_buffer::{ColorCode, VgaColor};

/// Default number of spaces emitted for a tab character
pub const DEFAULT_TAB_WIDTH: u8 = 2;

/// How a newline moves the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewlineStyle {
    /// Jump straight to column 0 of the next row; no cell is written.
    #[default]
    Direct,
    /// Move to the last column of the current row and emit a space, letting
    /// the regular wrap produce the next row. Overwrites the last cell of the
    /// old line.
    PadLastCell,
}

/// Text console settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Spaces per tab
    pub tab_width: u8,
    /// Initial foreground color
    pub foreground: VgaColor,
    /// Initial background color
    pub background: VgaColor,
    /// Newline handling
    pub newline: NewlineStyle,
}

impl ConsoleConfig {
    /// Light grey on black, two-space tabs, direct newlines.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            foreground: VgaColor::LightGray,
            background: VgaColor::Black,
            newline: NewlineStyle::Direct,
        }
    }

    #[must_use]
    pub const fn with_tab_width(mut self, tab_width: u8) -> Self {
        self.tab_width = tab_width;
        self
    }

    #[must_use]
    pub const fn with_colors(mut self, foreground: VgaColor, background: VgaColor) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    #[must_use]
    pub const fn with_newline(mut self, newline: NewlineStyle) -> Self {
        self.newline = newline;
        self
    }

    /// Attribute byte the console starts with
    #[must_use]
    pub const fn color_code(&self) -> ColorCode {
        ColorCode::new(self.foreground, self.background)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new()
    }
}
