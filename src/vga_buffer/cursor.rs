// src/vga_buffer/cursor.rs

//! Cursor bookkeeping and hardware cursor synchronization.

use super::constants::{VGA_HEIGHT, VGA_WIDTH};
use crate::port::constants::{CRTC_CURSOR_HIGH, CRTC_CURSOR_LOW, CRTC_DATA, CRTC_INDEX};
use crate::port::PortIo;

/// Cursor position; always a valid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Outcome of advancing past the last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Advance {
    /// Cursor moved within the screen
    Moved,
    /// Cursor fell off the last row and is now held at column 0 of the last
    /// row; the caller must scroll
    Scroll,
}

impl Position {
    /// Top-left corner
    pub const fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Linear cell index in the text buffer
    pub const fn cell_index(&self) -> usize {
        self.row * VGA_WIDTH + self.col
    }

    /// Move one cell forward, wrapping at the end of the row.
    pub(super) fn advance(&mut self) -> Advance {
        self.col += 1;
        if self.col < VGA_WIDTH {
            return Advance::Moved;
        }
        self.col = 0;
        self.next_row()
    }

    /// Move to column 0 of the next row.
    pub(super) fn new_line(&mut self) -> Advance {
        self.col = 0;
        self.next_row()
    }

    fn next_row(&mut self) -> Advance {
        if self.row + 1 < VGA_HEIGHT {
            self.row += 1;
            Advance::Moved
        } else {
            self.row = VGA_HEIGHT - 1;
            Advance::Scroll
        }
    }

    /// Move one cell backward, wrapping to the previous row and from row 0
    /// to the last row.
    pub(super) fn retreat(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            return;
        }
        self.col = VGA_WIDTH - 1;
        self.row = if self.row > 0 { self.row - 1 } else { VGA_HEIGHT - 1 };
    }

    /// Check the row/column invariant
    pub const fn is_valid(&self) -> bool {
        self.row < VGA_HEIGHT && self.col < VGA_WIDTH
    }
}

/// Point the adapter's blinking cursor at `pos`.
///
/// Writes the low byte of the cell index to CRTC register 0x0F, then the
/// high byte to CRTC register 0x0E.
pub fn sync_hardware_cursor<P: PortIo>(ports: &mut P, pos: Position) {
    let index = pos.cell_index() as u16;
    ports.write_indexed(CRTC_INDEX, CRTC_DATA, CRTC_CURSOR_LOW, (index & 0xFF) as u8);
    ports.write_indexed(CRTC_INDEX, CRTC_DATA, CRTC_CURSOR_HIGH, (index >> 8) as u8);
}
