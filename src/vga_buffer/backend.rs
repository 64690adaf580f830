// src/vga_buffer/backend.rs

//! Low-level text cell storage.
//!
//! The [`CellBuffer`] trait lets the console target either the adapter's
//! text surface at `0xB8000` or an in-memory stub for testing. Every method
//! is total: out-of-range requests are ignored, and the console never issues
//! them in the first place.

use super::constants::{CELL_COUNT, VGA_BUFFER_ADDR, VGA_HEIGHT, VGA_WIDTH};
use core::ptr::NonNull;

/// Abstraction over the VGA character cell memory.
pub trait CellBuffer {
    /// Write the encoded `value` (character | attribute << 8) to `index`.
    fn write_cell(&mut self, index: usize, value: u16);

    /// Move `count` cells starting at `src` to `dst`. Ranges may overlap.
    fn copy_cells(&mut self, src: usize, dst: usize, count: usize);

    /// Fill an entire row with `value`.
    fn fill_row(&mut self, row: usize, value: u16) {
        if row >= VGA_HEIGHT {
            return;
        }
        let start = row * VGA_WIDTH;
        for index in start..start + VGA_WIDTH {
            self.write_cell(index, value);
        }
    }

    /// Fill every cell with `value`.
    fn fill_all(&mut self, value: u16) {
        for row in 0..VGA_HEIGHT {
            self.fill_row(row, value);
        }
    }
}

#[inline]
const fn range_fits(start: usize, count: usize) -> bool {
    match start.checked_add(count) {
        Some(end) => end <= CELL_COUNT,
        None => false,
    }
}

/// Concrete backend that talks to the legacy text-mode buffer at 0xB8000.
#[derive(Debug, Clone, Copy)]
pub struct TextModeBuffer {
    ptr: NonNull<u16>,
}

impl TextModeBuffer {
    /// Construct a new text-mode backend.
    ///
    /// # Safety
    ///
    /// The text surface must be identity-mapped at `0xB8000` and no other
    /// code may write to it while this backend is alive.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self {
            // SAFETY: 0xB8000 is the canonical VGA text buffer address.
            ptr: unsafe { NonNull::new_unchecked(VGA_BUFFER_ADDR as *mut u16) },
        }
    }
}

// SAFETY: the backend is the sole writer of the text surface (see `new`).
unsafe impl Send for TextModeBuffer {}

impl CellBuffer for TextModeBuffer {
    fn write_cell(&mut self, index: usize, value: u16) {
        if index >= CELL_COUNT {
            return;
        }
        // SAFETY: index is within the 80x25 surface.
        unsafe {
            core::ptr::write_volatile(self.ptr.as_ptr().add(index), value);
        }
    }

    fn copy_cells(&mut self, src: usize, dst: usize, count: usize) {
        if count == 0 || !range_fits(src, count) || !range_fits(dst, count) {
            return;
        }
        // SAFETY: both ranges were checked against the surface size.
        unsafe {
            core::ptr::copy(
                self.ptr.as_ptr().add(src),
                self.ptr.as_ptr().add(dst),
                count,
            );
        }
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
    }
}

/// Simple stub implementation backed by regular memory for testing.
#[derive(Debug, Clone)]
pub struct StubBuffer {
    cells: [u16; CELL_COUNT],
}

impl StubBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Raw encoded cell at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= VGA_HEIGHT` or `col >= VGA_WIDTH`.
    pub fn cell(&self, row: usize, col: usize) -> u16 {
        assert!(
            row < VGA_HEIGHT && col < VGA_WIDTH,
            "cell ({}, {}) outside the text grid",
            row,
            col
        );
        self.cells[row * VGA_WIDTH + col]
    }

    /// Character byte at `row`, `col`.
    pub fn char_at(&self, row: usize, col: usize) -> u8 {
        (self.cell(row, col) & 0xFF) as u8
    }

    /// Attribute byte at `row`, `col`.
    pub fn attr_at(&self, row: usize, col: usize) -> u8 {
        (self.cell(row, col) >> 8) as u8
    }

    /// Character bytes of a whole row.
    pub fn row_chars(&self, row: usize) -> [u8; VGA_WIDTH] {
        let mut out = [0u8; VGA_WIDTH];
        for (col, slot) in out.iter_mut().enumerate() {
            *slot = self.char_at(row, col);
        }
        out
    }
}

impl Default for StubBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CellBuffer for StubBuffer {
    fn write_cell(&mut self, index: usize, value: u16) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = value;
        }
    }

    fn copy_cells(&mut self, src: usize, dst: usize, count: usize) {
        if !range_fits(src, count) || !range_fits(dst, count) {
            return;
        }
        self.cells.copy_within(src..src + count, dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_row_touches_only_that_row() {
        let mut buffer = StubBuffer::new();
        buffer.fill_row(3, 0x0741);
        assert_eq!(buffer.char_at(3, 0), b'A');
        assert_eq!(buffer.char_at(3, VGA_WIDTH - 1), b'A');
        assert_eq!(buffer.cell(2, VGA_WIDTH - 1), 0);
        assert_eq!(buffer.cell(4, 0), 0);
    }

    #[test]
    fn out_of_range_requests_are_ignored() {
        let mut buffer = StubBuffer::new();
        buffer.write_cell(CELL_COUNT, 0xFFFF);
        buffer.copy_cells(CELL_COUNT - 1, 0, 2);
        buffer.fill_row(VGA_HEIGHT, 0xFFFF);
        assert!(buffer.cells.iter().all(|&cell| cell == 0));
    }

    #[test]
    fn copy_handles_overlap() {
        let mut buffer = StubBuffer::new();
        for col in 0..VGA_WIDTH {
            buffer.write_cell(VGA_WIDTH + col, 0x0700 | b'x' as u16);
        }
        buffer.copy_cells(VGA_WIDTH, 0, 2 * VGA_WIDTH);
        assert_eq!(buffer.row_chars(0), [b'x'; VGA_WIDTH]);
        assert_eq!(buffer.row_chars(1), [0; VGA_WIDTH]);
    }

    #[test]
    #[should_panic(expected = "outside the text grid")]
    fn stub_cell_rejects_columns_past_the_row() {
        let buffer = StubBuffer::new();
        // would alias row 1, column 0 without the check
        let _ = buffer.cell(0, VGA_WIDTH);
    }
}
