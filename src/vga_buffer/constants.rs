// src/vga_buffer/constants.rs

//! Constants for VGA text buffer operations

/// VGA text buffer physical memory address
pub const VGA_BUFFER_ADDR: usize = 0xb8000;

/// Screen dimensions
pub const VGA_WIDTH: usize = 80;
pub const VGA_HEIGHT: usize = 25;

/// Total number of character cells
pub const CELL_COUNT: usize = VGA_WIDTH * VGA_HEIGHT;

/// Character written into cleared cells
pub const BLANK: u8 = b' ';

/// Control bytes interpreted by the writer
pub const NEWLINE: u8 = b'\n';
pub const BACKSPACE: u8 = 0x08;
pub const TAB: u8 = 0x09;
