// src/vga_buffer/writer.rs

//! Text console engine: control-character interpretation, wrap, scroll and
//! hardware cursor tracking on top of a [`CellBuffer`].

use super::backend::CellBuffer;
use super::color::{ColorCode, VgaColor};
use super::constants::*;
use super::cursor::{sync_hardware_cursor, Advance, Position};
use crate::config::{ConsoleConfig, NewlineStyle};
use crate::port::PortIo;
use core::fmt;

/// A writer that puts bytes into the VGA text grid and keeps the hardware
/// cursor in step.
///
/// All operations are total: the cursor is always a valid cell and no
/// method can fail.
#[derive(Debug)]
pub struct TextConsole<B, P> {
    position: Position,
    color_code: ColorCode,
    config: ConsoleConfig,
    buffer: B,
    ports: P,
}

impl<B: CellBuffer, P: PortIo> TextConsole<B, P> {
    /// Create a console with the default configuration and blank the screen.
    pub fn new(buffer: B, ports: P) -> Self {
        Self::with_config(buffer, ports, ConsoleConfig::default())
    }

    /// Create a console, home the cursor and fill every cell with a blank in
    /// the configured colors.
    pub fn with_config(buffer: B, ports: P, config: ConsoleConfig) -> Self {
        let mut console = Self {
            position: Position::new(),
            color_code: config.color_code(),
            config,
            buffer,
            ports,
        };
        console.buffer.fill_all(console.blank());
        console
    }

    #[inline]
    pub const fn encode_char(c: u8, color: ColorCode) -> u16 {
        (color.as_u8() as u16) << 8 | c as u16
    }

    #[inline]
    fn blank(&self) -> u16 {
        Self::encode_char(BLANK, self.color_code)
    }

    /// Write one byte, interpreting newline, backspace and tab.
    pub fn write_byte(&mut self, byte: u8) {
        match byte {
            NEWLINE => self.new_line(),
            BACKSPACE => self.backspace(),
            TAB => {
                // each space syncs the cursor on its own
                for _ in 0..self.config.tab_width {
                    self.write_byte(BLANK);
                }
                return;
            }
            byte => self.put_char(byte),
        }
        self.sync_cursor();
    }

    /// Write every byte of `bytes` in order.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }

    pub fn write_string(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    /// Write `s` in `color`, then restore the previous color.
    pub fn write_colored(&mut self, s: &str, color: ColorCode) {
        let old_color = self.color_code;
        self.color_code = color;
        self.write_string(s);
        self.color_code = old_color;
    }

    /// Blank the whole screen in the current color and home the cursor.
    pub fn clear(&mut self) {
        self.buffer.fill_all(self.blank());
        self.position = Position::new();
        self.sync_cursor();
    }

    pub fn set_color(&mut self, color: ColorCode) {
        self.color_code = color;
    }

    pub fn set_foreground(&mut self, fg: VgaColor) {
        self.color_code = self.color_code.with_foreground(fg);
    }

    pub fn set_background(&mut self, bg: VgaColor) {
        self.color_code = self.color_code.with_background(bg);
    }

    pub const fn color(&self) -> ColorCode {
        self.color_code
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn cursor_row(&self) -> usize {
        self.position.row
    }

    pub const fn cursor_column(&self) -> usize {
        self.position.col
    }

    /// Move the cursor to `row` (reduced modulo the screen height).
    pub fn set_cursor_row(&mut self, row: usize) {
        self.position.row = row % VGA_HEIGHT;
        self.sync_cursor();
    }

    /// Move the cursor to `col` (reduced modulo the screen width).
    pub fn set_cursor_column(&mut self, col: usize) {
        self.position.col = col % VGA_WIDTH;
        self.sync_cursor();
    }

    pub const fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub const fn buffer(&self) -> &B {
        &self.buffer
    }

    pub const fn ports(&self) -> &P {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut P {
        &mut self.ports
    }

    fn put_char(&mut self, byte: u8) {
        let cell = Self::encode_char(byte, self.color_code);
        self.buffer.write_cell(self.position.cell_index(), cell);
        if self.position.advance() == Advance::Scroll {
            self.scroll_up();
        }
    }

    fn new_line(&mut self) {
        match self.config.newline {
            NewlineStyle::Direct => {
                if self.position.new_line() == Advance::Scroll {
                    self.scroll_up();
                }
            }
            NewlineStyle::PadLastCell => {
                self.position.col = VGA_WIDTH - 1;
                self.put_char(BLANK);
            }
        }
    }

    fn backspace(&mut self) {
        self.position.retreat();
        let blank = self.blank();
        self.buffer.write_cell(self.position.cell_index(), blank);
    }

    /// Drop row 0, move every other row up by one and blank the last row.
    fn scroll_up(&mut self) {
        self.buffer
            .copy_cells(VGA_WIDTH, 0, VGA_WIDTH * (VGA_HEIGHT - 1));
        let blank = self.blank();
        self.buffer.fill_row(VGA_HEIGHT - 1, blank);
        log::trace!("text console scrolled");
    }

    fn sync_cursor(&mut self) {
        sync_hardware_cursor(&mut self.ports, self.position);
    }
}

impl<B: CellBuffer, P: PortIo> fmt::Write for TextConsole<B, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s);
        Ok(())
    }
}
