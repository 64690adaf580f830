// src/display/screen.rs

//! The [`Screen`] dispatcher over the firmware terminal, the text console
//! and the graphics engine.

use super::backend::{DisplayMode, FirmwareTerminal};
use crate::errors::{self, DisplayError, GraphicsError};
use crate::graphics::{FrontBuffer, GraphicsDriver, RgbColor};
use crate::port::PortIo;
use crate::vga_buffer::{CellBuffer, TextConsole, VgaColor};
use core::fmt;

/// Firmware terminal colors applied by [`Screen::init`]
pub const FIRMWARE_DEFAULT_FOREGROUND: VgaColor = VgaColor::White;
pub const FIRMWARE_DEFAULT_BACKGROUND: VgaColor = VgaColor::Black;

/// Single entry point for screen output.
///
/// Text calls reach exactly one backend, picked by the current
/// [`DisplayMode`]. Graphics calls are only serviced in
/// [`DisplayMode::Direct`]; in firmware mode they fail with
/// [`DisplayError::Unsupported`] and nothing is drawn.
pub struct Screen<T, B, F, P>
where
    T: FirmwareTerminal,
    B: CellBuffer,
    F: FrontBuffer,
    P: PortIo,
{
    mode: DisplayMode,
    firmware: T,
    console: TextConsole<B, P>,
    graphics: GraphicsDriver<F, P>,
}

impl<T, B, F, P> Screen<T, B, F, P>
where
    T: FirmwareTerminal,
    B: CellBuffer,
    F: FrontBuffer,
    P: PortIo,
{
    pub fn new(
        mode: DisplayMode,
        firmware: T,
        console: TextConsole<B, P>,
        graphics: GraphicsDriver<F, P>,
    ) -> Self {
        Self {
            mode,
            firmware,
            console,
            graphics,
        }
    }

    /// Bring up the active text backend.
    ///
    /// In firmware mode the terminal is initialized, reset to white on black
    /// and cleared. The direct console is already blank after construction,
    /// so only its cursor is homed.
    pub fn init(&mut self) {
        match self.mode {
            DisplayMode::Firmware => {
                self.firmware.initialize();
                self.reset_foreground();
                self.reset_background();
                self.firmware.clear();
            }
            DisplayMode::Direct => self.console.clear(),
        }
        log::debug!("display: {} backend initialized", self.mode);
    }

    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Change the text backend. Neither backend is touched.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        if mode != self.mode {
            log::debug!("display: switching {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }

    pub fn clear(&mut self) {
        match self.mode {
            DisplayMode::Firmware => self.firmware.clear(),
            DisplayMode::Direct => self.console.clear(),
        }
    }

    pub fn write_str(&mut self, text: &str) {
        match self.mode {
            DisplayMode::Firmware => self.firmware.write_str(text),
            DisplayMode::Direct => self.console.write_string(text),
        }
    }

    pub fn write_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.write_str(c.encode_utf8(&mut utf8));
    }

    pub fn cursor_column(&self) -> usize {
        match self.mode {
            DisplayMode::Firmware => self.firmware.cursor_column(),
            DisplayMode::Direct => self.console.cursor_column(),
        }
    }

    pub fn cursor_row(&self) -> usize {
        match self.mode {
            DisplayMode::Firmware => self.firmware.cursor_row(),
            DisplayMode::Direct => self.console.cursor_row(),
        }
    }

    pub fn set_cursor_column(&mut self, column: usize) {
        match self.mode {
            DisplayMode::Firmware => self.firmware.set_cursor_column(column),
            DisplayMode::Direct => self.console.set_cursor_column(column),
        }
    }

    pub fn set_cursor_row(&mut self, row: usize) {
        match self.mode {
            DisplayMode::Firmware => self.firmware.set_cursor_row(row),
            DisplayMode::Direct => self.console.set_cursor_row(row),
        }
    }

    pub fn set_foreground(&mut self, color: VgaColor) {
        match self.mode {
            DisplayMode::Firmware => self.firmware.set_foreground_color(color),
            DisplayMode::Direct => self.console.set_foreground(color),
        }
    }

    pub fn set_background(&mut self, color: VgaColor) {
        match self.mode {
            DisplayMode::Firmware => self.firmware.set_background_color(color),
            DisplayMode::Direct => self.console.set_background(color),
        }
    }

    /// Restore the backend's default foreground color
    pub fn reset_foreground(&mut self) {
        let color = match self.mode {
            DisplayMode::Firmware => FIRMWARE_DEFAULT_FOREGROUND,
            DisplayMode::Direct => self.console.config().foreground,
        };
        self.set_foreground(color);
    }

    /// Restore the backend's default background color
    pub fn reset_background(&mut self) {
        let color = match self.mode {
            DisplayMode::Firmware => FIRMWARE_DEFAULT_BACKGROUND,
            DisplayMode::Direct => self.console.config().background,
        };
        self.set_background(color);
    }

    fn require_graphics(&self, op: &str) -> Result<(), DisplayError> {
        if self.mode.supports_graphics() {
            Ok(())
        } else {
            log::warn!("display: {} rejected in {} mode", op, self.mode);
            Err(DisplayError::Unsupported)
        }
    }

    /// Program mode 13h and clear the back buffer.
    ///
    /// # Errors
    ///
    /// [`DisplayError::Unsupported`] in firmware mode.
    pub fn enter_graphics_mode(&mut self) -> Result<(), DisplayError> {
        self.require_graphics("graphics mode switch")?;
        self.graphics.enter_mode();
        Ok(())
    }

    /// # Errors
    ///
    /// [`DisplayError::Unsupported`] in firmware mode, otherwise any
    /// [`GraphicsError`](crate::errors::GraphicsError) from the engine.
    pub fn pixel(&mut self, x: u32, y: u32, color: RgbColor) -> Result<(), DisplayError> {
        self.require_graphics("pixel")?;
        self.graphics.pixel(x, y, color)?;
        Ok(())
    }

    /// # Errors
    ///
    /// [`DisplayError::Unsupported`] in firmware mode, otherwise any
    /// [`GraphicsError`](crate::errors::GraphicsError) from the engine.
    pub fn rectangle(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        color: RgbColor,
    ) -> Result<(), DisplayError> {
        self.require_graphics("rectangle")?;
        self.graphics.rectangle(x, y, width, height, color)?;
        Ok(())
    }

    /// # Errors
    ///
    /// [`DisplayError::Unsupported`] in firmware mode.
    pub fn flip(&mut self) -> Result<(), DisplayError> {
        self.require_graphics("flip")?;
        self.graphics.flip();
        Ok(())
    }

    /// Draw one frame with `draw` and flip it if every drawing call
    /// succeeded.
    ///
    /// # Errors
    ///
    /// [`DisplayError::Unsupported`] in firmware mode, or the first
    /// [`GraphicsError`] returned by `draw`; nothing is flipped in either
    /// case.
    pub fn draw_frame<D>(&mut self, draw: D) -> errors::Result<()>
    where
        D: FnOnce(&mut GraphicsDriver<F, P>) -> Result<(), GraphicsError>,
    {
        self.require_graphics("frame")?;
        draw(&mut self.graphics)?;
        self.graphics.flip();
        Ok(())
    }

    pub fn firmware(&self) -> &T {
        &self.firmware
    }

    pub fn console(&self) -> &TextConsole<B, P> {
        &self.console
    }

    pub fn graphics(&self) -> &GraphicsDriver<F, P> {
        &self.graphics
    }
}

impl<T, B, F, P> fmt::Debug for Screen<T, B, F, P>
where
    T: FirmwareTerminal,
    B: CellBuffer,
    F: FrontBuffer,
    P: PortIo,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("mode", &self.mode)
            .field("graphics", &self.graphics)
            .finish_non_exhaustive()
    }
}

impl<T, B, F, P> fmt::Write for Screen<T, B, F, P>
where
    T: FirmwareTerminal,
    B: CellBuffer,
    F: FrontBuffer,
    P: PortIo,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Screen::write_str(self, s);
        Ok(())
    }
}
