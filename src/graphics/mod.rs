// src/graphics/mod.rs

//! Mode 13h graphics engine
//!
//! Drawing only ever touches the software [`Canvas`]; the adapter's memory is
//! written in one piece by [`GraphicsDriver::flip`], timed to the start of a
//! vertical retrace.

pub mod canvas;
pub mod constants;
pub mod front;
pub mod mode;
pub mod palette;
pub mod vsync;

pub use canvas::Canvas;
pub use constants::{GHEIGHT, GWIDTH, PIXEL_COUNT};
pub use front::{FrontBuffer, MemoryFrontBuffer, Mode13hBuffer};
pub use mode::{write_regs, ModeTable, MODE_320X200X256};
pub use palette::{quantize, RgbColor};
pub use vsync::wait_for_vertical_retrace;

use crate::errors::GraphicsError;
use crate::port::PortIo;

/// Graphics state: back buffer, front buffer and the ports used for mode
/// switching and retrace polling.
pub struct GraphicsDriver<F: FrontBuffer, P: PortIo> {
    canvas: Canvas,
    front: F,
    ports: P,
}

impl<F: FrontBuffer, P: PortIo> GraphicsDriver<F, P> {
    /// Bind the backends. The adapter is not touched until
    /// [`enter_mode`](Self::enter_mode) or [`flip`](Self::flip).
    pub const fn new(front: F, ports: P) -> Self {
        Self {
            canvas: Canvas::new(),
            front,
            ports,
        }
    }

    /// Switch the adapter to 320x200x256 and clear the back buffer to black.
    ///
    /// The front buffer is left as is until the next flip.
    pub fn enter_mode(&mut self) {
        write_regs(&mut self.ports, &MODE_320X200X256);
        self.canvas.clear(RgbColor::black());
        log::debug!("graphics: entered mode 13h ({}x{})", GWIDTH, GHEIGHT);
    }

    /// Plot one pixel into the back buffer.
    ///
    /// # Errors
    ///
    /// See [`Canvas::put_pixel`].
    pub fn pixel(&mut self, x: u32, y: u32, color: RgbColor) -> Result<(), GraphicsError> {
        self.canvas.put_pixel(x, y, color)
    }

    /// Fill a rectangle in the back buffer.
    ///
    /// # Errors
    ///
    /// See [`Canvas::fill_rect`].
    pub fn rectangle(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        color: RgbColor,
    ) -> Result<(), GraphicsError> {
        self.canvas.fill_rect(x, y, width, height, color)
    }

    /// Wait for the next vertical retrace, then copy the visible back buffer
    /// to the front buffer.
    ///
    /// Busy-waits for at most one refresh period.
    pub fn flip(&mut self) {
        wait_for_vertical_retrace(&mut self.ports);
        self.front.present(self.canvas.visible());
        log::debug!("graphics: flip");
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn front(&self) -> &F {
        &self.front
    }

    pub fn ports(&self) -> &P {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut P {
        &mut self.ports
    }
}

impl<F: FrontBuffer, P: PortIo> core::fmt::Debug for GraphicsDriver<F, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GraphicsDriver")
            .field("canvas", &self.canvas)
            .finish_non_exhaustive()
    }
}
