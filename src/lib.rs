// src/lib.rs
//! tiny_vga - bare-metal VGA driver
//!
//! Two engines sit on top of one port abstraction:
//! - [`vga_buffer`]: the 80x25 text console at 0xB8000
//! - [`graphics`]: a double-buffered 320x200x256 surface (mode 13h)
//!
//! [`display`] routes text to either the firmware terminal or the text
//! console and gates graphics on the active mode. Diagnostics go through
//! the `log` facade; [`serial`] provides a COM1 sink for it.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod display;
pub mod errors;
pub mod graphics;
pub mod port;
pub mod serial;
pub mod vga_buffer;

pub use config::{ConsoleConfig, NewlineStyle};
pub use display::{DisplayMode, FirmwareTerminal, Screen};
pub use errors::{DisplayError, DriverError, ErrorContext, GraphicsError, SerialError};
pub use graphics::{GraphicsDriver, RgbColor};
pub use port::PortIo;
pub use vga_buffer::{ColorCode, TextConsole, VgaColor};

/// Concrete driver types bound to the adapter's fixed memory and I/O ports.
#[cfg(target_arch = "x86_64")]
pub mod hardware {
    use crate::graphics::{GraphicsDriver, Mode13hBuffer};
    use crate::port::HardwarePorts;
    use crate::vga_buffer::{TextConsole, TextModeBuffer};

    pub type HardwareConsole = TextConsole<TextModeBuffer, HardwarePorts>;
    pub type HardwareGraphics = GraphicsDriver<Mode13hBuffer, HardwarePorts>;

    /// Text console on the adapter's text surface.
    ///
    /// # Safety
    ///
    /// 0xB8000 must be identity-mapped and no other console may own it
    /// (including the global one behind `print!`).
    #[must_use]
    pub unsafe fn text_console() -> HardwareConsole {
        // SAFETY: forwarded to the caller.
        TextConsole::new(unsafe { TextModeBuffer::new() }, HardwarePorts::new())
    }

    /// Graphics engine on the adapter's pixel memory. The back buffer is
    /// about 64 KiB, so this usually initializes a `static`.
    ///
    /// # Safety
    ///
    /// 0xA0000 must be identity-mapped and owned by the returned driver.
    #[must_use]
    pub const unsafe fn graphics() -> HardwareGraphics {
        // SAFETY: forwarded to the caller.
        GraphicsDriver::new(unsafe { Mode13hBuffer::new() }, HardwarePorts::new())
    }
}
