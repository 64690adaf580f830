// src/vga_buffer/mod.rs

//! VGA text mode driver
//!
//! This module provides the 80x25 character console:
//! - 16-color attributes, foreground and background selectable independently
//! - Newline, backspace and tab interpretation
//! - Line wrap and scroll-up when the screen is full
//! - Hardware cursor kept in step after every character
//! - fmt::Write for print!/println! macros
//!
//! The engine itself is [`TextConsole`], generic over the cell storage and
//! the port backend. On bare-metal x86 targets a global console bound to the
//! adapter at `0xB8000` backs the free functions and macros below; every
//! access runs with interrupts disabled so an interrupt handler can never
//! deadlock on the lock.

mod backend;
mod color;
mod constants;
mod cursor;
mod writer;

pub use backend::{CellBuffer, StubBuffer, TextModeBuffer};
pub use color::{ColorCode, VgaColor};
pub use constants::*;
pub use cursor::{sync_hardware_cursor, Position};
pub use writer::TextConsole;

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub use global::*;

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
mod global {
    use super::{ColorCode, TextConsole, TextModeBuffer, VgaColor};
    use crate::port::HardwarePorts;
    use core::fmt;
    use lazy_static::lazy_static;
    use spin::Mutex;
    use x86_64::instructions::interrupts;

    type HardwareConsole = TextConsole<TextModeBuffer, HardwarePorts>;

    lazy_static! {
        /// Global console bound to the adapter's text surface
        static ref CONSOLE: Mutex<HardwareConsole> = Mutex::new(TextConsole::new(
            // SAFETY: this static is the only owner of the text surface.
            unsafe { TextModeBuffer::new() },
            HardwarePorts::new(),
        ));
    }

    fn with_console<F, R>(f: F) -> R
    where
        F: FnOnce(&mut HardwareConsole) -> R,
    {
        interrupts::without_interrupts(|| f(&mut CONSOLE.lock()))
    }

    /// Blank the screen and home the cursor. Calling it is optional; the
    /// first use of any other function performs the same initialization.
    pub fn init() {
        lazy_static::initialize(&CONSOLE);
        log::debug!("vga text console ready");
    }

    /// Clear the screen
    pub fn clear() {
        with_console(|console| console.clear());
    }

    /// Set the text color
    pub fn set_color(color: ColorCode) {
        with_console(|console| console.set_color(color));
    }

    pub fn set_foreground(fg: VgaColor) {
        with_console(|console| console.set_foreground(fg));
    }

    pub fn set_background(bg: VgaColor) {
        with_console(|console| console.set_background(bg));
    }

    /// Print colored text
    pub fn print_colored(s: &str, color: ColorCode) {
        with_console(|console| console.write_colored(s, color));
    }

    pub fn cursor() -> (usize, usize) {
        with_console(|console| (console.cursor_row(), console.cursor_column()))
    }

    pub fn set_cursor(row: usize, col: usize) {
        with_console(|console| {
            console.set_cursor_row(row);
            console.set_cursor_column(col);
        });
    }

    /// Print function called by macros
    #[doc(hidden)]
    pub fn _print(args: fmt::Arguments) {
        with_console(|console| {
            use core::fmt::Write;
            let _ = console.write_fmt(args);
        });
    }
}

/// Global print! macro
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ({
        $crate::vga_buffer::_print(format_args!($($arg)*))
    });
}

/// Global println! macro
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($fmt:expr) => ($crate::print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::print!(concat!($fmt, "\n"), $($arg)*));
}

#[cfg(test)]
mod tests;
