// src/serial/mod.rs

//! Serial port driver (COM1) for diagnostics
//!
//! Provides:
//! - UART setup on COM1 (0x3F8), 38400 baud 8N1, with loopback detection
//! - A `log` sink writing `[LEVEL] target: message` lines
//! - `serial_print!`/`serial_println!` for raw output
//!
//! The global port and the logger exist only on bare-metal x86 targets.
//! Without an installed logger the driver's `log` calls are no-ops.

pub mod backend;
pub mod constants;
mod uart;

#[cfg(target_arch = "x86_64")]
pub use backend::PortIoBackend;
pub use backend::{Register, SerialHardware};
pub use uart::Uart;

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub use global::*;

use core::fmt;

/// Format one log record as a single line.
pub fn write_record<W: fmt::Write>(out: &mut W, record: &log::Record<'_>) -> fmt::Result {
    writeln!(out, "[{}] {}: {}", record.level(), record.target(), record.args())
}

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
mod global {
    use super::constants::COM1_BASE;
    use super::{write_record, PortIoBackend, Uart};
    use crate::errors::SerialError;
    use core::fmt;
    use log::{LevelFilter, Log, Metadata, Record};
    use spin::Mutex;
    use x86_64::instructions::interrupts;

    static COM1: Mutex<Uart<PortIoBackend>> = Mutex::new(Uart::new(PortIoBackend::new(COM1_BASE)));

    static LOGGER: SerialLogger = SerialLogger;

    fn with_port<F, R>(f: F) -> R
    where
        F: FnOnce(&mut Uart<PortIoBackend>) -> R,
    {
        interrupts::without_interrupts(|| f(&mut COM1.lock()))
    }

    /// `log` sink on COM1
    #[derive(Debug, Clone, Copy)]
    pub struct SerialLogger;

    impl Log for SerialLogger {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record<'_>) {
            if self.enabled(record.metadata()) {
                with_port(|uart| {
                    let _ = write_record(uart, record);
                });
            }
        }

        fn flush(&self) {}
    }

    /// Configure COM1.
    ///
    /// # Errors
    ///
    /// [`SerialError::PortNotPresent`] when no UART answers at 0x3F8.
    pub fn init() -> Result<(), SerialError> {
        with_port(|uart| uart.init())
    }

    /// Configure COM1 and route `log` output to it.
    ///
    /// # Errors
    ///
    /// [`SerialError::PortNotPresent`] when no UART answers,
    /// [`SerialError::AlreadyInitialized`] when a logger is already set.
    pub fn init_logger(level: LevelFilter) -> Result<(), SerialError> {
        init()?;
        log::set_logger(&LOGGER).map_err(|_| SerialError::AlreadyInitialized)?;
        log::set_max_level(level);
        log::debug!("serial logger installed at {}", level);
        Ok(())
    }

    /// Whether COM1 passed detection
    pub fn is_available() -> bool {
        with_port(|uart| uart.is_ready())
    }

    #[doc(hidden)]
    pub fn _print(args: fmt::Arguments) {
        use core::fmt::Write;
        with_port(|uart| {
            let _ = uart.write_fmt(args);
        });
    }
}

/// Prints to the host through the serial interface.
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::serial::_print(format_args!($($arg)*))
    };
}

/// Prints to the host through the serial interface, appending a newline.
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($fmt:expr) => ($crate::serial_print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::serial_print!(concat!($fmt, "\n"), $($arg)*));
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Record};
    use std::string::String;

    #[test]
    fn record_line_format() {
        let mut out = String::new();
        write_record(
            &mut out,
            &Record::builder()
                .args(format_args!("entered mode {:#x}", 0x13))
                .level(Level::Debug)
                .target("tiny_vga::graphics")
                .build(),
        )
        .unwrap();
        assert_eq!(out, "[DEBUG] tiny_vga::graphics: entered mode 0x13\n");
    }

    #[test]
    fn register_offsets_cover_the_block() {
        assert_eq!(Register::Data.offset(), 0);
        assert_eq!(Register::LineStatus.offset(), 5);
        assert_eq!(Register::Scratch.offset(), 7);
    }
}
