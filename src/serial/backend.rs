// src/serial/backend.rs

//! Register access for the UART.
//!
//! The UART logic only sees [`SerialHardware`]; the x86 backend issues port
//! I/O through the `x86_64` crate, tests substitute an in-memory device.

use super::constants::register_offset;

/// Registers that the UART driver interacts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    Data,
    InterruptEnable,
    FifoControl,
    LineControl,
    ModemControl,
    LineStatus,
    ModemStatus,
    Scratch,
}

impl Register {
    /// Offset from the UART base port
    pub const fn offset(self) -> u16 {
        match self {
            Self::Data => register_offset::DATA,
            Self::InterruptEnable => register_offset::INTERRUPT_ENABLE,
            Self::FifoControl => register_offset::FIFO_CONTROL,
            Self::LineControl => register_offset::LINE_CONTROL,
            Self::ModemControl => register_offset::MODEM_CONTROL,
            Self::LineStatus => register_offset::LINE_STATUS,
            Self::ModemStatus => register_offset::MODEM_STATUS,
            Self::Scratch => register_offset::SCRATCH,
        }
    }
}

/// Minimal abstraction over UART register access.
pub trait SerialHardware {
    /// Write a value to a UART register.
    fn write(&mut self, register: Register, value: u8);
    /// Read the current value of a UART register.
    fn read(&mut self, register: Register) -> u8;
}

/// x86 implementation backed by port I/O instructions.
#[cfg(target_arch = "x86_64")]
#[derive(Debug, Clone, Copy)]
pub struct PortIoBackend {
    base: u16,
}

#[cfg(target_arch = "x86_64")]
impl PortIoBackend {
    /// Backend for the UART at `base` (e.g. [`COM1_BASE`](super::constants::COM1_BASE)).
    pub const fn new(base: u16) -> Self {
        Self { base }
    }
}

#[cfg(target_arch = "x86_64")]
impl SerialHardware for PortIoBackend {
    #[inline]
    fn write(&mut self, register: Register, value: u8) {
        use x86_64::instructions::port::Port;
        // SAFETY: `base` names a UART; its eight registers have no memory
        // side effects.
        unsafe { Port::<u8>::new(self.base + register.offset()).write(value) }
    }

    #[inline]
    fn read(&mut self, register: Register) -> u8 {
        use x86_64::instructions::port::Port;
        // SAFETY: see `write`.
        unsafe { Port::<u8>::new(self.base + register.offset()).read() }
    }
}
