// src/port/mod.rs

//! Byte-wide port I/O abstraction for the VGA register blocks.
//!
//! Both display engines talk to the adapter exclusively through the
//! [`PortIo`] trait. On x86 the [`HardwarePorts`] backend issues real
//! `in`/`out` instructions via the `x86_64` crate; everywhere else (and in
//! tests) the [`RecordingPorts`] backend logs every access so register
//! sequences can be inspected after the fact.

pub mod constants;
mod recording;

pub use recording::{PortEvent, RecordingPorts, RECORD_CAPACITY};

/// Minimal abstraction over 8-bit port access.
pub trait PortIo {
    /// Read one byte from `port`.
    fn read(&mut self, port: u16) -> u8;

    /// Write one byte to `port`.
    fn write(&mut self, port: u16, value: u8);

    /// Select register `index` through `index_port` and write `value` to
    /// `data_port`.
    #[inline]
    fn write_indexed(&mut self, index_port: u16, data_port: u16, index: u8, value: u8) {
        self.write(index_port, index);
        self.write(data_port, value);
    }
}

impl<P: PortIo + ?Sized> PortIo for &mut P {
    #[inline]
    fn read(&mut self, port: u16) -> u8 {
        (**self).read(port)
    }

    #[inline]
    fn write(&mut self, port: u16, value: u8) {
        (**self).write(port, value)
    }
}

/// x86 implementation backed by port I/O instructions.
#[cfg(target_arch = "x86_64")]
#[derive(Debug, Default, Clone, Copy)]
pub struct HardwarePorts;

#[cfg(target_arch = "x86_64")]
impl HardwarePorts {
    /// Create a new port backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "x86_64")]
impl PortIo for HardwarePorts {
    #[inline]
    fn read(&mut self, port: u16) -> u8 {
        use x86_64::instructions::port::Port;
        // SAFETY: callers only pass the fixed VGA register addresses from
        // `constants`; reading them has no memory-safety implications.
        unsafe { Port::<u8>::new(port).read() }
    }

    #[inline]
    fn write(&mut self, port: u16, value: u8) {
        use x86_64::instructions::port::Port;
        // SAFETY: see `read`.
        unsafe { Port::<u8>::new(port).write(value) }
    }
}
