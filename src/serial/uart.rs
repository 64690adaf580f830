// src/serial/uart.rs

//! 16550 UART driver.

use super::backend::{Register, SerialHardware};
use super::constants::*;
use crate::errors::SerialError;
use core::fmt;

/// A 16550-compatible UART configured for 38400 baud 8N1.
pub struct Uart<H: SerialHardware> {
    hw: H,
    ready: bool,
}

impl<H: SerialHardware> Uart<H> {
    pub const fn new(hw: H) -> Self {
        Self { hw, ready: false }
    }

    /// Program line settings and verify the chip through a loopback echo.
    ///
    /// # Errors
    ///
    /// [`SerialError::PortNotPresent`] if the echoed byte does not come back;
    /// the UART stays unusable in that case.
    pub fn init(&mut self) -> Result<(), SerialError> {
        let [divisor_low, divisor_high] = BAUD_DIVISOR.to_le_bytes();

        self.hw.write(Register::InterruptEnable, 0x00);
        self.hw.write(Register::LineControl, LCR_DLAB);
        self.hw.write(Register::Data, divisor_low);
        self.hw.write(Register::InterruptEnable, divisor_high);
        self.hw.write(Register::LineControl, LCR_8N1);
        self.hw.write(Register::FifoControl, FCR_ENABLE_CLEAR_14);
        self.hw.write(Register::ModemControl, MCR_LOOPBACK);

        self.hw.write(Register::Data, LOOPBACK_TEST_BYTE);
        if self.hw.read(Register::Data) != LOOPBACK_TEST_BYTE {
            self.ready = false;
            return Err(SerialError::PortNotPresent);
        }

        self.hw.write(Register::ModemControl, MCR_NORMAL);
        self.ready = true;
        Ok(())
    }

    /// Whether [`init`](Self::init) found a working chip
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Send one byte once the transmit holding register is empty.
    ///
    /// # Errors
    ///
    /// [`SerialError::PortNotPresent`] before a successful `init`,
    /// [`SerialError::Timeout`] if the register does not drain within
    /// [`MAX_TX_SPINS`] polls.
    pub fn send(&mut self, byte: u8) -> Result<(), SerialError> {
        if !self.ready {
            return Err(SerialError::PortNotPresent);
        }
        for _ in 0..MAX_TX_SPINS {
            if self.hw.read(Register::LineStatus) & LSR_THR_EMPTY != 0 {
                self.hw.write(Register::Data, byte);
                return Ok(());
            }
            core::hint::spin_loop();
        }
        Err(SerialError::Timeout)
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }
}

impl<H: SerialHardware> fmt::Debug for Uart<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uart")
            .field("ready", &self.ready)
            .finish_non_exhaustive()
    }
}

impl<H: SerialHardware> fmt::Write for Uart<H> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.send(byte).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}
