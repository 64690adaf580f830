// src/serial/constants.rs

//! Constants and register definitions for the COM1 UART

/// COM1 base I/O port
pub const COM1_BASE: u16 = 0x3F8;

/// Register offsets from base port
pub mod register_offset {
    pub const DATA: u16 = 0;
    pub const INTERRUPT_ENABLE: u16 = 1;
    pub const FIFO_CONTROL: u16 = 2;
    pub const LINE_CONTROL: u16 = 3;
    pub const MODEM_CONTROL: u16 = 4;
    pub const LINE_STATUS: u16 = 5;
    pub const MODEM_STATUS: u16 = 6;
    pub const SCRATCH: u16 = 7;
}

/// Divisor latch for 38400 baud (115200 / 3)
pub const BAUD_DIVISOR: u16 = 3;

/// LCR: divisor latch access bit
pub const LCR_DLAB: u8 = 0x80;
/// LCR: 8 data bits, no parity, one stop bit
pub const LCR_8N1: u8 = 0x03;
/// FCR: enable and clear FIFOs, 14-byte threshold
pub const FCR_ENABLE_CLEAR_14: u8 = 0xC7;
/// MCR: DTR, RTS and OUT2
pub const MCR_NORMAL: u8 = 0x0B;
/// MCR: loopback with RTS, OUT1 and OUT2
pub const MCR_LOOPBACK: u8 = 0x1E;
/// LSR: transmit holding register empty
pub const LSR_THR_EMPTY: u8 = 0x20;

/// Byte echoed through loopback during detection
pub const LOOPBACK_TEST_BYTE: u8 = 0xAE;

/// Line status polls before a byte is given up on
pub const MAX_TX_SPINS: u32 = 100_000;
