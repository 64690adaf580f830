// src/port/constants.rs

//! VGA register port addresses (color emulation)

/// Attribute controller index register (also the data write register)
pub const AC_INDEX: u16 = 0x3C0;
/// Attribute controller data write register
pub const AC_WRITE: u16 = 0x3C0;
/// Attribute controller data read register
#[allow(dead_code)]
pub const AC_READ: u16 = 0x3C1;

/// Miscellaneous output register (write)
pub const MISC_WRITE: u16 = 0x3C2;

/// Sequencer index/data pair
pub const SEQ_INDEX: u16 = 0x3C4;
pub const SEQ_DATA: u16 = 0x3C5;

/// Graphics controller index/data pair
pub const GC_INDEX: u16 = 0x3CE;
pub const GC_DATA: u16 = 0x3CF;

/// CRT controller index/data pair (0x3B4/0x3B5 in mono emulation)
pub const CRTC_INDEX: u16 = 0x3D4;
pub const CRTC_DATA: u16 = 0x3D5;

/// Input status #1 register; reading it also resets the attribute flip-flop
pub const INPUT_STATUS: u16 = 0x3DA;

/// Vertical retrace bit in [`INPUT_STATUS`]
pub const VRETRACE_BIT: u8 = 0x08;

/// CRTC cursor location registers
pub const CRTC_CURSOR_HIGH: u8 = 0x0E;
pub const CRTC_CURSOR_LOW: u8 = 0x0F;
