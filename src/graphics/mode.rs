// src/graphics/mode.rs

//! Register table and programming sequence for mode 13h.

use crate::port::constants::{
    AC_INDEX, AC_WRITE, CRTC_DATA, CRTC_INDEX, GC_DATA, GC_INDEX, INPUT_STATUS, MISC_WRITE,
    SEQ_DATA, SEQ_INDEX,
};
use crate::port::PortIo;

/// Register counts per block, in table order after the misc output byte.
pub const SEQ_COUNT: usize = 5;
pub const CRTC_COUNT: usize = 25;
pub const GC_COUNT: usize = 9;
pub const AC_COUNT: usize = 21;

/// Total table length: misc + SEQ + CRTC + GC + AC
pub const MODE_TABLE_LEN: usize = 1 + SEQ_COUNT + CRTC_COUNT + GC_COUNT + AC_COUNT;

const SEQ_START: usize = 1;
const CRTC_START: usize = SEQ_START + SEQ_COUNT;
const GC_START: usize = CRTC_START + CRTC_COUNT;
const AC_START: usize = GC_START + GC_COUNT;

/// CRTC horizontal blanking end; bit 7 enables access to the vertical
/// retrace registers.
const CRTC_H_BLANK_END: u8 = 0x03;
/// CRTC vertical retrace end; bit 7 write-protects CRTC 0..=7.
const CRTC_V_RETRACE_END: u8 = 0x11;
const CRTC_UNLOCK_BIT: u8 = 0x80;

/// Attribute controller index with palette address source set: re-enables
/// video output after programming.
const AC_ENABLE_VIDEO: u8 = 0x20;

/// Ordered register values for one video mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTable([u8; MODE_TABLE_LEN]);

impl ModeTable {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; MODE_TABLE_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; MODE_TABLE_LEN] {
        &self.0
    }

    /// Miscellaneous output register value
    pub const fn misc(&self) -> u8 {
        self.0[0]
    }

    pub fn sequencer(&self) -> &[u8] {
        &self.0[SEQ_START..CRTC_START]
    }

    pub fn crtc(&self) -> &[u8] {
        &self.0[CRTC_START..GC_START]
    }

    pub fn graphics(&self) -> &[u8] {
        &self.0[GC_START..AC_START]
    }

    pub fn attribute(&self) -> &[u8] {
        &self.0[AC_START..]
    }

    fn crtc_mut(&mut self) -> &mut [u8] {
        &mut self.0[CRTC_START..GC_START]
    }
}

/// 320x200, 256 colors, linear at 0xA0000
#[rustfmt::skip]
pub const MODE_320X200X256: ModeTable = ModeTable::from_bytes([
    // misc
    0x63,
    // sequencer
    0x03, 0x01, 0x0F, 0x00, 0x0E,
    // crtc
    0x5F, 0x4F, 0x50, 0x82, 0x54, 0x80, 0xBF, 0x1F,
    0x00, 0x41, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x9C, 0x0E, 0x8F, 0x28, 0x40, 0x96, 0xB9, 0xA3,
    0xFF,
    // graphics controller
    0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x05, 0x0F,
    0xFF,
    // attribute controller
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
    0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
    0x41, 0x00, 0x0F, 0x00, 0x00,
]);

/// Program every VGA register block from `table`.
///
/// The CRTC write protection is lifted first, and the table's own protect
/// bits are forced off so that programming the CRTC block cannot lock it
/// again halfway through. The caller's table is not modified.
pub fn write_regs<P: PortIo>(ports: &mut P, table: &ModeTable) {
    ports.write(MISC_WRITE, table.misc());

    for (index, &value) in (0u8..).zip(table.sequencer()) {
        ports.write_indexed(SEQ_INDEX, SEQ_DATA, index, value);
    }

    ports.write(CRTC_INDEX, CRTC_H_BLANK_END);
    let value = ports.read(CRTC_DATA);
    ports.write(CRTC_DATA, value | CRTC_UNLOCK_BIT);
    ports.write(CRTC_INDEX, CRTC_V_RETRACE_END);
    let value = ports.read(CRTC_DATA);
    ports.write(CRTC_DATA, value & !CRTC_UNLOCK_BIT);

    let mut table = *table;
    let crtc = table.crtc_mut();
    crtc[usize::from(CRTC_H_BLANK_END)] |= CRTC_UNLOCK_BIT;
    crtc[usize::from(CRTC_V_RETRACE_END)] &= !CRTC_UNLOCK_BIT;

    for (index, &value) in (0u8..).zip(table.crtc()) {
        ports.write_indexed(CRTC_INDEX, CRTC_DATA, index, value);
    }

    for (index, &value) in (0u8..).zip(table.graphics()) {
        ports.write_indexed(GC_INDEX, GC_DATA, index, value);
    }

    // reading input status resets the attribute controller flip-flop to
    // index mode
    for (index, &value) in (0u8..).zip(table.attribute()) {
        let _ = ports.read(INPUT_STATUS);
        ports.write(AC_INDEX, index);
        ports.write(AC_WRITE, value);
    }

    let _ = ports.read(INPUT_STATUS);
    ports.write(AC_INDEX, AC_ENABLE_VIDEO);
}
