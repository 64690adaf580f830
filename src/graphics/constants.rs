// src/graphics/constants.rs

//! Constants for mode 13h (320x200, 256 colors)

/// Graphics front buffer physical memory address
pub const FRONT_BUFFER_ADDR: usize = 0xA0000;

/// Surface dimensions in pixels
pub const GWIDTH: u32 = 320;
pub const GHEIGHT: u32 = 200;

/// Visible pixels; one palette index byte each
pub const PIXEL_COUNT: usize = (GWIDTH * GHEIGHT) as usize;

/// Back buffer length. Pixel writes accept `x == GWIDTH` and
/// `y == GHEIGHT`; the extra `GWIDTH + 1` bytes hold those off-surface
/// writes so they stay inside owned memory. Only the first
/// [`PIXEL_COUNT`] bytes are ever flipped.
pub const BACK_BUFFER_LEN: usize = PIXEL_COUNT + GWIDTH as usize + 1;
