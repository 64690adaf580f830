// src/graphics/palette.rs

//! RGB to palette index quantization.
//!
//! Each 8-bit channel keeps its two most significant bits. The six bits are
//! packed with the high bit of every channel in the low half of the index:
//!
//! ```text
//! bit:     5    4    3    2    1    0
//!        r.lo g.lo b.lo r.hi g.hi b.hi
//! ```

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Create a new RGB color
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// White color
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Palette index for this color
    #[must_use]
    pub const fn to_index(self) -> u8 {
        quantize(self)
    }
}

/// Largest index [`quantize`] can produce
pub const MAX_INDEX: u8 = 0x3F;

/// Map an RGB triple to its 6-bit palette index. Lossy and one-way.
#[must_use]
pub const fn quantize(color: RgbColor) -> u8 {
    let r = color.r / 64;
    let g = color.g / 64;
    let b = color.b / 64;

    let hi = (b >> 1) | ((g >> 1) << 1) | ((r >> 1) << 2);
    let lo = (b & 1) | ((g & 1) << 1) | ((r & 1) << 2);
    hi | (lo << 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes() {
        assert_eq!(quantize(RgbColor::black()), 0);
        assert_eq!(quantize(RgbColor::white()), MAX_INDEX);
    }

    #[test]
    fn channel_bit_layout() {
        // 128 / 64 = 2: only the high bit of the channel
        assert_eq!(quantize(RgbColor::new(0, 0, 128)), 0b000_001);
        assert_eq!(quantize(RgbColor::new(0, 128, 0)), 0b000_010);
        assert_eq!(quantize(RgbColor::new(128, 0, 0)), 0b000_100);
        // 64 / 64 = 1: only the low bit
        assert_eq!(quantize(RgbColor::new(0, 0, 64)), 0b001_000);
        assert_eq!(quantize(RgbColor::new(0, 64, 0)), 0b010_000);
        assert_eq!(quantize(RgbColor::new(64, 0, 0)), 0b100_000);
    }

    #[test]
    fn buckets_are_64_wide() {
        assert_eq!(quantize(RgbColor::new(63, 63, 63)), 0);
        assert_eq!(
            quantize(RgbColor::new(191, 0, 0)),
            quantize(RgbColor::new(128, 0, 0))
        );
        assert_eq!(RgbColor::new(255, 0, 0).to_index(), 0b100_100);
    }

    #[test]
    fn every_color_stays_within_six_bits() {
        for v in (0..=255u8).step_by(17) {
            assert!(quantize(RgbColor::new(v, 255 - v, v / 2)) <= MAX_INDEX);
        }
    }
}
