// src/graphics/canvas.rs

//! Software back buffer for mode 13h.

use super::constants::{BACK_BUFFER_LEN, GHEIGHT, GWIDTH, PIXEL_COUNT};
use super::palette::{quantize, RgbColor};
use crate::errors::GraphicsError;

const TAIL_LEN: usize = BACK_BUFFER_LEN - PIXEL_COUNT;

/// Back buffer of palette indices; the only surface drawing mutates.
///
/// # Boundary
///
/// A coordinate is rejected only when it is strictly greater than the
/// surface dimension, so `x == GWIDTH` and `y == GHEIGHT` are accepted.
/// `x == GWIDTH` lands on column 0 of the next row; `y == GHEIGHT` lands in
/// the slack tail that is never flipped.
#[derive(Clone)]
pub struct Canvas {
    visible: [u8; PIXEL_COUNT],
    tail: [u8; TAIL_LEN],
}

impl Canvas {
    /// All-zero (black) back buffer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible: [0; PIXEL_COUNT],
            tail: [0; TAIL_LEN],
        }
    }

    #[inline]
    const fn offset(x: u32, y: u32) -> usize {
        y as usize * GWIDTH as usize + x as usize
    }

    fn slot_mut(&mut self, offset: usize) -> Option<&mut u8> {
        match offset.checked_sub(PIXEL_COUNT) {
            None => self.visible.get_mut(offset),
            Some(rest) => self.tail.get_mut(rest),
        }
    }

    fn slot(&self, offset: usize) -> Option<u8> {
        match offset.checked_sub(PIXEL_COUNT) {
            None => self.visible.get(offset).copied(),
            Some(rest) => self.tail.get(rest).copied(),
        }
    }

    /// Store the quantized `color` at (`x`, `y`).
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::OutOfBounds`] if `x > GWIDTH` or
    /// `y > GHEIGHT`; nothing is written.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: RgbColor) -> Result<(), GraphicsError> {
        if x > GWIDTH || y > GHEIGHT {
            return Err(GraphicsError::OutOfBounds);
        }
        let slot = self
            .slot_mut(Self::offset(x, y))
            .ok_or(GraphicsError::OutOfBounds)?;
        *slot = quantize(color);
        Ok(())
    }

    /// Fill the half-open box `[x, x + width) × [y, y + height)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphicsError::OutOfBounds`] before drawing anything if the
    /// far edge passes the surface (`x + width > GWIDTH` or
    /// `y + height > GHEIGHT`, overflow included).
    pub fn fill_rect(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        color: RgbColor,
    ) -> Result<(), GraphicsError> {
        let x_end = x.checked_add(width).ok_or(GraphicsError::OutOfBounds)?;
        let y_end = y.checked_add(height).ok_or(GraphicsError::OutOfBounds)?;
        if x_end > GWIDTH || y_end > GHEIGHT {
            return Err(GraphicsError::OutOfBounds);
        }

        for py in y..y_end {
            for px in x..x_end {
                // cannot fail after the extent check above
                self.put_pixel(px, py, color)?;
            }
        }
        Ok(())
    }

    /// Fill the whole visible surface. The slack tail is left as is.
    pub fn clear(&mut self, color: RgbColor) {
        self.visible.fill(quantize(color));
    }

    /// Palette index stored for (`x`, `y`), if the coordinate is accepted by
    /// [`put_pixel`](Self::put_pixel).
    pub fn index_at(&self, x: u32, y: u32) -> Option<u8> {
        if x > GWIDTH || y > GHEIGHT {
            return None;
        }
        self.slot(Self::offset(x, y))
    }

    /// The bytes that a flip copies to the front buffer
    pub fn visible(&self) -> &[u8; PIXEL_COUNT] {
        &self.visible
    }

    /// Off-surface bytes written through the accepted boundary coordinates
    pub fn tail(&self) -> &[u8] {
        &self.tail
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &GWIDTH)
            .field("height", &GHEIGHT)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_fills_visible_surface_only() {
        let mut canvas = Canvas::new();
        canvas.put_pixel(0, GHEIGHT, RgbColor::white()).unwrap();

        canvas.clear(RgbColor::new(0, 0, 255));

        assert!(canvas.visible().iter().all(|&b| b == 0b001_001));
        assert_eq!(canvas.index_at(GWIDTH - 1, GHEIGHT - 1), Some(0b001_001));
        assert_eq!(canvas.tail()[0], 0x3F);
    }

    #[test]
    fn clear_matches_full_surface_rectangle() {
        let color = RgbColor::new(64, 128, 192);
        let mut cleared = Canvas::new();
        let mut filled = Canvas::new();

        cleared.clear(color);
        filled.fill_rect(0, 0, GWIDTH, GHEIGHT, color).unwrap();

        assert_eq!(cleared.visible(), filled.visible());
    }
}
