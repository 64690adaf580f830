// src/graphics/front.rs

//! Front buffer backends: the adapter's pixel memory, or plain memory for
//! tests.

use super::constants::{FRONT_BUFFER_ADDR, PIXEL_COUNT};
use core::ptr::NonNull;

/// Destination of a flip. Write-only from the driver's point of view.
pub trait FrontBuffer {
    /// Copy a full frame of palette indices to the visible surface.
    fn present(&mut self, frame: &[u8; PIXEL_COUNT]);
}

/// Concrete backend for the mode 13h pixel memory at 0xA0000.
#[derive(Debug, Clone, Copy)]
pub struct Mode13hBuffer {
    ptr: NonNull<u8>,
}

impl Mode13hBuffer {
    /// Bind to the adapter's graphics memory.
    ///
    /// # Safety
    ///
    /// `0xA0000..0xAFA00` must be identity-mapped and owned by this backend.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self {
            // SAFETY: 0xA0000 is the canonical VGA graphics window.
            ptr: unsafe { NonNull::new_unchecked(FRONT_BUFFER_ADDR as *mut u8) },
        }
    }
}

// SAFETY: the backend is the sole writer of the graphics window (see `new`).
unsafe impl Send for Mode13hBuffer {}

impl FrontBuffer for Mode13hBuffer {
    fn present(&mut self, frame: &[u8; PIXEL_COUNT]) {
        // SAFETY: the window is PIXEL_COUNT bytes long and never aliases the
        // software back buffer.
        unsafe {
            core::ptr::copy_nonoverlapping(frame.as_ptr(), self.ptr.as_ptr(), PIXEL_COUNT);
        }
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
    }
}

/// In-memory front buffer that also counts presented frames.
#[derive(Clone)]
pub struct MemoryFrontBuffer {
    pixels: [u8; PIXEL_COUNT],
    frames: usize,
}

impl MemoryFrontBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pixels: [0; PIXEL_COUNT],
            frames: 0,
        }
    }

    pub fn pixels(&self) -> &[u8; PIXEL_COUNT] {
        &self.pixels
    }

    /// Number of completed flips
    pub const fn frames(&self) -> usize {
        self.frames
    }
}

impl Default for MemoryFrontBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for MemoryFrontBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryFrontBuffer")
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

impl FrontBuffer for MemoryFrontBuffer {
    fn present(&mut self, frame: &[u8; PIXEL_COUNT]) {
        self.pixels.copy_from_slice(frame);
        self.frames += 1;
    }
}
