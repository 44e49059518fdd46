//! Pixel buffer shared between strip instances
//!
//! One physical strip is backed by one flat byte buffer. Several logical
//! strips may address disjoint (or overlapping) windows of the same buffer,
//! so access goes through a `critical-section` mutex, making it safe to
//! keep the buffer in a `static` and touch it from interrupts.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::pixels::StripPixels;
use crate::window::StripWindow;

/// Bytes used per LED (green, red, blue)
pub const BYTES_PER_LED: usize = 3;

/// Buffer size in bytes for `pixels` LEDs
pub const fn buffer_size(pixels: usize) -> usize {
    pixels * BYTES_PER_LED
}

/// Flat pixel storage with a pixel count fixed at creation
#[derive(Debug, Clone)]
pub struct PixelBuffer<const MAX_BYTES: usize> {
    bytes: [u8; MAX_BYTES],
    pixel_count: usize,
}

impl<const MAX_BYTES: usize> PixelBuffer<MAX_BYTES> {
    /// Create a zeroed buffer for `total_pixels` LEDs
    ///
    /// The pixel count is clamped to what fits into `MAX_BYTES`.
    pub const fn new(total_pixels: usize) -> Self {
        let capacity = MAX_BYTES / BYTES_PER_LED;
        Self {
            bytes: [0; MAX_BYTES],
            pixel_count: if total_pixels < capacity {
                total_pixels
            } else {
                capacity
            },
        }
    }

    /// Number of LEDs the buffer holds
    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Bytes of all LEDs in wire order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..buffer_size(self.pixel_count)]
    }

    /// Pixels of a window, clamped to the buffer
    pub fn window_mut(&mut self, window: StripWindow) -> StripPixels<'_> {
        let window = window.fit(self.pixel_count);
        StripPixels::new(&mut self.bytes[window.byte_range()])
    }
}

/// Pixel buffer that can be shared by several strips
pub struct SharedBuffer<const MAX_BYTES: usize> {
    inner: Mutex<RefCell<PixelBuffer<MAX_BYTES>>>,
}

impl<const MAX_BYTES: usize> SharedBuffer<MAX_BYTES> {
    /// Create a zeroed shared buffer for `total_pixels` LEDs
    pub const fn new(total_pixels: usize) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(PixelBuffer::new(total_pixels))),
        }
    }

    /// Run `f` with exclusive access to the buffer
    pub fn with<R>(&self, f: impl FnOnce(&mut PixelBuffer<MAX_BYTES>) -> R) -> R {
        critical_section::with(|cs| {
            let mut buffer = self.inner.borrow(cs).borrow_mut();
            f(&mut buffer)
        })
    }

    /// Number of LEDs the buffer holds
    pub fn pixel_count(&self) -> usize {
        self.with(|buffer| buffer.pixel_count())
    }

    /// Copy the buffer bytes into `target`, returning the number copied
    pub fn copy_to(&self, target: &mut [u8]) -> usize {
        self.with(|buffer| {
            let bytes = buffer.as_bytes();
            let count = bytes.len().min(target.len());
            target[..count].copy_from_slice(&bytes[..count]);
            count
        })
    }
}
