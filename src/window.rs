/// Range of pixels a strip controls inside a shared buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StripWindow {
    pub start: usize,
    pub length: usize,
}

impl StripWindow {
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Index one past the last pixel of the window
    pub const fn end(self) -> usize {
        self.start + self.length
    }

    /// Clamp the window into a buffer of `total_pixels`
    pub const fn fit(self, total_pixels: usize) -> Self {
        let start = if self.start < total_pixels {
            self.start
        } else {
            total_pixels
        };
        let room = total_pixels - start;
        let length = if self.length < room {
            self.length
        } else {
            room
        };
        Self { start, length }
    }

    /// Window relative to this one, clamped to stay inside it
    pub const fn sub_window(self, start: usize, length: usize) -> Self {
        let inner = Self::new(start, length).fit(self.length);
        Self {
            start: self.start + inner.start,
            length: inner.length,
        }
    }

    /// Byte range of the window in a buffer of 3-byte pixels
    pub(crate) const fn byte_range(self) -> core::ops::Range<usize> {
        self.start * crate::buffer::BYTES_PER_LED..self.end() * crate::buffer::BYTES_PER_LED
    }
}
