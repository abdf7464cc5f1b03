//! Borrowed multi-channel 8-bit pixel buffer supplied by the drawing surface.
use crate::error::PrepError;

#[derive(Clone, Debug)]
pub struct PixelBuffer<'a> {
    pub w: usize,
    pub h: usize,
    /// Interleaved channels per pixel (3 = RGB, 4 = RGBA; alpha is ignored)
    pub channels: usize,
    /// Bytes between consecutive rows
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Tightly packed view (`stride == w * channels`).
    pub fn packed(w: usize, h: usize, channels: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            channels,
            stride: w.saturating_mul(channels),
            data,
        }
    }

    /// Check channel count and that `data` covers every declared row.
    pub fn validate(&self) -> Result<(), PrepError> {
        if self.channels < 3 {
            return Err(PrepError::UnsupportedChannels(self.channels));
        }
        let actual = self.data.len();
        let (row_bytes, needed) = self.required_len().ok_or(PrepError::BufferTooShort {
            needed: usize::MAX,
            actual,
        })?;
        if self.stride < row_bytes || actual < needed {
            return Err(PrepError::BufferTooShort { needed, actual });
        }
        Ok(())
    }

    /// Bytes per row and bytes spanned by the declared geometry, `None` on overflow.
    fn required_len(&self) -> Option<(usize, usize)> {
        let row_bytes = self.w.checked_mul(self.channels)?;
        let needed = match self.h.checked_sub(1) {
            None => 0,
            Some(last) => last.checked_mul(self.stride)?.checked_add(row_bytes)?,
        };
        Some((row_bytes, needed))
    }

    /// Raw interleaved bytes of row `y` (`w * channels` long, padding excluded).
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * self.channels]
    }

    /// Rows top to bottom; call [`validate`](Self::validate) first.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.h).map(move |y| self.row(y))
    }

    /// Colour channels (alpha excluded) of the pixel at (x, y).
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + x * self.channels;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}
