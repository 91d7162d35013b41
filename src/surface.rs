use crate::{Color, Error, Rect};

/// Something the player can be drawn onto.
pub trait Surface {
    /// Fill an axis-aligned rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// A software [`Surface`] over an RGBA8 pixel buffer.
///
/// The buffer layout matches [`pixels::Pixels::frame_mut`]: rows top to bottom, four bytes per
/// pixel.
///
/// [`pixels::Pixels::frame_mut`]: https://docs.rs/pixels/latest/pixels/struct.Pixels.html#method.frame_mut
#[derive(Debug)]
pub struct Frame<'buf> {
    buffer: &'buf mut [u8],
    width: u32,
    height: u32,
}

impl<'buf> Frame<'buf> {
    /// Wrap a pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] when `buffer` is not exactly `width * height * 4` bytes long.
    /// When that size does not fit in a `usize`, `expected` is reported as `usize::MAX`.
    pub fn new(buffer: &'buf mut [u8], width: u32, height: u32) -> Result<Frame<'buf>, Error> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4));
        if expected != Some(buffer.len()) {
            return Err(Error::BufferSize {
                expected: expected.unwrap_or(usize::MAX),
                actual: buffer.len(),
            });
        }

        Ok(Frame {
            buffer,
            width,
            height,
        })
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the entire frame with one color.
    pub fn clear(&mut self, color: Color) {
        let rgba = color.as_rgba();
        for pixel in self.buffer.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    /// Read back a single pixel. Returns `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let i = (x as usize + y as usize * self.width as usize) * 4;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.buffer[i..i + 4]);

        Some(rgba)
    }

    /// Round a span to whole pixels and clip it to `0..max`.
    fn clip(start: f32, len: f32, max: u32) -> Option<(usize, usize)> {
        if !start.is_finite() || !len.is_finite() {
            return None;
        }

        let lo = start.round().max(0.0);
        let hi = (start + len).round().min(max as f32);

        if lo < hi {
            Some((lo as usize, hi as usize))
        } else {
            None
        }
    }
}

impl Surface for Frame<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (Some((left, right)), Some((top, bottom))) = (
            Self::clip(rect.x, rect.width, self.width),
            Self::clip(rect.y, rect.height, self.height),
        ) else {
            return;
        };

        let rgba = color.as_rgba();
        let stride = self.width as usize * 4;
        for y in top..bottom {
            let row = &mut self.buffer[y * stride + left * 4..y * stride + right * 4];
            for pixel in row.chunks_exact_mut(4) {
                pixel.copy_from_slice(&rgba);
            }
        }
    }
}
