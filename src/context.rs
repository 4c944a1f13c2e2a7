use crate::{
    buffer::Buffer2d,
    math::Quantize,
    pipeline::Pipeline,
    target::Target,
};
use log::debug;
use vek::Rgb;

/// Number of bytes per pixel returned by [`ReadBack::read_pixels`].
pub const CHANNELS: usize = 3;

/// The order in which a backend stores the rows of its colour buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowOrder {
    /// The first stored row is the visual bottom of the image (OpenGL).
    BottomUp,
    /// The first stored row is the visual top of the image (most image libraries and windowing surfaces).
    TopDown,
}

impl Default for RowOrder {
    fn default() -> Self {
        RowOrder::BottomUp
    }
}

/// A rendering context whose current colour buffer can be read back into host memory.
///
/// This is deliberately narrow: a capture needs the framebuffer size and the RGB contents of a region, nothing else.
pub trait ReadBack {
    /// Get the size of the current framebuffer in pixels, as `[width, height]`.
    fn framebuffer_size(&self) -> [usize; 2];

    /// Read back the `[width, height]` region anchored at the first stored pixel.
    ///
    /// The result holds exactly `width * height * CHANNELS` bytes, RGB, row-major, rows in [`ReadBack::row_order`].
    /// Pixels outside of the framebuffer are unspecified; implementations in this crate return black.
    fn read_pixels(&self, size: [usize; 2]) -> Vec<u8>;

    /// Returns the [`RowOrder`] of the data produced by [`ReadBack::read_pixels`].
    #[inline]
    fn row_order(&self) -> RowOrder {
        RowOrder::default()
    }
}

/// A software rendering context with a single RGB8 colour buffer.
///
/// Rows are stored bottom-up, exactly like an OpenGL default framebuffer, so reading back yields the same layout a GL
/// context would.
#[derive(Clone, Debug)]
pub struct SoftContext {
    color: Buffer2d<Rgb<u8>>,
    clear_color: Rgb<u8>,
}

impl SoftContext {
    /// Create a context with a framebuffer of the given size, cleared to black.
    pub fn new(size: [usize; 2]) -> Self {
        let clear_color = Rgb::new(0, 0, 0);
        Self {
            color: Buffer2d::fill(size, clear_color),
            clear_color,
        }
    }

    /// Set the colour used by [`SoftContext::clear`]. Channels are clamped to `[0, 1]`.
    pub fn with_clear_color(mut self, color: Rgb<f32>) -> Self {
        self.clear_color = color.quantize();
        self
    }

    /// The quantized clear colour.
    pub fn clear_color(&self) -> Rgb<u8> {
        self.clear_color
    }

    /// Fill the colour buffer with the clear colour.
    pub fn clear(&mut self) {
        self.color.clear(self.clear_color);
    }

    /// Draw a list of triangles into the colour buffer.
    pub fn draw<P: Pipeline<Pixel = Rgb<u8>>>(&mut self, pipeline: &P, vertices: &[P::Vertex]) {
        pipeline.render(vertices, &mut self.color);
    }

    /// Replace the framebuffer with one of a new size, filled with the clear colour.
    pub fn resize(&mut self, size: [usize; 2]) {
        if size != self.color.size() {
            debug!("Resizing framebuffer from {:?} to {:?}", self.color.size(), size);
            self.color = Buffer2d::fill(size, self.clear_color);
        }
    }

    /// The colour buffer, bottom row first.
    pub fn color(&self) -> &Buffer2d<Rgb<u8>> {
        &self.color
    }
}

impl ReadBack for SoftContext {
    fn framebuffer_size(&self) -> [usize; 2] {
        self.color.size()
    }

    fn read_pixels(&self, [width, height]: [usize; 2]) -> Vec<u8> {
        let black = Rgb::new(0, 0, 0);
        let mut pixels = Vec::with_capacity(width.saturating_mul(height).saturating_mul(CHANNELS));
        for y in 0..height {
            for x in 0..width {
                let px = self.color.get([x, y]).copied().unwrap_or(black);
                pixels.extend_from_slice(&[px.r, px.g, px.b]);
            }
        }
        debug!("Read back {} bytes for a {}x{} region", pixels.len(), width, height);
        pixels
    }
}

#[cfg(feature = "image")]
impl ReadBack for image::RgbImage {
    fn framebuffer_size(&self) -> [usize; 2] {
        [self.width() as usize, self.height() as usize]
    }

    fn read_pixels(&self, [width, height]: [usize; 2]) -> Vec<u8> {
        let [fb_width, fb_height] = self.framebuffer_size();
        let mut pixels = Vec::with_capacity(width.saturating_mul(height).saturating_mul(CHANNELS));
        for y in 0..height {
            for x in 0..width {
                if x < fb_width && y < fb_height {
                    pixels.extend_from_slice(&self.get_pixel(x as u32, y as u32).0);
                } else {
                    pixels.extend_from_slice(&[0; CHANNELS]);
                }
            }
        }
        pixels
    }

    #[inline]
    fn row_order(&self) -> RowOrder {
        RowOrder::TopDown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_back_is_bottom_up_rgb() {
        let mut ctx = SoftContext::new([2, 2]).with_clear_color(Rgb::new(1.0, 0.0, 0.0));
        ctx.clear();
        ctx.color.write(1, 0, Rgb::new(1, 2, 3));
        ctx.color.write(0, 1, Rgb::new(4, 5, 6));

        assert_eq!(ctx.row_order(), RowOrder::BottomUp);
        assert_eq!(ctx.framebuffer_size(), [2, 2]);
        assert_eq!(
            ctx.read_pixels([2, 2]),
            vec![255, 0, 0, 1, 2, 3, 4, 5, 6, 255, 0, 0]
        );
    }

    #[test]
    fn regions_past_the_framebuffer_read_black() {
        let mut ctx = SoftContext::new([1, 1]).with_clear_color(Rgb::new(1.0, 1.0, 1.0));
        ctx.clear();

        let pixels = ctx.read_pixels([2, 2]);
        assert_eq!(pixels.len(), 2 * 2 * CHANNELS);
        assert_eq!(&pixels[..3], &[255, 255, 255]);
        assert!(pixels[3..].iter().all(|&e| e == 0));

        // Smaller regions are cut from the bottom-left corner
        let mut ctx = SoftContext::new([3, 3]);
        ctx.color.write(0, 0, Rgb::new(9, 9, 9));
        assert_eq!(ctx.read_pixels([1, 1]), vec![9, 9, 9]);
    }

    #[test]
    fn resize_refills_with_clear_color() {
        let mut ctx = SoftContext::new([2, 2]).with_clear_color(Rgb::new(0.0, 0.0, 1.0));
        ctx.resize([3, 1]);
        assert_eq!(ctx.framebuffer_size(), [3, 1]);
        assert!(ctx.color().raw().iter().all(|&px| px == Rgb::new(0, 0, 255)));
    }

    #[cfg(feature = "image")]
    #[test]
    fn image_buffers_read_back_top_down() {
        let img = image::RgbImage::from_fn(2, 2, |x, y| image::Rgb([x as u8, y as u8, 7]));
        assert_eq!(img.row_order(), RowOrder::TopDown);
        assert_eq!(img.framebuffer_size(), [2, 2]);
        assert_eq!(
            img.read_pixels([2, 2]),
            vec![0, 0, 7, 1, 0, 7, 0, 1, 7, 1, 1, 7]
        );
    }
}
