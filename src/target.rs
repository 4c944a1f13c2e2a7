/// A trait implemented by 2-dimensional surfaces that may be treated as render targets.
///
/// Texel `[0, 0]` is the first stored texel. Whether that is the top or the bottom of the visual image is up to the
/// code that fills the target; the rasterizer in this crate always treats row 0 as the visual bottom.
pub trait Target {
    /// The type of target elements.
    type Texel: Clone;

    /// Get the size of the target in texels, as `[width, height]`.
    fn size(&self) -> [usize; 2];

    /// Read a texel at the given index.
    ///
    /// # Panics
    ///
    /// Implementations are expected to panic when the index is out of bounds.
    fn read(&self, x: usize, y: usize) -> Self::Texel;

    /// Write a texel at the given index.
    ///
    /// Writes outside of the target are silently ignored.
    fn write(&mut self, x: usize, y: usize, texel: Self::Texel);

    /// Clears the entire target with the given texel.
    #[inline]
    fn clear(&mut self, texel: Self::Texel) {
        let [width, height] = self.size();
        for y in 0..height {
            for x in 0..width {
                self.write(x, y, texel.clone());
            }
        }
    }
}
