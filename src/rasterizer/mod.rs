pub mod triangles;

pub use self::triangles::Triangles;

/// Defines which triangles a [`Triangles`] rasterizer discards before shading.
///
/// Winding is judged in framebuffer space with +y pointing up, so counter-clockwise triangles are front faces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CullMode {
    /// Rasterize every triangle regardless of winding.
    None,
    /// Discard triangles whose vertices appear clockwise.
    Back,
    /// Discard triangles whose vertices appear counter-clockwise.
    Front,
}

impl CullMode {
    /// Determine whether a triangle with the given signed area should be discarded.
    #[inline]
    pub fn culls(&self, signed_area: f32) -> bool {
        match self {
            CullMode::None => false,
            CullMode::Back => signed_area < 0.0,
            CullMode::Front => signed_area > 0.0,
        }
    }
}

impl Default for CullMode {
    fn default() -> Self {
        CullMode::None
    }
}
