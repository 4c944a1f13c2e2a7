use crate::{
    math::WeightedSum,
    rasterizer::{CullMode, Triangles},
    target::Target,
};

/// Represents the high-level structure of a rendering pipeline.
///
/// This governs the following things:
///
/// - Vertex position and data calculation (computed by [`Pipeline::vertex`])
/// - Determining whether each triangle faces away from the viewer, and optionally skipping it
/// - Rasterization (performed internally by [`Triangles`])
/// - Fragment output calculation (computed by [`Pipeline::fragment`])
///
/// Conventionally, uniform data is stored as state within the pipeline itself.
pub trait Pipeline: Sized {
    /// The type of the vertex shader input data.
    type Vertex;

    /// The type of the data that gets passed on from the vertex shader to the fragment shader.
    type VertexData: Clone + WeightedSum;

    /// The type of emitted pixels.
    type Pixel: Clone;

    /// Returns the [`CullMode`] of this pipeline.
    #[inline]
    fn cull_mode(&self) -> CullMode {
        CullMode::default()
    }

    /// Transforms a [`Pipeline::Vertex`] into homogeneous clip coordinates for the vertex and a
    /// [`Pipeline::VertexData`] to be interpolated and passed to the fragment shader.
    fn vertex(&self, vertex: &Self::Vertex) -> ([f32; 4], Self::VertexData);

    /// Transforms an interpolated [`Pipeline::VertexData`] into a pixel to be written to the target.
    fn fragment(&self, data: Self::VertexData) -> Self::Pixel;

    /// Render a list of triangles to the given pixel target.
    ///
    /// **Do not implement this method**
    fn render<T: Target<Texel = Self::Pixel>>(&self, vertices: &[Self::Vertex], target: &mut T) {
        Triangles::draw(self, vertices, target)
    }
}
