//! The one scene this crate draws: a single flat-shaded triangle on a blue-grey background.

use crate::{context::SoftContext, math::Quantize, pipeline::Pipeline};
use vek::{Rgb, Vec3};

/// Default framebuffer size.
pub const SCREEN_SIZE: [usize; 2] = [512, 512];

pub const CLEAR_COLOR: Rgb<f32> = Rgb { r: 0.3, g: 0.4, b: 0.5 };

pub const TRIANGLE_COLOR: Rgb<f32> = Rgb { r: 0.9, g: 0.8, b: 0.7 };

/// Triangle vertices in normalized device coordinates: bottom left, bottom right, top middle.
pub const TRIANGLE: [Vec3<f32>; 3] = [
    Vec3 { x: -0.8, y: -0.8, z: 0.0 },
    Vec3 { x: 0.8, y: -0.8, z: 0.0 },
    Vec3 { x: 0.0, y: 0.8, z: 0.0 },
];

/// Passes positions through untouched and paints every fragment the same colour.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Flat {
    pub color: Rgb<f32>,
}

impl Default for Flat {
    fn default() -> Self {
        Self { color: TRIANGLE_COLOR }
    }
}

impl Pipeline for Flat {
    type Vertex = Vec3<f32>;
    type VertexData = ();
    type Pixel = Rgb<u8>;

    #[inline(always)]
    fn vertex(&self, pos: &Vec3<f32>) -> ([f32; 4], ()) {
        ([pos.x, pos.y, pos.z, 1.0], ())
    }

    #[inline(always)]
    fn fragment(&self, _: ()) -> Rgb<u8> {
        self.color.quantize()
    }
}

/// A context of the default size with the scene's clear colour.
pub fn context() -> SoftContext {
    SoftContext::new(SCREEN_SIZE).with_clear_color(CLEAR_COLOR)
}

/// Draw one frame of the scene.
pub fn render(ctx: &mut SoftContext) {
    ctx.clear();
    ctx.draw(&Flat::default(), &TRIANGLE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Target;

    #[test]
    fn triangle_sits_on_the_background() {
        let mut ctx = context();
        render(&mut ctx);

        let background = CLEAR_COLOR.quantize();
        let triangle = TRIANGLE_COLOR.quantize();
        let color = ctx.color();

        // Corners are background, the middle is covered
        assert_eq!(color.read(0, 0), background);
        assert_eq!(color.read(511, 511), background);
        assert_eq!(color.read(256, 256), triangle);

        // The base is near the bottom of the buffer, the apex near the top
        assert_eq!(color.read(256, 55), triangle);
        assert_eq!(color.read(256, 45), background);
        assert_eq!(color.read(256, 455), triangle);
        assert_eq!(color.read(256, 470), background);
    }
}
