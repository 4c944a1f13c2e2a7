use crate::{math::WeightedSum, pipeline::Pipeline, target::Target};
use vek::Vec2;

/// A rasterizer that produces filled triangles from groups of 3 consecutive vertices.
///
/// Framebuffer space follows OpenGL: NDC `(-1, -1)` maps to the bottom-left corner of the target and row 0 of the
/// target is the visual bottom row. A fragment is generated for every texel whose centre lies inside the triangle.
pub struct Triangles;

impl Triangles {
    /// Rasterize `vertices` into `target` using the given pipeline.
    ///
    /// Trailing vertices that do not form a full triangle are ignored, as are triangles with any vertex at or behind
    /// the eye (`w <= 0`).
    pub fn draw<P: Pipeline, T: Target<Texel = P::Pixel>>(pipeline: &P, vertices: &[P::Vertex], target: &mut T) {
        let size = Vec2::<usize>::from(target.size());
        if size.x == 0 || size.y == 0 {
            return;
        }
        let half_scr = size.map(|e| e as f32 * 0.5);
        let cull_mode = pipeline.cull_mode();

        vertices.chunks_exact(3).for_each(|verts| {
            // Compute vertex shader outputs
            let (a_hom, a_data) = pipeline.vertex(&verts[0]);
            let (b_hom, b_data) = pipeline.vertex(&verts[1]);
            let (c_hom, c_data) = pipeline.vertex(&verts[2]);

            if a_hom[3] <= 0.0 || b_hom[3] <= 0.0 || c_hom[3] <= 0.0 {
                return;
            }

            // Convert homogenous coordinates to framebuffer coordinates
            let to_scr = |hom: [f32; 4]| half_scr * (Vec2::new(hom[0], hom[1]) / hom[3] + 1.0);
            let a = to_scr(a_hom);
            let b = to_scr(b_hom);
            let c = to_scr(c_hom);

            let area = edge(a, b, c);
            if area == 0.0 || !area.is_finite() || cull_mode.culls(area) {
                return;
            }

            let min = a
                .map2(b, f32::min)
                .map2(c, f32::min)
                .map(|e| e.floor().max(0.0) as usize);
            let max = a
                .map2(b, f32::max)
                .map2(c, f32::max)
                .map2(size, |e, sz| (e.ceil().max(0.0) as usize).min(sz));

            for y in min.y..max.y {
                for x in min.x..max.x {
                    // Where is the centre of the fragment?
                    let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

                    // Dividing by the signed area keeps the weights positive inside either winding
                    let wa = edge(b, c, p) / area;
                    let wb = edge(c, a, p) / area;
                    let wc = 1.0 - wa - wb;

                    if wa < 0.0 || wb < 0.0 || wc < 0.0 {
                        continue;
                    }

                    let data = P::VertexData::weighted_sum3(
                        a_data.clone(),
                        b_data.clone(),
                        c_data.clone(),
                        wa,
                        wb,
                        wc,
                    );
                    target.write(x, y, pipeline.fragment(data));
                }
            }
        });
    }
}

/// Twice the signed area of the triangle `(a, b, p)`; positive when counter-clockwise.
#[inline(always)]
fn edge(a: Vec2<f32>, b: Vec2<f32>, p: Vec2<f32>) -> f32 {
    let ab = b - a;
    let ap = p - a;
    ab.x * ap.y - ab.y * ap.x
}
