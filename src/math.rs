use vek::{Rgb, Rgba, Vec2, Vec3, Vec4};

/// A trait used to enable types to be interpolated throughout the rasterization process.
pub trait WeightedSum: Sized {
    /// Linearly scale three items of this type and sum them.
    fn weighted_sum3(a: Self, b: Self, c: Self, wa: f32, wb: f32, wc: f32) -> Self;
}

// Default impls for certain types
macro_rules! impl_weighted_sum_for {
    ($t:ty) => {
        impl WeightedSum for $t {
            #[inline(always)]
            fn weighted_sum3(a: Self, b: Self, c: Self, wa: f32, wb: f32, wc: f32) -> Self {
                a * wa + b * wb + c * wc
            }
        }
    };
}

impl_weighted_sum_for!(f32);
impl_weighted_sum_for!(Vec2<f32>);
impl_weighted_sum_for!(Vec3<f32>);
impl_weighted_sum_for!(Vec4<f32>);
impl_weighted_sum_for!(Rgb<f32>);
impl_weighted_sum_for!(Rgba<f32>);

impl WeightedSum for () {
    #[inline(always)]
    fn weighted_sum3(_: Self, _: Self, _: Self, _: f32, _: f32, _: f32) {}
}

impl<T: WeightedSum, U: WeightedSum> WeightedSum for (T, U) {
    #[inline(always)]
    fn weighted_sum3(a: Self, b: Self, c: Self, wa: f32, wb: f32, wc: f32) -> Self {
        (
            T::weighted_sum3(a.0, b.0, c.0, wa, wb, wc),
            U::weighted_sum3(a.1, b.1, c.1, wa, wb, wc),
        )
    }
}

/// Conversion of normalized colour values into 8-bit channel values.
pub trait Quantize {
    type Output;

    /// Clamp to `[0, 1]`, scale to `[0, 255]` and round to the nearest integer.
    fn quantize(self) -> Self::Output;
}

impl Quantize for f32 {
    type Output = u8;

    #[inline(always)]
    fn quantize(self) -> u8 {
        // NaN falls through `max`/`min` as 0
        (self.max(0.0).min(1.0) * 255.0).round() as u8
    }
}

impl Quantize for Rgb<f32> {
    type Output = Rgb<u8>;

    #[inline(always)]
    fn quantize(self) -> Rgb<u8> {
        Rgb::new(self.r.quantize(), self.g.quantize(), self.b.quantize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_clamps_and_rounds() {
        assert_eq!(0.0f32.quantize(), 0);
        assert_eq!(1.0f32.quantize(), 255);
        assert_eq!((-3.0f32).quantize(), 0);
        assert_eq!(7.5f32.quantize(), 255);
        assert_eq!(0.5f32.quantize(), 128);
        assert_eq!(f32::NAN.quantize(), 0);
        assert_eq!(Rgb::new(0.0, 0.5, 1.0).quantize(), Rgb::new(0, 128, 255));
    }

    #[test]
    fn weighted_sum_of_corners() {
        let v = Vec2::<f32>::weighted_sum3(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(0.0, 8.0),
            0.5,
            0.25,
            0.25,
        );
        assert_eq!(v, Vec2::new(1.0, 2.0));

        let (s, ()) = <(f32, ())>::weighted_sum3((2.0, ()), (4.0, ()), (8.0, ()), 0.5, 0.5, 0.0);
        assert_eq!(s, 3.0);
    }
}
