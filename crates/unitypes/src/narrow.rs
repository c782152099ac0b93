//! Narrowing from the canonical `f64` to a fixed-width primitive.

/// A primitive that a canonical `f64` can be narrowed into.
///
/// Integer targets truncate toward zero and saturate at their bounds, with NaN
/// mapping to zero. `f32` rounds to the nearest representable value.
pub trait Narrow: Copy {
    fn narrow(canonical: f64) -> Self;
}

macro_rules! narrow_with_cast {
    ($($ty:ty),*) => {
        $(
            impl Narrow for $ty {
                #[inline]
                fn narrow(canonical: f64) -> Self {
                    canonical as $ty
                }
            }
        )*
    };
}

narrow_with_cast!(i8, i16, i32, i64, f32);

impl Narrow for f64 {
    #[inline]
    fn narrow(canonical: f64) -> Self {
        canonical
    }
}
