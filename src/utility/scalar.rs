use num::traits::AsPrimitive;
use num::Num;
use std::fmt::{Debug, Display};

/// A primitive numeric type usable as the component of a [`Vector`](crate::geometry::Vector),
/// [`Point`](crate::geometry::Point) or [`Rect`](crate::geometry::Rect).
///
/// Implemented for every primitive integer and floating point type. Transcendental operations
/// (square roots, trigonometry, angle conversions) and comparisons between different scalar
/// types are carried out in double precision, reached through [`AsPrimitive<f64>`]. Results are
/// brought back to the scalar type with the same semantics of an `as` cast: floats are truncated
/// towards zero and saturated when converted to integers.
pub trait Scalar: Num + AsPrimitive<f64> + PartialOrd + Debug + Display {
    /// Smallest meaningful difference between two values of this type.
    ///
    /// This is the machine epsilon for floating point types and zero for integers.
    const EPSILON: Self;

    /// Converts a double precision float to this type, as an `as` cast would do.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty => $epsilon:expr),* $(,)?) => {
        $(
            impl Scalar for $t {
                const EPSILON: Self = $epsilon;

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_scalar!(
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    isize => 0,
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    usize => 0,
    f32 => f32::EPSILON,
    f64 => f64::EPSILON,
);
