use crate::utility::Scalar;
use num::traits::AsPrimitive;
use std::ops::Mul;

/// Returns the constant π in the requested scalar type.
///
/// Integer types receive the truncated value.
/// # Examples
/// ```
/// use math2d::utility::pi;
///
/// assert_eq!(pi::<f64>(), std::f64::consts::PI);
/// assert_eq!(pi::<i32>(), 3);
/// ```
#[inline]
pub fn pi<T: Scalar>() -> T {
    T::from_f64(std::f64::consts::PI)
}

/// Returns the absolute value of `value`.
///
/// Unsigned values are returned unchanged.
/// # Examples
/// ```
/// use math2d::utility::abs;
///
/// assert_eq!(abs(-3), 3);
/// assert_eq!(abs(2.5), 2.5);
/// assert_eq!(abs(7_u8), 7);
/// ```
#[inline]
pub fn abs<T: Scalar>(value: T) -> T {
    if value < T::zero() {
        T::zero() - value
    } else {
        value
    }
}

/// Returns the absolute difference `|a - b|`.
///
/// Unlike `abs(a - b)` this never underflows for unsigned types.
/// # Examples
/// ```
/// use math2d::utility::abs_diff;
///
/// assert_eq!(abs_diff(2_u32, 10_u32), 8);
/// assert_eq!(abs_diff(-1.5, 1.5), 3.0);
/// ```
#[inline]
pub fn abs_diff<T: Scalar>(a: T, b: T) -> T {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// Returns the square of `value`.
/// # Examples
/// ```
/// use math2d::utility::sqr;
///
/// assert_eq!(sqr(-4), 16);
/// ```
#[inline]
pub fn sqr<T: Mul<Output = T> + Copy>(value: T) -> T {
    value * value
}

/// Converts an angle from degrees to radians.
///
/// The input can be any scalar type, the output is produced in `T`.
/// # Examples
/// ```
/// use math2d::utility::rad;
///
/// let r: f64 = rad(180);
/// assert_eq!(r, std::f64::consts::PI);
/// ```
#[inline]
pub fn rad<T: Scalar, U: Scalar>(degrees: U) -> T {
    let degrees: f64 = degrees.as_();
    T::from_f64(degrees / 180.0 * std::f64::consts::PI)
}

/// Converts an angle from radians to degrees.
///
/// The input can be any scalar type, the output is produced in `T`.
/// # Examples
/// ```
/// use math2d::utility::deg;
///
/// let d: f32 = deg(std::f64::consts::FRAC_PI_2);
/// assert_eq!(d, 90.0);
/// ```
#[inline]
pub fn deg<T: Scalar, U: Scalar>(radians: U) -> T {
    let radians: f64 = radians.as_();
    T::from_f64(radians / std::f64::consts::PI * 180.0)
}

/// Performs an equality comparison between two scalars with a given margin of error.
///
/// This error is represented by `epsilon` and is the maximum allowed difference between the two
/// numbers to still be counted as equality. A negative value will result in every number being
/// different from any other.
/// # Examples
/// ```
/// use math2d::utility::float_eq;
///
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert!(float_eq(0.1 + 0.2, 0.3, 1E-5));
/// ```
#[inline]
pub fn float_eq<T: Scalar>(a: T, b: T, epsilon: T) -> bool {
    abs_diff(a, b) <= epsilon
}

/// Compares two scalars of possibly different types.
///
/// Both values are widened to double precision and considered equal if they differ by at most the
/// larger of the two types' epsilons. The comparison is symmetric, and a negative integer is never
/// equal to an unsigned one.
/// # Examples
/// ```
/// use math2d::utility::approx_eq;
///
/// assert!(approx_eq(2_u8, 2.0_f32));
/// assert!(!approx_eq(1_i32, 1.5_f32));
/// assert!(!approx_eq(255_u8, -1_i32));
/// ```
#[inline]
pub fn approx_eq<T: Scalar, U: Scalar>(a: T, b: U) -> bool {
    let epsilon_a: f64 = T::EPSILON.as_();
    let epsilon_b: f64 = U::EPSILON.as_();
    let a: f64 = a.as_();
    let b: f64 = b.as_();
    (a - b).abs() <= epsilon_a.max(epsilon_b)
}
