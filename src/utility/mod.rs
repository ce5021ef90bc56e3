mod scalar;
pub use self::scalar::Scalar;
mod inlines;
pub use self::inlines::abs;
pub use self::inlines::abs_diff;
pub use self::inlines::approx_eq;
pub use self::inlines::deg;
pub use self::inlines::float_eq;
pub use self::inlines::pi;
pub use self::inlines::rad;
pub use self::inlines::sqr;

#[cfg(test)]
mod tests;
