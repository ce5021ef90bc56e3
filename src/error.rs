use thiserror::Error;

/// Errors reported by the checked variants of the geometric operations.
///
/// The default operations never fail: they fall back to documented behaviours instead (for
/// example normalizing a zero vector leaves it unchanged).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("division by a zero scalar")]
    DivisionByZero,

    #[error("zero-length vector has no direction")]
    DegenerateVector,
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
