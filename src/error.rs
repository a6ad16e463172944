use thiserror::Error;

pub type Result<T> = std::result::Result<T, KzgError>;

/// Structural failures of the commitment engine and its helpers.
///
/// A proof that simply does not check out is not an error: `verify` answers `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KzgError {
    #[error("polynomial length {got} does not match setup length {expected}")]
    SizeMismatch { expected: usize, got: usize },

    #[error("point is not on polynomial")]
    PointNotOnPolynomial,

    #[error("append-only update changes coefficient {index}, only the last one may change")]
    InvalidAppendOnlyUpdate { index: usize },

    #[error("interpolation points are singular (duplicate x coordinates?)")]
    SingularInterpolation,

    #[error("value has no inverse modulo the field order")]
    NotInvertible,

    #[error("input of {len} bytes exceeds capacity of {capacity} bytes")]
    InputTooLarge { len: usize, capacity: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
