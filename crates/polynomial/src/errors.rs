//! Error types for decoding and reconstruction.

use num_rational::BigRational;
use thiserror::Error;

/// Errors that can occur while decoding share values or reconstructing a secret.
///
/// Every variant is terminal for the reconstruction that produced it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReconstructionError {
    /// A character is not a digit of the stated base
    #[error("Invalid digit '{character}' at position {position} for base {base}")]
    InvalidDigit {
        character: char,
        position: usize,
        base: u32,
    },

    /// The base lies outside of [2, 36]
    #[error("Unsupported base {0}: expected a base between 2 and 36")]
    InvalidBase(u32),

    /// The threshold must be at least one share
    #[error("Threshold k must be at least 1")]
    ZeroThreshold,

    /// Fewer points than the threshold requires
    #[error("Insufficient points: {required} required but only {available} available")]
    InsufficientPoints { required: usize, available: usize },

    /// The solver was handed a number of points that does not match the degree
    #[error("Point count mismatch: a degree {degree} system needs {expected} points, got {actual}")]
    PointCountMismatch {
        degree: usize,
        expected: usize,
        actual: usize,
    },

    /// No non-zero pivot exists for a column after partial pivoting
    #[error("Singular system: no non-zero pivot in column {column} (are the x values distinct?)")]
    SingularSystem { column: usize },

    /// A recovered coefficient is not an integer
    #[error("Inexact division: coefficient {index} evaluates to {value}, which is not an integer")]
    InexactDivision { index: usize, value: BigRational },
}
