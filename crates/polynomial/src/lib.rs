// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Secret Reconstruction
//!
//! Recovers the constant term of a degree `k - 1` polynomial from `k` of its
//! sample points, the reconstruction half of a Shamir style secret sharing scheme.
//!
//! ## Features
//!
//! - Decoding of share values written in any base between 2 and 36.
//! - Exact Gaussian elimination with partial pivoting over `BigRational`.
//! - Swappable share selection policies.
//!
//! All arithmetic uses `num-bigint`, so secrets of any magnitude are recovered
//! without rounding.

pub mod decoder;
pub mod errors;
pub mod point;
pub mod polynomial;
pub mod reconstructor;
pub mod solver;

pub use decoder::{decode, MAX_BASE, MIN_BASE};
pub use errors::ReconstructionError;
pub use point::Point;
pub use polynomial::Polynomial;
pub use reconstructor::{reconstruct, FirstK, Reconstructor, SelectionStrategy, SortedByX};
pub use solver::{solve, solve_coefficients, solve_polynomial};
