// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Secret reconstruction from a collection of shares.

use crate::errors::ReconstructionError;
use crate::point::Point;
use crate::polynomial::Polynomial;
use crate::solver;
use num_bigint::BigInt;
use num_rational::BigRational;
use std::borrow::Cow;
use tracing::{debug, enabled, trace, Level};

/// Policy deciding which `k` of the available points feed the solver.
pub trait SelectionStrategy {
    /// Returns exactly `k` points taken from `points`.
    ///
    /// Callers guarantee `1 <= k <= points.len()`.
    fn select<'a>(&self, points: &'a [Point], k: usize) -> Cow<'a, [Point]>;
}

impl<S: SelectionStrategy + ?Sized> SelectionStrategy for Box<S> {
    fn select<'a>(&self, points: &'a [Point], k: usize) -> Cow<'a, [Point]> {
        (**self).select(points, k)
    }
}

/// Uses the first `k` points in the order they were supplied.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstK;

impl SelectionStrategy for FirstK {
    fn select<'a>(&self, points: &'a [Point], k: usize) -> Cow<'a, [Point]> {
        Cow::Borrowed(&points[..k])
    }
}

/// Uses the `k` points with the smallest x values. Ties keep their supplied order.
#[derive(Clone, Copy, Debug, Default)]
pub struct SortedByX;

impl SelectionStrategy for SortedByX {
    fn select<'a>(&self, points: &'a [Point], k: usize) -> Cow<'a, [Point]> {
        let mut sorted = points.to_vec();
        sorted.sort_by_key(Point::x);
        sorted.truncate(k);
        Cow::Owned(sorted)
    }
}

/// Recovers secrets from shares using a [`SelectionStrategy`].
#[derive(Clone, Debug, Default)]
pub struct Reconstructor<S = FirstK> {
    strategy: S,
}

impl Reconstructor<FirstK> {
    pub fn new() -> Self {
        Self { strategy: FirstK }
    }
}

impl<S: SelectionStrategy> Reconstructor<S> {
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    fn choose<'a>(
        &self,
        points: &'a [Point],
        k: usize,
    ) -> Result<Cow<'a, [Point]>, ReconstructionError> {
        if k == 0 {
            return Err(ReconstructionError::ZeroThreshold);
        }
        if points.len() < k {
            return Err(ReconstructionError::InsufficientPoints {
                required: k,
                available: points.len(),
            });
        }

        debug!(available = points.len(), k, "Selecting shares");
        let chosen = self.strategy.select(points, k);
        if enabled!(Level::TRACE) {
            trace!(
                xs = ?chosen.iter().map(Point::x).collect::<Vec<_>>(),
                "Chosen shares"
            );
        }
        Ok(chosen)
    }

    /// Recovers the secret (constant term) from `points` with threshold `k`.
    ///
    /// # Errors
    ///
    /// Returns `ReconstructionError::ZeroThreshold` if `k == 0`.
    /// Returns `ReconstructionError::InsufficientPoints` if fewer than `k` points are supplied.
    /// Any solver error is returned unchanged.
    pub fn reconstruct(&self, points: &[Point], k: usize) -> Result<BigInt, ReconstructionError> {
        let chosen = self.choose(points, k)?;
        let secret = solver::solve(&chosen, k - 1)?;
        debug!(degree = k - 1, "Secret reconstructed");
        Ok(secret)
    }

    /// Recovers the full polynomial from `points` with threshold `k`.
    pub fn reconstruct_polynomial(
        &self,
        points: &[Point],
        k: usize,
    ) -> Result<Polynomial, ReconstructionError> {
        let chosen = self.choose(points, k)?;
        solver::solve_polynomial(&chosen, k - 1)
    }

    /// Recovers every coefficient, highest degree first, as exact rationals.
    pub fn reconstruct_coefficients(
        &self,
        points: &[Point],
        k: usize,
    ) -> Result<Vec<BigRational>, ReconstructionError> {
        let chosen = self.choose(points, k)?;
        solver::solve_coefficients(&chosen, k - 1)
    }
}

/// Recovers the secret from the first `k` of `points`.
pub fn reconstruct(points: &[Point], k: usize) -> Result<BigInt, ReconstructionError> {
    Reconstructor::new().reconstruct(points, k)
}
