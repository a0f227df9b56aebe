// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Exact Vandermonde system solver.
//!
//! Gaussian elimination with partial pivoting followed by back-substitution.
//! All arithmetic is carried out over `BigRational`, so every division is
//! exact and intermediate values never lose precision. Only the coefficients
//! that are handed back to the caller are required to be integers.

use crate::errors::ReconstructionError;
use crate::point::Point;
use crate::polynomial::Polynomial;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Augmented `(degree + 1) x (degree + 1)` system built from a set of points.
///
/// Column `j` of row `i` holds `x_i^(degree - j)`, so column 0 belongs to the
/// highest power and the last column to the constant term.
#[derive(Clone, Debug)]
struct VandermondeSystem {
    matrix: Vec<Vec<BigRational>>,
    rhs: Vec<BigRational>,
}

impl VandermondeSystem {
    fn build(points: &[Point], degree: usize) -> Self {
        let size = degree + 1;
        let mut matrix = Vec::with_capacity(size);
        let mut rhs = Vec::with_capacity(size);

        for point in points {
            let x = BigInt::from(point.x());
            let mut row = vec![BigRational::zero(); size];
            let mut power = BigInt::one();
            for column in (0..size).rev() {
                row[column] = BigRational::from_integer(power.clone());
                power *= &x;
            }
            matrix.push(row);
            rhs.push(BigRational::from_integer(point.y().clone()));
        }

        Self { matrix, rhs }
    }

    fn size(&self) -> usize {
        self.rhs.len()
    }

    /// Picks the first row at or below `column` with the largest absolute entry in `column`.
    fn pivot_row(&self, column: usize) -> usize {
        let mut best = column;
        for row in column + 1..self.size() {
            if self.matrix[row][column].abs() > self.matrix[best][column].abs() {
                best = row;
            }
        }
        best
    }

    /// Reduces the system to upper triangular form.
    fn forward_eliminate(&mut self) -> Result<(), ReconstructionError> {
        let size = self.size();

        for pivot in 0..size {
            let best = self.pivot_row(pivot);
            if self.matrix[best][pivot].is_zero() {
                return Err(ReconstructionError::SingularSystem { column: pivot });
            }
            self.matrix.swap(pivot, best);
            self.rhs.swap(pivot, best);

            for row in pivot + 1..size {
                if self.matrix[row][pivot].is_zero() {
                    continue;
                }
                let factor = &self.matrix[row][pivot] / &self.matrix[pivot][pivot];
                for column in pivot..size {
                    let delta = &factor * &self.matrix[pivot][column];
                    self.matrix[row][column] -= delta;
                }
                let delta = &factor * &self.rhs[pivot];
                self.rhs[row] -= delta;
            }
        }

        Ok(())
    }

    /// Solves the upper triangular system. Pivots are non-zero after `forward_eliminate`.
    fn back_substitute(&self) -> Vec<BigRational> {
        let size = self.size();
        let mut coefficients = vec![BigRational::zero(); size];

        for row in (0..size).rev() {
            let mut sum = self.rhs[row].clone();
            for column in row + 1..size {
                sum -= &self.matrix[row][column] * &coefficients[column];
            }
            coefficients[row] = sum / &self.matrix[row][row];
        }

        coefficients
    }
}

/// Solves for every coefficient, highest degree first, as exact rationals.
///
/// No coefficient is required to be an integer.
pub fn solve_coefficients(
    points: &[Point],
    degree: usize,
) -> Result<Vec<BigRational>, ReconstructionError> {
    let expected = degree + 1;
    if points.len() != expected {
        return Err(ReconstructionError::PointCountMismatch {
            degree,
            expected,
            actual: points.len(),
        });
    }

    let mut system = VandermondeSystem::build(points, degree);
    system.forward_eliminate()?;
    Ok(system.back_substitute())
}

fn into_integer(index: usize, value: BigRational) -> Result<BigInt, ReconstructionError> {
    if value.is_integer() {
        Ok(value.to_integer())
    } else {
        Err(ReconstructionError::InexactDivision { index, value })
    }
}

/// Recovers the constant term of the degree `degree` polynomial through `points`.
///
/// # Arguments
///
/// * `points` - Exactly `degree + 1` points with pairwise distinct x values.
/// * `degree` - Degree of the hidden polynomial (`k - 1`).
///
/// # Errors
///
/// Returns `ReconstructionError::PointCountMismatch` if `points.len() != degree + 1`.
/// Returns `ReconstructionError::SingularSystem` if no non-zero pivot exists for a column.
/// Returns `ReconstructionError::InexactDivision` if the constant term is not an integer.
pub fn solve(points: &[Point], degree: usize) -> Result<BigInt, ReconstructionError> {
    let mut coefficients = solve_coefficients(points, degree)?;
    let constant = coefficients.swap_remove(degree);
    into_integer(degree, constant)
}

/// Recovers the whole polynomial through `points`.
///
/// Unlike [`solve`], every coefficient must be an integer.
pub fn solve_polynomial(
    points: &[Point],
    degree: usize,
) -> Result<Polynomial, ReconstructionError> {
    solve_coefficients(points, degree)?
        .into_iter()
        .enumerate()
        .map(|(index, value)| into_integer(index, value))
        .collect::<Result<Vec<_>, _>>()
        .map(Polynomial::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn points(pairs: &[(i64, i64)]) -> Vec<Point> {
        pairs.iter().map(|&pair| Point::from(pair)).collect()
    }

    #[test]
    fn test_solve_quadratic() {
        // x^2 + 3
        let pts = points(&[(1, 4), (2, 7), (3, 12)]);
        assert_eq!(solve(&pts, 2).unwrap(), BigInt::from(3));
        assert_eq!(
            solve_polynomial(&pts, 2).unwrap().coefficients(),
            &[BigInt::from(1), BigInt::from(0), BigInt::from(3)]
        );
    }

    #[test]
    fn test_solve_degree_zero() {
        let pts = points(&[(5, 42)]);
        assert_eq!(solve(&pts, 0).unwrap(), BigInt::from(42));
    }

    #[test]
    fn test_solve_with_zero_and_negative_x() {
        // 2x^3 - x^2 + 5x - 7
        let pts = points(&[(-2, -37), (0, -7), (1, -1), (3, 53)]);
        assert_eq!(solve(&pts, 3).unwrap(), BigInt::from(-7));
    }

    #[test]
    fn test_pivoting_swaps_rows() {
        // First row has a zero in column 1 once column 0 is eliminated; pivoting must recover.
        // 3x^2 - 2x + 10
        let pts = points(&[(0, 10), (-1, 15), (2, 18)]);
        assert_eq!(solve(&pts, 2).unwrap(), BigInt::from(10));
    }

    #[test]
    fn test_duplicate_x_is_singular() {
        let pts = points(&[(1, 2), (1, 3)]);
        assert_eq!(
            solve(&pts, 1),
            Err(ReconstructionError::SingularSystem { column: 1 })
        );
    }

    #[test]
    fn test_point_count_must_match_degree() {
        let pts = points(&[(1, 4), (2, 7), (3, 12)]);
        assert_eq!(
            solve(&pts, 1),
            Err(ReconstructionError::PointCountMismatch {
                degree: 1,
                expected: 2,
                actual: 3
            })
        );
        assert!(matches!(
            solve(&pts[..2], 2),
            Err(ReconstructionError::PointCountMismatch { .. })
        ));
    }

    #[test]
    fn test_non_integer_constant_is_reported() {
        // y = (x - 1) / 2
        let pts = points(&[(1, 0), (3, 1)]);
        assert_eq!(
            solve(&pts, 1),
            Err(ReconstructionError::InexactDivision {
                index: 1,
                value: BigRational::new(BigInt::from(-1), BigInt::from(2)),
            })
        );
    }

    #[test]
    fn test_only_the_constant_must_be_integral() {
        // y = x / 2
        let pts = points(&[(0, 0), (2, 1)]);
        assert_eq!(solve(&pts, 1).unwrap(), BigInt::zero());
        assert!(matches!(
            solve_polynomial(&pts, 1),
            Err(ReconstructionError::InexactDivision { index: 0, .. })
        ));
    }

    #[test]
    fn test_coefficients_may_be_fractions() {
        // y = x / 2
        let pts = points(&[(0, 0), (2, 1)]);
        assert_eq!(
            solve_coefficients(&pts, 1).unwrap(),
            vec![
                BigRational::new(BigInt::from(1), BigInt::from(2)),
                BigRational::zero()
            ]
        );
    }

    fn arb_polynomial_and_xs() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
        prop::collection::vec(-1_000i64..1_000, 1..8).prop_flat_map(|coefficients| {
            let size = coefficients.len();
            (
                Just(coefficients),
                prop::sample::subsequence((-25i64..=25).collect::<Vec<_>>(), size).prop_shuffle(),
            )
        })
    }

    proptest! {
        #[test]
        fn recovers_every_coefficient((coefficients, xs) in arb_polynomial_and_xs()) {
            let expected = Polynomial::new(coefficients.iter().copied().map(BigInt::from).collect());
            let pts: Vec<Point> = xs
                .iter()
                .map(|&x| Point::new(x, expected.evaluate(&BigInt::from(x))))
                .collect();
            let degree = coefficients.len() - 1;

            prop_assert_eq!(solve(&pts, degree).unwrap(), expected.constant_term());
            prop_assert_eq!(solve_polynomial(&pts, degree).unwrap(), expected);
        }
    }
}
