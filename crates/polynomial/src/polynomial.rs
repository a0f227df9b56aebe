// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Integer polynomial recovered from a set of shares.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// A polynomial represented by its coefficients in descending order of degree.
///
/// This is the same column order the solver uses: `coefficients()[0]` multiplies
/// `x^degree` and the last coefficient is the constant term, i.e. the secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    /// Coefficients in descending order (highest degree first).
    coefficients: Vec<BigInt>,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, coeff) in self.coefficients.iter().enumerate() {
            let degree = self.coefficients.len() - 1 - i;

            if coeff.is_zero() {
                continue;
            }

            if !first {
                if coeff.is_positive() {
                    write!(f, " + ")?;
                } else {
                    write!(f, " - ")?;
                }
            } else if coeff.is_negative() {
                write!(f, "-")?;
            }
            first = false;

            let abs_coeff = coeff.abs();
            if degree == 0 || !abs_coeff.is_one() {
                write!(f, "{abs_coeff}")?;
            }

            if degree > 0 {
                write!(f, "x")?;
                if degree > 1 {
                    write!(f, "^{degree}")?;
                }
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

impl Polynomial {
    /// Creates a new polynomial from a vector of coefficients.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Vector of coefficients in descending order of degree.
    pub fn new(coefficients: Vec<BigInt>) -> Self {
        Self { coefficients }
    }

    /// Creates a polynomial from coefficients in ascending order (constant term first).
    pub fn from_ascending_coefficients(ascending_coefficients: Vec<BigInt>) -> Self {
        let mut coefficients = ascending_coefficients;
        coefficients.reverse();
        Self { coefficients }
    }

    /// Returns the coefficients of the polynomial, highest degree first.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial.
    ///
    /// This is the size of the system it was solved from minus one, so leading
    /// zero coefficients still count. An empty polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Returns the coefficient of `x^0`.
    pub fn constant_term(&self) -> BigInt {
        self.coefficients.last().cloned().unwrap_or_else(BigInt::zero)
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coefficients
            .iter()
            .fold(BigInt::zero(), |acc, coeff| acc * x + coeff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coefficients: &[i64]) -> Polynomial {
        Polynomial::new(coefficients.iter().copied().map(BigInt::from).collect())
    }

    #[test]
    fn test_degree_and_constant_term() {
        let p = poly(&[1, 0, 3]);
        assert_eq!(p.degree(), 2);
        assert_eq!(p.constant_term(), BigInt::from(3));

        let empty = Polynomial::new(vec![]);
        assert_eq!(empty.degree(), 0);
        assert_eq!(empty.constant_term(), BigInt::zero());
    }

    #[test]
    fn test_polynomial_display() {
        assert_eq!(poly(&[2, -3, 1]).to_string(), "2x^2 - 3x + 1");
        assert_eq!(poly(&[1, 0, 3]).to_string(), "x^2 + 3");
        assert_eq!(poly(&[-1, 1]).to_string(), "-x + 1");
        assert_eq!(poly(&[0, 0]).to_string(), "0");
    }

    #[test]
    fn test_polynomial_evaluation() {
        let p = poly(&[1, 2, 3]); // x^2 + 2x + 3
        assert_eq!(p.evaluate(&BigInt::from(2)), BigInt::from(11));
        assert_eq!(p.evaluate(&BigInt::from(0)), BigInt::from(3));
        assert_eq!(p.evaluate(&BigInt::from(-1)), BigInt::from(2));
    }

    #[test]
    fn test_ascending_coefficients_conversion() {
        // 2 + 3x + x^2
        let p = Polynomial::from_ascending_coefficients(vec![
            BigInt::from(2),
            BigInt::from(3),
            BigInt::from(1),
        ]);
        assert_eq!(
            p.coefficients(),
            &[BigInt::from(1), BigInt::from(3), BigInt::from(2)]
        );
        assert_eq!(p.to_string(), "x^2 + 3x + 2");
    }
}
