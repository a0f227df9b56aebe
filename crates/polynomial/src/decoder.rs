// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Positional numeral decoding into arbitrary precision integers.

use crate::errors::ReconstructionError;
use num_bigint::BigInt;
use num_traits::Zero;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base (`0-9` followed by `a-z`).
pub const MAX_BASE: u32 = 36;

/// Decodes a digit string written in `base` into an exact integer.
///
/// Digits are read most significant first. `0-9` map to 0..=9 and letters,
/// in either case, map to 10..=35. An empty string decodes to zero.
///
/// # Errors
///
/// Returns `ReconstructionError::InvalidBase` if `base` is outside of [2, 36].
/// Returns `ReconstructionError::InvalidDigit` for the first character whose
/// digit value is not below `base`, including signs and other non alphanumerics.
pub fn decode(digits: &str, base: u32) -> Result<BigInt, ReconstructionError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(ReconstructionError::InvalidBase(base));
    }

    let radix = BigInt::from(base);
    let mut value = BigInt::zero();

    for (position, character) in digits.chars().enumerate() {
        let digit = character
            .to_digit(MAX_BASE)
            .filter(|digit| *digit < base)
            .ok_or(ReconstructionError::InvalidDigit {
                character,
                position,
                base,
            })?;
        value = value * &radix + digit;
    }

    Ok(value)
}
