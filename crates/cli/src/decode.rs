// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use num_bigint::BigInt;
use sf_polynomial::decode;

pub fn decode_value(value: &str, base: u32) -> Result<BigInt> {
    decode(value, base).with_context(|| format!("Could not decode {value:?} in base {base}"))
}

pub fn execute(value: &str, base: u32) -> Result<()> {
    println!("{}", decode_value(value, base)?);
    Ok(())
}
