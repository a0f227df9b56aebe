// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use std::fmt;

/// A share: one sample `(x, y)` of the hidden polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: i64,
    y: BigInt,
}

impl Point {
    pub fn new(x: i64, y: BigInt) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl<Y: Into<BigInt>> From<(i64, Y)> for Point {
    fn from((x, y): (i64, Y)) -> Self {
        Self::new(x, y.into())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
