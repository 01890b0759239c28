// Copyright 2018-2019 Matthieu Felix
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::debug;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::ValueError;
use crate::util::split_integer_literal;
use crate::value::SchemeObject;

/// An exact integer of unbounded magnitude.
///
/// Equality, ordering and hashing are numeric: two integers built from `"007"` and `7` are the
/// same value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemeInteger {
    val: BigInt,
}

impl SchemeInteger {
    pub fn from_exact(val: BigInt) -> Self {
        SchemeInteger { val }
    }

    /// Widens any native integer type.
    pub fn from_native<T: Into<BigInt>>(val: T) -> Self {
        SchemeInteger { val: val.into() }
    }

    /// Parses an optionally signed decimal literal, e.g. `42`, `-17` or `+007`.
    pub fn from_text(s: &str) -> Result<Self, ValueError> {
        Self::from_text_radix(s, 10)
    }

    /// Like `from_text`, with digits in `radix`. Letters are case-insensitive.
    pub fn from_text_radix(s: &str, radix: u32) -> Result<Self, ValueError> {
        if radix < 2 || radix > 36 {
            return Err(ValueError::InvalidRadix(radix));
        }
        let malformed = |e: String| {
            debug!("rejecting integer literal {:?}: {}", s, e);
            ValueError::MalformedIntegerLiteral(s.to_string())
        };

        let (negative, digits) = split_integer_literal(s, radix).map_err(malformed)?;
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)
            .ok_or_else(|| malformed("Could not parse digits.".to_string()))?;
        Ok(SchemeInteger {
            val: if negative { -magnitude } else { magnitude },
        })
    }

    pub fn value(&self) -> &BigInt {
        &self.val
    }

    pub fn to_native(&self) -> Result<i64, ValueError> {
        self.val
            .to_i64()
            .ok_or_else(|| ValueError::OutOfRange(self.val.clone()))
    }

    pub fn is_zero(&self) -> bool {
        self.val.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.val.is_negative()
    }
}

impl SchemeObject for SchemeInteger {
    fn repr(&self) -> Vec<String> {
        vec![self.val.to_str_radix(10)]
    }
}

impl Display for SchemeInteger {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.val)
    }
}

impl FromStr for SchemeInteger {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl From<BigInt> for SchemeInteger {
    fn from(val: BigInt) -> Self {
        Self::from_exact(val)
    }
}

impl From<i32> for SchemeInteger {
    fn from(val: i32) -> Self {
        Self::from_native(val)
    }
}

impl From<i64> for SchemeInteger {
    fn from(val: i64) -> Self {
        Self::from_native(val)
    }
}

impl TryFrom<&SchemeInteger> for i64 {
    type Error = ValueError;

    fn try_from(i: &SchemeInteger) -> Result<i64, ValueError> {
        i.to_native()
    }
}
