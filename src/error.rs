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

use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised while constructing values or applying primitives to them.
///
/// None of these carry a source position: the caller (usually the reader) knows where the
/// offending text came from and is in charge of reporting it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("malformed integer literal: `{0}`")]
    MalformedIntegerLiteral(String),

    #[error("invalid radix {0}, expecting 2 to 36")]
    InvalidRadix(u32),

    #[error("{0} does not fit in a native integer")]
    OutOfRange(BigInt),

    #[error("{name}: {message}")]
    Arity { name: &'static str, message: String },

    #[error("{0}: division by zero")]
    DivisionByZero(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            "malformed integer literal: `12a3`",
            ValueError::MalformedIntegerLiteral("12a3".into()).to_string()
        );
        assert_eq!(
            "quotient: division by zero",
            ValueError::DivisionByZero("quotient").to_string()
        );
        assert_eq!(
            "-: Too few values, expecting at least 1.",
            ValueError::Arity {
                name: "-",
                message: "Too few values, expecting at least 1.".into()
            }
            .to_string()
        );
    }
}
