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

/// Checks that a vector has at least `min`, at most `max` entries.
pub fn check_len<T>(v: &[T], min: Option<usize>, max: Option<usize>) -> Result<(), String> {
    if let Some(m) = min {
        if v.len() < m {
            return Err(format!("Too few values, expecting at least {}.", m));
        }
    };
    if let Some(m) = max {
        if v.len() > m {
            return Err(format!("Too many values, expecting at most {}.", m));
        }
    };
    Ok(())
}

/// Splits an integer literal into its sign and its digits, checking that every digit is valid
/// in `radix`. At most one leading `+` or `-` is allowed, and there must be at least one digit.
pub fn split_integer_literal(s: &str, radix: u32) -> Result<(bool, &str), String> {
    if radix < 2 || radix > 36 {
        return Err(format!("Invalid base {}.", radix));
    }
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty() {
        return Err("Missing digits.".to_string());
    }
    for d in digits.chars() {
        if d.to_digit(radix).is_none() {
            return Err(format!("Invalid digit for base {}: {}", radix, d));
        }
    }
    Ok((negative, digits))
}
