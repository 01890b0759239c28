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
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::ValueError;
use crate::integer::SchemeInteger;
use crate::util::check_len;
use crate::value::{Value, ValueRef};

/// Generates a numeric primitive that runs a simple fold. The provided folder must be a function
/// (&BigInt, &BigInt) -> BigInt
macro_rules! prim_fold_0 {
    ($name:ident, $folder:ident, $fold_initial:expr) => {
        pub fn $name(args: &[ValueRef]) -> Result<ValueRef, ValueError> {
            let values = integer_vec(args);
            Ok(exact(
                values.iter().fold($fold_initial, |a, b| $folder(&a, b)),
            ))
        }
    };
}

prim_fold_0!(add, add2, BigInt::zero());
fn add2(a: &BigInt, b: &BigInt) -> BigInt {
    a + b
}

prim_fold_0!(mul, mul2, BigInt::one());
fn mul2(a: &BigInt, b: &BigInt) -> BigInt {
    a * b
}

pub fn sub(args: &[ValueRef]) -> Result<ValueRef, ValueError> {
    check_arity("-", args, Some(1), None)?;
    let values = integer_vec(args);
    if values.len() == 1 {
        return Ok(exact(-values[0]));
    }
    let first = values[0].clone();
    Ok(exact(values[1..].iter().fold(first, |a, b| a - *b)))
}

pub fn abs(args: &[ValueRef]) -> Result<ValueRef, ValueError> {
    check_arity("abs", args, Some(1), Some(1))?;
    Ok(exact(integer_vec(args)[0].abs()))
}

/// Generates a two-argument division primitive. The provided divider is only ever called with
/// a non-zero divisor.
macro_rules! prim_division {
    ($name:ident, $scheme_name:expr, $divider:ident) => {
        pub fn $name(args: &[ValueRef]) -> Result<ValueRef, ValueError> {
            check_arity($scheme_name, args, Some(2), Some(2))?;
            let values = integer_vec(args);
            if values[1].is_zero() {
                return Err(ValueError::DivisionByZero($scheme_name));
            }
            Ok(exact($divider(values[0], values[1])))
        }
    };
}

prim_division!(quotient, "quotient", quotient2);
fn quotient2(a: &BigInt, b: &BigInt) -> BigInt {
    a / b
}

prim_division!(remainder, "remainder", remainder2);
fn remainder2(a: &BigInt, b: &BigInt) -> BigInt {
    a % b
}

prim_division!(modulo, "modulo", modulo2);
fn modulo2(a: &BigInt, b: &BigInt) -> BigInt {
    a.mod_floor(b)
}

fn check_arity(
    name: &'static str,
    args: &[ValueRef],
    min: Option<usize>,
    max: Option<usize>,
) -> Result<(), ValueError> {
    check_len(args, min, max).map_err(|message| ValueError::Arity { name, message })
}

/// Takes an argument list, returns the exact integers it holds.
fn integer_vec(args: &[ValueRef]) -> Vec<&BigInt> {
    args.iter().map(|v| v.as_integer().value()).collect()
}

fn exact(val: BigInt) -> ValueRef {
    Value::from(SchemeInteger::from_exact(val)).into_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::pretty_print;

    fn int(n: i64) -> ValueRef {
        Value::from(SchemeInteger::from(n)).into_ref()
    }

    fn text(s: &str) -> ValueRef {
        Value::from(SchemeInteger::from_text(s).unwrap()).into_ref()
    }

    fn pp(r: Result<ValueRef, ValueError>) -> String {
        pretty_print(&*r.unwrap())
    }

    #[test]
    fn add_mul_identities() {
        assert_eq!("0", pp(add(&[])));
        assert_eq!("1", pp(mul(&[])));
        assert_eq!("6", pp(add(&[int(1), int(2), int(3)])));
        assert_eq!("-24", pp(mul(&[int(2), int(-3), int(4)])));
    }

    #[test]
    fn sub_negates_single_argument() {
        assert_eq!("-1", pp(sub(&[int(1)])));
        assert_eq!("0", pp(sub(&[int(0)])));
        assert_eq!("-4", pp(sub(&[int(1), int(2), int(3)])));
        assert_eq!(
            Err(ValueError::Arity {
                name: "-",
                message: "Too few values, expecting at least 1.".to_string()
            }),
            sub(&[])
        );
    }

    #[test]
    fn no_overflow() {
        let max = int(i64::MAX);
        assert_eq!("9223372036854775808", pp(add(&[max.clone(), int(1)])));
        assert_eq!(
            "85070591730234615847396907784232501249",
            pp(mul(&[max.clone(), max]))
        );
        assert_eq!("9223372036854775808", pp(abs(&[int(i64::MIN)])));
    }

    #[test]
    fn divisions() {
        assert_eq!("-2", pp(quotient(&[int(-7), int(3)])));
        assert_eq!("-1", pp(remainder(&[int(-7), int(3)])));
        assert_eq!("2", pp(modulo(&[int(-7), int(3)])));
        assert_eq!("-2", pp(modulo(&[int(7), int(-3)])));
        assert_eq!(
            "1",
            pp(quotient(&[
                text("100000000000000000000000000000"),
                text("100000000000000000000000000000")
            ]))
        );
    }

    #[test]
    fn division_errors() {
        assert_eq!(
            Err(ValueError::DivisionByZero("modulo")),
            modulo(&[int(1), int(0)])
        );
        assert!(quotient(&[int(1)]).is_err());
        assert!(remainder(&[int(1), int(2), int(3)]).is_err());
    }

    #[test]
    fn arguments_are_not_mutated() {
        let a = int(5);
        let b = int(7);
        let sum = add(&[a.clone(), b.clone()]).unwrap();
        assert_eq!("12", pretty_print(&*sum));
        assert_eq!("5", pretty_print(&*a));
        assert_eq!("7", pretty_print(&*b));
    }
}
