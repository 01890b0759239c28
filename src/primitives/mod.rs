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

//! Primitives operating on runtime values.
//!
//! Naming conventions in Rust: replace `?` with `_p`, `!` with `_b`, `->` with `_to_`.
//!
//! ### Exact integers
//! OK + * -
//! OK quotient remainder modulo
//! OK abs
//!
//! Anything that returns a boolean, a string or an inexact number needs the corresponding value
//! kind first.

use std::fmt::{Debug, Error, Formatter};

use log::trace;

use crate::error::ValueError;
use crate::value::ValueRef;

use self::numeric::*;

mod numeric;

macro_rules! simple_primitive {
    ($name:expr, $implementation:ident) => {
        Primitive {
            name: $name,
            implementation: $implementation,
        }
    };
}

static PRIMITIVES: [Primitive; 7] = [
    simple_primitive!("+", add),
    simple_primitive!("*", mul),
    simple_primitive!("-", sub),
    simple_primitive!("abs", abs),
    simple_primitive!("quotient", quotient),
    simple_primitive!("remainder", remainder),
    simple_primitive!("modulo", modulo),
];

pub type PrimitiveImplementation = fn(&[ValueRef]) -> Result<ValueRef, ValueError>;

pub struct Primitive {
    pub name: &'static str,
    pub implementation: PrimitiveImplementation,
}

impl Primitive {
    pub fn apply(&self, args: &[ValueRef]) -> Result<ValueRef, ValueError> {
        trace!("applying {} to {} argument(s)", self.name, args.len());
        (self.implementation)(args)
    }
}

impl Debug for Primitive {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "primitive {}", self.name)
    }
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Primitive) -> bool {
        self.name == other.name
    }
}

/// Finds a primitive by its Scheme name.
pub fn lookup(name: &str) -> Option<&'static Primitive> {
    PRIMITIVES.iter().find(|p| p.name == name)
}

pub fn primitives() -> &'static [Primitive] {
    &PRIMITIVES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::SchemeInteger;
    use crate::value::{pretty_print, Value};

    fn int(n: i64) -> ValueRef {
        Value::from(SchemeInteger::from(n)).into_ref()
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!("quotient", lookup("quotient").unwrap().name);
        assert!(lookup("car").is_none());
    }

    #[test]
    fn names_are_unique() {
        for (i, p) in primitives().iter().enumerate() {
            assert!(primitives()[i + 1..].iter().all(|q| q != p), "{:?}", p);
        }
    }

    #[test]
    fn apply_dispatches() {
        let r = lookup("+").unwrap().apply(&[int(2), int(2)]).unwrap();
        assert_eq!("4", pretty_print(&*r));
    }
}
