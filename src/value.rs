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

//! Runtime values.
//!
//! Every kind of datum the interpreter can hold implements [`SchemeObject`], and is wrapped in
//! one variant of [`Value`]. Values are never mutated once built; they are shared through
//! [`ValueRef`]s.

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use crate::integer::SchemeInteger;

/// The one capability every Scheme value has: producing its external representation.
///
/// The representation is a sequence of lines so that structured values can be laid out over
/// several of them; atomic values return a single line. Implementations must be pure and must
/// return the same lines every time for the same value.
pub trait SchemeObject {
    fn repr(&self) -> Vec<String>;
}

/// All the value kinds known to the runtime.
///
/// Adding a kind means adding a variant here, and the match in `repr` below will not compile
/// until the new kind implements `SchemeObject`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Integer(SchemeInteger),
}

/// Shared handle on a value. Cloning it shares the value instead of copying it.
pub type ValueRef = Arc<Value>;

impl Value {
    pub fn into_ref(self) -> ValueRef {
        Arc::new(self)
    }

    pub fn as_integer(&self) -> &SchemeInteger {
        match self {
            Value::Integer(i) => i,
        }
    }
}

impl SchemeObject for Value {
    fn repr(&self) -> Vec<String> {
        match self {
            Value::Integer(i) => i.repr(),
        }
    }
}

impl From<SchemeInteger> for Value {
    fn from(i: SchemeInteger) -> Self {
        Value::Integer(i)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", pretty_print(self))
    }
}

/// Joins the lines of an object's representation.
pub fn pretty_print(obj: &dyn SchemeObject) -> String {
    obj.repr().join("\n")
}
