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

//! Value representation for the Sly Scheme runtime.
//!
//! Every runtime datum implements [`value::SchemeObject`], which gives its external textual
//! representation. Exact integers are unbounded and backed by `num_bigint::BigInt`.

pub mod error;
pub mod integer;
pub mod primitives;
pub mod repl;
pub mod util;
pub mod value;

pub use crate::error::ValueError;
pub use crate::integer::SchemeInteger;
pub use crate::value::{pretty_print, SchemeObject, Value, ValueRef};
