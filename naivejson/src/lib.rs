// SPDX-License-Identifier: Apache-2.0

//! A naive recursive-descent JSON parser for scalar values.
//!
//! Parses a complete in-memory document holding a single `null`, `true`,
//! `false`, number or string into a [`Value`].
//!
//! ```
//! use naivejson::{parse, ParseError, Value, ValueKind};
//!
//! let mut v = Value::default();
//! parse(&mut v, "  3.25 ").unwrap();
//! assert_eq!(v.kind(), ValueKind::Number);
//! assert_eq!(v.number(), 3.25);
//!
//! assert_eq!(parse(&mut v, "null x"), Err(ParseError::RootNotSingular));
//! assert_eq!(v.kind(), ValueKind::Null);
//! ```
//!
//! The grammar is deliberately small: numbers have no exponent part, string
//! escapes are kept as written, and bytes are not checked for UTF-8.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod json_string;
pub use json_string::JsonString;

mod number_parser;

mod parse_error;
pub use parse_error::ParseError;

mod parser;
pub use parser::{parse, parse_with_stack_size};

mod scratch_stack;
pub use scratch_stack::DEFAULT_STACK_INIT_SIZE;

mod value;
pub use value::{Value, ValueKind};
