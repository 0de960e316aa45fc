//! # ejson-core
//!
//! Parser and serializer for **EJSON (Extended JSON)**: JSON text extended
//! with big integer literals (`123n`), ISO-8601 timestamps, and one-way
//! literal forms (`undefined`, `Infinity`, `NaN`, symbols, function source).
//!
//! The whole crate is the codec pair: [`parse`] turns text into a [`Value`]
//! tree, [`stringify`] renders a tree as text. Parsing is a single
//! recursive-descent pass with no global state; serialization is total and
//! cannot fail.
//!
//! ## Quick start
//!
//! ```rust
//! use ejson_core::{parse, stringify, Value};
//!
//! let doc = parse(r#"{"id":9007199254740993n,"name":"Ada","ok":true}"#).unwrap();
//! assert_eq!(doc.get("name").and_then(Value::as_str), Some("Ada"));
//!
//! // Insertion order survives the round trip.
//! assert_eq!(
//!     stringify(&doc),
//!     r#"{"id":9007199254740993n,"name":"Ada","ok":true}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] - EJSON text to `Value` tree, with a configurable nesting limit
//! - [`encoder`] - `Value` tree to EJSON text
//! - [`error`] - [`SyntaxError`], carrying the byte offset of each failure
//! - [`types`] - the [`Value`] model and conversions
//!
//! ## Asymmetric extensions
//!
//! `undefined`, `NaN`, `Infinity`, `-Infinity`, symbols, and function source
//! serialize to literal forms the parser rejects. Big integers and
//! timestamps round-trip; a plain string shaped exactly like a serialized
//! timestamp comes back as [`Value::Date`], which is the one place parsing
//! changes a value's kind.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod types;

pub use decoder::{parse, parse_with_max_depth, DEFAULT_MAX_DEPTH};
pub use encoder::stringify;
pub use error::{Result, SyntaxError};
pub use types::{Value, MAX_SAFE_INTEGER};
