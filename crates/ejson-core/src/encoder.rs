//! EJSON serializer: renders a [`Value`] tree as text.
//!
//! Output is compact (no whitespace) and deterministic. JSON kinds render as
//! standard JSON; the extended kinds use their literal forms:
//!
//! - Big integers: decimal digits with an `n` suffix (`123n`)
//! - Timestamps: quoted ISO-8601 with millisecond precision
//! - `undefined`, `NaN`, `Infinity`, `-Infinity`: bare literals
//! - Symbols: `Symbol(description)`, unquoted
//! - Functions: verbatim source text, unquoted
//!
//! The bare-literal forms and symbol/function text are one-way: the parser
//! rejects them. Everything else round-trips.
//!
//! # Example
//! ```
//! use ejson_core::{stringify, Value};
//!
//! let value = Value::Array(vec![Value::Number(1.0), Value::String("hi".into())]);
//! assert_eq!(stringify(&value), r#"[1,"hi"]"#);
//! ```

use chrono::SecondsFormat;

use crate::types::{Value, MAX_SAFE_INTEGER};

/// Serialize a value as EJSON text.
///
/// Total over the value domain: every `Value` has a rendering and no error
/// path exists. No side effects, no I/O.
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

/// Exhaustive dispatch over the value kinds. Containers recurse; the tree is
/// acyclic by construction so no cycle tracking is needed.
fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Undefined => out.push_str("undefined"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(f) => write_number(*f, out),
        Value::BigInt(n) => {
            out.push_str(&n.to_string());
            out.push('n');
        }
        Value::String(s) => write_quoted(s, out),
        Value::Date(d) => {
            out.push('"');
            out.push_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true));
            out.push('"');
        }
        Value::Symbol(description) => {
            out.push_str("Symbol(");
            out.push_str(description);
            out.push(')');
        }
        Value::Function(source) => out.push_str(source),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(entries) => {
            out.push('{');
            for (i, (key, member)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_quoted(key, out);
                out.push(':');
                write_value(member, out);
            }
            out.push('}');
        }
    }
}

/// Format a float:
///
/// - NaN and the infinities render as bare literals
/// - Negative zero normalizes to `0`
/// - Whole numbers beyond the safe-integer bound use exponent notation, so
///   the parser reads them back as floats instead of promoting the digit
///   run to a big integer
/// - Everything else uses the shortest decimal form that round-trips
fn write_number(f: f64, out: &mut String) {
    if f.is_nan() {
        out.push_str("NaN");
    } else if f.is_infinite() {
        out.push_str(if f > 0.0 { "Infinity" } else { "-Infinity" });
    } else if f == 0.0 {
        out.push('0');
    } else if f.fract() == 0.0 && f.abs() > MAX_SAFE_INTEGER as f64 {
        out.push_str(&format!("{f:e}"));
    } else {
        out.push_str(&f.to_string());
    }
}

/// Double-quote and escape a string. Applied to string values and object
/// keys alike, and mirrors the parser's escape table: backslash, quote,
/// newline, tab, carriage return, backspace, and form feed. All other
/// characters pass through raw, including control characters and non-ASCII
/// text.
fn write_quoted(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}
