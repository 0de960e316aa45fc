//! EJSON parser: recursive descent over a byte-offset cursor.
//!
//! The parser turns EJSON text into a [`Value`] tree in a single pass. On
//! top of standard JSON it reads:
//!
//! - Big integer literals: `123n`, plus automatic promotion of unsuffixed
//!   digit runs too large for exact f64 representation
//! - Timestamp strings: value-position strings shaped exactly like
//!   `2024-01-15T10:30:00.000Z` become [`Value::Date`]
//! - `\uXXXX` escapes with UTF-16 surrogate pairing
//!
//! # Key design decisions
//!
//! - **Per-call state**: each call owns its cursor and depth counter, so
//!   concurrent parses need no coordination.
//! - **Uniform depth guard**: arrays and objects share one configurable
//!   nesting limit ([`DEFAULT_MAX_DEPTH`], or [`parse_with_max_depth`]).
//! - **No cycle tracking**: a linear parse builds every container fresh, so
//!   no container identity can recur and no guard set is kept.
//! - **Keys are never reclassified**: timestamp detection applies only to
//!   strings in value position. A key shaped like a timestamp stays text,
//!   and a value shaped like one becomes a `Date` with no escape hatch.

use chrono::{DateTime, Utc};
use num_bigint::BigInt;

use crate::error::{Result, SyntaxError};
use crate::types::{is_safe_integer, Value};

/// Nesting depth limit applied by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Parse EJSON text into a [`Value`].
///
/// Leading and trailing whitespace is ignored; anything else after the
/// top-level value is an error. Containers may nest up to
/// [`DEFAULT_MAX_DEPTH`] levels.
///
/// # Example
/// ```
/// use ejson_core::parse;
///
/// let value = parse(r#"[1,"two",9007199254740993n]"#).unwrap();
/// assert_eq!(value.as_array().map(|items| items.len()), Some(3));
/// ```
pub fn parse(input: &str) -> Result<Value> {
    parse_with_max_depth(input, DEFAULT_MAX_DEPTH)
}

/// Parse with a caller-chosen nesting limit.
///
/// The limit counts open containers of either kind; a limit of 0 rejects
/// any array or object.
///
/// # Example
/// ```
/// use ejson_core::{parse_with_max_depth, SyntaxError};
///
/// let err = parse_with_max_depth("[[1]]", 1).unwrap_err();
/// assert!(matches!(err, SyntaxError::TooDeep { limit: 1, .. }));
/// ```
pub fn parse_with_max_depth(input: &str, max_depth: usize) -> Result<Value> {
    let mut decoder = Decoder {
        input,
        pos: 0,
        depth: 0,
        max_depth,
    };
    decoder.parse_document()
}

/// Parser state for one call. `pos` is a byte offset and always sits on a
/// character boundary.
struct Decoder<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.skip_whitespace();
        if let Some(ch) = self.peek() {
            return Err(SyntaxError::TrailingCharacters {
                found: ch,
                offset: self.pos,
            });
        }
        Ok(value)
    }

    // ------------------------------------------------------------------
    // Cursor primitives
    // ------------------------------------------------------------------

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume `literal` if the input continues with it.
    fn eat(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Skip Unicode whitespace. The byte order mark counts as skippable even
    /// though Rust does not class it as whitespace.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() || ch == '\u{feff}' {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
    }

    // ------------------------------------------------------------------
    // Productions
    // ------------------------------------------------------------------

    /// Dispatch on the first significant character. The keyword literals
    /// match greedily as prefixes; any leftover text surfaces at the
    /// enclosing delimiter check or the trailing-input check.
    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        if self.eat("null") {
            return Ok(Value::Null);
        }
        if self.eat("true") {
            return Ok(Value::Bool(true));
        }
        if self.eat("false") {
            return Ok(Value::Bool(false));
        }
        match self.peek() {
            Some('"') => self.parse_string_value(),
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => self.parse_number(),
            Some(ch) => Err(SyntaxError::UnexpectedCharacter {
                found: ch,
                offset: self.pos,
            }),
            None => Err(SyntaxError::UnexpectedEnd { offset: self.pos }),
        }
    }

    /// A string in value position: decode it, then let timestamp-shaped
    /// text reclassify to a `Date`.
    fn parse_string_value(&mut self) -> Result<Value> {
        let text = self.parse_string()?;
        if let Some(date) = as_timestamp(&text) {
            return Ok(Value::Date(date));
        }
        Ok(Value::String(text))
    }

    /// Decode a double-quoted string literal into its raw text. Shared by
    /// value and key positions; the caller decides whether classification
    /// applies. Raw characters pass through unchanged, including control
    /// characters and non-ASCII text.
    fn parse_string(&mut self) -> Result<String> {
        let open = self.pos;
        self.pos += 1; // opening '"'
        let mut text = String::new();
        loop {
            let ch = match self.bump() {
                Some(ch) => ch,
                None => return Err(SyntaxError::UnterminatedString { offset: open }),
            };
            match ch {
                '"' => return Ok(text),
                '\\' => {
                    let escape = match self.bump() {
                        Some(escape) => escape,
                        None => {
                            return Err(SyntaxError::UnterminatedEscape {
                                offset: self.pos - 1,
                            })
                        }
                    };
                    match escape {
                        '"' => text.push('"'),
                        '\\' => text.push('\\'),
                        '/' => text.push('/'),
                        'b' => text.push('\u{8}'),
                        'f' => text.push('\u{c}'),
                        'n' => text.push('\n'),
                        'r' => text.push('\r'),
                        't' => text.push('\t'),
                        'u' => text.push(self.parse_unicode_escape()?),
                        other => {
                            return Err(SyntaxError::InvalidEscape {
                                found: other,
                                offset: self.pos - other.len_utf8(),
                            })
                        }
                    }
                }
                other => text.push(other),
            }
        }
    }

    /// Decode the body of a `\u` escape into one character. Reads exactly
    /// four hex digits; a high surrogate must be followed by a `\u`-escaped
    /// low surrogate and the pair combines into a single code point (UTF-16
    /// escape semantics over UTF-8 output). Unpaired surrogates have no
    /// character to map to and are rejected.
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let escape_start = self.pos - 2; // the backslash
        let high = self.read_hex4()?;
        match high {
            0xD800..=0xDBFF => {
                if !self.eat("\\u") {
                    return Err(SyntaxError::InvalidUnicodeEscape {
                        offset: escape_start,
                    });
                }
                let low = self.read_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(SyntaxError::InvalidUnicodeEscape {
                        offset: escape_start,
                    });
                }
                let combined =
                    0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                char::from_u32(combined).ok_or(SyntaxError::InvalidUnicodeEscape {
                    offset: escape_start,
                })
            }
            0xDC00..=0xDFFF => Err(SyntaxError::InvalidUnicodeEscape {
                offset: escape_start,
            }),
            _ => char::from_u32(u32::from(high)).ok_or(SyntaxError::InvalidUnicodeEscape {
                offset: escape_start,
            }),
        }
    }

    /// Read exactly four ASCII hex digits.
    fn read_hex4(&mut self) -> Result<u16> {
        let start = self.pos;
        let mut code: u16 = 0;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|ch| ch.to_digit(16))
                .ok_or(SyntaxError::InvalidUnicodeEscape { offset: start })?;
            code = code * 16 + digit as u16;
        }
        Ok(code)
    }

    /// Decode a numeric literal. The scan greedily takes the coarse class
    /// `0-9 e E + - .`, then an optional `n` suffix marking a big integer.
    /// Unsuffixed plain digit runs too large for exact f64 representation
    /// promote to big integers; signed or fractional runs never promote.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            match ch {
                '0'..='9' | 'e' | 'E' | '+' | '-' | '.' => self.pos += 1,
                _ => break,
            }
        }
        let run = &self.input[start..self.pos];
        if self.peek() == Some('n') {
            self.pos += 1;
            return match run.parse::<BigInt>() {
                Ok(n) => Ok(Value::BigInt(n)),
                Err(_) => Err(SyntaxError::InvalidNumber {
                    literal: format!("{run}n"),
                    offset: start,
                }),
            };
        }
        let number: f64 = match run.parse() {
            Ok(number) => number,
            Err(_) => {
                return Err(SyntaxError::InvalidNumber {
                    literal: run.to_string(),
                    offset: start,
                })
            }
        };
        if !is_safe_integer(number) && run.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = run.parse::<BigInt>() {
                return Ok(Value::BigInt(n));
            }
        }
        Ok(Value::Number(number))
    }

    /// Decode an array. `[` enters the depth guard shared with objects.
    fn parse_array(&mut self) -> Result<Value> {
        let open = self.pos;
        self.pos += 1; // '['
        self.enter(open)?;
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.pos += 1;
            self.leave();
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                }
                Some(']') => {
                    self.pos += 1;
                    self.leave();
                    return Ok(Value::Array(items));
                }
                Some(ch) => {
                    return Err(SyntaxError::ExpectedArrayComma {
                        found: ch,
                        offset: self.pos,
                    })
                }
                None => return Err(SyntaxError::UnterminatedArray { offset: open }),
            }
        }
    }

    /// Decode an object. Keys are double-quoted strings and are never
    /// timestamp-reclassified; a duplicate key overwrites the earlier value
    /// in place, keeping the entry's original position.
    fn parse_object(&mut self) -> Result<Value> {
        let open = self.pos;
        self.pos += 1; // '{'
        self.enter(open)?;
        let mut entries: Vec<(String, Value)> = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some('}') {
            self.pos += 1;
            self.leave();
            return Ok(Value::Object(entries));
        }
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('"') => {}
                Some(_) => return Err(SyntaxError::ExpectedKey { offset: self.pos }),
                None => return Err(SyntaxError::UnterminatedObject { offset: open }),
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            match self.peek() {
                Some(':') => self.pos += 1,
                Some(_) => return Err(SyntaxError::ExpectedColon { offset: self.pos }),
                None => return Err(SyntaxError::UnterminatedObject { offset: open }),
            }
            let member = self.parse_value()?;
            insert_entry(&mut entries, key, member);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.pos += 1,
                Some('}') => {
                    self.pos += 1;
                    self.leave();
                    return Ok(Value::Object(entries));
                }
                Some(ch) => {
                    return Err(SyntaxError::ExpectedObjectComma {
                        found: ch,
                        offset: self.pos,
                    })
                }
                None => return Err(SyntaxError::UnterminatedObject { offset: open }),
            }
        }
    }

    /// Depth accounting shared by arrays and objects. `open` is the offset
    /// of the container's opening delimiter, reported if the limit trips.
    fn enter(&mut self, open: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(SyntaxError::TooDeep {
                limit: self.max_depth,
                offset: open,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Timestamp detection for value-position strings: exactly the 24-character
/// shape `YYYY-MM-DDTHH:mm:ss.sssZ`, naming a real instant. Shape matches
/// with impossible components (month 13, hour 25, Feb 30) stay text; there
/// is no invalid-timestamp value for them to map to.
fn as_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let bytes = text.as_bytes();
    if bytes.len() != 24 {
        return None;
    }
    for (i, &b) in bytes.iter().enumerate() {
        let ok = match i {
            4 | 7 => b == b'-',
            10 => b == b'T',
            13 | 16 => b == b':',
            19 => b == b'.',
            23 => b == b'Z',
            _ => b.is_ascii_digit(),
        };
        if !ok {
            return None;
        }
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

/// Last write wins; the entry keeps its original position.
fn insert_entry(entries: &mut Vec<(String, Value)>, key: String, member: Value) {
    match entries.iter().position(|(existing, _)| *existing == key) {
        Some(i) => entries[i].1 = member,
        None => entries.push((key, member)),
    }
}
