//! String values.
//!
//! Text storage and encoding belong to the string subsystem; the value layer
//! only needs an immutable, cheaply clonable handle with content equality
//! and the StringToNumber reduction.

use std::fmt;
use std::rc::Rc;

use crate::number::float_to_value;
use crate::value::Value;

/// An immutable JavaScript string.
///
/// Clones share the same buffer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JsString(Rc<str>);

impl JsString {
    /// Create a string from text.
    pub fn new(text: &str) -> Self {
        JsString(Rc::from(text))
    }

    /// The string's text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// StringToNumber, returning a canonical numeric value.
    ///
    /// Surrounding whitespace is ignored and the empty string is 0. Accepts
    /// `Infinity` with an optional sign, `0x`/`0o`/`0b` integer literals and
    /// decimal literals; anything else is NaN.
    ///
    /// ```
    /// use js_value::{JsString, Value};
    ///
    /// assert!(matches!(JsString::new(" 42 ").to_number(), Value::Integer(42)));
    /// assert!(matches!(JsString::new("0x1F").to_number(), Value::Integer(31)));
    /// assert!(matches!(JsString::new("1.5").to_number(), Value::Float(f) if f == 1.5));
    /// ```
    pub fn to_number(&self) -> Value {
        float_to_value(self.to_f64())
    }

    /// StringToNumber as a double.
    pub fn to_f64(&self) -> f64 {
        let text = self.0.trim_matches(is_js_whitespace);
        if text.is_empty() {
            return 0.0;
        }
        if let Some(n) = parse_radix_literal(text) {
            return n;
        }
        parse_decimal_literal(text).unwrap_or(f64::NAN)
    }
}

impl fmt::Debug for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JsString {
    fn from(text: &str) -> Self {
        JsString::new(text)
    }
}

impl From<String> for JsString {
    fn from(text: String) -> Self {
        JsString(Rc::from(text))
    }
}

/// WhiteSpace and LineTerminator code points.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}' | '\u{000B}' | '\u{000C}' | '\u{0020}' | '\u{00A0}' | '\u{FEFF}'
            | '\u{000A}' | '\u{000D}' | '\u{2028}' | '\u{2029}'
    ) || (c != '\u{0085}' && c.is_whitespace())
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let body = &text[2..];
    if body.is_empty() {
        return Some(f64::NAN);
    }
    let mut acc = 0.0f64;
    for c in body.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * radix as f64 + d as f64,
            None => return Some(f64::NAN),
        }
    }
    Some(acc)
}

fn parse_decimal_literal(text: &str) -> Option<f64> {
    let (sign, unsigned) = match text.as_bytes()[0] {
        b'+' => (1.0, &text[1..]),
        b'-' => (-1.0, &text[1..]),
        _ => (1.0, text),
    };
    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }
    if !is_decimal_literal(unsigned) {
        return None;
    }
    unsigned.parse::<f64>().ok().map(|n| sign * n)
}

/// StrUnsignedDecimalLiteral without the `Infinity` alternative.
///
/// Rust's float parser accepts spellings (`inf`, `nan`) that JavaScript
/// does not, so the shape is checked first.
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }
    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
