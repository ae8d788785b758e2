//! Literal text for leaf values.
//!
//! Output reads like a source-level literal: strings are single-quoted,
//! integral floats keep their `.0`, and nothing ever spans more than one line.

use phast_ast::Value;

/// Formats non-node values as literals.
pub struct ScalarFormatter;

impl ScalarFormatter {
    /// Format a scalar value. Returns `None` for nodes and slot lists, which
    /// are not scalars.
    pub fn format(value: &Value) -> Option<String> {
        match value {
            Value::Null => Some(Self::null().to_string()),
            Value::Bool(b) => Some(Self::bool(*b).to_string()),
            Value::Int(i) => Some(Self::int(*i)),
            Value::Float(f) => Some(Self::float(*f)),
            Value::String(s) => Some(Self::string(s)),
            Value::Node(_) | Value::List(_) => None,
        }
    }

    #[inline]
    pub fn null() -> &'static str {
        "null"
    }

    #[inline]
    pub fn bool(v: bool) -> &'static str {
        if v { "true" } else { "false" }
    }

    pub fn int(v: i64) -> String {
        v.to_string()
    }

    /// Shortest plain decimal that reads back as the same float. Integral
    /// values keep a `.0` and no exponent is ever used.
    pub fn float(v: f64) -> String {
        if v.is_nan() {
            return "NAN".to_string();
        }
        if v.is_infinite() {
            let text = if v > 0.0 { "INF" } else { "-INF" };
            return text.to_string();
        }
        let mut text = v.to_string();
        if !text.contains('.') {
            text.push_str(".0");
        }
        text
    }

    /// Single-quoted string literal.
    ///
    /// `\` and `'` are backslash-escaped. NUL, CR and LF cannot appear inside
    /// single quotes without breaking the line, so they are spliced in as
    /// double-quoted escapes: `'a' . "\n" . 'b'`.
    pub fn string(s: &str) -> String {
        let mut out = String::with_capacity(s.len() + 2);
        out.push('\'');
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\'' => out.push_str("\\'"),
                '\0' => out.push_str("' . \"\\0\" . '"),
                '\n' => out.push_str("' . \"\\n\" . '"),
                '\r' => out.push_str("' . \"\\r\" . '"),
                _ => out.push(c),
            }
        }
        out.push('\'');
        out
    }
}
