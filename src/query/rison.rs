//! Rison: a compact, URL-friendly data notation
//!
//! Rison mirrors the JSON data model with a syntax that survives being placed in
//! a query string and stays readable when a user edits it by hand:
//!
//! | JSON                 | Rison             |
//! |----------------------|-------------------|
//! | `{"kw":"abc"}`       | `(kw:abc)`        |
//! | `{"kw":"a b"}`       | `(kw:'a b')`      |
//! | `["x",1]`            | `!(x,1)`          |
//! | `true` `false` `null`| `!t` `!f` `!n`    |
//! | `"it's"`             | `'it!'s'`         |
//!
//! Object entries keep their insertion order.

use crate::utils::error::AppError;
use std::fmt::Write;

/// Characters that may never appear in a bare identifier
const NOT_IDCHAR: &str = " '!:(),*@$";

/// Characters that may not start a bare identifier
const NOT_IDSTART: &str = "-0123456789";

/// A decoded Rison value
#[derive(Debug, Clone, PartialEq)]
pub enum RisonValue {
    Null,
    Bool(bool),
    /// Numbers keep their source text
    Number(String),
    String(String),
    Array(Vec<RisonValue>),
    Object(Vec<(String, RisonValue)>),
}

impl RisonValue {
    /// Look up an object entry by key
    pub fn get(&self, key: &str) -> Option<&RisonValue> {
        match self {
            RisonValue::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Whether `s` can be written without quotes
pub fn is_id(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        None => false,
        Some(first) if NOT_IDSTART.contains(first) || NOT_IDCHAR.contains(first) => false,
        Some(_) => chars.all(|c| !NOT_IDCHAR.contains(c)),
    }
}

/// Encode a value
pub fn to_string(value: &RisonValue) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &RisonValue) {
    match value {
        RisonValue::Null => out.push_str("!n"),
        RisonValue::Bool(true) => out.push_str("!t"),
        RisonValue::Bool(false) => out.push_str("!f"),
        RisonValue::Number(n) => out.push_str(n),
        RisonValue::String(s) => write_string(out, s),
        RisonValue::Array(items) => {
            out.push_str("!(");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(')');
        }
        RisonValue::Object(entries) => {
            out.push('(');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, item);
            }
            out.push(')');
        }
    }
}

fn write_string(out: &mut String, s: &str) {
    if is_id(s) {
        out.push_str(s);
        return;
    }
    out.push('\'');
    for c in s.chars() {
        if c == '\'' || c == '!' {
            out.push('!');
        }
        out.push(c);
    }
    out.push('\'');
}

/// Decode a complete value; trailing input is an error
pub fn from_str(input: &str) -> Result<RisonValue, AppError> {
    let mut parser = Parser {
        chars: input.chars().collect(),
        pos: 0,
        depth: 0,
    };
    let value = parser.value()?;
    if parser.pos != parser.chars.len() {
        return Err(parser.error("unexpected trailing input"));
    }
    Ok(value)
}

/// Deepest `(..)` / `!(..)` nesting the decoder will follow
const MAX_DEPTH: usize = 64;

struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn error(&self, what: &str) -> AppError {
        let mut msg = String::new();
        let _ = write!(msg, "{} at offset {}", what, self.pos);
        AppError::MalformedToken(msg)
    }

    fn value(&mut self) -> Result<RisonValue, AppError> {
        match self.peek() {
            None => Err(self.error("unexpected end of input")),
            Some('(') => {
                self.pos += 1;
                self.nested(Self::object)
            }
            Some('!') => {
                self.pos += 1;
                match self.bump() {
                    Some('t') => Ok(RisonValue::Bool(true)),
                    Some('f') => Ok(RisonValue::Bool(false)),
                    Some('n') => Ok(RisonValue::Null),
                    Some('(') => self.nested(Self::array),
                    _ => Err(self.error("invalid '!' sequence")),
                }
            }
            Some('\'') => {
                self.pos += 1;
                self.quoted().map(RisonValue::String)
            }
            Some(c) if c == '-' || c.is_ascii_digit() => self.number(),
            Some(_) => self.id().map(RisonValue::String),
        }
    }

    fn nested(
        &mut self,
        parse: fn(&mut Self) -> Result<RisonValue, AppError>,
    ) -> Result<RisonValue, AppError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.depth += 1;
        let value = parse(self);
        self.depth -= 1;
        value
    }

    fn object(&mut self) -> Result<RisonValue, AppError> {
        let mut entries = Vec::new();
        if self.peek() == Some(')') {
            self.pos += 1;
            return Ok(RisonValue::Object(entries));
        }
        loop {
            let key = match self.value()? {
                RisonValue::String(key) => key,
                _ => return Err(self.error("object key must be a string")),
            };
            if self.bump() != Some(':') {
                return Err(self.error("expected ':'"));
            }
            let value = self.value()?;
            entries.push((key, value));
            match self.bump() {
                Some(',') => continue,
                Some(')') => return Ok(RisonValue::Object(entries)),
                _ => return Err(self.error("expected ',' or ')' in object")),
            }
        }
    }

    fn array(&mut self) -> Result<RisonValue, AppError> {
        let mut items = Vec::new();
        if self.peek() == Some(')') {
            self.pos += 1;
            return Ok(RisonValue::Array(items));
        }
        loop {
            items.push(self.value()?);
            match self.bump() {
                Some(',') => continue,
                Some(')') => return Ok(RisonValue::Array(items)),
                _ => return Err(self.error("expected ',' or ')' in array")),
            }
        }
    }

    fn quoted(&mut self) -> Result<String, AppError> {
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some('\'') => return Ok(out),
                Some('!') => match self.bump() {
                    Some(c @ ('!' | '\'')) => out.push(c),
                    _ => return Err(self.error("invalid string escape")),
                },
                Some(c) => out.push(c),
            }
        }
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn number(&mut self) -> Result<RisonValue, AppError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.pos += 1;
        }
        if self.digits() == 0 {
            return Err(self.error("invalid number"));
        }
        if self.peek() == Some('.') {
            self.pos += 1;
            if self.digits() == 0 {
                return Err(self.error("invalid fraction"));
            }
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some('+' | '-')) {
                self.pos += 1;
            }
            if self.digits() == 0 {
                return Err(self.error("invalid exponent"));
            }
        }
        Ok(RisonValue::Number(self.chars[start..self.pos].iter().collect()))
    }

    fn id(&mut self) -> Result<String, AppError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if !NOT_IDCHAR.contains(c)) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.error("unexpected character"));
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(entries: &[(&str, RisonValue)]) -> RisonValue {
        RisonValue::Object(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    fn s(v: &str) -> RisonValue {
        RisonValue::String(v.to_string())
    }

    #[test]
    fn test_identifiers() {
        assert!(is_id("dQw4w9WgXcQ"));
        assert!(is_id("a-b_c.d"));
        assert!(is_id("héllo"));
        assert!(!is_id(""));
        assert!(!is_id("1abc"));
        assert!(!is_id("-abc"));
        assert!(!is_id("a b"));
        assert!(!is_id("https://youtu.be/x"));
        assert!(!is_id("it's"));
    }

    #[test]
    fn test_encode_samples() {
        assert_eq!(to_string(&obj(&[("kw", s("dQw4w9WgXcQ"))])), "(kw:dQw4w9WgXcQ)");
        assert_eq!(to_string(&obj(&[("kw", s("a b"))])), "(kw:'a b')");
        assert_eq!(to_string(&obj(&[("kw", s(""))])), "(kw:'')");
        assert_eq!(to_string(&s("it's!")), "'it!'s!!'");
        assert_eq!(to_string(&s("42")), "'42'");
        assert_eq!(
            to_string(&RisonValue::Array(vec![
                RisonValue::Bool(true),
                RisonValue::Null,
                RisonValue::Number("1.5".into())
            ])),
            "!(!t,!n,1.5)"
        );
        assert_eq!(to_string(&obj(&[])), "()");
    }

    #[test]
    fn test_decode_samples() {
        assert_eq!(
            from_str("(kw:'https://www.youtube.com/watch?v=x',n:-3e2,b:!f)").unwrap(),
            obj(&[
                ("kw", s("https://www.youtube.com/watch?v=x")),
                ("n", RisonValue::Number("-3e2".into())),
                ("b", RisonValue::Bool(false)),
            ])
        );
        assert_eq!(from_str("!()").unwrap(), RisonValue::Array(vec![]));
        assert_eq!(from_str("'a!!b!'c'").unwrap(), s("a!b'c"));
        assert_eq!(from_str("true").unwrap(), s("true"));
    }

    #[test]
    fn test_object_order_is_preserved() {
        let value = from_str("(z:1,a:2)").unwrap();
        assert_eq!(to_string(&value), "(z:1,a:2)");
        assert_eq!(value.get("a"), Some(&RisonValue::Number("2".into())));
        assert_eq!(value.get("missing"), None);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        for bad in [
            "", "(", "(kw", "(kw:", "(kw:abc", "(kw:abc,)", "'open", "!x", "(1:2)", "1.",
            "-", "1e", "(kw:a)(", "(kw:a b)", "'bad!escape'",
        ] {
            assert!(
                matches!(from_str(bad), Err(AppError::MalformedToken(_))),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_decode_rejects_deep_nesting() {
        for deep in ["(".repeat(100_000), "!(".repeat(100_000), "(a:".repeat(100_000)] {
            assert!(matches!(from_str(&deep), Err(AppError::MalformedToken(_))));
        }
    }

    #[test]
    fn test_decode_accepts_moderate_nesting() {
        let token = format!("{}{}", "!(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert!(from_str(&token).is_ok());

        let token = format!("{}{}", "!(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert!(matches!(from_str(&token), Err(AppError::MalformedToken(_))));
    }
}
