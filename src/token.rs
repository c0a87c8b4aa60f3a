//! Structured intermediate representation passed from classification to
//! verbalization.
//!
//! A classified token is a class name plus an ordered list of named fields,
//! serialized as `class { field: "value" field2: "value2" }`. A field value
//! is either quoted text or a nested token set (used by `measure`, which
//! wraps a whole `cardinal { ... }` or `decimal { ... }` block). The textual
//! form is the contract between the two pipeline stages: taggers emit it,
//! verbalizers parse it back.

use std::fmt;
use std::str::FromStr;

use crate::error::NormalizeError;

/// One named field of a classified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedField {
    /// Field label, e.g. `integer_part`, `day`, `currency`.
    pub name: String,
    /// Field payload.
    pub value: FieldValue,
}

/// Payload of a [`TaggedField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A double-quoted string value. Must not contain `"`.
    Text(String),
    /// A nested token set (rendered as `class { ... }` with no label).
    Nested(TokenSet),
}

/// A classified token: class name plus ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSet {
    /// Semiotic class name, e.g. `cardinal`, `money`, `date`.
    pub class: String,
    /// Fields in recognition order.
    pub fields: Vec<TaggedField>,
}

impl TokenSet {
    /// Create an empty token set for `class`.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: Vec::new(),
        }
    }

    /// Append a text field. Interior `"` characters are stripped: the wire
    /// format has no escape sequence, so a quote can never round-trip.
    pub fn push(&mut self, name: &str, value: impl Into<String>) {
        let value: String = value.into();
        let value = if value.contains('"') {
            value.replace('"', "")
        } else {
            value
        };
        self.fields.push(TaggedField {
            name: name.to_string(),
            value: FieldValue::Text(value),
        });
    }

    /// Append a nested token set under its own class name.
    pub fn push_nested(&mut self, inner: TokenSet) {
        self.fields.push(TaggedField {
            name: inner.class.clone(),
            value: FieldValue::Nested(inner),
        });
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// First text field named `name`, if present.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|f| match &f.value {
            FieldValue::Text(v) if f.name == name => Some(v.as_str()),
            _ => None,
        })
    }

    /// First nested token set with class `class`, if present.
    pub fn nested(&self, class: &str) -> Option<&TokenSet> {
        self.fields.iter().find_map(|f| match &f.value {
            FieldValue::Nested(inner) if inner.class == class => Some(inner),
            _ => None,
        })
    }

    /// Whether a field named `name` exists (text or nested).
    pub fn has(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }
}

impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.class)?;
        for field in &self.fields {
            match &field.value {
                FieldValue::Text(v) => write!(f, " {}: \"{}\"", field.name, v)?,
                FieldValue::Nested(inner) => write!(f, " {inner}")?,
            }
        }
        write!(f, " }}")
    }
}

impl FromStr for TokenSet {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = Cursor::new(s);
        let set = cursor.token_set()?;
        cursor.skip_spaces();
        if !cursor.at_end() {
            return Err(NormalizeError::Token(format!(
                "trailing input after token set: {:?}",
                cursor.rest()
            )));
        }
        Ok(set)
    }
}

/// Hand-rolled scanner over the serialized token format.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(' ') {
            self.pos += 1;
        }
    }

    fn expect(&mut self, c: char) -> Result<(), NormalizeError> {
        if self.peek() == Some(c) {
            self.bump();
            Ok(())
        } else {
            Err(NormalizeError::Token(format!(
                "expected {c:?} at {:?}",
                self.rest()
            )))
        }
    }

    /// `[a-z_][a-z0-9_]*` — class and field labels.
    fn ident(&mut self) -> Result<&'a str, NormalizeError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_lowercase() || c == '_' || (self.pos > start && c.is_ascii_digit()) {
                self.pos += 1;
            } else {
                break;
            }
        }
        if self.pos == start {
            return Err(NormalizeError::Token(format!(
                "expected identifier at {:?}",
                self.rest()
            )));
        }
        Ok(&self.input[start..self.pos])
    }

    fn quoted(&mut self) -> Result<&'a str, NormalizeError> {
        self.expect('"')?;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '"' {
                let value = &self.input[start..self.pos];
                self.bump();
                return Ok(value);
            }
            self.bump();
        }
        Err(NormalizeError::Token("unterminated quoted value".into()))
    }

    fn token_set(&mut self) -> Result<TokenSet, NormalizeError> {
        self.skip_spaces();
        let class = self.ident()?.to_string();
        self.skip_spaces();
        self.expect('{')?;
        let mut set = TokenSet::new(class);
        loop {
            self.skip_spaces();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    return Ok(set);
                }
                Some(_) => {
                    let name = self.ident()?.to_string();
                    self.skip_spaces();
                    match self.peek() {
                        Some(':') => {
                            self.bump();
                            self.skip_spaces();
                            let value = self.quoted()?.to_string();
                            set.fields.push(TaggedField {
                                name,
                                value: FieldValue::Text(value),
                            });
                        }
                        Some('{') => {
                            self.bump();
                            let mut inner = TokenSet::new(name.clone());
                            loop {
                                self.skip_spaces();
                                if self.peek() == Some('}') {
                                    self.bump();
                                    break;
                                }
                                let inner_name = self.ident()?.to_string();
                                self.skip_spaces();
                                self.expect(':')?;
                                self.skip_spaces();
                                let value = self.quoted()?.to_string();
                                inner.fields.push(TaggedField {
                                    name: inner_name,
                                    value: FieldValue::Text(value),
                                });
                            }
                            set.fields.push(TaggedField {
                                name,
                                value: FieldValue::Nested(inner),
                            });
                        }
                        other => {
                            return Err(NormalizeError::Token(format!(
                                "expected ':' or '{{' after {name:?}, found {other:?}"
                            )));
                        }
                    }
                }
                None => {
                    return Err(NormalizeError::Token("unterminated token set".into()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_serialize_flat() {
        let set = TokenSet::new("cardinal")
            .with("negative", "true")
            .with("integer", "πέντε");
        assert_eq!(
            set.to_string(),
            "cardinal { negative: \"true\" integer: \"πέντε\" }"
        );
    }

    #[test]
    fn test_serialize_nested() {
        let mut set = TokenSet::new("measure");
        set.push_nested(TokenSet::new("cardinal").with("integer", "πέντε"));
        set.push("units", "χιλιόμετρα");
        assert_eq!(
            set.to_string(),
            "measure { cardinal { integer: \"πέντε\" } units: \"χιλιόμετρα\" }"
        );
    }

    #[test]
    fn test_roundtrip_flat() {
        let set = TokenSet::new("money")
            .with("currency", "ευρώ")
            .with("integer_part", "δέκα");
        let parsed: TokenSet = set.to_string().parse().unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_roundtrip_nested() {
        let mut set = TokenSet::new("measure");
        set.push_nested(TokenSet::new("decimal").with("integer_part", "τρία"));
        set.push("units", "μέτρα");
        let parsed: TokenSet = set.to_string().parse().unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_parse_rejects_unterminated() {
        assert!("cardinal { integer: \"ένα\"".parse::<TokenSet>().is_err());
        assert!("cardinal { integer: \"ένα }".parse::<TokenSet>().is_err());
    }

    #[test]
    fn test_parse_rejects_trailing_garbage() {
        assert!(
            "cardinal { integer: \"ένα\" } tail"
                .parse::<TokenSet>()
                .is_err()
        );
    }

    #[test]
    fn test_quotes_stripped_from_values() {
        let set = TokenSet::new("whitelist").with("name", "a\"b");
        assert_eq!(set.text("name"), Some("ab"));
    }

    #[test]
    fn test_accessors() {
        let set = TokenSet::new("date")
            .with("day", "δεκαπέντε")
            .with("month", "Μαρτίου");
        assert_eq!(set.text("day"), Some("δεκαπέντε"));
        assert_eq!(set.text("year"), None);
        assert!(set.has("month"));
        assert!(!set.has("year"));
    }
}
