//! Front-matter encoding and parsing
//!
//! Exported post documents carry a fenced `key: value` block ahead of the
//! body. String values are JSON-quoted, arrays use JSON list syntax, and
//! `true`/`false`/`null` are bare literals. The parser is a line-oriented
//! scanner: split at the first colon, trim, then decode the value shape.

use indexmap::IndexMap;
use thiserror::Error;

/// Errors produced by the front-matter scanner
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrontmatterError {
    #[error("document does not start with a front-matter block")]
    MissingOpenDelimiter,

    #[error("front-matter block is never closed")]
    MissingCloseDelimiter,

    #[error("front-matter line {line} has no `key: value` separator")]
    MissingSeparator { line: usize },

    #[error("front-matter key `{key}` has unrecognized value `{raw}`")]
    UnrecognizedValue { key: String, raw: String },
}

/// A front-matter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    List(Vec<String>),
    Bool(bool),
    Null,
}

impl Value {
    /// Encode a value using the on-disk conventions
    pub fn encode(&self) -> String {
        match self {
            Value::Str(s) => serde_json::Value::String(s.clone()).to_string(),
            Value::List(items) => {
                let items: Vec<serde_json::Value> = items
                    .iter()
                    .map(|s| serde_json::Value::String(s.clone()))
                    .collect();
                serde_json::Value::Array(items).to_string()
            }
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
        }
    }

    /// Decode a raw value, or `None` if it matches no known shape
    fn decode(raw: &str) -> Option<Value> {
        match raw {
            "true" => return Some(Value::Bool(true)),
            "false" => return Some(Value::Bool(false)),
            "null" => return Some(Value::Null),
            _ => {}
        }

        if raw.starts_with('[') && raw.ends_with(']') {
            return serde_json::from_str::<Vec<String>>(raw).ok().map(Value::List);
        }

        if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            // JSON decoding handles escapes; fall back to stripping the
            // surrounding quotes for values that are not valid JSON strings
            let decoded = serde_json::from_str::<String>(raw)
                .unwrap_or_else(|_| raw[1..raw.len() - 1].to_string());
            return Some(Value::Str(decoded));
        }

        if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
            return Some(Value::Str(raw[1..raw.len() - 1].to_string()));
        }

        None
    }
}

/// An ordered key-value mapping fenced by `---` lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, Value>,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a document into its front-matter block and body.
    ///
    /// The body starts after the closing fence and the blank separator line.
    /// A document without the delimiter structure is a hard parse failure.
    pub fn parse(input: &str) -> Result<(Self, &str), FrontmatterError> {
        let rest = input
            .strip_prefix("---\n")
            .or_else(|| input.strip_prefix("---\r\n"))
            .ok_or(FrontmatterError::MissingOpenDelimiter)?;

        let end = rest
            .find("\n---")
            .ok_or(FrontmatterError::MissingCloseDelimiter)?;
        let block = &rest[..end];

        let mut fields = IndexMap::new();
        for (i, line) in block.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            // line numbers are 1-based and count the opening fence
            let colon = line
                .find(':')
                .ok_or(FrontmatterError::MissingSeparator { line: i + 2 })?;
            let key = line[..colon].trim();
            let raw = line[colon + 1..].trim();
            let value =
                Value::decode(raw).ok_or_else(|| FrontmatterError::UnrecognizedValue {
                    key: key.to_string(),
                    raw: raw.to_string(),
                })?;
            fields.insert(key.to_string(), value);
        }

        // skip the closing fence line ending and the blank separator line
        let mut body = &rest[end + 4..];
        for _ in 0..2 {
            body = body
                .strip_prefix("\r\n")
                .or_else(|| body.strip_prefix('\n'))
                .unwrap_or(body);
        }

        Ok((Self { fields }, body))
    }

    /// Render the fenced block, delimiters included, with a trailing newline
    pub fn to_block(&self) -> String {
        let mut out = String::from("---\n");
        for (key, value) in &self.fields {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&value.encode());
            out.push('\n');
        }
        out.push_str("---\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block() {
        let doc = "---\nid: \"hello\"\ntags: [\"a\", \"b\"]\nfeatured: true\n---\n\nBody text.";
        let (fm, body) = FrontMatter::parse(doc).unwrap();
        assert_eq!(fm.get("id"), Some(&Value::Str("hello".to_string())));
        assert_eq!(
            fm.get("tags"),
            Some(&Value::List(vec!["a".to_string(), "b".to_string()]))
        );
        assert_eq!(fm.get("featured"), Some(&Value::Bool(true)));
        assert_eq!(body, "Body text.");
    }

    #[test]
    fn test_round_trip() {
        let mut fm = FrontMatter::new();
        fm.insert("title", Value::Str("Rust: 2026 \"edition\"".to_string()));
        fm.insert("tags", Value::List(vec!["a b".to_string(), "c".to_string()]));
        fm.insert("extra", Value::Null);
        fm.insert("featured", Value::Bool(false));

        let doc = format!("{}\nThe body.", fm.to_block());
        let (parsed, body) = FrontMatter::parse(&doc).unwrap();
        assert_eq!(parsed, fm);
        assert_eq!(body, "The body.");
    }

    #[test]
    fn test_value_splits_at_first_colon() {
        let doc = "---\ntitle: \"Rust: Fast and Safe\"\n---\n\nx";
        let (fm, _) = FrontMatter::parse(doc).unwrap();
        assert_eq!(
            fm.get("title"),
            Some(&Value::Str("Rust: Fast and Safe".to_string()))
        );
    }

    #[test]
    fn test_single_quoted_string() {
        let doc = "---\nauthor: 'Jane'\n---\n\nx";
        let (fm, _) = FrontMatter::parse(doc).unwrap();
        assert_eq!(fm.get("author"), Some(&Value::Str("Jane".to_string())));
    }

    #[test]
    fn test_empty_body() {
        let doc = "---\nid: \"x\"\n---\n\n";
        let (fm, body) = FrontMatter::parse(doc).unwrap();
        assert!(!fm.is_empty());
        assert_eq!(body, "");
    }

    #[test]
    fn test_missing_open_delimiter() {
        let err = FrontMatter::parse("id: \"x\"\n---\n\nbody").unwrap_err();
        assert_eq!(err, FrontmatterError::MissingOpenDelimiter);
    }

    #[test]
    fn test_missing_close_delimiter() {
        let err = FrontMatter::parse("---\nid: \"x\"\nbody").unwrap_err();
        assert_eq!(err, FrontmatterError::MissingCloseDelimiter);
    }

    #[test]
    fn test_line_without_separator() {
        let err = FrontMatter::parse("---\nid \"x\"\n---\n\nbody").unwrap_err();
        assert_eq!(err, FrontmatterError::MissingSeparator { line: 2 });
    }

    #[test]
    fn test_unrecognized_value() {
        let err = FrontMatter::parse("---\nfeatured: maybe\n---\n\nbody").unwrap_err();
        assert_eq!(
            err,
            FrontmatterError::UnrecognizedValue {
                key: "featured".to_string(),
                raw: "maybe".to_string(),
            }
        );
    }

    #[test]
    fn test_encode_escapes_quotes() {
        let value = Value::Str("say \"hi\"".to_string());
        assert_eq!(value.encode(), r#""say \"hi\"""#);
        assert_eq!(Value::decode(&value.encode()), Some(value));
    }
}
