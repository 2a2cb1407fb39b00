//! Read access to an already-decoded JSON/YAML document.
//!
//! `Node` borrows one `serde_json::Value` and remembers where it sits in the
//! document, so every lookup failure can name the offending location. All
//! "missing vs. present-but-wrong-shape" decisions are made here: lookups on
//! absent or non-container nodes yield empty results, while coercing a
//! container to a scalar is a `TypeMismatch`.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::ParseError;

/// A located, read-only view of one node of the decoded document.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: &'a Value,
    pointer: String,
}

impl<'a> Node<'a> {
    /// Wrap the document root.
    pub fn root(value: &'a Value) -> Self {
        Self {
            value,
            pointer: String::new(),
        }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// The node's position as a `#`-prefixed JSON pointer, e.g. `#/paths/~1pets/get`.
    pub fn location(&self) -> String {
        format!("#{}", self.pointer)
    }

    /// The location of a child key, whether or not the child exists.
    pub fn child_location(&self, key: &str) -> String {
        format!("#{}/{}", self.pointer, escape_pointer_token(key))
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn child(&self, token: &str, value: &'a Value) -> Node<'a> {
        Node {
            value,
            pointer: format!("{}/{}", self.pointer, escape_pointer_token(token)),
        }
    }

    fn mismatch(&self, expected: &'static str) -> ParseError {
        ParseError::TypeMismatch {
            location: self.location(),
            expected,
        }
    }

    /// Look up `key`. Absent when this node is not an object or lacks the key.
    pub fn field(&self, key: &str) -> Option<Node<'a>> {
        self.value
            .as_object()
            .and_then(|map| map.get(key))
            .map(|value| self.child(key, value))
    }

    /// Like [`Node::field`], but an explicit `null` also counts as absent.
    pub fn present_field(&self, key: &str) -> Option<Node<'a>> {
        self.field(key).filter(|node| !node.is_null())
    }

    /// Coerce a scalar to text. Numbers and booleans use their literal form.
    pub fn as_string(&self) -> Result<String, ParseError> {
        match self.value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => Err(self.mismatch("a string")),
        }
    }

    /// Coerce to a boolean. The strings `"true"` and `"false"` are accepted.
    pub fn as_bool(&self) -> Result<bool, ParseError> {
        match self.value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s == "true" => Ok(true),
            Value::String(s) if s == "false" => Ok(false),
            _ => Err(self.mismatch("a boolean")),
        }
    }

    /// Array of scalars as strings. A non-array yields an empty list.
    pub fn as_string_list(&self) -> Result<Vec<String>, ParseError> {
        self.as_list().iter().map(Node::as_string).collect()
    }

    /// Array elements in order. A non-array yields an empty list.
    pub fn as_list(&self) -> Vec<Node<'a>> {
        match self.value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| self.child(&i.to_string(), item))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Object members keyed by name, in source order. A non-object yields an empty map.
    pub fn as_field_map(&self) -> IndexMap<String, Node<'a>> {
        self.as_entries().into_iter().collect()
    }

    /// Object members as `(key, node)` pairs, in source order.
    pub fn as_entries(&self) -> Vec<(String, Node<'a>)> {
        match self.value {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| (key.clone(), self.child(key, value)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Optional string field; absent and `null` both give `None`.
    pub fn opt_string(&self, key: &str) -> Result<Option<String>, ParseError> {
        self.present_field(key).map(|n| n.as_string()).transpose()
    }

    /// Mandatory string field.
    pub fn required_string(&self, key: &str) -> Result<String, ParseError> {
        self.opt_string(key)?
            .ok_or_else(|| ParseError::MissingField {
                location: self.location(),
                field: key.to_string(),
            })
    }

    pub fn opt_bool(&self, key: &str) -> Result<Option<bool>, ParseError> {
        self.present_field(key).map(|n| n.as_bool()).transpose()
    }

    /// String list under `key`; empty when absent.
    pub fn string_list(&self, key: &str) -> Result<Vec<String>, ParseError> {
        match self.field(key) {
            Some(node) => node.as_string_list(),
            None => Ok(Vec::new()),
        }
    }

    /// Array elements under `key`; empty when absent.
    pub fn list(&self, key: &str) -> Vec<Node<'a>> {
        self.field(key).map(|n| n.as_list()).unwrap_or_default()
    }

    /// Object members under `key`; empty when absent.
    pub fn entries(&self, key: &str) -> Vec<(String, Node<'a>)> {
        self.field(key).map(|n| n.as_entries()).unwrap_or_default()
    }
}

/// RFC 6901 token escaping.
fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_absent_on_non_object() {
        let doc = json!(["a", "b"]);
        let root = Node::root(&doc);
        assert!(root.field("a").is_none());

        let doc = json!({"a": 1});
        assert!(Node::root(&doc).field("b").is_none());
        assert!(Node::root(&doc).field("a").is_some());
    }

    #[test]
    fn test_as_string_coerces_scalars() {
        let doc = json!({"s": "x", "i": 3, "f": 2.0, "b": true});
        let root = Node::root(&doc);
        assert_eq!(root.field("s").unwrap().as_string().unwrap(), "x");
        assert_eq!(root.field("i").unwrap().as_string().unwrap(), "3");
        assert_eq!(root.field("f").unwrap().as_string().unwrap(), "2.0");
        assert_eq!(root.field("b").unwrap().as_string().unwrap(), "true");
    }

    #[test]
    fn test_as_string_rejects_containers() {
        let doc = json!({"o": {}, "a": [], "n": null});
        let root = Node::root(&doc);
        for key in ["o", "a", "n"] {
            let err = root.field(key).unwrap().as_string().unwrap_err();
            match err {
                ParseError::TypeMismatch { location, .. } => {
                    assert_eq!(location, format!("#/{key}"));
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_as_bool() {
        let doc = json!({"t": true, "s": "false", "x": 1});
        let root = Node::root(&doc);
        assert!(root.field("t").unwrap().as_bool().unwrap());
        assert!(!root.field("s").unwrap().as_bool().unwrap());
        assert!(root.field("x").unwrap().as_bool().is_err());
    }

    #[test]
    fn test_lists_default_to_empty() {
        let doc = json!({"tags": ["a", "b"], "scalar": "x"});
        let root = Node::root(&doc);
        assert_eq!(root.string_list("tags").unwrap(), vec!["a", "b"]);
        assert!(root.string_list("missing").unwrap().is_empty());
        assert!(root.string_list("scalar").unwrap().is_empty());
        assert!(root.list("missing").is_empty());
        assert!(root.entries("tags").is_empty());
    }

    #[test]
    fn test_entries_preserve_order() {
        let doc = json!({"props": {"zeta": 1, "alpha": 2, "mid": 3}});
        let keys: Vec<String> = Node::root(&doc)
            .entries("props")
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_location_escapes_tokens() {
        let doc = json!({"paths": {"/pets/{id}": {"get": {"tags": ["x"]}}}});
        let root = Node::root(&doc);
        let get = root
            .field("paths")
            .and_then(|p| p.field("/pets/{id}"))
            .and_then(|p| p.field("get"))
            .unwrap();
        assert_eq!(get.location(), "#/paths/~1pets~1{id}/get");
        assert_eq!(get.list("tags")[0].location(), "#/paths/~1pets~1{id}/get/tags/0");
    }

    #[test]
    fn test_required_string_reports_missing() {
        let doc = json!({"in": "query", "name": null});
        let err = Node::root(&doc).required_string("name").unwrap_err();
        assert!(matches!(err, ParseError::MissingField { field, .. } if field == "name"));
    }
}
