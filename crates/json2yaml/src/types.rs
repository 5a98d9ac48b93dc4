//! The value tree: an explicit sum type over everything a JSON document can hold.
//!
//! Parsing goes through `serde_json::Value` (with `preserve_order`), which is then
//! lowered into [`Node`]. `Node` separates integers from floats so emission never
//! has to guess from a number's runtime shape, and it keeps objects as
//! `Vec<(String, Node)>` so insertion order is structural rather than a property
//! of the map implementation.

use crate::error::{Result, TranscodeError};
use crate::options::DEFAULT_MAX_DEPTH;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;

/// A parsed document value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    /// Any JSON integer; `i128` covers both the `i64` and `u64` ranges.
    Integer(i128),
    /// Any JSON number written with a fraction or exponent.
    Float(f64),
    String(String),
    Sequence(Vec<Node>),
    /// Key-value pairs in source order.
    Mapping(Vec<(String, Node)>),
}

impl Node {
    /// Lower a parsed JSON value into a `Node`.
    ///
    /// Fails with [`TranscodeError::RecursionLimitExceeded`] when arrays/objects
    /// nest deeper than `max_depth`.
    pub fn from_json(value: &Value, max_depth: usize) -> Result<Node> {
        lower(value, 0, max_depth)
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Integer(_) => "integer",
            Node::Float(_) => "float",
            Node::String(_) => "string",
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
        }
    }

    /// Collection nesting depth. Scalars and empty collections are depth 0;
    /// `[1]` is depth 1; `{"a":[1]}` is depth 2.
    pub fn depth(&self) -> usize {
        match self {
            Node::Sequence(items) if !items.is_empty() => {
                1 + items.iter().map(Node::depth).max().unwrap_or(0)
            }
            Node::Mapping(entries) if !entries.is_empty() => {
                1 + entries.iter().map(|(_, v)| v.depth()).max().unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Reorder every mapping in the tree by key, recursively.
    pub fn sort_keys(&mut self) {
        match self {
            Node::Sequence(items) => items.iter_mut().for_each(Node::sort_keys),
            Node::Mapping(entries) => {
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));
                entries.iter_mut().for_each(|(_, v)| v.sort_keys());
            }
            _ => {}
        }
    }
}

impl TryFrom<&Value> for Node {
    type Error = TranscodeError;

    fn try_from(value: &Value) -> Result<Self> {
        Node::from_json(value, DEFAULT_MAX_DEPTH)
    }
}

fn lower(value: &Value, depth: usize, max_depth: usize) -> Result<Node> {
    Ok(match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(*b),
        Value::Number(n) => lower_number(n),
        Value::String(s) => Node::String(s.clone()),
        Value::Array(arr) if arr.is_empty() => Node::Sequence(Vec::new()),
        Value::Object(map) if map.is_empty() => Node::Mapping(Vec::new()),
        Value::Array(arr) => {
            let depth = enter(depth, max_depth)?;
            let items = arr
                .iter()
                .map(|item| lower(item, depth, max_depth))
                .collect::<Result<Vec<_>>>()?;
            Node::Sequence(items)
        }
        Value::Object(map) => {
            let depth = enter(depth, max_depth)?;
            let entries = map
                .iter()
                .map(|(k, v)| Ok((k.clone(), lower(v, depth, max_depth)?)))
                .collect::<Result<Vec<_>>>()?;
            Node::Mapping(entries)
        }
    })
}

fn enter(depth: usize, max_depth: usize) -> Result<usize> {
    let depth = depth + 1;
    if depth > max_depth {
        return Err(TranscodeError::RecursionLimitExceeded { limit: max_depth });
    }
    Ok(depth)
}

/// serde_json keeps the source text of every number, so an integer literal
/// outside the `i64`/`u64` range is recovered from that text instead of being
/// rounded through `f64`. `3.0` stays a float.
fn lower_number(n: &serde_json::Number) -> Node {
    if let Some(i) = n.as_i64() {
        return Node::Integer(i128::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Node::Integer(i128::from(u));
    }
    let text = n.to_string();
    if !text.contains(['.', 'e', 'E']) {
        if let Ok(i) = text.parse::<i128>() {
            return Node::Integer(i);
        }
    }
    Node::Float(n.as_f64().unwrap_or(f64::NAN))
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Integer(i) => {
                if let Ok(i) = i64::try_from(*i) {
                    serializer.serialize_i64(i)
                } else if let Ok(u) = u64::try_from(*i) {
                    serializer.serialize_u64(u)
                } else {
                    serializer.serialize_i128(*i)
                }
            }
            Node::Float(f) => serializer.serialize_f64(*f),
            Node::String(s) => serializer.serialize_str(s),
            Node::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}
