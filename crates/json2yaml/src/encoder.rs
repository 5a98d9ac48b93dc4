//! YAML Encoder — converts a JSON value tree into a YAML block-style document.
//!
//! Serialization is done by `serde_yaml` over the [`Node`] tree, so key order is
//! whatever order the `Node::Mapping` entries are in. [`EmitOptions`] is applied
//! to the tree before it is handed over:
//!
//! - **Key order**: source order, or byte order when `sort_keys` is set
//! - **Depth**: trees nested deeper than `max_depth` are rejected
//!
//! Everything else follows from `serde_yaml`: block layout with `{}`/`[]` for
//! empty collections, indentless sequences under keys, literal non-ASCII text
//! (characters beyond the Basic Multilingual Plane come out escaped),
//! and single quotes around strings that would otherwise read back as null, a
//! boolean, or a number.
//!
//! # Example
//! ```
//! use json2yaml::encode;
//! let json = r#"{"paths":{},"info":{"title":"API","version":"1.0"}}"#;
//! let yaml = encode(json).unwrap();
//! assert_eq!(yaml, "paths: {}\ninfo:\n  title: API\n  version: '1.0'\n");
//! ```

use crate::error::{Result, TranscodeError};
use crate::options::EmitOptions;
use crate::types::Node;
use serde_json::Value;
use std::borrow::Cow;

/// Encode a JSON string into YAML using the default policy.
///
/// Parses the input as JSON, then emits the value tree. Returns
/// [`TranscodeError::MalformedInput`] if the input is not valid JSON.
pub fn encode(json: &str) -> Result<String> {
    encode_with(json, &EmitOptions::default())
}

/// Encode a JSON string into YAML with explicit options.
pub fn encode_with(json: &str, options: &EmitOptions) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    encode_value(&value, options)
}

/// Encode an already-parsed JSON value into YAML.
pub fn encode_value(value: &Value, options: &EmitOptions) -> Result<String> {
    let node = Node::from_json(value, options.max_depth)?;
    emit(&node, options)
}

/// Emit a value tree as a YAML document. The result always ends with a newline.
///
/// Fails with [`TranscodeError::RecursionLimitExceeded`] for trees nested deeper
/// than `options.max_depth`, and with [`TranscodeError::Emit`] if the serializer
/// rejects the tree.
pub fn emit(node: &Node, options: &EmitOptions) -> Result<String> {
    if node.depth() > options.max_depth {
        return Err(TranscodeError::RecursionLimitExceeded {
            limit: options.max_depth,
        });
    }

    let node = if options.sort_keys {
        let mut sorted = node.clone();
        sorted.sort_keys();
        Cow::Owned(sorted)
    } else {
        Cow::Borrowed(node)
    };

    Ok(serde_yaml::to_string(&*node)?)
}
