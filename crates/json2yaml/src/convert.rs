//! File-to-file conversion: read a JSON document, transcode it, write YAML.
//!
//! The output file is only opened once the input has been read, parsed, and
//! transcoded, so a missing or malformed input never creates or truncates it.

use crate::encoder::emit;
use crate::error::{Result, TranscodeError};
use crate::options::EmitOptions;
use crate::types::Node;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Input path used when none is given.
pub const DEFAULT_INPUT: &str = "openapi.json";

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "openapi.yaml";

/// What a successful conversion read and wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub input_bytes: usize,
    pub output_bytes: usize,
    /// [`Node::kind`] of the document root.
    pub root_kind: &'static str,
}

/// Convert the JSON document at `input` into YAML at `output`.
///
/// The output is overwritten unconditionally. Errors map onto
/// [`TranscodeError::InputNotFound`], [`TranscodeError::InputUnreadable`],
/// [`TranscodeError::MalformedInput`], [`TranscodeError::RecursionLimitExceeded`],
/// [`TranscodeError::Emit`], and [`TranscodeError::OutputUnwritable`]; none are
/// retried.
pub fn convert_file(input: &Path, output: &Path, options: &EmitOptions) -> Result<ConvertSummary> {
    let json = read_input(input)?;
    debug!(path = %input.display(), bytes = json.len(), "read JSON input");

    let value: Value = serde_json::from_str(&json)?;
    let node = Node::from_json(&value, options.max_depth)?;
    debug!(root = node.kind(), depth = node.depth(), "parsed value tree");

    let yaml = emit(&node, options)?;
    fs::write(output, &yaml).map_err(|source| TranscodeError::OutputUnwritable {
        path: output.to_path_buf(),
        source,
    })?;
    debug!(path = %output.display(), bytes = yaml.len(), "wrote YAML output");

    Ok(ConvertSummary {
        input_bytes: json.len(),
        output_bytes: yaml.len(),
        root_kind: node.kind(),
    })
}

/// Read a JSON input file as UTF-8 text.
///
/// A missing path maps to [`TranscodeError::InputNotFound`]; any other failure,
/// including invalid UTF-8 or a directory, to [`TranscodeError::InputUnreadable`].
pub fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => TranscodeError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => TranscodeError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}
