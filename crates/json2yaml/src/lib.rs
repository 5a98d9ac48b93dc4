//! # json2yaml
//!
//! Pure-Rust transcoder from **JSON** to **YAML** block style.
//!
//! JSON is parsed with `serde_json` and written with `serde_yaml`. The
//! transcoder keeps mapping keys in the order they appear in the source
//! document, writes non-ASCII text literally, keeps integers (of any width)
//! and floats distinct, and quotes any string a YAML reader would otherwise
//! take for a null, boolean, or number. Key order and the nesting limit are
//! set through an explicit [`EmitOptions`] value rather than global settings.
//!
//! ## Quick start
//!
//! ```rust
//! use json2yaml::{encode, encode_with, EmitOptions};
//!
//! let json = r#"{"b":1,"a":"héllo","flag":"true","ratio":3.0}"#;
//! let yaml = encode(json).unwrap();
//! assert_eq!(yaml, "b: 1\na: héllo\nflag: 'true'\nratio: 3.0\n");
//!
//! let sorted = encode_with(json, &EmitOptions::default().with_sort_keys(true)).unwrap();
//! assert!(sorted.starts_with("a: héllo\nb: 1\n"));
//! ```
//!
//! ## Modules
//!
//! - [`types`] — `Node`, the value tree lowered from parsed JSON
//! - [`options`] — `EmitOptions`, the serializer policy
//! - [`encoder`] — value tree → YAML text (`emit`, `encode*`)
//! - [`convert`] — JSON file → YAML file (`convert_file`)
//! - [`error`] — Error types for read/parse/emit/write failures

pub mod convert;
pub mod encoder;
pub mod error;
pub mod options;
pub mod types;

pub use convert::{convert_file, read_input, ConvertSummary, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use encoder::{emit, encode, encode_value, encode_with};
pub use error::{Result, TranscodeError};
pub use options::{EmitOptions, DEFAULT_MAX_DEPTH};
pub use types::Node;
