//! Serializer settings passed explicitly into every transcoding call.

/// Nesting limit applied when no other limit is configured.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Immutable YAML emission policy.
///
/// The default is the conversion policy of the tool: mapping keys keep their
/// source order. Non-ASCII text is always written literally.
///
/// ```
/// use json2yaml::EmitOptions;
/// let opts = EmitOptions::default().with_sort_keys(true).with_max_depth(16);
/// assert!(opts.sort_keys);
/// assert_eq!(opts.max_depth, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Emit mapping keys in byte order instead of source order.
    pub sort_keys: bool,
    /// Maximum collection nesting before emission fails.
    pub max_depth: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            sort_keys: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EmitOptions {
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
