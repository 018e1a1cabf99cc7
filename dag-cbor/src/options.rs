//! Decoder configuration.

/// Default maximum nesting of arrays, maps and tags.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// What to do with tags other than 42.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagPolicy {
    /// Fail with `UnknownTag`.
    #[default]
    Reject,
    /// Keep them as `Value::Tag`.
    Preserve,
}

/// Which map keys are admitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapKeyPolicy {
    /// Text string keys only.
    #[default]
    TextOnly,
    /// Any value, ordered by its encoded bytes.
    Any,
}

/// Decoder options. The default is strict DAG-CBOR.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting of arrays, maps and preserved tags.
    pub max_depth: usize,
    /// Handling of tags other than 42.
    pub tags: TagPolicy,
    /// Admitted map key types.
    pub map_keys: MapKeyPolicy,
    /// Reject `undefined` and simple values without a dedicated meaning.
    pub strict_simple_values: bool,
    /// Reject floats holding an integral value.
    pub reject_integral_floats: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            tags: TagPolicy::Reject,
            map_keys: MapKeyPolicy::TextOnly,
            strict_simple_values: true,
            reject_integral_floats: false,
        }
    }
}

impl DecodeOptions {
    /// Generic canonical CBOR: unknown tags, any key type and simple values are
    /// accepted, every canonical-form rule still applies.
    ///
    /// This is the profile that accepts everything the encoder writes. The
    /// default options reject `Undefined`, `Simple`, tags other than 42 and
    /// non-text map keys.
    pub fn permissive() -> Self {
        Self {
            tags: TagPolicy::Preserve,
            map_keys: MapKeyPolicy::Any,
            strict_simple_values: false,
            ..Self::default()
        }
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the tag policy.
    pub fn with_tags(mut self, tags: TagPolicy) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the map key policy.
    pub fn with_map_keys(mut self, map_keys: MapKeyPolicy) -> Self {
        self.map_keys = map_keys;
        self
    }

    /// Sets whether simple values other than booleans and null are rejected.
    pub fn with_strict_simple_values(mut self, strict: bool) -> Self {
        self.strict_simple_values = strict;
        self
    }

    /// Sets whether floats with integral values are rejected.
    pub fn with_reject_integral_floats(mut self, reject: bool) -> Self {
        self.reject_integral_floats = reject;
        self
    }
}
