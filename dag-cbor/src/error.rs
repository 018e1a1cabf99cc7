//! CBOR error types.
use thiserror::Error;

/// Reason a tag 42 payload is not a valid link.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    /// The tagged item is not a byte string.
    #[error("link payload is not a byte string")]
    NotBytes,
    /// The byte string is empty.
    #[error("link payload is empty")]
    Empty,
    /// The byte before the CID was not the multibase identity prefix.
    #[error("invalid cid prefix: {0}")]
    InvalidPrefix(u8),
    /// The bytes after the prefix are not a CID.
    #[error("invalid cid")]
    InvalidCid,
    /// The CID does not occupy the payload exactly in its canonical form.
    #[error("non-canonical cid bytes")]
    NonCanonicalCid,
}

/// Error returned when decoding a block.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Integer, length or tag number not in its shortest form.
    #[error("Non-minimal integer encoding.")]
    MalformedInt,
    /// Indefinite length string, array or map.
    #[error("Indefinite length items are not allowed.")]
    IndefiniteLengthNotAllowed,
    /// Text string is not valid UTF-8.
    #[error("{0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    /// Map keys are not in canonical order.
    #[error("Map keys are not in canonical order.")]
    NonCanonicalMapOrder,
    /// Map contains the same key twice.
    #[error("Duplicate map key.")]
    DuplicateKey,
    /// Map key of a type the profile does not allow.
    #[error("Unsupported map key.")]
    UnsupportedMapKey,
    /// Invalid tag 42 payload.
    #[error("Invalid link: {0}")]
    InvalidLink(#[from] LinkError),
    /// Tag other than 42 while unknown tags are rejected.
    #[error("Unknown cbor tag: {0}")]
    UnknownTag(u64),
    /// Simple value, including `undefined`, rejected by a strict profile.
    #[error("Unsupported simple value: {0}")]
    UnsupportedSimpleValue(u8),
    /// Float not encoded at its narrowest exact width.
    #[error("Non-minimal float encoding.")]
    NonMinimalFloat,
    /// Float with an integral value while the profile requires integers.
    #[error("Float with an integral value.")]
    IntegralFloat,
    /// Reserved or misplaced initial byte.
    #[error("Unexpected cbor code: {0:#04x}")]
    UnexpectedCode(u8),
    /// Nesting deeper than the configured maximum.
    #[error("Nesting deeper than {0} levels.")]
    DepthExceeded(usize),
    /// Input ended in the middle of an item.
    #[error("Unexpected end of file.")]
    UnexpectedEof,
    /// Declared item count cannot fit in the remaining input.
    #[error("Length exceeds the remaining input.")]
    LengthExceedsBuffer,
    /// Bytes left over after the top-level item.
    #[error("{0} trailing bytes after the data item.")]
    TrailingBytes(usize),
}

/// Error returned when encoding a value.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Two map keys have the same encoding.
    #[error("Duplicate map key.")]
    DuplicateKey,
    /// Integer outside `-2^64 ..= 2^64 - 1`.
    #[error("Number out of cbor range.")]
    NumberOutOfRange,
    /// Simple value which collides with a dedicated initial byte or is reserved.
    #[error("Unsupported simple value: {0}")]
    UnsupportedSimpleValue(u8),
    /// Tag 42 wrapping something other than a valid link payload.
    #[error("Invalid link: {0}")]
    InvalidLink(#[from] LinkError),
    /// Io error.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Error returned by the `DagCborCodec`.
#[derive(Debug, Error)]
pub enum Error {
    /// Decode error.
    #[error("{0}")]
    Decode(#[from] DecodeError),
    /// Encode error.
    #[error("{0}")]
    Encode(#[from] EncodeError),
}
