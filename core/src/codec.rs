//! `Value` codecs.
use crate::value::Value;

/// Codec trait.
///
/// Implementations are stateless apart from their configuration, so a single
/// codec may be shared between threads and called concurrently.
pub trait Codec {
    /// Error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Encodes a value into a fresh buffer.
    fn encode(&self, value: &Value) -> Result<Box<[u8]>, Self::Error>;

    /// Decodes a value from a complete buffer.
    fn decode(&self, bytes: &[u8]) -> Result<Value, Self::Error>;
}
