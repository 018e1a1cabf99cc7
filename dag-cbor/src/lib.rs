//! DAG-CBOR codec.
//!
//! Decoding accepts only canonical DAG-CBOR: shortest integer heads, floats at
//! their narrowest width, definite lengths, map keys sorted by their encoded
//! bytes and tag 42 links. Encoding always produces that form, so for any
//! block `b` the decoder accepts, `encode(&decode(b)?)? == b`.
#![deny(missing_docs)]
#![deny(warnings)]

pub use dagcbor_core::codec::Codec;
pub use dagcbor_core::{Cid, Value};
use std::io::Write;

pub mod cbor;
pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod profile;

pub use error::{DecodeError, EncodeError, Error, LinkError};
pub use options::{DecodeOptions, MapKeyPolicy, TagPolicy, DEFAULT_MAX_DEPTH};

/// DAG-CBOR codec.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DagCborCodec {
    options: DecodeOptions,
}

impl DagCborCodec {
    /// Multicodec code of DAG-CBOR.
    pub const CODE: u64 = 0x71;

    /// Creates a codec decoding with `options`.
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// The decoder options in use.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }
}

impl Codec for DagCborCodec {
    type Error = Error;

    fn encode(&self, value: &Value) -> Result<Box<[u8]>, Self::Error> {
        Ok(encode(value)?.into_boxed_slice())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value, Self::Error> {
        Ok(decode_with(bytes, &self.options)?)
    }
}

/// Decodes a strict DAG-CBOR block.
pub fn decode(bytes: &[u8]) -> Result<Value, DecodeError> {
    decode::decode(bytes, &DecodeOptions::default())
}

/// Decodes a block with the given options.
pub fn decode_with(bytes: &[u8], options: &DecodeOptions) -> Result<Value, DecodeError> {
    decode::decode(bytes, options)
}

/// Encodes a value into canonical DAG-CBOR.
///
/// Trees outside the DAG-CBOR data model only decode again with
/// [`DecodeOptions::permissive`].
pub fn encode(value: &Value) -> Result<Vec<u8>, EncodeError> {
    encode::encode(value)
}

/// Encodes a value into a writer.
///
/// On error, a prefix of the encoding may already have been written.
pub fn encode_to<W: Write>(value: &Value, mut w: W) -> Result<(), EncodeError> {
    encode::write_value(&mut w, value)
}
