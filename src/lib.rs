//! The `dagcbor` crate.
//!
//! A canonical DAG-CBOR codec. Blocks are decoded into a [`Value`] tree and
//! encoded back into the unique canonical byte form.
//!
//! ```
//! use dagcbor::{decode, encode, Value};
//!
//! let bytes = encode(&Value::List(vec![Value::Integer(1), Value::from("two")])).unwrap();
//! assert_eq!(bytes, [0x82, 0x01, 0x63, b't', b'w', b'o']);
//! assert_eq!(encode(&decode(&bytes).unwrap()).unwrap(), bytes);
//! ```

#![deny(missing_docs)]
#![deny(warnings)]

pub use dagcbor_codec as cbor;
pub use dagcbor_core::cid;
pub use dagcbor_core::codec::Codec;
pub use dagcbor_core::error::{TypeError, TypeErrorType};
pub use dagcbor_core::multihash;
pub use dagcbor_core::value::{Value, ValueIndex, ValueIter};
pub use dagcbor_core::Cid;

pub use dagcbor_codec::{
    decode, decode_with, encode, encode_to, DagCborCodec, DecodeError, DecodeOptions,
    EncodeError, Error, LinkError, MapKeyPolicy, TagPolicy,
};
