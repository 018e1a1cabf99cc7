//! Core types used by the dag-cbor codec.
#![deny(missing_docs)]
#![deny(warnings)]

#[cfg(feature = "arb")]
mod arb;
pub mod codec;
pub mod convert;
pub mod error;
pub mod value;

pub use cid;
pub use multihash;

pub use cid::Cid;
pub use value::Value;
