//! Conversion to values.
use crate::cid::Cid;
use crate::value::Value;
use std::collections::BTreeMap;

macro_rules! derive_to_value_prim {
    ($enum:ident, $ty:ty) => {
        impl From<$ty> for Value {
            fn from(t: $ty) -> Self {
                Value::$enum(t as _)
            }
        }
    };
}

macro_rules! derive_to_value {
    ($enum:ident, $ty:ty, $($fn:ident),*) => {
        impl From<$ty> for Value {
            fn from(t: $ty) -> Self {
                Value::$enum(t$(.$fn())*)
            }
        }
    };
}

derive_to_value!(Bool, bool, clone);
derive_to_value_prim!(Integer, i8);
derive_to_value_prim!(Integer, i16);
derive_to_value_prim!(Integer, i32);
derive_to_value_prim!(Integer, i64);
derive_to_value_prim!(Integer, i128);
derive_to_value_prim!(Integer, isize);
derive_to_value_prim!(Integer, u8);
derive_to_value_prim!(Integer, u16);
derive_to_value_prim!(Integer, u32);
derive_to_value_prim!(Integer, u64);
derive_to_value_prim!(Integer, usize);
derive_to_value_prim!(Float, f32);
derive_to_value_prim!(Float, f64);
derive_to_value!(String, String, into);
derive_to_value!(String, &str, to_string);
derive_to_value!(Bytes, Box<[u8]>, into_vec);
derive_to_value!(Bytes, Vec<u8>, into);
derive_to_value!(Bytes, &[u8], to_vec);
derive_to_value!(List, Vec<Value>, into);
derive_to_value!(Link, Cid, clone);
derive_to_value!(Link, &Cid, to_owned);

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(
            map.into_iter()
                .map(|(k, v)| (Value::String(k), v))
                .collect(),
        )
    }
}

impl From<Vec<(Value, Value)>> for Value {
    fn from(entries: Vec<(Value, Value)>) -> Self {
        Value::Map(entries)
    }
}
