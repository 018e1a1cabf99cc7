//! Random value generation for property tests.
use crate::cid::Cid;
use crate::multihash::MultihashGeneric;
use crate::value::Value;
use quickcheck::{empty_shrinker, Arbitrary, Gen};
use std::collections::BTreeMap;

const MAX_NESTING: usize = 4;
const LINK_CODECS: [u64; 3] = [0x55, 0x70, 0x71];

fn arbitrary_integer(g: &mut Gen) -> i128 {
    match u8::arbitrary(g) % 4 {
        0 => i128::from(u64::arbitrary(g)),
        1 => -1 - i128::from(u64::arbitrary(g)),
        2 => i128::from(i8::arbitrary(g)),
        _ => *g
            .choose(&[23, 24, 255, 256, 65_535, 65_536, -24, -25, -(1i128 << 64)])
            .unwrap_or(&0),
    }
}

fn arbitrary_float(g: &mut Gen) -> f64 {
    match u8::arbitrary(g) % 3 {
        0 => f64::from(f32::arbitrary(g)),
        1 => f64::arbitrary(g),
        _ => *g
            .choose(&[0.0, -0.0, 0.5, 1.5, 65504.0, 1.0e300, f64::INFINITY])
            .unwrap_or(&0.0),
    }
}

fn arbitrary_link(g: &mut Gen) -> Value {
    let mut digest = [0u8; 32];
    for byte in digest.iter_mut() {
        *byte = u8::arbitrary(g);
    }
    match MultihashGeneric::<64>::wrap(0x12, &digest) {
        Ok(hash) => {
            let codec = *g.choose(&LINK_CODECS).unwrap_or(&0x71);
            Value::Link(Cid::new_v1(codec, hash))
        }
        Err(_) => Value::Null,
    }
}

fn arbitrary_simple(g: &mut Gen) -> u8 {
    let value = u8::arbitrary(g);
    if (20..32).contains(&value) {
        value - 20
    } else {
        value
    }
}

fn arbitrary_value(g: &mut Gen, depth: usize) -> Value {
    let leaves = 11;
    let choices = if depth >= MAX_NESTING { leaves } else { leaves + 4 };
    match usize::arbitrary(g) % choices {
        0 => Value::Null,
        1 => Value::Undefined,
        2 => Value::Bool(bool::arbitrary(g)),
        3 | 4 => Value::Integer(arbitrary_integer(g)),
        5 => Value::Float(arbitrary_float(g)),
        6 | 7 => Value::String(String::arbitrary(g)),
        8 => Value::Bytes(Vec::arbitrary(g)),
        9 => arbitrary_link(g),
        10 => Value::Simple(arbitrary_simple(g)),
        11 => {
            let len = usize::arbitrary(g) % 8;
            Value::List((0..len).map(|_| arbitrary_value(g, depth + 1)).collect())
        }
        12 => {
            let len = usize::arbitrary(g) % 8;
            let map: BTreeMap<String, Value> = (0..len)
                .map(|_| (String::arbitrary(g), arbitrary_value(g, depth + 1)))
                .collect();
            Value::from(map)
        }
        13 => {
            let len = usize::arbitrary(g) % 4;
            let map: BTreeMap<i64, Value> = (0..len)
                .map(|_| (i64::arbitrary(g), arbitrary_value(g, depth + 1)))
                .collect();
            Value::Map(
                map.into_iter()
                    .map(|(k, v)| (Value::from(k), v))
                    .collect(),
            )
        }
        _ => {
            let tag = u64::arbitrary(g);
            let tag = if tag == 42 { 43 } else { tag };
            Value::Tag(tag, Box::new(arbitrary_value(g, depth + 1)))
        }
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        arbitrary_value(g, 0)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Value::List(list) => Box::new(list.clone().into_iter()),
            Value::Map(map) => Box::new(
                map.clone()
                    .into_iter()
                    .map(|(_, v)| v)
                    .collect::<Vec<_>>()
                    .into_iter(),
            ),
            Value::Tag(_, inner) => Box::new(std::iter::once((**inner).clone())),
            _ => empty_shrinker(),
        }
    }
}
