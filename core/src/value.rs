//! Value representation.
use crate::cid::Cid;
use crate::error::TypeError;

/// A CBOR data item as admitted by the DAG-CBOR profile.
///
/// A tree of `Value`s is a strict tree: every subtree has a single owner and
/// cycles cannot be expressed. Map entries keep the order they were built or
/// decoded in; the encoder sorts them into canonical order on the way out.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Represents the absence of a value.
    Null,
    /// Represents the CBOR `undefined` simple value. Rejected by strict decoders.
    Undefined,
    /// Represents a boolean value.
    Bool(bool),
    /// Represents an integer, either major type 0 or 1 on the wire.
    ///
    /// Values outside `-2^64 ..= 2^64 - 1` cannot be encoded.
    Integer(i128),
    /// Represents a floating point value.
    Float(f64),
    /// Represents an UTF-8 string.
    String(String),
    /// Represents a sequence of bytes.
    Bytes(Vec<u8>),
    /// Represents a list.
    List(Vec<Value>),
    /// Represents a map as ordered key/value pairs.
    Map(Vec<(Value, Value)>),
    /// Represents a link (tag 42) to another block.
    Link(Cid),
    /// Represents a tagged item other than a link.
    Tag(u64, Box<Value>),
    /// Represents a simple value without a dedicated variant.
    Simple(u8),
}

/// An index into a value.
pub enum ValueIndex<'a> {
    /// An index into a list.
    List(usize),
    /// An owned index into a map.
    Map(String),
    /// An index into a map.
    MapRef(&'a str),
}

impl<'a> From<usize> for ValueIndex<'a> {
    fn from(index: usize) -> Self {
        Self::List(index)
    }
}

impl<'a> From<String> for ValueIndex<'a> {
    fn from(key: String) -> Self {
        Self::Map(key)
    }
}

impl<'a> From<&'a str> for ValueIndex<'a> {
    fn from(key: &'a str) -> Self {
        Self::MapRef(key)
    }
}

fn lookup<'v>(map: &'v [(Value, Value)], key: &str) -> Option<&'v Value> {
    map.iter().find_map(|(k, v)| match k {
        Value::String(k) if k == key => Some(v),
        _ => None,
    })
}

impl Value {
    /// Indexes into a list or a map with text keys.
    pub fn get<'a, T: Into<ValueIndex<'a>>>(&self, index: T) -> Result<&Self, TypeError> {
        let index = index.into();
        let value = match self {
            Value::List(l) => match index {
                ValueIndex::List(i) => l.get(i),
                ValueIndex::Map(ref key) => key.parse().ok().and_then(|i: usize| l.get(i)),
                ValueIndex::MapRef(key) => key.parse().ok().and_then(|i: usize| l.get(i)),
            },
            Value::Map(m) => match index {
                ValueIndex::Map(ref key) => lookup(m, key),
                ValueIndex::MapRef(key) => lookup(m, key),
                ValueIndex::List(i) => lookup(m, &i.to_string()),
            },
            _ => None,
        };
        value.ok_or_else(|| TypeError::new(index, self))
    }

    /// Returns a depth-first iterator over this value and all of its descendants.
    ///
    /// Map keys are not visited, only map values.
    pub fn iter(&self) -> ValueIter<'_> {
        ValueIter {
            stack: vec![Box::new(vec![self].into_iter())],
        }
    }

    /// Returns the links contained in this value.
    pub fn references(&self) -> impl Iterator<Item = &Cid> + '_ {
        self.iter().filter_map(|value| match value {
            Value::Link(cid) => Some(cid),
            _ => None,
        })
    }
}

/// Value iterator.
pub struct ValueIter<'a> {
    stack: Vec<Box<dyn Iterator<Item = &'a Value> + 'a>>,
}

impl<'a> Iterator for ValueIter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(iter) = self.stack.last_mut() {
                if let Some(value) = iter.next() {
                    match value {
                        Value::List(list) => {
                            self.stack.push(Box::new(list.iter()));
                        }
                        Value::Map(map) => {
                            self.stack.push(Box::new(map.iter().map(|(_, v)| v)));
                        }
                        Value::Tag(_, inner) => {
                            self.stack.push(Box::new(std::iter::once(&**inner)));
                        }
                        _ => {}
                    }
                    return Some(value);
                } else {
                    self.stack.pop();
                }
            } else {
                return None;
            }
        }
    }
}
