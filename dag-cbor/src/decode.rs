//! CBOR decoder.
use crate::cbor::*;
use crate::error::{DecodeError as Error, LinkError};
use crate::options::{DecodeOptions, MapKeyPolicy, TagPolicy};
use crate::profile::{self, FloatWidth};
use byteorder::{BigEndian, ByteOrder};
use core::cmp::Ordering;
use dagcbor_core::Value;
use half::f16;

type Result<T> = core::result::Result<T, Error>;

/// Decodes a single DAG-CBOR data item spanning the whole of `bytes`.
pub fn decode(bytes: &[u8], options: &DecodeOptions) -> Result<Value> {
    let mut decoder = Decoder::new(bytes, options);
    match decoder.decode() {
        Ok(value) => {
            log::trace!("decoded dag-cbor block of {} bytes", bytes.len());
            Ok(value)
        }
        Err(err) => {
            log::debug!(
                "rejected dag-cbor block at offset {}/{}: {}",
                decoder.offset(),
                bytes.len(),
                err
            );
            Err(err)
        }
    }
}

/// Recursive descent decoder over a borrowed buffer.
///
/// Every read is bounds checked against the buffer, and claimed lengths are
/// checked before anything is allocated for them.
pub struct Decoder<'a> {
    input: &'a [u8],
    pos: usize,
    depth: usize,
    options: &'a DecodeOptions,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder for `input`.
    pub fn new(input: &'a [u8], options: &'a DecodeOptions) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
            options,
        }
    }

    /// Current offset into the input.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Decodes one data item and fails if any input is left over.
    pub fn decode(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        match self.remaining() {
            0 => Ok(value),
            n => Err(Error::TrailingBytes(n)),
        }
    }

    fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::UnexpectedEof);
        }
        let input = self.input;
        let bytes = &input[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_u16(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.take(2)?))
    }

    fn read_u32(&mut self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.take(4)?))
    }

    fn read_u64(&mut self) -> Result<u64> {
        Ok(BigEndian::read_u64(self.take(8)?))
    }

    /// Reads the argument of an integer, length or tag head and checks that
    /// the head is the shortest one possible.
    fn read_uint(&mut self, major: Major) -> Result<u64> {
        let info = major.info();
        let value = match info {
            0..=23 => return Ok(u64::from(info)),
            INFO_U8 => u64::from(self.read_u8()?),
            INFO_U16 => u64::from(self.read_u16()?),
            INFO_U32 => u64::from(self.read_u32()?),
            INFO_U64 => self.read_u64()?,
            INFO_INDEFINITE => {
                return Err(match major.kind() {
                    MajorKind::ByteString
                    | MajorKind::TextString
                    | MajorKind::Array
                    | MajorKind::Map => Error::IndefiniteLengthNotAllowed,
                    _ => Error::UnexpectedCode(major.into()),
                })
            }
            _ => return Err(Error::UnexpectedCode(major.into())),
        };
        if !profile::is_minimal_int_encoding(info, value) {
            return Err(Error::MalformedInt);
        }
        Ok(value)
    }

    fn read_len(&mut self, major: Major) -> Result<usize> {
        let len = self.read_uint(major)?;
        usize::try_from(len).map_err(|_| Error::LengthExceedsBuffer)
    }

    /// Reads an item count, rejecting counts the rest of the input cannot
    /// possibly hold with `min_item_len` bytes per item.
    fn read_count(&mut self, major: Major, min_item_len: usize) -> Result<usize> {
        let len = self.read_len(major)?;
        match len.checked_mul(min_item_len) {
            Some(needed) if needed <= self.remaining() => Ok(len),
            _ => Err(Error::LengthExceedsBuffer),
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(Error::DepthExceeded(self.options.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_value(&mut self) -> Result<Value> {
        let major = Major::from(self.read_u8()?);
        let value = match major.kind() {
            MajorKind::UnsignedInt => Value::Integer(i128::from(self.read_uint(major)?)),
            MajorKind::NegativeInt => Value::Integer(-1 - i128::from(self.read_uint(major)?)),
            MajorKind::ByteString => {
                let len = self.read_len(major)?;
                Value::Bytes(self.take(len)?.to_vec())
            }
            MajorKind::TextString => {
                let len = self.read_len(major)?;
                let string = core::str::from_utf8(self.take(len)?)?;
                Value::String(string.to_owned())
            }
            MajorKind::Array => self.parse_list(major)?,
            MajorKind::Map => self.parse_map(major)?,
            MajorKind::Tag => self.parse_tag(major)?,
            MajorKind::Other => self.parse_other(major)?,
        };
        Ok(value)
    }

    fn parse_list(&mut self, major: Major) -> Result<Value> {
        let len = self.read_count(major, 1)?;
        self.enter()?;
        let mut list = Vec::with_capacity(len);
        for _ in 0..len {
            list.push(self.parse_value()?);
        }
        self.leave();
        Ok(Value::List(list))
    }

    fn parse_map(&mut self, major: Major) -> Result<Value> {
        let len = self.read_count(major, 2)?;
        self.enter()?;
        let input = self.input;
        let mut map = Vec::with_capacity(len);
        let mut prev_key: Option<&'a [u8]> = None;
        for _ in 0..len {
            let start = self.pos;
            if self.options.map_keys == MapKeyPolicy::TextOnly {
                let next = input.get(start).copied().ok_or(Error::UnexpectedEof)?;
                if Major::from(next).kind() != MajorKind::TextString {
                    return Err(Error::UnsupportedMapKey);
                }
            }
            let key = self.parse_value()?;
            // Every nested item was checked for canonical form, so the input
            // bytes of the key are its canonical encoding.
            let key_bytes = &input[start..self.pos];
            if let Some(prev_key) = prev_key {
                match profile::compare_canonical_keys(prev_key, key_bytes) {
                    Ordering::Less => {}
                    Ordering::Equal => return Err(Error::DuplicateKey),
                    Ordering::Greater => return Err(Error::NonCanonicalMapOrder),
                }
            }
            prev_key = Some(key_bytes);
            let value = self.parse_value()?;
            map.push((key, value));
        }
        self.leave();
        Ok(Value::Map(map))
    }

    fn parse_tag(&mut self, major: Major) -> Result<Value> {
        let tag = self.read_uint(major)?;
        if tag == LINK_TAG {
            return self.parse_link();
        }
        match self.options.tags {
            TagPolicy::Reject => Err(Error::UnknownTag(tag)),
            TagPolicy::Preserve => {
                self.enter()?;
                let inner = self.parse_value()?;
                self.leave();
                Ok(Value::Tag(tag, Box::new(inner)))
            }
        }
    }

    fn parse_link(&mut self) -> Result<Value> {
        let major = Major::from(self.read_u8()?);
        if major.kind() != MajorKind::ByteString {
            return Err(LinkError::NotBytes.into());
        }
        let len = self.read_len(major)?;
        let cid = profile::parse_link(self.take(len)?)?;
        Ok(Value::Link(cid))
    }

    fn parse_other(&mut self, major: Major) -> Result<Value> {
        let value = match u8::from(major) {
            FALSE => Value::Bool(false),
            TRUE => Value::Bool(true),
            NULL => Value::Null,
            UNDEFINED => {
                if self.options.strict_simple_values {
                    return Err(Error::UnsupportedSimpleValue(major.info()));
                }
                Value::Undefined
            }
            SIMPLE_U8 => {
                let simple = self.read_u8()?;
                if simple < 32 {
                    return Err(Error::UnexpectedCode(SIMPLE_U8));
                }
                self.simple(simple)?
            }
            F16 => {
                let bits = self.read_u16()?;
                let value = f16::from_bits(bits).to_f64();
                if value.is_nan() && bits != profile::CANONICAL_NAN_F16 {
                    return Err(Error::NonMinimalFloat);
                }
                self.float(FloatWidth::Half, value)?
            }
            F32 => {
                let value = f64::from(f32::from_bits(self.read_u32()?));
                self.float(FloatWidth::Single, value)?
            }
            F64 => {
                let value = f64::from_bits(self.read_u64()?);
                self.float(FloatWidth::Double, value)?
            }
            // Only valid as the terminator of indefinite length items.
            BREAK => return Err(Error::UnexpectedCode(BREAK)),
            _ if major.info() < 20 => self.simple(major.info())?,
            code => return Err(Error::UnexpectedCode(code)),
        };
        Ok(value)
    }

    fn simple(&self, simple: u8) -> Result<Value> {
        if self.options.strict_simple_values {
            return Err(Error::UnsupportedSimpleValue(simple));
        }
        Ok(Value::Simple(simple))
    }

    fn float(&self, width: FloatWidth, value: f64) -> Result<Value> {
        if !profile::is_minimal_float_width(width, value) {
            return Err(Error::NonMinimalFloat);
        }
        if self.options.reject_integral_floats && value.is_finite() && value.fract() == 0.0 {
            return Err(Error::IntegralFloat);
        }
        Ok(Value::Float(value))
    }
}
