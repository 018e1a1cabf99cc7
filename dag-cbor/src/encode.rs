//! CBOR encoder.
use crate::cbor::*;
use crate::error::{EncodeError as Error, LinkError};
use crate::profile::{self, FloatWidth};
use byteorder::{BigEndian, ByteOrder};
use dagcbor_core::{Cid, Value};
use half::f16;
use std::io::Write;

type Result<T> = core::result::Result<T, Error>;

/// Encodes a value into a fresh buffer.
///
/// `Undefined`, `Simple`, tags other than 42 and non-text map keys are
/// written as given. Strict [`DecodeOptions`](crate::DecodeOptions) reject
/// them, so blocks containing them only round trip through
/// [`DecodeOptions::permissive`](crate::DecodeOptions::permissive).
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_value(&mut bytes, value)?;
    log::trace!("encoded dag-cbor block of {} bytes", bytes.len());
    Ok(bytes)
}

/// Writes the shortest head for `major` carrying `value`.
#[inline]
pub fn write_u64<W: Write>(w: &mut W, major: MajorKind, value: u64) -> Result<()> {
    let info = profile::minimal_info(value);
    let head = u8::from(Major::new(major, info));
    match info {
        INFO_U8 => w.write_all(&[head, value as u8])?,
        INFO_U16 => {
            let mut buf = [head, 0, 0];
            BigEndian::write_u16(&mut buf[1..], value as u16);
            w.write_all(&buf)?;
        }
        INFO_U32 => {
            let mut buf = [head, 0, 0, 0, 0];
            BigEndian::write_u32(&mut buf[1..], value as u32);
            w.write_all(&buf)?;
        }
        INFO_U64 => {
            let mut buf = [head, 0, 0, 0, 0, 0, 0, 0, 0];
            BigEndian::write_u64(&mut buf[1..], value);
            w.write_all(&buf)?;
        }
        _ => w.write_all(&[head])?,
    }
    Ok(())
}

/// Writes `null`.
#[inline]
pub fn write_null<W: Write>(w: &mut W) -> Result<()> {
    w.write_all(&[NULL])?;
    Ok(())
}

/// Writes `true` or `false`.
#[inline]
pub fn write_bool<W: Write>(w: &mut W, value: bool) -> Result<()> {
    w.write_all(&[if value { TRUE } else { FALSE }])?;
    Ok(())
}

/// Writes a tag head. The tagged item follows separately.
#[inline]
pub fn write_tag<W: Write>(w: &mut W, tag: u64) -> Result<()> {
    write_u64(w, MajorKind::Tag, tag)
}

/// Writes an integer as major type 0 or 1.
pub fn write_int<W: Write>(w: &mut W, value: i128) -> Result<()> {
    if value < 0 {
        let value = u64::try_from(-(value + 1)).map_err(|_| Error::NumberOutOfRange)?;
        write_u64(w, MajorKind::NegativeInt, value)
    } else {
        let value = u64::try_from(value).map_err(|_| Error::NumberOutOfRange)?;
        write_u64(w, MajorKind::UnsignedInt, value)
    }
}

/// Writes a float at its narrowest exact width.
pub fn write_f64<W: Write>(w: &mut W, value: f64) -> Result<()> {
    match profile::minimal_float_width(value) {
        FloatWidth::Half => {
            let bits = if value.is_nan() {
                profile::CANONICAL_NAN_F16
            } else {
                f16::from_f64(value).to_bits()
            };
            let mut buf = [F16, 0, 0];
            BigEndian::write_u16(&mut buf[1..], bits);
            w.write_all(&buf)?;
        }
        FloatWidth::Single => {
            let mut buf = [F32, 0, 0, 0, 0];
            BigEndian::write_f32(&mut buf[1..], value as f32);
            w.write_all(&buf)?;
        }
        FloatWidth::Double => {
            let mut buf = [F64, 0, 0, 0, 0, 0, 0, 0, 0];
            BigEndian::write_f64(&mut buf[1..], value);
            w.write_all(&buf)?;
        }
    }
    Ok(())
}

/// Writes a definite length byte string.
#[inline]
pub fn write_bytes<W: Write>(w: &mut W, value: &[u8]) -> Result<()> {
    write_u64(w, MajorKind::ByteString, value.len() as u64)?;
    w.write_all(value)?;
    Ok(())
}

/// Writes a definite length text string.
#[inline]
pub fn write_str<W: Write>(w: &mut W, value: &str) -> Result<()> {
    write_u64(w, MajorKind::TextString, value.len() as u64)?;
    w.write_all(value.as_bytes())?;
    Ok(())
}

/// Writes a link as tag 42 around the identity-prefixed CID bytes.
pub fn write_link<W: Write>(w: &mut W, cid: &Cid) -> Result<()> {
    let bytes = cid.to_bytes();
    write_tag(w, LINK_TAG)?;
    write_u64(w, MajorKind::ByteString, bytes.len() as u64 + 1)?;
    w.write_all(&[MULTIBASE_IDENTITY])?;
    w.write_all(&bytes)?;
    Ok(())
}

/// Writes a simple value. 20..=31 have dedicated meanings or are reserved
/// and are refused.
pub fn write_simple<W: Write>(w: &mut W, value: u8) -> Result<()> {
    match value {
        0..=19 => w.write_all(&[u8::from(Major::new(MajorKind::Other, value))])?,
        20..=31 => return Err(Error::UnsupportedSimpleValue(value)),
        _ => w.write_all(&[SIMPLE_U8, value])?,
    }
    Ok(())
}

/// Writes a definite length array.
pub fn write_list<W: Write>(w: &mut W, list: &[Value]) -> Result<()> {
    write_u64(w, MajorKind::Array, list.len() as u64)?;
    for value in list {
        write_value(w, value)?;
    }
    Ok(())
}

/// Writes a map with its entries in canonical order, whatever order they
/// are stored in.
pub fn write_map<W: Write>(w: &mut W, map: &[(Value, Value)]) -> Result<()> {
    let mut entries = Vec::with_capacity(map.len());
    for (key, value) in map {
        let mut key_bytes = Vec::new();
        write_value(&mut key_bytes, key)?;
        entries.push((key_bytes, value));
    }
    entries.sort_by(|(a, _), (b, _)| profile::compare_canonical_keys(a, b));
    if entries.windows(2).any(|pair| pair[0].0 == pair[1].0) {
        return Err(Error::DuplicateKey);
    }
    write_u64(w, MajorKind::Map, entries.len() as u64)?;
    for (key, value) in entries {
        w.write_all(&key)?;
        write_value(w, value)?;
    }
    Ok(())
}

fn write_tagged<W: Write>(w: &mut W, tag: u64, inner: &Value) -> Result<()> {
    if tag == LINK_TAG {
        let cid = match inner {
            Value::Bytes(bytes) => profile::parse_link(bytes)?,
            _ => return Err(LinkError::NotBytes.into()),
        };
        return write_link(w, &cid);
    }
    write_tag(w, tag)?;
    write_value(w, inner)
}

/// Writes any value.
pub fn write_value<W: Write>(w: &mut W, value: &Value) -> Result<()> {
    match value {
        Value::Null => write_null(w),
        Value::Undefined => {
            w.write_all(&[UNDEFINED])?;
            Ok(())
        }
        Value::Bool(b) => write_bool(w, *b),
        Value::Integer(i) => write_int(w, *i),
        Value::Float(f) => write_f64(w, *f),
        Value::Bytes(b) => write_bytes(w, b),
        Value::String(s) => write_str(w, s),
        Value::List(l) => write_list(w, l),
        Value::Map(m) => write_map(w, m),
        Value::Link(cid) => write_link(w, cid),
        Value::Tag(tag, inner) => write_tagged(w, *tag, inner),
        Value::Simple(s) => write_simple(w, *s),
    }
}
