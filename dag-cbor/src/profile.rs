//! Canonical form rules of the DAG-CBOR profile.
//!
//! The decoder uses these predicates to reject non-canonical input and the
//! encoder uses them to pick what it writes, so every block the encoder
//! produces is accepted by the decoder and decodes back to the same bytes.
use crate::cbor::{INFO_U16, INFO_U32, INFO_U64, INFO_U8, MULTIBASE_IDENTITY};
use crate::error::LinkError;
use core::cmp::Ordering;
use dagcbor_core::Cid;
use half::f16;

/// The only NaN admitted on the wire, as half precision bits.
pub const CANONICAL_NAN_F16: u16 = 0x7e00;

/// Width of an encoded float.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FloatWidth {
    /// IEEE 754 binary16, initial byte `0xf9`.
    Half,
    /// IEEE 754 binary32, initial byte `0xfa`.
    Single,
    /// IEEE 754 binary64, initial byte `0xfb`.
    Double,
}

/// Additional info of the shortest head carrying `value`.
pub fn minimal_info(value: u64) -> u8 {
    match value {
        0..=23 => value as u8,
        24..=0xff => INFO_U8,
        0x100..=0xffff => INFO_U16,
        0x1_0000..=0xffff_ffff => INFO_U32,
        _ => INFO_U64,
    }
}

/// Whether `info` is the shortest additional info for `value`.
pub fn is_minimal_int_encoding(info: u8, value: u64) -> bool {
    minimal_info(value) == info
}

/// Narrowest width that holds `value` exactly. NaN always fits half width.
pub fn minimal_float_width(value: f64) -> FloatWidth {
    if value.is_nan() || f16::from_f64(value).to_f64().to_bits() == value.to_bits() {
        FloatWidth::Half
    } else if f64::from(value as f32).to_bits() == value.to_bits() {
        FloatWidth::Single
    } else {
        FloatWidth::Double
    }
}

/// Whether `value` read at `width` was written at its narrowest width.
pub fn is_minimal_float_width(width: FloatWidth, value: f64) -> bool {
    minimal_float_width(value) == width
}

/// Orders two map keys by their encoded bytes.
///
/// Both slices must be canonical encodings of the keys; comparing decoded
/// values instead gives a different order.
pub fn compare_canonical_keys(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// Parses the payload of a tag 42 byte string.
pub fn parse_link(bytes: &[u8]) -> Result<Cid, LinkError> {
    let (prefix, cid_bytes) = bytes.split_first().ok_or(LinkError::Empty)?;
    if *prefix != MULTIBASE_IDENTITY {
        return Err(LinkError::InvalidPrefix(*prefix));
    }
    let cid = Cid::try_from(cid_bytes).map_err(|_| LinkError::InvalidCid)?;
    // Rejects trailing bytes and over-long varints.
    if cid.to_bytes() != cid_bytes {
        return Err(LinkError::NonCanonicalCid);
    }
    Ok(cid)
}

/// Whether `bytes` is a valid tag 42 payload.
pub fn is_valid_cid_bytes(bytes: &[u8]) -> bool {
    parse_link(bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CID_V0: &str = "122031c3d57080d8463a3c63b2923df5a1d40ad7a73eae5a14af584213e5f504ac33";

    fn link_payload(cid: &str) -> Vec<u8> {
        let mut bytes = vec![0];
        bytes.extend(hex::decode(cid).unwrap());
        bytes
    }

    #[test]
    fn minimal_int_boundaries() {
        assert!(is_minimal_int_encoding(23, 23));
        assert!(!is_minimal_int_encoding(INFO_U8, 23));
        assert!(is_minimal_int_encoding(INFO_U8, 24));
        assert!(is_minimal_int_encoding(INFO_U8, 255));
        assert!(!is_minimal_int_encoding(INFO_U16, 255));
        assert!(is_minimal_int_encoding(INFO_U16, 256));
        assert!(is_minimal_int_encoding(INFO_U32, 65_536));
        assert!(!is_minimal_int_encoding(INFO_U64, u32::MAX as u64));
        assert!(is_minimal_int_encoding(INFO_U64, u32::MAX as u64 + 1));
    }

    #[test]
    fn float_widths() {
        assert_eq!(minimal_float_width(0.0), FloatWidth::Half);
        assert_eq!(minimal_float_width(-0.0), FloatWidth::Half);
        assert_eq!(minimal_float_width(1.5), FloatWidth::Half);
        assert_eq!(minimal_float_width(65504.0), FloatWidth::Half);
        assert_eq!(minimal_float_width(5.960464477539063e-8), FloatWidth::Half);
        assert_eq!(minimal_float_width(f64::INFINITY), FloatWidth::Half);
        assert_eq!(minimal_float_width(f64::NAN), FloatWidth::Half);
        assert_eq!(minimal_float_width(100000.0), FloatWidth::Single);
        assert_eq!(minimal_float_width(f64::from(f32::MAX)), FloatWidth::Single);
        assert_eq!(minimal_float_width(0.1), FloatWidth::Double);
        assert_eq!(minimal_float_width(1.0e300), FloatWidth::Double);

        assert!(is_minimal_float_width(FloatWidth::Double, 1.1));
        assert!(!is_minimal_float_width(FloatWidth::Double, 1.5));
        assert!(!is_minimal_float_width(FloatWidth::Single, 1.5));
    }

    #[test]
    fn keys_are_ordered_by_encoded_bytes() {
        // "b" sorts before "aa" because the length is part of the encoding.
        assert_eq!(
            compare_canonical_keys(&[0x61, b'b'], &[0x62, b'a', b'a']),
            Ordering::Less
        );
        assert_eq!(
            compare_canonical_keys(&[0x61, b'a'], &[0x61, b'b']),
            Ordering::Less
        );
        // Integer 10 (0x0a) sorts before integer -1 (0x20).
        assert_eq!(compare_canonical_keys(&[0x0a], &[0x20]), Ordering::Less);
        assert_eq!(compare_canonical_keys(&[0x0a], &[0x0a]), Ordering::Equal);
    }

    #[test]
    fn link_payloads() {
        let cid = parse_link(&link_payload(CID_V0)).unwrap();
        assert_eq!(hex::encode(cid.to_bytes()), CID_V0);
        assert!(is_valid_cid_bytes(&link_payload(CID_V0)));

        assert_eq!(parse_link(&[]), Err(LinkError::Empty));

        let mut payload = link_payload(CID_V0);
        payload[0] = 1;
        assert_eq!(parse_link(&payload), Err(LinkError::InvalidPrefix(1)));

        assert_eq!(parse_link(&[0, 0x12, 0x20, 1, 2]), Err(LinkError::InvalidCid));

        let mut payload = link_payload(CID_V0);
        payload.push(0);
        assert!(!is_valid_cid_bytes(&payload));
    }
}
