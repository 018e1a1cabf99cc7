use dagcbor_codec::{decode, decode_with, encode, DecodeError, DecodeOptions, LinkError, Value};
use quickcheck::{quickcheck, TestResult};

#[test]
fn roundtrip_with_cid() {
    // generated with go-ipfs
    // $ echo foobar > file1
    // $ ipfs add foobar
    // QmRgutAxd8t7oGkSm4wmeuByG6M51wcTso6cubDdQtuEfL
    // $ echo -n '{ "foo": { "/": "QmRgutAxd8t7oGkSm4wmeuByG6M51wcTso6cubDdQtuEfL" } }' \
    //   | ipfs dag put
    // bafyreibvjvcv745gig4mvqs4hctx4zfkono4rjejm2ta6gtyzkqxfjeily
    // $ ipfs block get bafyreibvjvcv745gig4mvqs4hctx4zfkono4rjejm2ta6gtyzkqxfjeily \
    //   | xxd -ps | paste -s --delimiters=

    let input =
        "a163666f6fd82a582300122031c3d57080d8463a3c63b2923df5a1d40ad7a73eae5a14af584213e5f504ac33";
    let input = hex::decode(input).unwrap();

    let value = decode(&input).unwrap();
    assert!(matches!(value.get("foo").unwrap(), Value::Link(_)));
    let bytes = encode(&value).unwrap();

    assert_eq!(input, bytes);
}

#[test]
fn roundtrip_cid_v1() {
    let hash = multihash::MultihashGeneric::<64>::wrap(0x12, &[0xab; 32]).unwrap();
    let cid = dagcbor_codec::Cid::new_v1(0x71, hash);
    let bytes = encode(&Value::Link(cid)).unwrap();
    assert_eq!(&bytes[..5], &[0xd8, 0x2a, 0x58, 0x25, 0x00]);
    assert_eq!(decode(&bytes).unwrap(), Value::Link(cid));
}

#[test]
fn invalid_cid_prefix() {
    let input =
        "a163666f6fd82a582301122031c3d57080d8463a3c63b2923df5a1d40ad7a73eae5a14af584213e5f504ac33";
    let input = hex::decode(input).unwrap();

    match decode(&input).unwrap_err() {
        DecodeError::InvalidLink(LinkError::InvalidPrefix(1)) => {}
        x => panic!("unexpected error: {:?}", x),
    }
}

#[test]
fn zero_length_cid() {
    let input = "a163666f6fd82a40";
    let input = hex::decode(input).unwrap();

    match decode(&input).unwrap_err() {
        DecodeError::InvalidLink(LinkError::Empty) => {}
        x => panic!("unexpected error: {:?}", x),
    }
}

#[test]
fn truncated_cid() {
    let input = "a163666f6fd82a4500122031c3";
    let input = hex::decode(input).unwrap();

    match decode(&input).unwrap_err() {
        DecodeError::InvalidLink(LinkError::InvalidCid) => {}
        x => panic!("unexpected error: {:?}", x),
    }
}

#[test]
fn roundtrip_nested_document() {
    // {"a": [1, -1, 1.5, h'0102'], "bb": {"c": null, "dd": true}, "list": []}
    let input = "a36161840120f93e00420102626262a26163f6626464f5646c69737480";
    let input = hex::decode(input).unwrap();
    let value = decode(&input).unwrap();
    assert_eq!(
        value.get("a").unwrap(),
        &Value::List(vec![
            Value::Integer(1),
            Value::Integer(-1),
            Value::Float(1.5),
            Value::Bytes(vec![1, 2]),
        ])
    );
    assert_eq!(encode(&value).unwrap(), input);
}

fn encode_decode_encode(value: Value) -> TestResult {
    let bytes = match encode(&value) {
        Ok(bytes) => bytes,
        Err(_) => return TestResult::discard(),
    };
    let decoded = match decode_with(&bytes, &DecodeOptions::permissive()) {
        Ok(decoded) => decoded,
        Err(err) => return TestResult::error(format!("{}: {}", hex::encode(&bytes), err)),
    };
    TestResult::from_bool(encode(&decoded).unwrap() == bytes)
}

#[test]
fn roundtrip_arbitrary_values() {
    quickcheck(encode_decode_encode as fn(Value) -> TestResult);
}
