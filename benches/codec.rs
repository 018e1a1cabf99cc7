use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dagcbor::{Cid, Codec, DagCborCodec, DecodeOptions, Value};
use multihash::MultihashGeneric;
use std::collections::BTreeMap;

fn link(seed: u8) -> Value {
    let hash = MultihashGeneric::<64>::wrap(0x12, &[seed; 32]).unwrap();
    Value::Link(Cid::new_v1(DagCborCodec::CODE, hash))
}

fn hello_world() -> Value {
    let mut map = BTreeMap::new();
    map.insert("hello".to_string(), Value::from("world"));
    Value::from(map)
}

/// A commit-like document with a handful of entries per node.
fn realistic(entries: usize) -> Value {
    let list = (0..entries)
        .map(|i| {
            let mut entry = BTreeMap::new();
            entry.insert("k".to_string(), Value::Bytes(format!("key-{:08}", i).into_bytes()));
            entry.insert("p".to_string(), Value::Integer((i % 32) as i128));
            entry.insert("t".to_string(), Value::Null);
            entry.insert("v".to_string(), link(i as u8));
            entry.insert("w".to_string(), Value::Float(i as f64 / 3.0));
            Value::from(entry)
        })
        .collect();
    let mut node = BTreeMap::new();
    node.insert("e".to_string(), Value::List(list));
    node.insert("l".to_string(), link(0));
    node.insert("sig".to_string(), Value::Bytes(vec![0x5a; 64]));
    Value::from(node)
}

fn nested_lists(depth: usize) -> Value {
    (0..depth).fold(Value::Integer(0), |inner, _| Value::List(vec![inner]))
}

fn wide_map(len: usize) -> Value {
    Value::Map(
        (0..len)
            .map(|i| (Value::String(format!("{:x}", i)), Value::Integer(i as i128)))
            .collect(),
    )
}

fn bench_hello_world(c: &mut Criterion) {
    let codec = DagCborCodec::default();
    let value = hello_world();
    let bytes = codec.encode(&value).unwrap();
    c.bench_function("hello world decode", |b| {
        b.iter(|| black_box(codec.decode(black_box(&bytes)).unwrap()))
    });
    c.bench_function("hello world encode", |b| {
        b.iter(|| black_box(codec.encode(black_box(&value)).unwrap()))
    });
}

fn bench_realistic(c: &mut Criterion) {
    let codec = DagCborCodec::default();
    let mut group = c.benchmark_group("realistic");
    for entries in [16, 256, 4096] {
        let value = realistic(entries);
        let bytes = codec.encode(&value).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("decode", entries), &bytes, |b, bytes| {
            b.iter(|| black_box(codec.decode(bytes).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("encode", entries), &value, |b, value| {
            b.iter(|| black_box(codec.encode(value).unwrap()))
        });
    }
    group.finish();
}

fn bench_torture(c: &mut Criterion) {
    let codec = DagCborCodec::new(DecodeOptions::default().with_max_depth(2_048));
    let cases = [
        ("nested lists", nested_lists(2_000)),
        ("wide map", wide_map(100_000)),
    ];
    let mut group = c.benchmark_group("torture decode");
    group.sample_size(10);
    for (name, value) in cases {
        let bytes = codec.encode(&value).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &bytes, |b, bytes| {
            b.iter(|| black_box(codec.decode(bytes).unwrap()))
        });
    }
    group.finish();
}

criterion_group! {
    name = codec;
    config = Criterion::default();
    targets = bench_hello_world, bench_realistic, bench_torture
}

criterion_main!(codec);
