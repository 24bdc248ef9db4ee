use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use twine::{ByteParser, Decode, Encode, EncodeLength, SliceParser};

fn sample() -> BTreeMap<u32, Vec<String>> {
    (0..256u32)
        .map(|k| (k, (0..8).map(|i| format!("entry-{k}-{i}")).collect()))
        .collect()
}

fn encode_bench(c: &mut Criterion) {
    let value = sample();
    c.bench_function("encode_to_bytes", |b| b.iter(|| black_box(value.to_bytes())));
    c.bench_function("encode_to_bytes_full", |b| {
        b.iter(|| black_box(value.to_bytes_full()))
    });
}

fn decode_bench(c: &mut Criterion) {
    let bytes = sample().to_bytes();
    c.bench_function("decode_byteparser", |b| {
        b.iter(|| {
            black_box(<BTreeMap<u32, Vec<String>>>::try_decode::<_, ByteParser>(
                bytes.clone(),
            ))
        })
    });
    c.bench_function("decode_sliceparser", |b| {
        b.iter(|| {
            black_box(<BTreeMap<u32, Vec<String>>>::try_decode::<_, SliceParser>(
                bytes.as_slice(),
            ))
        })
    });
}

criterion_group! {
    name = binary_benches;
    config = Criterion::default();
    targets = encode_bench, decode_bench
}

criterion_main!(binary_benches);
