use criterion::{black_box, criterion_group, criterion_main, Criterion};

use twine::transport;
use twine::tree::{self, TreeOptions};

fn transport_bench(c: &mut Criterion) {
    let raw: Vec<u8> = (0..65536u32).map(|i| (i % 251) as u8).collect();
    let text = transport::encode(&raw);
    c.bench_function("transport_encode_64k", |b| {
        b.iter(|| black_box(transport::encode(&raw)))
    });
    c.bench_function("transport_decode_64k", |b| {
        b.iter(|| black_box(transport::decode(&text)))
    });
}

fn document_bench(c: &mut Criterion) {
    let value: Vec<(u16, String)> = (0..512u16).map(|i| (i, format!("v{i}"))).collect();
    let opts = TreeOptions::default().with_transport(true);
    let text = tree::to_string(&value, &opts).unwrap();
    c.bench_function("document_render_wrapped", |b| {
        b.iter(|| black_box(tree::to_string(&value, &opts)))
    });
    c.bench_function("document_parse_wrapped", |b| {
        b.iter(|| black_box(tree::from_str::<Vec<(u16, String)>>(&text, &opts)))
    });
}

criterion_group!(benches, transport_bench, document_bench);
criterion_main!(benches);
