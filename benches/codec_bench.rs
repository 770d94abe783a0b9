//! Benchmarks for fetchwire protocol decoding

use std::hint::black_box;
use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion};
use fetchwire::protocol::{decode_header, encode_header, ResponseHeader, ResponseReader};

fn codec_benchmarks(c: &mut Criterion) {
    let header = ResponseHeader {
        version: 1,
        status_code: 210,
        name_len: 8,
        data_size: 4096,
    };
    let encoded = encode_header(&header);

    c.bench_function("decode_header", |b| {
        b.iter(|| decode_header(black_box(&encoded)).unwrap())
    });

    // One full parse cycle over an in-memory stream
    let mut wire = encoded.to_vec();
    wire.extend_from_slice(b"test.txt");
    wire.extend_from_slice(&vec![0x5A; 4096]);

    c.bench_function("parse_message_4k", |b| {
        b.iter(|| {
            ResponseReader::new(Cursor::new(black_box(wire.as_slice())))
                .into_message()
                .unwrap()
        })
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
