use criterion::{criterion_group, criterion_main, Criterion};
use range_coder::{RangeDecoder, RangeEncoder};

const PRECISION: u8 = 8;
const CDF: [u32; 4] = [0, 128, 192, 256];

fn bench_range_coder(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_coder");
    // 1000 symbols to measure sustained throughput
    let input = (0..1000).map(|i| (i % 3) as usize).collect::<Vec<_>>();

    group.bench_function("encode", |b| {
        b.iter(|| {
            let mut encoder = RangeEncoder::new();
            let mut encoded = Vec::new();
            for &s in &input {
                encoder
                    .encode(CDF[s], CDF[s + 1], PRECISION, &mut encoded)
                    .unwrap();
            }
            encoder.finalize(&mut encoded);
            encoded
        })
    });

    let mut encoder = RangeEncoder::new();
    let mut encoded = Vec::new();
    for &s in &input {
        encoder
            .encode(CDF[s], CDF[s + 1], PRECISION, &mut encoded)
            .unwrap();
    }
    encoder.finalize(&mut encoded);

    group.bench_function("decode", |b| {
        b.iter(|| {
            let mut decoder = RangeDecoder::new(&encoded);
            for _ in 0..input.len() {
                decoder.decode(&CDF, PRECISION).unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_range_coder);
criterion_main!(benches);
