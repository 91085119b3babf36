use range_coder::{RangeDecoder, RangeEncoder};

fn main() {
    let input = (0..10000).map(|i| (i % 3) as usize).collect::<Vec<_>>();
    let precision = 8;
    let cdf = [0u32, 128, 192, 256];

    for _ in 0..1000 {
        let mut encoder = RangeEncoder::new();
        let mut encoded = Vec::new();
        for &s in &input {
            encoder
                .encode(cdf[s], cdf[s + 1], precision, &mut encoded)
                .unwrap();
        }
        encoder.finalize(&mut encoded);

        let mut decoder = RangeDecoder::new(&encoded);
        for &s in &input {
            assert_eq!(decoder.decode(&cdf, precision).unwrap() as usize, s);
        }
    }
}
