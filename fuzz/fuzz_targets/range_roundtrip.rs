#![no_main]
use libfuzzer_sys::fuzz_target;
use range_coder::{RangeDecoder, RangeEncoder};

fuzz_target!(|data: (Vec<u8>, u8)| {
    let (input_bytes, raw_precision) = data;
    let precision = (raw_precision % 16) + 1;
    let total = 1u32 << precision;

    if input_bytes.is_empty() {
        return;
    }

    // Simple model: 2 symbols, 50/50
    let cdf = [0, total / 2, total];
    let input: Vec<usize> = input_bytes.iter().map(|&b| (b % 2) as usize).collect();

    let mut encoder = RangeEncoder::new();
    let mut encoded = Vec::new();
    for &s in &input {
        if encoder
            .encode(cdf[s], cdf[s + 1], precision, &mut encoded)
            .is_err()
        {
            return;
        }
    }
    encoder.finalize(&mut encoded);

    let mut decoder = RangeDecoder::new(&encoded);
    let mut output = Vec::with_capacity(input.len());
    for _ in 0..input.len() {
        output.push(decoder.decode(&cdf, precision).unwrap() as usize);
    }

    assert_eq!(input, output);
});
