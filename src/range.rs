//! Byte-oriented range coding.
//!
//! The encoder narrows a 32-bit interval `[low, low + range)` once per
//! symbol and emits high-order bytes as they become determined. Carries
//! triggered by interval updates are resolved against a small deferral
//! state (one cached byte plus a run of pending `0xFF` bytes) instead of
//! rewriting already-emitted output. The decoder mirrors the arithmetic
//! exactly and recovers each symbol from the same CDF tables.

use crate::error::{Error, Result};

/// Renormalization threshold; at least 16 bits of dynamic range remain
/// above the largest supported precision.
const TOP: u32 = 1 << 24;

/// Mask selecting the 32-bit coding window of the `low` accumulator.
const WINDOW: u64 = 0xFFFF_FFFF;

/// Highest supported CDF precision, in bits.
pub const MAX_PRECISION: u8 = 16;

fn check_precision(precision: u8) -> Result<()> {
    if precision == 0 || precision > MAX_PRECISION {
        return Err(Error::PrecisionOutOfRange(precision));
    }
    Ok(())
}

/// Range encoder.
///
/// Feed one `[cdf_low, cdf_high)` interval per symbol via [`encode`], then
/// call [`finalize`] exactly once to flush. The output buffer is supplied by
/// the caller and only ever appended to.
///
/// [`encode`]: RangeEncoder::encode
/// [`finalize`]: RangeEncoder::finalize
pub struct RangeEncoder {
    low: u64,
    range: u32,
    /// Last shifted-out byte still awaiting a possible carry. Never `0xFF`;
    /// maximum-value bytes are counted in `pending` instead.
    cache: Option<u8>,
    /// Length of the run of `0xFF` bytes following `cache`.
    pending: u64,
}

impl RangeEncoder {
    /// Create a new range encoder.
    pub fn new() -> Self {
        Self {
            low: 0,
            range: u32::MAX,
            cache: None,
            pending: 0,
        }
    }

    /// Encode one symbol occupying `[cdf_low, cdf_high)` on a CDF scaled to
    /// `1 << precision`, appending any determined bytes to `out`.
    ///
    /// # Errors
    /// Returns an invalid-argument error, before touching any coder state,
    /// if `precision` is outside `1..=16` or the interval is empty or
    /// exceeds the scale.
    pub fn encode(
        &mut self,
        cdf_low: u32,
        cdf_high: u32,
        precision: u8,
        out: &mut Vec<u8>,
    ) -> Result<()> {
        check_precision(precision)?;
        if cdf_low >= cdf_high || cdf_high > 1u32 << precision {
            return Err(Error::InvalidInterval {
                low: cdf_low,
                high: cdf_high,
                precision,
            });
        }

        // range >= TOP here, so step >= 1 << (24 - precision) >= 256.
        let step = self.range >> precision;
        self.low += u64::from(step) * u64::from(cdf_low);
        if self.low > WINDOW {
            self.low &= WINDOW;
            self.propagate_carry(out);
        }
        self.range = step * (cdf_high - cdf_low);

        while self.range < TOP {
            let byte = (self.low >> 24) as u8;
            self.shift_out(byte, out);
            self.low = (self.low << 8) & WINDOW;
            self.range <<= 8;
        }
        Ok(())
    }

    /// Resolve a carry out of the coding window. The carry increments the
    /// cached byte and flips the pending `0xFF` run to zeros; it can never
    /// reach further back, because any byte before the cached one is
    /// followed by a non-`0xFF` byte.
    fn propagate_carry(&mut self, out: &mut Vec<u8>) {
        match self.cache.take() {
            Some(0xFE) if self.pending == 0 => {
                // The incremented byte is 0xFF and may absorb another carry.
                self.pending = 1;
            }
            Some(byte) => {
                out.push(byte + 1);
                out.resize(out.len() + self.pending as usize, 0x00);
                self.pending = 0;
            }
            None => {
                // Leading run of 0xFF bytes; the carry turns them to zeros.
                out.resize(out.len() + self.pending as usize, 0x00);
                self.pending = 0;
            }
        }
    }

    /// Pass one shifted-out byte through the carry-deferral state.
    fn shift_out(&mut self, byte: u8, out: &mut Vec<u8>) {
        if byte == 0xFF {
            self.pending += 1;
        } else {
            // A byte below 0xFF fixes everything deferred before it.
            if let Some(cached) = self.cache {
                out.push(cached);
            }
            out.resize(out.len() + self.pending as usize, 0xFF);
            self.pending = 0;
            self.cache = Some(byte);
        }
    }

    /// Flush the coder, appending the final bytes to `out`.
    ///
    /// Emits the four window bytes of `low` and drains the deferral state,
    /// then drops the trailing zero bytes it produced: the decoder reads
    /// zeros past the end of its input, so the tail can be minimal and is
    /// sometimes empty.
    pub fn finalize(mut self, out: &mut Vec<u8>) {
        let tail = out.len();
        for _ in 0..4 {
            let byte = (self.low >> 24) as u8;
            self.shift_out(byte, out);
            self.low = (self.low << 8) & WINDOW;
        }
        if let Some(cached) = self.cache.take() {
            out.push(cached);
        }
        out.resize(out.len() + self.pending as usize, 0xFF);
        while out.len() > tail && out.last() == Some(&0x00) {
            out.pop();
        }
    }
}

impl Default for RangeEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Range decoder.
///
/// Borrows the encoded buffer for its whole lifetime and recovers one
/// symbol per [`decode`] call, given the same CDF tables in the same order
/// as at encode time. The coder carries no length marker; the caller knows
/// how many symbols to decode.
///
/// Supplying a CDF that differs from the one used at encode time is not
/// detectable here: decoding stays well-defined but returns a semantically
/// wrong symbol and desynchronizes the stream. Keeping the call sequences
/// matched is a caller-protocol responsibility.
///
/// [`decode`]: RangeDecoder::decode
pub struct RangeDecoder<'a> {
    input: &'a [u8],
    pos: usize,
    range: u32,
    code: u32,
}

impl<'a> RangeDecoder<'a> {
    /// Create a decoder over a complete encoded buffer.
    ///
    /// Primes the code register from the first four bytes; missing bytes
    /// are read as zero, which is what makes a minimal finalize tail sound.
    pub fn new(input: &'a [u8]) -> Self {
        let mut decoder = Self {
            input,
            pos: 0,
            range: u32::MAX,
            code: 0,
        };
        for _ in 0..4 {
            decoder.code = (decoder.code << 8) | u32::from(decoder.next_byte());
        }
        decoder
    }

    fn next_byte(&mut self) -> u8 {
        let byte = self.input.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        byte
    }

    /// Decode one symbol from a CDF table scaled to `1 << precision`.
    ///
    /// `cdf` must have `alphabet_size + 1` non-decreasing entries with
    /// `cdf[0] == 0` and `cdf[last] == 1 << precision`; entries of zero
    /// width are legal and can never be returned.
    ///
    /// # Errors
    /// Returns an invalid-argument error, before touching any coder state,
    /// if `precision` is outside `1..=16` or `cdf` violates its invariant.
    pub fn decode(&mut self, cdf: &[u32], precision: u8) -> Result<u32> {
        check_precision(precision)?;
        let total = 1u32 << precision;
        let structurally_valid = cdf.len() >= 2
            && cdf[0] == 0
            && cdf[cdf.len() - 1] == total
            && cdf.windows(2).all(|pair| pair[0] <= pair[1]);
        if !structurally_valid {
            return Err(Error::InvalidCdf(cdf.len()));
        }

        let step = self.range >> precision;
        // Rounding can push the quotient one past the last bucket.
        let value = (self.code / step).min(total - 1);
        // First index whose entry exceeds value; its predecessor is the
        // unique symbol with cdf[s] <= value < cdf[s + 1].
        let symbol = cdf.partition_point(|&entry| entry <= value) - 1;

        self.code -= step * cdf[symbol];
        self.range = step * (cdf[symbol + 1] - cdf[symbol]);
        while self.range < TOP {
            self.code = (self.code << 8) | u32::from(self.next_byte());
            self.range <<= 8;
        }
        Ok(symbol as u32)
    }
}
