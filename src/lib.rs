//! # Range Coding
//!
//! *Entropy coding at the Shannon limit with fixed-width integer arithmetic.*
//!
//! ## Intuition First
//!
//! Imagine the unit interval `[0, 1)` as a number line. Each symbol's
//! probability claims a slice of it. To encode a message, zoom into the
//! slice of the first symbol, then into the slice of the second symbol
//! *within* that slice, and so on. After the whole message the interval is
//! tiny, and any number inside it identifies the message uniquely. Frequent
//! symbols shrink the interval slowly, so they cost few bits; rare symbols
//! shrink it fast and cost many.
//!
//! Range coding is that idea made practical: the interval lives in a 32-bit
//! register, determined high-order bytes are shifted out as the interval
//! narrows, and the occasional carry into already-shifted bytes is deferred
//! through a tiny state machine instead of rewriting output.
//!
//! ## The Problem
//!
//! Before arithmetic/range coding there was a trade-off:
//! - **Huffman coding**: fast, but rounds every symbol to a whole number of
//!   bits (a 99% probable symbol still costs 1 bit instead of 0.014).
//! - **Bit-level arithmetic coding**: optimal rate, but historically slow
//!   and patent-encumbered.
//!
//! Byte-oriented range coding keeps the optimal rate while renormalizing a
//! byte at a time, which is what LZMA and most modern learned-compression
//! stacks ship.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon             Entropy as the fundamental limit
//! 1976  Pasco, Rissanen     Arithmetic coding: optimal rate
//! 1979  Martin              Range coding: byte-wise renormalization
//! 1987  Witten-Neal-Cleary  The classic CACM implementation
//! 1998  Pavlov              LZMA: carry-deferred range coder in production
//! 2017  Ballé et al.        Learned compression driven by per-symbol CDFs
//! ```
//!
//! ## Mathematical Formulation
//!
//! A symbol `s` with cumulative distribution `cdf` scaled to `2^precision`
//! occupies `[cdf[s], cdf[s+1])`. With current width `range`, the update is
//!
//! ```text
//! step  = range >> precision
//! low  += step * cdf[s]
//! range = step * (cdf[s+1] - cdf[s])
//! ```
//!
//! so the code length per symbol approaches `-log2(p_s)` where
//! `p_s = (cdf[s+1] - cdf[s]) / 2^precision`.
//!
//! ## Complexity Analysis
//!
//! - **Time**: `O(1)` per encoded symbol; `O(log n)` per decoded symbol for
//!   the binary search over an alphabet of `n` symbols.
//! - **Space**: `O(1)` register state; output grows with the entropy of the
//!   input.
//!
//! ## Failure Modes
//!
//! 1. **Desynchronization**: the coder cannot detect a decode-time CDF that
//!    differs from the encode-time one; it returns well-formed garbage.
//!    Matching call sequences are the caller's contract.
//! 2. **Precision Loss**: quantizing probabilities to `2^precision` buckets
//!    costs rate; the cap of 16 bits keeps `step >= 1` for the narrowest
//!    interval and trades at most fractions of a percent of rate.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`RangeEncoder`]: interval narrowing with carry-deferred byte output
//!   and a minimal finalize tail.
//! - [`RangeDecoder`]: the mirrored state machine, with zero-fill past the
//!   end of input so the minimal tail stays decodable.
//!
//! The byte stream is opaque: no header, length, or end marker. Symbol
//! count, precision, and CDFs travel out-of-band.
//!
//! ## References
//!
//! - Martin, G. N. N. (1979). "Range encoding: an algorithm for removing
//!   redundancy from a digitised message."
//! - Witten, I., Neal, R., Cleary, J. (1987). "Arithmetic coding for data
//!   compression."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod range;

pub use error::Error;
pub use range::{RangeDecoder, RangeEncoder};
