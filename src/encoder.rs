// src/encoder.rs
//! Repeated-substring search over a bit sequence.
//!
//! Binary-searches the candidate pattern length over [1, n/2]. At each
//! probed length, every start offset that could still fit one occurrence is
//! scanned forward for exact bit-for-bit repeats; a matched region is
//! consumed whole so occurrences never overlap. A start with no repeats
//! lowers the length upper bound, a start with repeats raises the lower
//! bound past the probed length.
//!
//! The binary search treats cost as unimodal in length, which it is not in
//! general, so a better pattern at an unprobed length can be missed. That
//! trade keeps the search at O(log n) probed lengths and is part of the
//! output contract: together with the fixed left-to-right, strict-improvement
//! enumeration it makes the chosen factoring fully deterministic.

use crate::bitio::BitCursor;
use crate::factoring::{wire_cost, Factoring};

/// Find the cheapest repeated-substring factoring of `n_bits` bits of
/// `data`, or `None` when no candidate was ever costed (nothing repeats at
/// any probed length, or the input is too short to probe at all).
///
/// A returned factoring is not necessarily worth applying: the caller must
/// still compare `cost_bits` against `n_bits`.
pub fn scan(data: &[u8], n_bits: u32) -> Option<Factoring> {
    let cursor = BitCursor::new(data, n_bits);
    let mut best: Option<Factoring> = None;

    let mut low = 1u32;
    let mut high = n_bits / 2;

    while low < high {
        let length = (low + high) / 2;
        println!("Probing length {} (window [{}, {}])", length, low, high);

        let mut start = 0u32;
        // The bound tightens while a multi-occurrence best stands: a start
        // too late to fit that many repeats cannot beat it.
        while (start as u64) + (length as u64) * (best_occurrence_count(&best) as u64)
            < n_bits as u64
        {
            let occurrences = collect_occurrences(&cursor, start, length);

            if occurrences.is_empty() {
                // Nothing repeats from this start: the probed length is too
                // long for the region, so cap the search above.
                high = length - 1;
                start += 1;
                continue;
            }

            let cost = wire_cost(length, &occurrences, n_bits);
            if best.as_ref().map_or(true, |b| cost < b.cost_bits) {
                println!(
                    "New best: start={} length={} occurrences={} cost={} bits",
                    start,
                    length,
                    occurrences.len(),
                    cost
                );
                let found = Factoring {
                    start,
                    length,
                    occurrences,
                    cost_bits: cost,
                };
                debug_assert!(found.spans_are_disjoint());
                best = Some(found);
            }

            low = length + 1;
            start += 1;
        }
    }

    best
}

fn best_occurrence_count(best: &Option<Factoring>) -> u32 {
    best.as_ref().map_or(1, |b| b.count())
}

/// Forward scan for non-overlapping repeats of the `length`-bit window at
/// `start`. A match consumes the matched region; the next probe begins one
/// bit after it.
fn collect_occurrences(cursor: &BitCursor, start: u32, length: u32) -> Vec<u32> {
    let n_bits = cursor.len_bits();
    let mut occurrences = Vec::new();

    let mut i = start + length;
    while i + length < n_bits {
        if windows_match(cursor, start, i, length) {
            occurrences.push(i);
            i += length;
        }
        i += 1;
    }

    occurrences
}

#[inline]
fn windows_match(cursor: &BitCursor, a: u32, b: u32, length: u32) -> bool {
    (0..length).all(|k| cursor.bit(a + k) == cursor.bit(b + k))
}
