// src/factoring.rs
//! The chosen factoring of one round, shared by the search, the
//! serializer and the reconstruction path.

use crate::varint;

/// A repeated-substring factoring: the canonical pattern instance at
/// `start`, its bit length, and every later occurrence found by the scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Factoring {
    /// Bit offset of the canonical pattern instance.
    pub start: u32,
    /// Pattern length in bits.
    pub length: u32,
    /// Occurrence bit offsets in scan order: strictly increasing, each at
    /// least `length` past the previous one and past `start + length`.
    pub occurrences: Vec<u32>,
    /// Total encoded size of the round in bits, per `wire_cost`.
    pub cost_bits: u32,
}

impl Factoring {
    pub fn count(&self) -> u32 {
        self.occurrences.len() as u32
    }

    /// True when no occurrence overlaps the canonical instance or a
    /// neighbour. The scan guarantees this; reconstruction re-checks it on
    /// untrusted data.
    pub fn spans_are_disjoint(&self) -> bool {
        let mut end = self.start + self.length;
        for &p in &self.occurrences {
            if p < end {
                return false;
            }
            end = p + self.length;
        }
        true
    }
}

/// Encoded size in bits of a candidate factoring over an `n_bits` input:
/// the varint header (length, occurrence count, each offset) plus every bit
/// of the input not deleted as a repeat. The canonical instance is not
/// deleted; it travels once as the transmitted pattern.
pub fn wire_cost(length: u32, occurrences: &[u32], n_bits: u32) -> u32 {
    varint::encoded_bits(length)
        + varint::encoded_bits(occurrences.len() as u32)
        + occurrences
            .iter()
            .map(|&p| varint::encoded_bits(p))
            .sum::<u32>()
        + (n_bits - length * occurrences.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_counts_header_pattern_and_literals() {
        // n=800, L=200, occurrences at 200 and 401: header is 16+8+16+16,
        // remaining bits 800 - 400.
        assert_eq!(wire_cost(200, &[200, 401], 800), 56 + 400);
    }

    #[test]
    fn disjoint_spans() {
        let f = Factoring {
            start: 0,
            length: 10,
            occurrences: vec![10, 25],
            cost_bits: 0,
        };
        assert!(f.spans_are_disjoint());

        let overlapping = Factoring {
            start: 0,
            length: 10,
            occurrences: vec![10, 15],
            cost_bits: 0,
        };
        assert!(!overlapping.spans_are_disjoint());
    }
}
