// src/bitwriter.rs
//! Serializes one round to the wire.
//!
//! Layout: varint(length), varint(count), one varint per occurrence offset
//! in scan order, the raw pattern bits copied from the canonical start,
//! then every literal span in original left-to-right order: the prefix
//! before the canonical instance, the gap before each occurrence, and the
//! trailing span. MSB-first within each byte, final byte zero-padded.

use crate::bitio::{BitCursor, BitSink};
use crate::factoring::Factoring;
use crate::varint;

/// Serialize `factoring` applied to `n_bits` bits of `data`.
///
/// The output buffer is pre-sized from `factoring.cost_bits` and must come
/// out exactly full; a mismatch means the cost formula and the serializer
/// disagree, which is a bug and not a data condition.
pub fn write_round(data: &[u8], n_bits: u32, factoring: &Factoring) -> Vec<u8> {
    let mut cursor = BitCursor::new(data, n_bits);
    let mut sink = BitSink::with_capacity(factoring.cost_bits);

    varint::write_encoded(&mut sink, factoring.length);
    varint::write_encoded(&mut sink, factoring.count());
    for &p in &factoring.occurrences {
        varint::write_encoded(&mut sink, p);
    }

    // The pattern itself, verbatim.
    copy_bits(&mut cursor, &mut sink, factoring.start, factoring.length);

    // Literal spans: before the canonical instance...
    copy_bits(&mut cursor, &mut sink, 0, factoring.start);

    // ...the gap before each occurrence...
    let mut last_end = factoring.start + factoring.length;
    for &p in &factoring.occurrences {
        copy_bits(&mut cursor, &mut sink, last_end, p - last_end);
        last_end = p + factoring.length;
    }

    // ...and the tail.
    copy_bits(&mut cursor, &mut sink, last_end, n_bits - last_end);

    assert_eq!(
        sink.bits_written(),
        factoring.cost_bits,
        "serialized bits disagree with the cost formula"
    );
    sink.into_bytes()
}

fn copy_bits(cursor: &mut BitCursor, sink: &mut BitSink, from: u32, count: u32) {
    if count == 0 {
        return;
    }
    cursor.seek(from);
    for _ in 0..count {
        sink.write(cursor.next());
    }
}
