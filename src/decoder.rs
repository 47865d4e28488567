// src/decoder.rs
//! Rebuilds the previous round's bit sequence from a parsed header, the
//! recorded canonical start, and the round's remaining payload.
//!
//! The previous sequence's length is derived, not transmitted: a round of
//! `total_bits` spends `header_bits + length` on bookkeeping and pattern,
//! and every occurrence deleted `length` bits, so the original held
//! `total_bits - header_bits + length * count` bits. All span arithmetic is
//! validated before any bit is emitted; inconsistencies are data errors.

use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::bitio::{BitCursor, BitSink};
use crate::bitreader::RoundHeader;
use crate::error::{Error, Result};
use crate::varint::MAX_ENCODABLE;

/// Reconstruct the sequence a `total_bits`-bit round was built from.
/// `reader` must be positioned right after the round's header. Returns the
/// rebuilt bytes and their bit length.
pub fn reconstruct<R: std::io::Read>(
    reader: &mut BitReader<R, BigEndian>,
    header: &RoundHeader,
    total_bits: u32,
    start: u32,
) -> Result<(Vec<u8>, u32)> {
    let length = header.length;
    let count = header.occurrences.len() as u32;

    if (total_bits as u64) < header.header_bits as u64 + length as u64 {
        return Err(Error::CorruptStream(format!(
            "{}-bit round cannot hold its {}-bit header and {}-bit pattern",
            total_bits, header.header_bits, length
        )));
    }

    let original_bits =
        total_bits as u64 - header.header_bits as u64 + length as u64 * count as u64;
    if original_bits > MAX_ENCODABLE as u64 {
        return Err(Error::CorruptStream(format!(
            "derived original length {} bits is out of range",
            original_bits
        )));
    }
    let original_bits = original_bits as u32;

    // Every pattern instance must lie inside the derived sequence, in
    // order, without overlap.
    if start as u64 + length as u64 > original_bits as u64 {
        return Err(Error::CorruptStream(format!(
            "canonical instance at {} overruns {} bits",
            start, original_bits
        )));
    }
    let mut end = start + length;
    for &p in &header.occurrences {
        if p < end {
            return Err(Error::CorruptStream(format!(
                "occurrence at {} overlaps the previous instance ending at {}",
                p, end
            )));
        }
        if p as u64 + length as u64 > original_bits as u64 {
            return Err(Error::CorruptStream(format!(
                "occurrence at {} overruns {} bits",
                p, original_bits
            )));
        }
        end = p + length;
    }

    // Pattern bits, buffered once so each instance can replay them.
    let mut pattern = BitSink::with_capacity(length);
    for _ in 0..length {
        pattern.write(reader.read::<u32>(1)? == 1);
    }
    let pattern = pattern.into_bytes();

    // Interleave literal spans with pattern instances, left to right.
    let mut out = BitSink::with_capacity(original_bits);
    copy_literals(reader, &mut out, start)?;
    emit_pattern(&pattern, length, &mut out);

    let mut last_end = start + length;
    for &p in &header.occurrences {
        copy_literals(reader, &mut out, p - last_end)?;
        emit_pattern(&pattern, length, &mut out);
        last_end = p + length;
    }
    copy_literals(reader, &mut out, original_bits - last_end)?;

    debug_assert_eq!(out.bits_written(), original_bits);
    Ok((out.into_bytes(), original_bits))
}

fn copy_literals<R: std::io::Read>(
    reader: &mut BitReader<R, BigEndian>,
    out: &mut BitSink,
    count: u32,
) -> Result<()> {
    for _ in 0..count {
        out.write(reader.read::<u32>(1)? == 1);
    }
    Ok(())
}

fn emit_pattern(pattern: &[u8], length: u32, out: &mut BitSink) {
    let mut cur = BitCursor::new(pattern, length);
    for _ in 0..length {
        out.write(cur.next());
    }
}
