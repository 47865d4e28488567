// src/unfold.rs
//! Reverses recorded rounds, last to first.
//! The container header carries what the per-round wire cannot: how many
//! rounds ran, the exact bit length of the final payload, and each round's
//! canonical pattern start.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitReader};

use crate::bitreader::read_header;
use crate::decoder::reconstruct;
use crate::error::{Error, Result};
use crate::varint::MAX_ENCODABLE;

/// Undo every round recorded in a container produced by `compress`.
pub fn unfold(input: &[u8]) -> Result<Vec<u8>> {
    if input.len() < 5 {
        return Err(Error::CorruptHeader(format!(
            "container of {} bytes is shorter than its fixed header",
            input.len()
        )));
    }

    let rounds = input[0] as usize;
    let final_bits = u32::from_be_bytes([input[1], input[2], input[3], input[4]]);
    if final_bits > MAX_ENCODABLE {
        return Err(Error::CorruptHeader(format!(
            "final payload length {} bits is out of range",
            final_bits
        )));
    }

    let starts_end = 5 + rounds * 4;
    if input.len() < starts_end {
        return Err(Error::CorruptHeader(format!(
            "start table truncated: {} rounds need {} bytes",
            rounds, starts_end
        )));
    }
    let starts: Vec<u32> = (0..rounds)
        .map(|r| {
            let o = 5 + r * 4;
            u32::from_be_bytes([input[o], input[o + 1], input[o + 2], input[o + 3]])
        })
        .collect();

    let payload = &input[starts_end..];
    if (payload.len() as u64) * 8 < final_bits as u64 {
        return Err(Error::CorruptHeader(format!(
            "payload holds {} bits, header claims {}",
            payload.len() * 8,
            final_bits
        )));
    }

    println!("Unfolding {} rounds...", rounds);

    let mut current = payload.to_vec();
    let mut current_bits = final_bits;

    for round in (1..=rounds).rev() {
        let mut reader = BitReader::endian(Cursor::new(current.as_slice()), BigEndian);
        let header = read_header(&mut reader)?;
        let (bytes, bits) = reconstruct(&mut reader, &header, current_bits, starts[round - 1])?;
        println!("Unfold round {}: {} bits", round, bits);
        current = bytes;
        current_bits = bits;
    }

    // The first round's source was plain bytes; anything else means the
    // header and payload disagree.
    if current_bits % 8 != 0 {
        return Err(Error::CorruptStream(format!(
            "unfolded to {} bits, not a whole number of bytes",
            current_bits
        )));
    }
    current.truncate(current_bits as usize / 8);
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_container_is_rejected() {
        assert!(matches!(
            unfold(&[1, 0, 0]),
            Err(Error::CorruptHeader(_))
        ));
    }

    #[test]
    fn missing_start_table_is_rejected() {
        // Two rounds claimed, no start table.
        assert!(matches!(
            unfold(&[2, 0, 0, 0, 8]),
            Err(Error::CorruptHeader(_))
        ));
    }

    #[test]
    fn short_payload_is_rejected() {
        // Zero rounds, 16 payload bits claimed, one byte present.
        assert!(matches!(
            unfold(&[0, 0, 0, 0, 16, 0xAA]),
            Err(Error::CorruptHeader(_))
        ));
    }

    #[test]
    fn zero_round_container_is_identity() {
        let out = unfold(&[0, 0, 0, 0, 16, 0xAA, 0xBB]).unwrap();
        assert_eq!(out, vec![0xAA, 0xBB]);
    }
}
