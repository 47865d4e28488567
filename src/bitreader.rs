// src/bitreader.rs
//! Parses one round's varint header back off a wire stream.
//! The canonical start is not on the wire (it travels in the container
//! header), so parsing stops after the occurrence table; the pattern and
//! literal payload stay in the reader for reconstruction.

use bitstream_io::{BigEndian, BitReader};

use crate::error::{Error, Result};
use crate::varint;

/// Parsed header of one round.
pub struct RoundHeader {
    /// Pattern length in bits.
    pub length: u32,
    /// Occurrence bit offsets in the round's original sequence.
    pub occurrences: Vec<u32>,
    /// Bits the header itself occupied on the wire.
    pub header_bits: u32,
}

/// Read length, occurrence count and the occurrence table.
pub fn read_header<R: std::io::Read>(reader: &mut BitReader<R, BigEndian>) -> Result<RoundHeader> {
    let length = varint::read_encoded(reader)?;
    if length == 0 {
        return Err(Error::CorruptStream("zero pattern length".into()));
    }

    let count = varint::read_encoded(reader)?;
    let mut header_bits = varint::encoded_bits(length) + varint::encoded_bits(count);

    let mut occurrences = Vec::new();
    for _ in 0..count {
        let p = varint::read_encoded(reader)?;
        header_bits += varint::encoded_bits(p);
        occurrences.push(p);
    }

    Ok(RoundHeader {
        length,
        occurrences,
        header_bits,
    })
}
