// src/varint.rs
//! Self-describing variable-width integer codec.
//!
//! A value occupies 8, 16, 24 or 32 bits total: a unary width tag of k zero
//! bits terminated by a one (k = 0..3 selecting the width), then the payload
//! written LSB first. Prefix-free, so the decoder learns the payload size
//! from the tag alone. 28 payload bits is the ceiling; offsets and lengths
//! above that are out of contract and rejected before encoding.

use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::bitio::BitSink;
use crate::error::{Error, Result};

/// Largest encodable value (28 payload bits).
pub const MAX_ENCODABLE: u32 = (1 << 28) - 1;

/// Total encoded width in bits for `x`: the smallest of {8, 16, 24, 32}
/// whose payload range covers the value.
pub fn encoded_bits(x: u32) -> u32 {
    if x < 128 {
        8
    } else if x < 32_768 {
        16
    } else if x < 8_388_608 {
        24
    } else {
        32
    }
}

/// Write the width tag and payload for `x`.
///
/// Width 8 is `1` + 7 payload bits, 16 is `01` + 14, 24 is `001` + 21,
/// 32 is `0001` + 28.
///
/// # Panics
/// If `x > MAX_ENCODABLE`.
pub fn write_encoded(sink: &mut BitSink, x: u32) {
    assert!(x <= MAX_ENCODABLE, "value {} exceeds encodable maximum", x);
    let width = encoded_bits(x);
    let tag_zeros = width / 8 - 1;
    for _ in 0..tag_zeros {
        sink.write(false);
    }
    sink.write(true);
    for i in 0..(width - tag_zeros - 1) {
        sink.write(x & (1 << i) != 0);
    }
}

/// Read one encoded value.
///
/// Four zero tag bits cannot occur in well-formed data and decode to
/// `Error::InvalidWidthPrefix`.
pub fn read_encoded<R: std::io::Read>(reader: &mut BitReader<R, BigEndian>) -> Result<u32> {
    let mut tag_zeros = 0u32;
    while reader.read::<u32>(1)? == 0 {
        tag_zeros += 1;
        if tag_zeros > 3 {
            return Err(Error::InvalidWidthPrefix);
        }
    }

    let width = (tag_zeros + 1) * 8;
    let mut x = 0u32;
    for i in 0..(width - tag_zeros - 1) {
        if reader.read::<u32>(1)? == 1 {
            x |= 1 << i;
        }
    }
    Ok(x)
}
