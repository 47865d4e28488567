// src/lib.rs
//! bitfactor: iterative substring-factoring bit compressor.
//!
//! One round finds the single repeated bit-substring whose factoring
//! (pattern stored once, every later occurrence replaced by its offset)
//! costs the fewest encoded bits, then rewrites the buffer in that form.
//! Rounds repeat on their own output until nothing improves.

pub mod bitio;
pub mod bitreader;
pub mod bitwriter;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod factoring;
pub mod fold;
pub mod unfold;
pub mod varint;

pub use error::{Error, Result};
pub use factoring::Factoring;

/// Container layout:
///   Byte 0:            round_count
///   Bytes 1..5:        bit length of the final payload (big-endian u32)
///   Bytes 5..5+4N:     canonical pattern start of each round (big-endian
///                      u32), round 1 first, N = round_count
///   Byte 5+4N onward:  final round's payload
pub fn compress(input: &[u8], max_rounds: u8) -> Result<Vec<u8>> {
    let (payload, rounds_done, starts, final_bits) = fold::fold(input, max_rounds)?;

    let mut output = Vec::with_capacity(5 + starts.len() * 4 + payload.len());
    output.push(rounds_done);
    output.extend_from_slice(&final_bits.to_be_bytes());
    for &start in &starts {
        output.extend_from_slice(&start.to_be_bytes());
    }
    output.extend_from_slice(&payload);
    Ok(output)
}

pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    unfold::unfold(input)
}
