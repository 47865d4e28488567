// src/fold.rs
//! Iterative round driver.
//!
//! Each round re-runs the whole-buffer factoring search on the previous
//! round's output. A round is applied only when its encoded cost beats the
//! buffer's literal size; the first round that fails to improve ends the
//! loop, as does an empty search or the round budget.

use crate::bitwriter::write_round;
use crate::encoder::scan;
use crate::error::{Error, Result};
use crate::varint::MAX_ENCODABLE;

/// Run up to `max_rounds` compression rounds over `input`.
///
/// Returns (payload, rounds done, canonical start per round, final bit
/// length). Zero rounds means the payload is the input itself.
pub fn fold(input: &[u8], max_rounds: u8) -> Result<(Vec<u8>, u8, Vec<u32>, u32)> {
    let input_bits = input.len() as u64 * 8;
    if input_bits > MAX_ENCODABLE as u64 {
        return Err(Error::InputTooLarge(input_bits));
    }

    let mut current = input.to_vec();
    let mut current_bits = input_bits as u32;
    let mut starts: Vec<u32> = Vec::new();

    println!("Original size: {} bits ({} bytes)", current_bits, input.len());

    for round in 1..=max_rounds {
        let found = match scan(&current, current_bits) {
            Some(f) => f,
            None => {
                println!("Round {}: no repeated substring, stopping", round);
                break;
            }
        };

        if found.cost_bits >= current_bits {
            println!(
                "Round {} not worth it ({} bits vs {}), stopping",
                round, found.cost_bits, current_bits
            );
            break;
        }

        current = write_round(&current, current_bits, &found);
        current_bits = found.cost_bits;
        starts.push(found.start);
        println!(
            "Round {}: {} bits ({} bytes)",
            round,
            current_bits,
            current.len()
        );
    }

    let rounds_done = starts.len() as u8;
    Ok((current, rounds_done, starts, current_bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_shrink_across_rounds() {
        let input = vec![0u8; 100];
        let (payload, rounds, starts, final_bits) = fold(&input, 10).unwrap();
        assert!(rounds >= 1);
        assert_eq!(starts.len(), rounds as usize);
        assert!(final_bits < 800);
        assert!(payload.len() * 8 >= final_bits as usize);
    }

    #[test]
    fn aperiodic_input_runs_zero_rounds() {
        let input = [0x1B, 0x2E, 0x4C, 0x87, 0x3A, 0x91, 0xD5, 0x60];
        let (payload, rounds, starts, final_bits) = fold(&input, 10).unwrap();
        assert_eq!(rounds, 0);
        assert!(starts.is_empty());
        assert_eq!(final_bits, 64);
        assert_eq!(payload, input);
    }

    #[test]
    fn empty_input_runs_zero_rounds() {
        let (payload, rounds, _, final_bits) = fold(&[], 10).unwrap();
        assert_eq!(rounds, 0);
        assert_eq!(final_bits, 0);
        assert!(payload.is_empty());
    }

    #[test]
    fn round_budget_is_respected() {
        let input = vec![0u8; 100];
        let (_, rounds, _, _) = fold(&input, 1).unwrap();
        assert_eq!(rounds, 1);
    }
}
