//! bitfactor CLI
//! Usage:
//!   bitfactor compress   <input_file> <output_file>
//!   bitfactor decompress <input_file> <output_file>
//!   bitfactor bench      [n_bytes]

use std::{env, fs, process};

use rand::RngCore;

const DEFAULT_ROUNDS: u8 = 10;
const DEFAULT_BENCH_BYTES: usize = 1000;

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("compress") if args.len() == 4 => run_file(&args[2], &args[3], true),
        Some("decompress") if args.len() == 4 => run_file(&args[2], &args[3], false),
        Some("bench") if args.len() <= 3 => {
            let n_bytes = match args.get(2) {
                Some(raw) => raw.parse().unwrap_or_else(|_| {
                    eprintln!("Invalid byte count: {}", raw);
                    process::exit(1);
                }),
                None => DEFAULT_BENCH_BYTES,
            };
            bench(n_bytes);
        }
        _ => {
            eprintln!("Usage:");
            eprintln!("  bitfactor compress   <input> <output>");
            eprintln!("  bitfactor decompress <input> <output>");
            eprintln!("  bitfactor bench      [n_bytes]");
            process::exit(1);
        }
    }
}

fn run_file(input_path: &str, output_path: &str, compressing: bool) {
    let input = fs::read(input_path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", input_path, e);
        process::exit(1);
    });

    let result = if compressing {
        bitfactor::compress(&input, DEFAULT_ROUNDS)
    } else {
        bitfactor::decompress(&input)
    };

    match result {
        Ok(output) => {
            fs::write(output_path, &output).unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {}", output_path, e);
                process::exit(1);
            });
            println!("Done. {} bytes → {} bytes", input.len(), output.len());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Synthetic benchmark: a pseudo-random buffer pushed through the full
/// round budget. Random noise rarely repeats, so this mostly exercises the
/// search's give-up path; feed a real file to see rounds stack up.
fn bench(n_bytes: usize) {
    let mut input = vec![0u8; n_bytes];
    rand::thread_rng().fill_bytes(&mut input);

    println!("Initial length : {} bytes ({} bits)", n_bytes, n_bytes * 8);
    println!();

    match bitfactor::compress(&input, DEFAULT_ROUNDS) {
        Ok(output) => {
            println!();
            println!(
                "Final container: {} bytes (from {} bytes)",
                output.len(),
                n_bytes
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
