//! Enumerate every configuration of a fixed chain length.
//!
//! Prints one configuration per line in discovery order, then the count.
//!
//! Run with:
//!   cargo run --example enumerate -- LINK_COUNT

use reptate_matrix::all_with_n_links;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let link_count = match env::args().nth(1).and_then(|arg| arg.parse::<usize>().ok()) {
        Some(n) => n,
        None => {
            eprintln!("usage: enumerate LINK_COUNT");
            return ExitCode::FAILURE;
        }
    };

    match all_with_n_links(link_count) {
        Ok(states) => {
            for state in &states {
                println!("{state}");
            }
            eprintln!("{} configurations with {link_count} links", states.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
