//! Print the dense generator matrix for a fixed chain length.
//!
//! Reptation and end extension run at unit rate; hernia moves and end
//! relaxation run at rate H, barrier crossing at rate C. States are sorted
//! into a total order before rendering — that ordering is presentation
//! policy, not part of the model.
//!
//! Run with:
//!   cargo run --example rate_matrix -- LINK_COUNT H C

use reptate_core::{MoveType, RateTable};
use reptate_matrix::TransitionMatrix;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let parsed = (
        args.next().and_then(|arg| arg.parse::<usize>().ok()),
        args.next().and_then(|arg| arg.parse::<f64>().ok()),
        args.next().and_then(|arg| arg.parse::<f64>().ok()),
    );
    let (link_count, h, c) = match parsed {
        (Some(n), Some(h), Some(c)) => (n, h, c),
        _ => {
            eprintln!("usage: rate_matrix LINK_COUNT H C");
            return ExitCode::FAILURE;
        }
    };

    let rates = match RateTable::builder()
        .rate(MoveType::Reptation, 1.0)
        .rate(MoveType::HerniaCreation, h)
        .rate(MoveType::HerniaAnnihilation, h)
        .rate(MoveType::HerniaRedirection, h)
        .rate(MoveType::BarrierCrossing, c)
        .rate(MoveType::EndExtension, 1.0)
        .rate(MoveType::EndContraction, h)
        .rate(MoveType::EndWiggle, h)
        .build()
    {
        Ok(rates) => rates,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let matrix = match TransitionMatrix::build(link_count, &rates, |a, b| a + b) {
        Ok(matrix) => matrix,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut order: Vec<_> = matrix.states().iter().collect();
    order.sort_unstable();

    for origin in &order {
        let row: Vec<String> = order
            .iter()
            .map(|target| {
                let rate = matrix.rate(origin, target).copied().unwrap_or(0.0);
                format!("{rate}")
            })
            .collect();
        println!("{}", row.join(" "));
    }
    eprintln!("{0} x {0} generator for {link_count} links", matrix.size());
    ExitCode::SUCCESS
}
