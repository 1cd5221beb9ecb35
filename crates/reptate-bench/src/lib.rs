//! Benchmark profiles and utilities for the Reptate workspace.
//!
//! Provides deterministic chain generation for benchmarks and examples:
//! the same seed always yields the same chain, keeping criterion runs
//! comparable across machines and commits.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use reptate_chain::Polymer;
use reptate_core::Link;

/// Generate a deterministic pseudo-random chain of `link_count` links.
///
/// Uses a simple multiplicative hash of the seed and position; no RNG
/// dependency, same result on every run.
///
/// # Panics
///
/// Panics if `link_count` is 0; benchmark chains are always non-empty.
pub fn pseudo_random_chain(link_count: usize, seed: u64) -> Polymer {
    let links = (0..link_count as u64).map(|i| {
        let h = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i.wrapping_mul(1442695040888963407));
        Link::ALL[(h % Link::ALL.len() as u64) as usize]
    });
    Polymer::new(links).expect("benchmark chains are non-empty")
}
