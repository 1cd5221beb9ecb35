//! State-space closure and generator-matrix assembly.
//!
//! Builds on the single-step reachability of `reptate-chain`: the closure
//! discovers every configuration reachable from the fully-collapsed chain
//! by a breadth-first fixed point, and [`TransitionMatrix`] records the
//! aggregated transition rate for every ordered pair of configurations —
//! the off-diagonal part of the continuous-time Markov generator.
//!
//! Both computations have parallel variants that fan the per-state work out
//! across scoped worker threads and merge results in worker order, so the
//! parallel and serial paths produce identically-ordered output.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod closure;
pub mod matrix;

pub use closure::{all_with_n_links, all_with_n_links_parallel};
pub use matrix::TransitionMatrix;
