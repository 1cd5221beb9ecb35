//! Reptate: the Rubinstein–Duke repton lattice model of polymer reptation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Reptate sub-crates. For most users, adding `reptate` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use reptate::prelude::*;
//!
//! // Transition rates per move mechanism, with reptation and end
//! // extension free and everything else penalized.
//! let rates = RateTable::builder()
//!     .rate(MoveType::Reptation, 1.0)
//!     .rate(MoveType::EndExtension, 1.0)
//!     .default_rate(0.1)
//!     .build()
//!     .unwrap();
//!
//! // The generator matrix over every 2-link configuration.
//! let matrix = TransitionMatrix::build(2, &rates, |a, b| a + b).unwrap();
//! assert_eq!(matrix.size(), 25);
//!
//! // A taut end relaxing to slack carries the end-contraction rate.
//! let origin = Polymer::new([Link::Up, Link::Right]).unwrap();
//! let target = Polymer::new([Link::Slack, Link::Right]).unwrap();
//! assert_eq!(matrix.rate(&origin, &target), Some(&0.1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `reptate-core` | Link and move-type taxonomies, bitsets, rate tables, errors |
//! | [`chain`] | `reptate-chain` | Polymer configurations, pair addressing, move rules, reachability |
//! | [`matrix`] | `reptate-matrix` | State-space closure and generator-matrix assembly |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Link and move-type taxonomies, rate tables, and errors (`reptate-core`).
pub use reptate_core as types;

/// Polymer configurations and the move-rule engine (`reptate-chain`).
///
/// Provides [`chain::Polymer`] with its pair addressing ([`chain::LinkPair`])
/// and the [`chain::MoveRule`] operators in [`chain::RULES`].
pub use reptate_chain as chain;

/// State-space closure and generator-matrix assembly (`reptate-matrix`).
///
/// [`matrix::all_with_n_links`] discovers the full configuration space;
/// [`matrix::TransitionMatrix`] records the aggregated pairwise rates.
pub use reptate_matrix as matrix;

/// Common imports for typical Reptate usage.
///
/// ```rust
/// use reptate::prelude::*;
/// ```
pub mod prelude {
    // Taxonomies and rate tables
    pub use reptate_core::{Link, LinkSet, MoveSet, MoveType, RateTable};

    // Errors
    pub use reptate_core::{ChainError, RateTableError};

    // Chains and move rules
    pub use reptate_chain::{LinkPair, MoveRule, Polymer, RULES};

    // Closure and matrix assembly
    pub use reptate_matrix::{all_with_n_links, all_with_n_links_parallel, TransitionMatrix};
}
