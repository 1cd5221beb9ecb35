//! Polymer chain configurations and the elementary-move rule engine.
//!
//! This crate defines [`Polymer`] — an immutable chain of
//! [`Link`](reptate_core::Link)s on the 2D lattice — together with the
//! link-pair addressing scheme ([`LinkPair`]) that is the sole mutation
//! primitive, and the eight elementary-move rules of the Rubinstein–Duke
//! repton model expressed as independent [`MoveRule`] operators.
//!
//! Single-step reachability and rate aggregation
//! ([`Polymer::reachable_from`], [`Polymer::transition_rates`]) live here;
//! the state-space closure and generator-matrix assembly built on top of
//! them live in `reptate-matrix`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod pair;
pub mod polymer;
pub mod reach;
pub mod rules;

pub use pair::LinkPair;
pub use polymer::Polymer;
pub use rules::{MoveRule, Outcomes, RULES};
