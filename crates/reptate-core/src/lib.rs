//! Core taxonomies for the Reptate repton model.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! closed [`Link`] and [`MoveType`] enumerations with their relational data
//! (opposites, perpendicularity), the bitset types used to aggregate them
//! ([`LinkSet`], [`MoveSet`]), the [`RateTable`] mapping move types to
//! caller-supplied rates, and the error types for construction failures.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod link;
pub mod move_type;
pub mod rates;

pub use error::{ChainError, RateTableError};
pub use link::{Link, LinkSet, LinkSetIter};
pub use move_type::{MoveSet, MoveSetIter, MoveType};
pub use rates::{RateTable, RateTableBuilder};
