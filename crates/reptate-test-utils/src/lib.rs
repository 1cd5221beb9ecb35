//! Shared test fixtures for the Reptate workspace.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{chain, every_move_chain, hernias};
