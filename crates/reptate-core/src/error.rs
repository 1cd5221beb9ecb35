//! Error types for the Reptate core.
//!
//! All failures in the model are construction-time failures: out-of-domain
//! link or move-type encodings, zero-length chains, and incomplete rate
//! tables. Everything downstream of a successful construction is total.

use crate::move_type::MoveType;
use std::error::Error;
use std::fmt;

/// Errors arising from chain or taxonomy construction.
///
/// Detected eagerly: once a value exists, no operation on it can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainError {
    /// Attempted to construct a polymer with zero links.
    EmptyChain,
    /// A byte that is not one of the five one-hot link encodings.
    InvalidLink {
        /// The offending byte.
        value: u8,
    },
    /// A byte that is not one of the eight one-hot move-type encodings.
    InvalidMoveType {
        /// The offending byte.
        value: u8,
    },
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyChain => write!(f, "polymer must have at least one link"),
            Self::InvalidLink { value } => {
                write!(f, "invalid link value {value:#04x}")
            }
            Self::InvalidMoveType { value } => {
                write!(f, "invalid move type value {value:#04x}")
            }
        }
    }
}

impl Error for ChainError {}

/// Errors from building a [`RateTable`](crate::rates::RateTable).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateTableError {
    /// A move type has no rate and the builder was given no default.
    ///
    /// Missing-entry behavior is an explicit caller choice: either assign
    /// every move type or configure a default rate.
    MissingRate {
        /// The unassigned move type.
        move_type: MoveType,
    },
}

impl fmt::Display for RateTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRate { move_type } => {
                write!(f, "no rate assigned for {move_type} and no default configured")
            }
        }
    }
}

impl Error for RateTableError {}
