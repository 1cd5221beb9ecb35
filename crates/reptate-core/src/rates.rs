//! The [`RateTable`] mapping move types to caller-supplied rates.
//!
//! Rates are generic: physical generators use `f64` with addition as the
//! combine operator; diagnostics use [`MoveSet`](crate::MoveSet) with union.
//! The core never invents rates — a table is always supplied by the caller,
//! and missing entries are an explicit configuration choice, never a silent
//! zero.

use crate::error::RateTableError;
use crate::move_type::MoveType;

/// A total mapping from [`MoveType`] to a rate value.
///
/// Built via [`RateTable::builder`]. Once built, [`RateTable::get`] is total:
/// every move type has a rate.
///
/// # Examples
///
/// ```
/// use reptate_core::{MoveType, RateTable};
///
/// let table = RateTable::builder()
///     .rate(MoveType::Reptation, 1.0)
///     .rate(MoveType::EndExtension, 1.0)
///     .default_rate(0.1)
///     .build()
///     .unwrap();
/// assert_eq!(*table.get(MoveType::Reptation), 1.0);
/// assert_eq!(*table.get(MoveType::BarrierCrossing), 0.1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateTable<R> {
    // Indexed by `MoveType::index()`; length is always `MoveType::COUNT`.
    rates: Vec<R>,
}

impl<R: Clone> RateTable<R> {
    /// Start building a rate table.
    pub fn builder() -> RateTableBuilder<R> {
        RateTableBuilder {
            entries: std::array::from_fn(|_| None),
            default: None,
        }
    }

    /// A table assigning the same rate to every move type.
    pub fn uniform(rate: R) -> Self {
        Self {
            rates: vec![rate; MoveType::COUNT],
        }
    }

    /// The rate assigned to a move type. Total on a built table.
    pub fn get(&self, move_type: MoveType) -> &R {
        &self.rates[move_type.index()]
    }
}

impl RateTable<crate::MoveSet> {
    /// The diagnostic table: each move type maps to its own singleton set.
    ///
    /// Combined with [`MoveSet::union`](crate::MoveSet::union), transition
    /// rates computed against this table record exactly which mechanisms
    /// produced each transition.
    pub fn diagnostic() -> Self {
        Self {
            rates: MoveType::ALL.iter().map(|&m| crate::MoveSet::only(m)).collect(),
        }
    }
}

/// Builder for [`RateTable`].
///
/// Every move type must receive a rate, either individually via
/// [`rate`](RateTableBuilder::rate) or through the fallback configured with
/// [`default_rate`](RateTableBuilder::default_rate); otherwise
/// [`build`](RateTableBuilder::build) fails with
/// [`RateTableError::MissingRate`].
#[derive(Clone, Debug)]
pub struct RateTableBuilder<R> {
    entries: [Option<R>; MoveType::COUNT],
    default: Option<R>,
}

impl<R: Clone> RateTableBuilder<R> {
    /// Assign a rate to one move type. Later assignments overwrite earlier ones.
    pub fn rate(mut self, move_type: MoveType, rate: R) -> Self {
        self.entries[move_type.index()] = Some(rate);
        self
    }

    /// Configure the fallback rate used for every unassigned move type.
    pub fn default_rate(mut self, rate: R) -> Self {
        self.default = Some(rate);
        self
    }

    /// Finalize the table.
    ///
    /// Fails with [`RateTableError::MissingRate`] naming the first move
    /// type (in bit order) that has neither an assignment nor a default.
    pub fn build(self) -> Result<RateTable<R>, RateTableError> {
        let mut rates = Vec::with_capacity(MoveType::COUNT);
        for (slot, entry) in self.entries.into_iter().enumerate() {
            match entry.or_else(|| self.default.clone()) {
                Some(rate) => rates.push(rate),
                None => {
                    return Err(RateTableError::MissingRate {
                        move_type: MoveType::ALL[slot],
                    })
                }
            }
        }
        Ok(RateTable { rates })
    }
}
