//! The [`MoveType`] taxonomy and the [`MoveSet`] bitset.

use crate::error::ChainError;
use std::fmt;

/// The physical mechanism responsible for one elementary chain transition.
///
/// Each move type is one-hot encoded (`1 << 0` through `1 << 7`) so that
/// when several mechanisms produce the same resulting configuration, the
/// responsible kinds can be aggregated into a [`MoveSet`] by bitwise union
/// without losing which kinds occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoveType {
    /// Two adjacent slack links fold out into an opposite-direction pair.
    HerniaCreation,
    /// A slack link and a taut neighbour exchange positions along the chain.
    Reptation,
    /// A perpendicular link pair flips to the mirrored corner.
    BarrierCrossing,
    /// A hernia collapses back into two slack links.
    HerniaAnnihilation,
    /// A hernia reorients into one of the other opposite-direction pairs.
    HerniaRedirection,
    /// A taut end link relaxes to slack.
    EndContraction,
    /// A slack end link extends into one of the four taut directions.
    EndExtension,
    /// A taut end link swings to a different taut direction.
    EndWiggle,
}

impl MoveType {
    /// Number of move types.
    pub const COUNT: usize = 8;

    /// All eight move types, in bit order.
    pub const ALL: [MoveType; MoveType::COUNT] = [
        MoveType::HerniaCreation,
        MoveType::Reptation,
        MoveType::BarrierCrossing,
        MoveType::HerniaAnnihilation,
        MoveType::HerniaRedirection,
        MoveType::EndContraction,
        MoveType::EndExtension,
        MoveType::EndWiggle,
    ];

    /// Index of this move type in [`MoveType::ALL`] (its bit position).
    pub fn index(self) -> usize {
        match self {
            Self::HerniaCreation => 0,
            Self::Reptation => 1,
            Self::BarrierCrossing => 2,
            Self::HerniaAnnihilation => 3,
            Self::HerniaRedirection => 4,
            Self::EndContraction => 5,
            Self::EndExtension => 6,
            Self::EndWiggle => 7,
        }
    }

    /// One-hot bit encoding of this move type.
    pub fn bit(self) -> u8 {
        1 << self.index()
    }

    /// Decode a one-hot bit back into a move type.
    ///
    /// Returns `Err(ChainError::InvalidMoveType)` for any byte that is not
    /// exactly one of the eight valid encodings.
    pub fn from_bit(value: u8) -> Result<Self, ChainError> {
        if value.count_ones() == 1 {
            Ok(Self::ALL[value.trailing_zeros() as usize])
        } else {
            Err(ChainError::InvalidMoveType { value })
        }
    }
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HerniaCreation => "hernia creation",
            Self::Reptation => "reptation",
            Self::BarrierCrossing => "barrier crossing",
            Self::HerniaAnnihilation => "hernia annihilation",
            Self::HerniaRedirection => "hernia redirection",
            Self::EndContraction => "end contraction",
            Self::EndExtension => "end extension",
            Self::EndWiggle => "end wiggle",
        };
        write!(f, "{name}")
    }
}

/// A set of move types implemented as a `u8`-backed bitset.
///
/// This is the diagnostic rate value: a rate table of singleton `MoveSet`s
/// combined with [`MoveSet::union`] records exactly which mechanisms
/// contributed to each transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveSet {
    bits: u8,
}

impl MoveSet {
    /// Create an empty move set.
    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    /// The singleton set containing one move type.
    pub fn only(move_type: MoveType) -> Self {
        Self {
            bits: move_type.bit(),
        }
    }

    /// Insert a move type into the set.
    pub fn insert(&mut self, move_type: MoveType) {
        self.bits |= move_type.bit();
    }

    /// Check whether the set contains a move type.
    pub fn contains(&self, move_type: MoveType) -> bool {
        self.bits & move_type.bit() != 0
    }

    /// Return the union of two sets (`self | other`).
    ///
    /// Associative and commutative, making it a valid `combine` operator
    /// for rate aggregation.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns `true` if the set contains no move types.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the number of move types in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate over the move types in the set, in bit order.
    pub fn iter(&self) -> MoveSetIter {
        MoveSetIter {
            bits: self.bits,
            index: 0,
        }
    }
}

impl FromIterator<MoveType> for MoveSet {
    fn from_iter<I: IntoIterator<Item = MoveType>>(iter: I) -> Self {
        let mut set = Self::empty();
        for move_type in iter {
            set.insert(move_type);
        }
        set
    }
}

impl IntoIterator for &MoveSet {
    type Item = MoveType;
    type IntoIter = MoveSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the move types in a [`MoveSet`], in bit order.
pub struct MoveSetIter {
    bits: u8,
    index: usize,
}

impl Iterator for MoveSetIter {
    type Item = MoveType;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < MoveType::COUNT {
            let move_type = MoveType::ALL[self.index];
            self.index += 1;
            if self.bits & move_type.bit() != 0 {
                return Some(move_type);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bits_are_one_hot_and_distinct() {
        let mut seen = 0u8;
        for move_type in MoveType::ALL {
            let bit = move_type.bit();
            assert_eq!(bit.count_ones(), 1);
            assert_eq!(seen & bit, 0, "{move_type} reuses a bit");
            seen |= bit;
        }
        assert_eq!(seen, 0xff);
    }

    #[test]
    fn from_bit_round_trips_every_move_type() {
        for move_type in MoveType::ALL {
            assert_eq!(MoveType::from_bit(move_type.bit()), Ok(move_type));
        }
    }

    #[test]
    fn from_bit_rejects_out_of_domain_bytes() {
        for value in [0u8, 3, 5, 255] {
            assert_eq!(
                MoveType::from_bit(value),
                Err(ChainError::InvalidMoveType { value })
            );
        }
    }

    fn arb_move_set() -> impl Strategy<Value = MoveSet> {
        prop::collection::vec(0usize..MoveType::COUNT, 0..12).prop_map(|ids| {
            ids.into_iter()
                .map(|i| MoveType::ALL[i])
                .collect::<MoveSet>()
        })
    }

    proptest! {
        #[test]
        fn union_commutative(a in arb_move_set(), b in arb_move_set()) {
            prop_assert_eq!(a.union(&b), b.union(&a));
        }

        #[test]
        fn union_associative(
            a in arb_move_set(),
            b in arb_move_set(),
            c in arb_move_set(),
        ) {
            prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
        }

        #[test]
        fn union_identity(a in arb_move_set()) {
            prop_assert_eq!(a.union(&MoveSet::empty()), a);
        }

        #[test]
        fn union_idempotent(a in arb_move_set()) {
            prop_assert_eq!(a.union(&a), a);
        }

        #[test]
        fn singleton_contains_only_its_member(i in 0usize..MoveType::COUNT) {
            let move_type = MoveType::ALL[i];
            let set = MoveSet::only(move_type);
            prop_assert_eq!(set.len(), 1);
            for other in MoveType::ALL {
                prop_assert_eq!(set.contains(other), other == move_type);
            }
        }

        #[test]
        fn len_matches_iter_count(a in arb_move_set()) {
            prop_assert_eq!(a.len(), a.iter().count());
        }
    }
}
