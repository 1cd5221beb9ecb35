//! The [`Link`] taxonomy and the [`LinkSet`] bitset.

use crate::error::ChainError;
use std::fmt;

/// One bond of a polymer chain on the 2D lattice.
///
/// A taut link displaces two consecutive reptons by one lattice unit in the
/// given direction; a [`Link::Slack`] link carries no tension, leaving both
/// reptons in the same cell.
///
/// Exactly these five values exist. Each link has a one-hot bit encoding
/// (`1 << 0` through `1 << 4`) so that sets of links can be represented as
/// a [`LinkSet`] and combined by bitwise union.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Link {
    /// Taut bond pointing up.
    Up,
    /// Taut bond pointing down.
    Down,
    /// Taut bond pointing left.
    Left,
    /// Taut bond pointing right.
    Right,
    /// No tension; the bonded reptons coincide.
    Slack,
}

impl Link {
    /// All five link values, in canonical order.
    pub const ALL: [Link; 5] = [Link::Up, Link::Down, Link::Left, Link::Right, Link::Slack];

    /// The four taut directions (everything except [`Link::Slack`]).
    pub const TAUT: [Link; 4] = [Link::Up, Link::Down, Link::Left, Link::Right];

    /// One-hot bit encoding of this link.
    pub fn bit(self) -> u8 {
        match self {
            Self::Up => 1 << 0,
            Self::Down => 1 << 1,
            Self::Left => 1 << 2,
            Self::Right => 1 << 3,
            Self::Slack => 1 << 4,
        }
    }

    /// Decode a one-hot bit back into a link.
    ///
    /// Returns `Err(ChainError::InvalidLink)` for any byte that is not
    /// exactly one of the five valid encodings.
    pub fn from_bit(value: u8) -> Result<Self, ChainError> {
        match value {
            v if v == Self::Up.bit() => Ok(Self::Up),
            v if v == Self::Down.bit() => Ok(Self::Down),
            v if v == Self::Left.bit() => Ok(Self::Left),
            v if v == Self::Right.bit() => Ok(Self::Right),
            v if v == Self::Slack.bit() => Ok(Self::Slack),
            _ => Err(ChainError::InvalidLink { value }),
        }
    }

    /// Returns `true` for [`Link::Slack`].
    pub fn is_slack(self) -> bool {
        self == Self::Slack
    }

    /// Returns `true` for the four taut directions.
    pub fn is_taut(self) -> bool {
        !self.is_slack()
    }

    /// The opposite direction: Up↔Down, Left↔Right. Slack is its own opposite.
    pub fn opposite(self) -> Link {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Slack => Self::Slack,
        }
    }

    /// Returns `true` if `self` is horizontal and `other` vertical, or
    /// vice versa. Symmetric; always `false` when either side is slack.
    pub fn is_perpendicular_to(self, other: Link) -> bool {
        let horizontal = |link: Link| matches!(link, Self::Left | Self::Right);
        let vertical = |link: Link| matches!(link, Self::Up | Self::Down);
        (horizontal(self) && vertical(other)) || (vertical(self) && horizontal(other))
    }

    /// Single-letter form used in compact chain rendering.
    pub fn letter(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Slack => 'S',
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A set of links implemented as a `u8`-backed bitset.
///
/// Membership tests and unions are single bitwise operations, which keeps
/// the move engine's per-position set algebra cheap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LinkSet {
    bits: u8,
}

impl LinkSet {
    /// Create an empty link set.
    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    /// The set of all five links.
    pub fn all() -> Self {
        Link::ALL.into_iter().collect()
    }

    /// Insert a link into the set.
    pub fn insert(&mut self, link: Link) {
        self.bits |= link.bit();
    }

    /// Check whether the set contains a link.
    pub fn contains(&self, link: Link) -> bool {
        self.bits & link.bit() != 0
    }

    /// Return the union of two sets (`self | other`).
    pub fn union(&self, other: &Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Return the intersection of two sets (`self & other`).
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns `true` if the set contains no links.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the number of links in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate over the links in the set, in canonical order.
    pub fn iter(&self) -> LinkSetIter {
        LinkSetIter {
            bits: self.bits,
            index: 0,
        }
    }
}

impl FromIterator<Link> for LinkSet {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        let mut set = Self::empty();
        for link in iter {
            set.insert(link);
        }
        set
    }
}

impl IntoIterator for &LinkSet {
    type Item = Link;
    type IntoIter = LinkSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the links in a [`LinkSet`], in canonical order.
pub struct LinkSetIter {
    bits: u8,
    index: usize,
}

impl Iterator for LinkSetIter {
    type Item = Link;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < Link::ALL.len() {
            let link = Link::ALL[self.index];
            self.index += 1;
            if self.bits & link.bit() != 0 {
                return Some(link);
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
    fn from_bit_round_trips_every_link() {
        for link in Link::ALL {
            assert_eq!(Link::from_bit(link.bit()), Ok(link));
        }
    }

    #[test]
    fn from_bit_rejects_out_of_domain_bytes() {
        for value in [0u8, 3, 5, 32, 64, 255] {
            assert_eq!(
                Link::from_bit(value),
                Err(ChainError::InvalidLink { value })
            );
        }
    }

    #[test]
    fn opposites_pair_up() {
        assert_eq!(Link::Up.opposite(), Link::Down);
        assert_eq!(Link::Down.opposite(), Link::Up);
        assert_eq!(Link::Left.opposite(), Link::Right);
        assert_eq!(Link::Right.opposite(), Link::Left);
        assert_eq!(Link::Slack.opposite(), Link::Slack);
    }

    #[test]
    fn opposite_is_involutive() {
        for link in Link::ALL {
            assert_eq!(link.opposite().opposite(), link);
        }
    }

    #[test]
    fn perpendicular_pairs_mix_axes() {
        assert!(Link::Up.is_perpendicular_to(Link::Left));
        assert!(Link::Right.is_perpendicular_to(Link::Down));
        assert!(!Link::Up.is_perpendicular_to(Link::Down));
        assert!(!Link::Left.is_perpendicular_to(Link::Right));
    }

    #[test]
    fn slack_is_perpendicular_to_nothing() {
        for link in Link::ALL {
            assert!(!Link::Slack.is_perpendicular_to(link));
            assert!(!link.is_perpendicular_to(Link::Slack));
        }
    }

    #[test]
    fn taut_excludes_slack() {
        assert_eq!(Link::TAUT.len(), 4);
        assert!(Link::TAUT.iter().all(|link| link.is_taut()));
    }

    fn arb_link_set() -> impl Strategy<Value = LinkSet> {
        prop::collection::vec(0usize..Link::ALL.len(), 0..8)
            .prop_map(|ids| ids.into_iter().map(|i| Link::ALL[i]).collect::<LinkSet>())
    }

    proptest! {
        #[test]
        fn perpendicularity_is_symmetric(a in 0usize..5, b in 0usize..5) {
            let (a, b) = (Link::ALL[a], Link::ALL[b]);
            prop_assert_eq!(a.is_perpendicular_to(b), b.is_perpendicular_to(a));
        }

        #[test]
        fn union_commutative(a in arb_link_set(), b in arb_link_set()) {
            prop_assert_eq!(a.union(&b), b.union(&a));
        }

        #[test]
        fn union_associative(
            a in arb_link_set(),
            b in arb_link_set(),
            c in arb_link_set(),
        ) {
            prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
        }

        #[test]
        fn union_identity(a in arb_link_set()) {
            prop_assert_eq!(a.union(&LinkSet::empty()), a);
        }

        #[test]
        fn union_idempotent(a in arb_link_set()) {
            prop_assert_eq!(a.union(&a), a);
        }

        #[test]
        fn intersection_with_empty(a in arb_link_set()) {
            prop_assert_eq!(a.intersection(&LinkSet::empty()), LinkSet::empty());
        }

        #[test]
        fn len_matches_iter_count(a in arb_link_set()) {
            prop_assert_eq!(a.len(), a.iter().count());
        }

        #[test]
        fn insert_contains(i in 0usize..5) {
            let mut set = LinkSet::empty();
            set.insert(Link::ALL[i]);
            prop_assert!(set.contains(Link::ALL[i]));
            prop_assert_eq!(set.len(), 1);
        }
    }
}
