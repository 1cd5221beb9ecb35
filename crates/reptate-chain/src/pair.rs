//! The link-pair view: positional addressing over a padded chain.
//!
//! Chain positions are addressed through a virtual view of length N+1 —
//! one position per repton. Position `p` sees the link entering the repton
//! (`prev`, which is `links[p-1]`) and the link leaving it (`next`, which is
//! `links[p]`). At the two chain ends one side is the boundary, represented
//! by `None`.

use reptate_core::Link;

/// The pair of links adjacent to one repton, with `None` as the boundary
/// sentinel at the two chain ends.
///
/// All elementary-move predicates are defined on this view: the boundary
/// rules fire only where one side is `None`, the interior rules only where
/// both sides are real links, so no rule can double-fire across the
/// edge/interior split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkPair {
    /// The link entering this repton (`links[p-1]`), or `None` at the head.
    pub prev: Option<Link>,
    /// The link leaving this repton (`links[p]`), or `None` at the tail.
    pub next: Option<Link>,
}

impl LinkPair {
    /// The four hernia orientations: opposite-direction interior pairs.
    pub const HERNIA_ORIENTATIONS: [LinkPair; 4] = [
        LinkPair {
            prev: Some(Link::Up),
            next: Some(Link::Down),
        },
        LinkPair {
            prev: Some(Link::Down),
            next: Some(Link::Up),
        },
        LinkPair {
            prev: Some(Link::Left),
            next: Some(Link::Right),
        },
        LinkPair {
            prev: Some(Link::Right),
            next: Some(Link::Left),
        },
    ];

    /// An interior pair: both links real.
    pub fn interior(prev: Link, next: Link) -> Self {
        Self {
            prev: Some(prev),
            next: Some(next),
        }
    }

    /// The head-of-chain pair `(boundary, first link)`.
    pub fn head(first: Link) -> Self {
        Self {
            prev: None,
            next: Some(first),
        }
    }

    /// The tail-of-chain pair `(last link, boundary)`.
    pub fn tail(last: Link) -> Self {
        Self {
            prev: Some(last),
            next: None,
        }
    }

    /// Returns `true` at the two boundary positions.
    pub fn is_end(&self) -> bool {
        self.prev.is_none() || self.next.is_none()
    }

    /// The single real link of a boundary pair; `None` for interior pairs.
    pub fn end_link(&self) -> Option<Link> {
        match (self.prev, self.next) {
            (Some(link), None) | (None, Some(link)) => Some(link),
            _ => None,
        }
    }

    /// Replace the single real link of a boundary pair, preserving which
    /// side carries the boundary sentinel.
    pub fn with_end_link(&self, link: Link) -> LinkPair {
        Self {
            prev: self.prev.map(|_| link),
            next: self.next.map(|_| link),
        }
    }

    /// Both links real and slack: a hernia can be created here.
    pub fn both_slack(&self) -> bool {
        matches!(
            (self.prev, self.next),
            (Some(a), Some(b)) if a.is_slack() && b.is_slack()
        )
    }

    /// The pair is a hernia: two real links in exactly opposite taut
    /// directions, folding the chain back through the same lattice edge.
    pub fn is_hernia(&self) -> bool {
        matches!(
            (self.prev, self.next),
            (Some(a), Some(b)) if a.is_taut() && b == a.opposite()
        )
    }

    /// The pair is a bent corner: one horizontal and one vertical link.
    pub fn is_bent(&self) -> bool {
        matches!(
            (self.prev, self.next),
            (Some(a), Some(b)) if a.is_perpendicular_to(b)
        )
    }

    /// Interior pair with exactly one slack side: a repton can hop here.
    pub fn can_reptate(&self) -> bool {
        matches!(
            (self.prev, self.next),
            (Some(a), Some(b)) if a.is_slack() != b.is_slack()
        )
    }

    /// The pair with its two sides exchanged.
    pub fn swapped(&self) -> LinkPair {
        Self {
            prev: self.next,
            next: self.prev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_predicates_see_the_boundary() {
        assert!(LinkPair::head(Link::Up).is_end());
        assert!(LinkPair::tail(Link::Slack).is_end());
        assert!(!LinkPair::interior(Link::Up, Link::Down).is_end());
    }

    #[test]
    fn end_link_picks_the_real_side() {
        assert_eq!(LinkPair::head(Link::Left).end_link(), Some(Link::Left));
        assert_eq!(LinkPair::tail(Link::Right).end_link(), Some(Link::Right));
        assert_eq!(LinkPair::interior(Link::Up, Link::Down).end_link(), None);
    }

    #[test]
    fn with_end_link_preserves_the_boundary_side() {
        let head = LinkPair::head(Link::Slack).with_end_link(Link::Up);
        assert_eq!(head, LinkPair::head(Link::Up));
        let tail = LinkPair::tail(Link::Slack).with_end_link(Link::Down);
        assert_eq!(tail, LinkPair::tail(Link::Down));
    }

    #[test]
    fn hernia_requires_opposite_taut_links() {
        assert!(LinkPair::interior(Link::Up, Link::Down).is_hernia());
        assert!(LinkPair::interior(Link::Right, Link::Left).is_hernia());
        assert!(!LinkPair::interior(Link::Up, Link::Up).is_hernia());
        assert!(!LinkPair::interior(Link::Slack, Link::Slack).is_hernia());
        assert!(!LinkPair::interior(Link::Up, Link::Left).is_hernia());
    }

    #[test]
    fn every_hernia_orientation_is_a_hernia() {
        for pair in LinkPair::HERNIA_ORIENTATIONS {
            assert!(pair.is_hernia());
        }
    }

    #[test]
    fn bent_pairs_mix_axes() {
        assert!(LinkPair::interior(Link::Up, Link::Right).is_bent());
        assert!(!LinkPair::interior(Link::Up, Link::Down).is_bent());
        assert!(!LinkPair::interior(Link::Slack, Link::Right).is_bent());
    }

    #[test]
    fn reptation_needs_exactly_one_slack() {
        assert!(LinkPair::interior(Link::Slack, Link::Right).can_reptate());
        assert!(LinkPair::interior(Link::Up, Link::Slack).can_reptate());
        assert!(!LinkPair::interior(Link::Slack, Link::Slack).can_reptate());
        assert!(!LinkPair::interior(Link::Up, Link::Down).can_reptate());
        assert!(!LinkPair::head(Link::Slack).can_reptate());
    }

    #[test]
    fn swapped_exchanges_sides() {
        let pair = LinkPair::interior(Link::Up, Link::Right);
        assert_eq!(pair.swapped(), LinkPair::interior(Link::Right, Link::Up));
        assert_eq!(LinkPair::head(Link::Up).swapped(), LinkPair::tail(Link::Up));
    }
}
