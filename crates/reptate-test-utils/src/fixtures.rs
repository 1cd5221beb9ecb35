//! Reusable chain fixtures.

use reptate_chain::Polymer;
use reptate_core::Link;

/// Build a chain from a link slice.
///
/// # Panics
///
/// Panics on an empty slice; fixtures are always non-empty.
pub fn chain(links: &[Link]) -> Polymer {
    Polymer::new(links.iter().copied()).expect("fixture chain must be non-empty")
}

/// The four two-link hernia configurations.
pub fn hernias() -> [Polymer; 4] {
    [
        chain(&[Link::Up, Link::Down]),
        chain(&[Link::Down, Link::Up]),
        chain(&[Link::Left, Link::Right]),
        chain(&[Link::Right, Link::Left]),
    ]
}

/// A chain on which every kind of legal move is possible somewhere:
/// a slack head, a taut/slack pair, two consecutive slacks, a bent corner,
/// a hernia, and a taut tail.
pub fn every_move_chain() -> Polymer {
    chain(&[
        Link::Slack,
        Link::Right,
        Link::Slack,
        Link::Slack,
        Link::Slack,
        Link::Right,
        Link::Up,
        Link::Right,
        Link::Left,
        Link::Up,
    ])
}
