//! The eight elementary-move rules of the repton model.
//!
//! Each rule is an independent, stateless operator examining one link pair.
//! All rules are evaluated at every pair position; a single position may
//! satisfy several rules at once (a hernia is both annihilatable and
//! redirectable). The boundary rules apply only where the pair carries the
//! boundary sentinel, the interior rules only where both links are real, so
//! the edge/interior dispatch is structural.
//!
//! Rules never propose the current configuration: end wiggle excludes the
//! current direction, hernia redirection excludes the current orientation,
//! and reptation of an equal pair is vacuous.

use crate::pair::LinkPair;
use crate::polymer::Polymer;
use reptate_core::{Link, MoveType};
use smallvec::SmallVec;

/// Candidate configurations produced by one rule at one position.
///
/// No rule produces more than four outcomes, so results stay inline.
pub type Outcomes = SmallVec<[Polymer; 4]>;

/// A modular, stateless elementary-move operator.
///
/// # Contract
///
/// - `outcomes()` MUST be deterministic: same chain and position produce
///   the same candidates in the same order.
/// - `&self` — rules carry no state; they are unit structs registered in
///   [`RULES`].
/// - A rule returns an empty set where it does not apply, and never
///   proposes the chain it was given.
pub trait MoveRule: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// The move type this rule's outcomes are charged to in a rate table.
    fn move_type(&self) -> MoveType;

    /// All configurations this rule can produce from `chain` by acting on
    /// the pair `pair` at position `pos`.
    fn outcomes(&self, chain: &Polymer, pos: usize, pair: LinkPair) -> Outcomes;
}

/// A taut end link relaxes to slack.
pub struct EndContraction;

impl MoveRule for EndContraction {
    fn name(&self) -> &'static str {
        "end_contraction"
    }

    fn move_type(&self) -> MoveType {
        MoveType::EndContraction
    }

    fn outcomes(&self, chain: &Polymer, pos: usize, pair: LinkPair) -> Outcomes {
        match pair.end_link() {
            Some(link) if link.is_taut() => {
                SmallVec::from_iter([chain.substitute(pos, pair.with_end_link(Link::Slack))])
            }
            _ => SmallVec::new(),
        }
    }
}

/// A slack end link extends into any of the four taut directions.
pub struct EndExtension;

impl MoveRule for EndExtension {
    fn name(&self) -> &'static str {
        "end_extension"
    }

    fn move_type(&self) -> MoveType {
        MoveType::EndExtension
    }

    fn outcomes(&self, chain: &Polymer, pos: usize, pair: LinkPair) -> Outcomes {
        match pair.end_link() {
            Some(link) if link.is_slack() => Link::TAUT
                .into_iter()
                .map(|taut| chain.substitute(pos, pair.with_end_link(taut)))
                .collect(),
            _ => SmallVec::new(),
        }
    }
}

/// A taut end link swings to any *other* taut direction.
pub struct EndWiggle;

impl MoveRule for EndWiggle {
    fn name(&self) -> &'static str {
        "end_wiggle"
    }

    fn move_type(&self) -> MoveType {
        MoveType::EndWiggle
    }

    fn outcomes(&self, chain: &Polymer, pos: usize, pair: LinkPair) -> Outcomes {
        match pair.end_link() {
            Some(link) if link.is_taut() => Link::TAUT
                .into_iter()
                .filter(|&taut| taut != link)
                .map(|taut| chain.substitute(pos, pair.with_end_link(taut)))
                .collect(),
            _ => SmallVec::new(),
        }
    }
}

/// Two adjacent slack links fold out into any opposite-direction pair.
pub struct HerniaCreation;

impl MoveRule for HerniaCreation {
    fn name(&self) -> &'static str {
        "hernia_creation"
    }

    fn move_type(&self) -> MoveType {
        MoveType::HerniaCreation
    }

    fn outcomes(&self, chain: &Polymer, pos: usize, pair: LinkPair) -> Outcomes {
        if pair.both_slack() {
            LinkPair::HERNIA_ORIENTATIONS
                .into_iter()
                .map(|hernia| chain.substitute(pos, hernia))
                .collect()
        } else {
            SmallVec::new()
        }
    }
}

/// A slack link and its taut neighbour exchange positions along the chain.
pub struct Reptation;

impl MoveRule for Reptation {
    fn name(&self) -> &'static str {
        "reptation"
    }

    fn move_type(&self) -> MoveType {
        MoveType::Reptation
    }

    fn outcomes(&self, chain: &Polymer, pos: usize, pair: LinkPair) -> Outcomes {
        if pair.can_reptate() {
            SmallVec::from_iter([chain.substitute(pos, pair.swapped())])
        } else {
            SmallVec::new()
        }
    }
}

/// A hernia collapses into two slack links.
pub struct HerniaAnnihilation;

impl MoveRule for HerniaAnnihilation {
    fn name(&self) -> &'static str {
        "hernia_annihilation"
    }

    fn move_type(&self) -> MoveType {
        MoveType::HerniaAnnihilation
    }

    fn outcomes(&self, chain: &Polymer, pos: usize, pair: LinkPair) -> Outcomes {
        if pair.is_hernia() {
            SmallVec::from_iter([
                chain.substitute(pos, LinkPair::interior(Link::Slack, Link::Slack))
            ])
        } else {
            SmallVec::new()
        }
    }
}

/// A hernia reorients into any of the *other* opposite-direction pairs.
pub struct HerniaRedirection;

impl MoveRule for HerniaRedirection {
    fn name(&self) -> &'static str {
        "hernia_redirection"
    }

    fn move_type(&self) -> MoveType {
        MoveType::HerniaRedirection
    }

    fn outcomes(&self, chain: &Polymer, pos: usize, pair: LinkPair) -> Outcomes {
        if pair.is_hernia() {
            LinkPair::HERNIA_ORIENTATIONS
                .into_iter()
                .filter(|&hernia| hernia != pair)
                .map(|hernia| chain.substitute(pos, hernia))
                .collect()
        } else {
            SmallVec::new()
        }
    }
}

/// A bent corner flips to the mirrored corner.
pub struct BarrierCrossing;

impl MoveRule for BarrierCrossing {
    fn name(&self) -> &'static str {
        "barrier_crossing"
    }

    fn move_type(&self) -> MoveType {
        MoveType::BarrierCrossing
    }

    fn outcomes(&self, chain: &Polymer, pos: usize, pair: LinkPair) -> Outcomes {
        if pair.is_bent() {
            SmallVec::from_iter([chain.substitute(pos, pair.swapped())])
        } else {
            SmallVec::new()
        }
    }
}

/// The complete rule set, evaluated at every pair position.
pub static RULES: [&(dyn MoveRule + 'static); 8] = [
    &EndContraction,
    &EndExtension,
    &EndWiggle,
    &HerniaCreation,
    &Reptation,
    &HerniaAnnihilation,
    &HerniaRedirection,
    &BarrierCrossing,
];
