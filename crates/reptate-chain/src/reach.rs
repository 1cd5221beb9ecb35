//! Single-step reachability and rate aggregation.
//!
//! Both operations are driven by one internal move visitor over the rule
//! set, so the key set of [`Polymer::transition_rates`] always equals
//! [`Polymer::reachable_from`] by construction.

use crate::polymer::Polymer;
use crate::rules::RULES;
use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use reptate_core::{MoveType, RateTable};

impl Polymer {
    /// Visit every (candidate, move type) produced by any rule at any pair
    /// position, excluding the current configuration.
    fn visit_moves<F>(&self, mut visit: F)
    where
        F: FnMut(Polymer, MoveType),
    {
        for (pos, pair) in self.pairs().enumerate() {
            for rule in RULES {
                for candidate in rule.outcomes(self, pos, pair) {
                    if candidate != *self {
                        visit(candidate, rule.move_type());
                    }
                }
            }
        }
    }

    /// The set of configurations reachable from this one in a single
    /// elementary move.
    ///
    /// Never contains the configuration itself. Iteration order is the
    /// deterministic discovery order (position-major, rule-minor).
    pub fn reachable_from(&self) -> IndexSet<Polymer> {
        let mut reachable = IndexSet::new();
        self.visit_moves(|candidate, _| {
            reachable.insert(candidate);
        });
        reachable
    }

    /// Transition rates to every configuration reachable in one move.
    ///
    /// Each (position, rule) production contributes the rate the table
    /// assigns to the rule's move type; productions landing on the same
    /// resulting configuration are folded with `combine`, which must be
    /// associative and commutative so the fold order is immaterial
    /// (numeric addition for physical rates,
    /// [`MoveSet::union`](reptate_core::MoveSet::union) for diagnostics).
    ///
    /// The key set always equals [`Polymer::reachable_from`].
    pub fn transition_rates<R, F>(&self, table: &RateTable<R>, mut combine: F) -> IndexMap<Polymer, R>
    where
        R: Clone,
        F: FnMut(R, R) -> R,
    {
        let mut rates: IndexMap<Polymer, R> = IndexMap::new();
        self.visit_moves(|candidate, move_type| {
            let rate = table.get(move_type).clone();
            match rates.entry(candidate) {
                Entry::Occupied(mut entry) => {
                    let folded = combine(entry.get().clone(), rate);
                    entry.insert(folded);
                }
                Entry::Vacant(entry) => {
                    entry.insert(rate);
                }
            }
        });
        rates
    }
}
