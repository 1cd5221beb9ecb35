//! The configuration-indexed generator matrix.

use crate::closure::{all_with_n_links, all_with_n_links_parallel};
use crossbeam_channel::bounded;
use indexmap::{IndexMap, IndexSet};
use reptate_chain::Polymer;
use reptate_core::{ChainError, RateTable};

/// The off-diagonal part of the continuous-time Markov generator over all
/// configurations of a fixed chain length.
///
/// Keyed by ordered pairs of configurations; absent pairs are implicitly
/// zero (the identity of the caller's combine operator). Entries are stored
/// against state *indices* into the closure's deterministic state ordering,
/// keeping keys compact for the 5^N-sized domain.
///
/// Built once per (chain length, rate table) and read-only afterward.
/// Diagonal entries and row normalization are a consumer concern.
#[derive(Clone, Debug)]
pub struct TransitionMatrix<R> {
    states: IndexSet<Polymer>,
    entries: IndexMap<(u32, u32), R>,
}

impl<R: Clone> TransitionMatrix<R> {
    /// Build the generator for all configurations with `link_count` links.
    ///
    /// Computes the state-space closure, then one aggregated rate map per
    /// state (`combine` must be associative and commutative, as for
    /// [`Polymer::transition_rates`]).
    ///
    /// Returns `Err(ChainError::EmptyChain)` for `link_count == 0`.
    pub fn build<F>(
        link_count: usize,
        table: &RateTable<R>,
        mut combine: F,
    ) -> Result<Self, ChainError>
    where
        F: FnMut(R, R) -> R,
    {
        let states = all_with_n_links(link_count)?;
        let mut entries = IndexMap::new();
        for (origin, state) in states.iter().enumerate() {
            for (target, rate) in state.transition_rates(table, &mut combine) {
                if let Some(index) = states.get_index_of(&target) {
                    entries.insert((origin as u32, index as u32), rate);
                } else {
                    debug_assert!(false, "closure missed reachable state {target}");
                }
            }
        }
        Ok(Self { states, entries })
    }

    /// Parallel variant of [`TransitionMatrix::build`].
    ///
    /// Rate maps are independent per origin state, so the state set is
    /// partitioned across up to `workers` scoped threads; per-worker entry
    /// lists are merged in worker-index order, giving the same entry
    /// ordering as the serial build. `workers` is clamped to at least 1.
    pub fn build_parallel<F>(
        link_count: usize,
        table: &RateTable<R>,
        combine: F,
        workers: usize,
    ) -> Result<Self, ChainError>
    where
        R: Send + Sync,
        F: Fn(R, R) -> R + Sync,
    {
        let workers = workers.max(1);
        let states = all_with_n_links_parallel(link_count, workers)?;

        let chunk = states.len().div_ceil(workers);
        let (tx, rx) = bounded::<(usize, Vec<((u32, u32), R)>)>(workers);
        let state_list: Vec<&Polymer> = states.iter().collect();

        std::thread::scope(|scope| {
            for (index, slice) in state_list.chunks(chunk).enumerate() {
                let tx = tx.clone();
                let states = &states;
                let combine = &combine;
                let base = index * chunk;
                scope.spawn(move || {
                    let mut local = Vec::new();
                    for (offset, state) in slice.iter().enumerate() {
                        let origin = (base + offset) as u32;
                        for (target, rate) in state.transition_rates(table, combine) {
                            if let Some(target_index) = states.get_index_of(&target) {
                                local.push(((origin, target_index as u32), rate));
                            }
                        }
                    }
                    let _ = tx.send((index, local));
                });
            }
        });
        drop(tx);

        let mut rounds: Vec<(usize, Vec<((u32, u32), R)>)> = rx.iter().collect();
        rounds.sort_unstable_by_key(|&(index, _)| index);

        let mut entries = IndexMap::new();
        for (_, local) in rounds {
            entries.extend(local);
        }
        Ok(Self { states, entries })
    }

    /// The aggregated rate from `origin` to `target`.
    ///
    /// `None` means zero: either configuration is outside the state set, or
    /// no elementary move connects the pair.
    pub fn rate(&self, origin: &Polymer, target: &Polymer) -> Option<&R> {
        let origin = self.states.get_index_of(origin)? as u32;
        let target = self.states.get_index_of(target)? as u32;
        self.entries.get(&(origin, target))
    }

    /// The full state set, in deterministic discovery order.
    pub fn states(&self) -> &IndexSet<Polymer> {
        &self.states
    }

    /// Number of states (always 5^N).
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Iterate over all nonzero entries as `(origin, target, rate)`.
    ///
    /// Consumers rendering the matrix impose their own total order on
    /// [`states`](TransitionMatrix::states); this iterator yields entries
    /// in build order.
    pub fn entries(&self) -> impl Iterator<Item = (&Polymer, &Polymer, &R)> {
        self.entries.iter().filter_map(move |(&(origin, target), rate)| {
            let origin = self.states.get_index(origin as usize)?;
            let target = self.states.get_index(target as usize)?;
            Some((origin, target, rate))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reptate_core::{Link, MoveSet, MoveType};
    use reptate_test_utils::chain;

    fn union(a: MoveSet, b: MoveSet) -> MoveSet {
        a.union(&b)
    }

    #[test]
    fn zero_links_is_rejected() {
        let table = RateTable::diagnostic();
        assert!(matches!(
            TransitionMatrix::build(0, &table, union),
            Err(ChainError::EmptyChain)
        ));
    }

    #[test]
    fn two_link_matrix_has_twenty_five_states() {
        let matrix = TransitionMatrix::build(2, &RateTable::diagnostic(), union).unwrap();
        assert_eq!(matrix.size(), 25);
        assert_eq!(matrix.states().len(), 25);
    }

    #[test]
    fn end_contraction_entry_carries_the_table_rate() {
        let table = RateTable::diagnostic();
        let matrix = TransitionMatrix::build(2, &table, union).unwrap();
        let origin = chain(&[Link::Up, Link::Right]);
        let target = chain(&[Link::Slack, Link::Right]);
        assert_eq!(
            matrix.rate(&origin, &target),
            Some(table.get(MoveType::EndContraction))
        );
    }

    #[test]
    fn absent_pairs_read_as_zero() {
        let matrix = TransitionMatrix::build(2, &RateTable::diagnostic(), union).unwrap();
        // Two moves are needed to reorient both links.
        let origin = chain(&[Link::Up, Link::Up]);
        let target = chain(&[Link::Down, Link::Down]);
        assert_eq!(matrix.rate(&origin, &target), None);
        // Self-transitions are never recorded.
        assert_eq!(matrix.rate(&origin, &origin), None);
    }

    #[test]
    fn foreign_configurations_read_as_zero() {
        let matrix = TransitionMatrix::build(2, &RateTable::diagnostic(), union).unwrap();
        let foreign = Polymer::all_curled_up(3).unwrap();
        let resident = Polymer::all_curled_up(2).unwrap();
        assert_eq!(matrix.rate(&foreign, &resident), None);
        assert_eq!(matrix.rate(&resident, &foreign), None);
    }

    #[test]
    fn rows_match_per_state_transition_rates() {
        let table = RateTable::uniform(1.0f64);
        let matrix = TransitionMatrix::build(2, &table, |a, b| a + b).unwrap();
        for state in matrix.states() {
            let rates = state.transition_rates(&table, |a, b| a + b);
            for (target, rate) in &rates {
                assert_eq!(matrix.rate(state, target), Some(rate));
            }
        }
    }

    #[test]
    fn numeric_rates_fold_by_addition() {
        let matrix = TransitionMatrix::build(1, &RateTable::uniform(1.0f64), |a, b| a + b)
            .unwrap();
        // A single slack link extends onto each taut target from both ends.
        let origin = Polymer::all_curled_up(1).unwrap();
        for taut in Link::TAUT {
            assert_eq!(matrix.rate(&origin, &chain(&[taut])), Some(&2.0));
        }
    }

    #[test]
    fn parallel_build_matches_serial() {
        let table = RateTable::diagnostic();
        let serial = TransitionMatrix::build(2, &table, union).unwrap();
        for workers in [1, 2, 5] {
            let parallel =
                TransitionMatrix::build_parallel(2, &table, union, workers).unwrap();
            assert_eq!(parallel.size(), serial.size());
            let serial_entries: Vec<_> = serial.entries().collect();
            let parallel_entries: Vec<_> = parallel.entries().collect();
            assert_eq!(serial_entries, parallel_entries);
        }
    }

    #[test]
    fn entries_cover_every_recorded_pair() {
        let matrix = TransitionMatrix::build(2, &RateTable::diagnostic(), union).unwrap();
        let mut count = 0;
        for (origin, target, rate) in matrix.entries() {
            assert_eq!(matrix.rate(origin, target), Some(rate));
            count += 1;
        }
        assert!(count > 0);
    }
}
