//! Breadth-first fixed-point discovery of the configuration space.
//!
//! Starting from the fully-collapsed chain, repeatedly expand the frontier
//! by single-step reachability until no new configuration appears. The
//! universe for N links is finite (5^N), so the fixed point terminates;
//! that the closure reaches *all* 5^N configurations is an invariant of
//! the move rules, checked in debug builds.

use crossbeam_channel::bounded;
use indexmap::IndexSet;
use reptate_chain::Polymer;
use reptate_core::ChainError;

/// All valid configurations with `link_count` links.
///
/// Explicit-worklist breadth-first closure from
/// [`Polymer::all_curled_up`]; no recursion, so the call stack stays flat
/// regardless of N. The returned set is in deterministic discovery order,
/// starting with the collapsed chain.
///
/// Returns `Err(ChainError::EmptyChain)` for `link_count == 0`. Memory is
/// the binding resource: the full set has 5^N entries.
pub fn all_with_n_links(link_count: usize) -> Result<IndexSet<Polymer>, ChainError> {
    let root = Polymer::all_curled_up(link_count)?;
    let mut states = IndexSet::new();
    states.insert(root.clone());
    let mut frontier = vec![root];

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for state in &frontier {
            for target in state.reachable_from() {
                if !states.contains(&target) {
                    states.insert(target.clone());
                    next.push(target);
                }
            }
        }
        frontier = next;
    }

    debug_assert_full_coverage(link_count, &states);
    Ok(states)
}

/// Parallel variant of [`all_with_n_links`].
///
/// Each round fans the frontier out across up to `workers` scoped threads
/// (each computing the reachable sets of its slice) and merges the results
/// in worker-index order over a bounded channel, so the output ordering is
/// identical to a single-worker run. `workers` is clamped to at least 1.
pub fn all_with_n_links_parallel(
    link_count: usize,
    workers: usize,
) -> Result<IndexSet<Polymer>, ChainError> {
    let workers = workers.max(1);
    let root = Polymer::all_curled_up(link_count)?;
    let mut states = IndexSet::new();
    states.insert(root.clone());
    let mut frontier = vec![root];

    while !frontier.is_empty() {
        let chunk = frontier.len().div_ceil(workers);
        // At most `workers` chunks are ever in flight, so the channel
        // capacity can never block a sender.
        let (tx, rx) = bounded::<(usize, IndexSet<Polymer>)>(workers);

        std::thread::scope(|scope| {
            for (index, slice) in frontier.chunks(chunk).enumerate() {
                let tx = tx.clone();
                scope.spawn(move || {
                    let mut local = IndexSet::new();
                    for state in slice {
                        local.extend(state.reachable_from());
                    }
                    // The receiver outlives the scope; a send can only
                    // fail if the main thread already panicked.
                    let _ = tx.send((index, local));
                });
            }
        });
        drop(tx);

        let mut rounds: Vec<(usize, IndexSet<Polymer>)> = rx.iter().collect();
        rounds.sort_unstable_by_key(|&(index, _)| index);

        let mut next = Vec::new();
        for (_, local) in rounds {
            for target in local {
                if !states.contains(&target) {
                    states.insert(target.clone());
                    next.push(target);
                }
            }
        }
        frontier = next;
    }

    debug_assert_full_coverage(link_count, &states);
    Ok(states)
}

/// The move rules are confluent enough to reach the entire 5^N universe
/// from the collapsed chain; anything less is a rule-set defect.
fn debug_assert_full_coverage(link_count: usize, states: &IndexSet<Polymer>) {
    if let Some(expected) = 5usize.checked_pow(link_count as u32) {
        debug_assert_eq!(
            states.len(),
            expected,
            "closure must reach the full configuration space for {link_count} links"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reptate_core::Link;
    use reptate_test_utils::chain;

    #[test]
    fn zero_links_is_rejected() {
        assert_eq!(all_with_n_links(0), Err(ChainError::EmptyChain));
        assert_eq!(all_with_n_links_parallel(0, 4), Err(ChainError::EmptyChain));
    }

    #[test]
    fn state_count_is_five_to_the_n() {
        for link_count in 1..=4 {
            let states = all_with_n_links(link_count).unwrap();
            assert_eq!(states.len(), 5usize.pow(link_count as u32));
        }
    }

    #[test]
    fn unit_chain_covers_every_link_value() {
        let states = all_with_n_links(1).unwrap();
        for link in Link::ALL {
            assert!(states.contains(&chain(&[link])));
        }
    }

    #[test]
    fn discovery_starts_at_the_collapsed_chain() {
        let states = all_with_n_links(3).unwrap();
        assert_eq!(
            states.get_index(0),
            Some(&Polymer::all_curled_up(3).unwrap())
        );
    }

    #[test]
    fn every_state_has_the_requested_length() {
        let states = all_with_n_links(3).unwrap();
        assert!(states.iter().all(|state| state.link_count() == 3));
    }

    #[test]
    fn parallel_closure_matches_serial_including_order() {
        for workers in [1, 2, 4, 7] {
            let serial = all_with_n_links(3).unwrap();
            let parallel = all_with_n_links_parallel(3, workers).unwrap();
            let serial: Vec<_> = serial.into_iter().collect();
            let parallel: Vec<_> = parallel.into_iter().collect();
            assert_eq!(serial, parallel, "ordering diverged with {workers} workers");
        }
    }

    #[test]
    fn worker_count_is_clamped() {
        let states = all_with_n_links_parallel(2, 0).unwrap();
        assert_eq!(states.len(), 25);
    }
}
