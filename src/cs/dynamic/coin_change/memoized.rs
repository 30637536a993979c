use std::collections::HashMap;

use log::debug;

use super::composition::{coin_count, validate_denominations, Composition};
use super::limits::SearchLimits;
use crate::error::{Error, Result};

/// A partial multiset of coins on the work stack, together with the best
/// completion found so far among its already explored extensions.
struct Frame {
    state: Vec<u64>,
    total: u64,
    next: usize,
    best: Option<Vec<u64>>,
}

impl Frame {
    fn new(state: Vec<u64>, total: u64) -> Self {
        Frame {
            state,
            total,
            next: 0,
            best: None,
        }
    }

    /// Keeps the first completion with the strictly smallest coin count.
    fn offer(&mut self, candidate: Option<Vec<u64>>) {
        if let Some(candidate) = candidate {
            let better = match &self.best {
                Some(best) => coin_count(&candidate) < coin_count(best),
                None => true,
            };
            if better {
                self.best = Some(candidate);
            }
        }
    }
}

/// Memoized minimizer with the default [`SearchLimits`].
///
/// # Examples
///
/// ```
/// use change_making::cs::dynamic::coin_change::change_memoized;
///
/// // 6 + 6 + 6 beats the greedy 10 + 6 + 1 + 1
/// let coins = change_memoized(&[1, 6, 10], 18).unwrap();
/// assert_eq!(coins, vec![6, 6, 6]);
/// ```
pub fn change_memoized(denominations: &[u64], target: u64) -> Result<Vec<u64>> {
    change_memoized_with_limits(denominations, target, &SearchLimits::default())
}

/// Finds an optimal multiset of coins by depth-first search over partial
/// multisets, extending one coin at a time and pruning any partial sum that
/// would exceed `target`.
///
/// Partial multisets are keyed by their count vector, so choosing 5 then 10
/// reaches the same cache entry as choosing 10 then 5. The cache lives for
/// this call only. Subproblems with no completion are cached as `None` and
/// skipped by their parent; only an empty result at the root is reported as
/// [`Error::Infeasible`].
///
/// The search runs on an explicit work stack. Its height equals the number of
/// coins in the deepest partial multiset and is checked against
/// `limits.max_depth`, returning `ResourceExhausted` when exceeded.
/// Denominations are tried smallest first, so the first path descends to
/// about `target / denominations[0]` coins before any larger coin is tried.
/// The limit therefore bounds that path, not the size of the answer:
/// `[1, 100]` with target 20 000 is exhausted under the default limit even
/// though the optimum is 200 coins.
///
/// Returns the coin values in ascending order. When several optima exist the
/// first one reached with denominations tried smallest first is kept.
pub fn change_memoized_with_limits(
    denominations: &[u64],
    target: u64,
    limits: &SearchLimits,
) -> Result<Vec<u64>> {
    validate_denominations(denominations)?;
    let n = denominations.len();
    if target == 0 {
        return Ok(Vec::new());
    }

    let mut cache: HashMap<Vec<u64>, Option<Vec<u64>>> = HashMap::new();
    let mut stack = vec![Frame::new(vec![0; n], 0)];
    let mut answer = None;

    while let Some(frame) = stack.last_mut() {
        let mut descend = None;
        while frame.next < n {
            let i = frame.next;
            frame.next += 1;
            let total = match frame.total.checked_add(denominations[i]) {
                Some(total) if total <= target => total,
                _ => {
                    // Every later denomination is larger still.
                    frame.next = n;
                    break;
                }
            };
            let mut child = frame.state.clone();
            child[i] += 1;
            if total == target {
                frame.offer(Some(child));
                continue;
            }
            match cache.get(&child) {
                Some(known) => frame.offer(known.clone()),
                None => {
                    descend = Some((child, total));
                    break;
                }
            }
        }

        match descend {
            Some((child, total)) => {
                // The child holds one more coin than its parent, i.e. `stack.len()` coins.
                limits.check_depth(stack.len())?;
                stack.push(Frame::new(child, total));
            }
            None => {
                if let Some(done) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.offer(done.best.clone()),
                        None => answer = done.best.clone(),
                    }
                    cache.insert(done.state, done.best);
                }
            }
        }
    }

    debug!(
        "memoized search for {} over {:?} cached {} partial multisets",
        target,
        denominations,
        cache.len()
    );

    match answer {
        Some(counts) => Ok(Composition::new(counts).to_coins(denominations)),
        None => Err(Error::Infeasible { target }),
    }
}
