//! Tracks which rendered forms have already been posted.
//!
//! Every add-lead form carries an id issued when it was rendered. The first
//! post of an id claims it; a second post while the first is in flight or
//! after it succeeded finds the id taken and creates nothing. Failed attempts
//! release their id so the same form can be corrected and sent again.

use std::collections::{HashSet, VecDeque};
use std::sync::{Mutex, MutexGuard};

/// Number of claimed ids remembered before the oldest ones are forgotten.
pub const DEFAULT_CAPACITY: usize = 4096;

#[derive(Debug, Default)]
struct Claims {
    ids: HashSet<String>,
    order: VecDeque<String>,
}

#[derive(Debug)]
pub struct SubmissionGuard {
    claims: Mutex<Claims>,
    capacity: usize,
}

impl Default for SubmissionGuard {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            claims: Mutex::new(Claims::default()),
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Claims> {
        // The set stays consistent even if a holder panicked.
        self.claims
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Claims `id`. Returns `false` when it is already claimed.
    pub fn claim(&self, id: &str) -> bool {
        let mut claims = self.lock();
        if claims.ids.contains(id) {
            return false;
        }
        if claims.order.len() >= self.capacity {
            if let Some(oldest) = claims.order.pop_front() {
                claims.ids.remove(&oldest);
            }
        }
        claims.ids.insert(id.to_string());
        claims.order.push_back(id.to_string());
        true
    }

    /// Gives `id` back so the form it belongs to can be posted again.
    pub fn release(&self, id: &str) {
        let mut claims = self.lock();
        if claims.ids.remove(id) {
            claims.order.retain(|claimed| claimed != id);
        }
    }

    pub fn is_claimed(&self, id: &str) -> bool {
        self.lock().ids.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_of_an_id_is_refused() {
        let guard = SubmissionGuard::new();

        assert!(guard.claim("a"));
        assert!(!guard.claim("a"));
        assert!(guard.claim("b"));
    }

    #[test]
    fn released_id_can_be_claimed_again() {
        let guard = SubmissionGuard::new();
        assert!(guard.claim("a"));

        guard.release("a");

        assert!(!guard.is_claimed("a"));
        assert!(guard.claim("a"));
    }

    #[test]
    fn oldest_claims_are_forgotten_past_capacity() {
        let guard = SubmissionGuard::with_capacity(2);
        guard.claim("a");
        guard.claim("b");
        guard.claim("c");

        assert!(!guard.is_claimed("a"));
        assert!(guard.is_claimed("b"));
        assert!(guard.is_claimed("c"));
    }
}
