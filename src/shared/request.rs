//! Request tagging for out-of-order responses.
//!
//! Fetches are never cancelled at the network level. Instead every fetch is
//! issued a [`Ticket`] carrying the request key and a generation number, and a
//! resolved response is applied only while its ticket is still the current one
//! for that slot. Anything else is stale and gets dropped.

/// Handle for one in-flight request of a [`RequestTracker`] slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    generation: u64,
    key: K,
}

impl<K> Ticket<K> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Generation counter for a single request slot (detail, search, positions…).
#[derive(Debug, Clone)]
pub struct RequestTracker<K> {
    generation: u64,
    current: Option<K>,
}

impl<K> Default for RequestTracker<K> {
    fn default() -> Self {
        Self {
            generation: 0,
            current: None,
        }
    }
}

impl<K: Clone + PartialEq> RequestTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request for `key`, superseding whatever was in flight.
    pub fn issue(&mut self, key: K) -> Ticket<K> {
        self.generation += 1;
        self.current = Some(key.clone());
        Ticket {
            generation: self.generation,
            key,
        }
    }

    /// Whether a response carrying `ticket` should be applied.
    pub fn accepts(&self, ticket: &Ticket<K>) -> bool {
        ticket.generation == self.generation && self.current.as_ref() == Some(&ticket.key)
    }

    /// Consume the slot if `ticket` is current. Returns `false` for stale tickets.
    pub fn complete(&mut self, ticket: &Ticket<K>) -> bool {
        if self.accepts(ticket) {
            self.current = None;
            true
        } else {
            tracing::debug!(
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale response"
            );
            false
        }
    }

    /// Invalidate any in-flight request without issuing a new one.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.current = None;
    }

    pub fn in_flight(&self) -> Option<&K> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue("A".to_string());
        let second = tracker.issue("B".to_string());
        assert!(!tracker.accepts(&first));
        assert!(tracker.accepts(&second));
    }

    #[test]
    fn test_reissuing_same_key_still_drops_older_ticket() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue("A");
        let second = tracker.issue("A");
        assert!(!tracker.complete(&first));
        assert!(tracker.complete(&second));
    }

    #[test]
    fn test_complete_is_one_shot() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.issue(1u32);
        assert!(tracker.complete(&ticket));
        assert!(!tracker.complete(&ticket));
        assert!(tracker.in_flight().is_none());
    }

    #[test]
    fn test_invalidate_drops_in_flight() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.issue("dogs");
        tracker.invalidate();
        assert!(!tracker.accepts(&ticket));
    }
}
