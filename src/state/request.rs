// In-flight guard for one kind of async action (locate, search).

/// Proof that a request was admitted; compared against the guard when the
/// response arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct RequestGuard {
    generation: u64,
    in_flight: bool,
}

impl RequestGuard {
    /// Admits a new request unless one is already in flight.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.generation = self.generation.wrapping_add(1);
        Some(Ticket(self.generation))
    }

    /// Ends the request. Returns true when the ticket is still current,
    /// i.e. its response may be applied.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.in_flight = false;
        true
    }

    /// Invalidates any in-flight request and frees the guard.
    pub fn cancel(&mut self) {
        if self.in_flight {
            self.generation = self.generation.wrapping_add(1);
            self.in_flight = false;
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_refused_while_in_flight() {
        let mut g = RequestGuard::default();
        let t = g.begin().unwrap();
        assert!(g.is_busy());
        assert!(g.begin().is_none());
        assert!(g.finish(t));
        assert!(!g.is_busy());
        assert!(g.begin().is_some());
    }

    #[test]
    fn cancelled_ticket_is_stale() {
        let mut g = RequestGuard::default();
        let old = g.begin().unwrap();
        g.cancel();
        let fresh = g.begin().unwrap();
        assert!(!g.finish(old));
        assert!(g.is_busy());
        assert!(g.finish(fresh));
    }

    #[test]
    fn cancel_when_idle_keeps_generation() {
        let mut g = RequestGuard::default();
        let t = g.begin().unwrap();
        assert!(g.finish(t));
        g.cancel();
        let next = g.begin().unwrap();
        assert_ne!(t, next);
        assert!(g.finish(next));
    }
}
