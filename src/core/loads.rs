//! Ordering of overlapping floor-plan loads.
//!
//! Fetches are not cancelled when the user switches floors quickly. Each load
//! takes a ticket; only the newest ticket may write into the page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Default)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a load; any ticket handed out earlier becomes stale.
    pub fn begin(&mut self) -> LoadTicket {
        self.latest = self.latest.wrapping_add(1);
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_newest_ticket_is_current() {
        let mut seq = LoadSequence::new();
        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn tickets_are_distinct() {
        let mut seq = LoadSequence::new();
        let a = seq.begin();
        let b = seq.begin();
        assert_ne!(a, b);
    }
}
