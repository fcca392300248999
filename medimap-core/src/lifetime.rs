use std::{cell::Cell, rc::Rc};

/// Tracks whether the component that started an asynchronous
/// operation is still mounted.
///
/// Clones share the same state, so the component keeps one handle
/// for its cleanup and hands out the others to callbacks.
#[derive(Debug, Clone)]
pub struct Lifetime(Rc<Cell<bool>>);

impl Default for Lifetime {
    fn default() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl Lifetime {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn end(&self) {
        self.0.set(false);
    }
}

/// Numbers the requests a component issues one after another.
///
/// Only the response to the most recent request may be applied.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence(Rc<Cell<u64>>);

impl RequestSequence {
    /// Starts a new request and supersedes all earlier ones.
    #[must_use]
    pub fn start(&self) -> RequestTicket {
        let number = self.0.get() + 1;
        self.0.set(number);
        RequestTicket {
            sequence: self.clone(),
            number,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    sequence: RequestSequence,
    number: u64,
}

impl RequestTicket {
    #[must_use]
    pub fn is_latest(&self) -> bool {
        self.sequence.0.get() == self.number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ended_lifetime_is_shared_by_clones() {
        let lifetime = Lifetime::default();
        let callback_handle = lifetime.clone();
        assert!(callback_handle.is_alive());
        lifetime.end();
        assert!(!callback_handle.is_alive());
        assert!(!lifetime.is_alive());
    }

    #[test]
    fn only_the_last_ticket_is_latest() {
        let sequence = RequestSequence::default();
        let first = sequence.start();
        assert!(first.is_latest());
        let second = sequence.start();
        assert!(!first.is_latest());
        assert!(second.is_latest());
    }
}
