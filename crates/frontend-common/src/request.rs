//! Drops responses that arrive after a newer request was started

use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Counter shared by every request a component starts
#[derive(Clone, Debug, Default)]
pub struct RequestGeneration(Rc<Cell<u32>>);

/// Handle for one request, current until the next `begin` or `invalidate`
#[derive(Clone, Debug)]
pub struct RequestTicket {
    generation: Rc<Cell<u32>>,
    id: u32,
}

impl RequestGeneration {
    pub fn begin(&self) -> RequestTicket {
        let id = self.0.get().wrapping_add(1);
        self.0.set(id);
        RequestTicket {
            generation: Rc::clone(&self.0),
            id,
        }
    }

    /// Make every outstanding ticket stale without starting a request
    pub fn invalidate(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.id
    }
}

/// Request counter that lives as long as the component
#[hook]
pub fn use_request_generation() -> RequestGeneration {
    let generation = use_memo((), |_| RequestGeneration::default());
    (*generation).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_wins() {
        let generation = RequestGeneration::default();
        let first = generation.begin();
        assert!(first.is_current());

        let second = generation.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn invalidate_drops_in_flight_request() {
        let generation = RequestGeneration::default();
        let pending = generation.begin();
        generation.invalidate();
        assert!(!pending.is_current());
    }

    #[test]
    fn clones_share_one_counter() {
        let generation = RequestGeneration::default();
        let ticket = generation.begin();
        generation.clone().begin();
        assert!(!ticket.is_current());
    }
}
