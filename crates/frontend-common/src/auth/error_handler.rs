//! Global session-expired handler
//!
//! Any API call that comes back with 401 reports it here; the auth
//! provider registers the callback that drops the local session.

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static AUTH_ERROR_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Set the global auth error callback
pub fn set_auth_error_callback(callback: Rc<dyn Fn()>) {
    AUTH_ERROR_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Clear the auth error callback
pub fn clear_auth_error_callback() {
    AUTH_ERROR_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Report an expired session
pub fn trigger_auth_error() {
    // Clone out of the cell so the callback may re-register itself
    let callback = AUTH_ERROR_CALLBACK.with(|cb| cb.borrow().clone());
    if let Some(callback) = callback {
        callback();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn triggers_registered_callback_until_cleared() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        set_auth_error_callback(Rc::new(move || counter.set(counter.get() + 1)));

        trigger_auth_error();
        trigger_auth_error();
        assert_eq!(hits.get(), 2);

        clear_auth_error_callback();
        trigger_auth_error();
        assert_eq!(hits.get(), 2);
    }
}
