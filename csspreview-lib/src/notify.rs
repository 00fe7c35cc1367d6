//! Change notification for views that depend on the editor state.
//!
//! A [`ChangeSignal`] is owned by whoever produces output (the preview
//! provider). Listeners are connected and disconnected explicitly by id; there
//! is no global emitter.

use std::cell::RefCell;
use std::rc::Rc;

use log::trace;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`ChangeSignal::connect`]; pass it to
    /// [`ChangeSignal::disconnect`] to stop receiving notifications.
    pub struct ListenerId;
}

type Listener<Args> = Rc<dyn Fn(&Args)>;

/// A single-threaded observable with explicitly managed listeners.
pub struct ChangeSignal<Args> {
    listeners: RefCell<SlotMap<ListenerId, Listener<Args>>>,
}

impl<Args> Default for ChangeSignal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> ChangeSignal<Args> {
    pub fn new() -> Self {
        ChangeSignal {
            listeners: RefCell::new(SlotMap::with_key()),
        }
    }

    pub fn connect<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&Args) + 'static,
    {
        self.listeners.borrow_mut().insert(Rc::new(listener))
    }

    /// Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Call every connected listener with `args`.
    ///
    /// The listener set is snapshotted first, so listeners may connect or
    /// disconnect while being notified; such changes apply from the next emit.
    pub fn emit(&self, args: &Args) {
        let snapshot: Vec<Listener<Args>> = self.listeners.borrow().values().cloned().collect();
        trace!("notifying {} listener(s)", snapshot.len());
        for listener in snapshot {
            listener(args);
        }
    }
}
