//! Typed observer list
//!
//! A small publish/subscribe registry holding non-owning references to its
//! subscribers. Every registration is tied to an owner `Rc`; once the owner is
//! dropped the registration is dead, is never invoked again, and is pruned on
//! the next fan-out.
//!
//! Delivery is synchronous and same-thread. The list is snapshotted before any
//! callback runs, so callbacks may freely subscribe, unsubscribe, or read the
//! state of whatever owns the list.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::any::Any;
use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::{Rc, Weak};

new_key_type! {
    /// Handle identifying one registration in an [`ObserverList`]
    pub struct SubscriptionId;
}

/// Callback invoked with the (upgraded) owner
type ObserverCallback = Rc<dyn Fn(&dyn Any)>;

struct Observer {
    owner: Weak<dyn Any>,
    callback: ObserverCallback,
}

impl Observer {
    fn is_alive(&self) -> bool {
        self.owner.strong_count() > 0
    }
}

/// Outcome of one notification fan-out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Delivery {
    /// Callbacks that ran to completion
    pub delivered: usize,
    /// Callbacks that panicked (isolated, the fan-out continued)
    pub panicked: usize,
    /// Dead registrations removed before delivery
    pub pruned: usize,
}

/// Registry of weakly-held subscribers
#[derive(Default)]
pub struct ObserverList {
    observers: SlotMap<SubscriptionId, Observer>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self {
            observers: SlotMap::with_key(),
        }
    }

    /// Register `callback` for as long as `owner` is alive
    ///
    /// The list only keeps a `Weak` to the owner.
    pub fn insert<O, F>(&mut self, owner: &Rc<O>, callback: F) -> SubscriptionId
    where
        O: Any,
        F: Fn(&O) + 'static,
    {
        let weak: Weak<O> = Rc::downgrade(owner);
        let owner: Weak<dyn Any> = weak;
        let callback: ObserverCallback = Rc::new(move |owner: &dyn Any| {
            if let Some(owner) = owner.downcast_ref::<O>() {
                callback(owner);
            }
        });
        self.observers.insert(Observer { owner, callback })
    }

    /// Remove a registration. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id).is_some()
    }

    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.observers
            .get(id)
            .map(Observer::is_alive)
            .unwrap_or(false)
    }

    /// Number of registrations whose owner is still alive
    pub fn live_len(&self) -> usize {
        self.observers.values().filter(|o| o.is_alive()).count()
    }

    /// Drop every registration whose owner is gone, returning how many were removed
    pub fn prune(&mut self) -> usize {
        let before = self.observers.len();
        self.observers.retain(|_, observer| observer.is_alive());
        before - self.observers.len()
    }

    pub fn clear(&mut self) {
        self.observers.clear();
    }

    fn snapshot(&self) -> SmallVec<[(SubscriptionId, Weak<dyn Any>, ObserverCallback); 8]> {
        self.observers
            .iter()
            .map(|(id, o)| (id, o.owner.clone(), o.callback.clone()))
            .collect()
    }
}

/// Notify every live subscriber of `list` exactly once
///
/// The borrow on `list` is released before the first callback runs. A
/// registration removed by an earlier callback in the same fan-out is skipped,
/// and so is one whose owner was dropped in the meantime. A panicking callback
/// is logged and does not stop delivery to the rest.
pub fn notify(list: &RefCell<ObserverList>) -> Delivery {
    let mut delivery = Delivery::default();

    let pending = {
        let mut observers = list.borrow_mut();
        delivery.pruned = observers.prune();
        observers.snapshot()
    };

    tracing::trace!(
        "observer fan-out: {} pending, {} pruned",
        pending.len(),
        delivery.pruned
    );

    for (id, owner, callback) in pending {
        if !list.borrow().observers.contains_key(id) {
            continue;
        }
        let Some(owner) = owner.upgrade() else {
            continue;
        };

        match catch_unwind(AssertUnwindSafe(|| callback(&*owner))) {
            Ok(()) => delivery.delivered += 1,
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "non-string panic payload".to_string());
                tracing::error!("observer {:?} panicked during notify: {}", id, message);
                delivery.panicked += 1;
            }
        }
    }

    delivery
}
