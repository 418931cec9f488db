use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Broadcast payload for a click on a question.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivationEvent {
    pub question_id: String,
}

impl ActivationEvent {
    pub fn new(question_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
        }
    }
}

/// What subscribers receive after every write to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivationChange {
    /// The event that caused the write, `None` for programmatic clears.
    pub event: Option<ActivationEvent>,
    pub previous: Option<String>,
    pub current: Option<String>,
}

impl ActivationChange {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

type Callback = Rc<dyn Fn(&ActivationChange)>;

struct Subscriber {
    id: u64,
    callback: Callback,
}

#[derive(Default)]
struct StoreInner {
    active: Option<String>,
    revision: u64,
    next_subscriber: u64,
    subscribers: Vec<Subscriber>,
}

/// Single source of truth for the active question id.
///
/// Cloning yields another handle to the same store. Writes notify every live subscriber
/// synchronously; there is no queue and no acknowledgement, a later write simply wins.
#[derive(Clone, Default)]
pub struct ActivationStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl std::fmt::Debug for ActivationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ActivationStore")
            .field("active", &inner.active)
            .field("revision", &inner.revision)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl ActivationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.inner.borrow().active.clone()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.inner.borrow().active.as_deref() == Some(id)
    }

    /// Monotonic counter bumped on every write that changed the active id.
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    /// Apply a click: activate `event.question_id`, or clear it if it is already active.
    pub fn dispatch(&self, event: ActivationEvent) -> Option<String> {
        let next = if self.is_active(&event.question_id) {
            None
        } else {
            Some(event.question_id.clone())
        };
        self.write(next, Some(event))
    }

    /// Activate `id` unconditionally (no toggle).
    pub fn set(&self, id: impl Into<String>) -> Option<String> {
        let id = id.into();
        self.write(Some(id.clone()), Some(ActivationEvent::new(id)))
    }

    pub fn clear(&self) -> Option<String> {
        self.write(None, None)
    }

    /// Register `f` for every subsequent write. Dropping the returned guard unsubscribes.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, f: impl Fn(&ActivationChange) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscriber;
        inner.next_subscriber = inner.next_subscriber.wrapping_add(1);
        inner.subscribers.push(Subscriber {
            id,
            callback: Rc::new(f),
        });
        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn write(&self, next: Option<String>, event: Option<ActivationEvent>) -> Option<String> {
        // Callbacks run after the borrow is released so they may read or write the store.
        let (change, callbacks) = {
            let mut inner = self.inner.borrow_mut();
            let previous = std::mem::replace(&mut inner.active, next.clone());
            if previous != next {
                inner.revision = inner.revision.wrapping_add(1);
            }
            let callbacks: Vec<Callback> = inner
                .subscribers
                .iter()
                .map(|s| Rc::clone(&s.callback))
                .collect();
            (
                ActivationChange {
                    event,
                    previous,
                    current: next.clone(),
                },
                callbacks,
            )
        };

        tracing::debug!(
            previous = ?change.previous,
            current = ?change.current,
            listeners = callbacks.len(),
            "activation written"
        );
        for cb in callbacks {
            cb(&change);
        }
        next
    }
}

/// Guard returned by [`ActivationStore::subscribe`].
#[derive(Debug)]
pub struct Subscription {
    store: Weak<RefCell<StoreInner>>,
    id: u64,
}

impl Subscription {
    /// Unsubscribe now instead of at drop.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.borrow_mut().subscribers.retain(|s| s.id != self.id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signal/store.rs"]
mod tests;
