// ============================================================================
// spark-observable - Event
// Ordered observer list with id-based unsubscription
// ============================================================================

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

// =============================================================================
// SUBSCRIPTION IDS
// =============================================================================

thread_local! {
    /// Source of subscription ids, unique per thread across all events
    static NEXT_SUBSCRIPTION_ID: Cell<u64> = const { Cell::new(1) };
}

/// Handle returned by every subscribe call.
///
/// Ids are unique across all events on the current thread, so an id can only
/// ever remove the subscription it was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        NEXT_SUBSCRIPTION_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            SubscriptionId(id)
        })
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// EVENT
// =============================================================================

/// Shared handler type stored by an [`Event`]
pub type Handler<A> = Rc<dyn Fn(&A)>;

/// An ordered list of subscriber callbacks.
///
/// Handlers run in registration order. Delivery works on a snapshot of the
/// list, so handlers added or removed while an emission is in progress take
/// effect from the next emission, and a handler may freely subscribe or
/// unsubscribe without tripping a borrow.
///
/// # Example
///
/// ```
/// use spark_observable::Event;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let event: Event<str> = Event::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let seen_clone = seen.clone();
/// let id = event.subscribe(move |name: &str| seen_clone.borrow_mut().push(name.to_string()));
///
/// event.emit("Count");
/// assert!(event.unsubscribe(id));
/// event.emit("Item[]");
///
/// assert_eq!(*seen.borrow(), vec!["Count".to_string()]);
/// ```
pub struct Event<A: ?Sized + 'static> {
    handlers: RefCell<Vec<(SubscriptionId, Handler<A>)>>,
}

impl<A: ?Sized + 'static> Event<A> {
    /// Create an event with no subscribers.
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Register a handler, returning its id.
    pub fn subscribe(&self, handler: impl Fn(&A) + 'static) -> SubscriptionId {
        self.subscribe_shared(Rc::new(handler))
    }

    /// Register an already shared handler.
    pub fn subscribe_shared(&self, handler: Handler<A>) -> SubscriptionId {
        let id = SubscriptionId::next();
        self.handlers.borrow_mut().push((id, handler));
        id
    }

    /// Remove a handler. Returns false if the id is not registered here.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        match handlers.iter().position(|(existing, _)| *existing == id) {
            Some(pos) => {
                handlers.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Deliver `args` to every handler, returning how many ran.
    pub fn emit(&self, args: &A) -> usize {
        let snapshot: Vec<Handler<A>> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        for handler in &snapshot {
            handler(args);
        }

        snapshot.len()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// True when nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }
}

impl<A: ?Sized + 'static> Default for Event<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized + 'static> fmt::Debug for Event<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("handlers", &self.len())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
