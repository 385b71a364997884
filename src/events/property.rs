// ============================================================================
// spark-observable - Property Change Capability
// The signal an element type exposes to take part in auto-relay
// ============================================================================

use std::rc::Rc;

use super::event::{Event, Handler, SubscriptionId};

/// Handler attached to an item's property-change signal.
pub type PropertyChangedHandler = Handler<str>;

// =============================================================================
// CAPABILITY TRAIT
// =============================================================================

/// Implemented by element types that announce changes to their own
/// properties.
///
/// Collections built through the `*_observing` constructors subscribe to
/// this signal for every item they hold and relay it as an item property
/// change.
pub trait NotifyPropertyChanged {
    /// Attach `handler`; it receives the changed property's name.
    fn subscribe_property_changed(&self, handler: PropertyChangedHandler) -> SubscriptionId;

    /// Detach a handler previously attached. Returns false if unknown.
    fn unsubscribe_property_changed(&self, id: SubscriptionId) -> bool;
}

impl<X: NotifyPropertyChanged + ?Sized> NotifyPropertyChanged for Rc<X> {
    fn subscribe_property_changed(&self, handler: PropertyChangedHandler) -> SubscriptionId {
        (**self).subscribe_property_changed(handler)
    }

    fn unsubscribe_property_changed(&self, id: SubscriptionId) -> bool {
        (**self).unsubscribe_property_changed(id)
    }
}

// =============================================================================
// PROPERTY CHANGED EVENT
// =============================================================================

/// Ready-made property-change signal for element types to embed.
///
/// # Example
///
/// ```
/// use spark_observable::{NotifyPropertyChanged, PropertyChangedEvent, PropertyChangedHandler, SubscriptionId};
/// use std::cell::Cell;
///
/// #[derive(Default)]
/// struct Counter {
///     value: Cell<i32>,
///     changed: PropertyChangedEvent,
/// }
///
/// impl Counter {
///     fn set_value(&self, value: i32) {
///         self.value.set(value);
///         self.changed.notify("value");
///     }
/// }
///
/// impl NotifyPropertyChanged for Counter {
///     fn subscribe_property_changed(&self, handler: PropertyChangedHandler) -> SubscriptionId {
///         self.changed.subscribe_property_changed(handler)
///     }
///
///     fn unsubscribe_property_changed(&self, id: SubscriptionId) -> bool {
///         self.changed.unsubscribe_property_changed(id)
///     }
/// }
///
/// let counter = Counter::default();
/// counter.set_value(3);
/// assert_eq!(counter.changed.subscriber_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct PropertyChangedEvent {
    event: Event<str>,
}

impl PropertyChangedEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Announce that `property` changed.
    pub fn notify(&self, property: &str) {
        self.event.emit(property);
    }

    pub fn subscriber_count(&self) -> usize {
        self.event.len()
    }
}

impl NotifyPropertyChanged for PropertyChangedEvent {
    fn subscribe_property_changed(&self, handler: PropertyChangedHandler) -> SubscriptionId {
        self.event.subscribe_shared(handler)
    }

    fn unsubscribe_property_changed(&self, id: SubscriptionId) -> bool {
        self.event.unsubscribe(id)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn notify_reaches_subscribers() {
        let changed = PropertyChangedEvent::new();
        let names = Rc::new(RefCell::new(Vec::new()));

        let names_clone = names.clone();
        let id = changed.subscribe_property_changed(Rc::new(move |name: &str| {
            names_clone.borrow_mut().push(name.to_string())
        }));

        changed.notify("A");
        assert!(changed.unsubscribe_property_changed(id));
        changed.notify("B");

        assert_eq!(*names.borrow(), vec!["A".to_string()]);
        assert_eq!(changed.subscriber_count(), 0);
    }

    #[test]
    fn rc_forwards_capability() {
        let shared = Rc::new(PropertyChangedEvent::new());
        let id = shared.subscribe_property_changed(Rc::new(|_: &str| {}));
        assert_eq!(shared.subscriber_count(), 1);
        assert!(shared.unsubscribe_property_changed(id));
    }
}
