// ============================================================================
// spark-observable - Item Property Relay
// Subscribe/unsubscribe plumbing for items that expose a change signal
// ============================================================================
//
// The capability is decided once, when the collection is built: only the
// `T: NotifyPropertyChanged` constructors produce an `ItemRelay`, everything
// else leaves it empty and relay stays off for the life of the instance.
// ============================================================================

use crate::events::{NotifyPropertyChanged, PropertyChangedHandler, SubscriptionId};

/// Type-erased access to an element type's property-change signal.
pub(crate) struct ItemRelay<T> {
    subscribe: fn(&T, PropertyChangedHandler) -> SubscriptionId,
    unsubscribe: fn(&T, SubscriptionId) -> bool,
}

impl<T> ItemRelay<T> {
    /// Relay for an element type with the capability.
    pub(crate) fn for_type() -> Self
    where
        T: NotifyPropertyChanged,
    {
        Self {
            subscribe: |item, handler| item.subscribe_property_changed(handler),
            unsubscribe: |item, id| item.unsubscribe_property_changed(id),
        }
    }

    pub(crate) fn attach(&self, item: &T, handler: PropertyChangedHandler) -> SubscriptionId {
        (self.subscribe)(item, handler)
    }

    pub(crate) fn detach(&self, item: &T, id: SubscriptionId) -> bool {
        (self.unsubscribe)(item, id)
    }
}
