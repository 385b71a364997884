// ============================================================================
// spark-observable - Observable Collections for Rust
// ============================================================================
//
// An ordered, mutable collection that tells subscribers about every change:
// insert, remove, replace, move and bulk reload. Items that announce their
// own property changes are relayed through the collection automatically.
//
// Notification rules:
// - exactly one structural change per mutation call
// - bulk reload emits one Reset (or Reset + one Insert per item)
// - suppression silences structural, container and relayed notifications
// - mutating the collection from its own structural-change handler fails
// ============================================================================

#[macro_use]
mod macros;

pub mod collections;
pub mod core;
pub mod events;

// Re-export core items at crate root
pub use crate::core::constants;
pub use crate::core::error::{Error, Result};
pub use crate::core::options::ObservableOptions;

// Re-export events
pub use events::{
    ChangeKind, CollectionChange, CollectionProperty, Event, Handler, ItemPropertyChange,
    NotifyPropertyChanged, PropertyChangedEvent, PropertyChangedHandler, SubscriptionId,
};

// Re-export collections
pub use collections::{
    ChangeHooks, ClearHook, CollectionBuilder, ItemHook, LoadMode, ObservableCollection,
    ReplaceHook,
};

// =============================================================================
// TESTS
// =============================================================================
