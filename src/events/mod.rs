// ============================================================================
// spark-observable - Events
// Observer lists and the notification payloads they carry
// ============================================================================

pub mod change;
pub mod event;
pub mod property;

pub use change::{ChangeKind, CollectionChange, CollectionProperty, ItemPropertyChange};
pub use event::{Event, Handler, SubscriptionId};
pub use property::{NotifyPropertyChanged, PropertyChangedEvent, PropertyChangedHandler};
