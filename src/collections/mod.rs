// ============================================================================
// spark-observable - Collections
// The observable collection and the pieces it is assembled from
// ============================================================================
//
// - observable: the handle, mutation gate and notification emitter
// - reload:     bulk replacement announced as one Reset
// - relay:      item property-change subscriptions
// - hooks:      optional per-mutation callbacks
// - guard:      scoped reentrancy/suppression state
// ============================================================================

mod builder;
mod guard;
mod hooks;
mod observable;
mod relay;
mod reload;

pub use builder::CollectionBuilder;
pub use hooks::{ChangeHooks, ClearHook, ItemHook, ReplaceHook};
pub use observable::ObservableCollection;
pub use reload::LoadMode;
