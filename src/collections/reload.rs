// ============================================================================
// spark-observable - Reload
// Replace the whole contents as one logical operation
// ============================================================================
//
// A reload clears the collection and inserts the new items through the
// regular mutation path (so relays and hooks behave as usual), with
// suppression forced for the duration. By default subscribers see one
// `Reset` at the end instead of one notification per step.
//
// Reload is best-effort: if an insert panics the clear is not rolled back.
// The prior suppression state is restored on every exit path.
// ============================================================================

use tracing::debug;

use super::guard::SuppressionGuard;
use super::observable::CollectionInner;
use crate::events::CollectionChange;

/// How a reload is announced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LoadMode {
    /// Steps run suppressed; a single `Reset` follows (unless suppression
    /// is active when the reload ends).
    #[default]
    SingleReset,

    /// Suppression is lifted for the duration so every step announces
    /// itself: one `Reset` for the clear, then one `Insert` per item. No
    /// trailing `Reset`.
    PerItem,
}

impl<T: Clone + 'static> CollectionInner<T> {
    /// Clear and refill. The caller has already checked the reentrancy guard.
    ///
    /// `raise_reset` is false only for the initial load at construction,
    /// where nobody can be subscribed yet.
    pub(crate) fn reload(&self, items: impl IntoIterator<Item = T>, raise_reset: bool, mode: LoadMode) {
        let per_item = mode == LoadMode::PerItem;

        {
            let _suppression = SuppressionGuard::force(&self.suppress, !per_item);

            self.apply_clear();
            for item in items {
                self.apply_insert(self.len(), item);
            }
        }

        debug!(len = self.len(), ?mode, "collection reloaded");

        if raise_reset && !per_item && !self.suppress.get() {
            self.raise_count_and_indexer();
            self.raise_collection_changed(CollectionChange::Reset);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
