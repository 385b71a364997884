// ============================================================================
// spark-observable - Change Notifications
// Payloads carried by the structural and property-change events
// ============================================================================

use std::fmt;

use crate::core::constants::{COUNT_PROPERTY, INDEXER_PROPERTY};

// =============================================================================
// STRUCTURAL CHANGES
// =============================================================================

/// The kind of a structural change, used for kind-specific subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Insert,
    Remove,
    Replace,
    Move,
    Reset,
}

/// One structural change to a collection.
///
/// Exactly one of these is emitted per mutation call. Bulk reload emits a
/// single `Reset` (or a `Reset` followed by one `Insert` per item when per
/// item events were requested).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionChange<T> {
    /// `item` was inserted at `index`
    Insert { item: T, index: usize },

    /// `item` was removed from `index`
    Remove { item: T, index: usize },

    /// The value at `index` went from `old_item` to `new_item`
    Replace {
        old_item: T,
        new_item: T,
        index: usize,
    },

    /// `item` moved from `old_index` to `new_index`
    Move {
        item: T,
        old_index: usize,
        new_index: usize,
    },

    /// Contents changed wholesale (clear or reload)
    Reset,
}

impl<T> CollectionChange<T> {
    pub fn kind(&self) -> ChangeKind {
        match self {
            Self::Insert { .. } => ChangeKind::Insert,
            Self::Remove { .. } => ChangeKind::Remove,
            Self::Replace { .. } => ChangeKind::Replace,
            Self::Move { .. } => ChangeKind::Move,
            Self::Reset => ChangeKind::Reset,
        }
    }

    /// The item now present at [`index`](Self::index), if any.
    pub fn new_item(&self) -> Option<&T> {
        match self {
            Self::Insert { item, .. } | Self::Move { item, .. } => Some(item),
            Self::Replace { new_item, .. } => Some(new_item),
            Self::Remove { .. } | Self::Reset => None,
        }
    }

    /// The item that left its previous position, if any.
    pub fn old_item(&self) -> Option<&T> {
        match self {
            Self::Remove { item, .. } | Self::Move { item, .. } => Some(item),
            Self::Replace { old_item, .. } => Some(old_item),
            Self::Insert { .. } | Self::Reset => None,
        }
    }

    /// Index the change applies to (the destination for a move).
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Insert { index, .. } | Self::Remove { index, .. } | Self::Replace { index, .. } => {
                Some(*index)
            }
            Self::Move { new_index, .. } => Some(*new_index),
            Self::Reset => None,
        }
    }

    /// Source index of a move.
    pub fn old_index(&self) -> Option<usize> {
        match self {
            Self::Move { old_index, .. } => Some(*old_index),
            Self::Remove { index, .. } | Self::Replace { index, .. } => Some(*index),
            Self::Insert { .. } | Self::Reset => None,
        }
    }

    /// Convert the carried items, keeping kind and indices.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> CollectionChange<U> {
        match self {
            Self::Insert { item, index } => CollectionChange::Insert {
                item: f(item),
                index,
            },
            Self::Remove { item, index } => CollectionChange::Remove {
                item: f(item),
                index,
            },
            Self::Replace {
                old_item,
                new_item,
                index,
            } => CollectionChange::Replace {
                old_item: f(old_item),
                new_item: f(new_item),
                index,
            },
            Self::Move {
                item,
                old_index,
                new_index,
            } => CollectionChange::Move {
                item: f(item),
                old_index,
                new_index,
            },
            Self::Reset => CollectionChange::Reset,
        }
    }
}

// =============================================================================
// CONTAINER PROPERTIES
// =============================================================================

/// A property of the collection itself that changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectionProperty {
    /// Number of elements
    Count,
    /// Addressed contents
    Indexer,
}

impl CollectionProperty {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Count => COUNT_PROPERTY,
            Self::Indexer => INDEXER_PROPERTY,
        }
    }
}

impl fmt::Display for CollectionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// RELAYED ITEM PROPERTIES
// =============================================================================

/// A property change raised by an item and relayed by its collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemPropertyChange<T> {
    /// The item whose property changed
    pub item: T,
    /// Name of the changed property
    pub property: String,
}

// =============================================================================
// TESTS
// =============================================================================
