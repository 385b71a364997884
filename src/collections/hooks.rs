// ============================================================================
// spark-observable - Change Hooks
// Optional per-mutation callbacks run before notifications are emitted
// ============================================================================

use std::fmt;
use std::rc::Rc;

/// Hook run after a clear, with the removed items.
pub type ClearHook<T> = Rc<dyn Fn(&[T])>;

/// Hook run after an insert, move or remove, with the affected item.
pub type ItemHook<T> = Rc<dyn Fn(&T)>;

/// Hook run after a replace, with `(new_item, old_item)`.
pub type ReplaceHook<T> = Rc<dyn Fn(&T, &T)>;

/// The set of optional change hooks of a collection.
///
/// Hooks run after storage reflects the mutation and before any notification
/// is emitted. They run even while notifications are suppressed. A hook may
/// read or mutate the collection.
pub struct ChangeHooks<T: 'static> {
    pub(crate) on_clear: Option<ClearHook<T>>,
    pub(crate) on_insert: Option<ItemHook<T>>,
    pub(crate) on_move: Option<ItemHook<T>>,
    pub(crate) on_replace: Option<ReplaceHook<T>>,
    pub(crate) on_remove: Option<ItemHook<T>>,
}

impl<T: 'static> ChangeHooks<T> {
    pub fn new() -> Self {
        Self {
            on_clear: None,
            on_insert: None,
            on_move: None,
            on_replace: None,
            on_remove: None,
        }
    }

    pub fn on_clear(mut self, hook: impl Fn(&[T]) + 'static) -> Self {
        self.on_clear = Some(Rc::new(hook));
        self
    }

    pub fn on_insert(mut self, hook: impl Fn(&T) + 'static) -> Self {
        self.on_insert = Some(Rc::new(hook));
        self
    }

    pub fn on_move(mut self, hook: impl Fn(&T) + 'static) -> Self {
        self.on_move = Some(Rc::new(hook));
        self
    }

    /// The hook receives `(new_item, old_item)`.
    pub fn on_replace(mut self, hook: impl Fn(&T, &T) + 'static) -> Self {
        self.on_replace = Some(Rc::new(hook));
        self
    }

    pub fn on_remove(mut self, hook: impl Fn(&T) + 'static) -> Self {
        self.on_remove = Some(Rc::new(hook));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.on_clear.is_none()
            && self.on_insert.is_none()
            && self.on_move.is_none()
            && self.on_replace.is_none()
            && self.on_remove.is_none()
    }
}

impl<T: 'static> Default for ChangeHooks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Clone for ChangeHooks<T> {
    fn clone(&self) -> Self {
        Self {
            on_clear: self.on_clear.clone(),
            on_insert: self.on_insert.clone(),
            on_move: self.on_move.clone(),
            on_replace: self.on_replace.clone(),
            on_remove: self.on_remove.clone(),
        }
    }
}

impl<T: 'static> fmt::Debug for ChangeHooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeHooks")
            .field("on_clear", &self.on_clear.is_some())
            .field("on_insert", &self.on_insert.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_replace", &self.on_replace.is_some())
            .field("on_remove", &self.on_remove.is_some())
            .finish()
    }
}
