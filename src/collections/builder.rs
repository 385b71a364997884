// ============================================================================
// spark-observable - Collection Builder
// Options, hooks and initial items gathered before construction
// ============================================================================

use super::hooks::ChangeHooks;
use super::observable::ObservableCollection;
use super::relay::ItemRelay;
use crate::core::options::ObservableOptions;
use crate::events::NotifyPropertyChanged;

/// Builder for [`ObservableCollection`].
///
/// Hooks given here are part of construction, so they are accepted even
/// with [`ObservableOptions::disallow_change_responders`].
///
/// # Example
///
/// ```
/// use spark_observable::{ObservableCollection, ObservableOptions};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let removed = Rc::new(RefCell::new(Vec::new()));
/// let removed_clone = removed.clone();
///
/// let collection = ObservableCollection::builder()
///     .options(ObservableOptions::new().disallow_change_responders(true))
///     .items(["foo", "bar"])
///     .on_remove(move |item| removed_clone.borrow_mut().push(*item))
///     .build();
///
/// collection.remove_at(0).unwrap();
/// assert_eq!(*removed.borrow(), vec!["foo"]);
/// assert!(collection.set_on_insert(|_| {}).is_err());
/// ```
pub struct CollectionBuilder<T: 'static> {
    options: ObservableOptions,
    hooks: ChangeHooks<T>,
    items: Vec<T>,
}

impl<T: Clone + 'static> CollectionBuilder<T> {
    pub fn new() -> Self {
        Self {
            options: ObservableOptions::default(),
            hooks: ChangeHooks::default(),
            items: Vec::new(),
        }
    }

    pub fn options(mut self, options: ObservableOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace every hook at once.
    pub fn hooks(mut self, hooks: ChangeHooks<T>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn on_clear(mut self, hook: impl Fn(&[T]) + 'static) -> Self {
        self.hooks = self.hooks.on_clear(hook);
        self
    }

    pub fn on_insert(mut self, hook: impl Fn(&T) + 'static) -> Self {
        self.hooks = self.hooks.on_insert(hook);
        self
    }

    pub fn on_move(mut self, hook: impl Fn(&T) + 'static) -> Self {
        self.hooks = self.hooks.on_move(hook);
        self
    }

    /// The hook receives `(new_item, old_item)`.
    pub fn on_replace(mut self, hook: impl Fn(&T, &T) + 'static) -> Self {
        self.hooks = self.hooks.on_replace(hook);
        self
    }

    pub fn on_remove(mut self, hook: impl Fn(&T) + 'static) -> Self {
        self.hooks = self.hooks.on_remove(hook);
        self
    }

    /// Initial contents, appended to any given earlier.
    pub fn items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.items.extend(items);
        self
    }

    /// Build without item property relay.
    pub fn build(self) -> ObservableCollection<T> {
        ObservableCollection::from_parts(self.options, self.hooks, None, self.items)
    }

    /// Build with item property relay (unless the options disable it).
    pub fn build_observing(self) -> ObservableCollection<T>
    where
        T: NotifyPropertyChanged,
    {
        ObservableCollection::from_parts(
            self.options,
            self.hooks,
            Some(ItemRelay::for_type()),
            self.items,
        )
    }
}

impl<T: Clone + 'static> Default for CollectionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
