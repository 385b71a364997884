// ============================================================================
// spark-observable - ObservableCollection
// An ordered collection that announces every structural change
// ============================================================================
//
// Every mutation goes through the same gate:
//
// 1. Reject the call if a structural-change handler of this collection is
//    running (reentrancy guard)
// 2. Validate arguments, then apply the change to storage
// 3. Attach/detach item property relays for items entering/leaving
// 4. Run the matching change hook (even while suppressed)
// 5. Unless suppressed: raise container property changes, then exactly one
//    structural change
//
// Storage is never borrowed while user code (hooks, handlers, item
// signals) runs, so handlers can always read the collection.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace, warn};

use super::builder::CollectionBuilder;
use super::guard::HandlerGuard;
use super::hooks::ChangeHooks;
use super::relay::ItemRelay;
use super::reload::LoadMode;
use crate::core::error::{Error, Result};
use crate::core::options::ObservableOptions;
use crate::events::{
    ChangeKind, CollectionChange, CollectionProperty, Event, ItemPropertyChange,
    NotifyPropertyChanged, PropertyChangedHandler, SubscriptionId,
};

// =============================================================================
// STORAGE ENTRY
// =============================================================================

/// A stored item plus its relay subscription, if any.
pub(crate) struct Entry<T> {
    pub(crate) value: T,
    pub(crate) relay: Option<SubscriptionId>,
}

impl<T> Entry<T> {
    fn new(value: T) -> Self {
        Self { value, relay: None }
    }
}

// =============================================================================
// COLLECTION INNER
// =============================================================================

/// Shared state behind every handle of one collection.
pub(crate) struct CollectionInner<T: 'static> {
    pub(crate) items: RefCell<Vec<Entry<T>>>,

    options: ObservableOptions,

    /// `None` when relay is unavailable for `T` or disabled by options
    relay: Option<ItemRelay<T>>,

    hooks: RefCell<ChangeHooks<T>>,

    pub(crate) suppress: Cell<bool>,

    /// Structural-change deliveries currently in progress
    handler_depth: Cell<u32>,

    collection_changed: Event<CollectionChange<T>>,
    property_changed: Event<CollectionProperty>,
    item_property_changed: Event<ItemPropertyChange<T>>,

    /// Handed to item relay handlers so items never keep the collection alive
    self_weak: Weak<CollectionInner<T>>,
}

impl<T: Clone + 'static> CollectionInner<T> {
    fn new(options: ObservableOptions, hooks: ChangeHooks<T>, relay: Option<ItemRelay<T>>) -> Rc<Self> {
        let relay = if options.disables_auto_property_changed_subscription() {
            None
        } else {
            relay
        };
        debug!(
            options = options.bits(),
            relay = relay.is_some(),
            "observable collection created"
        );

        Rc::new_cyclic(|self_weak| Self {
            items: RefCell::new(Vec::new()),
            options,
            relay,
            hooks: RefCell::new(hooks),
            suppress: Cell::new(false),
            handler_depth: Cell::new(0),
            collection_changed: Event::new(),
            property_changed: Event::new(),
            item_property_changed: Event::new(),
            self_weak: self_weak.clone(),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.items.borrow().len()
    }

    // =========================================================================
    // GUARDS
    // =========================================================================

    /// Fails while a structural-change handler of this collection runs.
    pub(crate) fn assert_not_in_handler(&self) -> Result<()> {
        if self.handler_depth.get() > 0 {
            warn!(
                depth = self.handler_depth.get(),
                "rejected collection mutation from inside a change handler"
            );
            return Err(Error::Reentrancy);
        }
        Ok(())
    }

    fn check_index(&self, index: usize, len: usize) -> Result<()> {
        if index >= len {
            return Err(Error::index_out_of_range(index, len));
        }
        Ok(())
    }

    // =========================================================================
    // ITEM RELAY
    // =========================================================================

    /// Subscribe the item stored at `index`, if relay is active.
    fn attach_at(&self, index: usize) {
        let Some(relay) = self.relay.as_ref() else {
            return;
        };

        let item = self.items.borrow()[index].value.clone();
        let sender = item.clone();
        let weak = self.self_weak.clone();
        let handler: PropertyChangedHandler = Rc::new(move |property: &str| {
            if let Some(inner) = weak.upgrade() {
                inner.raise_item_property_changed(&sender, property);
            }
        });

        let id = relay.attach(&item, handler);
        trace!(index, subscription = %id, "item relay attached");
        self.items.borrow_mut()[index].relay = Some(id);
    }

    fn detach(&self, entry: &Entry<T>) {
        if let (Some(relay), Some(id)) = (self.relay.as_ref(), entry.relay) {
            relay.detach(&entry.value, id);
            trace!(subscription = %id, "item relay detached");
        }
    }

    // =========================================================================
    // EMISSION
    // =========================================================================

    pub(crate) fn raise_property_changed(&self, property: CollectionProperty) {
        if self.property_changed.is_empty() {
            return;
        }
        trace!(property = property.name(), "raising property changed");
        self.property_changed.emit(&property);
    }

    pub(crate) fn raise_count_and_indexer(&self) {
        self.raise_property_changed(CollectionProperty::Count);
        self.raise_property_changed(CollectionProperty::Indexer);
    }

    /// Deliver a structural change with the reentrancy guard held.
    pub(crate) fn raise_collection_changed(&self, change: CollectionChange<T>) {
        if self.collection_changed.is_empty() {
            return;
        }
        trace!(kind = ?change.kind(), "raising collection changed");
        let _guard = HandlerGuard::enter(&self.handler_depth);
        self.collection_changed.emit(&change);
    }

    fn raise_item_property_changed(&self, item: &T, property: &str) {
        if self.suppress.get() || self.item_property_changed.is_empty() {
            return;
        }
        trace!(property, "relaying item property changed");
        self.item_property_changed.emit(&ItemPropertyChange {
            item: item.clone(),
            property: property.to_string(),
        });
    }

    // =========================================================================
    // MUTATION PRIMITIVES
    // =========================================================================
    //
    // `apply_*` assume the guard and bounds were checked and cannot fail.

    pub(crate) fn apply_insert(&self, index: usize, item: T) {
        self.items.borrow_mut().insert(index, Entry::new(item.clone()));
        self.attach_at(index);
        trace!(index, "item inserted");

        let hook = self.hooks.borrow().on_insert.clone();
        if let Some(hook) = hook {
            hook(&item);
        }

        if !self.suppress.get() {
            self.raise_count_and_indexer();
            self.raise_collection_changed(CollectionChange::Insert { item, index });
        }
    }

    fn apply_remove(&self, index: usize) -> T {
        let entry = self.items.borrow_mut().remove(index);
        self.detach(&entry);
        trace!(index, "item removed");

        let hook = self.hooks.borrow().on_remove.clone();
        if let Some(hook) = hook {
            hook(&entry.value);
        }

        if !self.suppress.get() {
            self.raise_count_and_indexer();
            self.raise_collection_changed(CollectionChange::Remove {
                item: entry.value.clone(),
                index,
            });
        }

        entry.value
    }

    fn apply_set(&self, index: usize, item: T) -> T {
        let old = std::mem::replace(
            &mut self.items.borrow_mut()[index],
            Entry::new(item.clone()),
        );
        self.detach(&old);
        self.attach_at(index);
        trace!(index, "item replaced");

        let hook = self.hooks.borrow().on_replace.clone();
        if let Some(hook) = hook {
            hook(&item, &old.value);
        }

        if !self.suppress.get() {
            self.raise_property_changed(CollectionProperty::Indexer);
            self.raise_collection_changed(CollectionChange::Replace {
                old_item: old.value.clone(),
                new_item: item,
                index,
            });
        }

        old.value
    }

    fn apply_move(&self, old_index: usize, new_index: usize) {
        let item = {
            let mut items = self.items.borrow_mut();
            let entry = items.remove(old_index);
            let item = entry.value.clone();
            items.insert(new_index, entry);
            item
        };
        trace!(old_index, new_index, "item moved");

        let hook = self.hooks.borrow().on_move.clone();
        if let Some(hook) = hook {
            hook(&item);
        }

        if !self.suppress.get() {
            self.raise_property_changed(CollectionProperty::Indexer);
            self.raise_collection_changed(CollectionChange::Move {
                item,
                old_index,
                new_index,
            });
        }
    }

    pub(crate) fn apply_clear(&self) {
        let removed = std::mem::take(&mut *self.items.borrow_mut());
        for entry in &removed {
            self.detach(entry);
        }
        trace!(count = removed.len(), "collection cleared");

        let values: Vec<T> = removed.into_iter().map(|entry| entry.value).collect();
        let hook = self.hooks.borrow().on_clear.clone();
        if let Some(hook) = hook {
            hook(&values);
        }

        if !self.suppress.get() {
            self.raise_count_and_indexer();
            self.raise_collection_changed(CollectionChange::Reset);
        }
    }

    // =========================================================================
    // CONFIGURATION-GUARDED SETTERS
    // =========================================================================

    fn set_suppress(&self, value: bool) -> Result<()> {
        if value && self.options.disallows_notification_suppression() {
            warn!("rejected enabling notification suppression");
            return Err(Error::configuration(
                "change notification suppression is not permitted on this instance",
            ));
        }
        self.suppress.set(value);
        Ok(())
    }

    fn update_hooks(&self, f: impl FnOnce(&mut ChangeHooks<T>)) -> Result<()> {
        if self.options.disallows_change_responders() {
            warn!("rejected change hook assignment");
            return Err(Error::configuration(
                "utilization or removal of change hooks is not permitted on this instance",
            ));
        }
        f(&mut self.hooks.borrow_mut());
        Ok(())
    }
}

impl<T: 'static> Drop for CollectionInner<T> {
    fn drop(&mut self) {
        let Some(relay) = self.relay.as_ref() else {
            return;
        };
        for entry in self.items.get_mut().iter() {
            if let Some(id) = entry.relay {
                relay.detach(&entry.value, id);
            }
        }
    }
}

// =============================================================================
// OBSERVABLE COLLECTION - the public handle
// =============================================================================

/// An ordered collection that notifies subscribers of every change.
///
/// The handle is cheap to clone; clones share the same contents, so a
/// handler can capture a clone and read the collection while a notification
/// is being delivered. Mutating it from inside a structural-change handler
/// fails with [`Error::Reentrancy`].
///
/// # Example
///
/// ```
/// use spark_observable::{CollectionChange, ObservableCollection};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let names = ObservableCollection::from_items(["foo", "bar", "baz"]);
/// let changes = Rc::new(RefCell::new(Vec::new()));
///
/// let changes_clone = changes.clone();
/// names.on_collection_changed(move |change| changes_clone.borrow_mut().push(change.clone()));
///
/// names.move_item(&"foo", 2).unwrap();
/// assert_eq!(names.to_vec(), vec!["bar", "baz", "foo"]);
/// assert_eq!(
///     *changes.borrow(),
///     vec![CollectionChange::Move { item: "foo", old_index: 0, new_index: 2 }]
/// );
/// ```
pub struct ObservableCollection<T: 'static> {
    pub(crate) inner: Rc<CollectionInner<T>>,
}

impl<T: Clone + 'static> ObservableCollection<T> {
    /// Create an empty collection with default options.
    ///
    /// Item property relay is unavailable; see [`new_observing`](Self::new_observing).
    pub fn new() -> Self {
        Self::with_options(ObservableOptions::default())
    }

    /// Create an empty collection with the given options.
    pub fn with_options(options: ObservableOptions) -> Self {
        Self::from_parts(options, ChangeHooks::default(), None, Vec::new())
    }

    /// Create a collection holding `items`.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        Self::from_parts(ObservableOptions::default(), ChangeHooks::default(), None, items)
    }

    /// Start building a collection with options, hooks and initial items.
    pub fn builder() -> CollectionBuilder<T> {
        CollectionBuilder::new()
    }

    pub(crate) fn from_parts(
        options: ObservableOptions,
        hooks: ChangeHooks<T>,
        relay: Option<ItemRelay<T>>,
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        let collection = Self {
            inner: CollectionInner::new(options, hooks, relay),
        };
        collection.inner.reload(items, false, LoadMode::SingleReset);
        collection
    }

    // =========================================================================
    // READING
    // =========================================================================

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clone of the item at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner
            .items
            .borrow()
            .get(index)
            .map(|entry| entry.value.clone())
    }

    pub fn first(&self) -> Option<T> {
        self.get(0)
    }

    pub fn last(&self) -> Option<T> {
        self.inner
            .items
            .borrow()
            .last()
            .map(|entry| entry.value.clone())
    }

    /// Snapshot of the contents in order.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner
            .items
            .borrow()
            .iter()
            .map(|entry| entry.value.clone())
            .collect()
    }

    /// Iterate over a snapshot of the contents.
    pub fn iter(&self) -> std::vec::IntoIter<T> {
        self.to_vec().into_iter()
    }

    /// Visit each item in order.
    ///
    /// Works on a snapshot, so `f` may mutate the collection.
    pub fn for_each(&self, mut f: impl FnMut(&T)) {
        for item in self.to_vec() {
            f(&item);
        }
    }

    /// Run `f` over borrowed items without cloning them.
    ///
    /// The contents stay borrowed while `f` runs, so `f` must not mutate
    /// the collection.
    pub fn with_items<R>(&self, f: impl FnOnce(&[&T]) -> R) -> R {
        let items = self.inner.items.borrow();
        let values: Vec<&T> = items.iter().map(|entry| &entry.value).collect();
        f(&values)
    }

    pub fn options(&self) -> ObservableOptions {
        self.inner.options
    }

    /// Whether items' property changes are relayed by this instance.
    pub fn relays_item_changes(&self) -> bool {
        self.inner.relay.is_some()
    }

    /// True while a structural-change handler of this collection runs.
    pub fn is_notifying(&self) -> bool {
        self.inner.handler_depth.get() > 0
    }

    // =========================================================================
    // MUTATION PRIMITIVES
    // =========================================================================

    /// Insert `item` at `index` (`index == len` appends).
    pub fn insert(&self, index: usize, item: T) -> Result<()> {
        self.inner.assert_not_in_handler()?;
        let len = self.len();
        if index > len {
            return Err(Error::index_out_of_range(index, len));
        }
        self.inner.apply_insert(index, item);
        Ok(())
    }

    /// Append `item`.
    pub fn push(&self, item: T) -> Result<()> {
        self.inner.assert_not_in_handler()?;
        self.inner.apply_insert(self.len(), item);
        Ok(())
    }

    /// Remove and return the item at `index`.
    pub fn remove_at(&self, index: usize) -> Result<T> {
        self.inner.assert_not_in_handler()?;
        self.inner.check_index(index, self.len())?;
        Ok(self.inner.apply_remove(index))
    }

    /// Replace the item at `index`, returning the old one.
    pub fn set_at(&self, index: usize, item: T) -> Result<T> {
        self.inner.assert_not_in_handler()?;
        self.inner.check_index(index, self.len())?;
        Ok(self.inner.apply_set(index, item))
    }

    /// Move the item at `old_index` so that it ends up at `new_index`.
    pub fn move_index(&self, old_index: usize, new_index: usize) -> Result<()> {
        self.inner.assert_not_in_handler()?;
        let len = self.len();
        self.inner.check_index(old_index, len)?;
        self.inner.check_index(new_index, len)?;
        self.inner.apply_move(old_index, new_index);
        Ok(())
    }

    /// Remove every item.
    pub fn clear(&self) -> Result<()> {
        self.inner.assert_not_in_handler()?;
        self.inner.apply_clear();
        Ok(())
    }

    // =========================================================================
    // RELOAD
    // =========================================================================

    /// Replace the contents with `items`, emitting a single `Reset`.
    pub fn load(&self, items: impl IntoIterator<Item = T>) -> Result<()> {
        self.load_with(items, LoadMode::SingleReset)
    }

    /// Replace the contents with `items` using the given notification mode.
    ///
    /// See [`LoadMode`] for what each mode emits.
    pub fn load_with(&self, items: impl IntoIterator<Item = T>, mode: LoadMode) -> Result<()> {
        self.inner.assert_not_in_handler()?;
        self.inner.reload(items, true, mode);
        Ok(())
    }

    // =========================================================================
    // SUPPRESSION & HOOKS
    // =========================================================================

    /// Switch notification suppression on or off.
    ///
    /// Fails with [`Error::Configuration`] when switching on is disallowed.
    pub fn set_suppress_notifications(&self, value: bool) -> Result<()> {
        self.inner.set_suppress(value)
    }

    pub fn suppresses_notifications(&self) -> bool {
        self.inner.suppress.get()
    }

    pub fn set_on_clear(&self, hook: impl Fn(&[T]) + 'static) -> Result<()> {
        self.inner
            .update_hooks(|hooks| hooks.on_clear = Some(Rc::new(hook)))
    }

    pub fn set_on_insert(&self, hook: impl Fn(&T) + 'static) -> Result<()> {
        self.inner
            .update_hooks(|hooks| hooks.on_insert = Some(Rc::new(hook)))
    }

    pub fn set_on_move(&self, hook: impl Fn(&T) + 'static) -> Result<()> {
        self.inner
            .update_hooks(|hooks| hooks.on_move = Some(Rc::new(hook)))
    }

    /// The hook receives `(new_item, old_item)`.
    pub fn set_on_replace(&self, hook: impl Fn(&T, &T) + 'static) -> Result<()> {
        self.inner
            .update_hooks(|hooks| hooks.on_replace = Some(Rc::new(hook)))
    }

    pub fn set_on_remove(&self, hook: impl Fn(&T) + 'static) -> Result<()> {
        self.inner
            .update_hooks(|hooks| hooks.on_remove = Some(Rc::new(hook)))
    }

    /// Remove every change hook.
    pub fn clear_hooks(&self) -> Result<()> {
        self.inner.update_hooks(|hooks| *hooks = ChangeHooks::new())
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Subscribe to every structural change.
    pub fn on_collection_changed(
        &self,
        handler: impl Fn(&CollectionChange<T>) + 'static,
    ) -> SubscriptionId {
        self.inner.collection_changed.subscribe(handler)
    }

    /// Subscribe to structural changes of one kind only.
    pub fn on_change_kind(
        &self,
        kind: ChangeKind,
        handler: impl Fn(&CollectionChange<T>) + 'static,
    ) -> SubscriptionId {
        self.inner
            .collection_changed
            .subscribe(move |change: &CollectionChange<T>| {
                if change.kind() == kind {
                    handler(change);
                }
            })
    }

    /// Subscribe to changes of the collection's own properties.
    pub fn on_property_changed(
        &self,
        handler: impl Fn(&CollectionProperty) + 'static,
    ) -> SubscriptionId {
        self.inner.property_changed.subscribe(handler)
    }

    /// Subscribe to property changes relayed from items.
    pub fn on_item_property_changed(
        &self,
        handler: impl Fn(&ItemPropertyChange<T>) + 'static,
    ) -> SubscriptionId {
        self.inner.item_property_changed.subscribe(handler)
    }

    /// Remove a subscription from whichever channel holds it.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.collection_changed.unsubscribe(id)
            || self.inner.property_changed.unsubscribe(id)
            || self.inner.item_property_changed.unsubscribe(id)
    }
}

// =============================================================================
// RELAY-CAPABLE CONSTRUCTORS
// =============================================================================

impl<T: NotifyPropertyChanged + Clone + 'static> ObservableCollection<T> {
    /// Empty collection that relays its items' property changes.
    pub fn new_observing() -> Self {
        Self::with_options_observing(ObservableOptions::default())
    }

    /// Like [`new_observing`](Self::new_observing); relay still honors
    /// `disable_auto_property_changed_subscription`.
    pub fn with_options_observing(options: ObservableOptions) -> Self {
        Self::from_parts(options, ChangeHooks::default(), Some(ItemRelay::for_type()), Vec::new())
    }

    /// Collection holding `items` that relays their property changes.
    pub fn from_items_observing(items: impl IntoIterator<Item = T>) -> Self {
        Self::from_parts(
            ObservableOptions::default(),
            ChangeHooks::default(),
            Some(ItemRelay::for_type()),
            items,
        )
    }
}

// =============================================================================
// LOOKUP-BASED OPERATIONS
// =============================================================================

impl<T: Clone + PartialEq + 'static> ObservableCollection<T> {
    /// Index of the first occurrence of `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.inner
            .items
            .borrow()
            .iter()
            .position(|entry| entry.value == *item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Move the first occurrence of `item` to `new_index`.
    pub fn move_item(&self, item: &T, new_index: usize) -> Result<()> {
        let old_index = self.index_of(item).ok_or(Error::NotFound)?;
        self.move_index(old_index, new_index)
    }

    /// Replace the first occurrence of `item` with `replacement`.
    pub fn replace(&self, item: &T, replacement: T) -> Result<T> {
        let index = self.index_of(item).ok_or(Error::NotFound)?;
        self.set_at(index, replacement)
    }

    /// Remove the first occurrence of `item`. Returns false if absent.
    pub fn remove(&self, item: &T) -> Result<bool> {
        // fail before the lookup, even when `item` is absent
        self.inner.assert_not_in_handler()?;
        match self.index_of(item) {
            Some(index) => {
                self.remove_at(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace every item matching `predicate`, in order.
    ///
    /// Matches are collected before the first replacement, so the
    /// replacement itself is never re-tested. Returns every item that
    /// matched, including ones a hook removed before their turn came.
    pub fn replace_where(
        &self,
        mut predicate: impl FnMut(&T) -> bool,
        replacement: T,
    ) -> Result<Vec<T>> {
        self.inner.assert_not_in_handler()?;

        let targets = self.matching(&mut predicate);
        for (index, item) in &targets {
            match self.locate(*index, item) {
                Some(index) => {
                    self.set_at(index, replacement.clone())?;
                }
                None => trace!(index, "match vanished before replacement"),
            }
        }
        Ok(targets.into_iter().map(|(_, item)| item).collect())
    }

    /// Remove every item matching `predicate`, in order, returning them.
    pub fn remove_where(&self, mut predicate: impl FnMut(&T) -> bool) -> Result<Vec<T>> {
        self.inner.assert_not_in_handler()?;

        let targets = self.matching(&mut predicate);
        let mut removed = Vec::with_capacity(targets.len());
        for (index, item) in targets {
            // earlier removals shifted this item left
            let expected = index.saturating_sub(removed.len());
            if let Some(index) = self.locate(expected, &item) {
                removed.push(self.remove_at(index)?);
            }
        }
        Ok(removed)
    }

    /// Snapshot of `(index, item)` for every match.
    fn matching(&self, predicate: &mut impl FnMut(&T) -> bool) -> Vec<(usize, T)> {
        self.to_vec()
            .into_iter()
            .enumerate()
            .filter(|(_, item)| predicate(item))
            .collect()
    }

    /// `hint` if it still holds `item`, else the first occurrence.
    ///
    /// Hooks may have reshaped the collection between steps.
    fn locate(&self, hint: usize, item: &T) -> Option<usize> {
        let still_there = self
            .inner
            .items
            .borrow()
            .get(hint)
            .is_some_and(|entry| entry.value == *item);
        if still_there {
            Some(hint)
        } else {
            self.index_of(item)
        }
    }
}

// =============================================================================
// TRAIT IMPLS
// =============================================================================

impl<T: 'static> Clone for ObservableCollection<T> {
    /// Another handle to the same collection.
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + 'static> Default for ObservableCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> FromIterator<T> for ObservableCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T: Clone + 'static> IntoIterator for &ObservableCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for ObservableCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.inner.items.borrow();
        let values: Vec<&T> = items.iter().map(|entry| &entry.value).collect();
        f.debug_struct("ObservableCollection")
            .field("items", &values)
            .field("len", &values.len())
            .field("suppressed", &self.inner.suppress.get())
            .field("hooked", &!self.inner.hooks.borrow().is_empty())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
