use spark_observable::{
    cloned, ItemPropertyChange, LoadMode, NotifyPropertyChanged, ObservableCollection,
    ObservableOptions, PropertyChangedEvent, PropertyChangedHandler, SubscriptionId,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// An element that announces changes to its properties.
#[derive(Default)]
struct Tracked {
    a: Cell<i32>,
    b: Cell<i32>,
    changed: PropertyChangedEvent,
}

impl Tracked {
    fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    fn set_a(&self, value: i32) {
        self.a.set(value);
        self.changed.notify("A");
    }

    fn set_b(&self, value: i32) {
        self.b.set(value);
        self.changed.notify("B");
    }

    fn observers(&self) -> usize {
        self.changed.subscriber_count()
    }
}

// identity comparison, so lookups find this exact instance
impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl NotifyPropertyChanged for Tracked {
    fn subscribe_property_changed(&self, handler: PropertyChangedHandler) -> SubscriptionId {
        self.changed.subscribe_property_changed(handler)
    }

    fn unsubscribe_property_changed(&self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe_property_changed(id)
    }
}

type Relayed = Rc<RefCell<Vec<(Rc<Tracked>, String)>>>;

fn relayed(collection: &ObservableCollection<Rc<Tracked>>) -> Relayed {
    let log: Relayed = Rc::new(RefCell::new(Vec::new()));
    collection.on_item_property_changed(cloned!(log => move |change: &ItemPropertyChange<Rc<Tracked>>| {
        log.borrow_mut().push((change.item.clone(), change.property.clone()))
    }));
    log
}

#[test]
fn test_property_change_is_relayed_once() {
    let collection = ObservableCollection::new_observing();
    let log = relayed(&collection);
    let item = Tracked::new();

    collection.push(item.clone()).unwrap();
    item.set_a(5);

    let log = log.borrow();
    assert_eq!(log.len(), 1);
    assert!(Rc::ptr_eq(&log[0].0, &item));
    assert_eq!(log[0].1, "A");
    assert_eq!(item.a.get(), 5);
}

#[test]
fn test_removed_item_is_not_relayed() {
    let collection = ObservableCollection::new_observing();
    let log = relayed(&collection);
    let item = Tracked::new();

    collection.push(item.clone()).unwrap();
    collection.remove(&item).unwrap();
    item.set_b(1);

    assert!(log.borrow().is_empty());
    assert_eq!(item.observers(), 0);
}

#[test]
fn test_replace_swaps_subscription() {
    let old = Tracked::new();
    let new = Tracked::new();
    let collection = ObservableCollection::from_items_observing([old.clone()]);
    let log = relayed(&collection);

    collection.replace(&old, new.clone()).unwrap();
    old.set_a(1);
    new.set_a(2);

    assert_eq!(old.observers(), 0);
    assert_eq!(new.observers(), 1);
    assert_eq!(log.borrow().len(), 1);
    assert!(Rc::ptr_eq(&log.borrow()[0].0, &new));
}

#[test]
fn test_move_keeps_subscription() {
    let items: Vec<Rc<Tracked>> = (0..3).map(|_| Tracked::new()).collect();
    let collection = ObservableCollection::from_items_observing(items.clone());

    collection.move_index(0, 2).unwrap();

    assert!(items.iter().all(|item| item.observers() == 1));
}

#[test]
fn test_clear_and_load_release_old_items() {
    let first: Vec<Rc<Tracked>> = (0..2).map(|_| Tracked::new()).collect();
    let second: Vec<Rc<Tracked>> = (0..3).map(|_| Tracked::new()).collect();
    let collection = ObservableCollection::from_items_observing(first.clone());
    assert!(first.iter().all(|item| item.observers() == 1));

    collection.load(second.clone()).unwrap();
    assert!(first.iter().all(|item| item.observers() == 0));
    assert!(second.iter().all(|item| item.observers() == 1));

    collection.load_with(first.clone(), LoadMode::PerItem).unwrap();
    assert!(second.iter().all(|item| item.observers() == 0));

    collection.clear().unwrap();
    assert!(first.iter().all(|item| item.observers() == 0));
}

#[test]
fn test_remove_where_releases_matches() {
    let keep = Tracked::new();
    let drop_me = Tracked::new();
    drop_me.a.set(7);
    let collection = ObservableCollection::from_items_observing([keep.clone(), drop_me.clone()]);

    let removed = collection.remove_where(|item| item.a.get() == 7).unwrap();

    assert_eq!(removed.len(), 1);
    assert_eq!(drop_me.observers(), 0);
    assert_eq!(keep.observers(), 1);
}

#[test]
fn test_suppression_silences_relay() {
    let collection = ObservableCollection::new_observing();
    let log = relayed(&collection);
    let item = Tracked::new();
    collection.push(item.clone()).unwrap();

    collection.set_suppress_notifications(true).unwrap();
    item.set_a(1);
    collection.set_suppress_notifications(false).unwrap();
    item.set_a(2);

    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_disabled_relay_never_subscribes() {
    let collection = ObservableCollection::with_options_observing(
        ObservableOptions::new().disable_auto_property_changed_subscription(true),
    );
    let log = relayed(&collection);
    let item = Tracked::new();

    collection.push(item.clone()).unwrap();
    item.set_a(1);

    assert!(!collection.relays_item_changes());
    assert_eq!(item.observers(), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_plain_constructor_never_subscribes() {
    let collection: ObservableCollection<Rc<Tracked>> = ObservableCollection::new();
    let item = Tracked::new();

    collection.push(item.clone()).unwrap();

    assert!(!collection.relays_item_changes());
    assert_eq!(item.observers(), 0);
}

#[test]
fn test_same_item_in_two_collections() {
    let item = Tracked::new();
    let left = ObservableCollection::new_observing();
    let right = ObservableCollection::new_observing();
    let left_log = relayed(&left);
    let right_log = relayed(&right);

    left.push(item.clone()).unwrap();
    right.push(item.clone()).unwrap();
    assert_eq!(item.observers(), 2);

    left.clear().unwrap();
    item.set_a(3);

    assert!(left_log.borrow().is_empty());
    assert_eq!(right_log.borrow().len(), 1);
}

#[test]
fn test_relay_handler_may_mutate_collection() {
    let collection = ObservableCollection::new_observing();
    let item = Tracked::new();
    collection.push(item.clone()).unwrap();

    collection.on_item_property_changed(cloned!(collection => move |change: &ItemPropertyChange<Rc<Tracked>>| {
        if change.property == "B" {
            collection.remove(&change.item).unwrap();
        }
    }));

    item.set_b(1);

    assert!(collection.is_empty());
    assert_eq!(item.observers(), 0);
}
