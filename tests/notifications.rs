use spark_observable::{
    cloned, observable, ChangeKind, CollectionChange, CollectionProperty, Error, LoadMode,
    ObservableCollection, ObservableOptions,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn recorder<T: Clone + 'static>(
    collection: &ObservableCollection<T>,
) -> Rc<RefCell<Vec<CollectionChange<T>>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    collection.on_collection_changed(cloned!(log => move |change: &CollectionChange<T>| {
        log.borrow_mut().push(change.clone())
    }));
    log
}

#[test]
fn test_move_by_item_reports_both_indices() {
    let collection = observable!["A", "B", "C"];
    let log = recorder(&collection);

    collection.move_item(&"A", 2).unwrap();

    assert_eq!(collection.to_vec(), vec!["B", "C", "A"]);
    assert_eq!(
        *log.borrow(),
        vec![CollectionChange::Move {
            item: "A",
            old_index: 0,
            new_index: 2,
        }]
    );
}

#[test]
fn test_remove_where_starts_with_b() {
    let collection = observable!["foo", "bar", "baz"];

    let removed = collection.remove_where(|s| s.starts_with('b')).unwrap();

    assert_eq!(removed, vec!["bar", "baz"]);
    assert_eq!(collection.to_vec(), vec!["foo"]);
}

#[test]
fn test_suppressed_insert_is_silent() {
    let collection = ObservableCollection::new();
    let log = recorder(&collection);

    collection.set_suppress_notifications(true).unwrap();
    collection.push("first").unwrap();
    collection.set_suppress_notifications(false).unwrap();
    collection.push("second").unwrap();

    assert_eq!(
        *log.borrow(),
        vec![CollectionChange::Insert {
            item: "second",
            index: 1,
        }]
    );
}

#[test]
fn test_default_load_is_one_reset_for_any_size() {
    for size in [0usize, 1, 5, 100] {
        let collection = observable![-1, -2, -3];
        let log = recorder(&collection);

        collection.load(0..size as i32).unwrap();

        assert_eq!(collection.len(), size);
        assert_eq!(*log.borrow(), vec![CollectionChange::Reset], "size {size}");
    }
}

#[test]
fn test_per_item_load_is_reset_plus_inserts() {
    let collection = observable![10, 20, 30];
    let kinds = Rc::new(RefCell::new(Vec::new()));
    collection.on_collection_changed(cloned!(kinds => move |c: &CollectionChange<i32>| {
        kinds.borrow_mut().push(c.kind())
    }));

    collection.load_with([1, 2, 3, 4], LoadMode::PerItem).unwrap();

    let kinds = kinds.borrow();
    assert_eq!(kinds.len(), 5);
    assert_eq!(kinds[0], ChangeKind::Reset);
    assert!(kinds[1..].iter().all(|k| *k == ChangeKind::Insert));
}

#[test]
fn test_per_item_load_ignores_prior_suppression_during_load() {
    let collection = observable![1];
    let log = recorder(&collection);

    collection.set_suppress_notifications(true).unwrap();
    collection.load_with([2], LoadMode::PerItem).unwrap();

    assert_eq!(log.borrow().len(), 2);
    assert!(collection.suppresses_notifications());
}

#[test]
fn test_every_mutation_from_handler_fails_with_reentrancy() {
    let collection = observable![1, 2, 3];
    let results: Rc<RefCell<Vec<Result<(), Error>>>> = Rc::new(RefCell::new(Vec::new()));
    let snapshots = Rc::new(RefCell::new(Vec::new()));

    collection.on_collection_changed(cloned!(collection, results, snapshots => move |_: &CollectionChange<i32>| {
        let before = collection.to_vec();
        let mut out = results.borrow_mut();
        out.push(collection.insert(0, 99));
        out.push(collection.push(99));
        out.push(collection.remove_at(0).map(|_| ()));
        out.push(collection.set_at(0, 99).map(|_| ()));
        out.push(collection.move_index(0, 1));
        out.push(collection.clear());
        out.push(collection.load([99]));
        out.push(collection.move_item(&1, 1));
        out.push(collection.replace(&1, 99).map(|_| ()));
        out.push(collection.remove(&1).map(|_| ()));
        out.push(collection.remove(&42).map(|_| ()));
        out.push(collection.remove_where(|_| true).map(|_| ()));
        out.push(collection.replace_where(|_| true, 99).map(|_| ()));
        snapshots.borrow_mut().push((before, collection.to_vec()));
    }));

    collection.push(4).unwrap();

    assert_eq!(results.borrow().len(), 13);
    assert!(results.borrow().iter().all(|r| *r == Err(Error::Reentrancy)));
    let snapshots = snapshots.borrow();
    assert_eq!(snapshots[0].0, snapshots[0].1);
    assert_eq!(collection.to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_mutation_allowed_after_handler_returns() {
    let collection = observable![1];
    let nested = Rc::new(Cell::new(false));
    collection.on_collection_changed(cloned!(collection, nested => move |_: &CollectionChange<i32>| {
        nested.set(collection.push(0).is_err());
    }));

    collection.push(2).unwrap();
    assert!(nested.get());

    collection.push(3).unwrap();
    assert_eq!(collection.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_hook_may_mutate_collection() {
    let collection: ObservableCollection<i32> = ObservableCollection::new();
    collection
        .set_on_remove(cloned!(collection => move |item: &i32| {
            if *item == 1 {
                collection.push(100).unwrap();
            }
        }))
        .unwrap();

    collection.load([1, 2, 1, 3]).unwrap();
    let removed = collection.remove_where(|v| *v == 1).unwrap();

    assert_eq!(removed, vec![1, 1]);
    assert_eq!(collection.to_vec(), vec![2, 3, 100, 100]);
}

#[test]
fn test_property_notifications_per_operation() {
    let collection = observable!["x", "y"];
    let props = Rc::new(RefCell::new(Vec::new()));
    collection.on_property_changed(cloned!(props => move |p: &CollectionProperty| {
        props.borrow_mut().push(*p)
    }));

    collection.replace(&"x", "z").unwrap();
    assert_eq!(*props.borrow(), vec![CollectionProperty::Indexer]);

    props.borrow_mut().clear();
    collection.remove(&"y").unwrap();
    assert_eq!(
        *props.borrow(),
        vec![CollectionProperty::Count, CollectionProperty::Indexer]
    );
}

#[test]
fn test_kind_channels_share_the_guard() {
    let collection = observable![1, 2];
    let rejected = Rc::new(Cell::new(false));
    collection.on_change_kind(
        ChangeKind::Remove,
        cloned!(collection, rejected => move |_: &CollectionChange<i32>| {
            rejected.set(collection.push(9) == Err(Error::Reentrancy));
        }),
    );

    collection.remove_at(0).unwrap();
    assert!(rejected.get());
    assert_eq!(collection.to_vec(), vec![2]);
}

#[test]
fn test_disallowed_suppression_leaves_notifications_on() {
    let collection: ObservableCollection<i32> = ObservableCollection::with_options(
        ObservableOptions::new().disallow_notification_suppression(true),
    );
    let log = recorder(&collection);

    assert!(collection.set_suppress_notifications(true).is_err());
    collection.push(1).unwrap();

    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_subscribers_run_in_registration_order() {
    let collection = observable![0];
    let order = Rc::new(RefCell::new(Vec::new()));
    for tag in 0..4 {
        collection.on_collection_changed(cloned!(order => move |_: &CollectionChange<i32>| {
            order.borrow_mut().push(tag)
        }));
    }

    collection.clear().unwrap();
    assert_eq!(*order.borrow(), vec![0, 1, 2, 3]);
}

#[test]
fn test_out_of_range_errors() {
    let collection = observable![1, 2];

    assert_eq!(
        collection.remove_at(2),
        Err(Error::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(
        collection.set_at(5, 0),
        Err(Error::IndexOutOfRange { index: 5, len: 2 })
    );
    assert!(collection.insert(2, 3).is_ok());
    assert_eq!(collection.to_vec(), vec![1, 2, 3]);
}
