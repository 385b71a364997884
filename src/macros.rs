// ============================================================================
// spark-observable - Ergonomic Macros
// ============================================================================

/// Create an [`ObservableCollection`](crate::ObservableCollection) holding
/// the given items, like `vec!`.
///
/// # Usage
///
/// ```rust
/// use spark_observable::observable;
///
/// let letters = observable!['a', 'b', 'c'];
/// assert_eq!(letters.len(), 3);
///
/// let empty = observable![];
/// empty.push(1).unwrap();
/// ```
#[macro_export]
macro_rules! observable {
    () => {
        $crate::ObservableCollection::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::ObservableCollection::from_items([$($item),+])
    };
}

/// Clone variables into a move closure.
///
/// Handy for handlers that need their own handle to a collection or a
/// recorder.
///
/// # Usage
///
/// ```rust
/// use spark_observable::{cloned, observable};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let items = observable![1, 2];
/// let changes = Rc::new(Cell::new(0));
///
/// items.on_collection_changed(cloned!(changes => move |_| changes.set(changes.get() + 1)));
/// items.push(3).unwrap();
///
/// assert_eq!(changes.get(), 1);
/// ```
#[macro_export]
macro_rules! cloned {
    ($($n:ident),+ => $e:expr) => {
        {
            $( let $n = $n.clone(); )+
            $e
        }
    };
}
