//! Ordered set of the obstacles currently crossed by the sweep ray.

use std::cmp::Ordering;

/// A strict weak order supplied at runtime.
///
/// Unlike [`Ord`], the order may depend on state held by the comparator (the
/// observer position, a tolerance), so it cannot live on the element type.
pub trait StrictWeakOrder<T> {
    /// Returns `true` if `a` is strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Three-way comparison derived from [`less`](Self::less); equivalent
    /// elements compare `Equal`.
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// A sorted set keyed by a runtime [`StrictWeakOrder`].
///
/// Elements are kept in a `Vec` sorted by the order and located by binary
/// search, so lookups are `O(log n)` and insertion or removal is `O(n)`.
/// Two elements are *equivalent* when neither is less than the other; the set
/// holds at most one element of each equivalence class.
#[derive(Debug, Clone)]
pub struct ActiveSet<T, O> {
    items: Vec<T>,
    order: O,
}

impl<T, O: StrictWeakOrder<T>> ActiveSet<T, O> {
    /// Creates an empty set ordered by `order`.
    pub fn new(order: O) -> Self {
        Self {
            items: Vec::new(),
            order,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the least element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Index of the first element not less than `key`.
    fn lower_bound(&self, key: &T) -> usize {
        self.items.partition_point(|item| self.order.less(item, key))
    }

    /// Index of the element equivalent to `key`, if present.
    fn position(&self, key: &T) -> Option<usize> {
        let i = self.lower_bound(key);
        match self.items.get(i) {
            Some(item) if !self.order.less(key, item) => Some(i),
            _ => None,
        }
    }

    /// Returns `true` if an element equivalent to `key` is present.
    pub fn contains(&self, key: &T) -> bool {
        self.position(key).is_some()
    }

    /// Inserts `item` in order.
    ///
    /// Returns `false` and leaves the set unchanged if an equivalent element
    /// is already present.
    pub fn insert(&mut self, item: T) -> bool {
        let i = self.lower_bound(&item);
        if let Some(existing) = self.items.get(i) {
            if !self.order.less(&item, existing) {
                return false;
            }
        }
        self.items.insert(i, item);
        true
    }

    /// Removes and returns the element equivalent to `key`, if present.
    pub fn remove(&mut self, key: &T) -> Option<T> {
        self.position(key).map(|i| self.items.remove(i))
    }
}
