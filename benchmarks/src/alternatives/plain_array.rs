use std::cmp::Ordering;

/// Sorted `Vec` baseline relying on the standard library's binary search.
///
/// Duplicates are inserted in front of their equals, matching `OrderedArray`.
pub struct PlainArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    comparator: C,
    data: Vec<T>,
}

#[allow(dead_code)]
impl<T, C> PlainArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
    T: Clone,
{
    pub fn new(comparator: C, capacity: usize) -> PlainArray<T, C> {
        PlainArray {
            comparator,
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn insert(&mut self, t: T) -> usize {
        let comparator = &self.comparator;
        // Never report equality, so the result is always the lower bound.
        let idx = match self.data.binary_search_by(|x| match comparator(x, &t) {
            Ordering::Less => Ordering::Less,
            _ => Ordering::Greater,
        }) {
            Ok(idx) | Err(idx) => idx,
        };
        self.data.insert(idx, t);
        idx
    }

    pub fn find(&self, t: &T) -> Option<usize> {
        self.data.binary_search_by(|x| (self.comparator)(x, t)).ok()
    }

    pub fn remove(&mut self, t: &T) -> bool {
        match self.find(t) {
            Some(idx) => {
                self.data.remove(idx);
                true
            }
            None => {
                false
            }
        }
    }

    pub fn collect(&self) -> Vec<T> {
        self.data.clone()
    }

}
