use std::cmp::Ordering;
use std::fmt;

use crate::error::{check_access, Result};
use crate::search::{binary_search_by, SearchMode};
use crate::slots::{Iter, Slots};

/// Comparator type used by `OrderedArray::from_ord`.
pub type OrdComparator<T> = fn(&T, &T) -> Ordering;

/// A growable array which keeps its elements sorted.
///
/// The comparator describes the ascending order of `T`; a descending array
/// simply reverses it. The direction is fixed at construction. Equal elements
/// are allowed, a newly inserted duplicate lands in front of all elements
/// comparing equal to it.
pub struct OrderedArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    comparator: C,
    ascending: bool,
    slots: Slots<T>,
}

impl<T, C> OrderedArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty `OrderedArray` with a capacity of one.
    pub fn new(comparator: C, ascending: bool) -> OrderedArray<T, C> {
        OrderedArray {
            comparator,
            ascending,
            slots: Slots::from_vec(Vec::new()),
        }
    }

    /// Creates an `OrderedArray` from arbitrary initial values, sorting them once.
    pub fn from_vec(mut values: Vec<T>, comparator: C, ascending: bool) -> OrderedArray<T, C> {
        let directed = |a: &T, b: &T| {
            let cmp = comparator(a, b);
            if ascending { cmp } else { cmp.reverse() }
        };
        if !values.windows(2).all(|w| directed(&w[0], &w[1]) != Ordering::Greater) {
            log::debug!("Sorting {} initial values", values.len());
            values.sort_by(directed);
        }
        OrderedArray {
            comparator,
            ascending,
            slots: Slots::from_vec(values),
        }
    }

    /// Returns the length (i.e., number of elements stored).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Access the element at `index`.
    ///
    /// Fails with `IndexOutOfRange` if `index >= len`.
    pub fn get_at(&self, index: usize) -> Result<&T> {
        check_access(index, self.len())?;
        Ok(self.slots.get(index))
    }

    /// Try to find an existing value.
    ///
    /// On duplicates this returns whichever equal element the binary search
    /// hits first, not necessarily the leftmost one. O(log n).
    #[inline]
    pub fn find(&self, t: &T) -> Option<usize> {
        let (idx, equals) = binary_search_by(
            self.len(),
            SearchMode::Lookup,
            |i| self.order(self.slots.get(i), t),
        );
        if equals {
            Some(idx)
        } else {
            None
        }
    }

    /// Insert a value, returning the index it was placed at.
    ///
    /// The position is the first slot whose element is not ordered before
    /// `t`, i.e., duplicates go in front of their equals.
    pub fn insert(&mut self, t: T) -> usize {
        let (idx, _) = binary_search_by(
            self.len(),
            SearchMode::Insertion,
            |i| self.order(self.slots.get(i), &t),
        );
        self.slots.insert(idx, t);
        idx
    }

    /// Remove and return the element at `index`.
    ///
    /// Fails with `IndexOutOfRange` if `index >= len`. The capacity is kept.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        check_access(index, self.len())?;
        Ok(self.slots.remove(index))
    }

    /// Remove one element equal to `t`, if any.
    pub fn remove_value(&mut self, t: &T) -> Option<T> {
        let idx = self.find(t)?;
        Some(self.slots.remove(idx))
    }

    /// Iterate the elements in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.slots.iter()
    }

    /// Traverse collection given a callback.
    pub fn traverse<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T),
    {
        for (i, x) in self.iter().enumerate() {
            f(i, x);
        }
    }

    #[inline]
    fn order(&self, a: &T, b: &T) -> Ordering {
        let cmp = (self.comparator)(a, b);
        if self.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    }
}

impl<T, C> OrderedArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
    T: Clone,
{
    /// Collect collection into a vector.
    pub fn collect(&self) -> Vec<T> {
        let mut data = Vec::with_capacity(self.len());
        self.traverse(|_, x| data.push(x.clone()));
        data
    }
}

impl<T> OrderedArray<T, OrdComparator<T>>
where
    T: Ord,
{
    /// Creates an `OrderedArray` using the natural order of `T`.
    pub fn from_ord(values: Vec<T>, ascending: bool) -> OrderedArray<T, OrdComparator<T>> {
        OrderedArray::from_vec(values, T::cmp as OrdComparator<T>, ascending)
    }
}

impl<T, C> Clone for OrderedArray<T, C>
where
    C: Clone + Fn(&T, &T) -> Ordering,
    T: Clone,
{
    fn clone(&self) -> Self {
        OrderedArray {
            comparator: self.comparator.clone(),
            ascending: self.ascending,
            slots: self.slots.clone(),
        }
    }
}

impl<T, C> fmt::Debug for OrderedArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(feature = "indextrait")]
impl<T, C> std::ops::Index<usize> for OrderedArray<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get_at(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    fn int_comparator(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    fn assert_sorted<C>(a: &OrderedArray<i32, C>)
    where
        C: Fn(&i32, &i32) -> Ordering,
    {
        let data = a.collect();
        for w in data.windows(2) {
            if a.is_ascending() {
                assert!(w[0] <= w[1], "not ascending: {:?}", data);
            } else {
                assert!(w[0] >= w[1], "not descending: {:?}", data);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    #[test]
    fn test_scenario_ascending() {
        let mut a = OrderedArray::from_ord(vec![5, 1, 3], true);
        assert_eq!(a.collect(), [1, 3, 5]);
        assert_eq!(a.capacity(), 6);
        assert_eq!(a.insert(4), 2);
        assert_eq!(a.collect(), [1, 3, 4, 5]);
        assert_eq!(a.find(&3), Some(1));
        assert_eq!(a.find(&9), None);
    }

    #[test]
    fn test_construction_sorts_descending() {
        let a = OrderedArray::from_vec(vec![2, 9, 4, 4, 7], int_comparator, false);
        assert_eq!(a.collect(), [9, 7, 4, 4, 2]);
        assert!(!a.is_ascending());
        assert_eq!(a.len(), 5);
        assert_eq!(a.capacity(), 10);
    }

    #[test]
    fn test_new_is_empty() {
        let mut a = OrderedArray::new(int_comparator, true);
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 1);
        assert_eq!(a.find(&1), None);
        assert_eq!(a.insert(1), 0);
        assert_eq!(a.capacity(), 1);
        assert_eq!(a.insert(0), 0);
        assert_eq!(a.capacity(), 2);
        assert_eq!(a.collect(), [0, 1]);
    }

    #[test]
    fn test_custom_comparator() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        let mut a = OrderedArray::from_vec(vec!["ccc", "a", "bb"], by_len, true);
        a.insert("dddd");
        a.insert("");
        assert_eq!(a.collect(), ["", "a", "bb", "ccc", "dddd"]);
        assert_eq!(a.find(&"xx"), Some(2));
    }

    // ------------------------------------------------------------------------
    // Insert / find / remove
    // ------------------------------------------------------------------------

    #[test]
    fn test_insert_descending() {
        let mut a = OrderedArray::from_ord(vec![], false);
        for x in [3, 8, 1, 8, 5].iter() {
            a.insert(*x);
        }
        assert_eq!(a.collect(), [8, 8, 5, 3, 1]);
        assert_eq!(a.find(&5), Some(2));
        assert_eq!(a.find(&4), None);
    }

    #[test]
    fn test_duplicates_go_in_front_of_equals() {
        // Tag elements so the position of the new duplicate is observable.
        let by_key = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);
        let mut a = OrderedArray::from_vec(vec![(1, 'a'), (2, 'a'), (2, 'b'), (3, 'a')], by_key, true);
        assert_eq!(a.insert((2, 'c')), 1);
        assert_eq!(a.collect(), [(1, 'a'), (2, 'c'), (2, 'a'), (2, 'b'), (3, 'a')]);

        let mut a = OrderedArray::from_vec(vec![(3, 'a'), (2, 'a'), (2, 'b'), (1, 'a')], by_key, false);
        assert_eq!(a.insert((2, 'c')), 1);
        assert_eq!(a.collect(), [(3, 'a'), (2, 'c'), (2, 'a'), (2, 'b'), (1, 'a')]);
    }

    #[test]
    fn test_find_with_duplicates() {
        let a = OrderedArray::from_ord(vec![1, 2, 2, 2, 2, 3], true);
        let idx = a.find(&2).unwrap();
        assert_eq!(a.get_at(idx), Ok(&2));
    }

    #[test]
    fn test_remove() {
        let mut a = OrderedArray::from_ord(vec![2, 4, 6, 8], true);
        assert_eq!(a.remove(0), Ok(2));
        assert_eq!(a.collect(), vec![4, 6, 8]);
        assert_eq!(a.remove(2), Ok(8));
        assert_eq!(a.collect(), vec![4, 6]);
        assert_eq!(a.remove(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(a.collect(), vec![4, 6]);
        assert_eq!(a.capacity(), 8);
    }

    #[test]
    fn test_remove_value() {
        let mut a = OrderedArray::from_ord(vec![2, 4, 4, 6], true);
        assert_eq!(a.remove_value(&4), Some(4));
        assert_eq!(a.collect(), vec![2, 4, 6]);
        assert_eq!(a.remove_value(&5), None);
        assert_eq!(a.collect(), vec![2, 4, 6]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = OrderedArray::from_vec(vec![3, 1, 2], int_comparator, false);
        let b = a.clone();
        a.insert(5);
        a.insert(0);
        assert_eq!(a.collect(), [5, 3, 2, 1, 0]);
        assert_eq!(b.collect(), [3, 2, 1]);
        assert_eq!(b.capacity(), 6);
        assert!(!b.is_ascending());

        let mut b = b;
        assert_eq!(b.insert(4), 0);
        assert_eq!(b.collect(), [4, 3, 2, 1]);
    }

    #[test]
    fn test_get_at_out_of_range() {
        let a = OrderedArray::from_ord(vec![1, 2], true);
        assert_eq!(a.get_at(1), Ok(&2));
        assert_eq!(a.get_at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_iter() {
        let a = OrderedArray::from_ord(vec![3, 1, 2], true);
        assert_eq!(a.iter().cloned().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(a.iter().rev().cloned().collect::<Vec<_>>(), [3, 2, 1]);
        let mut sum = 0;
        for x in &a {
            sum += x;
        }
        assert_eq!(sum, 6);
        assert_eq!(format!("{:?}", a), "[1, 2, 3]");
    }

    // ------------------------------------------------------------------------
    // Randomized
    // ------------------------------------------------------------------------

    #[test]
    fn test_random_insert_and_remove() {
        let mut rng: StdRng = SeedableRng::seed_from_u64(0);
        for &ascending in [true, false].iter() {
            for _ in 0 .. 50 {
                let initial_len = rng.gen_range(0, 11);
                let initial: Vec<i32> = (0 .. initial_len).map(|_| rng.gen_range(0, 20)).collect();
                let mut a = OrderedArray::from_ord(initial.clone(), ascending);
                let mut expected = initial;

                for _ in 0 .. 60 {
                    let capacity_before = a.capacity();
                    if rng.gen::<bool>() || expected.is_empty() {
                        let value = rng.gen_range(0, 20);
                        let idx = a.insert(value);
                        assert_eq!(a.get_at(idx), Ok(&value));
                        expected.push(value);
                        assert!(a.capacity() >= capacity_before);
                        if a.len() - 1 == capacity_before {
                            assert_eq!(a.capacity(), capacity_before * 2);
                        }
                    } else {
                        let idx = rng.gen_range(0, expected.len());
                        let removed = a.remove(idx).unwrap();
                        let pos = expected.iter().position(|x| *x == removed).unwrap();
                        expected.remove(pos);
                        assert_eq!(a.capacity(), capacity_before);
                    }

                    expected.sort();
                    if !ascending {
                        expected.reverse();
                    }
                    assert_sorted(&a);
                    assert_eq!(a.collect(), expected);
                    assert!(a.capacity() >= a.len());

                    for value in -1 .. 21 {
                        match a.find(&value) {
                            Some(idx) => assert_eq!(a.get_at(idx), Ok(&value)),
                            None => assert!(!expected.contains(&value)),
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_random_floats() {
        let mut rng: StdRng = SeedableRng::seed_from_u64(42);
        let mut a = OrderedArray::new(|a: &f64, b: &f64| a.partial_cmp(b).unwrap(), true);
        let vals: Vec<f64> = (0 .. 200).map(|_| rng.gen()).collect();
        for (i, x) in vals.iter().enumerate() {
            a.insert(*x);
            let mut expected = vals[0 .. i + 1].to_vec();
            expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
            assert_eq!(a.collect(), expected);
        }
        assert_eq!(a.capacity(), 256);
    }

    #[cfg(feature = "indextrait")]
    #[test]
    fn test_index_trait() {
        let a = OrderedArray::from_ord(vec![3, 1, 2], true);
        assert_eq!(a[0], 1);
        assert_eq!(a[2], 3);
    }
}
