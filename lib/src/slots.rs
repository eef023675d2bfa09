use std::iter;
use std::slice;

// Backing storage shared by both arrays: `capacity` slots, of which the first
// `len` are occupied.
pub(crate) struct Slots<T> {
    data: Vec<Option<T>>,
    len: usize,
}

impl<T> Slots<T> {
    /// Takes ownership of the initial elements and reserves `max(2 * len, 1)` slots.
    pub fn from_vec(values: Vec<T>) -> Slots<T> {
        let len = values.len();
        let capacity = (len * 2).max(1);
        let mut data = Vec::with_capacity(capacity);
        data.extend(values.into_iter().map(Some));
        data.extend(iter::repeat_with(|| None).take(capacity - len));
        Slots { data, len }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Callers are responsible for the bounds check.
    #[inline]
    pub fn get(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        match &self.data[index] {
            Some(value) => value,
            None => unreachable!("slot {} below len {} is empty", index, self.len),
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        match &mut self.data[index] {
            Some(value) => value,
            None => unreachable!("slot {} below len {} is empty", index, self.len),
        }
    }

    /// Places `value` at `index` (`index <= len`), shifting the tail one slot
    /// to the right. Doubles the capacity first if all slots are occupied.
    pub fn insert(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);
        if self.len == self.capacity() {
            self.resize(self.capacity() * 2);
        }

        // Highest index first, so nothing gets overwritten.
        for i in (index + 1 ..= self.len).rev() {
            self.data[i] = self.data[i - 1].take();
        }

        self.data[index] = Some(value);
        self.len += 1;
    }

    /// Takes the value at `index` (`index < len`), shifting the tail one slot
    /// to the left. The capacity is never reduced.
    pub fn remove(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);
        let removed = self.data[index].take();

        for i in index .. self.len - 1 {
            self.data[i] = self.data[i + 1].take();
        }

        // The former last slot has been emptied by the final `take`.
        debug_assert!(self.data[self.len - 1].is_none());
        self.len -= 1;

        match removed {
            Some(value) => value,
            None => unreachable!("slot {} below len {} is empty", index, self.len + 1),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.data[.. self.len].iter(),
        }
    }

    fn resize(&mut self, new_capacity: usize) {
        log::trace!("Growing capacity: {} -> {}", self.capacity(), new_capacity);
        debug_assert!(new_capacity >= self.len);

        let mut new_data = Vec::with_capacity(new_capacity);
        new_data.extend(self.data[.. self.len].iter_mut().map(Option::take));
        new_data.extend(iter::repeat_with(|| None).take(new_capacity - self.len));

        self.data = new_data;
    }
}

impl<T: Clone> Clone for Slots<T> {
    fn clone(&self) -> Self {
        Slots {
            data: self.data.clone(),
            len: self.len,
        }
    }
}

/// Iterator over the valid elements of an array, in storage order.
///
/// Obtained from `UnorderedArray::iter` or `OrderedArray::iter`. Each call to
/// `iter` starts a fresh traversal.
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().and_then(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn occupied(slots: &Slots<i32>) -> Vec<i32> {
        slots.iter().cloned().collect()
    }

    #[test]
    fn test_from_vec_capacity() {
        assert_eq!(Slots::<i32>::from_vec(vec![]).capacity(), 1);
        assert_eq!(Slots::from_vec(vec![1]).capacity(), 2);
        assert_eq!(Slots::from_vec(vec![1, 2, 3]).capacity(), 6);
    }

    #[test]
    fn test_insert_shifts_right() {
        let mut slots = Slots::from_vec(vec![1, 2, 3]);
        slots.insert(0, 0);
        assert_eq!(occupied(&slots), [0, 1, 2, 3]);
        slots.insert(2, 9);
        assert_eq!(occupied(&slots), [0, 1, 9, 2, 3]);
        slots.insert(5, 7);
        assert_eq!(occupied(&slots), [0, 1, 9, 2, 3, 7]);
        assert_eq!(slots.capacity(), 6);
    }

    #[test]
    fn test_insert_doubles_when_full() {
        let mut slots = Slots::from_vec(vec![]);
        let mut capacities = vec![slots.capacity()];
        for x in 0 .. 9 {
            slots.insert(slots.len(), x);
            capacities.push(slots.capacity());
        }
        assert_eq!(capacities, [1, 1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(occupied(&slots), (0 .. 9).collect::<Vec<_>>());
    }

    #[test]
    fn test_remove_clears_last_slot() {
        let mut slots = Slots::from_vec(vec![1, 2, 3]);
        assert_eq!(slots.remove(0), 1);
        assert_eq!(occupied(&slots), [2, 3]);
        assert!(slots.data[2].is_none());
        assert_eq!(slots.remove(1), 3);
        assert_eq!(slots.remove(0), 2);
        assert_eq!(slots.len(), 0);
        assert_eq!(slots.capacity(), 6);
        assert!(slots.data.iter().all(Option::is_none));
    }

    #[test]
    fn test_iter_is_restartable() {
        let slots = Slots::from_vec(vec![4, 5, 6]);
        let iter = slots.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.clone().rev().cloned().collect::<Vec<_>>(), [6, 5, 4]);
        assert_eq!(iter.cloned().collect::<Vec<_>>(), [4, 5, 6]);
        assert_eq!(occupied(&slots), [4, 5, 6]);
    }
}
