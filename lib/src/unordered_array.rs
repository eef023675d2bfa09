use std::fmt;

use crate::error::{check_access, check_insert, Result};
use crate::slots::{Iter, Slots};

/// A growable array which keeps its elements in insertion order.
///
/// The capacity starts at `max(2 * len, 1)` for the initial elements and
/// doubles whenever an insertion finds all slots occupied. It never shrinks.
pub struct UnorderedArray<T> {
    slots: Slots<T>,
}

impl<T> UnorderedArray<T> {
    /// Creates an empty `UnorderedArray` with a capacity of one.
    pub fn new() -> UnorderedArray<T> {
        UnorderedArray::from_vec(Vec::new())
    }

    /// Creates an `UnorderedArray` holding `values` in the given order.
    pub fn from_vec(values: Vec<T>) -> UnorderedArray<T> {
        UnorderedArray {
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

    /// Access the element at `index`.
    ///
    /// Fails with `IndexOutOfRange` if `index >= len`.
    pub fn get_at(&self, index: usize) -> Result<&T> {
        check_access(index, self.len())?;
        Ok(self.slots.get(index))
    }

    /// Overwrite the element at `index`. Never triggers a resize.
    ///
    /// Fails with `IndexOutOfRange` if `index >= len`.
    pub fn set_at(&mut self, index: usize, value: T) -> Result<()> {
        check_access(index, self.len())?;
        *self.slots.get_mut(index) = value;
        Ok(())
    }

    /// Insert a value at `index`, shifting all following elements to the right.
    ///
    /// `index == len` appends. Fails with `IndexOutOfRange` if `index > len`.
    /// Amortized O(1) when appending, O(n) otherwise.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        check_insert(index, self.len())?;
        self.slots.insert(index, value);
        Ok(())
    }

    /// Append a value.
    pub fn push(&mut self, value: T) {
        let len = self.len();
        self.slots.insert(len, value);
    }

    /// Remove and return the element at `index`, shifting all following
    /// elements to the left.
    ///
    /// Fails with `IndexOutOfRange` if `index >= len`. The capacity is kept.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        check_access(index, self.len())?;
        Ok(self.slots.remove(index))
    }

    /// Iterate the elements in storage order.
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
}

impl<T> UnorderedArray<T>
where
    T: PartialEq,
{
    /// Linear search for `value`.
    ///
    /// Returns the index of the first (leftmost) equal element, or `None`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|x| x == value)
    }
}

impl<T> UnorderedArray<T>
where
    T: Clone,
{
    /// Collect collection into a vector.
    pub fn collect(&self) -> Vec<T> {
        let mut data = Vec::with_capacity(self.len());
        self.traverse(|_, x| data.push(x.clone()));
        data
    }
}

impl<T> Default for UnorderedArray<T> {
    fn default() -> Self {
        UnorderedArray::new()
    }
}

impl<T: Clone> Clone for UnorderedArray<T> {
    fn clone(&self) -> Self {
        UnorderedArray {
            slots: self.slots.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for UnorderedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> From<Vec<T>> for UnorderedArray<T> {
    fn from(values: Vec<T>) -> Self {
        UnorderedArray::from_vec(values)
    }
}

impl<T> std::iter::FromIterator<T> for UnorderedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        UnorderedArray::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a UnorderedArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(feature = "indextrait")]
impl<T> std::ops::Index<usize> for UnorderedArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get_at(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

#[cfg(feature = "indextrait")]
impl<T> std::ops::IndexMut<usize> for UnorderedArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        if let Err(err) = check_access(index, self.len()) {
            panic!("{}", err);
        }
        self.slots.get_mut(index)
    }
}
