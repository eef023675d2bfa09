//!
//! This crate provides two growable arrays with explicit capacity management:
//!
//! - [`UnorderedArray`](./struct.UnorderedArray.html) keeps elements in insertion order.
//! - [`OrderedArray`](./struct.OrderedArray.html) keeps elements sorted, ascending or descending.
//!
//! Both start with a capacity of `max(2 * len, 1)` and double it whenever an
//! insertion finds all slots occupied, which keeps appends amortized O(1).
//! Index based operations report [`Error::IndexOutOfRange`](./enum.Error.html)
//! instead of panicking.
//!
//! A standalone [`bubble_sort`](./fn.bubble_sort.html) is included as well.
//!
//! # Example
//!
//! ```
//! use growable_arrays::{OrderedArray, UnorderedArray};
//!
//! let mut unordered = UnorderedArray::from_vec(vec![3, 1, 2]);
//! assert_eq!(unordered.capacity(), 6);
//!
//! unordered.insert(1, 9).unwrap();
//! unordered.remove(0).unwrap();
//! assert_eq!(unordered.collect(), vec![9, 1, 2]);
//! assert!(unordered.get_at(3).is_err());
//!
//! fn comparator(a: &i32, b: &i32) -> std::cmp::Ordering {
//!     a.cmp(b)
//! }
//!
//! let mut ordered = OrderedArray::from_vec(vec![5, 1, 3], comparator, true);
//!
//! ordered.insert(4);
//!
//! assert_eq!(ordered.collect(), vec![1, 3, 4, 5]);
//! assert_eq!(ordered.find(&3), Some(1));
//! assert_eq!(ordered.find(&9), None);
//! ```
//!

mod bubble_sort;
mod error;
mod ordered_array;
mod search;
mod slots;
mod unordered_array;

pub use crate::bubble_sort::{bubble_sort, bubble_sort_by};
pub use crate::error::{Error, Result};
pub use crate::ordered_array::{OrdComparator, OrderedArray};
pub use crate::slots::Iter;
pub use crate::unordered_array::UnorderedArray;
