use std::cmp::Ordering;

/// Sorts `data` ascending by repeated passes of adjacent swaps.
///
/// Returns the number of passes performed. An already sorted input is
/// detected by the first pass and reports `1`. The sort is stable.
///
/// O(n^2) worst case, O(n) for sorted input.
pub fn bubble_sort<T>(data: &mut [T]) -> usize
where
    T: PartialOrd,
{
    bubble_sort_by(data, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
}

/// Like `bubble_sort`, with an explicit comparator.
pub fn bubble_sort_by<T, F>(data: &mut [T], mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() < 2 {
        return 0;
    }

    // Everything behind `unsorted_upto` already holds its final value.
    let mut unsorted_upto = data.len() - 1;
    let mut num_passes = 0;

    loop {
        let mut swapped = false;
        num_passes += 1;

        for i in 0 .. unsorted_upto {
            if compare(&data[i], &data[i + 1]) == Ordering::Greater {
                data.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped || unsorted_upto == 1 {
            break;
        }
        unsorted_upto -= 1;
    }

    num_passes
}
