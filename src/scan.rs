//! The sliding-window scan.
//!
//! A single forward pass moves `right` over every index. Before the element
//! at `right` is admitted, members are evicted from the left edge until the
//! element is no longer in the window. Both edges only move forward, so the
//! scan does at most `2n` set updates for an input of length `n`.
//!
//! ```
//! use distinct_window::scan;
//!
//! assert_eq!(scan::longest_unique_len(&[1, 2, 1, 3, 4, 3]), 4);
//! assert_eq!(scan::longest_unique_len::<u8>(&[]), 0);
//! ```

use alloc::collections::BTreeSet;

use crate::Window;
use crate::seen::LinearSet;
use crate::seen::Seen;

/// Finds the earliest longest run of pairwise-distinct elements in `items`,
/// tracking window members with `seen`.
///
/// `seen` is cleared before the scan starts, so a set can be reused across
/// calls.
pub fn longest_unique_window_with<'a, T, S>(
  items: &'a [T],
  mut seen: S,
) -> Window
where
  S: Seen<&'a T>,
{
  seen.clear();
  let mut left = 0;
  let mut best = Window::default();

  for (right, item) in items.iter().enumerate() {
    while seen.contains(&item) {
      seen.remove(&&items[left]);
      left += 1;
    }
    debug_assert_eq!(seen.len(), right - left);
    seen.insert(item);

    let len = right + 1 - left;
    if len > best.len {
      best = Window::new(left, len);
      #[cfg(feature = "tracing")]
      tracing::trace!(start = best.start, len = best.len, "window grew");
    }
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(input_len = items.len(), window = %best, "scan finished");
  best
}

/// Finds the earliest longest run of pairwise-distinct elements, using an
/// ordered set.
///
/// ```
/// use distinct_window::Window;
/// use distinct_window::scan::longest_unique_window;
///
/// assert_eq!(longest_unique_window(b"pwwkew"), Window::new(2, 3));
/// ```
pub fn longest_unique_window<T: Ord>(items: &[T]) -> Window {
  longest_unique_window_with(items, BTreeSet::new())
}

/// Length of the longest run of pairwise-distinct elements in `items`.
#[inline]
pub fn longest_unique_len<T: Ord>(items: &[T]) -> usize {
  longest_unique_window(items).len
}

/// Like [`longest_unique_window`], for elements that are neither ordered nor
/// hashable.
///
/// Membership checks are linear in the window size.
///
/// ```
/// use distinct_window::scan::longest_unique_window_eq;
///
/// #[derive(PartialEq, Eq)]
/// enum Suit {
///   Clubs,
///   Hearts,
///   Spades,
/// }
///
/// let hand = [Suit::Clubs, Suit::Hearts, Suit::Clubs, Suit::Spades];
/// assert_eq!(longest_unique_window_eq(&hand).len, 3);
/// ```
pub fn longest_unique_window_eq<T: Eq>(items: &[T]) -> Window {
  longest_unique_window_with(items, LinearSet::new())
}

/// Like [`longest_unique_window`], using a hash set.
#[cfg(feature = "std")]
pub fn longest_unique_window_hashed<T>(items: &[T]) -> Window
where
  T: core::hash::Hash + Eq,
{
  longest_unique_window_with(items, std::collections::HashSet::new())
}
