//! The [`Window`] value type reported by every scan.

use core::fmt;
use core::fmt::Display;
use core::fmt::Formatter;
use core::ops::Range;

/// A half-open range `[start, start + len)` over the scanned sequence.
///
/// Indices count elements of the sequence that was scanned: `char`s for
/// character-granular string scans, bytes for byte-granular ones, and slice
/// positions otherwise.
///
/// # Example
///
/// ```rust
/// use distinct_window::Window;
///
/// let window = distinct_window::longest_unique_window(b"abcabcbb");
/// assert_eq!(window.start, 0);
/// assert_eq!(window.len, 3);
/// assert_eq!(window.range(), 0..3);
/// assert_eq!(window.to_string(), "0..3");
/// assert_eq!(window.slice(b"abcabcbb"), Some(&b"abc"[..]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "constructors", derive(derive_more::Constructor))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
  /// Index of the first element.
  pub start: usize,
  /// Number of elements.
  pub len:   usize,
}

impl Window {
  /// Creates a new `Window`.
  #[cfg(not(feature = "constructors"))]
  pub const fn new(start: usize, len: usize) -> Self {
    Self { start, len }
  }

  /// Index one past the last element.
  #[inline]
  pub const fn end(&self) -> usize {
    self.start + self.len
  }

  /// Returns whether the window covers no elements.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// The window as an index range.
  #[inline]
  pub const fn range(&self) -> Range<usize> {
    self.start..self.end()
  }

  /// Borrows the covered elements of `items`, or `None` when the window
  /// does not fit inside `items`.
  #[inline]
  pub fn slice<'a, T>(&self, items: &'a [T]) -> Option<&'a [T]> {
    items.get(self.range())
  }
}

impl Display for Window {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}..{}", self.start, self.end())
  }
}

impl From<Window> for Range<usize> {
  #[inline(always)]
  fn from(window: Window) -> Self {
    window.range()
  }
}
