//! The unit a string is split into before it is scanned.

use alloc::vec::Vec;

use crate::Window;
use crate::scan;
use crate::seen::ByteSet;

/// How a `&str` is divided into elements.
///
/// Scanning by [`Chars`](Granularity::Chars) treats every Unicode scalar
/// value as one element, so multi-byte characters are never split. Scanning
/// by [`Bytes`](Granularity::Bytes) treats each UTF-8 code unit as one
/// element, which matches classic byte-string implementations exactly and
/// may count a multi-byte character as several elements.
///
/// # Example
///
/// ```rust
/// use distinct_window::Granularity;
///
/// // "é" is two bytes that share a lead byte with "è"
/// let s = "éè";
/// assert_eq!(Granularity::Chars.longest_unique_len(s), 2);
/// assert_eq!(Granularity::Bytes.longest_unique_len(s), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "is_variant", derive(derive_more::IsVariant))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Granularity {
  /// One element per `char`.
  #[default]
  Chars,
  /// One element per byte.
  Bytes,
}

impl Granularity {
  /// Number of elements `s` splits into.
  pub fn unit_count(self, s: &str) -> usize {
    match self {
      Self::Chars => s.chars().count(),
      Self::Bytes => s.len(),
    }
  }

  /// Earliest longest run of distinct elements in `s`. Indices in the
  /// returned window count elements of this granularity.
  pub fn longest_unique_window(self, s: &str) -> Window {
    match self {
      Self::Chars => {
        let chars: Vec<char> = s.chars().collect();
        scan::longest_unique_window(&chars)
      }
      Self::Bytes => {
        scan::longest_unique_window_with(s.as_bytes(), ByteSet::new())
      }
    }
  }

  /// Length of the longest run of distinct elements in `s`.
  #[inline]
  pub fn longest_unique_len(self, s: &str) -> usize {
    self.longest_unique_window(s).len
  }
}
