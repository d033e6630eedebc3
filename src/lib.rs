//! # distinct_window
//!
//! ### Longest runs of distinct elements
//!
//! This crate answers one question about a sequence: how long is the longest
//! contiguous run in which no element repeats? For strings this is the
//! classic "longest substring without repeating characters" problem.
//!
//! Every entry point is built on the same single-pass sliding window found
//! in [`scan`], which runs in linear time and keeps at most one copy of each
//! distinct element in its working set.
//!
//! ---
//!
//! ## Strings
//!
//! ```rust
//! use distinct_window::length_of_longest_substring;
//!
//! assert_eq!(length_of_longest_substring("abcabcbb"), 3);
//! assert_eq!(length_of_longest_substring("bbbbb"), 1);
//! assert_eq!(length_of_longest_substring("pwwkew"), 3);
//! assert_eq!(length_of_longest_substring(""), 0);
//! ```
//!
//! Strings are scanned by `char` unless a [`Granularity`] says otherwise.
//! [`length_of_longest_substring_bytes`] scans raw bytes instead.
//!
//! ## Slices
//!
//! Any slice can be scanned. The result is a [`Window`] locating the
//! earliest longest run:
//!
//! ```rust
//! use distinct_window::Window;
//! use distinct_window::longest_unique_window;
//!
//! let readings = [3, 1, 4, 1, 5, 9, 2, 6, 5];
//! let window = longest_unique_window(&readings);
//! assert_eq!(window, Window::new(2, 6));
//! assert_eq!(window.slice(&readings), Some(&[4, 1, 5, 9, 2, 6][..]));
//! ```
//!
//! The set used to track the window is pluggable through [`seen::Seen`].
//!
//! ---
//!
//! ## `no_std` Support
//!
//! The library only needs `alloc`. Without the `std` feature it builds in
//! `no_std` mode.
//!
//! ---
//!
//! ## Features
//!
//! - `std`: Links the standard library and enables the `HashSet` backend.
//! - `serde`†: Serialization support for [`Window`] and [`Granularity`].
//! - `is_variant`†: `is_*` predicates on [`Granularity`].
//! - `constructors`†: Derived constructor for [`Window`].
//! - `tracing`: Emits `tracing` events from the scan.
//! - `cli`: Builds the `distinct-window` demonstration binary
//!   (`cargo run --features cli`).
//!
//! > † enabled by default

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;
extern crate core;

pub mod granularity;
pub mod scan;
pub mod seen;
pub mod window;

pub use granularity::*;
#[cfg(feature = "std")]
pub use scan::longest_unique_window_hashed;
pub use scan::longest_unique_len;
pub use scan::longest_unique_window;
pub use scan::longest_unique_window_eq;
pub use scan::longest_unique_window_with;
pub use window::*;

use crate::seen::ByteSet;

/// Length of the longest substring of `s` without repeating characters.
///
/// Characters are Unicode scalar values. The result is at most
/// `s.chars().count()` and is `0` only for the empty string.
///
/// ```rust
/// use distinct_window::length_of_longest_substring;
///
/// assert_eq!(length_of_longest_substring("dvdf"), 3);
/// assert_eq!(length_of_longest_substring("日本日本語"), 3);
/// ```
#[inline]
pub fn length_of_longest_substring(s: &str) -> usize {
  Granularity::Chars.longest_unique_len(s)
}

/// Length of the longest run of `bytes` without a repeated byte.
///
/// ```rust
/// use distinct_window::length_of_longest_substring_bytes;
///
/// assert_eq!(length_of_longest_substring_bytes(b"aab"), 2);
/// ```
#[inline]
pub fn length_of_longest_substring_bytes(bytes: &[u8]) -> usize {
  longest_unique_window_with(bytes, ByteSet::new()).len
}

/// The earliest longest substring of `s` without repeating characters.
///
/// ```rust
/// use distinct_window::longest_unique_substr;
///
/// assert_eq!(longest_unique_substr("pwwkew"), "wke");
/// assert_eq!(longest_unique_substr("ünïcödé ü"), "ünïcödé ");
/// assert_eq!(longest_unique_substr(""), "");
/// ```
pub fn longest_unique_substr(s: &str) -> &str {
  let window = Granularity::Chars.longest_unique_window(s);
  if window.is_empty() {
    return "";
  }
  let mut offsets = s
    .char_indices()
    .map(|(offset, _)| offset)
    .chain(core::iter::once(s.len()));
  let start = offsets.nth(window.start).unwrap_or(s.len());
  let end = offsets.nth(window.len - 1).unwrap_or(s.len());
  &s[start..end]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn demo_cases() {
    let cases = [
      ("abcabcbb", 3),
      ("bbbbb", 1),
      ("pwwkew", 3),
      ("aab", 2),
      ("", 0),
    ];
    for (input, expected) in cases {
      assert_eq!(length_of_longest_substring(input), expected, "{input}");
      assert_eq!(
        length_of_longest_substring_bytes(input.as_bytes()),
        expected,
        "{input}"
      );
    }
  }

  #[test]
  fn dvdf_evicts_one() {
    assert_eq!(length_of_longest_substring("dvdf"), 3);
    assert_eq!(longest_unique_substr("dvdf"), "vdf");
  }

  #[test]
  fn substr_follows_char_boundaries() {
    assert_eq!(longest_unique_substr("日本日本語"), "日本語");
    assert_eq!(longest_unique_substr("aé"), "aé");
    assert_eq!(longest_unique_substr("bbbbb"), "b");
    assert_eq!(longest_unique_substr("abcabcbb"), "abc");
  }

  #[test]
  fn bytes_outside_utf8() {
    let bytes = [0xff, 0x00, 0xff, 0x80];
    assert_eq!(length_of_longest_substring_bytes(&bytes), 3);
    let all: Vec<u8> = (0..=u8::MAX).collect();
    assert_eq!(length_of_longest_substring_bytes(&all), 256);
  }

  #[test]
  fn repeated_calls_agree() {
    let s = "the quick brown fox jumps over the lazy dog";
    assert_eq!(
      length_of_longest_substring(s),
      length_of_longest_substring(s)
    );
  }
}
