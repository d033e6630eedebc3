//! Membership sets used to track the contents of a sliding window.
//!
//! The scan in [`crate::scan`] only needs four operations from its set:
//! membership, insertion, removal, and a size query. [`Seen`] captures that
//! surface so the same scan can run over any alphabet, trading bounds on the
//! element type against lookup cost:
//!
//! | Backend              | Element bound     | Lookup        | Availability |
//! |----------------------|-------------------|---------------|--------------|
//! | [`BTreeSet`]         | `Ord`             | `O(log k)`    | always       |
//! | `HashSet`            | `Hash + Eq`       | `O(1)` avg.   | `std`        |
//! | [`LinearSet`]        | `Eq`              | `O(k)`        | always       |
//! | [`ByteSet`]          | `u8`              | `O(1)`        | always       |
//!
//! ## Examples
//!
//! ```
//! use distinct_window::seen::ByteSet;
//!
//! let mut set = ByteSet::new();
//! assert!(set.insert(b'a'));
//! assert!(!set.insert(b'a'));
//! assert!(set.contains(b'a'));
//! assert_eq!(set.len(), 1);
//! ```

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

/// A set of window members.
///
/// `insert` and `remove` report whether the set changed, mirroring the
/// collections in `alloc` and `std`.
pub trait Seen<K> {
  /// Returns `true` if `key` is currently in the set.
  fn contains(&self, key: &K) -> bool;

  /// Adds `key`, returning `false` if it was already present.
  fn insert(&mut self, key: K) -> bool;

  /// Removes `key`, returning `true` if it was present.
  fn remove(&mut self, key: &K) -> bool;

  /// Number of members.
  fn len(&self) -> usize;

  /// Returns `true` if the set has no members.
  #[inline]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Removes every member.
  fn clear(&mut self);
}

impl<K: Ord> Seen<K> for BTreeSet<K> {
  #[inline]
  fn contains(&self, key: &K) -> bool {
    BTreeSet::contains(self, key)
  }

  #[inline]
  fn insert(&mut self, key: K) -> bool {
    BTreeSet::insert(self, key)
  }

  #[inline]
  fn remove(&mut self, key: &K) -> bool {
    BTreeSet::remove(self, key)
  }

  #[inline]
  fn len(&self) -> usize {
    BTreeSet::len(self)
  }

  #[inline]
  fn clear(&mut self) {
    BTreeSet::clear(self)
  }
}

#[cfg(feature = "std")]
impl<K, S> Seen<K> for std::collections::HashSet<K, S>
where
  K: core::hash::Hash + Eq,
  S: core::hash::BuildHasher,
{
  #[inline]
  fn contains(&self, key: &K) -> bool {
    std::collections::HashSet::contains(self, key)
  }

  #[inline]
  fn insert(&mut self, key: K) -> bool {
    std::collections::HashSet::insert(self, key)
  }

  #[inline]
  fn remove(&mut self, key: &K) -> bool {
    std::collections::HashSet::remove(self, key)
  }

  #[inline]
  fn len(&self) -> usize {
    std::collections::HashSet::len(self)
  }

  #[inline]
  fn clear(&mut self) {
    std::collections::HashSet::clear(self)
  }
}

/// A set that only requires `Eq` from its members.
///
/// Members are kept in insertion order, so a window that evicts from the
/// left removes from the front of the backing vector. Lookups are linear in
/// the number of members, which makes this the backend of last resort for
/// alphabets that can be neither hashed nor ordered.
///
/// ```
/// use distinct_window::seen::{LinearSet, Seen};
///
/// #[derive(PartialEq, Eq)]
/// struct Token(&'static str);
///
/// let mut set = LinearSet::new();
/// set.insert(Token("let"));
/// set.insert(Token("mut"));
/// assert!(set.contains(&Token("mut")));
/// assert!(set.remove(&Token("let")));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSet<K> {
  members: Vec<K>,
}

impl<K> LinearSet<K> {
  /// Creates an empty set.
  pub const fn new() -> Self {
    Self {
      members: Vec::new(),
    }
  }

  /// Creates an empty set with room for `capacity` members.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      members: Vec::with_capacity(capacity),
    }
  }

  /// Members in insertion order.
  #[inline]
  pub fn as_slice(&self) -> &[K] {
    &self.members
  }
}

impl<K> Default for LinearSet<K> {
  #[inline(always)]
  fn default() -> Self {
    Self::new()
  }
}

impl<K: Eq> Seen<K> for LinearSet<K> {
  #[inline]
  fn contains(&self, key: &K) -> bool {
    self.members.iter().any(|member| member == key)
  }

  fn insert(&mut self, key: K) -> bool {
    if self.contains(&key) {
      return false;
    }
    self.members.push(key);
    true
  }

  fn remove(&mut self, key: &K) -> bool {
    match self.members.iter().position(|member| member == key) {
      Some(index) => {
        self.members.remove(index);
        true
      }
      None => false,
    }
  }

  #[inline]
  fn len(&self) -> usize {
    self.members.len()
  }

  #[inline]
  fn clear(&mut self) {
    self.members.clear()
  }
}

/// Number of 64-bit words needed to hold one bit per byte value.
const BYTE_SET_WORDS: usize = 256 / 64;

/// A fixed-size set of bytes, stored as a 256-bit table on the stack.
///
/// This is the backend used for byte-granular scans: every operation is a
/// shift and a mask, and the whole set is 32 bytes plus a counter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteSet {
  bits: [u64; BYTE_SET_WORDS],
  len:  u16,
}

impl ByteSet {
  /// Creates an empty set.
  pub const fn new() -> Self {
    Self {
      bits: [0; BYTE_SET_WORDS],
      len:  0,
    }
  }

  #[inline(always)]
  const fn slot(byte: u8) -> (usize, u64) {
    ((byte >> 6) as usize, 1 << (byte & 63))
  }

  /// Returns `true` if `byte` is in the set.
  #[inline]
  pub const fn contains(&self, byte: u8) -> bool {
    let (word, mask) = Self::slot(byte);
    self.bits[word] & mask != 0
  }

  /// Adds `byte`, returning `false` if it was already present.
  #[inline]
  pub const fn insert(&mut self, byte: u8) -> bool {
    let (word, mask) = Self::slot(byte);
    if self.bits[word] & mask != 0 {
      return false;
    }
    self.bits[word] |= mask;
    self.len += 1;
    true
  }

  /// Removes `byte`, returning `true` if it was present.
  #[inline]
  pub const fn remove(&mut self, byte: u8) -> bool {
    let (word, mask) = Self::slot(byte);
    if self.bits[word] & mask == 0 {
      return false;
    }
    self.bits[word] &= !mask;
    self.len -= 1;
    true
  }

  /// Number of members.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len as usize
  }

  /// Returns whether the set is empty.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Removes every member.
  #[inline]
  pub const fn clear(&mut self) {
    *self = Self::new();
  }

  /// Iterates over the members in ascending order.
  pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
    (0..=u8::MAX).filter(move |&byte| self.contains(byte))
  }
}

impl fmt::Debug for ByteSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}

impl Seen<u8> for ByteSet {
  #[inline]
  fn contains(&self, key: &u8) -> bool {
    ByteSet::contains(self, *key)
  }

  #[inline]
  fn insert(&mut self, key: u8) -> bool {
    ByteSet::insert(self, key)
  }

  #[inline]
  fn remove(&mut self, key: &u8) -> bool {
    ByteSet::remove(self, *key)
  }

  #[inline]
  fn len(&self) -> usize {
    ByteSet::len(self)
  }

  #[inline]
  fn clear(&mut self) {
    ByteSet::clear(self)
  }
}

// The scan borrows its input, so it hands out `&u8` keys.
impl<'a> Seen<&'a u8> for ByteSet {
  #[inline]
  fn contains(&self, key: &&'a u8) -> bool {
    ByteSet::contains(self, **key)
  }

  #[inline]
  fn insert(&mut self, key: &'a u8) -> bool {
    ByteSet::insert(self, *key)
  }

  #[inline]
  fn remove(&mut self, key: &&'a u8) -> bool {
    ByteSet::remove(self, **key)
  }

  #[inline]
  fn len(&self) -> usize {
    ByteSet::len(self)
  }

  #[inline]
  fn clear(&mut self) {
    ByteSet::clear(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn exercise<S: Seen<u32>>(mut set: S) {
    assert!(set.is_empty());
    assert!(set.insert(3));
    assert!(set.insert(7));
    assert!(!set.insert(3));
    assert_eq!(set.len(), 2);
    assert!(set.contains(&7));
    assert!(!set.contains(&8));
    assert!(set.remove(&3));
    assert!(!set.remove(&3));
    assert_eq!(set.len(), 1);
    set.clear();
    assert!(set.is_empty());
    assert!(!set.contains(&7));
  }

  #[test]
  fn btree_backend() {
    exercise(BTreeSet::new());
  }

  #[test]
  #[cfg(feature = "std")]
  fn hash_backend() {
    exercise(std::collections::HashSet::new());
  }

  #[test]
  fn linear_backend() {
    exercise(LinearSet::new());
    exercise(LinearSet::with_capacity(4));
  }

  #[test]
  fn linear_set_keeps_insertion_order() {
    let mut set = LinearSet::new();
    for c in ['c', 'a', 'b'] {
      set.insert(c);
    }
    set.remove(&'c');
    assert_eq!(set.as_slice(), &['a', 'b']);
  }

  #[test]
  fn byte_set_covers_every_byte() {
    let mut set = ByteSet::new();
    for byte in 0..=u8::MAX {
      assert!(set.insert(byte));
    }
    assert_eq!(set.len(), 256);
    assert!(set.contains(0));
    assert!(set.contains(255));
    for byte in 0..=u8::MAX {
      assert!(set.remove(byte));
    }
    assert!(set.is_empty());
  }

  #[test]
  fn byte_set_inherent_calls_need_no_annotations() {
    let mut set = ByteSet::new();
    assert!(set.insert(b'a'));
    assert!(!set.insert(b'a'));
    assert!(set.contains(b'a'));
    assert_eq!(set.len(), 1);
    assert!(!set.is_empty());
    set.clear();
    assert!(set.is_empty());
  }

  #[test]
  fn byte_set_backends_share_state() {
    let mut set = ByteSet::new();
    assert!(Seen::<u8>::insert(&mut set, b'q'));
    assert!(set.contains(b'q'));
    assert!(!Seen::<&u8>::insert(&mut set, &b'q'));
    assert_eq!(Seen::<u8>::len(&set), set.len());
    assert!(Seen::<&u8>::remove(&mut set, &&b'q'));
    assert!(!Seen::<u8>::contains(&set, &b'q'));
  }

  #[test]
  fn byte_set_word_boundaries() {
    let mut set = ByteSet::new();
    for byte in [63u8, 64, 127, 128] {
      set.insert(byte);
    }
    assert!(!set.contains(62));
    assert!(!set.contains(65));
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![63, 64, 127, 128]);
  }

  #[test]
  fn byte_set_by_reference() {
    let bytes = b"xyz";
    let mut set = ByteSet::new();
    assert!(Seen::<&u8>::insert(&mut set, &bytes[0]));
    assert!(Seen::<&u8>::contains(&set, &&bytes[0]));
    assert!(!Seen::<&u8>::contains(&set, &&bytes[1]));
    Seen::<&u8>::clear(&mut set);
    assert_eq!(set, ByteSet::new());
  }

  #[test]
  fn byte_set_debug_lists_members() {
    let mut set = ByteSet::new();
    set.insert(2);
    set.insert(1);
    assert_eq!(format!("{set:?}"), "{1, 2}");
  }
}
