//! The `Sequence` capability and its implementations for standard collections.
//!
//! A [`Sequence`] is anything that can be traversed repeatedly from a start
//! position to a stop position. Positions are plain values (`Self::Pos`) that
//! do not borrow the sequence; every operation that needs the underlying data
//! receives the sequence by reference. This keeps cursors cheap to clone and
//! lets adaptors store nested positions (and even whole inner sequences)
//! without self-references.
//!
//! Elements are produced by value through [`Sequence::read`]. Standard
//! collections clone the stored element; adaptors compute theirs on demand.
//!
//! # Contract
//!
//! - `start()` and `stop()` may be called any number of times and always
//!   describe the same traversal.
//! - `step()` on a position that is already exhausted leaves it unchanged.
//! - `read()` must not be called on an exhausted position; implementations
//!   panic when they can detect it.
//! - `same()` is the equality used to compare a traversal position against
//!   `stop()`. Adaptors are free to define it with a policy of their own (see
//!   the zip and concatenate views).

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::ops::{Bound, Range, RangeInclusive};

use crate::cursor::{Cursor, Iter};

/// Element type yielded by a sequence.
pub type ItemOf<S> = <S as Sequence>::Item;

/// Repeatable forward traversal over positions.
pub trait Sequence: Sized {
    /// The value produced when reading a position.
    type Item;

    /// A traversal position. Positions never borrow the sequence.
    type Pos: Clone;

    /// Position of the first element (equal to `stop()` when empty).
    fn start(&self) -> Self::Pos;

    /// The past-the-end position.
    fn stop(&self) -> Self::Pos;

    /// Moves `pos` to the next element. No-op when `pos` is exhausted.
    fn step(&self, pos: &mut Self::Pos);

    /// Reads the element at `pos`.
    fn read(&self, pos: &Self::Pos) -> Self::Item;

    /// Position equality.
    fn same(&self, a: &Self::Pos, b: &Self::Pos) -> bool;

    /// Returns `true` when `pos` has reached the end of the sequence.
    ///
    /// The default compares against `stop()`; implementations override it
    /// when the check can be made without building the stop position.
    fn exhausted(&self, pos: &Self::Pos) -> bool {
        self.same(pos, &self.stop())
    }

    /// Returns a cursor at the first element.
    fn begin(&self) -> Cursor<'_, Self> {
        Cursor::new(self, self.start())
    }

    /// Returns the end-marker cursor. It is meant for comparisons only.
    fn end(&self) -> Cursor<'_, Self> {
        Cursor::new(self, self.stop())
    }

    /// Walks the sequence from `begin()` to `end()` as a standard iterator.
    fn traverse(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    /// Number of elements. The default walks the whole sequence, so it never
    /// returns for infinite sequences.
    fn len(&self) -> usize {
        let mut pos = self.start();
        let mut count = 0;
        while !self.exhausted(&pos) {
            self.step(&mut pos);
            count += 1;
        }
        count
    }

    fn is_empty(&self) -> bool {
        self.exhausted(&self.start())
    }
}

macro_rules! impl_indexed_sequence {
    ($($ty:ident),*) => {
        $(
            impl<T: Clone> Sequence for $ty<T> {
                type Item = T;
                type Pos = usize;

                #[inline]
                fn start(&self) -> usize {
                    0
                }

                #[inline]
                fn stop(&self) -> usize {
                    $ty::len(self)
                }

                #[inline]
                fn step(&self, pos: &mut usize) {
                    if *pos < $ty::len(self) {
                        *pos += 1;
                    }
                }

                #[inline]
                fn read(&self, pos: &usize) -> T {
                    self[*pos].clone()
                }

                #[inline]
                fn same(&self, a: &usize, b: &usize) -> bool {
                    a == b
                }

                #[inline]
                fn exhausted(&self, pos: &usize) -> bool {
                    *pos >= $ty::len(self)
                }

                fn len(&self) -> usize {
                    $ty::len(self)
                }
            }
        )*
    };
}

impl_indexed_sequence!(Vec, VecDeque);

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Pos = usize;

    #[inline]
    fn start(&self) -> usize {
        0
    }

    #[inline]
    fn stop(&self) -> usize {
        N
    }

    #[inline]
    fn step(&self, pos: &mut usize) {
        if *pos < N {
            *pos += 1;
        }
    }

    #[inline]
    fn read(&self, pos: &usize) -> T {
        self[*pos].clone()
    }

    #[inline]
    fn same(&self, a: &usize, b: &usize) -> bool {
        a == b
    }

    #[inline]
    fn exhausted(&self, pos: &usize) -> bool {
        *pos >= N
    }

    fn len(&self) -> usize {
        N
    }
}

/// Slices are sequences through their shared reference, indexed like `Vec`.
/// `len` is called through `<[T]>` because `self` is `&&[T]` here.
impl<T: Clone> Sequence for &[T] {
    type Item = T;
    type Pos = usize;

    #[inline]
    fn start(&self) -> usize {
        0
    }

    #[inline]
    fn stop(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn step(&self, pos: &mut usize) {
        if *pos < <[T]>::len(self) {
            *pos += 1;
        }
    }

    #[inline]
    fn read(&self, pos: &usize) -> T {
        (*self)[*pos].clone()
    }

    #[inline]
    fn same(&self, a: &usize, b: &usize) -> bool {
        a == b
    }

    #[inline]
    fn exhausted(&self, pos: &usize) -> bool {
        *pos >= <[T]>::len(self)
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

/// Ordered sets are traversed by key; the position is the current key.
impl<T: Ord + Clone> Sequence for BTreeSet<T> {
    type Item = T;
    type Pos = Option<T>;

    fn start(&self) -> Option<T> {
        self.first().cloned()
    }

    fn stop(&self) -> Option<T> {
        None
    }

    fn step(&self, pos: &mut Option<T>) {
        if let Some(current) = pos.take() {
            *pos = self
                .range::<T, _>((Bound::Excluded(&current), Bound::Unbounded))
                .next()
                .cloned();
        }
    }

    fn read(&self, pos: &Option<T>) -> T {
        match pos {
            Some(value) => value.clone(),
            None => panic!("read past the end of a BTreeSet sequence"),
        }
    }

    fn same(&self, a: &Option<T>, b: &Option<T>) -> bool {
        a == b
    }

    fn exhausted(&self, pos: &Option<T>) -> bool {
        pos.is_none()
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

/// Ordered maps yield `(key, value)` pairs; the position is the current key.
impl<K: Ord + Clone, V: Clone> Sequence for BTreeMap<K, V> {
    type Item = (K, V);
    type Pos = Option<K>;

    fn start(&self) -> Option<K> {
        self.keys().next().cloned()
    }

    fn stop(&self) -> Option<K> {
        None
    }

    fn step(&self, pos: &mut Option<K>) {
        if let Some(current) = pos.take() {
            *pos = self
                .range::<K, _>((Bound::Excluded(&current), Bound::Unbounded))
                .next()
                .map(|(k, _)| k.clone());
        }
    }

    fn read(&self, pos: &Option<K>) -> (K, V) {
        match pos.as_ref().and_then(|key| self.get_key_value(key)) {
            Some((k, v)) => (k.clone(), v.clone()),
            None => panic!("read past the end of a BTreeMap sequence"),
        }
    }

    fn same(&self, a: &Option<K>, b: &Option<K>) -> bool {
        a == b
    }

    fn exhausted(&self, pos: &Option<K>) -> bool {
        pos.is_none()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

macro_rules! impl_integer_range_sequence {
    ($($t:ty),*) => {
        $(
            /// Half-open integer ranges; a reversed range is empty.
            impl Sequence for Range<$t> {
                type Item = $t;
                type Pos = $t;

                #[inline]
                fn start(&self) -> $t {
                    self.start
                }

                #[inline]
                fn stop(&self) -> $t {
                    self.end.max(self.start)
                }

                #[inline]
                fn step(&self, pos: &mut $t) {
                    if *pos < self.end {
                        *pos += 1;
                    }
                }

                #[inline]
                fn read(&self, pos: &$t) -> $t {
                    *pos
                }

                #[inline]
                fn same(&self, a: &$t, b: &$t) -> bool {
                    a == b
                }

                #[inline]
                fn exhausted(&self, pos: &$t) -> bool {
                    *pos >= self.end
                }

                fn len(&self) -> usize {
                    let span = self.end.max(self.start) as i128 - self.start as i128;
                    usize::try_from(span).unwrap_or(usize::MAX)
                }
            }

            /// Closed integer ranges. The position is `None` once the last
            /// value has been passed, so ranges ending at `MAX` do not overflow.
            /// `len` saturates at `usize::MAX` for spans wider than `usize`.
            impl Sequence for RangeInclusive<$t> {
                type Item = $t;
                type Pos = Option<$t>;

                #[inline]
                fn start(&self) -> Option<$t> {
                    if self.start() <= self.end() {
                        Some(*self.start())
                    } else {
                        None
                    }
                }

                #[inline]
                fn stop(&self) -> Option<$t> {
                    None
                }

                #[inline]
                fn step(&self, pos: &mut Option<$t>) {
                    *pos = match *pos {
                        Some(value) if value < *self.end() => Some(value + 1),
                        _ => None,
                    };
                }

                #[inline]
                fn read(&self, pos: &Option<$t>) -> $t {
                    match pos {
                        Some(value) => *value,
                        None => panic!("read past the end of an inclusive range"),
                    }
                }

                #[inline]
                fn same(&self, a: &Option<$t>, b: &Option<$t>) -> bool {
                    a == b
                }

                #[inline]
                fn exhausted(&self, pos: &Option<$t>) -> bool {
                    pos.is_none()
                }

                fn len(&self) -> usize {
                    if self.start() <= self.end() {
                        let span = *self.end() as i128 - *self.start() as i128 + 1;
                        usize::try_from(span).unwrap_or(usize::MAX)
                    } else {
                        0
                    }
                }
            }
        )*
    };
}

impl_integer_range_sequence!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
