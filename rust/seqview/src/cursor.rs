//! Cursors over a [`Sequence`] and the bridge to `std::iter::Iterator`.
//!
//! A [`Cursor`] pairs a position with a reference back to the sequence that
//! produced it, which gives it the classic dereference / advance / compare
//! protocol. Because the reference is a borrow of the view, a cursor can never
//! outlive the view (or the keeper inside it) that created it.

use std::fmt;
use std::iter::FusedIterator;

use crate::sequence::Sequence;

/// A position bound to the sequence it belongs to.
pub struct Cursor<'a, S: Sequence> {
    seq: &'a S,
    pos: S::Pos,
}

impl<'a, S: Sequence> Cursor<'a, S> {
    pub fn new(seq: &'a S, pos: S::Pos) -> Self {
        Cursor { seq, pos }
    }

    /// Reads the element under the cursor.
    ///
    /// Every call reads through the whole adaptor chain again; nothing is
    /// memoized.
    ///
    /// # Panics
    ///
    /// May panic when called on an end cursor.
    #[inline]
    pub fn get(&self) -> S::Item {
        self.seq.read(&self.pos)
    }

    /// Moves to the next element. Advancing an end cursor is a no-op.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.seq.step(&mut self.pos);
        self
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.seq.exhausted(&self.pos)
    }

    pub fn position(&self) -> &S::Pos {
        &self.pos
    }
}

impl<S: Sequence> Clone for Cursor<'_, S> {
    fn clone(&self) -> Self {
        Cursor {
            seq: self.seq,
            pos: self.pos.clone(),
        }
    }
}

impl<S: Sequence> PartialEq for Cursor<'_, S> {
    /// Compares positions with the owning sequence's equality policy.
    ///
    /// Both cursors must come from the same sequence.
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            std::ptr::eq(self.seq, other.seq),
            "comparing cursors of different sequences"
        );
        self.seq.same(&self.pos, &other.pos)
    }
}

impl<S> fmt::Debug for Cursor<'_, S>
where
    S: Sequence,
    S::Pos: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("pos", &self.pos).finish()
    }
}

/// Iterator walking a sequence from a front cursor up to an end cursor.
///
/// Before each read the front position is compared with the end position,
/// so an exhausted position is never read.
pub struct Iter<'a, S: Sequence> {
    seq: &'a S,
    front: S::Pos,
    back: S::Pos,
}

impl<'a, S: Sequence> Iter<'a, S> {
    /// Iterates over the whole sequence.
    pub fn new(seq: &'a S) -> Self {
        Iter {
            seq,
            front: seq.start(),
            back: seq.stop(),
        }
    }

    /// Iterates over `[begin, end)`.
    pub fn between(begin: Cursor<'a, S>, end: Cursor<'a, S>) -> Self {
        debug_assert!(std::ptr::eq(begin.seq, end.seq));
        Iter {
            seq: begin.seq,
            front: begin.pos,
            back: end.pos,
        }
    }

    /// Returns a cursor at the next element to be yielded.
    pub fn cursor(&self) -> Cursor<'a, S> {
        Cursor::new(self.seq, self.front.clone())
    }
}

impl<S: Sequence> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Iter {
            seq: self.seq,
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<S: Sequence> Iterator for Iter<'_, S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.seq.same(&self.front, &self.back) {
            return None;
        }
        let item = self.seq.read(&self.front);
        self.seq.step(&mut self.front);
        Some(item)
    }
}

impl<S: Sequence> FusedIterator for Iter<'_, S> {}
