//! Position bundles for adaptors that walk two sequences at once.
//!
//! A [`Tracker`] holds one position marker per source sequence. Markers are
//! moved individually (`step_first`, `step_second`) or in lockstep
//! (`step_all`); moving one never touches the other. The tracker does not
//! store references to its sources: queries that need a source's end take the
//! source as an argument, so the same tracker value can sit inside a cursor
//! that is cloned and compared freely.
//!
//! How two trackers compare is decided by the adaptor that owns them (see the
//! concatenate and zip views); the derived `PartialEq` compares raw markers.

use crate::sequence::Sequence;

/// Two position markers, one per source sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tracker<P, Q> {
    pub first: P,
    pub second: Q,
}

impl<P, Q> Tracker<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        Tracker { first, second }
    }

    /// Markers at the start of both sources.
    pub fn start_of<A, B>(a: &A, b: &B) -> Self
    where
        A: Sequence<Pos = P>,
        B: Sequence<Pos = Q>,
    {
        Tracker::new(a.start(), b.start())
    }

    /// Markers at the stop position of both sources.
    pub fn stop_of<A, B>(a: &A, b: &B) -> Self
    where
        A: Sequence<Pos = P>,
        B: Sequence<Pos = Q>,
    {
        Tracker::new(a.stop(), b.stop())
    }

    #[inline]
    pub fn step_first<A: Sequence<Pos = P>>(&mut self, a: &A) {
        a.step(&mut self.first);
    }

    #[inline]
    pub fn step_second<B: Sequence<Pos = Q>>(&mut self, b: &B) {
        b.step(&mut self.second);
    }

    /// Moves both markers one step, regardless of whether either is exhausted.
    #[inline]
    pub fn step_all<A, B>(&mut self, a: &A, b: &B)
    where
        A: Sequence<Pos = P>,
        B: Sequence<Pos = Q>,
    {
        a.step(&mut self.first);
        b.step(&mut self.second);
    }

    #[inline]
    pub fn first_exhausted<A: Sequence<Pos = P>>(&self, a: &A) -> bool {
        a.exhausted(&self.first)
    }

    #[inline]
    pub fn second_exhausted<B: Sequence<Pos = Q>>(&self, b: &B) -> bool {
        b.exhausted(&self.second)
    }
}
