use seqview_common::{Result, verify_precondition};

use crate::keeper::Keeper;
use crate::sequence::Sequence;

/// Position in a [`SliceView`]: the source position and its distance from the
/// source start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlicePos<P> {
    pub inner: P,
    pub offset: usize,
}

/// The half-open index window `[from, until)` of the source.
///
/// Both bounds are clamped to the source length, so a window that reaches past
/// the end is shortened and one that starts past the end is empty. The length
/// is never computed up front; the view walks the source instead, so infinite
/// sources are fine.
#[derive(Clone)]
pub struct SliceView<'s, S> {
    source: Keeper<'s, S>,
    from: usize,
    until: usize,
}

impl<'s, S> SliceView<'s, S> {
    /// Creates the view, rejecting `from > until`.
    pub fn new(source: Keeper<'s, S>, from: usize, until: usize) -> Result<Self> {
        verify_precondition!("slice", from <= until)
            .inspect_err(|err| log::debug!("{err} (from {from}, until {until})"))?;
        Ok(SliceView { source, from, until })
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.from, self.until)
    }
}

impl<S: Sequence> SliceView<'_, S> {
    fn skip_to(&self, bound: usize) -> SlicePos<S::Pos> {
        let mut pos = SlicePos {
            inner: self.source.start(),
            offset: 0,
        };
        while pos.offset < bound && !self.source.exhausted(&pos.inner) {
            self.source.step(&mut pos.inner);
            pos.offset += 1;
        }
        pos
    }
}

impl<S: Sequence> Sequence for SliceView<'_, S> {
    type Item = S::Item;
    type Pos = SlicePos<S::Pos>;

    fn start(&self) -> Self::Pos {
        self.skip_to(self.from)
    }

    fn stop(&self) -> Self::Pos {
        self.skip_to(self.until)
    }

    fn step(&self, pos: &mut Self::Pos) {
        if !self.exhausted(pos) {
            self.source.step(&mut pos.inner);
            pos.offset += 1;
        }
    }

    #[inline]
    fn read(&self, pos: &Self::Pos) -> S::Item {
        self.source.read(&pos.inner)
    }

    #[inline]
    fn same(&self, a: &Self::Pos, b: &Self::Pos) -> bool {
        self.source.same(&a.inner, &b.inner)
    }

    #[inline]
    fn exhausted(&self, pos: &Self::Pos) -> bool {
        pos.offset >= self.until || self.source.exhausted(&pos.inner)
    }
}

view_boilerplate!(SliceView<'s; S>);
