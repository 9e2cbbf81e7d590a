use crate::keeper::Keeper;
use crate::sequence::Sequence;

/// Position in a [`TakeView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TakePos<P> {
    pub inner: P,
    /// Elements still allowed; zero once the view has ended.
    pub remaining: usize,
}

/// The first `n` elements of the source, or all of them when there are fewer.
///
/// The length of the source is never computed, so `take` is the usual way to
/// bound an infinite source.
#[derive(Clone)]
pub struct TakeView<'s, S> {
    source: Keeper<'s, S>,
    n: usize,
}

impl<'s, S> TakeView<'s, S> {
    pub fn new(source: Keeper<'s, S>, n: usize) -> Self {
        TakeView { source, n }
    }

    pub fn limit(&self) -> usize {
        self.n
    }
}

impl<S: Sequence> Sequence for TakeView<'_, S> {
    type Item = S::Item;
    type Pos = TakePos<S::Pos>;

    fn start(&self) -> Self::Pos {
        let inner = self.source.start();
        let remaining = if self.source.exhausted(&inner) { 0 } else { self.n };
        TakePos { inner, remaining }
    }

    fn stop(&self) -> Self::Pos {
        TakePos {
            inner: self.source.stop(),
            remaining: 0,
        }
    }

    fn step(&self, pos: &mut Self::Pos) {
        if pos.remaining == 0 {
            return;
        }
        self.source.step(&mut pos.inner);
        pos.remaining -= 1;
        if self.source.exhausted(&pos.inner) {
            pos.remaining = 0;
        }
    }

    #[inline]
    fn read(&self, pos: &Self::Pos) -> S::Item {
        self.source.read(&pos.inner)
    }

    fn same(&self, a: &Self::Pos, b: &Self::Pos) -> bool {
        match (a.remaining == 0, b.remaining == 0) {
            (true, true) => true,
            (false, false) => self.source.same(&a.inner, &b.inner),
            _ => false,
        }
    }

    #[inline]
    fn exhausted(&self, pos: &Self::Pos) -> bool {
        pos.remaining == 0
    }
}

view_boilerplate!(TakeView<'s; S>);
