use crate::keeper::Keeper;
use crate::sequence::Sequence;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnumeratePos<P> {
    pub inner: P,
    pub index: usize,
}

/// Pairs every element with its zero-based index.
#[derive(Clone)]
pub struct EnumerateView<'s, S> {
    source: Keeper<'s, S>,
}

impl<'s, S> EnumerateView<'s, S> {
    pub fn new(source: Keeper<'s, S>) -> Self {
        EnumerateView { source }
    }
}

impl<S: Sequence> Sequence for EnumerateView<'_, S> {
    type Item = (usize, S::Item);
    type Pos = EnumeratePos<S::Pos>;

    fn start(&self) -> Self::Pos {
        EnumeratePos {
            inner: self.source.start(),
            index: 0,
        }
    }

    /// The index of the stop position is meaningless; only `inner` is compared.
    fn stop(&self) -> Self::Pos {
        EnumeratePos {
            inner: self.source.stop(),
            index: 0,
        }
    }

    fn step(&self, pos: &mut Self::Pos) {
        if !self.source.exhausted(&pos.inner) {
            self.source.step(&mut pos.inner);
            pos.index += 1;
        }
    }

    fn read(&self, pos: &Self::Pos) -> Self::Item {
        (pos.index, self.source.read(&pos.inner))
    }

    #[inline]
    fn same(&self, a: &Self::Pos, b: &Self::Pos) -> bool {
        self.source.same(&a.inner, &b.inner)
    }

    #[inline]
    fn exhausted(&self, pos: &Self::Pos) -> bool {
        self.source.exhausted(&pos.inner)
    }

    fn len(&self) -> usize {
        self.source.len()
    }
}

view_boilerplate!(EnumerateView<'s; S>);
