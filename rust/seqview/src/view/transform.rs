use crate::keeper::Keeper;
use crate::sequence::Sequence;

/// Yields `f(element)` for each element of the source.
///
/// `f` runs on every read of a position, including repeated reads of the same
/// cursor. Nothing is cached.
#[derive(Clone)]
pub struct TransformView<'s, S, F> {
    source: Keeper<'s, S>,
    f: F,
}

impl<'s, S, F> TransformView<'s, S, F> {
    pub fn new(source: Keeper<'s, S>, f: F) -> Self {
        TransformView { source, f }
    }

    pub fn source(&self) -> &Keeper<'s, S> {
        &self.source
    }
}

impl<S, F, R> Sequence for TransformView<'_, S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R,
{
    type Item = R;
    type Pos = S::Pos;

    #[inline]
    fn start(&self) -> S::Pos {
        self.source.start()
    }

    #[inline]
    fn stop(&self) -> S::Pos {
        self.source.stop()
    }

    #[inline]
    fn step(&self, pos: &mut S::Pos) {
        self.source.step(pos)
    }

    #[inline]
    fn read(&self, pos: &S::Pos) -> R {
        (self.f)(self.source.read(pos))
    }

    #[inline]
    fn same(&self, a: &S::Pos, b: &S::Pos) -> bool {
        self.source.same(a, b)
    }

    #[inline]
    fn exhausted(&self, pos: &S::Pos) -> bool {
        self.source.exhausted(pos)
    }

    fn len(&self) -> usize {
        self.source.len()
    }
}

view_boilerplate!(TransformView<'s; S, F>);
