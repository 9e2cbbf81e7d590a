use crate::keeper::Keeper;
use crate::sequence::Sequence;

/// Yields the source elements that satisfy a predicate.
///
/// `start()` skips leading rejected elements, and every `step()` moves to the
/// next accepted element (or the end). During a step the predicate runs once
/// per visited source element.
#[derive(Clone)]
pub struct FilterView<'s, S, P> {
    source: Keeper<'s, S>,
    pred: P,
}

impl<'s, S, P> FilterView<'s, S, P> {
    pub fn new(source: Keeper<'s, S>, pred: P) -> Self {
        FilterView { source, pred }
    }

    pub fn source(&self) -> &Keeper<'s, S> {
        &self.source
    }
}

impl<S, P> FilterView<'_, S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    fn skip_rejected(&self, pos: &mut S::Pos) {
        while !self.source.exhausted(pos) && !(self.pred)(&self.source.read(pos)) {
            self.source.step(pos);
        }
    }
}

impl<S, P> Sequence for FilterView<'_, S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Pos = S::Pos;

    fn start(&self) -> S::Pos {
        let mut pos = self.source.start();
        self.skip_rejected(&mut pos);
        pos
    }

    #[inline]
    fn stop(&self) -> S::Pos {
        self.source.stop()
    }

    fn step(&self, pos: &mut S::Pos) {
        if self.source.exhausted(pos) {
            return;
        }
        self.source.step(pos);
        self.skip_rejected(pos);
    }

    #[inline]
    fn read(&self, pos: &S::Pos) -> S::Item {
        self.source.read(pos)
    }

    #[inline]
    fn same(&self, a: &S::Pos, b: &S::Pos) -> bool {
        self.source.same(a, b)
    }

    #[inline]
    fn exhausted(&self, pos: &S::Pos) -> bool {
        self.source.exhausted(pos)
    }
}

view_boilerplate!(FilterView<'s; S, P>);
