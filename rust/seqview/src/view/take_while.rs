use crate::keeper::Keeper;
use crate::sequence::Sequence;

/// The longest prefix of the source whose elements satisfy a predicate.
///
/// The predicate is checked once when the traversal starts and once after
/// every step. The first failure moves the position straight to the source's
/// stop position.
#[derive(Clone)]
pub struct TakeWhileView<'s, S, P> {
    source: Keeper<'s, S>,
    pred: P,
}

impl<'s, S, P> TakeWhileView<'s, S, P> {
    pub fn new(source: Keeper<'s, S>, pred: P) -> Self {
        TakeWhileView { source, pred }
    }
}

impl<S, P> TakeWhileView<'_, S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    fn check(&self, pos: &mut S::Pos) {
        if !self.source.exhausted(pos) && !(self.pred)(&self.source.read(pos)) {
            *pos = self.source.stop();
        }
    }
}

impl<S, P> Sequence for TakeWhileView<'_, S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Pos = S::Pos;

    fn start(&self) -> S::Pos {
        let mut pos = self.source.start();
        self.check(&mut pos);
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
        self.check(pos);
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

view_boilerplate!(TakeWhileView<'s; S, P>);
