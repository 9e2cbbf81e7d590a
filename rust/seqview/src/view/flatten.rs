use crate::keeper::Keeper;
use crate::sequence::Sequence;

/// Position in a [`FlattenView`].
///
/// Besides the outer position it carries the current inner sequence by value
/// together with the position inside it. `inner` is `None` only at the end.
pub struct FlattenPos<O, I: Sequence> {
    pub outer: O,
    pub inner: Option<(I, I::Pos)>,
}

impl<O: Clone, I: Sequence + Clone> Clone for FlattenPos<O, I> {
    fn clone(&self) -> Self {
        FlattenPos {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
        }
    }
}

/// Concatenation of the inner sequences of a sequence of sequences.
///
/// Empty inner sequences are skipped, so every non-end position points at an
/// element.
#[derive(Clone)]
pub struct FlattenView<'s, S> {
    source: Keeper<'s, S>,
}

impl<'s, S> FlattenView<'s, S> {
    pub fn new(source: Keeper<'s, S>) -> Self {
        FlattenView { source }
    }
}

impl<S> FlattenView<'_, S>
where
    S: Sequence,
    S::Item: Sequence + Clone,
{
    /// Moves `outer` forward to the first inner sequence that has elements
    /// and returns that sequence with its start position.
    fn descend(&self, outer: &mut S::Pos) -> Option<(S::Item, <S::Item as Sequence>::Pos)> {
        while !self.source.exhausted(outer) {
            let inner = self.source.read(outer);
            let at = inner.start();
            if !inner.exhausted(&at) {
                return Some((inner, at));
            }
            self.source.step(outer);
        }
        None
    }
}

impl<S> Sequence for FlattenView<'_, S>
where
    S: Sequence,
    S::Item: Sequence + Clone,
{
    type Item = <S::Item as Sequence>::Item;
    type Pos = FlattenPos<S::Pos, S::Item>;

    fn start(&self) -> Self::Pos {
        let mut outer = self.source.start();
        let inner = self.descend(&mut outer);
        FlattenPos { outer, inner }
    }

    fn stop(&self) -> Self::Pos {
        FlattenPos {
            outer: self.source.stop(),
            inner: None,
        }
    }

    fn step(&self, pos: &mut Self::Pos) {
        let inner_done = match pos.inner.as_mut() {
            Some((inner, at)) => {
                inner.step(at);
                inner.exhausted(at)
            }
            None => return,
        };
        if inner_done {
            self.source.step(&mut pos.outer);
            pos.inner = self.descend(&mut pos.outer);
        }
    }

    fn read(&self, pos: &Self::Pos) -> Self::Item {
        match &pos.inner {
            Some((inner, at)) => inner.read(at),
            None => panic!("read past the end of a flatten view"),
        }
    }

    fn same(&self, a: &Self::Pos, b: &Self::Pos) -> bool {
        match (&a.inner, &b.inner) {
            (None, None) => true,
            (Some((inner, at_a)), Some((_, at_b))) => {
                self.source.same(&a.outer, &b.outer) && inner.same(at_a, at_b)
            }
            _ => false,
        }
    }

    fn exhausted(&self, pos: &Self::Pos) -> bool {
        pos.inner.is_none()
    }
}

view_boilerplate!(FlattenView<'s; S>);
