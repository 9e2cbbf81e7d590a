use crate::keeper::Keeper;
use crate::sequence::Sequence;

/// The source without its first `n` elements.
#[derive(Clone)]
pub struct SkipView<'s, S> {
    source: Keeper<'s, S>,
    n: usize,
}

impl<'s, S> SkipView<'s, S> {
    pub fn new(source: Keeper<'s, S>, n: usize) -> Self {
        SkipView { source, n }
    }
}

impl<S: Sequence> Sequence for SkipView<'_, S> {
    type Item = S::Item;
    type Pos = S::Pos;

    fn start(&self) -> S::Pos {
        let mut pos = self.source.start();
        for _ in 0..self.n {
            if self.source.exhausted(&pos) {
                break;
            }
            self.source.step(&mut pos);
        }
        pos
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

view_boilerplate!(SkipView<'s; S>);
