use crate::keeper::Keeper;
use crate::sequence::Sequence;
use crate::tracker::Tracker;

/// Combiner used by `zip`.
pub type Pair<A, B> = fn(A, B) -> (A, B);

/// Combiner used by `zip3` on top of a pairing zip.
pub type Triple<A, B, C> = fn((A, B), C) -> (A, B, C);

pub fn pair<A, B>(a: A, b: B) -> (A, B) {
    (a, b)
}

pub fn triple<A, B, C>((a, b): (A, B), c: C) -> (A, B, C) {
    (a, b, c)
}

/// Walks two sources in lockstep and yields `f(a, b)` for each step.
///
/// Two positions compare equal as soon as either marker matches its
/// counterpart, so comparing against `stop()` ends the traversal when the
/// shorter source runs out. The longer source is never read past that point.
#[derive(Clone)]
pub struct ZipView<'s, A, B, F> {
    first: Keeper<'s, A>,
    second: Keeper<'s, B>,
    f: F,
}

impl<'s, A, B, F> ZipView<'s, A, B, F> {
    pub fn new(first: Keeper<'s, A>, second: Keeper<'s, B>, f: F) -> Self {
        ZipView { first, second, f }
    }
}

impl<A, B, F, R> Sequence for ZipView<'_, A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: Fn(A::Item, B::Item) -> R,
{
    type Item = R;
    type Pos = Tracker<A::Pos, B::Pos>;

    fn start(&self) -> Self::Pos {
        Tracker::start_of(&self.first, &self.second)
    }

    fn stop(&self) -> Self::Pos {
        Tracker::stop_of(&self.first, &self.second)
    }

    fn step(&self, pos: &mut Self::Pos) {
        pos.step_all(&self.first, &self.second);
    }

    fn read(&self, pos: &Self::Pos) -> R {
        (self.f)(self.first.read(&pos.first), self.second.read(&pos.second))
    }

    fn same(&self, a: &Self::Pos, b: &Self::Pos) -> bool {
        self.first.same(&a.first, &b.first) || self.second.same(&a.second, &b.second)
    }

    fn exhausted(&self, pos: &Self::Pos) -> bool {
        pos.first_exhausted(&self.first) || pos.second_exhausted(&self.second)
    }
}

view_boilerplate!(ZipView<'s; A, B, F>);

#[cfg(test)]
mod tests {
    use super::{Pair, ZipView, pair};
    use crate::keeper::Keeper;
    use crate::sequence::Sequence;

    #[test]
    fn test_zip_stops_at_shorter() {
        let a = vec![1, 2, 3];
        let b = vec!['x', 'y'];
        let view = ZipView::new(Keeper::Borrowed(&a), Keeper::Borrowed(&b), pair as Pair<_, _>);
        assert_eq!(view.traverse().collect::<Vec<_>>(), vec![(1, 'x'), (2, 'y')]);
        assert_eq!(view.len(), 2);

        let swapped =
            ZipView::new(Keeper::Borrowed(&b), Keeper::Borrowed(&a), pair as Pair<_, _>);
        assert_eq!(swapped.len(), 2);
    }

    #[test]
    fn test_zip_with_combiner() {
        let view = ZipView::new(
            Keeper::Owned(1..4i32),
            Keeper::Owned(vec![10, 20, 30]),
            |a: i32, b: i32| a + b,
        );
        assert_eq!(view.traverse().collect::<Vec<i32>>(), vec![11, 22, 33]);
    }

    #[test]
    fn test_zip_with_empty() {
        let empty: Vec<u8> = Vec::new();
        let view = ZipView::new(
            Keeper::Owned(0..5u8),
            Keeper::Borrowed(&empty),
            pair as Pair<_, _>,
        );
        assert!(view.is_empty());
        assert!(view.begin() == view.end());
    }

    #[test]
    fn test_any_marker_equality() {
        let a = vec![1, 2];
        let b = vec![1, 2, 3];
        let view = ZipView::new(Keeper::Borrowed(&a), Keeper::Borrowed(&b), pair as Pair<_, _>);
        let mut pos = view.start();
        view.step(&mut pos);
        view.step(&mut pos);
        assert_eq!(pos.second, 2);
        assert!(view.same(&pos, &view.stop()));

        // Only the marker with elements left moves past the end.
        view.step(&mut pos);
        assert_eq!(pos.first, 2);
        assert_eq!(pos.second, 3);
        assert!(view.same(&pos, &view.stop()));
    }
}
