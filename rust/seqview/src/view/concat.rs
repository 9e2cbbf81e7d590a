use crate::keeper::Keeper;
use crate::sequence::Sequence;
use crate::tracker::Tracker;

/// The elements of `first` followed by the elements of `second`.
///
/// The position is a [`Tracker`] over both sources. Reads and steps go to the
/// first source until it is exhausted, then to the second.
#[derive(Clone)]
pub struct ConcatView<'s, A, B> {
    first: Keeper<'s, A>,
    second: Keeper<'s, B>,
}

impl<'s, A, B> ConcatView<'s, A, B> {
    pub fn new(first: Keeper<'s, A>, second: Keeper<'s, B>) -> Self {
        ConcatView { first, second }
    }

    pub fn first(&self) -> &Keeper<'s, A> {
        &self.first
    }

    pub fn second(&self) -> &Keeper<'s, B> {
        &self.second
    }
}

impl<A, B> Sequence for ConcatView<'_, A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Pos = Tracker<A::Pos, B::Pos>;

    fn start(&self) -> Self::Pos {
        Tracker::start_of(&self.first, &self.second)
    }

    fn stop(&self) -> Self::Pos {
        Tracker::stop_of(&self.first, &self.second)
    }

    fn step(&self, pos: &mut Self::Pos) {
        if pos.first_exhausted(&self.first) {
            pos.step_second(&self.second);
        } else {
            pos.step_first(&self.first);
        }
    }

    fn read(&self, pos: &Self::Pos) -> A::Item {
        if pos.first_exhausted(&self.first) {
            self.second.read(&pos.second)
        } else {
            self.first.read(&pos.first)
        }
    }

    fn same(&self, a: &Self::Pos, b: &Self::Pos) -> bool {
        match (a.first_exhausted(&self.first), b.first_exhausted(&self.first)) {
            (false, false) => self.first.same(&a.first, &b.first),
            (true, true) => {
                match (a.second_exhausted(&self.second), b.second_exhausted(&self.second)) {
                    (false, false) => self.second.same(&a.second, &b.second),
                    (true, true) => true,
                    _ => false,
                }
            }
            _ => false,
        }
    }

    fn exhausted(&self, pos: &Self::Pos) -> bool {
        pos.first_exhausted(&self.first) && pos.second_exhausted(&self.second)
    }

    fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }
}

view_boilerplate!(ConcatView<'s; A, B>);
