use crate::sequence::Sequence;

/// Position in an [`Iterate`] sequence. `value` is `None` only at the stop
/// position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IteratePos<T> {
    pub index: usize,
    pub value: Option<T>,
}

/// The infinite sequence `seed, f(seed), f(f(seed)), ...`.
///
/// Each position stores the value it reads, so `f` runs once per step and
/// never on a read. The stop position is never reached by stepping: bound the
/// sequence with `take`, `take_while` or `zip` before consuming it, and do not
/// call `len` on it directly.
#[derive(Clone)]
pub struct Iterate<T, F> {
    seed: T,
    f: F,
}

impl<T, F> Iterate<T, F> {
    pub fn new(seed: T, f: F) -> Self {
        Iterate { seed, f }
    }
}

impl<T, F> Sequence for Iterate<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;
    type Pos = IteratePos<T>;

    fn start(&self) -> IteratePos<T> {
        IteratePos {
            index: 0,
            value: Some(self.seed.clone()),
        }
    }

    fn stop(&self) -> IteratePos<T> {
        IteratePos {
            index: usize::MAX,
            value: None,
        }
    }

    fn step(&self, pos: &mut IteratePos<T>) {
        if let Some(current) = pos.value.as_ref() {
            let next = (self.f)(current);
            pos.value = Some(next);
            pos.index += 1;
        }
    }

    fn read(&self, pos: &IteratePos<T>) -> T {
        match &pos.value {
            Some(value) => value.clone(),
            None => panic!("read at the stop position of an iterate sequence"),
        }
    }

    fn same(&self, a: &IteratePos<T>, b: &IteratePos<T>) -> bool {
        a.index == b.index
    }

    fn exhausted(&self, pos: &IteratePos<T>) -> bool {
        pos.value.is_none()
    }
}

view_boilerplate!(Iterate<; T, F>);
