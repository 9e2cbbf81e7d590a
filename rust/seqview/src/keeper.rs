//! Ownership of the sequence a view wraps.
//!
//! Every view stores its source in a [`Keeper`], which holds it in exactly one
//! of three forms:
//!
//! - [`Keeper::Owned`]: the source was passed by value (a temporary, or a
//!   binding the caller gave up). The keeper owns it and the caller's binding
//!   is moved-from.
//! - [`Keeper::Borrowed`]: the source was passed as `&S`. No copy is made; the
//!   view's lifetime is tied to the borrow, so the compiler rejects any attempt
//!   to mutate or drop the source while the view is alive.
//! - [`Keeper::Shared`]: the source was passed as `Arc<S>`. The keeper holds
//!   one strong reference and releases it when dropped.
//!
//! The form is chosen by [`IntoKeeper`] from the argument's type alone, once,
//! when the view is constructed. Slices are the one reference type captured
//! by value: `&[T]` is itself the sequence, so the keeper owns the reference.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::ops::{Range, RangeInclusive};
use std::sync::Arc;

use crate::sequence::Sequence;

/// Static ownership category of a keeper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ownership {
    Owning,
    Borrowing,
    Sharing,
}

/// Holds a sequence as owned, borrowed, or shared.
#[derive(Debug)]
pub enum Keeper<'s, S> {
    Owned(S),
    Borrowed(&'s S),
    Shared(Arc<S>),
}

impl<'s, S> Keeper<'s, S> {
    /// Returns the kept sequence.
    #[inline]
    pub fn get(&self) -> &S {
        match self {
            Keeper::Owned(seq) => seq,
            Keeper::Borrowed(seq) => seq,
            Keeper::Shared(seq) => seq,
        }
    }

    pub fn ownership(&self) -> Ownership {
        match self {
            Keeper::Owned(_) => Ownership::Owning,
            Keeper::Borrowed(_) => Ownership::Borrowing,
            Keeper::Shared(_) => Ownership::Sharing,
        }
    }
}

impl<S: Clone> Clone for Keeper<'_, S> {
    /// Owned sequences are deep-cloned, borrowed ones are re-borrowed and
    /// shared ones get another strong reference.
    fn clone(&self) -> Self {
        match self {
            Keeper::Owned(seq) => Keeper::Owned(seq.clone()),
            Keeper::Borrowed(seq) => Keeper::Borrowed(*seq),
            Keeper::Shared(seq) => Keeper::Shared(Arc::clone(seq)),
        }
    }
}

impl<S: Sequence> Sequence for Keeper<'_, S> {
    type Item = S::Item;
    type Pos = S::Pos;

    #[inline]
    fn start(&self) -> S::Pos {
        self.get().start()
    }

    #[inline]
    fn stop(&self) -> S::Pos {
        self.get().stop()
    }

    #[inline]
    fn step(&self, pos: &mut S::Pos) {
        self.get().step(pos)
    }

    #[inline]
    fn read(&self, pos: &S::Pos) -> S::Item {
        self.get().read(pos)
    }

    #[inline]
    fn same(&self, a: &S::Pos, b: &S::Pos) -> bool {
        self.get().same(a, b)
    }

    #[inline]
    fn exhausted(&self, pos: &S::Pos) -> bool {
        self.get().exhausted(pos)
    }

    fn len(&self) -> usize {
        self.get().len()
    }

    fn is_empty(&self) -> bool {
        self.get().is_empty()
    }
}

/// Classifies how a view entry point captures its argument.
///
/// Implemented for `&S` (borrowing), `Arc<S>` (sharing), and for every
/// concrete sequence type passed by value (owning): the standard collections
/// covered by [`Sequence`] and all view types of this crate. Custom sequence
/// types opt into by-value capture with [`owned_sequence!`](crate::owned_sequence).
pub trait IntoKeeper<'s> {
    type Seq: Sequence + 's;

    const OWNERSHIP: Ownership;

    fn into_keeper(self) -> Keeper<'s, Self::Seq>;
}

impl<'s, S: Sequence + 's> IntoKeeper<'s> for &'s S {
    type Seq = S;

    const OWNERSHIP: Ownership = Ownership::Borrowing;

    #[inline]
    fn into_keeper(self) -> Keeper<'s, S> {
        Keeper::Borrowed(self)
    }
}

impl<'s, S: Sequence + 's> IntoKeeper<'s> for Arc<S> {
    type Seq = S;

    const OWNERSHIP: Ownership = Ownership::Sharing;

    #[inline]
    fn into_keeper(self) -> Keeper<'s, S> {
        Keeper::Shared(self)
    }
}

/// Lets a sequence type be captured by value by the view entry points.
///
/// ```
/// use seqview::{owned_sequence, Sequence};
///
/// struct Countdown(u32);
///
/// impl Sequence for Countdown {
///     type Item = u32;
///     type Pos = u32;
///
///     fn start(&self) -> u32 { self.0 }
///     fn stop(&self) -> u32 { 0 }
///     fn step(&self, pos: &mut u32) { *pos = pos.saturating_sub(1) }
///     fn read(&self, pos: &u32) -> u32 { *pos }
///     fn same(&self, a: &u32, b: &u32) -> bool { a == b }
/// }
///
/// owned_sequence!(Countdown);
///
/// let doubled: Vec<u32> = seqview::collect(seqview::transform(Countdown(3), |n| n * 2));
/// assert_eq!(doubled, vec![6, 4, 2]);
/// ```
#[macro_export]
macro_rules! owned_sequence {
    ($ty:ty) => {
        impl<'s> $crate::keeper::IntoKeeper<'s> for $ty
        where
            $ty: $crate::sequence::Sequence + 's,
        {
            type Seq = $ty;

            const OWNERSHIP: $crate::keeper::Ownership = $crate::keeper::Ownership::Owning;

            #[inline]
            fn into_keeper(self) -> $crate::keeper::Keeper<'s, $ty> {
                $crate::keeper::Keeper::Owned(self)
            }
        }
    };
}

macro_rules! impl_owned_collection {
    ($($ty:ident),*) => {
        $(
            impl<'s, T: Clone + 's> IntoKeeper<'s> for $ty<T>
            where
                $ty<T>: Sequence,
            {
                type Seq = $ty<T>;

                const OWNERSHIP: Ownership = Ownership::Owning;

                #[inline]
                fn into_keeper(self) -> Keeper<'s, $ty<T>> {
                    Keeper::Owned(self)
                }
            }
        )*
    };
}

impl_owned_collection!(Vec, VecDeque, BTreeSet);

impl<'s, T: Clone + 's, const N: usize> IntoKeeper<'s> for [T; N] {
    type Seq = [T; N];

    const OWNERSHIP: Ownership = Ownership::Owning;

    #[inline]
    fn into_keeper(self) -> Keeper<'s, [T; N]> {
        Keeper::Owned(self)
    }
}

/// A slice reference is moved into the keeper as is, so the view stays bound
/// to the lifetime of the slice without copying its elements.
impl<'s, 'a: 's, T: Clone + 'a> IntoKeeper<'s> for &'a [T] {
    type Seq = &'a [T];

    const OWNERSHIP: Ownership = Ownership::Owning;

    #[inline]
    fn into_keeper(self) -> Keeper<'s, &'a [T]> {
        Keeper::Owned(self)
    }
}

impl<'s, K: Ord + Clone + 's, V: Clone + 's> IntoKeeper<'s> for BTreeMap<K, V> {
    type Seq = BTreeMap<K, V>;

    const OWNERSHIP: Ownership = Ownership::Owning;

    #[inline]
    fn into_keeper(self) -> Keeper<'s, BTreeMap<K, V>> {
        Keeper::Owned(self)
    }
}

macro_rules! impl_owned_range {
    ($($t:ty),*) => {
        $(
            owned_sequence!(Range<$t>);
            owned_sequence!(RangeInclusive<$t>);
        )*
    };
}

impl_owned_range!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{IntoKeeper, Keeper, Ownership};
    use crate::sequence::Sequence;

    fn category<'s, K: IntoKeeper<'s>>(_: &K) -> Ownership {
        K::OWNERSHIP
    }

    #[test]
    fn test_category_follows_argument_form() {
        let v = vec![1, 2, 3];
        assert_eq!(category(&&v), Ownership::Borrowing);
        assert_eq!(category(&v.clone()), Ownership::Owning);
        assert_eq!(category(&Arc::new(v.clone())), Ownership::Sharing);
        assert_eq!(category(&(1..4i32)), Ownership::Owning);
        assert_eq!(category(&&v[1..]), Ownership::Owning);
    }

    #[test]
    fn test_slice_reference_is_not_copied() {
        let v = vec![1, 2, 3];
        let keeper = (&v[1..]).into_keeper();
        assert!(std::ptr::eq(keeper.get().as_ptr(), v[1..].as_ptr()));
        assert_eq!(keeper.traverse().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_keeper_variants() {
        let v = vec![1, 2, 3];

        let borrowed = (&v).into_keeper();
        assert_eq!(borrowed.ownership(), Ownership::Borrowing);
        assert!(std::ptr::eq(borrowed.get(), &v));

        let owned = v.clone().into_keeper();
        assert_eq!(owned.ownership(), Ownership::Owning);
        assert_eq!(owned.get(), &v);

        let shared = Arc::new(v.clone());
        let keeper = Arc::clone(&shared).into_keeper();
        assert_eq!(keeper.ownership(), Ownership::Sharing);
        assert_eq!(Arc::strong_count(&shared), 2);
        drop(keeper);
        assert_eq!(Arc::strong_count(&shared), 1);
    }

    #[test]
    fn test_keeper_is_a_sequence() {
        let keeper: Keeper<'_, Vec<i32>> = Keeper::Owned(vec![4, 5]);
        assert_eq!(keeper.traverse().collect::<Vec<_>>(), vec![4, 5]);
        assert_eq!(keeper.len(), 2);

        let cloned = keeper.clone();
        assert_eq!(cloned.ownership(), Ownership::Owning);
        assert_eq!(cloned.get(), keeper.get());
    }

    #[test]
    fn test_clone_shares_arc() {
        let shared = Arc::new(vec!['a']);
        let keeper = Arc::clone(&shared).into_keeper();
        let copy = keeper.clone();
        assert_eq!(Arc::strong_count(&shared), 3);
        assert!(std::ptr::eq(copy.get(), keeper.get()));
    }
}
