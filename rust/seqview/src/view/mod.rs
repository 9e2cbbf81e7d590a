//! Lazy views over sequences.
//!
//! A view is an immutable descriptor: the [`Keeper`](crate::keeper::Keeper)
//! (or keepers) holding its source plus the adaptor parameters. Constructing
//! a view evaluates nothing. Work happens only when a cursor is advanced or
//! read, and every read goes back through the whole chain of adaptors down to
//! the original collection.
//!
//! Views are themselves sequences, so they nest: passing a view by value to
//! another entry point moves it into the outer view's keeper.

/// Implements the traits every view shares: by-value capture through
/// `IntoKeeper`, `IntoIterator` for references, and linear `Find`.
macro_rules! view_boilerplate {
    ($view:ident < $($lt:lifetime),* ; $($param:ident),* >) => {
        impl<'k, $($lt,)* $($param),*> $crate::keeper::IntoKeeper<'k> for $view<$($lt,)* $($param),*>
        where
            Self: $crate::sequence::Sequence + 'k,
        {
            type Seq = Self;

            const OWNERSHIP: $crate::keeper::Ownership = $crate::keeper::Ownership::Owning;

            #[inline]
            fn into_keeper(self) -> $crate::keeper::Keeper<'k, Self> {
                $crate::keeper::Keeper::Owned(self)
            }
        }

        impl<'a, $($lt,)* $($param),*> IntoIterator for &'a $view<$($lt,)* $($param),*>
        where
            $view<$($lt,)* $($param),*>: $crate::sequence::Sequence,
        {
            type Item = <$view<$($lt,)* $($param),*> as $crate::sequence::Sequence>::Item;
            type IntoIter = $crate::cursor::Iter<'a, $view<$($lt,)* $($param),*>>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::cursor::Iter::new(self)
            }
        }

        impl<$($lt,)* NeedleT: ?Sized, $($param),*> $crate::find::Find<NeedleT> for $view<$($lt,)* $($param),*>
        where
            Self: $crate::sequence::Sequence,
            <Self as $crate::sequence::Sequence>::Item: PartialEq<NeedleT>,
        {
            type Output = <Self as $crate::sequence::Sequence>::Item;

            fn find_element(&self, needle: &NeedleT) -> Option<Self::Output> {
                $crate::find::find_linear(self, needle)
            }
        }
    };
}

mod concat;
mod enumerate;
mod filter;
mod flatten;
mod iterate;
mod skip;
mod slice;
mod take;
mod take_while;
mod transform;
mod zip;

pub use concat::ConcatView;
pub use enumerate::{EnumeratePos, EnumerateView};
pub use filter::FilterView;
pub use flatten::{FlattenPos, FlattenView};
pub use iterate::{Iterate, IteratePos};
pub use skip::SkipView;
pub use slice::{SlicePos, SliceView};
pub use take::{TakePos, TakeView};
pub use take_while::TakeWhileView;
pub use transform::TransformView;
pub use zip::{Pair, Triple, ZipView, pair, triple};
