//! Entry points that build views, and the eager terminal operations.
//!
//! View constructors take their source as any [`IntoKeeper`] argument: a value
//! is moved into the view, `&S` is borrowed and `Arc<S>` is shared. Nothing is
//! evaluated until the resulting view is traversed.
//!
//! Terminal operations accept the same argument forms, consume the sequence
//! immediately and return plain values that no longer refer to the source.

use std::fmt::Display;

use itertools::Itertools;
use seqview_common::Result;

use crate::find::Find;
use crate::keeper::{IntoKeeper, Keeper, Ownership};
use crate::sequence::{ItemOf, Sequence};
use crate::view::{
    ConcatView, EnumerateView, FilterView, FlattenView, Iterate, Pair, SkipView, SliceView,
    TakeView, TakeWhileView, TransformView, Triple, ZipView, pair, triple,
};

#[inline]
fn trace_view(adaptor: &str, ownership: Ownership) {
    log::trace!("{adaptor} view over {ownership:?} source");
}

/// Lazily applies `f` to every element.
pub fn transform<'s, K, F, R>(source: K, f: F) -> TransformView<'s, K::Seq, F>
where
    K: IntoKeeper<'s>,
    F: Fn(ItemOf<K::Seq>) -> R,
{
    trace_view("transform", K::OWNERSHIP);
    TransformView::new(source.into_keeper(), f)
}

/// Lazily keeps the elements that satisfy `pred`.
pub fn filter<'s, K, P>(source: K, pred: P) -> FilterView<'s, K::Seq, P>
where
    K: IntoKeeper<'s>,
    P: Fn(&ItemOf<K::Seq>) -> bool,
{
    trace_view("filter", K::OWNERSHIP);
    FilterView::new(source.into_keeper(), pred)
}

/// The elements of `first` followed by those of `second`.
pub fn concatenate<'s, A, B>(first: A, second: B) -> ConcatView<'s, A::Seq, B::Seq>
where
    A: IntoKeeper<'s>,
    B: IntoKeeper<'s>,
    B::Seq: Sequence<Item = ItemOf<A::Seq>>,
{
    trace_view("concatenate (first)", A::OWNERSHIP);
    trace_view("concatenate (second)", B::OWNERSHIP);
    ConcatView::new(first.into_keeper(), second.into_keeper())
}

/// Pairs up elements of two sequences, stopping at the shorter one.
pub fn zip<'s, A, B>(
    first: A,
    second: B,
) -> ZipView<'s, A::Seq, B::Seq, Pair<ItemOf<A::Seq>, ItemOf<B::Seq>>>
where
    A: IntoKeeper<'s>,
    B: IntoKeeper<'s>,
{
    trace_view("zip (first)", A::OWNERSHIP);
    trace_view("zip (second)", B::OWNERSHIP);
    ZipView::new(first.into_keeper(), second.into_keeper(), pair as Pair<_, _>)
}

/// Combines elements of two sequences with `f`, stopping at the shorter one.
pub fn zip_with<'s, A, B, F, R>(first: A, second: B, f: F) -> ZipView<'s, A::Seq, B::Seq, F>
where
    A: IntoKeeper<'s>,
    B: IntoKeeper<'s>,
    F: Fn(ItemOf<A::Seq>, ItemOf<B::Seq>) -> R,
{
    trace_view("zip_with (first)", A::OWNERSHIP);
    trace_view("zip_with (second)", B::OWNERSHIP);
    ZipView::new(first.into_keeper(), second.into_keeper(), f)
}

/// View returned by [`zip3`].
pub type Zip3View<'s, A, B, C> = ZipView<
    's,
    ZipView<'s, A, B, Pair<ItemOf<A>, ItemOf<B>>>,
    C,
    Triple<ItemOf<A>, ItemOf<B>, ItemOf<C>>,
>;

/// Triples of elements from three sequences, stopping at the shortest one.
pub fn zip3<'s, A, B, C>(first: A, second: B, third: C) -> Zip3View<'s, A::Seq, B::Seq, C::Seq>
where
    A: IntoKeeper<'s>,
    B: IntoKeeper<'s>,
    C: IntoKeeper<'s>,
{
    let pairs = zip(first, second);
    trace_view("zip3 (third)", C::OWNERSHIP);
    ZipView::new(
        Keeper::Owned(pairs),
        third.into_keeper(),
        triple as Triple<_, _, _>,
    )
}

/// The half-open window `[from, until)`, clamped to the source length.
///
/// Fails with a precondition violation when `from > until`.
pub fn slice<'s, K>(source: K, from: usize, until: usize) -> Result<SliceView<'s, K::Seq>>
where
    K: IntoKeeper<'s>,
{
    trace_view("slice", K::OWNERSHIP);
    SliceView::new(source.into_keeper(), from, until)
}

/// At most the first `n` elements.
pub fn take<'s, K>(source: K, n: usize) -> TakeView<'s, K::Seq>
where
    K: IntoKeeper<'s>,
{
    trace_view("take", K::OWNERSHIP);
    TakeView::new(source.into_keeper(), n)
}

/// The leading elements that satisfy `pred`.
pub fn take_while<'s, K, P>(source: K, pred: P) -> TakeWhileView<'s, K::Seq, P>
where
    K: IntoKeeper<'s>,
    P: Fn(&ItemOf<K::Seq>) -> bool,
{
    trace_view("take_while", K::OWNERSHIP);
    TakeWhileView::new(source.into_keeper(), pred)
}

/// Everything after the first `n` elements.
pub fn skip<'s, K>(source: K, n: usize) -> SkipView<'s, K::Seq>
where
    K: IntoKeeper<'s>,
{
    trace_view("skip", K::OWNERSHIP);
    SkipView::new(source.into_keeper(), n)
}

pub fn enumerate<'s, K>(source: K) -> EnumerateView<'s, K::Seq>
where
    K: IntoKeeper<'s>,
{
    trace_view("enumerate", K::OWNERSHIP);
    EnumerateView::new(source.into_keeper())
}

/// Concatenates the inner sequences of a sequence of sequences.
pub fn flatten<'s, K>(source: K) -> FlattenView<'s, K::Seq>
where
    K: IntoKeeper<'s>,
    ItemOf<K::Seq>: Sequence + Clone,
{
    trace_view("flatten", K::OWNERSHIP);
    FlattenView::new(source.into_keeper())
}

/// Maps every element to a sequence and concatenates the results.
pub fn flat_map<'s, K, F, R>(source: K, f: F) -> FlattenView<'s, TransformView<'s, K::Seq, F>>
where
    K: IntoKeeper<'s>,
    F: Fn(ItemOf<K::Seq>) -> R,
    R: Sequence + Clone,
{
    FlattenView::new(Keeper::Owned(transform(source, f)))
}

/// The infinite sequence `seed, f(seed), f(f(seed)), ...`.
pub fn iterate<T, F>(seed: T, f: F) -> Iterate<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    log::trace!("iterate sequence");
    Iterate::new(seed, f)
}

/// Gathers all elements into a new collection.
pub fn collect<'s, C, K>(source: K) -> C
where
    K: IntoKeeper<'s>,
    C: FromIterator<ItemOf<K::Seq>>,
{
    source.into_keeper().traverse().collect()
}

pub fn for_each<'s, K, F>(source: K, f: F)
where
    K: IntoKeeper<'s>,
    F: FnMut(ItemOf<K::Seq>),
{
    source.into_keeper().traverse().for_each(f)
}

/// Looks up an element equal to `needle`, using the source's native lookup
/// when it has one.
pub fn find<S, N>(source: &S, needle: &N) -> Option<S::Output>
where
    S: Find<N> + ?Sized,
    N: ?Sized,
{
    source.find_element(needle)
}

pub fn contains<S, N>(source: &S, needle: &N) -> bool
where
    S: Find<N> + ?Sized,
    N: ?Sized,
{
    source.find_element(needle).is_some()
}

/// The first element that satisfies `pred`.
pub fn find_if<'s, K, P>(source: K, mut pred: P) -> Option<ItemOf<K::Seq>>
where
    K: IntoKeeper<'s>,
    P: FnMut(&ItemOf<K::Seq>) -> bool,
{
    source.into_keeper().traverse().find(|item| pred(item))
}

pub fn any<'s, K, P>(source: K, mut pred: P) -> bool
where
    K: IntoKeeper<'s>,
    P: FnMut(&ItemOf<K::Seq>) -> bool,
{
    source.into_keeper().traverse().any(|item| pred(&item))
}

/// `true` for an empty sequence.
pub fn all<'s, K, P>(source: K, mut pred: P) -> bool
where
    K: IntoKeeper<'s>,
    P: FnMut(&ItemOf<K::Seq>) -> bool,
{
    source.into_keeper().traverse().all(|item| pred(&item))
}

pub fn none<'s, K, P>(source: K, pred: P) -> bool
where
    K: IntoKeeper<'s>,
    P: FnMut(&ItemOf<K::Seq>) -> bool,
{
    !any(source, pred)
}

pub fn fold<'s, K, B, F>(source: K, init: B, f: F) -> B
where
    K: IntoKeeper<'s>,
    F: FnMut(B, ItemOf<K::Seq>) -> B,
{
    source.into_keeper().traverse().fold(init, f)
}

/// Formats every element and joins them with `sep`.
pub fn join<'s, K>(source: K, sep: &str) -> String
where
    K: IntoKeeper<'s>,
    ItemOf<K::Seq>: Display,
{
    source.into_keeper().traverse().join(sep)
}

/// Number of elements. Walks the sequence unless the source knows its length.
pub fn size<'s, K>(source: K) -> usize
where
    K: IntoKeeper<'s>,
{
    source.into_keeper().len()
}

pub fn is_empty<'s, K>(source: K) -> bool
where
    K: IntoKeeper<'s>,
{
    source.into_keeper().is_empty()
}

/// Splits the elements into those that satisfy `pred` and those that do not,
/// keeping their order.
pub fn partition<'s, K, P>(source: K, pred: P) -> (Vec<ItemOf<K::Seq>>, Vec<ItemOf<K::Seq>>)
where
    K: IntoKeeper<'s>,
    P: FnMut(&ItemOf<K::Seq>) -> bool,
{
    source.into_keeper().traverse().partition(pred)
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_pipeline_over_borrowed_source() {
        let v = vec![1, 2, 3, 4, 5, 6];
        let evens = filter(&v, |x| x % 2 == 0);
        let squares = transform(evens, |x| x * x);
        assert_eq!(collect::<Vec<_>, _>(&squares), vec![4, 16, 36]);
        assert_eq!(size(&squares), 3);
        // The borrowed source is still usable.
        assert_eq!(v.len(), 6);
    }

    #[test]
    fn test_owned_and_shared_sources() {
        let owned = transform(vec![1, 2], |x| x + 1);
        assert_eq!(owned.into_keeper().ownership(), Ownership::Owning);

        let shared = Arc::new(vec![3, 4]);
        let view = transform(Arc::clone(&shared), |x| x * 2);
        assert_eq!(Arc::strong_count(&shared), 2);
        assert_eq!(collect::<Vec<_>, _>(&view), vec![6, 8]);
        drop(view);
        assert_eq!(Arc::strong_count(&shared), 1);
    }

    #[test]
    fn test_zip_variants() {
        let a = vec![1, 2, 3];
        let b = vec!["one", "two"];
        assert_eq!(
            collect::<Vec<_>, _>(zip(&a, &b)),
            vec![(1, "one"), (2, "two")]
        );
        assert_eq!(collect::<Vec<i32>, _>(zip_with(&a, 10..20i32, |x, y| x * y)), vec![10, 22, 36]);
        assert_eq!(
            collect::<Vec<_>, _>(zip3(&a, &b, ['x', 'y', 'z'])),
            vec![(1, "one", 'x'), (2, "two", 'y')]
        );
    }

    #[test]
    fn test_flat_map_and_iterate() {
        let expanded = flat_map(1..4u32, |n| 0..n);
        assert_eq!(collect::<Vec<_>, _>(expanded), vec![0, 0, 1, 0, 1, 2]);

        let tens = take(iterate(10i32, |x| x + 10), 3);
        assert_eq!(join(&tens, ","), "10,20,30");
    }

    #[test]
    fn test_terminals() {
        let v = vec![3, 8, 1, 9];
        assert!(any(&v, |x| *x > 8));
        assert!(all(&v, |x| *x > 0));
        assert!(none(&v, |x| *x > 9));
        assert_eq!(find_if(&v, |x| *x > 3), Some(8));
        assert_eq!(fold(&v, 0, |acc, x| acc + x), 21);
        assert_eq!(partition(&v, |x| x % 2 == 1), (vec![3, 1, 9], vec![8]));
        assert!(is_empty(filter(&v, |x| *x > 100)));

        let mut seen = Vec::new();
        for_each(skip(&v, 2), |x| seen.push(x));
        assert_eq!(seen, vec![1, 9]);

        let empty: Vec<i32> = Vec::new();
        assert!(all(&empty, |_| false));
    }

    #[test]
    fn test_find_dispatch() {
        let set: BTreeSet<i32> = [5, 1, 3].into_iter().collect();
        assert_eq!(find(&set, &3), Some(3));

        let mut ages = HashMap::new();
        ages.insert("ann", 31);
        assert_eq!(find(&ages, "ann"), Some(("ann", 31)));
        assert!(!contains(&ages, "bob"));

        let view = transform(&set, |x| x * 100);
        assert_eq!(find(&view, &300), Some(300));
        assert!(!contains(&view, &3));
    }

    #[test]
    fn test_sub_slice_sources() {
        let v = vec![1, 2, 3, 4, 5];
        let doubled: Vec<i32> = collect(transform(&v[1..], |x| x * 2));
        assert_eq!(doubled, vec![4, 6, 8, 10]);

        let middle = &v[1..4];
        assert_eq!(size(filter(middle, |x| x % 2 == 0)), 2);
        assert_eq!(find(middle, &4), Some(4));
        assert!(!contains(middle, &5));
        assert_eq!(collect::<Vec<_>, _>(zip(middle, &v[3..])), vec![(2, 4), (3, 5)]);
    }

    #[test]
    fn test_slice_entry_point() {
        let window = slice(1..=10i32, 1, 3).unwrap();
        assert_eq!(window.traverse().collect::<Vec<_>>(), vec![2, 3]);
        assert!(slice(1..=10i32, 4, 2).is_err());
    }

    #[test]
    fn test_enumerate_concat_take_while() {
        let joined = concatenate(vec!['a'], vec!['b', 'c']);
        let numbered = enumerate(joined);
        assert_eq!(
            collect::<Vec<_>, _>(&numbered),
            vec![(0, 'a'), (1, 'b'), (2, 'c')]
        );
        let prefix = take_while(&numbered, |(i, _)| *i < 2);
        assert_eq!(size(prefix), 2);
        assert!(flatten(Vec::<Vec<u8>>::new()).is_empty());
    }
}
