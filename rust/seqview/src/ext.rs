//! Method syntax for the view entry points.
//!
//! [`SequenceExt`] is implemented for everything the free functions in
//! [`algorithm`](crate::algorithm) accept, so a pipeline can be written as a
//! chain:
//!
//! ```
//! use seqview::SequenceExt;
//!
//! let words = vec!["left", "", "right"];
//! let lengths: Vec<usize> = (&words).filter(|w| !w.is_empty()).transform(str::len).to();
//! assert_eq!(lengths, vec![4, 5]);
//! ```
//!
//! The terminal operations are available the same way, ending a chain with a
//! plain value.
//!
//! Standard ranges are also `Iterator`s, whose methods share several of these
//! names; build views over ranges with the free functions instead. An owned
//! `Vec` receiver also resolves `contains` here rather than to the slice method.

use std::fmt::Display;

use seqview_common::Result;

use crate::algorithm;
use crate::find::Find;
use crate::keeper::IntoKeeper;
use crate::sequence::{ItemOf, Sequence};
use crate::view::{
    ConcatView, EnumerateView, FilterView, FlattenView, Pair, SkipView, SliceView, TakeView,
    TakeWhileView, TransformView, ZipView,
};

pub trait SequenceExt<'s>: IntoKeeper<'s> + Sized {
    fn transform<F, R>(self, f: F) -> TransformView<'s, Self::Seq, F>
    where
        F: Fn(ItemOf<Self::Seq>) -> R,
    {
        algorithm::transform(self, f)
    }

    fn filter<P>(self, pred: P) -> FilterView<'s, Self::Seq, P>
    where
        P: Fn(&ItemOf<Self::Seq>) -> bool,
    {
        algorithm::filter(self, pred)
    }

    fn concatenate<B>(self, other: B) -> ConcatView<'s, Self::Seq, B::Seq>
    where
        B: IntoKeeper<'s>,
        B::Seq: Sequence<Item = ItemOf<Self::Seq>>,
    {
        algorithm::concatenate(self, other)
    }

    fn zip<B>(
        self,
        other: B,
    ) -> ZipView<'s, Self::Seq, B::Seq, Pair<ItemOf<Self::Seq>, ItemOf<B::Seq>>>
    where
        B: IntoKeeper<'s>,
    {
        algorithm::zip(self, other)
    }

    fn zip_with<B, F, R>(self, other: B, f: F) -> ZipView<'s, Self::Seq, B::Seq, F>
    where
        B: IntoKeeper<'s>,
        F: Fn(ItemOf<Self::Seq>, ItemOf<B::Seq>) -> R,
    {
        algorithm::zip_with(self, other, f)
    }

    fn slice(self, from: usize, until: usize) -> Result<SliceView<'s, Self::Seq>> {
        algorithm::slice(self, from, until)
    }

    fn take(self, n: usize) -> TakeView<'s, Self::Seq> {
        algorithm::take(self, n)
    }

    fn take_while<P>(self, pred: P) -> TakeWhileView<'s, Self::Seq, P>
    where
        P: Fn(&ItemOf<Self::Seq>) -> bool,
    {
        algorithm::take_while(self, pred)
    }

    fn skip(self, n: usize) -> SkipView<'s, Self::Seq> {
        algorithm::skip(self, n)
    }

    fn enumerate(self) -> EnumerateView<'s, Self::Seq> {
        algorithm::enumerate(self)
    }

    fn flatten(self) -> FlattenView<'s, Self::Seq>
    where
        ItemOf<Self::Seq>: Sequence + Clone,
    {
        algorithm::flatten(self)
    }

    fn flat_map<F, R>(self, f: F) -> FlattenView<'s, TransformView<'s, Self::Seq, F>>
    where
        F: Fn(ItemOf<Self::Seq>) -> R,
        R: Sequence + Clone,
    {
        algorithm::flat_map(self, f)
    }

    /// Collects the elements into `C`.
    fn to<C>(self) -> C
    where
        C: FromIterator<ItemOf<Self::Seq>>,
    {
        algorithm::collect(self)
    }

    fn for_each<F>(self, f: F)
    where
        F: FnMut(ItemOf<Self::Seq>),
    {
        algorithm::for_each(self, f)
    }

    /// Native lookup when the underlying sequence has one, a scan otherwise.
    fn contains<N>(self, needle: &N) -> bool
    where
        Self::Seq: Find<N>,
        N: ?Sized,
    {
        algorithm::contains(self.into_keeper().get(), needle)
    }

    fn find_if<P>(self, pred: P) -> Option<ItemOf<Self::Seq>>
    where
        P: FnMut(&ItemOf<Self::Seq>) -> bool,
    {
        algorithm::find_if(self, pred)
    }

    fn any<P>(self, pred: P) -> bool
    where
        P: FnMut(&ItemOf<Self::Seq>) -> bool,
    {
        algorithm::any(self, pred)
    }

    fn all<P>(self, pred: P) -> bool
    where
        P: FnMut(&ItemOf<Self::Seq>) -> bool,
    {
        algorithm::all(self, pred)
    }

    fn none<P>(self, pred: P) -> bool
    where
        P: FnMut(&ItemOf<Self::Seq>) -> bool,
    {
        algorithm::none(self, pred)
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, ItemOf<Self::Seq>) -> B,
    {
        algorithm::fold(self, init, f)
    }

    fn partition<P>(self, pred: P) -> (Vec<ItemOf<Self::Seq>>, Vec<ItemOf<Self::Seq>>)
    where
        P: FnMut(&ItemOf<Self::Seq>) -> bool,
    {
        algorithm::partition(self, pred)
    }

    fn join(self, sep: &str) -> String
    where
        ItemOf<Self::Seq>: Display,
    {
        algorithm::join(self, sep)
    }

    /// Number of elements; see [`Sequence::len`].
    fn size(self) -> usize {
        algorithm::size(self)
    }
}

impl<'s, K: IntoKeeper<'s>> SequenceExt<'s> for K {}
