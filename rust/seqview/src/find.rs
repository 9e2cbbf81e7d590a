//! Element lookup with compile-time selection of the lookup strategy.
//!
//! [`Find`] is the capability "look up an element equal to a needle". Types
//! with a native lookup (hash and ordered sets and maps) implement it with
//! that lookup. Linear collections and all views implement it with a front to
//! back scan comparing with `==`. Which one applies is decided by the impl the
//! compiler selects for the concrete type; there is no runtime dispatch.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

use crate::sequence::Sequence;

/// Lookup of an element equal to `needle`.
pub trait Find<N: ?Sized> {
    type Output;

    /// Returns a copy of the first element equal to `needle`.
    fn find_element(&self, needle: &N) -> Option<Self::Output>;
}

/// Scans `seq` from the front and returns the first element equal to `needle`.
pub fn find_linear<S, N>(seq: &S, needle: &N) -> Option<S::Item>
where
    S: Sequence,
    S::Item: PartialEq<N>,
    N: ?Sized,
{
    seq.traverse().find(|item| item == needle)
}

impl<T, Q, H> Find<Q> for HashSet<T, H>
where
    T: Borrow<Q> + Hash + Eq + Clone,
    Q: Hash + Eq + ?Sized,
    H: BuildHasher,
{
    type Output = T;

    fn find_element(&self, needle: &Q) -> Option<T> {
        self.get(needle).cloned()
    }
}

impl<T, Q> Find<Q> for BTreeSet<T>
where
    T: Borrow<Q> + Ord + Clone,
    Q: Ord + ?Sized,
{
    type Output = T;

    fn find_element(&self, needle: &Q) -> Option<T> {
        self.get(needle).cloned()
    }
}

/// Maps look up by key and return the whole entry.
impl<K, V, Q, H> Find<Q> for HashMap<K, V, H>
where
    K: Borrow<Q> + Hash + Eq + Clone,
    V: Clone,
    Q: Hash + Eq + ?Sized,
    H: BuildHasher,
{
    type Output = (K, V);

    fn find_element(&self, needle: &Q) -> Option<(K, V)> {
        self.get_key_value(needle)
            .map(|(k, v)| (k.clone(), v.clone()))
    }
}

impl<K, V, Q> Find<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord + Clone,
    V: Clone,
    Q: Ord + ?Sized,
{
    type Output = (K, V);

    fn find_element(&self, needle: &Q) -> Option<(K, V)> {
        self.get_key_value(needle)
            .map(|(k, v)| (k.clone(), v.clone()))
    }
}

impl<T, N> Find<N> for Vec<T>
where
    T: Clone + PartialEq<N>,
    N: ?Sized,
{
    type Output = T;

    fn find_element(&self, needle: &N) -> Option<T> {
        find_linear(self, needle)
    }
}

impl<T, N> Find<N> for VecDeque<T>
where
    T: Clone + PartialEq<N>,
    N: ?Sized,
{
    type Output = T;

    fn find_element(&self, needle: &N) -> Option<T> {
        find_linear(self, needle)
    }
}

impl<T, N, const L: usize> Find<N> for [T; L]
where
    T: Clone + PartialEq<N>,
    N: ?Sized,
{
    type Output = T;

    fn find_element(&self, needle: &N) -> Option<T> {
        find_linear(self, needle)
    }
}

impl<T, N> Find<N> for [T]
where
    T: Clone + PartialEq<N>,
    N: ?Sized,
{
    type Output = T;

    fn find_element(&self, needle: &N) -> Option<T> {
        self.iter().find(|item| *item == needle).cloned()
    }
}

impl<T, N> Find<N> for &[T]
where
    T: Clone + PartialEq<N>,
    N: ?Sized,
{
    type Output = T;

    fn find_element(&self, needle: &N) -> Option<T> {
        <[T]>::find_element(self, needle)
    }
}

impl<S, N> Find<N> for Arc<S>
where
    S: Find<N>,
    N: ?Sized,
{
    type Output = S::Output;

    fn find_element(&self, needle: &N) -> Option<S::Output> {
        self.as_ref().find_element(needle)
    }
}
