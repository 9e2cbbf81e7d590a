//! Lazy, composable views over sequences.
//!
//! A view wraps one or more source sequences and transforms them on demand:
//! nothing is computed when a view is built, and each element is produced
//! only when a cursor over the view reads it. Views nest freely, and every
//! view is itself a [`Sequence`].
//!
//! How a view holds its source is decided by the argument form at the entry
//! point, through [`IntoKeeper`]:
//!
//! - a value is moved into the view ([`Ownership::Owning`]),
//! - `&S` is borrowed for the lifetime of the view ([`Ownership::Borrowing`]),
//! - `Arc<S>` is shared ([`Ownership::Sharing`]).
//!
//! ```
//! use seqview::{collect, filter, slice, transform};
//!
//! let readings = vec![3, 12, 7, 20, 1];
//! let big = filter(&readings, |r| *r > 5);
//! let scaled = transform(big, |r| r * 10);
//! assert_eq!(collect::<Vec<_>, _>(&scaled), vec![120, 70, 200]);
//!
//! let window = slice(&scaled, 1, 5).unwrap();
//! assert_eq!(collect::<Vec<_>, _>(window), vec![70, 200]);
//! ```
//!
//! # Key Types
//!
//! - [`Sequence`] - repeatable forward traversal over positions
//! - [`Keeper`] - owned, borrowed or shared storage of a view's source
//! - [`Cursor`], [`Iter`] - positions bound to their sequence, and the bridge
//!   to `Iterator`
//! - [`Tracker`] - a pair of positions for adaptors over two sources
//! - [`Find`] - element lookup, native for sets and maps, linear otherwise

pub mod algorithm;
pub mod cursor;
pub mod ext;
pub mod find;
pub mod keeper;
pub mod sequence;
pub mod tracker;
pub mod view;

pub use algorithm::{
    Zip3View, all, any, collect, concatenate, contains, enumerate, filter, find, find_if,
    flat_map, flatten, fold, for_each, is_empty, iterate, join, none, partition, size, skip,
    slice, take, take_while, transform, zip, zip_with, zip3,
};
pub use cursor::{Cursor, Iter};
pub use ext::SequenceExt;
pub use find::Find;
pub use keeper::{IntoKeeper, Keeper, Ownership};
pub use sequence::{ItemOf, Sequence};
pub use tracker::Tracker;
pub use view::{
    ConcatView, EnumerateView, FilterView, FlattenView, Iterate, SkipView, SliceView, TakeView,
    TakeWhileView, TransformView, ZipView,
};

pub use seqview_common::{Error, ErrorKind, Result};
