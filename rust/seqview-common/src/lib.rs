//! Error types and the precondition check shared by the seqview crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
