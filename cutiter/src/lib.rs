//! Zero-allocation string splitting.
//!
//! `Iter` is a cursor that yields the segments of a string between occurrences of a separator,
//! borrowing each one from the input.  The caller drives it with `start` and `advance`, and may
//! call `advance` again inside a loop body to skip a segment:
//!
//! ```
//! let mut it = cutiter::Iter::default();
//! let mut out = String::new();
//! let mut next = it.start("a.b.c.d", ".");
//! while let Some(k) = next {
//!     out.push_str(k);
//!     next = it.advance();
//! }
//! assert_eq!("abcd", out);
//! ```
//!
//! `split` wraps the same cursor in an `Iterator`.
pub mod cut_iter;
pub mod dotted;
pub mod split_iterate;
pub mod units;

pub use cut_iter::Iter;
pub use split_iterate::{split, Segments};
pub use units::Units;
