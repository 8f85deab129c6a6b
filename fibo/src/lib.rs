//! Iterative computation of Fibonacci terms.
//!
//! Terms are zero-indexed: F(0) = 0, F(1) = 1 and F(k) = F(k - 1) + F(k - 2).
//! Values are native `u64`s, so only indices up to [`MAX_INDEX`] are supported.

mod computer;
mod error;
mod index;

pub use computer::compute;
pub use error::Error;
pub use index::parse_index;

/// The index computed when none is given.
pub const DEFAULT_INDEX: u64 = 30;

/// The largest index whose term fits in a `u64`.
pub const MAX_INDEX: u64 = 93;
