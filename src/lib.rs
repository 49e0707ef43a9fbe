//! # Equal-Sum Pairs
//!
//! This crate finds, for an unsorted sequence of integers, every sum that is
//! reachable by two or more distinct pairs of elements, together with the
//! pairs that reach it.
//!
//! A pair is an unordered combination of two *positions* in the input, so
//! repeated values still form distinct pairs. For example, `[5, 5, 5, 5]`
//! yields six pairs, all with sum `10`.
//!
//! ```
//! let groups = pairsum::group(&[6, 4, 12, 10, 22, 54, 32, 42, 21, 11]);
//! let pairs = groups.get(16).unwrap();
//! assert_eq!(pairs.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod grouper;
pub mod input;
pub mod pair;

pub use config::{GroupConfig, OutputFormat};
pub use error::PairSumError;
pub use grouper::{PairSumGrouper, PairSumGroups, group, group_with_config};
pub use pair::{Pair, PairSum, Sum, Value};
