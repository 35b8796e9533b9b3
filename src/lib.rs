//! An order-statistic binary search tree and a survivor-path search built on it.
//!
//! [`OrderedTree`] is an ordered set backed by a plain (never rebalanced) binary
//! search tree. Each node caches the size and height of its subtree, which gives:
//!
//! - [`get`](OrderedTree::get) / [`rank_of`](OrderedTree::rank_of) - rank queries
//!   in one descent
//! - [`floor`](OrderedTree::floor), [`ceiling`](OrderedTree::ceiling),
//!   [`lower`](OrderedTree::lower), [`higher`](OrderedTree::higher) - neighbor
//!   queries in one descent
//! - in-, pre- and post-order walks whose explicit stack is bounded by the height
//! - [`OrderedTree::balanced`] - minimal-height bulk construction
//!
//! No algorithm in the crate recurses, so heavily skewed trees are as safe to
//! use as balanced ones.
//!
//! [`Mountain`] arranges [`RestStop`]s in such a tree and enumerates every
//! summit-to-base path a [`Hiker`] survives, collecting them into a
//! [`GrowableMatrix`].
//!
//! # Example
//!
//! ```
//! use bst_mountain::{OrderedTree, Rank};
//!
//! let tree: OrderedTree<char> = "KDPBJMALON".chars().collect();
//!
//! let ranked: String = (0..tree.len()).map(|i| tree[Rank(i)]).collect();
//! assert_eq!(ranked, "ABDJKLMNOP");
//!
//! assert_eq!(tree.height(), 5);
//! assert_eq!(tree.ceiling(&'C'), Some(&'D'));
//! assert_eq!(tree.lower(&'A'), None);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - only requires `alloc`
//! - **`tracing`** - emits spans and events from the path search and bulk
//!   construction

#![no_std]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod matrix;
pub mod mountain;
pub mod ordered_tree;

pub use error::{Error, Result};
pub use matrix::GrowableMatrix;
pub use mountain::{ClimbConfig, Hiker, Mountain, RationPolicy, RestStop, Supplies};
pub use order_statistic::Rank;
pub use ordered_tree::OrderedTree;
pub use raw::Order;
