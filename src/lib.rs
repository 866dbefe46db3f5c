//! Shiny - Fixed-capacity arrays and singly linked chains
//!
//! # Overview
//!
//! Two independent, allocation-aware containers:
//!
//! - [`FixedArray<T, N>`](array::FixedArray): `N` values stored inline, with four
//!   cursor-based traversal views (forward, reversed, each read-only or mutable) and
//!   a handful of algorithms: `fill`, `find`, `min`, `max`, `swap`, `concat`,
//!   `do_to_all`.
//! - [`SinglyLinkedList<T>`](list::SinglyLinkedList): a read-only walker over a chain
//!   of uniquely owned nodes: `head`, `tail`, `at`, `size`.
//!
//! Each container lives in its own crate and is re-exported here behind a feature
//! (`array`, `list`; both on by default).
//!
//! # Quick Start
//!
//! ```
//! use shiny::array::{FixedArray, fixed_array};
//! use shiny::list::{Node, SinglyLinkedList};
//!
//! let numbers = fixed_array![5, 3, 3, 1];
//! assert_eq!(numbers.find(&3), 1);
//! assert_eq!(*numbers.min(), 1);
//!
//! let joined: FixedArray<i32, 6> = numbers.concat(&fixed_array![8, 13]);
//! assert_eq!(joined.rev_iter().next(), Some(&13));
//!
//! let list = SinglyLinkedList::from_head(Some(Node::with_next(1, Node::new(2))));
//! assert_eq!(list.size(), 2);
//! assert_eq!(list.tail().map(|node| node.data), Some(2));
//! ```
//!
//! # API Tiers
//!
//! Shiny keeps the zero-overhead contracts explicit:
//!
//! 1. **Checked** (`at`, `get`, `from_buffer`): report bad input as `Result`/`Option`
//! 2. **Panicking** (`arr[i]`, `swap`): ordinary safe Rust operators
//! 3. **Unchecked** (`at_unchecked`, `swap_unchecked`, cursor reads): `unsafe fn`,
//!    the caller upholds the bounds

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "array")]
pub use shiny_array as array;

#[cfg(feature = "list")]
pub use shiny_list as list;

#[cfg(feature = "array")]
pub use shiny_array::{ArrayError, FixedArray, fixed_array};

#[cfg(feature = "list")]
pub use shiny_list::{Node, SinglyLinkedList};
