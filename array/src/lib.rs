//! FixedArray: a fixed-capacity array with cursor-based traversal.
//!
//! [`FixedArray<T, N>`] owns exactly `N` values of `T` inline. It never allocates and
//! never resizes. On top of plain indexed access it offers:
//!
//! - **Four traversal views** built from one generic [`Cursor`]: forward and reversed,
//!   each read-only or mutable. See the [`cursor`] module.
//! - **Safe iterators** ([`Iter`], [`IterMut`], [`RevIter`], [`RevIterMut`]) for
//!   ordinary `for` loops.
//! - **Algorithms**: `fill`, `find`, `min`, `max`, `swap`, `concat` (also `&a + &b`),
//!   `do_to_all`.
//!
//! # Example
//!
//! ```
//! use shiny_array::{FixedArray, fixed_array};
//!
//! let left = fixed_array![1, 2, 3];
//! let right = fixed_array![4, 5];
//! let joined: FixedArray<i32, 5> = left.concat(&right);
//! assert_eq!(joined.as_slice(), &[1, 2, 3, 4, 5]);
//!
//! let backwards: Vec<i32> = joined.rev_iter().copied().collect();
//! assert_eq!(backwards, [5, 4, 3, 2, 1]);
//! ```
//!
//! # Checked and unchecked access
//!
//! | Operation | Out of range |
//! |-----------|--------------|
//! | [`FixedArray::at`] / `at_mut` | `Err(ArrayError::IndexOutOfBounds)` |
//! | [`FixedArray::get`] / `get_mut` | `None` |
//! | `arr[i]`, [`FixedArray::swap`] | panic |
//! | [`FixedArray::at_unchecked`], [`FixedArray::swap_unchecked`] | undefined behavior (`unsafe`) |
//!
//! # Gotchas
//!
//! - `min`/`max` on a zero-capacity array and `concat` into a wrongly sized array are
//!   rejected when the call is monomorphized, so the error may only surface in
//!   `cargo build`, not `cargo check`.
//! - Literal lists shorter than `N` are padded with `T::default()`.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

mod array;
mod concat;
pub mod cursor;
mod error;
mod iter;

pub use array::FixedArray;
pub use concat::Concat;
pub use cursor::{ConstCursor, ConstRevCursor, Cursor, CursorMut, RevCursorMut};
pub use error::ArrayError;
pub use iter::{Iter, IterMut, Range, RevIter, RevIterMut};

static_assertions::assert_eq_size!(FixedArray<u8, 16>, [u8; 16]);
static_assertions::assert_eq_size!(FixedArray<u64, 3>, [u64; 3]);
static_assertions::assert_eq_size!(FixedArray<(), 8>, ());
static_assertions::assert_eq_size!(ConstCursor<'static, u32>, usize);
static_assertions::assert_eq_size!(CursorMut<'static, u32>, usize);
static_assertions::assert_not_impl_any!(CursorMut<'static, u32>: Clone);
static_assertions::assert_impl_all!(ConstCursor<'static, u32>: Copy);
static_assertions::assert_impl_all!(Iter<'static, u32>: Send, Sync);
static_assertions::assert_impl_all!(IterMut<'static, u32>: Send, Sync);
static_assertions::assert_not_impl_any!(Iter<'static, core::cell::Cell<u32>>: Send, Sync);

/// Builds a [`FixedArray`] from a list of values, or from one value repeated.
///
/// ```
/// use shiny_array::{FixedArray, fixed_array};
///
/// let listed = fixed_array![1, 2, 3];
/// assert_eq!(listed.size(), 3);
///
/// let repeated: FixedArray<char, 4> = fixed_array!['x'; 4];
/// assert_eq!(repeated.as_slice(), &['x'; 4]);
/// ```
#[macro_export]
macro_rules! fixed_array {
    ($value:expr; $n:expr) => {
        $crate::FixedArray::<_, $n>::filled($value)
    };
    ($($value:expr),* $(,)?) => {
        $crate::FixedArray::new([$($value),*])
    };
}
