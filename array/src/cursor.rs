//! Position markers over the storage of a [`FixedArray`](crate::FixedArray).
//!
//! A [`Cursor`] is a single storage address plus two zero-sized tags:
//!
//! - a [`Direction`] ([`Forward`] or [`Reverse`]) deciding which way `advance` moves;
//! - an [`Access`] mode ([`Shared`] or [`Exclusive`]) deciding what a dereference yields.
//!
//! The four combinations replace four hand-written iterator classes:
//!
//! | Alias | Direction | Access | Yields |
//! |-------|-----------|--------|--------|
//! | [`CursorMut`] | `Forward` | `Exclusive` | `&mut T` |
//! | [`ConstCursor`] | `Forward` | `Shared` | `&T` |
//! | [`RevCursorMut`] | `Reverse` | `Exclusive` | `&mut T` |
//! | [`ConstRevCursor`] | `Reverse` | `Shared` | `&T` |
//!
//! Moving a cursor never dereferences it, and the address arithmetic is wrapping, so
//! boundary cursors such as `end()` or the one-before-first `rend()` are always safe
//! to form and compare. Reading through a cursor is `unsafe`: the caller promises the
//! cursor sits inside its array's `[begin, end)` range.
//!
//! ```
//! use shiny_array::FixedArray;
//!
//! let arr = FixedArray::new([10, 20, 30]);
//! let mut cursor = arr.rbegin();
//! let mut seen = Vec::new();
//! while cursor != arr.rend() {
//!     // SAFETY: the loop stops at `rend()`.
//!     seen.push(unsafe { *cursor.get() });
//!     cursor.advance();
//! }
//! assert_eq!(seen, [30, 20, 10]);
//! ```

use core::{
    fmt,
    marker::PhantomData,
    ops::{Add, AddAssign, Sub, SubAssign},
};

mod private {
    pub trait Sealed {}
}

/// Traversal direction of a cursor. Sealed.
pub trait Direction: private::Sealed {
    /// Element offset applied by a single `advance`.
    const STEP: isize;
}

/// Moves from index `0` towards `N - 1`.
#[derive(Debug)]
pub enum Forward {}

/// Moves from index `N - 1` towards `0`.
#[derive(Debug)]
pub enum Reverse {}

impl private::Sealed for Forward {}
impl private::Sealed for Reverse {}

impl Direction for Forward {
    const STEP: isize = 1;
}

impl Direction for Reverse {
    const STEP: isize = -1;
}

/// Mutability of the references a cursor hands out. Sealed.
pub trait Access: private::Sealed {
    /// What dereferencing a cursor with this access mode yields.
    type Ref<'a, T: 'a>;

    /// # Safety
    ///
    /// `ptr` must point to a live, initialized `T` that stays valid and unaliased
    /// (for exclusive access) for `'a`.
    #[doc(hidden)]
    unsafe fn deref<'a, T: 'a>(ptr: *mut T) -> Self::Ref<'a, T>;
}

/// Read-only access, yields `&T`.
#[derive(Debug)]
pub enum Shared {}

/// Read-write access, yields `&mut T`.
#[derive(Debug)]
pub enum Exclusive {}

impl private::Sealed for Shared {}
impl private::Sealed for Exclusive {}

impl Access for Shared {
    type Ref<'a, T: 'a> = &'a T;

    unsafe fn deref<'a, T: 'a>(ptr: *mut T) -> &'a T {
        // SAFETY: forwarded to the caller.
        unsafe { &*ptr }
    }
}

impl Access for Exclusive {
    type Ref<'a, T: 'a> = &'a mut T;

    unsafe fn deref<'a, T: 'a>(ptr: *mut T) -> &'a mut T {
        // SAFETY: forwarded to the caller.
        unsafe { &mut *ptr }
    }
}

/// A position inside (or at a boundary of) a fixed array's storage.
///
/// Obtained from [`FixedArray::begin`](crate::FixedArray::begin) and friends. The
/// lifetime `'a` ties the cursor to the borrow of the array it came from, so the
/// array can be neither dropped nor moved while the cursor exists.
///
/// Shared cursors are `Copy`. Exclusive cursors are move-only; use
/// [`Cursor::reborrow`] to compare or inspect without giving one up.
pub struct Cursor<'a, T: 'a, D: Direction, A: Access> {
    ptr: *mut T,
    _marker: PhantomData<(A::Ref<'a, T>, D)>,
}

/// Forward cursor with mutable access.
pub type CursorMut<'a, T> = Cursor<'a, T, Forward, Exclusive>;
/// Forward cursor with read-only access.
pub type ConstCursor<'a, T> = Cursor<'a, T, Forward, Shared>;
/// Reversed cursor with mutable access.
pub type RevCursorMut<'a, T> = Cursor<'a, T, Reverse, Exclusive>;
/// Reversed cursor with read-only access.
pub type ConstRevCursor<'a, T> = Cursor<'a, T, Reverse, Shared>;

impl<'a, T: 'a, D: Direction, A: Access> Cursor<'a, T, D, A> {
    /// Callers must derive `ptr` from storage borrowed for `'a` with a mode at least
    /// as strong as `A`.
    #[inline(always)]
    pub(crate) const fn from_ptr(ptr: *mut T) -> Self {
        Cursor {
            ptr,
            _marker: PhantomData,
        }
    }

    /// Moves one element in the cursor's direction (`++`).
    #[inline(always)]
    pub fn advance(&mut self) {
        self.ptr = self.ptr.wrapping_offset(D::STEP);
    }

    /// Moves one element against the cursor's direction (`--`).
    #[inline(always)]
    pub fn retreat(&mut self) {
        self.ptr = self.ptr.wrapping_offset(-D::STEP);
    }

    /// Moves `n` elements in the cursor's direction.
    #[inline]
    pub fn advance_by(&mut self, n: usize) {
        self.ptr = self.ptr.wrapping_offset((n as isize).wrapping_mul(D::STEP));
    }

    /// Moves `n` elements against the cursor's direction.
    #[inline]
    pub fn retreat_by(&mut self, n: usize) {
        self.ptr = self.ptr.wrapping_offset((n as isize).wrapping_mul(-D::STEP));
    }

    /// Number of `advance` calls that take `self` to `other`. Negative when `other`
    /// lies behind `self`. Always `0` for zero-sized `T`.
    pub fn distance_to<B: Access>(&self, other: &Cursor<'_, T, D, B>) -> isize {
        let size = size_of::<T>();
        if size == 0 {
            return 0;
        }
        let bytes = other.ptr.addr().wrapping_sub(self.ptr.addr()) as isize;
        bytes / size as isize * D::STEP
    }

    /// Raw address the cursor points at. Never null-checked or dereferenced.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    /// Reads the element under the cursor.
    ///
    /// # Safety
    ///
    /// - The cursor must lie inside `[begin, end)` of its array. Boundary cursors
    ///   (`end()`, `rend()`) must never be read.
    /// - No `&mut T` to the same slot may be live while the returned reference is.
    ///   That includes one handed out by an exclusive cursor or a mutable iterator
    ///   from the same borrow, for example the `bounds_mut` end marker moved back
    ///   onto a slot the begin cursor already returned.
    #[inline(always)]
    pub unsafe fn get(&self) -> &T {
        // SAFETY: in-bounds per the caller; the array outlives `'a` which outlives `&self`.
        unsafe { &*self.ptr }
    }

    /// Turns the cursor into the reference it points at, with the array's lifetime.
    ///
    /// # Safety
    ///
    /// Same as [`Cursor::get`]. For an exclusive cursor, additionally no other
    /// reference to the slot, shared or mutable, may be live for `'a`.
    #[inline(always)]
    pub unsafe fn into_ref(self) -> A::Ref<'a, T> {
        // SAFETY: forwarded to the caller, who also guarantees the slot is unaliased.
        unsafe { A::deref(self.ptr) }
    }
}

impl<'a, T: 'a, D: Direction> Cursor<'a, T, D, Exclusive> {
    /// Mutable access to the element under the cursor.
    ///
    /// # Safety
    ///
    /// The cursor must lie inside `[begin, end)`, and no other reference to the
    /// slot may be live while the returned one is, including a reference obtained
    /// earlier through `into_ref` on a cursor derived from the same borrow.
    #[inline(always)]
    pub unsafe fn get_mut(&mut self) -> &mut T {
        // SAFETY: in-bounds and unaliased per the caller.
        unsafe { &mut *self.ptr }
    }

    /// A read-only cursor at the same position, borrowed from this one.
    #[inline(always)]
    pub fn reborrow(&self) -> Cursor<'_, T, D, Shared> {
        Cursor::from_ptr(self.ptr)
    }
}

// Same thread-safety as the reference the cursor hands out, like slice iterators.
unsafe impl<'a, T: 'a, D: Direction, A: Access> Send for Cursor<'a, T, D, A> where
    A::Ref<'a, T>: Send
{
}
unsafe impl<'a, T: 'a, D: Direction, A: Access> Sync for Cursor<'a, T, D, A> where
    A::Ref<'a, T>: Sync
{
}

impl<T, D: Direction> Clone for Cursor<'_, T, D, Shared> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, D: Direction> Copy for Cursor<'_, T, D, Shared> {}

impl<T, D: Direction, A: Access, B: Access> PartialEq<Cursor<'_, T, D, B>>
    for Cursor<'_, T, D, A>
{
    #[inline(always)]
    fn eq(&self, other: &Cursor<'_, T, D, B>) -> bool {
        core::ptr::eq(self.ptr, other.ptr)
    }
}

impl<T, D: Direction, A: Access> Eq for Cursor<'_, T, D, A> {}

impl<T, D: Direction, A: Access> Add<usize> for Cursor<'_, T, D, A> {
    type Output = Self;

    fn add(mut self, n: usize) -> Self {
        self.advance_by(n);
        self
    }
}

impl<T, D: Direction, A: Access> Sub<usize> for Cursor<'_, T, D, A> {
    type Output = Self;

    fn sub(mut self, n: usize) -> Self {
        self.retreat_by(n);
        self
    }
}

impl<T, D: Direction, A: Access> AddAssign<usize> for Cursor<'_, T, D, A> {
    fn add_assign(&mut self, n: usize) {
        self.advance_by(n);
    }
}

impl<T, D: Direction, A: Access> SubAssign<usize> for Cursor<'_, T, D, A> {
    fn sub_assign(&mut self, n: usize) {
        self.retreat_by(n);
    }
}

impl<T, D: Direction, A: Access> fmt::Debug for Cursor<'_, T, D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.ptr).finish()
    }
}
