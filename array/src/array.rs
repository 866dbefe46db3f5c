use core::{
    array, fmt,
    ops::{Index, IndexMut},
    ptr,
};

use crate::{
    concat::ConcatLen,
    cursor::{ConstCursor, ConstRevCursor, Cursor, CursorMut, RevCursorMut},
    error::ArrayError,
    iter::{Iter, IterMut, Range, RevIter, RevIterMut},
};

/// `N` values of `T` stored inline.
///
/// The capacity is part of the type and never changes. Copies are deep: `clone`
/// duplicates every element, and `clone_from` overwrites the destination in place.
///
/// ```
/// use shiny_array::FixedArray;
///
/// let mut arr = FixedArray::new([5, 3, 3, 1]);
/// assert_eq!(arr.find(&3), 1);
/// assert_eq!(*arr.min(), 1);
/// assert_eq!(*arr.max(), 5);
///
/// arr.do_to_all(|x| *x *= 2);
/// assert_eq!(arr.as_slice(), &[10, 6, 6, 2]);
/// ```
#[derive(Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FixedArray<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    pub const CAPACITY: usize = N;

    /// Returned by [`FixedArray::find`] when no element matches.
    pub const NOT_FOUND: usize = usize::MAX;

    const NON_EMPTY: () = assert!(N > 0, "min/max need an array with at least one element");

    #[inline(always)]
    pub const fn new(data: [T; N]) -> Self {
        FixedArray { data }
    }

    /// Every slot set to a clone of `value`.
    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        FixedArray {
            data: array::from_fn(|_| value.clone()),
        }
    }

    /// Takes the first `N` values. Extra values are left unconsumed; missing ones
    /// become `T::default()`.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Default,
    {
        let mut values = values.into_iter();
        FixedArray {
            data: array::from_fn(|_| values.next().unwrap_or_default()),
        }
    }

    /// Copies the first `N` elements of `buffer`.
    pub fn from_buffer(buffer: &[T]) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        if buffer.len() < N {
            tracing::debug!(len = buffer.len(), required = N, "buffer too short for array");
            return Err(ArrayError::BufferTooShort {
                len: buffer.len(),
                required: N,
            });
        }
        Ok(FixedArray {
            data: array::from_fn(|i| buffer[i].clone()),
        })
    }

    /// Bitwise copy of `N` elements starting at `src`.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of `N` consecutive, initialized `T` values and
    /// properly aligned.
    pub unsafe fn from_raw(src: *const T) -> Self
    where
        T: Copy,
    {
        // SAFETY: forwarded to the caller; `T: Copy` makes the bitwise copy a real copy.
        FixedArray {
            data: unsafe { ptr::read(src.cast::<[T; N]>()) },
        }
    }

    #[inline(always)]
    pub const fn size(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Checked access.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.data.get(index).ok_or_else(|| out_of_bounds(index, N))
    }

    /// Checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        self.data.get_mut(index).ok_or_else(|| out_of_bounds(index, N))
    }

    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline(always)]
    pub unsafe fn at_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N, "index {index} out of bounds for {N} elements");
        // SAFETY: forwarded to the caller.
        unsafe { self.data.get_unchecked(index) }
    }

    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline(always)]
    pub unsafe fn at_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N, "index {index} out of bounds for {N} elements");
        // SAFETY: forwarded to the caller.
        unsafe { self.data.get_unchecked_mut(index) }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    #[inline(always)]
    pub const fn data(&self) -> &[T; N] {
        &self.data
    }

    #[inline(always)]
    pub fn data_mut(&mut self) -> &mut [T; N] {
        &mut self.data
    }

    #[inline(always)]
    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    pub fn into_inner(self) -> [T; N] {
        self.data
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Index of the first element equal to `value`, or [`FixedArray::NOT_FOUND`].
    pub fn find(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.position(value).unwrap_or(Self::NOT_FOUND)
    }

    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(value).is_some()
    }

    /// The smallest element; the leftmost one wins ties.
    ///
    /// Calling this on a zero-capacity array fails to compile.
    pub fn min(&self) -> &T
    where
        T: PartialOrd,
    {
        let () = Self::NON_EMPTY;
        self.iter()
            .fold(&self.data[0], |best, item| if item < best { item } else { best })
    }

    /// The largest element; the leftmost one wins ties.
    ///
    /// Calling this on a zero-capacity array fails to compile.
    pub fn max(&self) -> &T
    where
        T: PartialOrd,
    {
        let () = Self::NON_EMPTY;
        self.iter()
            .fold(&self.data[0], |best, item| if item > best { item } else { best })
    }

    /// Exchanges two elements. Panics if either index is out of range.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    /// # Safety
    ///
    /// Both `a` and `b` must be less than `N`.
    #[inline]
    pub unsafe fn swap_unchecked(&mut self, a: usize, b: usize) {
        debug_assert!(a < N && b < N, "swap ({a}, {b}) out of bounds for {N} elements");
        let base = self.data.as_mut_ptr();
        // SAFETY: both offsets are in bounds per the caller; `ptr::swap` allows `a == b`.
        unsafe { ptr::swap(base.add(a), base.add(b)) }
    }

    /// A new array holding `self` followed by `other`.
    ///
    /// `R` is usually inferred from the binding and must equal `N + M`; anything else
    /// is rejected at compile time.
    ///
    /// ```
    /// use shiny_array::FixedArray;
    ///
    /// let joined: FixedArray<i32, 5> = FixedArray::new([1, 2, 3]).concat(&FixedArray::new([4, 5]));
    /// assert_eq!(joined.size(), 5);
    /// ```
    pub fn concat<const M: usize, const R: usize>(&self, other: &FixedArray<T, M>) -> FixedArray<T, R>
    where
        T: Clone,
    {
        let () = ConcatLen::<N, M, R>::MATCHES;
        tracing::trace!(left = N, right = M, "concatenating arrays");
        FixedArray {
            data: array::from_fn(|i| {
                if i < N {
                    self.data[i].clone()
                } else {
                    other.data[i - N].clone()
                }
            }),
        }
    }

    /// Runs `op` on every element, front to back, allowing in-place changes.
    pub fn do_to_all<F>(&mut self, op: F)
    where
        F: FnMut(&mut T),
    {
        self.iter_mut().for_each(op);
    }

    /// Runs `op` on a copy of every element, front to back. The array is untouched.
    pub fn do_to_all_copied<F>(&self, op: F)
    where
        F: FnMut(T),
        T: Clone,
    {
        self.iter().cloned().for_each(op);
    }

    #[inline(always)]
    pub fn begin(&self) -> ConstCursor<'_, T> {
        Cursor::from_ptr(self.data.as_ptr().cast_mut())
    }

    #[inline(always)]
    pub fn end(&self) -> ConstCursor<'_, T> {
        Cursor::from_ptr(self.data.as_ptr().cast_mut().wrapping_add(N))
    }

    /// Cursor on the last element.
    #[inline(always)]
    pub fn rbegin(&self) -> ConstRevCursor<'_, T> {
        Cursor::from_ptr(self.data.as_ptr().cast_mut().wrapping_add(N).wrapping_sub(1))
    }

    /// One before the first element. Only ever compare against it.
    #[inline(always)]
    pub fn rend(&self) -> ConstRevCursor<'_, T> {
        Cursor::from_ptr(self.data.as_ptr().cast_mut().wrapping_sub(1))
    }

    #[inline(always)]
    pub fn crbegin(&self) -> ConstRevCursor<'_, T> {
        self.rbegin()
    }

    #[inline(always)]
    pub fn crend(&self) -> ConstRevCursor<'_, T> {
        self.rend()
    }

    #[inline(always)]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        Cursor::from_ptr(self.data.as_mut_ptr())
    }

    #[inline(always)]
    pub fn rbegin_mut(&mut self) -> RevCursorMut<'_, T> {
        Cursor::from_ptr(self.data.as_mut_ptr().wrapping_add(N).wrapping_sub(1))
    }

    /// `begin` and `end` for mutable traversal, from one borrow.
    ///
    /// Only the first cursor is exclusive. The end cursor is a read-only boundary
    /// marker for comparisons, so a single borrow never yields two cursors able to
    /// hand out `&mut T`.
    pub fn bounds_mut(&mut self) -> (CursorMut<'_, T>, ConstCursor<'_, T>) {
        let base = self.data.as_mut_ptr();
        (Cursor::from_ptr(base), Cursor::from_ptr(base.wrapping_add(N)))
    }

    /// `rbegin` and `rend` for mutable traversal, from one borrow. The end cursor is
    /// a read-only boundary marker, as in [`FixedArray::bounds_mut`].
    pub fn rbounds_mut(&mut self) -> (RevCursorMut<'_, T>, ConstRevCursor<'_, T>) {
        let base = self.data.as_mut_ptr();
        (
            Cursor::from_ptr(base.wrapping_add(N).wrapping_sub(1)),
            Cursor::from_ptr(base.wrapping_sub(1)),
        )
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Range::new(self.begin(), N)
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        Range::new(self.begin_mut(), N)
    }

    #[inline]
    pub fn rev_iter(&self) -> RevIter<'_, T> {
        Range::new(self.rbegin(), N)
    }

    #[inline]
    pub fn rev_iter_mut(&mut self) -> RevIterMut<'_, T> {
        Range::new(self.rbegin_mut(), N)
    }
}

#[cold]
fn out_of_bounds(index: usize, len: usize) -> ArrayError {
    tracing::debug!(index, len, "rejected out-of-range index");
    ArrayError::IndexOutOfBounds { index, len }
}

impl<T: Clone, const N: usize> Clone for FixedArray<T, N> {
    fn clone(&self) -> Self {
        FixedArray {
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from_slice(&source.data);
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        FixedArray {
            data: array::from_fn(|_| T::default()),
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(data: [T; N]) -> Self {
        FixedArray { data }
    }
}

impl<T, const N: usize> From<FixedArray<T, N>> for [T; N] {
    fn from(array: FixedArray<T, N>) -> Self {
        array.data
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for FixedArray<T, N> {
    type Error = ArrayError;

    fn try_from(buffer: &[T]) -> Result<Self, ArrayError> {
        Self::from_buffer(buffer)
    }
}

impl<T: Default, const N: usize> FromIterator<T> for FixedArray<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_values(values)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::{format, string::String, vec, vec::Vec};

    use super::*;

    #[test]
    fn default_fills_with_default_values() {
        let arr: FixedArray<i32, 4> = FixedArray::default();
        assert_eq!(arr.into_inner(), [0; 4]);
    }

    #[test]
    fn from_values_truncates_long_lists() {
        let arr: FixedArray<i32, 3> = FixedArray::from_values([1, 2, 3, 4, 5]);
        assert_eq!(arr.into_inner(), [1, 2, 3]);
    }

    #[test]
    fn from_values_default_fills_short_lists() {
        let arr: FixedArray<String, 3> = FixedArray::from_values([String::from("a")]);
        assert_eq!(arr.as_slice(), &["a", "", ""]);
    }

    #[test]
    fn from_buffer_copies_prefix() {
        let buffer = [7, 8, 9, 10];
        let arr = FixedArray::<i32, 3>::from_buffer(&buffer).unwrap();
        assert_eq!(arr.into_inner(), [7, 8, 9]);
    }

    #[test]
    fn from_buffer_rejects_short_buffers() {
        let buffer = [1, 2];
        assert_eq!(
            FixedArray::<i32, 3>::from_buffer(&buffer),
            Err(ArrayError::BufferTooShort {
                len: 2,
                required: 3
            })
        );
    }

    #[test]
    fn from_raw_copies_bits() {
        let source = vec![1u16, 2, 3, 4];
        // SAFETY: `source` holds four initialized, aligned `u16`s.
        let arr = unsafe { FixedArray::<u16, 4>::from_raw(source.as_ptr()) };
        assert_eq!(arr.as_slice(), source.as_slice());
    }

    #[test]
    fn clone_is_deep() {
        let original = FixedArray::new([String::from("x"), String::from("y")]);
        let mut copy = original.clone();
        copy[0].push('!');
        assert_eq!(original[0], "x");
        assert_eq!(copy[0], "x!");
    }

    #[test]
    fn clone_from_overwrites_every_slot() {
        let source = FixedArray::new([1, 2, 3]);
        let mut target = FixedArray::new([9, 9, 9]);
        target.clone_from(&source);
        assert_eq!(target, source);
    }

    #[test]
    fn checked_access_reports_index_and_len() {
        let mut arr = FixedArray::new([1, 2]);
        assert_eq!(arr.at(1), Ok(&2));
        assert_eq!(
            arr.at(2),
            Err(ArrayError::IndexOutOfBounds { index: 2, len: 2 })
        );
        *arr.at_mut(0).unwrap() = 5;
        assert_eq!(arr[0], 5);
        assert!(arr.at_mut(9).is_err());
    }

    #[test]
    fn unchecked_access_reads_and_writes() {
        let mut arr = FixedArray::new([1, 2, 3]);
        // SAFETY: indices are below 3.
        unsafe {
            *arr.at_unchecked_mut(2) = 30;
            assert_eq!(*arr.at_unchecked(2), 30);
            assert_eq!(*arr.at_unchecked(0), 1);
        }
    }

    #[test]
    #[should_panic]
    fn index_operator_panics_out_of_range() {
        let arr = FixedArray::new([1, 2, 3]);
        let _ = arr[3];
    }

    #[test]
    fn size_is_capacity() {
        let arr = FixedArray::new([0u8; 7]);
        assert_eq!(arr.size(), 7);
        assert_eq!(arr.len(), 7);
        assert_eq!(FixedArray::<u8, 7>::CAPACITY, 7);
        assert!(!arr.is_empty());
        assert!(FixedArray::<u8, 0>::new([]).is_empty());
    }

    #[test]
    fn fill_overwrites_everything() {
        let mut arr = FixedArray::new([1, 2, 3, 4]);
        arr.fill(8);
        assert!(arr.iter().all(|&x| x == 8));
    }

    #[test]
    fn find_returns_first_match_or_sentinel() {
        let arr = FixedArray::new([5, 3, 3, 1]);
        assert_eq!(arr.find(&3), 1);
        assert_eq!(arr.find(&1), 3);
        assert_eq!(arr.find(&42), FixedArray::<i32, 4>::NOT_FOUND);
        assert_eq!(arr.find(&42), usize::MAX);
        assert_eq!(arr.position(&42), None);
        assert!(arr.contains(&5));
    }

    #[test]
    fn min_and_max_keep_first_occurrence() {
        let arr = FixedArray::new([2, 1, 3, 1, 3]);
        let min = arr.min();
        let max = arr.max();
        assert_eq!(*min, 1);
        assert_eq!(*max, 3);
        assert!(ptr::eq(min, &arr[1]));
        assert!(ptr::eq(max, &arr[2]));
    }

    #[test]
    fn min_and_max_skip_incomparable_values() {
        let arr = FixedArray::new([f64::NAN, 2.0, -1.0, 5.0]);
        // NaN never compares less or greater, so it stays the running best.
        assert!(arr.min().is_nan());
        let arr = FixedArray::new([2.0, f64::NAN, -1.0, 5.0]);
        assert_eq!(*arr.min(), -1.0);
        assert_eq!(*arr.max(), 5.0);
    }

    #[test]
    fn min_max_single_element() {
        let arr = FixedArray::new([42]);
        assert_eq!(*arr.min(), 42);
        assert_eq!(*arr.max(), 42);
    }

    #[test]
    fn swap_exchanges_and_is_self_inverse() {
        let mut arr = FixedArray::new(['a', 'b', 'c']);
        arr.swap(0, 2);
        assert_eq!(arr.into_inner(), ['c', 'b', 'a']);
        arr.swap(0, 2);
        assert_eq!(arr.into_inner(), ['a', 'b', 'c']);
        arr.swap(1, 1);
        assert_eq!(arr.into_inner(), ['a', 'b', 'c']);
    }

    #[test]
    fn swap_unchecked_matches_swap() {
        let mut checked = FixedArray::new([1, 2, 3, 4]);
        let mut unchecked = checked;
        checked.swap(1, 3);
        // SAFETY: both indices are below 4.
        unsafe { unchecked.swap_unchecked(1, 3) };
        assert_eq!(checked, unchecked);
    }

    #[test]
    fn concat_preserves_order_and_operands() {
        let left = FixedArray::new([1, 2, 3]);
        let right = FixedArray::new([4, 5]);
        let joined: FixedArray<i32, 5> = left.concat(&right);
        assert_eq!(joined.into_inner(), [1, 2, 3, 4, 5]);
        assert_eq!(left.into_inner(), [1, 2, 3]);
        assert_eq!(right.into_inner(), [4, 5]);
    }

    #[test]
    fn do_to_all_visits_in_order() {
        let mut arr = FixedArray::new([1, 2, 3]);
        let mut order = Vec::new();
        arr.do_to_all(|x| {
            order.push(*x);
            *x += 1;
        });
        assert_eq!(order, [1, 2, 3]);
        assert_eq!(arr.into_inner(), [2, 3, 4]);
    }

    #[test]
    fn do_to_all_copied_leaves_array_alone() {
        let arr = FixedArray::new([String::from("a"), String::from("b")]);
        let mut seen = String::new();
        arr.do_to_all_copied(|mut s| {
            s.push('!');
            seen.push_str(&s);
        });
        assert_eq!(seen, "a!b!");
        assert_eq!(arr.as_slice(), &["a", "b"]);
    }

    #[test]
    fn debug_renders_like_a_slice() {
        let arr = FixedArray::new([1, 2, 3]);
        assert_eq!(format!("{:?}", arr), "[1, 2, 3]");
    }

    #[test]
    fn collect_default_fills() {
        let arr: FixedArray<u8, 4> = (1..=2).collect();
        assert_eq!(arr.into_inner(), [1, 2, 0, 0]);
    }

    #[test]
    fn try_from_slice() {
        let slice: &[i32] = &[1, 2, 3];
        let ok: Result<FixedArray<i32, 2>, _> = FixedArray::try_from(slice);
        assert_eq!(ok.map(FixedArray::into_inner), Ok([1, 2]));
        let err: Result<FixedArray<i32, 4>, _> = FixedArray::try_from(slice);
        assert!(matches!(err, Err(ArrayError::BufferTooShort { .. })));
    }

    #[test]
    fn into_iterator_by_value_and_reference() {
        let mut arr = FixedArray::new([1, 2, 3]);
        for x in &mut arr {
            *x *= 2;
        }
        let borrowed: Vec<_> = (&arr).into_iter().copied().collect();
        let owned: Vec<_> = arr.into_iter().collect();
        assert_eq!(borrowed, owned);
        assert_eq!(owned, [2, 4, 6]);
    }
}
