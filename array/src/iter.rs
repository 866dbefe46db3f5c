use core::{fmt, iter::FusedIterator};

use crate::cursor::{Access, Cursor, Direction, Exclusive, Forward, Reverse, Shared};

/// A bounded walk over a fixed array, built from a starting cursor and a count.
///
/// This is the safe face of [`Cursor`]: it never reads outside the array, and it
/// counts elements instead of comparing addresses, which keeps zero-sized element
/// types working. Each `iter*` call on the array starts a fresh walk at the same
/// first element.
pub struct Range<'a, T: 'a, D: Direction, A: Access> {
    front: Cursor<'a, T, D, A>,
    remaining: usize,
}

/// Forward, read-only.
pub type Iter<'a, T> = Range<'a, T, Forward, Shared>;
/// Forward, mutable.
pub type IterMut<'a, T> = Range<'a, T, Forward, Exclusive>;
/// Reversed, read-only.
pub type RevIter<'a, T> = Range<'a, T, Reverse, Shared>;
/// Reversed, mutable.
pub type RevIterMut<'a, T> = Range<'a, T, Reverse, Exclusive>;

impl<'a, T: 'a, D: Direction, A: Access> Range<'a, T, D, A> {
    /// `front` followed by `len - 1` advances must all stay inside one array.
    #[inline(always)]
    pub(crate) fn new(front: Cursor<'a, T, D, A>, len: usize) -> Self {
        Range {
            front,
            remaining: len,
        }
    }

    /// Elements left to visit.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<'a, T: 'a, D: Direction, A: Access> Iterator for Range<'a, T, D, A> {
    type Item = A::Ref<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let ptr = self.front.as_ptr().cast_mut();
        self.front.advance();
        // SAFETY: `remaining` was positive, so `ptr` is inside the array. Each slot is
        // handed out once, so exclusive references never alias.
        Some(unsafe { A::deref(ptr) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, D: Direction, A: Access> DoubleEndedIterator for Range<'a, T, D, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let ptr = self
            .front
            .as_ptr()
            .cast_mut()
            .wrapping_offset((self.remaining as isize).wrapping_mul(D::STEP));
        // SAFETY: the last unvisited slot, inside the array and never handed out before.
        Some(unsafe { A::deref(ptr) })
    }
}

impl<'a, T: 'a, D: Direction, A: Access> ExactSizeIterator for Range<'a, T, D, A> {}

impl<'a, T: 'a, D: Direction, A: Access> FusedIterator for Range<'a, T, D, A> {}

impl<T, D: Direction> Clone for Range<'_, T, D, Shared> {
    fn clone(&self) -> Self {
        Range {
            front: self.front,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug, D: Direction> fmt::Debug for Range<'_, T, D, Shared> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
