use core::{fmt, iter::Chain, ops::Add};

use crate::{FixedArray, iter::Iter};

/// Compile-time proof that an output capacity fits two inputs exactly.
pub(crate) struct ConcatLen<const N: usize, const M: usize, const R: usize>;

impl<const N: usize, const M: usize, const R: usize> ConcatLen<N, M, R> {
    pub(crate) const MATCHES: () = assert!(
        N + M == R,
        "concatenated array capacity must equal the sum of both operands"
    );
}

/// The lazy result of `&left + &right`.
///
/// Holds both operands by reference and reads through to them. Convert it into an
/// owned array with `FixedArray::from` (or `.into()`), where the output capacity is
/// taken from the binding's type and checked against `N + M` at compile time.
///
/// ```
/// use shiny_array::FixedArray;
///
/// let left = FixedArray::new([1, 2, 3]);
/// let right = FixedArray::new([4, 5]);
/// let joined: FixedArray<i32, 5> = (&left + &right).into();
/// assert_eq!(joined.as_slice(), &[1, 2, 3, 4, 5]);
/// ```
pub struct Concat<'a, T, const N: usize, const M: usize> {
    left: &'a FixedArray<T, N>,
    right: &'a FixedArray<T, M>,
}

impl<'a, T, const N: usize, const M: usize> Concat<'a, T, N, M> {
    pub const fn size(&self) -> usize {
        N + M
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        if index < N {
            self.left.get(index)
        } else {
            self.right.get(index - N)
        }
    }

    pub fn iter(&self) -> Chain<Iter<'a, T>, Iter<'a, T>> {
        self.left.iter().chain(self.right.iter())
    }

    /// Copies both halves into a new array. Same as `FixedArray::from(self)`.
    pub fn to_array<const R: usize>(&self) -> FixedArray<T, R>
    where
        T: Clone,
    {
        self.left.concat(self.right)
    }
}

impl<T, const N: usize, const M: usize> Clone for Concat<'_, T, N, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize, const M: usize> Copy for Concat<'_, T, N, M> {}

impl<'a, T, const N: usize, const M: usize> IntoIterator for Concat<'a, T, N, M> {
    type Item = &'a T;
    type IntoIter = Chain<Iter<'a, T>, Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, const N: usize, const M: usize> fmt::Debug for Concat<'_, T, N, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone, const N: usize, const M: usize, const R: usize> From<Concat<'_, T, N, M>>
    for FixedArray<T, R>
{
    fn from(concat: Concat<'_, T, N, M>) -> Self {
        concat.to_array()
    }
}

impl<'a, T, const N: usize, const M: usize> Add<&'a FixedArray<T, M>> for &'a FixedArray<T, N> {
    type Output = Concat<'a, T, N, M>;

    fn add(self, right: &'a FixedArray<T, M>) -> Concat<'a, T, N, M> {
        Concat { left: self, right }
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::{format, vec::Vec};

    use crate::FixedArray;

    #[test]
    fn add_reads_through_both_halves() {
        let left = FixedArray::new([1, 2]);
        let right = FixedArray::new([3, 4, 5]);
        let joined = &left + &right;

        assert_eq!(joined.size(), 5);
        assert_eq!(joined.get(0), Some(&1));
        assert_eq!(joined.get(2), Some(&3));
        assert_eq!(joined.get(4), Some(&5));
        assert_eq!(joined.get(5), None);
        assert_eq!(joined.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn add_converts_into_owned_array() {
        let left = FixedArray::new(['x']);
        let right = FixedArray::new(['y', 'z']);
        let owned: FixedArray<char, 3> = (&left + &right).into();
        assert_eq!(owned.into_inner(), ['x', 'y', 'z']);
    }

    #[test]
    fn add_with_empty_operand() {
        let left: FixedArray<u8, 0> = FixedArray::new([]);
        let right = FixedArray::new([9u8, 8]);
        let owned = FixedArray::<u8, 2>::from(&left + &right);
        assert_eq!(owned.into_inner(), [9, 8]);
    }

    #[test]
    fn debug_renders_joined_sequence() {
        let left = FixedArray::new([1]);
        let right = FixedArray::new([2]);
        assert_eq!(format!("{:?}", &left + &right), "[1, 2]");
    }
}
