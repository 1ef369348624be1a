use crate::error::ValueError;

/// An ordered selection of positions along one dimension.
///
/// Produced by one bracket group such as `[0, 2]`. Indices may repeat and may
/// appear in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slice(Vec<usize>);

impl Slice {
    #[must_use]
    pub const fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Selects every position of a dimension of size `len`, in order.
    #[must_use]
    pub fn full(len: usize) -> Self {
        Self((0..len).collect())
    }

    /// Selects exactly one position.
    #[must_use]
    pub fn single(index: usize) -> Self {
        Self(vec![index])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Returns the index when the slice selects exactly one position.
    #[must_use]
    pub fn as_single(&self) -> Option<usize> {
        match self.0.as_slice() {
            [index] => Some(*index),
            _ => None,
        }
    }

    /// Checks that every index fits in a dimension of `size` elements.
    ///
    /// # Errors
    /// Returns `ValueError::IndexOutOfBounds` carrying the largest index when
    /// it is not below `size`.
    ///
    /// # Example
    /// ```
    /// use matlang::{Slice, error::ValueError};
    ///
    /// let slice = Slice::new(vec![2, 0, 2]);
    /// assert!(slice.check_bounds(3).is_ok());
    /// assert_eq!(slice.check_bounds(2),
    ///            Err(ValueError::IndexOutOfBounds { index: 2, size: 2 }));
    /// ```
    pub fn check_bounds(&self, size: usize) -> Result<(), ValueError> {
        match self.0.iter().max() {
            Some(&index) if index >= size => Err(ValueError::IndexOutOfBounds { index, size }),
            _ => Ok(()),
        }
    }
}

impl From<Vec<usize>> for Slice {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl FromIterator<usize> for Slice {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
