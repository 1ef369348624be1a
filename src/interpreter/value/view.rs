use tracing::trace;

use crate::{
    error::ValueError,
    interpreter::{
        evaluator::{binary::mul, core::ValueResult},
        value::{core::Tensor, slice::Slice},
    },
};

/// A mutable, index-remapped window over the children of a container.
///
/// Position `i` of the view is the child at `slice[i]` of the borrowed list.
/// The view never owns what it points at: the container it borrows from is
/// either stored in a variable or kept in the session's transient arena, and
/// the borrow checker keeps the view from outliving either.
#[derive(Debug)]
pub struct TensorView<'a> {
    items: &'a mut Vec<Tensor>,
    slice: Slice,
}

impl<'a> TensorView<'a> {
    /// Creates a view selecting `slice` out of `items`.
    ///
    /// # Errors
    /// Returns `ValueError::IndexOutOfBounds` if any index of the slice is not
    /// below `items.len()`.
    pub fn new(items: &'a mut Vec<Tensor>, slice: Slice) -> ValueResult<Self> {
        slice.check_bounds(items.len())?;
        Ok(Self { items, slice })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slice.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    #[must_use]
    pub const fn slice(&self) -> &Slice {
        &self.slice
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tensor> {
        let target = *self.slice.indices().get(index)?;
        self.items.get(target)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tensor> {
        let target = *self.slice.indices().get(index)?;
        self.items.get_mut(target)
    }

    /// Iterates over the selected children in slice order.
    pub fn iter(&self) -> impl Iterator<Item = &Tensor> + '_ {
        self.slice.iter().filter_map(|target| self.items.get(target))
    }

    /// Copies the selected children into a new container.
    #[must_use]
    pub fn to_tensor(&self) -> Tensor {
        self.iter().cloned().collect()
    }

    /// Replaces the child at view position `index` with `value`.
    ///
    /// Positions past the end of the view are ignored.
    pub fn set(&mut self, index: usize, value: Tensor) {
        if let Some(slot) = self.get_mut(index) {
            *slot = value;
        }
    }

    /// Writes `value` through the view.
    ///
    /// - A container must have as many children as the view has positions;
    ///   each position is replaced by the matching child.
    /// - A scalar is broadcast: every scalar position is overwritten with it.
    ///   Positions holding a container are left untouched.
    ///
    /// Writes happen in view order, so a later duplicate index wins.
    ///
    /// # Errors
    /// Returns `ValueError::SizeMismatch` if a container `value` does not
    /// match the length of the view. Nothing is written in that case.
    ///
    /// # Example
    /// ```
    /// use matlang::{Slice, Tensor, TensorView};
    ///
    /// let mut items = vec![Tensor::Scalar(1.0), Tensor::Scalar(2.0), Tensor::Scalar(3.0)];
    /// let mut view = TensorView::new(&mut items, Slice::new(vec![0, 2])).unwrap();
    /// view.update(&Tensor::Scalar(9.0)).unwrap();
    ///
    /// assert_eq!(Tensor::from(items).to_string(), "[9, 2, 9]");
    /// ```
    pub fn update(&mut self, value: &Tensor) -> ValueResult<()> {
        match value {
            Tensor::Container(values) => {
                if values.len() != self.len() {
                    return Err(ValueError::SizeMismatch);
                }

                for (index, value) in values.iter().enumerate() {
                    self.set(index, value.clone());
                }
            },
            Tensor::Scalar(x) => {
                for index in 0..self.len() {
                    match self.get_mut(index) {
                        Some(Tensor::Scalar(slot)) => *slot = *x,
                        Some(Tensor::Container(_)) => {
                            trace!(position = index, "broadcast skipped a container slot");
                        },
                        None => {},
                    }
                }
            },
        }

        Ok(())
    }

    /// Multiplies the viewed children by `rhs` in place.
    ///
    /// # Errors
    /// Returns `ValueError::TypeMismatch` when `rhs` is a container.
    pub fn mul_assign(&mut self, rhs: &Tensor) -> ValueResult<()> {
        let product = mul(&*self, rhs)?;
        self.update(&product)
    }
}
