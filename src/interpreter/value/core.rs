use std::fmt;

use crate::{
    error::ValueError,
    interpreter::{
        evaluator::{binary::mul, core::ValueResult},
        value::{slice::Slice, view::TensorView},
    },
};

/// Represents a value of the language.
///
/// A tensor is either a scalar or an ordered list of tensors. Nothing forces
/// the children of a container to share a shape, so ragged values such as
/// `[1, [2, 3]]` are ordinary tensors.
#[derive(Debug, Clone, PartialEq)]
pub enum Tensor {
    /// A double precision number.
    Scalar(f64),
    /// An ordered list of child tensors.
    Container(Vec<Self>),
}

impl Default for Tensor {
    fn default() -> Self {
        Self::Scalar(0.0)
    }
}

impl From<f64> for Tensor {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<Self>> for Tensor {
    fn from(items: Vec<Self>) -> Self {
        Self::Container(items)
    }
}

impl From<Vec<f64>> for Tensor {
    fn from(values: Vec<f64>) -> Self {
        Self::Container(values.into_iter().map(Self::Scalar).collect())
    }
}

impl FromIterator<Self> for Tensor {
    fn from_iter<T: IntoIterator<Item = Self>>(iter: T) -> Self {
        Self::Container(iter.into_iter().collect())
    }
}

impl Tensor {
    /// Returns `true` if the tensor is a [`Tensor::Scalar`].
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(..))
    }

    /// Returns `true` if the tensor is a [`Tensor::Container`].
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Container(..))
    }

    #[must_use]
    pub const fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(x) => Some(*x),
            Self::Container(_) => None,
        }
    }

    /// Returns the number of children of a container.
    ///
    /// # Errors
    /// Returns `ValueError::TypeMismatch` for a scalar, which has no
    /// dimension to measure.
    pub fn size(&self) -> ValueResult<usize> {
        self.items().map(<[Self]>::len)
    }

    /// Borrows the children of a container.
    ///
    /// # Errors
    /// Returns `ValueError::TypeMismatch` for a scalar.
    pub fn items(&self) -> ValueResult<&[Self]> {
        match self {
            Self::Container(items) => Ok(items),
            Self::Scalar(_) => Err(ValueError::TypeMismatch),
        }
    }

    /// Mutably borrows the children of a container.
    ///
    /// # Errors
    /// Returns `ValueError::TypeMismatch` for a scalar.
    pub fn items_mut(&mut self) -> ValueResult<&mut Vec<Self>> {
        match self {
            Self::Container(items) => Ok(items),
            Self::Scalar(_) => Err(ValueError::TypeMismatch),
        }
    }

    /// Opens a view over every child of a container, in order.
    ///
    /// # Errors
    /// Returns `ValueError::TypeMismatch` for a scalar.
    pub fn view_mut(&mut self) -> ValueResult<TensorView<'_>> {
        let items = self.items_mut()?;
        let slice = Slice::full(items.len());
        TensorView::new(items, slice)
    }

    /// Multiplies the tensor by `rhs` and stores the product in place.
    ///
    /// The product is computed with the broadcasting rules of `*` and then
    /// copied back into the existing storage. A scalar multiplied by a
    /// container takes the container's shape.
    ///
    /// # Errors
    /// Propagates the errors of `*`, e.g. `ValueError::TypeMismatch` when both
    /// sides are containers.
    ///
    /// # Example
    /// ```
    /// use matlang::Tensor;
    ///
    /// let mut t = Tensor::from(vec![1.0, -2.0]);
    /// t.mul_assign(&Tensor::Scalar(-1.0)).unwrap();
    /// assert_eq!(t.to_string(), "[-1, 2]");
    /// ```
    pub fn mul_assign(&mut self, rhs: &Self) -> ValueResult<()> {
        match self {
            Self::Scalar(_) => {
                *self = mul(&*self, rhs)?;
                Ok(())
            },
            Self::Container(_) => self.view_mut()?.mul_assign(rhs),
        }
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(x) => write!(f, "{x}"),
            Self::Container(items) => {
                write!(f, "[")?;

                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{item}")?;
                }

                write!(f, "]")
            },
        }
    }
}
