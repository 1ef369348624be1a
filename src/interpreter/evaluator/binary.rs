use tracing::trace;

use crate::{
    ast::OperatorKind,
    error::ValueError,
    interpreter::{
        evaluator::core::ValueResult,
        value::{core::Tensor, view::TensorView},
    },
};

/// The shape of an operand as seen by the arithmetic dispatch.
///
/// Scalars, containers and views all reduce to one of these two forms, so the
/// combination rules only have to be written once.
#[derive(Debug)]
pub enum Shape<'a> {
    /// A single number.
    Flat(f64),
    /// An ordered list of children, possibly remapped through a view.
    Items(Vec<&'a Tensor>),
}

/// Anything that can take part in tensor arithmetic.
pub trait Shaped {
    fn shape(&self) -> Shape<'_>;
}

impl Shaped for Tensor {
    fn shape(&self) -> Shape<'_> {
        match self {
            Self::Scalar(x) => Shape::Flat(*x),
            Self::Container(items) => Shape::Items(items.iter().collect()),
        }
    }
}

impl Shaped for TensorView<'_> {
    fn shape(&self) -> Shape<'_> {
        Shape::Items(self.iter().collect())
    }
}

/// Adds two operands.
///
/// Scalars add normally; containers of equal length add elementwise and
/// recursively. A scalar is never broadcast across a container.
///
/// # Errors
/// Returns `ValueError::SizeMismatch` when the lengths differ at any level or
/// when a scalar meets a container.
///
/// # Example
/// ```
/// use matlang::{Tensor, interpreter::evaluator::binary::add};
///
/// let a = Tensor::from(vec![1.0, 2.0]);
/// let b = Tensor::from(vec![10.0, 20.0]);
/// assert_eq!(add(&a, &b).unwrap(), Tensor::from(vec![11.0, 22.0]));
/// assert!(add(&a, &Tensor::Scalar(1.0)).is_err());
/// ```
pub fn add<L, R>(lhs: &L, rhs: &R) -> ValueResult<Tensor>
    where L: Shaped + ?Sized,
          R: Shaped + ?Sized
{
    elementwise(lhs.shape(), rhs.shape(), &|a, b| a + b)
}

/// Subtracts `rhs` from `lhs` with the same shape rules as [`add`].
///
/// # Errors
/// Returns `ValueError::SizeMismatch` when the shapes differ.
pub fn sub<L, R>(lhs: &L, rhs: &R) -> ValueResult<Tensor>
    where L: Shaped + ?Sized,
          R: Shaped + ?Sized
{
    elementwise(lhs.shape(), rhs.shape(), &|a, b| a - b)
}

/// Multiplies two operands.
///
/// A scalar multiplies into every element of a container, at every nesting
/// level, on either side. Two containers are never multiplied.
///
/// # Errors
/// Returns `ValueError::TypeMismatch` when both operands are containers,
/// at the top level or anywhere a broadcast reaches.
///
/// # Example
/// ```
/// use matlang::{Tensor, interpreter::evaluator::binary::mul};
///
/// let a = Tensor::from(vec![Tensor::from(vec![1.0, 2.0]), Tensor::Scalar(3.0)]);
/// assert_eq!(mul(&Tensor::Scalar(2.0), &a).unwrap().to_string(), "[[2, 4], 6]");
/// assert!(mul(&a, &a).is_err());
/// ```
pub fn mul<L, R>(lhs: &L, rhs: &R) -> ValueResult<Tensor>
    where L: Shaped + ?Sized,
          R: Shaped + ?Sized
{
    match (lhs.shape(), rhs.shape()) {
        (Shape::Flat(a), Shape::Flat(b)) => Ok(Tensor::Scalar(a * b)),
        (Shape::Items(items), Shape::Flat(k)) => {
            items.into_iter().map(|item| mul(item, &Tensor::Scalar(k))).collect()
        },
        (Shape::Flat(k), Shape::Items(items)) => {
            items.into_iter().map(|item| mul(&Tensor::Scalar(k), item)).collect()
        },
        (Shape::Items(_), Shape::Items(_)) => Err(ValueError::TypeMismatch),
    }
}

/// Applies a binary operator to two resolved operands.
///
/// # Errors
/// Propagates the shape errors of the operator. Unary operators and the
/// grouping sentinel are not binary and yield `ValueError::TypeMismatch`.
pub fn eval_binary(op: OperatorKind, lhs: &Tensor, rhs: &Tensor) -> ValueResult<Tensor> {
    let result = match op {
        OperatorKind::Add => add(lhs, rhs),
        OperatorKind::Subtract => sub(lhs, rhs),
        OperatorKind::Multiply => mul(lhs, rhs),
        OperatorKind::Group | OperatorKind::UnaryNegate | OperatorKind::UnaryIdentity => {
            Err(ValueError::TypeMismatch)
        },
    }?;

    trace!(%lhs, %rhs, %result, "{}", op.symbol());
    Ok(result)
}

fn elementwise<F>(lhs: Shape<'_>, rhs: Shape<'_>, f: &F) -> ValueResult<Tensor>
    where F: Fn(f64, f64) -> f64
{
    match (lhs, rhs) {
        (Shape::Flat(a), Shape::Flat(b)) => Ok(Tensor::Scalar(f(a, b))),
        (Shape::Items(left), Shape::Items(right)) => {
            if left.len() != right.len() {
                return Err(ValueError::SizeMismatch);
            }

            left.into_iter()
                .zip(right)
                .map(|(l, r)| elementwise(l.shape(), r.shape(), f))
                .collect()
        },
        _ => Err(ValueError::SizeMismatch),
    }
}
