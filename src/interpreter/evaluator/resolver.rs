use crate::{
    error::ValueError,
    interpreter::{
        evaluator::core::ValueResult,
        value::{core::Tensor, slice::Slice, view::TensorView},
    },
};

/// Reads the part of `tensor` addressed by `slices`, one slice per dimension.
///
/// - No slices: the whole tensor.
/// - Last slice with one index: that child.
/// - Last slice with several indices: a new container holding the selected
///   children in slice order.
/// - Any earlier slice must select exactly one child, which must itself be a
///   container to descend into.
///
/// # Errors
/// - `ValueError::TypeMismatch` when indexing a scalar.
/// - `ValueError::IndexOutOfBounds` when an index is not below the size of
///   its dimension.
/// - `ValueError::SliceNotFinal` when a non-final slice selects several
///   children.
/// - `ValueError::InvalidDimension` when a non-final slice selects a scalar.
///
/// # Example
/// ```
/// use matlang::{Slice, Tensor, interpreter::evaluator::resolver::get};
///
/// let a = Tensor::from(vec![10.0, 20.0, 30.0]);
/// assert_eq!(get(&a, &[Slice::single(1)]).unwrap(), Tensor::Scalar(20.0));
/// assert_eq!(get(&a, &[Slice::new(vec![0, 2])]).unwrap().to_string(), "[10, 30]");
/// assert!(get(&a, &[Slice::single(3)]).is_err());
/// ```
pub fn get(tensor: &Tensor, slices: &[Slice]) -> ValueResult<Tensor> {
    let Some((slice, rest)) = slices.split_first() else {
        return Ok(tensor.clone());
    };

    let items = tensor.items()?;
    slice.check_bounds(items.len())?;

    if rest.is_empty() {
        return Ok(match slice.as_single() {
            Some(index) => items[index].clone(),
            None => slice.iter().map(|index| items[index].clone()).collect(),
        });
    }

    let child = &items[narrow(slice)?];
    if child.is_scalar() {
        return Err(ValueError::InvalidDimension);
    }

    get(child, rest)
}

/// Opens a writable view onto the part of `tensor` addressed by `slices`.
///
/// Follows the same walk as [`get`], but the final slice produces a view:
///
/// - one index on a container child: a view over all of that child's
///   children, so it can be updated in place;
/// - one index on a scalar child: a single-position view over the parent, so
///   the scalar can still be overwritten;
/// - several indices: a view over the selected children of the parent.
///
/// With no slices at all the view covers every child of `tensor`.
///
/// # Errors
/// The same errors as [`get`].
pub fn get_view<'a>(tensor: &'a mut Tensor, slices: &[Slice]) -> ValueResult<TensorView<'a>> {
    let Some((slice, rest)) = slices.split_first() else {
        return tensor.view_mut();
    };

    let items = tensor.items_mut()?;
    slice.check_bounds(items.len())?;

    if rest.is_empty() {
        if let Some(index) = slice.as_single()
           && items[index].is_container()
        {
            return items[index].view_mut();
        }

        return TensorView::new(items, slice.clone());
    }

    let index = narrow(slice)?;
    if items[index].is_scalar() {
        return Err(ValueError::InvalidDimension);
    }

    get_view(&mut items[index], rest)
}

fn narrow(slice: &Slice) -> ValueResult<usize> {
    slice.as_single().ok_or(ValueError::SliceNotFinal)
}
