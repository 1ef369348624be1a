/// Index selections.
///
/// Defines the `Slice` type: an ordered list of indices selecting positions
/// along one dimension. Duplicates and arbitrary order are permitted; bounds
/// are checked when the slice is applied, not when it is parsed.
pub mod slice;
/// Index-remapped windows.
///
/// Defines `TensorView`, a mutable window over the children of a container
/// that reads and writes through a `Slice`. Views are how sliced assignment
/// and in-place updates reach into stored values.
pub mod view;

/// The recursive value type.
///
/// Defines `Tensor`, which is either a scalar or an ordered list of tensors,
/// together with its printer and its in-place compound update.
pub mod core;

pub use self::{core::Tensor, slice::Slice, view::TensorView};
