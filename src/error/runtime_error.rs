use thiserror::Error;

/// Represents all errors that can occur while resolving and combining values.
///
/// These errors are raised during evaluation and are not tied to a source
/// position: the statement parsed fine, but the values it refers to do not
/// fit together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Tried to read a variable that was never assigned.
    #[error("{name} is not defined")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// An index group selected a position past the end of its dimension.
    #[error("index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds {
        /// The largest index requested by the group.
        index: usize,
        /// The size of the dimension being indexed.
        size:  usize,
    },
    /// An index group tried to descend into a scalar.
    #[error("invalid dimension")]
    InvalidDimension,
    /// More than one index was selected on a dimension that is not the last
    /// one addressed.
    #[error("slices are allowed only on a final dimension")]
    SliceNotFinal,
    /// Operands of `+` or `-` do not have the same shape, or an assigned
    /// container does not match the length of its target.
    #[error("size mismatch")]
    SizeMismatch,
    /// A scalar was used where a container is required, or two containers
    /// were multiplied.
    #[error("type mismatch")]
    TypeMismatch,
}
