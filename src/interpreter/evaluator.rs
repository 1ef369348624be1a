/// Broadcast arithmetic.
///
/// Implements `+`, `-` and `*` over scalars, containers and views, with the
/// shape rules of the language: elementwise for equal-length containers under
/// `+`/`-`, scalar broadcast only under `*`.
pub mod binary;

/// Unary operator evaluation.
///
/// Applies unary `+` and `-` in place, as multiplication by `1` or `-1`, on
/// values parked in the transient arena.
pub mod unary;

/// Core evaluation state.
///
/// Contains the `Session`, which owns the variable environment and the
/// transient arena, and the result aliases shared by the evaluator.
pub mod core;

/// Per-statement storage.
///
/// Keeps alive the intermediate values of one statement so views can be
/// opened over them. Cleared between statements.
pub mod arena;

/// Variable resolution.
///
/// Walks a stored tensor along a chain of slices to produce either a copied
/// value (reads) or a view into the stored value (writes).
pub mod resolver;
