use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{Operand, VariableRef},
    error::{Error, ValueError},
    interpreter::{
        evaluator::{arena::TransientArena, resolver},
        value::{core::Tensor, view::TensorView},
    },
};

/// Result type used by value-level operations.
///
/// Arithmetic, views and the resolver fail only with a [`ValueError`].
pub type ValueResult<T> = Result<T, ValueError>;

/// Result type used by the statement evaluator.
///
/// Evaluation mixes parsing and value resolution, so it fails with either
/// class of [`Error`].
pub type EvalResult<T> = Result<T, Error>;

/// Stores the interpreter state shared by every statement.
///
/// ## Usage
///
/// A `Session` is created once and fed one statement at a time through
/// [`Session::evaluate`]. Named variables persist across statements; the
/// transient arena must be emptied with [`Session::reset_transient_state`]
/// after each statement, whether it succeeded or failed.
#[derive(Debug, Default)]
pub struct Session {
    /// Every variable assigned so far. Entries are only ever inserted or
    /// replaced.
    pub variables:        HashMap<String, Tensor>,
    pub(crate) transient: TransientArena,
}

impl Session {
    /// Creates a session with no variables and an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(),
               transient: TransientArena::new(), }
    }

    /// Releases every value created by the previous statement.
    pub fn reset_transient_state(&mut self) {
        self.transient.clear();
    }

    /// Number of values currently held by the transient arena.
    #[must_use]
    pub fn transient_len(&self) -> usize {
        self.transient.len()
    }

    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Tensor> {
        self.variables.get(name)
    }

    /// Evaluates every statement in `source`, in order.
    ///
    /// The transient arena is reset after each statement. Evaluation stops at
    /// the first error; statements before it keep their effects.
    ///
    /// # Errors
    /// Returns the first syntax or value error encountered.
    ///
    /// # Example
    /// ```
    /// use matlang::Session;
    ///
    /// let mut session = Session::new();
    /// let results = session.evaluate_all("a = [1, 2, 3];\na[0, 2] = 9;\na;").unwrap();
    ///
    /// assert_eq!(results.last().unwrap().to_string(), "[9, 2, 9]");
    /// ```
    pub fn evaluate_all(&mut self, source: &str) -> EvalResult<Vec<Tensor>> {
        let mut results = Vec::new();
        let mut position = 0;

        while source.get(position..).is_some_and(|rest| !rest.trim().is_empty()) {
            let outcome = self.evaluate(position, source);
            self.reset_transient_state();

            let (next, value) = outcome?;
            position = next;
            results.push(value);
        }

        Ok(results)
    }

    /// Reads the value a variable reference points at.
    ///
    /// # Errors
    /// Returns `ValueError::UndefinedVariable` for an unknown name, or any
    /// resolver error for a bad index chain.
    pub fn get(&self, target: &VariableRef) -> ValueResult<Tensor> {
        let tensor = self.variables
                         .get(&target.name)
                         .ok_or_else(|| ValueError::UndefinedVariable { name: target.name.clone() })?;

        resolver::get(tensor, &target.slices)
    }

    /// Opens a writable view onto the storage a variable reference points at.
    ///
    /// # Errors
    /// Returns `ValueError::UndefinedVariable` for an unknown name, or any
    /// resolver error for a bad index chain.
    pub fn get_view(&mut self, target: &VariableRef) -> ValueResult<TensorView<'_>> {
        let tensor = self.variables
                         .get_mut(&target.name)
                         .ok_or_else(|| ValueError::UndefinedVariable { name: target.name.clone() })?;

        resolver::get_view(tensor, &target.slices)
    }

    /// Consumes an operand and returns the value it stands for.
    ///
    /// References are resolved against the variables at this moment, literals
    /// are returned as parsed and transient values are moved out of the arena.
    pub(crate) fn resolve(&mut self, operand: Operand) -> ValueResult<Tensor> {
        match operand {
            Operand::Reference(target) => self.get(&target),
            Operand::Literal(value) => Ok(value),
            Operand::Transient(slot) => Ok(self.transient.take(slot).unwrap_or_default()),
        }
    }

    /// Stores `value` into the location named by `target`.
    ///
    /// - A whole variable is created or replaced.
    /// - A location that resolves to a single position is overwritten with
    ///   `value`, whatever its shape.
    /// - Anything wider receives `value` through [`TensorView::update`].
    ///
    /// # Errors
    /// Propagates resolver errors and the size check of the update.
    pub fn assign(&mut self, target: &VariableRef, value: &Tensor) -> ValueResult<()> {
        if target.is_whole() {
            debug!(name = %target.name, %value, "assign variable");
            self.variables.insert(target.name.clone(), value.clone());
            return Ok(());
        }

        let mut view = self.get_view(target)?;
        if view.len() == 1 {
            debug!(name = %target.name, %value, "assign single position");
            view.set(0, value.clone());
            return Ok(());
        }

        debug!(name = %target.name, %value, positions = view.len(), "broadcast assign");
        view.update(value)
    }
}
