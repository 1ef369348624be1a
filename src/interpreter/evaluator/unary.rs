use tracing::trace;

use crate::{
    ast::{OperatorKind, Operand},
    error::ValueError,
    interpreter::{
        evaluator::{arena::SlotId, core::{Session, ValueResult}},
        value::core::Tensor,
    },
};

impl Session {
    /// Applies a unary operator to an operand and returns the slot holding
    /// the result.
    ///
    /// Unary `-` and `+` are multiplication by `-1` and `1`. The operand is
    /// moved into the transient arena first (unless it already lives there)
    /// and multiplied in place there.
    ///
    /// # Errors
    /// Returns `ValueError::TypeMismatch` if `op` is not a unary operator,
    /// and propagates resolver errors for references.
    pub(crate) fn eval_unary(&mut self, op: OperatorKind, operand: Operand) -> ValueResult<SlotId> {
        let factor = Tensor::Scalar(op.unary_factor().ok_or(ValueError::TypeMismatch)?);

        let slot = match operand {
            Operand::Transient(slot) => slot,
            other => {
                let value = self.resolve(other)?;
                self.transient.alloc(value)
            },
        };

        if let Some(value) = self.transient.get_mut(slot) {
            value.mul_assign(&factor)?;
        }

        if let Some(result) = self.transient.get(slot) {
            trace!(%result, "{}", op.symbol());
        }

        Ok(slot)
    }
}
