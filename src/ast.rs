use crate::interpreter::{
    evaluator::arena::SlotId,
    value::{core::Tensor, slice::Slice},
};

/// The operators of the expression language.
///
/// Unary and binary forms of `+` and `-` are distinct operators: which one a
/// `-` token becomes is decided by the parser state, not by lookahead, and
/// each form has its own precedence and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    /// The `(` sentinel, which also marks the bottom of the operator stack.
    Group,
    /// Prefix `-`.
    UnaryNegate,
    /// Prefix `+`.
    UnaryIdentity,
    /// Binary `+`.
    Add,
    /// Binary `-`.
    Subtract,
    /// Binary `*`.
    Multiply,
}

impl OperatorKind {
    /// Binding strength; higher binds tighter.
    ///
    /// # Example
    /// ```
    /// use matlang::ast::OperatorKind;
    ///
    /// assert!(OperatorKind::Multiply.precedence() > OperatorKind::Add.precedence());
    /// assert!(OperatorKind::UnaryNegate.precedence() > OperatorKind::Multiply.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Group => 0,
            Self::Add | Self::Subtract => 1,
            Self::Multiply => 3,
            Self::UnaryNegate | Self::UnaryIdentity => 4,
        }
    }

    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::UnaryNegate | Self::UnaryIdentity)
    }

    /// The scalar a unary operator multiplies its operand by.
    #[must_use]
    pub const fn unary_factor(self) -> Option<f64> {
        match self {
            Self::UnaryNegate => Some(-1.0),
            Self::UnaryIdentity => Some(1.0),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Group => "(",
            Self::UnaryNegate => "unary -",
            Self::UnaryIdentity => "unary +",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
        }
    }
}

/// A variable name followed by zero or more index groups.
///
/// `a[1, 2][0]` is the name `a` with the slices `[1, 2]` and `[0]`, one per
/// dimension addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRef {
    pub name:   String,
    pub slices: Vec<Slice>,
}

impl VariableRef {
    #[must_use]
    pub const fn new(name: String, slices: Vec<Slice>) -> Self {
        Self { name, slices }
    }

    /// Returns `true` if the reference names a whole variable.
    #[must_use]
    pub fn is_whole(&self) -> bool {
        self.slices.is_empty()
    }
}

/// An entry on the operand stack of the expression evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A variable reference, resolved only when an operator consumes it.
    Reference(VariableRef),
    /// A value parsed directly from the source: a number or an array literal.
    Literal(Tensor),
    /// An intermediate result held in the transient arena.
    Transient(SlotId),
}
