use std::{any::Any, fmt::Debug};

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    StringLiteral,
    IntegerLiteral,
    FloatLiteral,
    Variable,
    Assignment,
    Binary,
    Call,
}

pub trait Expr: Debug {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref::<T>()`
    fn as_any(&self) -> &dyn Any;
    /// The semantic type of the value this expression leaves on the
    /// evaluation stack, or None while it is still unresolved.
    fn get_return_type(&self) -> Option<&str>;
    /// Marks the produced value as kept on the stack by the parent.
    ///
    /// The only mutation an expression sees after construction.
    fn set_return_value_used(&mut self);
    /// Whether the parent keeps the produced value on the stack.
    fn is_return_value_used(&self) -> bool;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Returns the span of the expression.
    fn get_span(&self) -> &crate::Span;
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }
}

impl Expr for ExprWrapper {
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn get_return_type(&self) -> Option<&str> {
        self.0.get_return_type()
    }
    fn set_return_value_used(&mut self) {
        self.0.set_return_value_used()
    }
    fn is_return_value_used(&self) -> bool {
        self.0.is_return_value_used()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &crate::Span {
        self.0.get_span()
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}
