use std::any::Any;

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expr, ExprType, ExprWrapper},
    types::BuiltinType,
};

// LITERALS

/// String Literal
/// The lexeme survives unchanged into the emitted constant.
#[derive(Debug, Clone)]
pub struct StringLiteralExpr {
    pub value: String,
    pub is_return_value_used: bool,
    pub span: Span,
}

impl Expr for StringLiteralExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::StringLiteral
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_return_type(&self) -> Option<&str> {
        Some(BuiltinType::String.as_str())
    }
    fn set_return_value_used(&mut self) {
        self.is_return_value_used = true;
    }
    fn is_return_value_used(&self) -> bool {
        self.is_return_value_used
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Integer Literal
#[derive(Debug, Clone)]
pub struct IntegerLiteralExpr {
    pub value: String,
    pub is_return_value_used: bool,
    pub span: Span,
}

impl Expr for IntegerLiteralExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::IntegerLiteral
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_return_type(&self) -> Option<&str> {
        Some(BuiltinType::Int32.as_str())
    }
    fn set_return_value_used(&mut self) {
        self.is_return_value_used = true;
    }
    fn is_return_value_used(&self) -> bool {
        self.is_return_value_used
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Float Literal
#[derive(Debug, Clone)]
pub struct FloatLiteralExpr {
    pub value: String,
    pub is_return_value_used: bool,
    pub span: Span,
}

impl Expr for FloatLiteralExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::FloatLiteral
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_return_type(&self) -> Option<&str> {
        Some(BuiltinType::Float32.as_str())
    }
    fn set_return_value_used(&mut self) {
        self.is_return_value_used = true;
    }
    fn is_return_value_used(&self) -> bool {
        self.is_return_value_used
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

// COMPLEX

/// Variable Expression
/// Reference to a declared binding. Doubles as the declaration-only node
/// produced by `var`/`val` without an initialiser, in which case
/// `is_to_set` is true.
///
/// `slot_index` is the slot assigned at declaration and is stable for the
/// binding's lifetime.
#[derive(Debug, Clone)]
pub struct VariableExpr {
    pub name: String,
    pub return_type: Option<String>,
    pub slot_index: usize,
    pub is_mutable: bool,
    pub is_to_set: bool,
    pub is_return_value_used: bool,
    pub span: Span,
}

impl Expr for VariableExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Variable
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }
    fn set_return_value_used(&mut self) {
        self.is_return_value_used = true;
    }
    fn is_return_value_used(&self) -> bool {
        self.is_return_value_used
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Assignment Expression
/// Stores the initialiser of a declaration into the declared slot.
///
/// The assignee is always a variable marked `is_to_set`, never a computed
/// expression. An assignment consumes the rhs value and leaves nothing on
/// the stack.
#[derive(Debug)]
pub struct AssignmentExpr {
    pub assignee: VariableExpr,
    pub value: ExprWrapper,
    pub is_return_value_used: bool,
    pub span: Span,
}

impl Expr for AssignmentExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Assignment
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_return_type(&self) -> Option<&str> {
        self.assignee.return_type.as_deref()
    }
    fn set_return_value_used(&mut self) {
        self.is_return_value_used = true;
    }
    fn is_return_value_used(&self) -> bool {
        self.is_return_value_used
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(AssignmentExpr {
            assignee: self.assignee.clone(),
            value: self.value.clone_wrapper(),
            is_return_value_used: self.is_return_value_used,
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
///
/// The result type is taken from the lhs, it is not separately validated.
#[derive(Debug)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub is_return_value_used: bool,
    pub span: Span,
}

impl Expr for BinaryExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_return_type(&self) -> Option<&str> {
        self.left.get_return_type()
    }
    fn set_return_value_used(&mut self) {
        self.is_return_value_used = true;
    }
    fn is_return_value_used(&self) -> bool {
        self.is_return_value_used
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(BinaryExpr {
            left: self.left.clone_wrapper(),
            operator: self.operator.clone(),
            right: self.right.clone_wrapper(),
            is_return_value_used: self.is_return_value_used,
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Who receives a call.
#[derive(Debug, Clone)]
pub enum CallTarget {
    /// Free function addressed by (possibly dotted) name.
    Function,
    /// Instance method on a declared variable.
    Instance(VariableExpr),
}

/// Call Expression
/// One node covers both free-function and instance-method calls,
/// discriminated by `target`.
#[derive(Debug)]
pub struct CallExpr {
    pub target: CallTarget,
    pub name: String,
    pub arguments: Vec<ExprWrapper>,
    pub return_type: String,
    pub is_return_value_used: bool,
    pub span: Span,
}

impl Expr for CallExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_return_type(&self) -> Option<&str> {
        Some(&self.return_type)
    }
    fn set_return_value_used(&mut self) {
        self.is_return_value_used = true;
    }
    fn is_return_value_used(&self) -> bool {
        self.is_return_value_used
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        let cloned_args = self
            .arguments
            .iter()
            .map(|x| x.clone_wrapper())
            .collect::<Vec<ExprWrapper>>();

        ExprWrapper::new(CallExpr {
            target: self.target.clone(),
            name: self.name.clone(),
            arguments: cloned_args,
            return_type: self.return_type.clone(),
            is_return_value_used: self.is_return_value_used,
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}
