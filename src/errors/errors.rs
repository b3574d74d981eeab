use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::MissingType { .. } => "MissingTypeError",
            ErrorImpl::UnresolvedVariable { .. } => "UnresolvedVariableError",
            ErrorImpl::UnsupportedConstruct { .. } => "UnsupportedConstructError",
            ErrorImpl::CodeGen { .. } => "CodeGenError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::SyntaxError { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::MissingType { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` needs a type annotation or an initial value",
                variable
            )),
            ErrorImpl::UnresolvedVariable { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::UnsupportedConstruct { token } => {
                ErrorTip::Suggestion(format!("No expression starts with `{}`", token))
            }
            ErrorImpl::CodeGen { message } => ErrorTip::Suggestion(message.clone()),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    SyntaxError { token: String, message: String },
    #[error("variable {variable:?} declared without a type or initial value")]
    MissingType { variable: String },
    #[error("variable {variable:?} not declared")]
    UnresolvedVariable { variable: String },
    #[error("no parse rule for token: {token:?}")]
    UnsupportedConstruct { token: String },
    #[error("cannot generate code: {message}")]
    CodeGen { message: String },
}
