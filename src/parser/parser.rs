//! Parser state and token-cursor helpers.
//!
//! The Parser struct owns the token stream and the method signature
//! table consulted for instance-call return types. The grammar itself
//! lives in the `expr` module; the function scope is passed explicitly
//! into those functions rather than being stored here.

use std::rc::Rc;

use crate::{
    ast::ast::ExprWrapper,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    scope::scope::{FunctionScope, MethodTable},
    Position,
};

use super::expr::parse_expression;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream, tracks the current position in
/// it, and provides methods for token consumption.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: i32,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Known instance-method signatures, consulted for call return types
    methods: MethodTable,
}

impl Parser {
    /// Creates a new Parser instance over a token stream.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            methods: MethodTable::new(),
        }
    }

    /// Replaces the method signature table consulted during parsing.
    pub fn with_method_table(mut self, methods: MethodTable) -> Self {
        self.methods = methods;
        self
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos as usize).unwrap()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.get(self.pos as usize).unwrap().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        self.tokens.get((self.pos - 1) as usize).unwrap()
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns
    /// the supplied error or a default syntax error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::SyntaxError {
                        token: token.value.clone(),
                        message: format!("expected {}", expected_kind),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos + 1 < self.tokens.len() as i32 && self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the method signature table.
    pub fn get_method_table(&self) -> &MethodTable {
        &self.methods
    }

    /// Returns the source position of the current token, or the start of
    /// the file when the cursor has run past the stream.
    pub fn get_position(&self) -> Position {
        match self.tokens.get(self.pos as usize) {
            Some(token) => token.span.start.clone(),
            None => Position(0, Rc::clone(&self.file)),
        }
    }
}

/// Parses every expression in a token stream against one shared scope.
///
/// This is the convenience entry point used by the driver and the tests:
/// expressions are parsed back to back until EOF, so a declaration made
/// by one expression is visible to the ones after it. The first error
/// aborts the whole run.
pub fn parse_expressions(
    tokens: Vec<Token>,
    file: Rc<String>,
    methods: MethodTable,
) -> Result<Vec<ExprWrapper>, Error> {
    let mut parser = Parser::new(tokens, file).with_method_table(methods);
    let mut scope = FunctionScope::new();

    let mut expressions = vec![];
    while parser.has_tokens() {
        expressions.push(parse_expression(&mut parser, &mut scope)?);
    }

    Ok(expressions)
}
