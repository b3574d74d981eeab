//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed-text tokens

/// Creates a Token instance from a kind, lexeme value and span.
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler for a token whose text is always the same.
///
/// The generated handler pushes a token of the given kind and advances
/// the lexer position by the token's length.
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: Regex| {
            lexer.push(MK_TOKEN!(
                $kind,
                String::from($value),
                Span {
                    start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
                    end: Position(
                        (lexer.pos + $value.len() as i32) as u32,
                        Rc::clone(&lexer.file)
                    )
                }
            ));
            lexer.advance_n($value.len().try_into().unwrap());
        }
    };
}
