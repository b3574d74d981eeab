use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

lazy_static! {
    /// Binding power of each binary operator, keyed on the full token
    /// kind so operators sharing a leading character cannot collide.
    pub static ref BINOP_PRECEDENCE: HashMap<TokenKind, i32> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Less, 10);
        map.insert(TokenKind::Plus, 20);
        map.insert(TokenKind::Dash, 20);
        map.insert(TokenKind::Star, 40);
        map.insert(TokenKind::Assignment, 100);
        map
    };
}

/// Precedence of the given token, or -1 when it does not start a binary
/// operator. -1 compares below every climbing threshold, so an unknown
/// token always terminates the loop.
pub fn precedence_of(kind: TokenKind) -> i32 {
    *BINOP_PRECEDENCE.get(&kind).unwrap_or(&-1)
}
