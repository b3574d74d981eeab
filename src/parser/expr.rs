use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{
            AssignmentExpr, BinaryExpr, CallExpr, CallTarget, FloatLiteralExpr,
            IntegerLiteralExpr, StringLiteralExpr, VariableExpr,
        },
        types::BuiltinType,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    scope::scope::{FunctionScope, MethodSignatureSource},
    Position, Span,
};

use super::{lookups::precedence_of, parser::Parser};

pub fn parse_expression(parser: &mut Parser, scope: &mut FunctionScope) -> Result<ExprWrapper, Error> {
    let lhs = parse_primary_expr(parser, scope)?;
    parse_binop_rhs(parser, scope, 0, lhs)
}

pub fn parse_primary_expr(parser: &mut Parser, scope: &mut FunctionScope) -> Result<ExprWrapper, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => parse_identifier_expr(parser, scope, None),
        TokenKind::String => {
            let token = parser.advance().clone();
            Ok(ExprWrapper::new(StringLiteralExpr {
                value: token.value,
                is_return_value_used: false,
                span: token.span,
            }))
        }
        TokenKind::Integer => {
            let token = parser.advance().clone();
            Ok(ExprWrapper::new(IntegerLiteralExpr {
                value: token.value,
                is_return_value_used: false,
                span: token.span,
            }))
        }
        TokenKind::Float => {
            let token = parser.advance().clone();
            Ok(ExprWrapper::new(FloatLiteralExpr {
                value: token.value,
                is_return_value_used: false,
                span: token.span,
            }))
        }
        TokenKind::Var | TokenKind::Val => parse_var_decl_expr(parser, scope),
        _ => Err(Error::new(
            ErrorImpl::UnsupportedConstruct {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_binop_rhs(
    parser: &mut Parser,
    scope: &mut FunctionScope,
    expression_precedence: i32,
    mut lhs: ExprWrapper,
) -> Result<ExprWrapper, Error> {
    loop {
        let token_precedence = precedence_of(parser.current_token_kind());
        if token_precedence < expression_precedence {
            return Ok(lhs);
        }

        let operator = parser.advance().clone();

        let mut rhs = parse_primary_expr(parser, scope)?;
        rhs.set_return_value_used();

        // A tighter-binding operator after rhs claims rhs as its own lhs
        let next_precedence = precedence_of(parser.current_token_kind());
        if token_precedence < next_precedence {
            rhs = parse_binop_rhs(parser, scope, token_precedence + 1, rhs)?;
        }

        lhs = ExprWrapper::new(BinaryExpr {
            span: Span {
                start: lhs.get_span().start.clone(),
                end: rhs.get_span().end.clone(),
            },
            left: lhs,
            operator,
            right: rhs,
            is_return_value_used: false,
        });
    }
}

pub fn parse_var_decl_expr(parser: &mut Parser, scope: &mut FunctionScope) -> Result<ExprWrapper, Error> {
    let keyword = parser.advance().clone();
    let is_mutable = keyword.kind == TokenKind::Var;

    let error = Error::new(
        ErrorImpl::SyntaxError {
            token: parser.current_token().value.clone(),
            message: String::from("expected identifier during variable declaration"),
        },
        parser.get_position(),
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let explicit_type;
    if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        explicit_type = Some(parser.expect(TokenKind::Identifier)?.value);
    } else {
        explicit_type = None;
    }

    if parser.current_token_kind() != TokenKind::Assignment {
        // Without an initialiser the annotation is mandatory
        let return_type = match explicit_type {
            Some(explicit) => explicit,
            None => {
                return Err(Error::new(
                    ErrorImpl::MissingType { variable: name },
                    parser.get_position(),
                ))
            }
        };

        let slot_index = scope.declare(name.clone(), return_type.clone(), is_mutable);

        return Ok(ExprWrapper::new(VariableExpr {
            name,
            return_type: Some(return_type),
            slot_index,
            is_mutable,
            is_to_set: true,
            is_return_value_used: false,
            span: Span {
                start: keyword.span.start.clone(),
                end: parser.get_position(),
            },
        }));
    }

    parser.advance(); // =

    let value = parse_expression(parser, scope)?;

    let return_type = match explicit_type {
        Some(explicit) => explicit,
        None => match value.get_return_type() {
            Some(inferred) => String::from(inferred),
            None => {
                return Err(Error::new(
                    ErrorImpl::MissingType { variable: name },
                    parser.get_position(),
                ))
            }
        },
    };

    // Registered after the initialiser, so the rhs cannot see the binding
    let slot_index = scope.declare(name.clone(), return_type.clone(), is_mutable);

    let assignee = VariableExpr {
        name,
        return_type: Some(return_type),
        slot_index,
        is_mutable,
        is_to_set: true,
        is_return_value_used: false,
        span: keyword.span.clone(),
    };

    Ok(ExprWrapper::new(AssignmentExpr {
        span: Span {
            start: keyword.span.start.clone(),
            end: parser.get_position(),
        },
        assignee,
        value,
        is_return_value_used: false,
    }))
}

pub fn parse_identifier_expr(
    parser: &mut Parser,
    scope: &mut FunctionScope,
    inferred_type: Option<&str>,
) -> Result<ExprWrapper, Error> {
    let start = parser.current_token().span.start.clone();
    let mut identifier = parser.advance().value.clone();

    // `receiver.method(...)` on a declared variable lowers to a virtual call
    if scope.is_declared(&identifier) && parser.current_token_kind() == TokenKind::Dot {
        parser.advance();
        let method = parser.expect(TokenKind::Identifier)?.value;
        let arguments = parse_call_arguments(parser, scope)?;
        return instance_call(parser, scope, &identifier, method, arguments, start);
    }

    // Otherwise dots fold into one (namespaced) name
    while parser.current_token_kind() == TokenKind::Dot {
        parser.advance();
        identifier.push('.');
        identifier.push_str(&parser.expect(TokenKind::Identifier)?.value);
    }

    if parser.current_token_kind() != TokenKind::OpenParen {
        if !scope.is_declared(&identifier) {
            return Err(Error::new(
                ErrorImpl::UnresolvedVariable { variable: identifier },
                parser.get_position(),
            ));
        }

        if parser.current_token_kind() == TokenKind::Identifier {
            // Infix form `receiver method argument`, exactly one argument
            let method = parser.advance().value.clone();
            let argument = parse_expression(parser, scope)?;
            return instance_call(parser, scope, &identifier, method, vec![argument], start);
        }

        return Ok(ExprWrapper::new(variable_ref(parser, scope, &identifier)?));
    }

    let return_type = String::from(inferred_type.unwrap_or(BuiltinType::Void.as_str()));
    let arguments = parse_call_arguments(parser, scope)?;

    Ok(ExprWrapper::new(CallExpr {
        target: CallTarget::Function,
        name: identifier,
        arguments,
        return_type,
        is_return_value_used: false,
        span: Span {
            start,
            end: parser.get_position(),
        },
    }))
}

fn parse_call_arguments(
    parser: &mut Parser,
    scope: &mut FunctionScope,
) -> Result<Vec<ExprWrapper>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expression(parser, scope)?);

            if parser.current_token_kind() == TokenKind::CloseParen {
                break;
            }

            let error = Error::new(
                ErrorImpl::SyntaxError {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected `,` or `)` in argument list"),
                },
                parser.get_position(),
            );
            parser.expect_error(TokenKind::Comma, Some(error))?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(arguments)
}

fn instance_call(
    parser: &Parser,
    scope: &FunctionScope,
    receiver_name: &str,
    method: String,
    arguments: Vec<ExprWrapper>,
    start: Position,
) -> Result<ExprWrapper, Error> {
    let receiver = variable_ref(parser, scope, receiver_name)?;

    // The signature table decides the return type; int32 is the default
    // for methods it does not know about
    let return_type = match receiver
        .return_type
        .as_deref()
        .and_then(|ty| parser.get_method_table().method_return_type(ty, &method))
    {
        Some(declared) => String::from(declared),
        None => String::from(BuiltinType::Int32.as_str()),
    };

    Ok(ExprWrapper::new(CallExpr {
        target: CallTarget::Instance(receiver),
        name: method,
        arguments,
        return_type,
        is_return_value_used: false,
        span: Span {
            start,
            end: parser.get_position(),
        },
    }))
}

fn variable_ref(parser: &Parser, scope: &FunctionScope, name: &str) -> Result<VariableExpr, Error> {
    let variable = match scope.lookup(name) {
        Some(variable) => variable,
        None => {
            return Err(Error::new(
                ErrorImpl::UnresolvedVariable {
                    variable: String::from(name),
                },
                parser.get_position(),
            ))
        }
    };

    Ok(VariableExpr {
        name: variable.name.clone(),
        return_type: Some(variable.return_type.clone()),
        slot_index: variable.slot_index,
        is_mutable: variable.is_mutable,
        is_to_set: false,
        is_return_value_used: false,
        span: Span {
            start: parser.get_position(),
            end: parser.get_position(),
        },
    })
}
