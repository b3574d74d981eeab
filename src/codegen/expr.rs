use crate::{
    ast::{
        ast::{Expr, ExprType, ExprWrapper},
        expressions::{
            AssignmentExpr, BinaryExpr, CallExpr, CallTarget, FloatLiteralExpr,
            IntegerLiteralExpr, StringLiteralExpr, VariableExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{codegen::CodeGenerator, instruction::Instruction};

/// Generates the instruction sequence for the given expression.
///
/// Children are emitted left to right before the node's own operation,
/// so every completed expression leaves exactly one value on the
/// evaluation stack. An assignment is the exception: it consumes the
/// rhs value and leaves none.
pub fn gen_expression(generator: &mut CodeGenerator, expression: &ExprWrapper) -> Result<(), Error> {
    match expression.get_expr_type() {
        ExprType::IntegerLiteral => {
            let literal = expression
                .as_any()
                .downcast_ref::<IntegerLiteralExpr>()
                .unwrap();
            generator.emit(Instruction::LdcI4(literal.value.clone()));
        }
        ExprType::FloatLiteral => {
            let literal = expression
                .as_any()
                .downcast_ref::<FloatLiteralExpr>()
                .unwrap();
            generator.emit(Instruction::LdcR4(literal.value.clone()));
        }
        ExprType::StringLiteral => {
            let literal = expression
                .as_any()
                .downcast_ref::<StringLiteralExpr>()
                .unwrap();
            generator.emit(Instruction::Ldstr(literal.value.clone()));
        }
        ExprType::Variable => {
            let variable = expression.as_any().downcast_ref::<VariableExpr>().unwrap();

            if variable.return_type.is_none() {
                return Err(Error::new(
                    ErrorImpl::CodeGen {
                        message: format!("variable `{}` has no resolved type", variable.name),
                    },
                    variable.span.start.clone(),
                ));
            }

            generator.emit(Instruction::Ldloc(variable.slot_index));
        }
        ExprType::Assignment => {
            let assignment = expression
                .as_any()
                .downcast_ref::<AssignmentExpr>()
                .unwrap();

            if assignment.assignee.return_type.is_none() {
                return Err(Error::new(
                    ErrorImpl::CodeGen {
                        message: format!(
                            "variable `{}` has no resolved type",
                            assignment.assignee.name
                        ),
                    },
                    assignment.span.start.clone(),
                ));
            }

            gen_expression(generator, &assignment.value)?;
            generator.emit(Instruction::Stloc(assignment.assignee.slot_index));
        }
        ExprType::Binary => {
            let binary = expression.as_any().downcast_ref::<BinaryExpr>().unwrap();

            gen_expression(generator, &binary.left)?;
            gen_expression(generator, &binary.right)?;

            let instruction = match binary.operator.kind {
                TokenKind::Plus => Instruction::Add,
                TokenKind::Dash => Instruction::Sub,
                TokenKind::Star => Instruction::Mul,
                TokenKind::Less => Instruction::Clt,
                _ => {
                    return Err(Error::new(
                        ErrorImpl::CodeGen {
                            message: format!(
                                "no emission rule for operator `{}`",
                                binary.operator.value
                            ),
                        },
                        binary.operator.span.start.clone(),
                    ))
                }
            };

            generator.emit(instruction);
        }
        ExprType::Call => {
            let call = expression.as_any().downcast_ref::<CallExpr>().unwrap();

            match &call.target {
                CallTarget::Function => {
                    let argument_types = gen_arguments(generator, call)?;

                    generator.emit(Instruction::Call {
                        return_type: call.return_type.clone(),
                        function: call.name.clone(),
                        argument_types,
                    });
                }
                CallTarget::Instance(receiver) => {
                    let class = match receiver.return_type.as_deref() {
                        Some(declared) => String::from(declared),
                        None => {
                            return Err(Error::new(
                                ErrorImpl::CodeGen {
                                    message: format!(
                                        "receiver `{}` has no resolved type",
                                        receiver.name
                                    ),
                                },
                                receiver.span.start.clone(),
                            ))
                        }
                    };

                    generator.emit(Instruction::Ldloc(receiver.slot_index));
                    let argument_types = gen_arguments(generator, call)?;

                    generator.emit(Instruction::Callvirt {
                        return_type: call.return_type.clone(),
                        class,
                        method: call.name.clone(),
                        argument_types,
                    });
                }
            }
        }
    }

    Ok(())
}

/// Emits every argument left to right and collects their type tags for
/// the call signature.
fn gen_arguments(generator: &mut CodeGenerator, call: &CallExpr) -> Result<Vec<String>, Error> {
    let mut argument_types = vec![];

    for argument in call.arguments.iter() {
        gen_expression(generator, argument)?;

        match argument.get_return_type() {
            Some(declared) => argument_types.push(String::from(declared)),
            None => {
                return Err(Error::new(
                    ErrorImpl::CodeGen {
                        message: String::from("argument type is unresolved"),
                    },
                    argument.get_span().start.clone(),
                ))
            }
        }
    }

    Ok(argument_types)
}
