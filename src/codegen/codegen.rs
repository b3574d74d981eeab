use crate::{ast::ast::ExprWrapper, errors::errors::Error};

use super::{expr::gen_expression, instruction::Instruction};

/// Collects the instruction stream while the AST is walked.
pub struct CodeGenerator {
    instructions: Vec<Instruction>,
}

impl CodeGenerator {
    pub fn new() -> Self {
        CodeGenerator { instructions: vec![] }
    }

    /// Appends one instruction to the stream.
    pub fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Consumes the generator and returns the finished stream.
    pub fn finish(self) -> Vec<Instruction> {
        self.instructions
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowers one finished expression tree into its instruction sequence.
pub fn generate(expression: &ExprWrapper) -> Result<Vec<Instruction>, Error> {
    let mut generator = CodeGenerator::new();
    gen_expression(&mut generator, expression)?;
    Ok(generator.finish())
}

/// Renders instructions as assembler text, one opcode per line.
pub fn render(instructions: &[Instruction]) -> String {
    instructions
        .iter()
        .map(|instruction| format!("{}\n", instruction))
        .collect()
}
