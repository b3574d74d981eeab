use std::fmt::Display;

/// One opcode line of the textual stack-machine output.
///
/// Constants and loads push one value, `Stloc` consumes one, the
/// arithmetic group consumes two and pushes the result, and the call
/// forms consume their arguments (plus the receiver for `Callvirt`) and
/// push the return value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Push an integer constant.
    LdcI4(String),
    /// Push a float constant.
    LdcR4(String),
    /// Push a string constant.
    Ldstr(String),
    /// Load a local variable slot.
    Ldloc(usize),
    /// Store the top of the stack into a local variable slot.
    Stloc(usize),
    Add,
    Sub,
    Mul,
    /// Less-than comparison, pushes 1 or 0.
    Clt,
    /// Call a free function.
    Call {
        return_type: String,
        function: String,
        argument_types: Vec<String>,
    },
    /// Call an instance method through the receiver's static type.
    Callvirt {
        return_type: String,
        class: String,
        method: String,
        argument_types: Vec<String>,
    },
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::LdcI4(value) => write!(f, "ldc.i4 {}", value),
            Instruction::LdcR4(value) => write!(f, "ldc.r4 {}", value),
            Instruction::Ldstr(value) => write!(f, "ldstr \"{}\"", value),
            Instruction::Ldloc(slot) => write!(f, "ldloc.{}", slot),
            Instruction::Stloc(slot) => write!(f, "stloc.{}", slot),
            Instruction::Add => write!(f, "add"),
            Instruction::Sub => write!(f, "sub"),
            Instruction::Mul => write!(f, "mul"),
            Instruction::Clt => write!(f, "clt"),
            Instruction::Call {
                return_type,
                function,
                argument_types,
            } => write!(f, "call {} {}({})", return_type, function, argument_types.join(",")),
            Instruction::Callvirt {
                return_type,
                class,
                method,
                argument_types,
            } => write!(
                f,
                "callvirt instance {} {}::{}({})",
                return_type,
                class,
                method,
                argument_types.join(",")
            ),
        }
    }
}
