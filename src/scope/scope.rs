use std::collections::HashMap;

/// A variable binding tracked by the enclosing function scope.
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub return_type: String,
    pub slot_index: usize,
    pub is_mutable: bool,
}

/// Variables declared in one function body.
///
/// Slots are handed out in declaration order and never reassigned, so a
/// binding's `slot_index` stays stable for its whole lifetime. Redeclaring
/// a name shadows the old binding under a fresh slot.
#[derive(Debug, Default)]
pub struct FunctionScope {
    variables: HashMap<String, Variable>,
    next_slot: usize,
}

impl FunctionScope {
    pub fn new() -> Self {
        FunctionScope {
            variables: HashMap::new(),
            next_slot: 0,
        }
    }

    /// Registers a variable and returns the local slot assigned to it.
    pub fn declare(&mut self, name: String, return_type: String, is_mutable: bool) -> usize {
        let slot_index = self.next_slot;
        self.next_slot += 1;

        self.variables.insert(
            name.clone(),
            Variable {
                name,
                return_type,
                slot_index,
                is_mutable,
            },
        );

        slot_index
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Number of local slots handed out so far.
    pub fn slot_count(&self) -> usize {
        self.next_slot
    }
}

/// Resolves the declared return type of an instance method from the
/// receiver's static type and the method name.
pub trait MethodSignatureSource {
    fn method_return_type(&self, receiver_type: &str, method: &str) -> Option<&str>;
}

/// Method signature table keyed by receiver type and method name.
#[derive(Debug, Default)]
pub struct MethodTable {
    signatures: HashMap<(String, String), String>,
}

impl MethodTable {
    pub fn new() -> Self {
        MethodTable {
            signatures: HashMap::new(),
        }
    }

    pub fn register(&mut self, receiver_type: &str, method: &str, return_type: &str) {
        self.signatures.insert(
            (String::from(receiver_type), String::from(method)),
            String::from(return_type),
        );
    }
}

impl MethodSignatureSource for MethodTable {
    fn method_return_type(&self, receiver_type: &str, method: &str) -> Option<&str> {
        self.signatures
            .get(&(String::from(receiver_type), String::from(method)))
            .map(String::as_str)
    }
}
