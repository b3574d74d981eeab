//! Function-scope symbol tracking.
//!
//! This module holds the scope context consumed by the expression parser:
//!
//! - Variable declaration and lookup by name
//! - Local slot allocation in declaration order
//! - Method signature resolution for instance-call return types
//!
//! One scope belongs to one in-flight parse; it is passed explicitly
//! through the parsing calls and never shared between parses.

pub mod scope;

#[cfg(test)]
mod tests;
