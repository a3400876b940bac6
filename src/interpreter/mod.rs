//! Tree-walking evaluator.
//!
//! This module provides [`Interpreter`], which executes a parsed program
//! directly against its [`crate::ast::Stmt`]/[`crate::ast::Expr`] tree —
//! no intermediate bytecode or compilation step.
//!
//! # Module Structure
//!
//! - [`error`] - The [`RuntimeError`] type
//! - [`expr`] - Expression evaluation
//! - [`stmt`] - Statement execution, including block-scope management
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the tree this module walks
//! * [`crate::environment`] - The lexical scope chain this module threads through
//! * [`crate::diagnostics`] - Where a [`RuntimeError`] surfaces to the user

mod error;
mod expr;
mod stmt;

pub use error::RuntimeError;

use crate::ast::Stmt;
use crate::diagnostics::Diagnostics;
use crate::environment::Environment;

/// Walks a program's statement list, threading a mutable lexical
/// environment through every expression and statement it evaluates.
pub struct Interpreter {
    environment: Environment,
}

impl Interpreter {
    /// Creates an interpreter with a single, empty global scope.
    pub fn new() -> Self {
        Interpreter {
            environment: Environment::new(),
        }
    }

    /// Executes `statements` in order, stopping at and reporting the
    /// first runtime error through `diagnostics`.
    ///
    /// A later call reuses the same global scope, so top-level `var`
    /// bindings persist across REPL lines.
    pub fn interpret(&mut self, statements: &[Stmt], diagnostics: &mut Diagnostics) {
        for stmt in statements {
            if let Err(error) = self.execute(stmt) {
                diagnostics.runtime_error(&error);
                return;
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
