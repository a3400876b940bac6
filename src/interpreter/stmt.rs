//! Statement execution.

use super::{Interpreter, RuntimeError};
use crate::ast::Stmt;
use crate::environment::Environment;
use crate::value::Value;

impl Interpreter {
    pub(super) fn execute(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                println!("{value}");
                Ok(())
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.define(name.lexeme.clone(), value);
                Ok(())
            }
            Stmt::Block(statements) => {
                let scope = Environment::new_enclosed(&self.environment);
                self.execute_block(statements, scope)
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            }
        }
    }

    /// Runs `statements` in `scope`, then restores the previous scope
    /// regardless of whether execution finished or returned an error —
    /// a runtime error partway through a block must not leave the
    /// interpreter's cursor pointed at the block's now-dead scope.
    pub(super) fn execute_block(
        &mut self,
        statements: &[Stmt],
        scope: Environment,
    ) -> Result<(), RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, scope);

        let result = (|| {
            for stmt in statements {
                self.execute(stmt)?;
            }
            Ok(())
        })();

        self.environment = previous;
        result
    }
}
