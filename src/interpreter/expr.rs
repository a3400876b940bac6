//! Expression evaluation.

use super::{Interpreter, RuntimeError};
use crate::ast::Expr;
use crate::token::TokenKind;
use crate::value::Value;

impl Interpreter {
    pub(super) fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { operator, operand } => self.evaluate_unary(operator, operand),
            Expr::Binary {
                left,
                operator,
                right,
            } => self.evaluate_binary(left, operator, right),
            Expr::Logical {
                left,
                operator,
                right,
            } => self.evaluate_logical(left, operator, right),
            Expr::Variable(name) => self.environment.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.assign(name, value.clone())?;
                Ok(value)
            }
        }
    }

    fn evaluate_unary(
        &mut self,
        operator: &crate::token::Token,
        operand: &Expr,
    ) -> Result<Value, RuntimeError> {
        let value = self.evaluate(operand)?;

        match operator.kind {
            TokenKind::Minus => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::new(
                    operator.clone(),
                    "Operand must be a number.",
                )),
            },
            // Truthiness-based negation applies to every value, not just
            // numbers: `!nil` and `!"x"` are both well-defined.
            TokenKind::Bang => Ok(Value::Boolean(!value.is_truthy())),
            _ => unreachable!("parser only produces Unary with Minus or Bang"),
        }
    }

    fn evaluate_logical(
        &mut self,
        left: &Expr,
        operator: &crate::token::Token,
        right: &Expr,
    ) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left)?;

        match operator.kind {
            TokenKind::Or if left.is_truthy() => Ok(left),
            TokenKind::Or => self.evaluate(right),
            TokenKind::And if !left.is_truthy() => Ok(left),
            TokenKind::And => self.evaluate(right),
            _ => unreachable!("parser only produces Logical with And or Or"),
        }
    }

    fn evaluate_binary(
        &mut self,
        left: &Expr,
        operator: &crate::token::Token,
        right: &Expr,
    ) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        match operator.kind {
            TokenKind::Minus => numeric_op(operator, left, right, |a, b| Value::Number(a - b)),
            TokenKind::Slash => numeric_op(operator, left, right, |a, b| Value::Number(a / b)),
            TokenKind::Star => numeric_op(operator, left, right, |a, b| Value::Number(a * b)),
            TokenKind::Greater => numeric_op(operator, left, right, |a, b| Value::Boolean(a > b)),
            TokenKind::GreaterEqual => {
                numeric_op(operator, left, right, |a, b| Value::Boolean(a >= b))
            }
            TokenKind::Less => numeric_op(operator, left, right, |a, b| Value::Boolean(a < b)),
            TokenKind::LessEqual => {
                numeric_op(operator, left, right, |a, b| Value::Boolean(a <= b))
            }
            TokenKind::Plus => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Text(a), Value::Text(b)) => Ok(Value::Text(a + &b)),
                _ => Err(RuntimeError::new(
                    operator.clone(),
                    "Operands must be two numbers or two strings.",
                )),
            },
            // Structural equality over the whole value, not gated on the
            // operands being the same or a numeric type: `nil == nil`,
            // `1 == "1"` (false, no coercion), and mismatched-type
            // comparisons are all well-defined and never error.
            TokenKind::EqualEqual => Ok(Value::Boolean(left == right)),
            TokenKind::BangEqual => Ok(Value::Boolean(left != right)),
            _ => unreachable!("parser only produces Binary with an arithmetic/comparison operator"),
        }
    }
}

fn numeric_op(
    operator: &crate::token::Token,
    left: Value,
    right: Value,
    op: impl FnOnce(f64, f64) -> Value,
) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(op(a, b)),
        _ => Err(RuntimeError::new(
            operator.clone(),
            "Operands must be numbers.",
        )),
    }
}
