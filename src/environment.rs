//! Lexical scoping.
//!
//! [`Environment`] is a chain of variable frames: the interpreter holds
//! one at global scope, and pushes a fresh child frame for every block,
//! function call, and loop iteration that introduces its own scope. Frames
//! are reference-counted and interior-mutable (`Rc<RefCell<_>>`) so a
//! closure captured from an inner scope can keep a live handle on an
//! enclosing frame after the block that created it returns.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::interpreter::RuntimeError;
use crate::token::Token;
use crate::value::Value;

struct EnvironmentData {
    values: HashMap<String, Value>,
    enclosing: Option<Environment>,
}

/// A single lexical scope frame, shared by handle.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<EnvironmentData>>);

impl Environment {
    /// Creates a new top-level (global) scope with no enclosing frame.
    pub fn new() -> Self {
        Environment(Rc::new(RefCell::new(EnvironmentData {
            values: HashMap::new(),
            enclosing: None,
        })))
    }

    /// Creates a new scope nested inside `enclosing`.
    pub fn new_enclosed(enclosing: &Environment) -> Self {
        Environment(Rc::new(RefCell::new(EnvironmentData {
            values: HashMap::new(),
            enclosing: Some(enclosing.clone()),
        })))
    }

    /// Binds `name` to `value` in this frame. Redeclaring an existing name
    /// in the same frame silently overwrites it, matching `var`'s
    /// redeclaration rule.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().values.insert(name.into(), value);
    }

    /// Looks up `name`, walking outward through enclosing frames.
    ///
    /// Returns a `RuntimeError` anchored to `name` if the variable is
    /// bound nowhere in the chain.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        let data = self.0.borrow();
        if let Some(value) = data.values.get(&identifier_name(name)) {
            return Ok(value.clone());
        }
        match &data.enclosing {
            Some(enclosing) => enclosing.get(name),
            None => Err(RuntimeError::new(
                name.clone(),
                format!("Undefined variable '{}'.", identifier_name(name)),
            )),
        }
    }

    /// Assigns `value` to the nearest existing binding of `name`, walking
    /// outward through enclosing frames. Unlike `define`, this never
    /// creates a new binding: assigning to an unbound name is a runtime
    /// error anchored to `name`.
    pub fn assign(&self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        let key = identifier_name(name);
        let mut data = self.0.borrow_mut();
        if data.values.contains_key(&key) {
            data.values.insert(key, value);
            return Ok(());
        }
        match &data.enclosing {
            Some(enclosing) => enclosing.assign(name, value),
            None => Err(RuntimeError::new(
                name.clone(),
                format!("Undefined variable '{key}'."),
            )),
        }
    }
}

fn identifier_name(token: &Token) -> String {
    token.lexeme.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn ident(name: &str) -> Token {
        Token::new(TokenKind::Identifier(name.to_string()), name, 1)
    }

    #[test]
    fn defines_and_reads_a_binding() {
        let env = Environment::new();
        env.define("a", Value::Number(1.0));
        assert_eq!(env.get(&ident("a")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn reading_an_undefined_variable_is_a_runtime_error() {
        let env = Environment::new();
        assert!(env.get(&ident("missing")).is_err());
    }

    #[test]
    fn child_scope_sees_bindings_from_the_enclosing_scope() {
        let global = Environment::new();
        global.define("a", Value::Number(1.0));
        let block = Environment::new_enclosed(&global);
        assert_eq!(block.get(&ident("a")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn shadowing_in_a_child_scope_does_not_affect_the_parent() {
        let global = Environment::new();
        global.define("a", Value::Number(1.0));
        let block = Environment::new_enclosed(&global);
        block.define("a", Value::Number(2.0));
        assert_eq!(block.get(&ident("a")).unwrap(), Value::Number(2.0));
        assert_eq!(global.get(&ident("a")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn assigning_through_a_child_scope_updates_the_enclosing_binding() {
        let global = Environment::new();
        global.define("a", Value::Number(1.0));
        let block = Environment::new_enclosed(&global);
        block.assign(&ident("a"), Value::Number(9.0)).unwrap();
        assert_eq!(global.get(&ident("a")).unwrap(), Value::Number(9.0));
    }

    #[test]
    fn assigning_to_an_undefined_variable_is_a_runtime_error() {
        let env = Environment::new();
        assert!(env.assign(&ident("missing"), Value::Nil).is_err());
    }
}
