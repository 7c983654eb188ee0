use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// One scope frame: a name-to-value table plus a back-reference to the
/// enclosing frame. The outermost frame has no parent and is the global
/// frame.
#[derive(Debug)]
struct Scope {
    vars:   HashMap<String, Value>,
    parent: Option<Environment>,
}

/// A handle to a scope frame in the environment chain.
///
/// `Environment` is a cheap clone (a shared handle): cloning it yields
/// another handle to the same frame, which is exactly what closures need to
/// capture their defining scope. A frame created for a lambda invocation is
/// a child of the lambda's *defining* frame, not its caller's, and stays
/// alive for as long as any closure created inside it is reachable.
///
/// Lookup walks outward through parents. Only the global frame may introduce
/// previously unknown names via [`Environment::set`]; every other frame gets
/// new bindings through [`Environment::define`] alone.
#[derive(Debug, Clone)]
pub struct Environment {
    scope: Rc<RefCell<Scope>>,
}

impl Environment {
    /// Creates the global (parentless) frame.
    #[must_use]
    pub fn global() -> Self {
        Self::with_parent(None)
    }

    /// Creates a child frame whose parent is `self`.
    #[must_use]
    pub fn extend(&self) -> Self {
        Self::with_parent(Some(self.clone()))
    }

    fn with_parent(parent: Option<Self>) -> Self {
        Self { scope: Rc::new(RefCell::new(Scope { vars: HashMap::new(),
                                                   parent })), }
    }

    /// Returns the frame owning `name`, searching `self` and then its
    /// ancestors, or `None` when no frame in the chain binds it.
    #[must_use]
    pub fn lookup_frame(&self, name: &str) -> Option<Self> {
        let mut frame = self.clone();
        loop {
            if frame.scope.borrow().vars.contains_key(name) {
                return Some(frame);
            }
            let parent = frame.scope.borrow().parent.clone();
            match parent {
                Some(parent) => frame = parent,
                None => return None,
            }
        }
    }

    /// Reads the value of `name` from the nearest frame binding it.
    ///
    /// # Errors
    /// `RuntimeError::UnknownVariable` when no frame in the chain binds
    /// `name`.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<Value> {
        match self.lookup_frame(name) {
            Some(frame) => {
                let scope = frame.scope.borrow();
                match scope.vars.get(name) {
                    Some(value) => Ok(value.clone()),
                    None => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                                line }),
                }
            },
            None => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                        line }),
        }
    }

    /// Assigns `value` to `name` and returns the value.
    ///
    /// When an owning frame exists anywhere in the chain, the binding is
    /// mutated there. Otherwise the global frame, and only the global frame,
    /// defines the name; assignment can never introduce a binding in a
    /// nested frame.
    ///
    /// # Errors
    /// `RuntimeError::UnknownVariable` when `name` is unbound and `self` is
    /// not the global frame.
    pub fn set(&self, name: &str, value: Value, line: usize) -> EvalResult<Value> {
        match self.lookup_frame(name) {
            Some(frame) => {
                frame.scope
                     .borrow_mut()
                     .vars
                     .insert(name.to_string(), value.clone());
                Ok(value)
            },
            None if self.is_global() => {
                self.define(name, value.clone());
                Ok(value)
            },
            None => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                        line }),
        }
    }

    /// Binds `name` in `self`, shadowing any ancestor binding.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.scope.borrow_mut().vars.insert(name.into(), value);
    }

    /// Returns `true` when `self` is the outermost (parentless) frame.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.scope.borrow().parent.is_none()
    }

    /// Returns `true` when both handles refer to the same frame.
    #[must_use]
    pub fn same_frame(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.scope, &other.scope)
    }
}
