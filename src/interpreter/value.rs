use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
};

/// A function value produced by evaluating a lambda expression.
///
/// The closure pairs the parameter list and body with the environment frame
/// that was active at the definition site. Invoking it extends that captured
/// frame, not the caller's, which is what gives the language lexical
/// scoping.
#[derive(Debug)]
pub struct Closure {
    /// Parameter names, in positional order.
    pub params: Vec<String>,
    /// The body expression.
    pub body:   Expr,
    /// The defining environment frame.
    pub env:    Environment,
}

/// A host-native callable bound into an environment by the embedder,
/// e.g. an output function. Invoked like a closure, with positional
/// evaluated arguments.
#[derive(Clone)]
pub struct NativeFunction {
    name: String,
    func: Rc<dyn Fn(&[Value]) -> EvalResult<Value>>,
}

impl NativeFunction {
    /// Wraps a host function under the given name.
    pub fn new(name: impl Into<String>,
               func: impl Fn(&[Value]) -> EvalResult<Value> + 'static)
               -> Self {
        Self { name: name.into(),
               func: Rc::new(func), }
    }

    /// The name the function was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the host function with evaluated arguments.
    ///
    /// # Errors
    /// Whatever the host function returns.
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        (self.func)(args)
    }
}

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}

/// Represents a runtime value in the interpreter.
///
/// This enum models every type that can appear in expressions, assignments,
/// function returns, and conditions: numbers, strings, booleans, and the two
/// function flavors (language closures and host-native callables).
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Str(Rc<str>),
    /// A boolean value (`true` or `false`).
    ///
    /// `Bool(false)` is the language's only falsy value: conditions treat
    /// every other value, including `0` and `""`, as truthy.
    Bool(bool),
    /// A closure produced by a lambda expression.
    Lambda(Rc<Closure>),
    /// A host-bound native function.
    Native(NativeFunction),
}

impl Value {
    /// The language's distinguished falsy value.
    pub const FALSE: Self = Self::Bool(false);

    /// Returns `true` for every value except `Bool(false)`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Errors
    /// `RuntimeError::ExpectedNumber` for anything but `Value::Number`.
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeError::ExpectedNumber { found: other.to_string(),
                                                        line }),
        }
    }
}

impl PartialEq for Value {
    /// Value equality for numbers, strings and booleans; pointer identity
    /// for both function flavors. Values of different types are never equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Lambda(a), Self::Lambda(b)) => Rc::ptr_eq(a, b),
            (Self::Native(a), Self::Native(b)) => Rc::ptr_eq(&a.func, &b.func),
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Lambda(_) => write!(f, "<lambda>"),
            Self::Native(native) => write!(f, "<native fn {}>", native.name()),
        }
    }
}
