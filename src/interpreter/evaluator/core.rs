use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::binary::apply_operator,
        value::{Closure, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an AST node against an environment and returns the resulting
/// value.
///
/// This is the main entry point for evaluation; it dispatches exhaustively
/// on the node variant. Evaluation is fully synchronous and runs to
/// completion or fails; recursion depth mirrors the source program's call
/// depth, so unbounded recursion exhausts the native stack (an accepted
/// limitation, not papered over with a control stack).
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `env`: The environment frame to resolve names against.
///
/// # Errors
/// Any `RuntimeError`: unknown variables, invalid assignment targets, type
/// errors, division by zero, calling non-functions.
pub fn evaluate(expr: &Expr, env: &Environment) -> EvalResult<Value> {
    match expr {
        Expr::NumberLit { value, .. } => Ok(Value::Number(*value)),
        Expr::StringLit { value, .. } => Ok(Value::Str(Rc::from(value.as_str()))),
        Expr::BoolLit { value, .. } => Ok(Value::Bool(*value)),

        Expr::VarRef { name, line } => env.get(name, *line),

        Expr::Sequence { exprs, .. } => {
            let mut value = Value::FALSE;
            for expr in exprs {
                value = evaluate(expr, env)?;
            }
            Ok(value)
        },

        Expr::Assign { target, value, line } => eval_assign(target, value, *line, env),

        Expr::If { condition,
                   then_branch,
                   else_branch,
                   .. } => {
            if evaluate(condition, env)?.is_truthy() {
                evaluate(then_branch, env)
            } else {
                match else_branch {
                    Some(alternative) => evaluate(alternative, env),
                    None => Ok(Value::FALSE),
                }
            }
        },

        Expr::Lambda { params, body, .. } => {
            Ok(Value::Lambda(Rc::new(Closure { params: params.clone(),
                                               body:   (**body).clone(),
                                               env:    env.clone(), })))
        },

        Expr::Call { callee,
                     arguments,
                     line, } => eval_call(callee, arguments, *line, env),

        Expr::BinaryOp { operator,
                         left,
                         right,
                         line, } => {
            // Both operands are evaluated before the operator is applied,
            // even for && and ||. Their side effects always run.
            let left = evaluate(left, env)?;
            let right = evaluate(right, env)?;
            apply_operator(operator, &left, &right, *line)
        },
    }
}

/// Evaluates an assignment.
///
/// The target must be a `VarRef`. The right side is evaluated first, then
/// bound via [`Environment::set`]: the owning frame is mutated wherever it
/// is in the chain, and only the global frame may introduce a new name.
fn eval_assign(target: &Expr, value: &Expr, line: usize, env: &Environment) -> EvalResult<Value> {
    let Expr::VarRef { name, .. } = target else {
        return Err(RuntimeError::InvalidAssignment { target: target.describe().to_string(),
                                                     line });
    };
    let value = evaluate(value, env)?;
    env.set(name, value, line)
}

/// Evaluates a call: the callee first, then the arguments left to right,
/// then applies the function.
fn eval_call(callee: &Expr, arguments: &[Expr], line: usize, env: &Environment) -> EvalResult<Value> {
    let func = evaluate(callee, env)?;
    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(evaluate(argument, env)?);
    }
    apply_function(&func, &args, line)
}

/// Applies a function value to already-evaluated arguments.
///
/// Closures get a fresh frame extending their *defining* environment, with
/// parameters bound positionally: missing trailing arguments bind to
/// `false`, extra arguments are silently ignored. Host-native functions are
/// invoked directly.
///
/// # Errors
/// `RuntimeError::NotCallable` when `func` is not a function value, plus
/// whatever the body or host function raises.
pub fn apply_function(func: &Value, args: &[Value], line: usize) -> EvalResult<Value> {
    match func {
        Value::Lambda(closure) => {
            let frame = closure.env.extend();
            for (i, param) in closure.params.iter().enumerate() {
                frame.define(param.clone(), args.get(i).cloned().unwrap_or(Value::FALSE));
            }
            evaluate(&closure.body, &frame)
        },
        Value::Native(native) => native.call(args),
        other => Err(RuntimeError::NotCallable { found: other.to_string(),
                                                 line }),
    }
}
