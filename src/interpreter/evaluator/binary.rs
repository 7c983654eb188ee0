use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies a binary operator to two already-evaluated operands.
///
/// Arithmetic (`+ - * / %`) and the ordering comparisons require numeric
/// operands; `/` and `%` fail on a zero divisor. `==` and `!=` compare by
/// value equality over any types. `&&` and `||` select an operand, the
/// left when it decides the result, the right otherwise, but never skip
/// evaluation, since both sides reach here already evaluated.
///
/// # Parameters
/// - `op`: The operator symbol as lexed.
/// - `left`/`right`: The evaluated operands.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// - `RuntimeError::ExpectedNumber` for non-numeric arithmetic operands.
/// - `RuntimeError::DivisionByZero` for `/` or `%` with a zero divisor.
/// - `RuntimeError::UnknownOperator` for a symbol outside the language.
pub fn apply_operator(op: &str, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match op {
        "+" => Ok(Value::Number(left.as_number(line)? + right.as_number(line)?)),
        "-" => Ok(Value::Number(left.as_number(line)? - right.as_number(line)?)),
        "*" => Ok(Value::Number(left.as_number(line)? * right.as_number(line)?)),
        "/" => Ok(Value::Number(left.as_number(line)? / nonzero(right, line)?)),
        "%" => Ok(Value::Number(left.as_number(line)? % nonzero(right, line)?)),

        "&&" => {
            if left.is_truthy() {
                Ok(right.clone())
            } else {
                Ok(Value::FALSE)
            }
        },
        "||" => {
            if left.is_truthy() {
                Ok(left.clone())
            } else {
                Ok(right.clone())
            }
        },

        "<" => Ok(Value::Bool(left.as_number(line)? < right.as_number(line)?)),
        ">" => Ok(Value::Bool(left.as_number(line)? > right.as_number(line)?)),
        "<=" => Ok(Value::Bool(left.as_number(line)? <= right.as_number(line)?)),
        ">=" => Ok(Value::Bool(left.as_number(line)? >= right.as_number(line)?)),

        "==" => Ok(Value::Bool(left == right)),
        "!=" => Ok(Value::Bool(left != right)),

        _ => Err(RuntimeError::UnknownOperator { operator: op.to_string(),
                                                 line }),
    }
}

/// Converts a divisor to `f64`, failing on zero.
fn nonzero(value: &Value, line: usize) -> EvalResult<f64> {
    let divisor = value.as_number(line)?;
    if divisor == 0.0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    Ok(divisor)
}
