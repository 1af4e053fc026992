//! Expression-level evaluation: operators, conditionals, and calls.

use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::expressions::{CallExpression, Expression, IfExpression, InfixExpression, PrefixExpression},
    errors::errors::RuntimeError,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    environment::Environment,
    evaluator::{eval_block, eval_expression},
    object::Value,
};

pub fn eval_prefix_expression(
    expression: &PrefixExpression,
    env: &Rc<RefCell<Environment>>,
) -> Value {
    let operand = match eval_expression(&expression.right, env) {
        Some(Value::Error(error)) => return Value::Error(error),
        Some(value) => value,
        None => Value::Null,
    };

    match expression.operator.kind {
        TokenKind::Not => Value::Boolean(!operand.is_truthy()),
        TokenKind::Dash => match operand {
            Value::Integer(value) => Value::Integer(value.wrapping_neg()),
            other => Value::Error(RuntimeError::UnknownPrefixOperator {
                operator: expression.operator.value.clone(),
                operand: other.type_name(),
            }),
        },
        _ => Value::Error(RuntimeError::UnknownPrefixOperator {
            operator: expression.operator.value.clone(),
            operand: operand.type_name(),
        }),
    }
}

pub fn eval_infix_expression(
    expression: &InfixExpression,
    env: &Rc<RefCell<Environment>>,
) -> Value {
    let left = match eval_expression(&expression.left, env) {
        Some(Value::Error(error)) => return Value::Error(error),
        Some(value) => value,
        None => Value::Null,
    };

    let right = match eval_expression(&expression.right, env) {
        Some(Value::Error(error)) => return Value::Error(error),
        Some(value) => value,
        None => Value::Null,
    };

    apply_infix(&expression.operator, left, right)
}

fn apply_infix(operator: &Token, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(left), Value::Integer(right)) => {
            eval_integer_infix(operator, *left, *right)
        }
        (Value::String(left), Value::String(right)) if operator.kind == TokenKind::Plus => {
            Value::String(format!("{}{}", left, right))
        }
        _ => match operator.kind {
            // Equality on anything that is not two integers compares the
            // values themselves and never errors; mixed types are unequal.
            TokenKind::Equals => Value::Boolean(left == right),
            TokenKind::NotEquals => Value::Boolean(left != right),
            _ if left.type_name() != right.type_name() => Value::Error(RuntimeError::TypeMismatch {
                left: left.type_name(),
                operator: operator.value.clone(),
                right: right.type_name(),
            }),
            _ => Value::Error(RuntimeError::UnknownInfixOperator {
                left: left.type_name(),
                operator: operator.value.clone(),
                right: right.type_name(),
            }),
        },
    }
}

fn eval_integer_infix(operator: &Token, left: i64, right: i64) -> Value {
    match operator.kind {
        TokenKind::Plus => Value::Integer(left.wrapping_add(right)),
        TokenKind::Dash => Value::Integer(left.wrapping_sub(right)),
        TokenKind::Star => Value::Integer(left.wrapping_mul(right)),
        TokenKind::Slash => {
            if right == 0 {
                Value::Error(RuntimeError::DivisionByZero)
            } else {
                // Truncating division; wrapping_div covers i64::MIN / -1.
                Value::Integer(left.wrapping_div(right))
            }
        }
        TokenKind::Less => Value::Boolean(left < right),
        TokenKind::Greater => Value::Boolean(left > right),
        TokenKind::Equals => Value::Boolean(left == right),
        TokenKind::NotEquals => Value::Boolean(left != right),
        _ => Value::Error(RuntimeError::UnknownInfixOperator {
            left: "INTEGER",
            operator: operator.value.clone(),
            right: "INTEGER",
        }),
    }
}

pub fn eval_if_expression(
    expression: &IfExpression,
    env: &Rc<RefCell<Environment>>,
) -> Option<Value> {
    let condition = match eval_expression(&expression.condition, env) {
        Some(Value::Error(error)) => return Some(Value::Error(error)),
        Some(value) => value,
        None => Value::Null,
    };

    if condition.is_truthy() {
        eval_block(&expression.consequence, env)
    } else if let Some(alternative) = &expression.alternative {
        eval_block(alternative, env)
    } else {
        Some(Value::Null)
    }
}

pub fn eval_call_expression(
    expression: &CallExpression,
    env: &Rc<RefCell<Environment>>,
) -> Option<Value> {
    let callee = match eval_expression(&expression.callee, env) {
        Some(Value::Error(error)) => return Some(Value::Error(error)),
        Some(value) => value,
        None => Value::Null,
    };

    let arguments = match eval_expressions(&expression.arguments, env) {
        Ok(arguments) => arguments,
        Err(error) => return Some(Value::Error(error)),
    };

    Some(apply_function(callee, arguments))
}

/// Evaluates call arguments left to right, stopping at the first error
/// without touching the remaining ones.
fn eval_expressions(
    expressions: &[Expression],
    env: &Rc<RefCell<Environment>>,
) -> Result<Vec<Value>, RuntimeError> {
    let mut values = Vec::with_capacity(expressions.len());

    for expression in expressions {
        match eval_expression(expression, env) {
            Some(Value::Error(error)) => return Err(error),
            Some(value) => values.push(value),
            None => values.push(Value::Null),
        }
    }

    Ok(values)
}

fn apply_function(callee: Value, arguments: Vec<Value>) -> Value {
    let function = match callee {
        Value::Function(function) => function,
        other => {
            return Value::Error(RuntimeError::NotAFunction {
                kind: other.type_name(),
            })
        }
    };

    if function.parameters.len() != arguments.len() {
        return Value::Error(RuntimeError::WrongArgumentCount {
            expected: function.parameters.len(),
            got: arguments.len(),
        });
    }

    // The call environment extends the callee's captured environment, not
    // the caller's.
    let call_env = Rc::new(RefCell::new(Environment::new_enclosed(Rc::clone(
        &function.env,
    ))));
    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        call_env.borrow_mut().set(parameter.value.clone(), argument);
    }

    match eval_block(&function.body, &call_env) {
        Some(Value::Return(value)) => *value,
        Some(value) => value,
        None => Value::Null,
    }
}
