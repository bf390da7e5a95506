use rust_mcp_schema::CallToolResult;
use rust_mcp_sdk::macros::{JsonSchema, mcp_tool};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ToolError, text_result};
use crate::arguments::Arguments;

/// Returned for every expression the evaluator cannot handle
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Calculation error: invalid expression")]
pub struct InvalidExpression;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Checked in this order; the first symbol present in the expression wins.
    const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    fn apply(self, left: f64, right: f64) -> Result<f64, InvalidExpression> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div if right == 0.0 => Err(InvalidExpression),
            Operator::Div => Ok(left / right),
        }
    }
}

/// Evaluate a single-operator expression such as `12 * 4`.
///
/// There is no precedence: the operator is chosen by presence (`+`, then `-`,
/// then `*`, then `/`) and the expression must split into exactly two numeric
/// segments around it. `-5+3` therefore works while `3*-2` and `1+2+3` do not.
pub fn evaluate_expression(expression: &str) -> Result<f64, InvalidExpression> {
    let cleaned: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    let operator = Operator::ALL
        .into_iter()
        .find(|op| cleaned.contains(op.symbol()))
        .ok_or(InvalidExpression)?;

    let mut segments = cleaned.split(operator.symbol());
    let (Some(left), Some(right), None) = (segments.next(), segments.next(), segments.next())
    else {
        return Err(InvalidExpression);
    };

    let left: f64 = left.parse().map_err(|_| InvalidExpression)?;
    let right: f64 = right.parse().map_err(|_| InvalidExpression)?;
    operator.apply(left, right)
}

/// Evaluate and render the outcome; failures come back as the error text.
pub fn evaluate(expression: &str) -> String {
    match evaluate_expression(expression) {
        Ok(value) => format_number(value),
        Err(e) => e.to_string(),
    }
}

/// Float rendering that keeps a fractional part in plain form (`5.0`, `0.25`).
///
/// Magnitudes below 1e-4 or from 1e16 up switch to exponent form with a signed,
/// two-digit exponent (`1e-05`, `1.5e+20`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let rendered = format!("{value:?}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
            }
            Err(_) => rendered,
        },
        None => rendered,
    }
}

#[mcp_tool(
    name = "calculator",
    description = "Evaluates a two-operand arithmetic expression using one of +, -, *, /"
)]
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone)]
pub struct CalculatorTool {
    /// Expression to evaluate (e.g., '2 + 2', '10 / 4')
    pub expression: String,
}

impl CalculatorTool {
    pub fn from_arguments(args: &Arguments) -> Result<Self, ToolError> {
        let expression = args
            .get_str("expression")
            .ok_or(ToolError::MissingExpression)?;
        Ok(Self {
            expression: expression.to_string(),
        })
    }

    pub fn call(self) -> CallToolResult {
        let (result, is_error) = match evaluate_expression(&self.expression) {
            Ok(value) => (format_number(value), false),
            Err(e) => (e.to_string(), true),
        };
        text_result(format!("Result: {} = {}", self.expression, result), is_error)
    }
}
