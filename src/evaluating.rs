use crate::balancing::is_balanced;
use crate::error_handling::*;
use crate::keys::ANSWER_TOKEN;
use crate::normalizing::normalize;
use crate::parsing::*;

pub fn evaluate(expression: &[ExprNode]) -> Result<f64> {
    let mut slots = Vec::<f64>::new();
    for node in expression {
        match node {
            ExprNode::number(value) => slots.push(*value),

            ExprNode::operator(Operator::unary(operator)) => {
                let value = slots.pop().ok_or(CalcError::abrupt_end)?;
                slots.push(operator.call(value));
            },

            ExprNode::operator(Operator::binary(operator)) => {
                let right = slots.pop().ok_or(CalcError::abrupt_end)?;
                let left = slots.pop().ok_or(CalcError::abrupt_end)?;
                slots.push(operator.call(left, right));
            },
        }
    }

    match slots.as_slice() {
        [value] if value.is_finite() => Ok(*value),
        [_] => Err(CalcError::non_finite),
        _ => Err(CalcError::abrupt_end),
    }
}

/// Evaluates normalized text, see [`normalize`].
pub fn evaluate_str(normalized: &str) -> Result<f64> {
    let expression = parse(normalized.into())?;
    evaluate(&expression)
}

/// Evaluation for an explicit commit.
///
/// Structural problems are reported as [`CalcError::syntax`] before anything is
/// evaluated; every other error comes from evaluation itself.
pub fn evaluate_strict(text: &str, answer: f64) -> Result<f64> {
    check_structure(text)?;
    evaluate_str(&normalize(text, answer))
}

fn check_structure(text: &str) -> Result<()> {
    let first = text.chars().next().ok_or(CalcError::syntax("nothing to evaluate"))?;
    let leads = first.is_ascii_digit()
        || first == '('
        || first == '-'
        || text.starts_with(ANSWER_TOKEN);
    if !leads {
        return Err(CalcError::syntax("it starts with an operator"));
    }

    if text.ends_with(['+', '-', '×', '÷', '*', '/', '%', '(', '.']) {
        return Err(CalcError::syntax("it ends without an operand"));
    }

    if !is_balanced(text) {
        return Err(CalcError::syntax("its parentheses are unbalanced"));
    }
    Ok(())
}
