//! Best-effort evaluation of the expression while it is still being typed.

use crate::balancing::is_balanced;
use crate::error_handling::CalcError;
use crate::evaluating::evaluate_str;
use crate::formatting::format_number;
use crate::normalizing::normalize;
use std::fmt;
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Preview {
    value(f64),
    /// Nothing typed yet.
    placeholder,
    /// Not evaluable yet, e.g. an open parenthesis.
    pending,
    /// Nothing to show.
    suppressed,
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::value(value) => write!(f, "= {}", format_number(*value)),
            Self::placeholder => f.write_str("= 0"),
            Self::pending => f.write_str("= ..."),
            Self::suppressed => Ok(()),
        }
    }
}

fn is_dangling(c: char) -> bool {
    c.is_whitespace() || matches!(c, '+' | '-' | '*' | '/' | '%' | '(')
}

/// Evaluates `text` as far as possible without ever reporting an error.
///
/// A failed attempt is retried once with the dangling tail (operators, `(`,
/// whitespace) removed, so `5+` previews as `5`.
pub fn preview(text: &str, answer: f64) -> Preview {
    let text = text.trim();
    if text.is_empty() {
        return Preview::placeholder;
    }
    if !is_balanced(text) {
        return Preview::pending;
    }

    let normalized = normalize(text, answer);
    let outcome = match evaluate_str(&normalized) {
        Err(CalcError::non_finite) => Err(CalcError::non_finite),
        Err(error) => {
            let trimmed = normalized.trim_end_matches(is_dangling);
            trace!(%error, trimmed, "retrying preview without dangling tail");
            evaluate_str(trimmed)
        },
        value => value,
    };

    match outcome {
        Ok(value) => Preview::value(value),
        Err(CalcError::non_finite) => Preview::suppressed,
        Err(_) => Preview::pending,
    }
}
