use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("invalid character, '{0}', encountered")]
    invalid_character(String),

    #[error("'{0}' is not a valid number")]
    invalid_number(String),

    #[error("the '{0}' operator has been misplaced")]
    invalid_operator(String),

    #[error("did not expect '{0}'")]
    did_not_expect(String),

    #[error("could not find '{0}'")]
    could_not_find(String),

    #[error("expression ended abruptly")]
    abrupt_end,

    #[error("result is not a finite number")]
    non_finite,

    #[error("malformed expression, {0}")]
    syntax(&'static str),
}

impl CalcError {
    /// Structural problems caught before evaluation is attempted.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::syntax(_))
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
