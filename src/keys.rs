//! Keypad input tokens.
//!
//! Every key is one element of an [`Expression`](crate::expression::Expression),
//! including `ANS`, which is three characters wide on screen but always moves,
//! inserts and deletes as a single unit.

use crate::error_handling::*;
use std::fmt;
use std::str::FromStr;

pub const ANSWER_TOKEN: &str = "ANS";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    plus,
    minus,
    times,
    divide,
    percent,
}

impl Operation {
    pub fn glyph(&self) -> char {
        use Operation::*;
        match self {
            plus => '+',
            minus => '-',
            times => '×',
            divide => '÷',
            percent => '%',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    digit(char),
    point,
    operator(Operation),
    open_paren,
    close_paren,
    answer,
}

impl Key {
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::operator(_))
    }

    pub fn is_digit(&self) -> bool {
        matches!(self, Self::digit(_))
    }

    /// Digits, the decimal point and `ANS` all carry a value.
    pub fn is_operand(&self) -> bool {
        matches!(self, Self::digit(_) | Self::point | Self::answer)
    }

    /// Keys allowed at the very start of an expression.
    pub fn can_lead(&self) -> bool {
        matches!(
            self,
            Self::digit(_) | Self::open_paren | Self::answer | Self::operator(Operation::minus)
        )
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Key::*;
        match self {
            digit(d) => write!(f, "{d}"),
            point => f.write_str("."),
            operator(operation) => write!(f, "{}", operation.glyph()),
            open_paren => f.write_str("("),
            close_paren => f.write_str(")"),
            answer => f.write_str(ANSWER_TOKEN),
        }
    }
}

impl FromStr for Key {
    type Err = CalcError;

    /// Accepts the keypad glyphs plus the keyboard spellings `*`, `x` and `/`.
    fn from_str(s: &str) -> Result<Self> {
        use Key::*;
        use Operation::*;
        match s {
            ANSWER_TOKEN => Ok(answer),
            "." => Ok(point),
            "+" => Ok(operator(plus)),
            "-" => Ok(operator(minus)),
            "×" | "x" | "*" => Ok(operator(times)),
            "÷" | "/" => Ok(operator(divide)),
            "%" => Ok(operator(percent)),
            "(" => Ok(open_paren),
            ")" => Ok(close_paren),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Ok(digit(c)),
                    _ => Err(CalcError::invalid_character(s.into())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keypad_and_keyboard_spellings() {
        assert_eq!("7".parse::<Key>(), Ok(Key::digit('7')));
        assert_eq!("ANS".parse::<Key>(), Ok(Key::answer));
        assert_eq!("×".parse::<Key>(), Ok(Key::operator(Operation::times)));
        assert_eq!("*".parse::<Key>(), Ok(Key::operator(Operation::times)));
        assert_eq!("x".parse::<Key>(), Ok(Key::operator(Operation::times)));
        assert_eq!("/".parse::<Key>(), Ok(Key::operator(Operation::divide)));
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert!("12".parse::<Key>().is_err());
        assert!("an".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
        assert!("^".parse::<Key>().is_err());
    }

    #[test]
    fn displays_as_keypad_glyphs() {
        assert_eq!(Key::digit('4').to_string(), "4");
        assert_eq!(Key::operator(Operation::divide).to_string(), "÷");
        assert_eq!(Key::answer.to_string(), "ANS");
        assert_eq!(Key::point.to_string(), ".");
    }
}
