#![allow(nonstandard_style)]

//! Expression engine for a calculator keypad.
//!
//! A [`Session`] takes keys one at a time, refuses the ones that could never
//! lead to a valid expression, keeps a live preview of the partial value and
//! commits a final result on demand.

pub mod balancing;
pub mod editing;
pub mod error_handling;
pub mod evaluating;
pub mod expression;
pub mod formatting;
pub mod guarding;
pub mod keys;
pub mod normalizing;
pub mod parsing;
pub mod previewing;
pub mod scanning;

pub use editing::{Mode, Session};
pub use error_handling::{CalcError, Result};
pub use keys::{Key, Operation};
pub use previewing::Preview;
