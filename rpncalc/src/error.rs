//! Errors surfaced by the evaluation pipeline.
//!
//! Conversion failures come out as [`ParseError`], evaluation failures as
//! [`EvalErr`]. [`CalcError`] unifies both so the facade can use `?` on
//! either stage.
use thiserror::Error;

use crate::parser::ParseError;
use crate::rpneval::EvalErr;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum CalcError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("eval error: {0}")]
    Eval(#[from] EvalErr),
}

impl CalcError {
    /// The numeric status of the old calculator interface.
    ///
    /// `2` is too many operands, `3` is division by zero and every other
    /// failure collapses into `1`. Success is `0`, see [`legacy_status`].
    pub fn code(&self) -> u8 {
        match self {
            CalcError::Eval(EvalErr::TooManyOperands(_)) => 2,
            CalcError::Eval(EvalErr::DivisionByZero) => 3,
            _ => 1,
        }
    }
}

/// Flatten an evaluation outcome into the old `(value, code)` pair.
/// Failed evaluations always report `0.0`.
pub fn legacy_status(result: &Result<f64, CalcError>) -> (f64, u8) {
    match result {
        Ok(value) => (*value, 0),
        Err(e) => (0.0, e.code()),
    }
}
