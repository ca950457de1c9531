//! Arithmetic expression evaluation through a shunting-yard converter
//! and a stack based RPN evaluator.
//!
//! ```
//! assert_eq!(rpncalc::evaluate_infix("3 + 4 * 2"), Ok(11.0));
//! assert_eq!(rpncalc::evaluate_rpn("3 4 +"), Ok(7.0));
//! ```

pub use calc::{evaluate_infix, evaluate_rpn, Calculator};
pub use error::{legacy_status, CalcError};
pub use limits::Limits;
pub use parser::{precedence, Assoc, Operator, ParseError, RPNExpr, ShuntingParser};
pub use rpneval::{EvalErr, RPNEvaluator};
pub use stack::Stack;

mod calc;
mod error;
mod limits;
pub mod parser;
pub mod rpneval;
pub mod stack;

#[cfg(test)]
mod rpneval_test;
