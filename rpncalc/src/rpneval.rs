use lexers::{DelimTokenizer, Scanner};
use thiserror::Error;
use tracing::trace;

use crate::limits::Limits;
use crate::parser::{Operator, RPNExpr};
use crate::stack::Stack;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum EvalErr {
    #[error("not enough operands")]
    InsufficientOperands,
    #[error("{0} operands left over, expected a single result")]
    TooManyOperands(usize),
    #[error("invalid token {0:?}")]
    InvalidToken(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("token {token:?} is longer than {max} chars")]
    TokenTooLong { token: String, max: usize },
    #[error("expression is {len} chars long, limit is {max}")]
    ExpressionTooLong { len: usize, max: usize },
}

/// Parse a whole token as `-?[0-9]*(\.[0-9]*)?`, no exponent.
/// Anything left after the literal makes the whole token invalid.
pub fn parse_literal(token: &str) -> Option<f64> {
    let mut scanner = Scanner::new(token.chars());
    let lexeme = scanner.scan_decimal()?;
    if scanner.peek().is_some() {
        return None;
    }
    lexeme.parse().ok()
}

pub fn apply(op: Operator, lhs: f64, rhs: f64) -> Result<f64, EvalErr> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Sub => Ok(lhs - rhs),
        Operator::Mul => Ok(lhs * rhs),
        Operator::Div if rhs == 0.0 => Err(EvalErr::DivisionByZero),
        Operator::Div => Ok(lhs / rhs),
        Operator::Pow => Ok(lhs.powf(rhs)),
    }
}

/// Stack machine over a postfix stream.
#[derive(Debug, Clone, Default)]
pub struct RPNEvaluator {
    limits: Limits,
}

impl RPNEvaluator {
    pub fn new() -> RPNEvaluator {
        RPNEvaluator::default()
    }

    pub fn with_limits(limits: Limits) -> RPNEvaluator {
        RPNEvaluator { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn eval(&self, rpn: &RPNExpr) -> Result<f64, EvalErr> {
        self.eval_str(rpn.as_str())
    }

    pub fn eval_str(&self, postfix: &str) -> Result<f64, EvalErr> {
        if let Some((len, max)) = self.limits.expression_overflow(postfix) {
            return Err(EvalErr::ExpressionTooLong { len, max });
        }
        let mut operands = Stack::new();

        for token in DelimTokenizer::new(postfix.chars(), &[' ']) {
            if let Some((_, max)) = self.limits.token_overflow(&token) {
                return Err(EvalErr::TokenTooLong { token, max });
            }
            if let Some(num) = parse_literal(&token) {
                trace!(num, "push");
                operands.push(num);
                continue;
            }
            let op = Operator::from_token(&token).ok_or(EvalErr::InvalidToken(token))?;
            let r = operands.pop().ok_or(EvalErr::InsufficientOperands)?;
            let l = operands.pop().ok_or(EvalErr::InsufficientOperands)?;
            let result = apply(op, l, r)?;
            trace!(%op, l, r, result, "apply");
            operands.push(result);
        }
        match operands.len() {
            0 => Err(EvalErr::InsufficientOperands),
            1 => operands.pop().ok_or(EvalErr::InsufficientOperands),
            n => Err(EvalErr::TooManyOperands(n)),
        }
    }
}
