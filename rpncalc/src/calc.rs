use tracing::debug;

use crate::error::CalcError;
use crate::limits::Limits;
use crate::parser::ShuntingParser;
use crate::rpneval::RPNEvaluator;

/// Converts infix text to postfix and hands it to its evaluator.
///
/// Holds only configuration, every call builds its own stacks, so a
/// single `Calculator` can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    evaluator: RPNEvaluator,
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator::default()
    }

    pub fn with_limits(limits: Limits) -> Calculator {
        Calculator {
            evaluator: RPNEvaluator::with_limits(limits),
        }
    }

    pub fn limits(&self) -> &Limits {
        self.evaluator.limits()
    }

    pub fn evaluate_infix(&self, expr: &str) -> Result<f64, CalcError> {
        debug!(expr, "evaluating infix");
        let rpn = ShuntingParser::parse_with(expr, self.limits()).map_err(|e| {
            debug!(error = %e, "conversion failed");
            e
        })?;
        debug!(postfix = %rpn, "converted");
        self.run(rpn.as_str())
    }

    pub fn evaluate_rpn(&self, postfix: &str) -> Result<f64, CalcError> {
        debug!(postfix, "evaluating rpn");
        self.run(postfix)
    }

    fn run(&self, postfix: &str) -> Result<f64, CalcError> {
        let result = self.evaluator.eval_str(postfix);
        match &result {
            Ok(value) => debug!(value, "evaluated"),
            Err(e) => debug!(error = %e, "evaluation failed"),
        }
        result.map_err(CalcError::from)
    }
}

/// Evaluate infix text with no size limits.
pub fn evaluate_infix(expr: &str) -> Result<f64, CalcError> {
    Calculator::new().evaluate_infix(expr)
}

/// Evaluate a space separated postfix stream with no size limits.
pub fn evaluate_rpn(postfix: &str) -> Result<f64, CalcError> {
    Calculator::new().evaluate_rpn(postfix)
}
