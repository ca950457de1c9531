use std::fmt;

use lexers::Scanner;
use thiserror::Error;
use tracing::trace;

use crate::limits::Limits;
use crate::stack::Stack;

static NUMERIC: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("invalid character {ch:?} at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },
    #[error("mismatched parenthesis at position {pos}")]
    MismatchedParentheses { pos: usize },
    #[error("expression is {len} chars long, limit is {max}")]
    ExpressionTooLong { len: usize, max: usize },
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    /// Operators are always a single char, anything longer is not one.
    pub fn from_token(token: &str) -> Option<Operator> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binding strength (higher binds tighter) and associativity of `op`.
pub fn precedence(op: Operator) -> (usize, Assoc) {
    match op {
        Operator::Add | Operator::Sub => (1, Assoc::Left),
        Operator::Mul | Operator::Div => (2, Assoc::Left),
        Operator::Pow => (3, Assoc::Right),
    }
}

/// A postfix stream: space separated tokens, digits of one literal
/// kept together. Evaluation splits it back on spaces.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct RPNExpr(pub String);

impl RPNExpr {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// entries of the operator stack, open parens remember where they were
#[derive(PartialEq, Debug, Clone, Copy)]
enum Pending {
    OParen(usize),
    Op(Operator),
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse_with(expr, &Limits::default())
    }

    pub fn parse_with(expr: &str, limits: &Limits) -> Result<RPNExpr, ParseError> {
        if let Some((len, max)) = limits.expression_overflow(expr) {
            return Err(ParseError::ExpressionTooLong { len, max });
        }
        Self::parse(&mut Scanner::new(expr.chars()))
    }

    pub fn parse<I>(scanner: &mut Scanner<I>) -> Result<RPNExpr, ParseError>
    where
        I: Iterator<Item = char>,
    {
        let mut out = String::new();
        let mut stack = Stack::new();

        loop {
            scanner.skip_spaces();
            // digits and dots go straight out, glued to the current literal
            if scanner.skip_all(NUMERIC) {
                let digits = scanner.extract_string();
                trace!(digits = %digits, "operand");
                out.push_str(&digits);
                continue;
            }
            let Some(c) = scanner.next() else { break };
            let pos = scanner.offset();
            scanner.ignore();

            match c {
                '(' => stack.push(Pending::OParen(pos)),
                ')' => loop {
                    match stack.pop() {
                        Some(Pending::Op(op)) => {
                            out.push(' ');
                            out.push(op.symbol());
                        }
                        Some(Pending::OParen(_)) => break,
                        None => return Err(ParseError::MismatchedParentheses { pos }),
                    }
                },
                c => {
                    let Some(op) = Operator::from_char(c) else {
                        return Err(ParseError::InvalidCharacter { ch: c, pos });
                    };
                    trace!(%op, "operator");
                    let (prec_rhs, assoc_rhs) = precedence(op);
                    out.push(' ');
                    while let Some(&Pending::Op(top)) = stack.peek() {
                        let (prec_lhs, _) = precedence(top);
                        let pops = match assoc_rhs {
                            Assoc::Left => prec_rhs <= prec_lhs,
                            Assoc::Right => prec_rhs < prec_lhs,
                        };
                        if !pops {
                            break;
                        }
                        stack.pop();
                        out.push(top.symbol());
                        out.push(' ');
                    }
                    stack.push(Pending::Op(op));
                }
            }
        }
        while let Some(top) = stack.pop() {
            out.push(' ');
            match top {
                Pending::OParen(pos) => return Err(ParseError::MismatchedParentheses { pos }),
                Pending::Op(op) => out.push(op.symbol()),
            }
        }
        Ok(RPNExpr(out))
    }
}
