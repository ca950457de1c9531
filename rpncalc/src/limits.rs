/// Optional size bounds applied while converting and evaluating.
///
/// Buffers grow as needed, so the default is unbounded. When a bound is
/// set, exceeding it is reported as `ExpressionTooLong` or `TokenTooLong`.
/// Lengths are counted in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Limits {
    pub max_expression_len: Option<usize>,
    pub max_token_len: Option<usize>,
}

impl Limits {
    /// No bounds at all.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// The bounds of the fixed buffers the calculator used to have:
    /// 255 chars of expression and 31 chars per token.
    pub fn historical() -> Self {
        Limits {
            max_expression_len: Some(255),
            max_token_len: Some(31),
        }
    }

    pub fn with_max_expression_len(mut self, max: usize) -> Self {
        self.max_expression_len = Some(max);
        self
    }

    pub fn with_max_token_len(mut self, max: usize) -> Self {
        self.max_token_len = Some(max);
        self
    }

    /// Returns `Some((len, max))` if `text` exceeds the expression bound.
    pub(crate) fn expression_overflow(&self, text: &str) -> Option<(usize, usize)> {
        overflow(text, self.max_expression_len)
    }

    /// Returns `Some((len, max))` if `token` exceeds the token bound.
    pub(crate) fn token_overflow(&self, token: &str) -> Option<(usize, usize)> {
        overflow(token, self.max_token_len)
    }
}

fn overflow(text: &str, max: Option<usize>) -> Option<(usize, usize)> {
    let max = max?;
    let len = text.chars().count();
    if len > max {
        Some((len, max))
    } else {
        None
    }
}
