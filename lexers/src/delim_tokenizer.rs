#![deny(warnings)]

use crate::scanner::Scanner;

/// Splits input on each delimiter, dropping the delimiters.
/// Runs of delimiters never produce empty tokens.
pub struct DelimTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
    delims: Vec<char>,
}

impl<I: Iterator<Item = char>> DelimTokenizer<I> {
    pub fn new(source: I, delims: &[char]) -> Self {
        DelimTokenizer {
            src: Scanner::new(source),
            delims: delims.to_vec(),
        }
    }

    /// Absolute offset of the next unread char in the source.
    pub fn offset(&self) -> usize {
        self.src.offset()
    }
}

impl<I: Iterator<Item = char>> Iterator for DelimTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<String> {
        self.src.skip_all(&self.delims);
        self.src.ignore();
        if self.src.until_any(&self.delims) {
            Some(self.src.extract_string())
        } else {
            None
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
