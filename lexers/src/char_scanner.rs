#![deny(warnings)]

use crate::scanner::Scanner;

static SPACE: &[char] = &[' '];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Skip and drop plain spaces. Tabs and newlines are left alone.
    pub fn skip_spaces(&mut self) -> bool {
        let skipped = self.skip_all(SPACE);
        self.ignore();
        skipped
    }

    // scan plain decimals like -?[0-9]*(\.[0-9]*)? with at least one digit,
    // no exponent part
    pub fn scan_decimal(&mut self) -> Option<String> {
        let backtrack = self.buffer_pos();
        self.accept(&'-');
        let integral = self.skip_all(DIGITS);
        let fractional = self.accept(&'.').is_some() && self.skip_all(DIGITS);
        if !integral && !fractional {
            self.set_buffer_pos(backtrack);
            return None;
        }
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////
