mod char_scanner;
mod delim_tokenizer;
mod scanner;

pub use delim_tokenizer::DelimTokenizer;
pub use scanner::Scanner;
