use std::process::ExitCode;

use clap::Parser;
use rpncalc::{CalcError, Calculator, Limits};
use tracing::warn;

/// Evaluate arithmetic expressions, infix by default
#[derive(Parser, Debug)]
#[command(name = "rpncalc", about, long_about = None)]
struct Args {
    /// Read input as a space separated postfix stream
    #[arg(long)]
    rpn: bool,

    /// Use the 255 char expression / 31 char token bounds
    #[arg(long)]
    historical_limits: bool,

    /// Maximum expression length in chars
    #[arg(long, value_name = "N")]
    max_expr: Option<usize>,

    /// Maximum token length in chars
    #[arg(long, value_name = "N")]
    max_token: Option<usize>,

    /// Expression to evaluate, starts a REPL when missing
    expression: Vec<String>,
}

impl Args {
    fn limits(&self) -> Limits {
        let mut limits = if self.historical_limits {
            Limits::historical()
        } else {
            Limits::unbounded()
        };
        if let Some(max) = self.max_expr {
            limits = limits.with_max_expression_len(max);
        }
        if let Some(max) = self.max_token {
            limits = limits.with_max_token_len(max);
        }
        limits
    }
}

mod repl {
    use super::*;

    pub fn evalexpr(calc: &Calculator, rpn: bool, input: &str) -> Result<f64, CalcError> {
        if rpn {
            calc.evaluate_rpn(input)
        } else {
            calc.evaluate_infix(input)
        }
    }

    pub fn run(calc: &Calculator, rpn: bool) -> rustyline::Result<()> {
        let histpath = dirs::home_dir().map(|h| h.join(".rpncalc_history"));
        let mut rl = rustyline::DefaultEditor::new()?;
        if let Some(path) = &histpath {
            if rl.load_history(path).is_err() {
                println!("No history yet");
            }
        }
        while let Ok(input) = rl.readline(">> ") {
            if input.trim().is_empty() {
                continue;
            }
            rl.add_history_entry(input.as_str())?;
            match evalexpr(calc, rpn, &input) {
                Ok(result) => println!("{}", result),
                Err(e) => println!("{}", e),
            }
        }
        if let Some(path) = &histpath {
            if let Err(e) = rl.save_history(path) {
                warn!(error = %e, "could not save history");
            }
        }
        Ok(())
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    // RPNCALC_LOG wins over RUST_LOG, warn when neither is set
    let filter = EnvFilter::try_from_env("RPNCALC_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();
    let calc = Calculator::with_limits(args.limits());

    if !args.expression.is_empty() {
        let input = args.expression.join(" ");
        return match repl::evalexpr(&calc, args.rpn, &input) {
            Ok(result) => {
                println!("{} = {}", input, result);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        };
    }
    match repl::run(&calc, args.rpn) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("readline error: {}", e);
            ExitCode::FAILURE
        }
    }
}
