use std::io::{self, BufRead};

use clap::Parser;
use reckon::{NumericMode, Options, Strictness, calculate};
use tracing_subscriber::filter::LevelFilter;

/// reckon evaluates an arithmetic expression made of non-negative numbers,
/// `+ - * /` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate in floating-point mode and accept decimal literals. Results
    /// are printed with four fractional digits.
    #[arg(long)]
    float: bool,

    /// Skip whatever token closes a parenthesized expression without checking
    /// it, and ignore input left after the expression.
    #[arg(long)]
    lenient: bool,

    /// Log more details to stderr; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. When omitted, one line is read from stdin.
    expression: Option<String>,
}

impl Args {
    fn options(&self) -> Options {
        let mode = if self.float { NumericMode::Float } else { NumericMode::Integer };
        let strictness = if self.lenient { Strictness::Lenient } else { Strictness::Strict };
        Options::default().with_mode(mode)
                          .with_strictness(strictness)
    }

    const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn read_line() -> Result<String, String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => Err("Failed to read input: no input given.".to_string()),
        Ok(_) => Ok(line.trim_end_matches(['\n', '\r']).to_string()),
        Err(e) => Err(format!("Failed to read input: {e}")),
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt().with_max_level(args.log_level())
                             .with_writer(io::stderr)
                             .without_time()
                             .init();

    let options = args.options();
    tracing::info!(?options, "starting");

    let input = match args.expression {
        Some(expression) => expression,
        None => read_line().unwrap_or_else(|e| {
                               eprintln!("{e}");
                               std::process::exit(1);
                           }),
    };

    match calculate(&input, options) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            tracing::debug!(error = ?e, "evaluation failed");
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
