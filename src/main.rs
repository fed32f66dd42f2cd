//! multirange CLI
//!
//! Print the length, the elements, or selected elements of a cartesian
//! product given on the command line.
//!
//! Usage:
//!     multirange len '["+", "-"]' 2 e 3
//!     multirange list --limit 4 12 21
//!     multirange --format json get --index 21 --index 251 12 21

use std::io::{self, Write};
use std::process::{ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level};

use multirange::{MultiRange, Value};

/// Cartesian products of ranges, by position or in order
#[derive(Parser)]
#[command(name = "multirange")]
#[command(version)]
#[command(about = "Cartesian products of ranges", long_about = None)]
struct Cli {
    /// Log more detail to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// How to print each element
    #[arg(long, value_enum, default_value_t = Format::Tuple, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `(0, 'h', "+")`
    Tuple,
    /// `[0, "h", "+"]`
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the number of elements
    Len {
        /// Axes: N, LO..HI, a JSON value, or a bare word
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the elements in order
    List {
        /// Number of elements to skip first
        #[arg(long, default_value_t = 0)]
        skip: usize,

        /// Maximum number of elements to print
        #[arg(long)]
        limit: Option<usize>,

        /// Axes: N, LO..HI, a JSON value, or a bare word
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the element at each ordinal position
    Get {
        /// Ordinal position (repeatable)
        #[arg(short, long = "index", required = true)]
        indices: Vec<usize>,

        /// Axes: N, LO..HI, a JSON value, or a bare word
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Range(#[from] multirange::Error),

    #[error("Output error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------------------------------------------------------------

/// Reads one command-line argument as a [`Value`].
///
/// `LO..HI` is a pair. Otherwise the argument is read as JSON if it parses,
/// or else as a bare string.
fn parse_arg(arg: &str) -> Result<Value, multirange::Error> {
    if let Some((lo, hi)) = arg.split_once("..") {
        if let (Ok(lo), Ok(hi)) = (lo.trim().parse::<i64>(), hi.trim().parse::<i64>()) {
            return Ok(Value::from((lo, hi)));
        }
    }
    match serde_json::from_str::<serde_json::Value>(arg) {
        Ok(json) => from_json(json),
        Err(_) => Ok(Value::from(arg)),
    }
}

fn from_json(json: serde_json::Value) -> Result<Value, multirange::Error> {
    use serde_json::Value as J;
    Ok(match json {
        J::Null => Value::Unit,
        J::Bool(b) => Value::Bool(b),
        J::Number(n) => match n.as_i64() {
            Some(n) => Value::Int(n),
            None => return Err(multirange::Error::NotRangeable {found: format!("number {}", n)}),
        },
        J::String(s) => Value::Str(s),
        J::Array(items) => Value::List(items.into_iter().map(from_json).collect::<Result<_, _>>()?),
        J::Object(_) => return Err(multirange::Error::NotRangeable {found: "JSON object".into()}),
    })
}

fn build(args: &[String]) -> Result<MultiRange, multirange::Error> {
    let values = args.iter().map(|a| parse_arg(a)).collect::<Result<Vec<_>, _>>()?;
    MultiRange::try_new(values)
}

/// Prints one element. A product of one axis prints bare values.
fn write_element(out: &mut impl Write, format: Format, v: &Value) -> Result<(), CliError> {
    match format {
        Format::Tuple => writeln!(out, "{}", v)?,
        Format::Json => writeln!(out, "{}", serde_json::to_string(v)?)?,
    }
    Ok(())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    match cli.command {
        Commands::Len { args } => {
            let range = build(&args)?;
            writeln!(out, "{}", range.len())?;
        }
        Commands::List { skip, limit, args } => {
            let range = build(&args)?;
            tracing::debug!(skip, ?limit, len = range.len(), "listing");
            let mut iter = range.elements();
            if skip > 0 { iter.nth(skip - 1); }
            for v in iter.take(limit.unwrap_or(usize::MAX)) {
                write_element(out, cli.format, &v)?;
            }
        }
        Commands::Get { indices, args } => {
            let range = build(&args)?;
            for index in indices {
                write_element(out, cli.format, &range.element(index)?)?;
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("multirange").chain(args.iter().copied()))
            .expect("arguments should parse");
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).expect("output is UTF-8"))
    }

    #[test]
    fn parse_shapes() {
        assert_eq!(parse_arg("5").unwrap(), Value::Int(5));
        assert_eq!(parse_arg("-3..2").unwrap(), Value::from((-3i64, 2i64)));
        assert_eq!(parse_arg(r#"["+", "-"]"#).unwrap(), Value::from(vec!["+", "-"]));
        assert_eq!(parse_arg("e").unwrap(), Value::from("e"));
        assert_eq!(parse_arg(r#""12""#).unwrap(), Value::from("12"));
        assert_eq!(parse_arg("null").unwrap(), Value::Unit);
        assert!(parse_arg("1.5").is_err());
        assert!(parse_arg(r#"{"a": 1}"#).is_err());
    }

    #[test]
    fn len() {
        assert_eq!(run_args(&["len", r#"["+", "-"]"#, "5..9", "10"]).unwrap(), "80\n");
        assert_eq!(run_args(&["len"]).unwrap(), "0\n");
    }

    #[test]
    fn list() {
        assert_eq!(
            run_args(&["list", "--skip", "1", "--limit", "2", "2", "ab"]).unwrap(),
            "(0, 'b')\n(1, 'a')\n",
        );
        assert_eq!(
            run_args(&["--format", "json", "list", "--limit", "1", r#"["+"]"#, "2"]).unwrap(),
            "[\"+\",0]\n",
        );
        assert_eq!(run_args(&["list", "--skip", "9", "2", "3"]).unwrap(), "");
    }

    #[test]
    fn list_single_axis() {
        assert_eq!(run_args(&["list", "3"]).unwrap(), "0\n1\n2\n");
        assert_eq!(run_args(&["--format", "json", "list", "ab"]).unwrap(), "\"a\"\n\"b\"\n");
        assert_eq!(run_args(&["get", "-i", "1", "2..5"]).unwrap(), "3\n");
    }

    #[test]
    fn get() {
        assert_eq!(
            run_args(&["get", "--index", "0", "-i", "21", "12", "21"]).unwrap(),
            "(0, 0)\n(1, 0)\n",
        );
        assert!(matches!(
            run_args(&["get", "--index", "144", "2", "3"]),
            Err(CliError::Range(multirange::Error::OutOfRange {index: 144, len: 6})),
        ));
    }

    #[test]
    fn not_rangeable() {
        assert!(matches!(
            run_args(&["len", "3", "true"]),
            Err(CliError::Range(multirange::Error::NotRangeable {..})),
        ));
    }
}
