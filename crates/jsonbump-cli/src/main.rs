//! Command-line front end: parse a JSON file and pretty-print it.
//!
//! Exit codes follow the library's error taxonomy: 200 for an unexpected
//! end of input, 201 for an unexpected character, 1 for anything else.
//! Diagnostics (message, offset, context window, caret) go to stderr; the
//! formatted tree goes to stdout.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as _;
use jsonbump::{Arena, Printer, parse_reader};

#[derive(clap::Parser)]
#[command(name = "jsonbump", version, about = "Parse a JSON file and pretty-print it")]
struct Cli {
    /// JSON file to parse.
    file: PathBuf,

    /// Spaces of indentation per nesting level.
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let file = match File::open(&cli.file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("jsonbump: {}: {e}", cli.file.display());
            return ExitCode::FAILURE;
        }
    };

    let arena = Arena::new();
    let value = match parse_reader(BufReader::new(file), &arena) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("jsonbump: {e}");
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1));
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = Printer::new(cli.indent)
        .print(&value, &mut out)
        .and_then(|()| out.write_all(b"\n"))
    {
        eprintln!("jsonbump: write failed: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
