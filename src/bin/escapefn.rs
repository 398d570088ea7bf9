//! escapefn CLI
//!
//! Read NUL-separated raw filename lists from files (or stdin) and convert
//! them to LF-separated escaped text, or the reverse with `--unescape`.

use anyhow::Context;
use clap::Parser;
use escapefn::{Escaper, Mode, Status, Unescaper};
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

// Process exit codes, in the priority order faults are reported
const EXIT_OK: i32 = 0;
const EXIT_OPTION: i32 = 1;
const EXIT_OPEN: i32 = 2;
const EXIT_READ: i32 = 3;
const EXIT_WRITE: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "escapefn")]
#[command(version)]
#[command(about = "Convert NUL-separated filename lists to LF-separated escaped text")]
struct Cli {
    /// Escape LF and backslash only (default)
    #[arg(short, long, overrides_with_all = ["minimum", "cstyle", "octal"])]
    minimum: bool,

    /// Escape all C0 control chars and DEL in C style
    #[arg(short, long, overrides_with_all = ["minimum", "cstyle", "octal"])]
    cstyle: bool,

    /// Escape all C0 control chars and DEL in octal
    #[arg(short, long, overrides_with_all = ["minimum", "cstyle", "octal"])]
    octal: bool,

    /// Unescape instead of escape
    #[arg(short, long)]
    unescape: bool,

    /// Input files; "-" means stdin (stdin if none given)
    files: Vec<PathBuf>,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.octal {
            Mode::Octal
        } else if self.cstyle {
            Mode::CStyle
        } else {
            Mode::Minimum
        }
    }
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let code = if e.use_stderr() { EXIT_OPTION } else { EXIT_OK };
        let _ = e.print();
        process::exit(code);
    });
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let mut sink = BufWriter::new(io::stdout().lock());
    let mut code = EXIT_OK;

    if cli.files.is_empty() {
        return transduce(cli, io::stdin().lock(), &mut sink);
    }

    // All inputs are attempted even after one fails; the first non-OK
    // status decides the exit code.
    for path in &cli.files {
        let result = if path.as_os_str() == "-" {
            transduce(cli, io::stdin().lock(), &mut sink)
        } else {
            match fs::File::open(path)
                .with_context(|| format!("cannot open file {}", path.display()))
            {
                Ok(file) => transduce(cli, file, &mut sink),
                Err(err) => {
                    eprintln!("Error: {err:#}");
                    EXIT_OPEN
                }
            }
        };
        if code == EXIT_OK {
            code = result;
        }
    }

    code
}

fn transduce<R: Read, W: Write>(cli: &Cli, source: R, sink: &mut W) -> i32 {
    let status = if cli.unescape {
        Unescaper::new().unescape(source, sink)
    } else {
        Escaper::new(cli.mode()).escape(source, sink)
    };
    match status {
        Status::Ok => EXIT_OK,
        Status::ReadFault => EXIT_READ,
        Status::WriteFault => EXIT_WRITE,
    }
}
