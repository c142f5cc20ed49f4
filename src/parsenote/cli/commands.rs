//! # CLI Layer
//!
//! The only place that knows about argv, stdout and exit codes. Everything it
//! does with a note goes through the library functions.
//!
//! Exit codes:
//! - `0`: note printed, usage hint printed, or version printed
//! - `1`: help printed (historic behaviour of the tool, kept as is), or any
//!   error reported by `main`

use super::setup::{get_version, help_text};
use log::debug;
use parsenote::error::Result;
use parsenote::{load_note, write_note};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

pub const HINT: &str = "Use -h/--help for command line help.";

/// What a given argument list asks the tool to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Wrong number of arguments.
    Hint,
    Help,
    Version,
    /// Format the note at this location.
    Run(PathBuf),
}

impl Invocation {
    /// Classifies the arguments that follow the program name.
    pub fn classify(args: &[OsString]) -> Self {
        match args {
            [arg] if arg == "-h" || arg == "--help" => Invocation::Help,
            [arg] if arg == "-V" || arg == "--version" => Invocation::Version,
            [arg] => Invocation::Run(PathBuf::from(arg)),
            _ => Invocation::Hint,
        }
    }
}

pub fn run() -> Result<i32> {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&args, &mut out)
}

/// Runs one invocation, writing user output to `out`, and returns the exit code.
pub fn run_with<W: Write>(args: &[OsString], out: &mut W) -> Result<i32> {
    let invocation = Invocation::classify(args);
    debug!("Invocation: {:?}", invocation);

    match invocation {
        Invocation::Hint => {
            writeln!(out, "{}", HINT)?;
            Ok(0)
        }
        Invocation::Help => {
            write!(out, "{}", help_text())?;
            Ok(1)
        }
        Invocation::Version => {
            writeln!(out, "parsenote {}", get_version())?;
            Ok(0)
        }
        Invocation::Run(path) => {
            let note = load_note(&path)?;
            write_note(out, &note)?;
            Ok(0)
        }
    }
}
