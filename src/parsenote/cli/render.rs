use colored::*;
use parsenote::NoteError;

/// Reports a fatal error on stderr.
pub fn print_error(err: &NoteError) {
    eprintln!("{} {}", "Error:".red(), err);
}
