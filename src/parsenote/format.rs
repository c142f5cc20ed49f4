use crate::error::Result;
use crate::model::Note;
use std::fmt;
use std::io::{self, Write};

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Note from {} ({})  -->  {}",
            self.author, self.date, self.content
        )
    }
}

/// Renders the one-line summary of a note.
///
/// Fields are inserted verbatim; an empty field (from an element such as
/// `<date/>`) renders as an empty string, e.g. `Note from Bob ()  -->  ...`.
///
/// ```
/// use parsenote::{format_note, Note};
///
/// let note = Note::new("Bob", "18-08-2019", "Call Bill");
/// assert_eq!(format_note(&note), "Note from Bob (18-08-2019)  -->  Call Bill");
/// ```
pub fn format_note(note: &Note) -> String {
    note.to_string()
}

/// Writes the summary line, newline-terminated, in a single write.
pub fn write_note<W: Write>(writer: &mut W, note: &Note) -> Result<()> {
    let line = format!("{}\n", format_note(note));
    writer.write_all(line.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Prints the summary line to standard output.
pub fn print_formatted_note(note: &Note) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_note(&mut handle, note)
}
