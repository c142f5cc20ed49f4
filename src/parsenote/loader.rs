//! Reading note documents.
//!
//! A note document is XML with a single root whose immediate children are
//! flat text elements:
//!
//! ```text
//! <note>
//!   <author>Bob</author>
//!   <date>18-08-2019</date>
//!   <content>Call Bill</content>
//! </note>
//! ```
//!
//! The loader does not know which fields a note needs; it returns every child
//! element as a [`FieldMap`] entry and leaves validation to [`Note::from_fields`].

use crate::error::{NoteError, Result};
use crate::model::{FieldMap, Note};
use encoding_rs::{Encoding, UTF_8};
use log::debug;
use std::fs;
use std::path::Path;

/// Parses note XML held in memory.
///
/// Keys are element local names: namespaces are dropped, so `<n:author>`
/// fills `author`. Values are the element's leading text, or the empty string
/// when the element has none. Comments, processing instructions and
/// whitespace between elements are skipped. A `<!DOCTYPE>` is accepted but
/// never fetched or validated against.
pub fn parse_fields(xml: &str) -> Result<FieldMap> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(xml, options)?;
    let fields: FieldMap = doc
        .root_element()
        .children()
        .filter(|node| node.is_element())
        .map(|node| (node.tag_name().name(), node.text().unwrap_or_default()))
        .collect();
    Ok(fields)
}

/// Reads and parses the note document at `path`.
///
/// The file is read in full and closed before parsing begins.
pub fn load_fields<P: AsRef<Path>>(path: P) -> Result<FieldMap> {
    let path = path.as_ref();
    debug!("Loading note from {}", path.display());

    let bytes = fs::read(path).map_err(|source| NoteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let xml = decode_document(&bytes)?;
    let fields = parse_fields(&xml)?;

    debug!("Parsed {} field(s) from {}", fields.len(), path.display());
    Ok(fields)
}

/// Decodes raw document bytes to text.
///
/// The encoding comes from a byte order mark if there is one, then from the
/// `encoding` attribute of the XML declaration, and defaults to UTF-8.
/// Unknown labels and undecodable bytes are [`NoteError::Encoding`].
pub fn decode_document(bytes: &[u8]) -> Result<String> {
    let encoding = match Encoding::for_bom(bytes) {
        Some((encoding, _)) => encoding,
        None => match declared_encoding(bytes) {
            Some(label) => Encoding::for_label(label.as_bytes())
                .ok_or_else(|| NoteError::Encoding(format!("unsupported encoding \"{label}\"")))?,
            None => UTF_8,
        },
    };

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(NoteError::Encoding(format!(
            "document is not valid {}",
            used.name()
        )));
    }
    debug!("Decoded document as {}", used.name());
    Ok(text.into_owned())
}

/// The `encoding` pseudo-attribute of a leading `<?xml ...?>` declaration.
fn declared_encoding(bytes: &[u8]) -> Option<&str> {
    let decl = bytes.strip_prefix(b"<?xml")?;
    let end = decl.windows(2).position(|w| w == b"?>")?;
    let decl = std::str::from_utf8(&decl[..end]).ok()?;

    let after = &decl[decl.find("encoding")? + "encoding".len()..];
    let value = after.trim_start().strip_prefix('=')?.trim_start();
    let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &value[1..];
    Some(&value[..value.find(quote)?])
}

/// Reads the document at `path` and extracts a [`Note`] from it.
pub fn load_note<P: AsRef<Path>>(path: P) -> Result<Note> {
    let fields = load_fields(path)?;
    Note::from_fields(&fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const BOB: &str = "<note>\n<author>Bob</author>\n<date>18-08-2019</date>\n<content>Call Bill</content>\n</note>\n";

    #[test]
    fn test_parse_fields() {
        let fields = parse_fields(BOB).unwrap();
        assert_eq!(fields.get("author"), Some("Bob"));
        assert_eq!(fields.get("date"), Some("18-08-2019"));
        assert_eq!(fields.get("content"), Some("Call Bill"));
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_keys_match_child_elements_exactly() {
        let xml = "<memo><to>Tove</to><from>Jani</from><heading/><body>Hi</body></memo>";
        let fields = parse_fields(xml).unwrap();
        let keys: BTreeSet<_> = fields.keys().collect();
        let expected: BTreeSet<_> = ["to", "from", "heading", "body"].into_iter().collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_empty_root_gives_empty_map() {
        let fields = parse_fields("<note/>").unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_empty_element_maps_to_empty_string() {
        let fields = parse_fields("<note><author></author><date/></note>").unwrap();
        assert_eq!(fields.get("author"), Some(""));
        assert_eq!(fields.get("date"), Some(""));
    }

    #[test]
    fn test_skips_comments_and_processing_instructions() {
        let xml = "<?xml version=\"1.0\"?><note><!-- draft --><?pi x?><author>Bob</author></note>";
        let fields = parse_fields(xml).unwrap();
        let keys: Vec<_> = fields.keys().collect();
        assert_eq!(keys, vec!["author"]);
    }

    #[test]
    fn test_value_is_leading_text_only() {
        let xml = "<note><content>Call <b>Bill</b> now</content></note>";
        let fields = parse_fields(xml).unwrap();
        assert_eq!(fields.get("content"), Some("Call "));
    }

    #[test]
    fn test_whitespace_and_entities_preserved() {
        let xml = "<note><content>  Tom &amp; Jerry </content></note>";
        let fields = parse_fields(xml).unwrap();
        assert_eq!(fields.get("content"), Some("  Tom & Jerry "));
    }

    #[test]
    fn test_namespaced_elements_use_local_name() {
        let xml = "<n:note xmlns:n=\"urn:notes\"><n:author>Bob</n:author></n:note>";
        let fields = parse_fields(xml).unwrap();
        assert_eq!(fields.get("author"), Some("Bob"));
    }

    #[test]
    fn test_doctype_declaration_accepted() {
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE note SYSTEM \"Note.dtd\">\n<note><author>Bob</author><date>18-08-2019</date><content>Call Bill</content></note>";
        let fields = parse_fields(xml).unwrap();
        assert_eq!(fields.get("author"), Some("Bob"));
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_empty_element_formats_as_empty() {
        let xml = "<note><author>Bob</author><date/><content>Call Bill</content></note>";
        let note = Note::from_fields(&parse_fields(xml).unwrap()).unwrap();
        assert_eq!(
            crate::format::format_note(&note),
            "Note from Bob ()  -->  Call Bill"
        );
    }

    #[test]
    fn test_declared_encoding() {
        assert_eq!(
            declared_encoding(b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><note/>"),
            Some("ISO-8859-1")
        );
        assert_eq!(
            declared_encoding(b"<?xml version='1.0' encoding = 'utf-8' ?><note/>"),
            Some("utf-8")
        );
        assert_eq!(declared_encoding(b"<?xml version=\"1.0\"?><note/>"), None);
        assert_eq!(declared_encoding(b"<note/>"), None);
    }

    #[test]
    fn test_decode_latin1_by_declaration() {
        let mut bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><note><author>Jos".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b"</author></note>");

        let fields = parse_fields(&decode_document(&bytes).unwrap()).unwrap();
        assert_eq!(fields.get("author"), Some("Jos\u{e9}"));
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("<note><author>Zo\u{eb}</author></note>".as_bytes());

        let fields = parse_fields(&decode_document(&bytes).unwrap()).unwrap();
        assert_eq!(fields.get("author"), Some("Zo\u{eb}"));
    }

    #[test]
    fn test_decode_invalid_utf8_is_encoding_error() {
        let bytes = b"<note><author>Jos\xE9</author></note>";
        let err = decode_document(bytes).unwrap_err();
        assert!(matches!(err, NoteError::Encoding(_)));
    }

    #[test]
    fn test_decode_unknown_label() {
        let err = decode_document(b"<?xml version=\"1.0\" encoding=\"klingon\"?><note/>").unwrap_err();
        assert!(err.to_string().contains("unsupported encoding \"klingon\""));
    }

    #[test]
    fn test_load_latin1_note_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("n.xml");
        let mut bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<note><author>Jos".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b"</author><date>1-1-2020</date><content>Caf");
        bytes.push(0xE9);
        bytes.extend_from_slice(b"</content></note>\n");
        fs::write(&path, bytes).unwrap();

        let note = load_note(&path).unwrap();
        assert_eq!(note, Note::new("Jos\u{e9}", "1-1-2020", "Caf\u{e9}"));
    }

    #[test]
    fn test_malformed_document() {
        let err = parse_fields("<note><author>Bob</note>").unwrap_err();
        assert!(matches!(err, NoteError::Xml(_)));
    }

    #[test]
    fn test_load_fields_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.xml");
        let err = load_fields(&path).unwrap_err();
        match err {
            NoteError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_note_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.xml");
        fs::write(&path, BOB).unwrap();

        let note = load_note(&path).unwrap();
        assert_eq!(note, Note::new("Bob", "18-08-2019", "Call Bill"));
    }

    #[test]
    fn test_load_note_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.xml");
        fs::write(&path, "<note><author>Bob</author><date>1-1-2020</date></note>").unwrap();

        let err = load_note(&path).unwrap_err();
        assert!(matches!(err, NoteError::MissingField("content")));
    }
}
