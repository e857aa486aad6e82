use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use zip::ZipArchive;
use zip::result::ZipError;

const DOCUMENT_XML: &str = "word/document.xml";

#[derive(Error, Debug)]
pub enum DocxError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("not a valid DOCX archive: {0}")]
    Archive(#[from] ZipError),
    #[error("archive has no word/document.xml")]
    MissingDocument,
    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Extract the text of every body paragraph of a DOCX file.
///
/// DOCX files are ZIP archives; the body lives in `word/document.xml`.
/// Each paragraph is followed by `\n`, the last one included. Legacy binary
/// `.doc` files are not ZIP archives and fail with [`DocxError::Archive`].
pub fn extract_docx(path: &Path) -> Result<String, DocxError> {
    let file = fs::File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let document = match archive.by_name(DOCUMENT_XML) {
        Ok(document) => document,
        Err(ZipError::FileNotFound) => return Err(DocxError::MissingDocument),
        Err(e) => return Err(e.into()),
    };

    paragraphs_text(BufReader::new(document))
}

/// Walk `document.xml` and collect paragraph text.
///
/// Only `w:p` elements directly under `w:body` count as paragraphs, so
/// table cells are skipped. Inside a paragraph, `w:t` contributes its text,
/// and `w:tab`, `w:br` and `w:cr` inside a run become `\t` or `\n`. Page
/// and column breaks (`w:br w:type="page"`) contribute nothing. Text
/// boxes anchored in a paragraph (`w:txbxContent`) are not part of its text.
fn paragraphs_text<R: BufRead>(source: R) -> Result<String, DocxError> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::with_capacity(1024);
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut content = String::with_capacity(8192);
    let mut paragraph = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;
    let mut textbox_depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                match name.as_slice() {
                    b"p" if is_body(&stack) => {
                        in_paragraph = true;
                        paragraph.clear();
                    }
                    b"txbxContent" if in_paragraph => textbox_depth += 1,
                    b"t" if in_paragraph && textbox_depth == 0 => in_text = true,
                    _ => {}
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"p" if is_body(&stack) => content.push('\n'),
                    b"tab" | b"br" | b"cr"
                        if in_paragraph && textbox_depth == 0 && is_run(&stack) =>
                    {
                        match name.as_ref() {
                            b"tab" => paragraph.push('\t'),
                            b"br" if !is_line_break(&e) => {}
                            _ => paragraph.push('\n'),
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(e) if in_text => {
                paragraph.push_str(&e.unescape()?);
            }
            Event::End(e) => {
                stack.pop();
                match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"txbxContent" if in_paragraph => {
                        textbox_depth = textbox_depth.saturating_sub(1);
                    }
                    b"p" if in_paragraph && is_body(&stack) => {
                        content.push_str(&paragraph);
                        content.push('\n');
                        in_paragraph = false;
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(content)
}

fn is_body(stack: &[Vec<u8>]) -> bool {
    stack.last().is_some_and(|n| n == b"body")
}

fn is_run(stack: &[Vec<u8>]) -> bool {
    stack.last().is_some_and(|n| n == b"r")
}

/// A `w:br` without `w:type`, or with `textWrapping`, is a line break.
fn is_line_break(e: &BytesStart<'_>) -> bool {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.local_name().as_ref() == b"type")
        .is_none_or(|a| a.value.as_ref() == b"textWrapping")
}
