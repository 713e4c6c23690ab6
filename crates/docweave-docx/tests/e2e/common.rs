//! Common utilities for E2E tests.

use std::io::{Cursor, Read};

use docweave_docx::Document;
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

/// Write a document into an in-memory package.
pub fn write_to_vec(doc: &Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.write(Cursor::new(&mut buf)).unwrap();
    buf
}

/// Open a written package.
pub fn open(bytes: &[u8]) -> ZipArchive<Cursor<&[u8]>> {
    ZipArchive::new(Cursor::new(bytes)).unwrap()
}

/// Read one part as UTF-8.
pub fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = open(bytes);
    let mut file = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part {}", name));
    let mut out = String::new();
    file.read_to_string(&mut out).unwrap();
    out
}

/// Read one part as raw bytes.
pub fn read_bytes(bytes: &[u8], name: &str) -> Vec<u8> {
    let mut archive = open(bytes);
    let mut file = archive.by_name(name).unwrap();
    let mut out = Vec::new();
    file.read_to_end(&mut out).unwrap();
    out
}

/// Names of every part, in archive order.
pub fn part_names(bytes: &[u8]) -> Vec<String> {
    let archive = open(bytes);
    archive.file_names().map(str::to_string).collect()
}

/// Parse the whole document and fail on the first XML error.
pub fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0i32;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!(
                "malformed XML at {}: {}",
                reader.buffer_position(),
                e
            ),
        }
    }
    assert_eq!(depth, 0, "unbalanced elements");
}

/// Every value of `attr` on elements named `tag`, in document order.
pub fn attribute_values(xml: &str, tag: &str, attr: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut values = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.name().as_ref() == tag.as_bytes() {
                    for a in e.attributes().flatten() {
                        if a.key.as_ref() == attr.as_bytes() {
                            values.push(a.unescape_value().unwrap().into_owned());
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML: {}", e),
        }
    }
    values
}

/// Text content of every `w:t` element, in document order.
pub fn text_runs(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut inside = false;
    let mut texts = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => {
                inside = true;
                texts.push(String::new());
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:t" => inside = false,
            Ok(Event::Text(t)) if inside => {
                if let Some(last) = texts.last_mut() {
                    last.push_str(&t.unescape().unwrap());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML: {}", e),
        }
    }
    texts
}
