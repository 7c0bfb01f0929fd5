//! Structural tokenization of WN-LMF documents.
//!
//! This module reduces the raw XML stream to the four event kinds the
//! graph builder consumes:
//! - element open, with its decoded attributes
//! - element close
//! - bare character data
//! - end of document
//!
//! XML prologue noise (declaration, comments, processing instructions,
//! doctype) is consumed silently. Anything else, such as a CDATA
//! section, is outside the structural model and aborts the parse.

use quick_xml::{events::{BytesStart, Event}, Reader};
use std::io::BufRead;

use super::error::{LmfError, Result};

/// An opened element: local tag name plus decoded attributes in
/// document order.
pub struct OpenTag {
    pub name: String,
    pub attrs: Vec<(String, String)>,
}

/// One structural event drawn from the document stream.
pub enum RawEvent {
    Open(OpenTag),
    /// Close of the element with this local name.
    Close(String),
    /// Character data inside the currently open element, with XML
    /// entities already resolved.
    Text(String),
    Eof,
}

/// Sequential reader of structural events.
///
/// The sequence is ordered, finite, and cannot be restarted; the scanner
/// owns the underlying reader and its buffer.
pub struct Scanner<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        // Self-closing tags surface as an open/close pair, so the
        // builder sees one uniform shape for <Sense .../> and
        // <Sense ...></Sense>.
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Pulls the next structural event.
    ///
    /// # Errors
    /// Returns [`LmfError::Structural`] for malformed XML and
    /// [`LmfError::UnexpectedEvent`] for event kinds outside the
    /// structural model.
    pub fn next_event(&mut self) -> Result<RawEvent> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    return Ok(RawEvent::Open(decode_open(&e)?));
                }
                Ok(Event::End(e)) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    return Ok(RawEvent::Close(name));
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape().map_err(|err| {
                        LmfError::Structural(format!("Failed to decode character data: {}", err))
                    })?;
                    return Ok(RawEvent::Text(text.into_owned()));
                }
                Ok(Event::Eof) => return Ok(RawEvent::Eof),
                Ok(Event::Decl(_)) | Ok(Event::Comment(_)) | Ok(Event::PI(_))
                | Ok(Event::DocType(_)) => {}
                Ok(Event::CData(_)) => {
                    return Err(LmfError::UnexpectedEvent("CDATA section"));
                }
                Err(err) => {
                    return Err(LmfError::Structural(format!(
                        "Malformed XML at byte {}: {}",
                        self.reader.buffer_position(),
                        err
                    )));
                }
            }
        }
    }
}

/// Decodes an open tag into its local name and attribute pairs.
///
/// Attribute keys keep their local name only; values are XML-unescaped.
fn decode_open(e: &BytesStart) -> Result<OpenTag> {
    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();

    let mut attrs = Vec::new();
    for attr_result in e.attributes() {
        let attr = attr_result.map_err(|err| {
            LmfError::Structural(format!("Failed to parse attribute in <{}>: {}", name, err))
        })?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| {
                LmfError::Structural(format!(
                    "Failed to decode value of '{}' in <{}>: {}",
                    key, name, err
                ))
            })?
            .into_owned();
        attrs.push((key, value));
    }

    Ok(OpenTag { name, attrs })
}
