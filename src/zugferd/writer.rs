use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use crate::core::InvoiceError;

fn xml_io(e: std::io::Error) -> InvoiceError {
    InvoiceError::Xml(format!("XML write error: {e}"))
}

fn structure(msg: impl Into<String>) -> InvoiceError {
    InvoiceError::InvalidDocumentStructure(msg.into())
}

/// Fail on characters outside the XML 1.0 `Char` production; escaping
/// cannot represent them.
fn check_chars(value: &str, location: impl FnOnce() -> String) -> Result<(), InvoiceError> {
    match value.chars().find(|&c| {
        matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
    }) {
        Some(c) => Err(structure(format!(
            "character U+{:04X} is not allowed in XML ({})",
            u32::from(c),
            location()
        ))),
        None => Ok(()),
    }
}

/// Forward-only XML writer with an explicit element stack.
///
/// A start tag is held back until its first child, text, or close so that
/// attributes can still be added to it. Every out-of-order call fails with
/// [`InvoiceError::InvalidDocumentStructure`] instead of producing broken
/// output.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
    open: Vec<String>,
    pending: Option<BytesStart<'static>>,
    root_written: bool,
}

impl XmlWriter {
    /// Start a document with an XML declaration. `indent` is the number of
    /// spaces per nesting level; `None` writes everything on one line.
    pub fn new(indent: Option<usize>) -> Result<Self, InvoiceError> {
        let mut writer = match indent {
            Some(width) => Writer::new_with_indent(Cursor::new(Vec::new()), b' ', width),
            None => Writer::new(Cursor::new(Vec::new())),
        };
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self {
            writer,
            open: Vec::new(),
            pending: None,
            root_written: false,
        })
    }

    /// Finish the document. Fails if an element is still open or nothing
    /// was written.
    pub fn into_string(self) -> Result<String, InvoiceError> {
        if !self.open.is_empty() {
            return Err(structure(format!(
                "unclosed elements: {}",
                self.open.join(" > ")
            )));
        }
        if !self.root_written {
            return Err(structure("document has no root element"));
        }
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| InvoiceError::Xml(format!("XML UTF-8 error: {e}")))
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, InvoiceError> {
        if self.open.is_empty() && self.root_written {
            return Err(structure(format!(
                "cannot open <{name}>: document already has a root element"
            )));
        }
        self.flush_pending()?;
        self.pending = Some(BytesStart::new(name.to_owned()));
        self.open.push(name.to_owned());
        self.root_written = true;
        Ok(self)
    }

    /// Add an attribute to the element just opened.
    pub fn attribute(&mut self, name: &str, value: &str) -> Result<&mut Self, InvoiceError> {
        match self.pending.as_mut() {
            Some(start) => {
                check_chars(value, || format!("attribute '{name}'"))?;
                start.push_attribute((name, value));
                Ok(self)
            }
            None => Err(structure(format!(
                "attribute '{name}' must directly follow a start element"
            ))),
        }
    }

    /// Declare `xmlns:{prefix}` on the element just opened.
    pub fn namespace_attribute(&mut self, prefix: &str, uri: &str) -> Result<&mut Self, InvoiceError> {
        self.attribute(&format!("xmlns:{prefix}"), uri)
    }

    /// Text content of the current element.
    pub fn text(&mut self, text: &str) -> Result<&mut Self, InvoiceError> {
        if self.open.is_empty() {
            return Err(structure("text outside of the root element"));
        }
        check_chars(text, || {
            let element = self.open.last().map(String::as_str).unwrap_or_default();
            format!("text of <{element}>")
        })?;
        self.flush_pending()?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        Ok(self)
    }

    /// Close the current element, which must be `name`.
    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, InvoiceError> {
        match self.open.last() {
            Some(current) if current != name => {
                return Err(structure(format!(
                    "cannot close <{name}>: innermost open element is <{current}>"
                )));
            }
            None => return Err(structure(format!("cannot close <{name}>: no open element"))),
            Some(_) => {}
        }
        self.end_current()
    }

    /// Close the current element, whatever its name.
    pub fn end_current(&mut self) -> Result<&mut Self, InvoiceError> {
        let name = self
            .open
            .pop()
            .ok_or_else(|| structure("no open element to close"))?;
        let event = match self.pending.take() {
            Some(start) => Event::Empty(start),
            None => Event::End(BytesEnd::new(name)),
        };
        self.writer.write_event(event).map_err(xml_io)?;
        Ok(self)
    }

    /// Close every open element, innermost first.
    pub fn end_document(&mut self) -> Result<&mut Self, InvoiceError> {
        while !self.open.is_empty() {
            self.end_current()?;
        }
        Ok(self)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, InvoiceError> {
        self.start_element(name)?;
        self.text(text)?;
        self.end_element(name)
    }

    pub fn text_element_with_attrs(
        &mut self,
        name: &str,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, InvoiceError> {
        self.start_element(name)?;
        for (k, v) in attrs {
            self.attribute(k, v)?;
        }
        self.text(text)?;
        self.end_element(name)
    }

    fn flush_pending(&mut self) -> Result<(), InvoiceError> {
        if let Some(start) = self.pending.take() {
            self.writer
                .write_event(Event::Start(start))
                .map_err(xml_io)?;
        }
        Ok(())
    }
}
