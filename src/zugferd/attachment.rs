use super::options::RenderOptions;
use super::render::to_xml_with;
use crate::core::{Invoice, InvoiceError, Profile};

/// File name of the embedded invoice XML.
pub const ZUGFERD_FILENAME: &str = "ZUGFeRD-invoice.xml";

/// MIME type of the embedded file.
pub const ZUGFERD_MIME_TYPE: &str = "application/xml";

/// Description of the embedded file.
pub const ZUGFERD_DESCRIPTION: &str = "ZUGFeRD-invoice";

/// `AFRelationship` of the embedded file to the PDF.
pub const AF_RELATIONSHIP: &str = "Alternative";

/// XMP extension schema declaring the ZUGFeRD `fx` properties, bundled at
/// compile time. `{conformance_level}` is filled in by [`metadata`].
pub const ZUGFERD_METADATA: &str = include_str!("zugferd-metadata.xml");

const CONFORMANCE_PLACEHOLDER: &str = "{conformance_level}";

/// The XMP metadata packet for an invoice of the given profile.
pub fn metadata(profile: Profile) -> String {
    ZUGFERD_METADATA.replace(CONFORMANCE_PLACEHOLDER, profile.conformance_level())
}

/// Everything the PDF/A embedding step needs to attach the invoice XML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: &'static str,
    pub mime_type: &'static str,
    pub description: &'static str,
    pub relationship: &'static str,
    /// UTF-8 encoded invoice XML.
    pub data: Vec<u8>,
    /// XMP metadata packet for the document catalog.
    pub metadata: String,
}

impl Attachment {
    /// Render `invoice` and package it for embedding.
    pub fn for_invoice(invoice: &Invoice, options: &RenderOptions) -> Result<Self, InvoiceError> {
        let xml = to_xml_with(invoice, options)?;
        Ok(Self {
            filename: ZUGFERD_FILENAME,
            mime_type: ZUGFERD_MIME_TYPE,
            description: ZUGFERD_DESCRIPTION,
            relationship: AF_RELATIONSHIP,
            data: xml.into_bytes(),
            metadata: metadata(invoice.profile),
        })
    }

    /// The attached XML as text.
    pub fn xml(&self) -> Result<&str, InvoiceError> {
        std::str::from_utf8(&self.data).map_err(|e| InvoiceError::Xml(format!("XML UTF-8 error: {e}")))
    }
}
