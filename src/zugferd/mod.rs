//! ZUGFeRD 2.0 Cross Industry Invoice (CII) XML generation.
//!
//! Renders an [`Invoice`](crate::core::Invoice) into the UN/CEFACT
//! CrossIndustryInvoice grammar and packages the result for the PDF/A
//! embedding step.
//!
//! # Profiles
//!
//! | Profile | Line net price block |
//! |---------|----------------------|
//! | Basic | omitted |
//! | Comfort | included |
//! | Extended | included |
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use zugferd_cii::core::*;
//! use zugferd_cii::zugferd::{self, RenderOptions};
//!
//! let invoice = InvoiceBuilder::new("RE-1", NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), CurrencyCode::EUR)
//!     .profile(Profile::Basic)
//!     .seller(TradePartyBuilder::new("ACME GmbH", "Hauptstr. 1", "Berlin", "10115", CountryCode::DE).build())
//!     .buyer(TradePartyBuilder::new("Kunde AG", "Marienplatz 1", "München", "80331", CountryCode::DE).build())
//!     .add_line(LineItemBuilder::new("Wartung", dec!(1), UnitCode::PIECE, dec!(100)).build())
//!     .total_amount(dec!(100))
//!     .build()
//!     .unwrap();
//!
//! let xml = zugferd::to_xml_with(&invoice, &RenderOptions::default().with_indent(None)).unwrap();
//! assert!(!xml.contains("NetPriceProductTradePrice"));
//! assert!(xml.contains("<ram:ID>urn:cen.eu:en16931:2017#compliant#urn:zugferd.de:2p0:basic</ram:ID>"));
//! ```

mod attachment;
mod options;
mod render;
mod writer;

pub use attachment::{
    AF_RELATIONSHIP, Attachment, ZUGFERD_DESCRIPTION, ZUGFERD_FILENAME, ZUGFERD_METADATA,
    ZUGFERD_MIME_TYPE, metadata,
};
pub use options::{LineNumbering, RenderOptions};
pub use render::{to_xml, to_xml_with};
pub use writer::XmlWriter;

/// Guideline URN prefix; the lower-cased profile name is appended.
pub const GUIDELINE_URN_PREFIX: &str = "urn:cen.eu:en16931:2017#compliant#urn:zugferd.de:2p0:";

/// Namespace prefixes and URIs declared on the root element, in order.
pub mod cii_ns {
    pub const A: &str = "urn:un:unece:uncefact:data:standard:QualifiedDataType:100";
    pub const RSM: &str = "urn:un:unece:uncefact:data:standard:CrossIndustryInvoice:100";
    pub const QDT: &str = "urn:un:unece:uncefact:data:standard:QualifiedDataType:10";
    pub const RAM: &str =
        "urn:un:unece:uncefact:data:standard:ReusableAggregateBusinessInformationEntity:100";
    pub const XS: &str = "http://www.w3.org/2001/XMLSchema";
    pub const UDT: &str = "urn:un:unece:uncefact:data:standard:UnqualifiedDataType:100";

    pub const DECLARATIONS: [(&str, &str); 6] = [
        ("a", A),
        ("rsm", RSM),
        ("qdt", QDT),
        ("ram", RAM),
        ("xs", XS),
        ("udt", UDT),
    ];
}
