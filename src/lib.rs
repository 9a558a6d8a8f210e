//! # zugferd-cii
//!
//! Generates the ZUGFeRD 2.0 Cross Industry Invoice (CII) XML payload from a
//! typed invoice model, ready to be embedded into a PDF/A document.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Rendering is a pure function of the invoice: no clock, no I/O.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use zugferd_cii::core::*;
//! use zugferd_cii::zugferd;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("A12345", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), CurrencyCode::EUR)
//!     .profile(Profile::Comfort)
//!     .seller(TradePartyBuilder::new("ACME GmbH", "Friedrichstraße 123", "Berlin", "10115", CountryCode::DE)
//!         .tax_registration(TaxScheme::Vat, "DE123456789")
//!         .build())
//!     .buyer(TradePartyBuilder::new("Kunde AG", "Marienplatz 1", "München", "80331", CountryCode::DE)
//!         .contact_name("Erika Musterfrau")
//!         .build())
//!     .add_line(LineItemBuilder::new("Beratung", dec!(10), UnitCode::HOUR, dec!(150)).build())
//!     .total_amount(dec!(1500))
//!     .build()
//!     .unwrap();
//!
//! let xml = zugferd::to_xml(&invoice).unwrap();
//! assert!(xml.contains("<ram:GrandTotalAmount>1785.00</ram:GrandTotalAmount>"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Invoice types, code lists, formatting, validation |
//! | `zugferd` | CII XML rendering and attachment packaging |
//! | `all` | Everything |
//!
//! Both `core` and `zugferd` are enabled by default.

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "zugferd")]
pub mod zugferd;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
