//! Core invoice types, code lists, formatting, and validation.
//!
//! This module holds the value types the ZUGFeRD renderer reads from and the
//! pure helpers it formats them with. Code lists are closed: an unknown
//! currency, country, or unit code is rejected when the value is constructed.

/// Declare a validated code-list newtype backed by a sorted static table.
///
/// The wrapped `&'static str` always points into the table, so a value of the
/// type can only hold a known code.
macro_rules! code_newtype {
    ($(#[$meta:meta])* $name:ident, $table:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
        #[serde(into = "String")]
        pub struct $name(&'static str);

        // The wrapped str borrows from the table, not the input.
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = <String as serde::Deserialize>::deserialize(deserializer)?;
                code.parse().map_err(serde::de::Error::custom)
            }
        }

        impl $name {
            /// The code as written on the wire.
            pub fn as_str(&self) -> &'static str {
                self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::core::InvoiceError;

            fn from_str(code: &str) -> Result<Self, Self::Err> {
                $table
                    .binary_search(&code)
                    .map(|idx| Self($table[idx]))
                    .map_err(|_| $crate::core::InvoiceError::unsupported($kind, code))
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::core::InvoiceError;

            fn try_from(code: &str) -> Result<Self, Self::Error> {
                code.parse()
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::core::InvoiceError;

            fn try_from(code: String) -> Result<Self, Self::Error> {
                code.parse()
            }
        }

        impl From<$name> for String {
            fn from(code: $name) -> Self {
                code.0.to_string()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.0)
            }
        }
    };
}

mod builder;
pub mod countries;
pub mod currencies;
mod error;
mod format;
mod types;
pub mod units;
mod validation;

pub use builder::*;
pub use countries::CountryCode;
pub use currencies::CurrencyCode;
pub use error::*;
pub use format::*;
pub use types::*;
pub use units::UnitCode;
pub use validation::*;
