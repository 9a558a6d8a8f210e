use thiserror::Error;

/// Errors that can occur during invoice construction or XML rendering.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// A code outside its closed code list (currency, country, unit, ...).
    #[error("unsupported {kind} code '{code}'")]
    UnsupportedCode { kind: CodeKind, code: String },

    /// Buyer or seller is absent while the renderer requires both.
    #[error("missing required {0} trade party")]
    MissingRequiredParty(PartyRole),

    /// The XML writer was used out of order (mismatched close, attribute
    /// after content, second root element, unclosed elements).
    #[error("invalid document structure: {0}")]
    InvalidDocumentStructure(String),

    /// Amount arithmetic left the representable `Decimal` range.
    #[error("amount overflow: {0}")]
    Overflow(String),

    /// XML buffer I/O or encoding error.
    #[error("XML error: {0}")]
    Xml(String),
}

impl InvoiceError {
    pub(crate) fn overflow(what: impl Into<String>) -> Self {
        Self::Overflow(what.into())
    }

    pub(crate) fn unsupported(kind: CodeKind, code: impl Into<String>) -> Self {
        Self::UnsupportedCode {
            kind,
            code: code.into(),
        }
    }
}

/// The closed code list a rejected value was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    /// ISO 4217.
    Currency,
    /// ISO 3166-1 alpha-2.
    Country,
    /// UN/ECE Recommendation 20.
    Unit,
    /// UNTDID 1153 tax registration scheme.
    TaxScheme,
    /// UNTDID 1001.
    InvoiceType,
}

impl std::fmt::Display for CodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Currency => "currency",
            Self::Country => "country",
            Self::Unit => "unit",
            Self::TaxScheme => "tax scheme",
            Self::InvoiceType => "invoice type",
        })
    }
}

/// Which side of the trade agreement a party sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyRole {
    Seller,
    Buyer,
}

impl std::fmt::Display for PartyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Seller => "seller",
            Self::Buyer => "buyer",
        })
    }
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "seller.name").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// EN 16931 business rule ID if applicable (e.g. "BR-02").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error without a rule ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error with an EN 16931 rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
