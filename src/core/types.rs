use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::countries::CountryCode;
use super::currencies::CurrencyCode;
use super::error::{CodeKind, InvoiceError};
use super::units::UnitCode;

/// The invoice document rendered into a CII payload.
///
/// Built once by the caller (usually via [`InvoiceBuilder`](super::InvoiceBuilder))
/// and only ever borrowed by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice number (unique per seller).
    pub number: String,
    /// Issue date.
    pub invoice_date: NaiveDate,
    /// Invoice currency.
    pub currency: CurrencyCode,
    /// Document type (UNTDID 1001).
    pub type_code: InvoiceTypeCode,
    /// ZUGFeRD conformance level.
    pub profile: Profile,
    /// Buyer. Required for a compliant document.
    pub buyer: Option<TradeParty>,
    /// Seller. Required for a compliant document.
    pub seller: Option<TradeParty>,
    /// Net total before tax. Supplied by the caller, never derived from lines.
    pub total_amount: Decimal,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Actual delivery date; the invoice date is used when absent.
    pub delivery_date: Option<NaiveDate>,
    /// Tax rate as a fraction (0.19 = 19 %).
    pub applicable_tax: Decimal,
    /// Line items in output order.
    pub line_items: Vec<LineItem>,
}

impl Invoice {
    /// Header tax amount: `total_amount × applicable_tax`.
    pub fn tax_amount(&self) -> Result<Decimal, InvoiceError> {
        self.total_amount
            .checked_mul(self.applicable_tax)
            .ok_or_else(|| InvoiceError::overflow("total amount × tax rate"))
    }

    /// Gross amount: net total plus tax.
    pub fn grand_total(&self) -> Result<Decimal, InvoiceError> {
        self.total_amount
            .checked_add(self.tax_amount()?)
            .ok_or_else(|| InvoiceError::overflow("total amount + tax amount"))
    }

    /// Tax rate as a percentage (0.19 → 19).
    pub fn tax_percent(&self) -> Result<Decimal, InvoiceError> {
        self.applicable_tax
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| InvoiceError::overflow("tax rate × 100"))
    }

    /// The date of the actual delivery event.
    pub fn effective_delivery_date(&self) -> NaiveDate {
        self.delivery_date.unwrap_or(self.invoice_date)
    }
}

/// Buyer or seller with postal address and tax registrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeParty {
    /// Caller-side party identifier (not rendered).
    pub id: String,
    pub name: String,
    /// Contact person; when set it takes address line one and the street
    /// moves to line two.
    pub contact_name: Option<String>,
    pub street: String,
    pub city: String,
    pub postcode: String,
    pub country: CountryCode,
    /// Tax registrations in output order.
    pub tax_registrations: Vec<TaxId>,
}

impl TradeParty {
    /// The contact name if present and non-empty.
    pub fn contact(&self) -> Option<&str> {
        self.contact_name.as_deref().filter(|c| !c.is_empty())
    }
}

/// A tax registration number with its scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxId {
    pub scheme: TaxScheme,
    pub id: String,
}

/// Tax registration scheme (`schemeID` of `ram:SpecifiedTaxRegistration/ram:ID`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxScheme {
    /// VA: VAT identification number (USt-IdNr.).
    #[serde(rename = "VA")]
    Vat,
    /// FC: fiscal code / tax number (Steuernummer).
    #[serde(rename = "FC")]
    FiscalCode,
}

impl TaxScheme {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Vat => "VA",
            Self::FiscalCode => "FC",
        }
    }

    /// Parse from the scheme code.
    pub fn from_code(code: &str) -> Result<Self, InvoiceError> {
        match code {
            "VA" => Ok(Self::Vat),
            "FC" => Ok(Self::FiscalCode),
            other => Err(InvoiceError::unsupported(CodeKind::TaxScheme, other)),
        }
    }
}

/// Invoice line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Seller's product identifier (not rendered).
    pub product_id: String,
    /// Product name; omitted from the XML when empty.
    pub name: String,
    /// Net price per unit.
    pub price: Decimal,
    pub quantity: Decimal,
    pub unit_code: UnitCode,
    /// Caller-side line total. Informational only: the renderer always uses
    /// [`LineItem::net_amount`].
    pub total: Decimal,
}

impl LineItem {
    /// `price × quantity`.
    pub fn net_amount(&self) -> Result<Decimal, InvoiceError> {
        self.price
            .checked_mul(self.quantity)
            .ok_or_else(|| InvoiceError::overflow(format!("line '{}': price × quantity", self.name)))
    }
}

/// ZUGFeRD conformance level, ordered from least to most detailed with
/// `Unknown` last.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Profile {
    Basic,
    Comfort,
    Extended,
    #[default]
    Unknown,
}

impl Profile {
    /// Profile name as used in the guideline URN (`basic`, `comfort`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Comfort => "comfort",
            Self::Extended => "extended",
            Self::Unknown => "unknown",
        }
    }

    /// The XMP `fx:ConformanceLevel` value.
    pub fn conformance_level(&self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::Comfort => "COMFORT",
            Self::Extended => "EXTENDED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Whether line items carry a net price block.
    pub fn includes_net_price(&self) -> bool {
        *self != Self::Basic
    }
}

/// UNTDID 1001: Invoice type codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceTypeCode {
    /// 380: Commercial invoice.
    #[default]
    Invoice,
    /// 381: Credit note.
    CreditNote,
    /// 384: Corrected invoice.
    Corrected,
    /// 386: Prepayment invoice.
    Prepayment,
    /// 326: Partial invoice.
    Partial,
}

impl InvoiceTypeCode {
    /// UNTDID 1001 numeric code.
    pub fn code(&self) -> u16 {
        match self {
            Self::Invoice => 380,
            Self::CreditNote => 381,
            Self::Corrected => 384,
            Self::Prepayment => 386,
            Self::Partial => 326,
        }
    }

    /// Parse from UNTDID 1001 numeric code.
    pub fn from_code(code: u16) -> Result<Self, InvoiceError> {
        match code {
            380 => Ok(Self::Invoice),
            381 => Ok(Self::CreditNote),
            384 => Ok(Self::Corrected),
            386 => Ok(Self::Prepayment),
            326 => Ok(Self::Partial),
            other => Err(InvoiceError::unsupported(
                CodeKind::InvoiceType,
                other.to_string(),
            )),
        }
    }
}
