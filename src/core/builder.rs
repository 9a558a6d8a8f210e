use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::countries::CountryCode;
use super::currencies::CurrencyCode;
use super::error::InvoiceError;
use super::types::*;
use super::units::UnitCode;
use super::validation;

/// Days between issue date and due date when no due date is set.
pub const DEFAULT_PAYMENT_DAYS: u64 = 30;

/// Builder for constructing invoices.
///
/// ```
/// use zugferd_cii::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new("A12345", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), CurrencyCode::EUR)
///     .profile(Profile::Comfort)
///     .seller(TradePartyBuilder::new("ACME GmbH", "Hauptstr. 1", "Berlin", "10115", CountryCode::DE)
///         .tax_registration(TaxScheme::Vat, "DE123456789")
///         .build())
///     .buyer(TradePartyBuilder::new("Kunde AG", "Marienplatz 1", "München", "80331", CountryCode::DE)
///         .build())
///     .add_line(LineItemBuilder::new("Beratung", dec!(10), UnitCode::HOUR, dec!(150)).build())
///     .total_amount(dec!(1500))
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.due_date, NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
/// ```
pub struct InvoiceBuilder {
    number: String,
    invoice_date: NaiveDate,
    currency: CurrencyCode,
    type_code: InvoiceTypeCode,
    profile: Profile,
    buyer: Option<TradeParty>,
    seller: Option<TradeParty>,
    total_amount: Decimal,
    due_date: Option<NaiveDate>,
    delivery_date: Option<NaiveDate>,
    applicable_tax: Decimal,
    line_items: Vec<LineItem>,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>, invoice_date: NaiveDate, currency: CurrencyCode) -> Self {
        Self {
            number: number.into(),
            invoice_date,
            currency,
            type_code: InvoiceTypeCode::Invoice,
            profile: Profile::default(),
            buyer: None,
            seller: None,
            total_amount: Decimal::ZERO,
            due_date: None,
            delivery_date: None,
            applicable_tax: dec!(0.19),
            line_items: Vec::new(),
        }
    }

    pub fn type_code(mut self, code: InvoiceTypeCode) -> Self {
        self.type_code = code;
        self
    }

    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn seller(mut self, party: TradeParty) -> Self {
        self.seller = Some(party);
        self
    }

    pub fn buyer(mut self, party: TradeParty) -> Self {
        self.buyer = Some(party);
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.line_items.push(line);
        self
    }

    /// Net total before tax. Not derived from the lines.
    pub fn total_amount(mut self, amount: Decimal) -> Self {
        self.total_amount = amount;
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn delivery_date(mut self, date: NaiveDate) -> Self {
        self.delivery_date = Some(date);
        self
    }

    /// Tax rate as a fraction (0.07 for 7 %).
    pub fn applicable_tax(mut self, rate: Decimal) -> Self {
        self.applicable_tax = rate;
        self
    }

    /// Build the invoice and run [`validate_invoice`](validation::validate_invoice).
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, InvoiceError> {
        let invoice = self.build_unchecked()?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(InvoiceError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build without validation. Buyer and seller may be absent.
    pub fn build_unchecked(self) -> Result<Invoice, InvoiceError> {
        // Input limits to prevent abuse
        if self.number.trim().is_empty() {
            return Err(InvoiceError::Builder("invoice number is required".into()));
        }
        if self.number.len() > 200 {
            return Err(InvoiceError::Builder(
                "invoice number cannot exceed 200 characters".into(),
            ));
        }
        if self.line_items.len() > 10_000 {
            return Err(InvoiceError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }

        let due_date = match self.due_date {
            Some(date) => date,
            None => self
                .invoice_date
                .checked_add_days(Days::new(DEFAULT_PAYMENT_DAYS))
                .ok_or_else(|| InvoiceError::Builder("default due date out of range".into()))?,
        };

        Ok(Invoice {
            number: self.number,
            invoice_date: self.invoice_date,
            currency: self.currency,
            type_code: self.type_code,
            profile: self.profile,
            buyer: self.buyer,
            seller: self.seller,
            total_amount: self.total_amount,
            due_date,
            delivery_date: self.delivery_date,
            applicable_tax: self.applicable_tax,
            line_items: self.line_items,
        })
    }
}

/// Builder for TradeParty (seller/buyer).
pub struct TradePartyBuilder {
    id: String,
    name: String,
    contact_name: Option<String>,
    street: String,
    city: String,
    postcode: String,
    country: CountryCode,
    tax_registrations: Vec<TaxId>,
}

impl TradePartyBuilder {
    pub fn new(
        name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        postcode: impl Into<String>,
        country: CountryCode,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            contact_name: None,
            street: street.into(),
            city: city.into(),
            postcode: postcode.into(),
            country,
            tax_registrations: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn contact_name(mut self, name: impl Into<String>) -> Self {
        self.contact_name = Some(name.into());
        self
    }

    /// Append a tax registration; registrations keep insertion order.
    pub fn tax_registration(mut self, scheme: TaxScheme, id: impl Into<String>) -> Self {
        self.tax_registrations.push(TaxId {
            scheme,
            id: id.into(),
        });
        self
    }

    pub fn build(self) -> TradeParty {
        TradeParty {
            id: self.id,
            name: self.name,
            contact_name: self.contact_name,
            street: self.street,
            city: self.city,
            postcode: self.postcode,
            country: self.country,
            tax_registrations: self.tax_registrations,
        }
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    product_id: String,
    name: String,
    quantity: Decimal,
    unit_code: UnitCode,
    price: Decimal,
    total: Option<Decimal>,
}

impl LineItemBuilder {
    pub fn new(name: impl Into<String>, quantity: Decimal, unit_code: UnitCode, price: Decimal) -> Self {
        Self {
            product_id: String::new(),
            name: name.into(),
            quantity,
            unit_code,
            price,
            total: None,
        }
    }

    pub fn product_id(mut self, id: impl Into<String>) -> Self {
        self.product_id = id.into();
        self
    }

    /// Informational line total; defaults to `price × quantity`.
    pub fn total(mut self, total: Decimal) -> Self {
        self.total = Some(total);
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            product_id: self.product_id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            unit_code: self.unit_code,
            total: self.total.unwrap_or_else(|| self.price.saturating_mul(self.quantity)),
        }
    }
}
