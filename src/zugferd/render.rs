use rust_decimal::Decimal;

use super::options::RenderOptions;
use super::writer::XmlWriter;
use super::{GUIDELINE_URN_PREFIX, cii_ns};
use crate::core::*;

/// `format` attribute value for `udt:DateTimeString`.
const DATE_FORMAT_102: &str = "102";

/// Generate ZUGFeRD CII XML with default [`RenderOptions`].
pub fn to_xml(invoice: &Invoice) -> Result<String, InvoiceError> {
    to_xml_with(invoice, &RenderOptions::default())
}

/// Generate ZUGFeRD CII XML.
///
/// The element order follows the CrossIndustryInvoice grammar. The output
/// depends only on `invoice` and `options`.
pub fn to_xml_with(invoice: &Invoice, options: &RenderOptions) -> Result<String, InvoiceError> {
    tracing::debug!(
        number = %invoice.number,
        profile = invoice.profile.name(),
        lines = invoice.line_items.len(),
        "rendering CII XML"
    );

    let mut r = Renderer {
        w: XmlWriter::new(options.indent)?,
        invoice,
        options,
    };

    r.w.start_element("rsm:CrossIndustryInvoice")?;
    for (prefix, uri) in cii_ns::DECLARATIONS {
        r.w.namespace_attribute(prefix, uri)?;
    }

    r.write_document_context()?;
    r.write_exchanged_document()?;

    // --- SupplyChainTradeTransaction ---
    r.w.start_element("rsm:SupplyChainTradeTransaction")?;

    for (index, line) in invoice.line_items.iter().enumerate() {
        r.write_line(index, line)?;
    }

    r.w.start_element("ram:ApplicableHeaderTradeAgreement")?;
    r.write_party("ram:SellerTradeParty", PartyRole::Seller, invoice.seller.as_ref())?;
    r.write_party("ram:BuyerTradeParty", PartyRole::Buyer, invoice.buyer.as_ref())?;
    r.w.end_element("ram:ApplicableHeaderTradeAgreement")?;

    r.write_delivery()?;
    r.write_settlement()?;

    r.w.end_element("rsm:SupplyChainTradeTransaction")?;
    r.w.end_element("rsm:CrossIndustryInvoice")?;

    r.w.into_string()
}

struct Renderer<'a> {
    w: XmlWriter,
    invoice: &'a Invoice,
    options: &'a RenderOptions,
}

impl Renderer<'_> {
    fn write_document_context(&mut self) -> Result<(), InvoiceError> {
        let guideline = format!("{GUIDELINE_URN_PREFIX}{}", self.invoice.profile.name());

        self.w.start_element("rsm:ExchangedDocumentContext")?;
        self.w.start_element("ram:GuidelineSpecifiedDocumentContextParameter")?;
        self.w.text_element("ram:ID", &guideline)?;
        self.w.end_element("ram:GuidelineSpecifiedDocumentContextParameter")?;
        self.w.end_element("rsm:ExchangedDocumentContext")?;
        Ok(())
    }

    fn write_exchanged_document(&mut self) -> Result<(), InvoiceError> {
        let invoice = self.invoice;
        self.w.start_element("rsm:ExchangedDocument")?;
        self.w.text_element("ram:ID", &invoice.number)?;
        self.w.text_element("ram:TypeCode", &invoice.type_code.code().to_string())?;
        write_date(&mut self.w, "ram:IssueDateTime", invoice.invoice_date)?;
        self.w.end_element("rsm:ExchangedDocument")?;
        Ok(())
    }

    fn write_line(&mut self, index: usize, line: &LineItem) -> Result<(), InvoiceError> {
        let w = &mut self.w;
        w.start_element("ram:IncludedSupplyChainTradeLineItem")?;

        w.start_element("ram:AssociatedDocumentLineDocument")?;
        write_optional(w, "ram:LineID", &self.options.line_numbering.line_id(index))?;
        w.end_element("ram:AssociatedDocumentLineDocument")?;

        w.start_element("ram:SpecifiedTradeProduct")?;
        write_optional(w, "ram:Name", &line.name)?;
        w.end_element("ram:SpecifiedTradeProduct")?;

        if self.invoice.profile.includes_net_price() {
            w.start_element("ram:SpecifiedLineTradeAgreement")?;
            w.start_element("ram:NetPriceProductTradePrice")?;
            write_optional(w, "ram:ChargeAmount", &format_plain(line.price))?;
            w.end_element("ram:NetPriceProductTradePrice")?;
            w.end_element("ram:SpecifiedLineTradeAgreement")?;
        }

        w.start_element("ram:SpecifiedLineTradeDelivery")?;
        w.text_element_with_attrs(
            "ram:BilledQuantity",
            &format_plain(line.quantity),
            &[("unitCode", line.unit_code.as_str())],
        )?;
        w.end_element("ram:SpecifiedLineTradeDelivery")?;

        w.start_element("ram:SpecifiedLineTradeSettlement")?;
        w.start_element("ram:ApplicableTradeTax")?;
        w.text_element("ram:TypeCode", "VAT")?;
        w.text_element("ram:CategoryCode", "S")?;
        w.text_element(
            "ram:RateApplicablePercent",
            &format_plain(self.invoice.tax_percent()?),
        )?;
        w.end_element("ram:ApplicableTradeTax")?;
        let line_total = format_amount(line.net_amount()?, self.options.amount_decimals);
        w.start_element("ram:SpecifiedTradeSettlementLineMonetarySummation")?;
        w.text_element("ram:LineTotalAmount", &line_total)?;
        w.end_element("ram:SpecifiedTradeSettlementLineMonetarySummation")?;
        w.end_element("ram:SpecifiedLineTradeSettlement")?;

        w.end_element("ram:IncludedSupplyChainTradeLineItem")?;
        Ok(())
    }

    fn write_party(
        &mut self,
        element: &str,
        role: PartyRole,
        party: Option<&TradeParty>,
    ) -> Result<(), InvoiceError> {
        let Some(party) = party else {
            if self.options.require_parties {
                return Err(InvoiceError::MissingRequiredParty(role));
            }
            tracing::warn!(
                number = %self.invoice.number,
                %role,
                "trade party missing, omitting block"
            );
            return Ok(());
        };

        let w = &mut self.w;
        w.start_element(element)?;
        write_optional(w, "ram:Name", &party.name)?;

        w.start_element("ram:PostalTradeAddress")?;
        w.text_element("ram:PostcodeCode", &party.postcode)?;
        match party.contact() {
            Some(contact) => {
                w.text_element("ram:LineOne", contact)?;
                w.text_element("ram:LineTwo", &party.street)?;
            }
            None => {
                w.text_element("ram:LineOne", &party.street)?;
            }
        }
        w.text_element("ram:CityName", &party.city)?;
        w.text_element("ram:CountryID", party.country.as_str())?;
        w.end_element("ram:PostalTradeAddress")?;

        for tax_id in &party.tax_registrations {
            w.start_element("ram:SpecifiedTaxRegistration")?;
            w.text_element_with_attrs("ram:ID", &tax_id.id, &[("schemeID", tax_id.scheme.code())])?;
            w.end_element("ram:SpecifiedTaxRegistration")?;
        }

        w.end_element(element)?;
        Ok(())
    }

    fn write_delivery(&mut self) -> Result<(), InvoiceError> {
        let w = &mut self.w;
        w.start_element("ram:ApplicableHeaderTradeDelivery")?;
        w.start_element("ram:ActualDeliverySupplyChainEvent")?;
        write_date(w, "ram:OccurrenceDateTime", self.invoice.effective_delivery_date())?;
        w.end_element("ram:ActualDeliverySupplyChainEvent")?;
        w.end_element("ram:ApplicableHeaderTradeDelivery")?;
        Ok(())
    }

    fn write_settlement(&mut self) -> Result<(), InvoiceError> {
        let invoice = self.invoice;
        let decimals = self.options.amount_decimals;
        let currency = invoice.currency.as_str();
        let total = invoice.total_amount;
        let tax = invoice.tax_amount()?;
        let grand_total = invoice.grand_total()?;
        let percent = invoice.tax_percent()?;

        let w = &mut self.w;
        w.start_element("ram:ApplicableHeaderTradeSettlement")?;
        w.text_element("ram:InvoiceCurrencyCode", currency)?;

        w.start_element("ram:ApplicableTradeTax")?;
        write_optional_amount(w, "ram:CalculatedAmount", Some(tax), decimals, Some(currency))?;
        w.text_element("ram:TypeCode", "VAT")?;
        write_optional_amount(w, "ram:BasisAmount", Some(total), decimals, None)?;
        w.text_element("ram:CategoryCode", "S")?;
        w.text_element("ram:RateApplicablePercent", &format_plain(percent))?;
        w.end_element("ram:ApplicableTradeTax")?;

        w.start_element("ram:SpecifiedTradePaymentTerms")?;
        write_date(w, "ram:DueDateDateTime", invoice.due_date)?;
        w.end_element("ram:SpecifiedTradePaymentTerms")?;

        let summation = [
            ("ram:LineTotalAmount", Some(total), None),
            ("ram:ChargeTotalAmount", Some(Decimal::ZERO), None),
            ("ram:AllowanceTotalAmount", Some(Decimal::ZERO), None),
            ("ram:TaxBasisTotalAmount", Some(total), None),
            ("ram:TaxTotalAmount", Some(tax), Some(currency)),
            ("ram:GrandTotalAmount", Some(grand_total), None),
            ("ram:DuePayableAmount", Some(grand_total), None),
        ];
        w.start_element("ram:SpecifiedTradeSettlementHeaderMonetarySummation")?;
        for (tag, value, currency) in summation {
            write_optional_amount(w, tag, value, decimals, currency)?;
        }
        w.end_element("ram:SpecifiedTradeSettlementHeaderMonetarySummation")?;

        w.end_element("ram:ApplicableHeaderTradeSettlement")?;
        Ok(())
    }
}

/// Write `element/udt:DateTimeString[format=102]`.
fn write_date(w: &mut XmlWriter, element: &str, date: chrono::NaiveDate) -> Result<(), InvoiceError> {
    w.start_element(element)?;
    w.text_element_with_attrs(
        "udt:DateTimeString",
        &format_date(date, DateFormat::Code102),
        &[("format", DATE_FORMAT_102)],
    )?;
    w.end_element(element)?;
    Ok(())
}

/// Write a text element unless `value` is empty.
fn write_optional(w: &mut XmlWriter, element: &str, value: &str) -> Result<(), InvoiceError> {
    if !value.is_empty() {
        w.text_element(element, value)?;
    }
    Ok(())
}

/// Write an amount element unless the amount is unset. Zero is written.
fn write_optional_amount(
    w: &mut XmlWriter,
    element: &str,
    value: Option<Decimal>,
    decimals: u32,
    currency: Option<&str>,
) -> Result<(), InvoiceError> {
    let Some(value) = value else {
        return Ok(());
    };
    let text = format_amount(value, decimals);
    match currency {
        Some(code) => w.text_element_with_attrs(element, &text, &[("currencyID", code)])?,
        None => w.text_element(element, &text)?,
    };
    Ok(())
}
