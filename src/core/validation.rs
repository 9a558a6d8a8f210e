use rust_decimal::Decimal;

use super::error::ValidationError;
use super::format::DEFAULT_DECIMALS;
use super::types::*;

/// Validate an invoice before rendering.
/// Returns all validation errors found (not just the first).
///
/// Code lists need no check here: an invalid currency, country, or unit code
/// cannot be constructed.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // BR-02: An Invoice shall have an Invoice number
    if invoice.number.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "number",
            "invoice number must not be empty",
            "BR-02",
        ));
    }

    // BR-06: Seller name
    validate_party(invoice.seller.as_ref(), "seller", "BR-06", &mut errors);

    // BR-07: Buyer name
    validate_party(invoice.buyer.as_ref(), "buyer", "BR-07", &mut errors);

    // BR-16: An Invoice shall have at least one Invoice line
    if invoice.line_items.is_empty() {
        errors.push(ValidationError::with_rule(
            "line_items",
            "invoice must have at least one line item",
            "BR-16",
        ));
    }

    if invoice.applicable_tax < Decimal::ZERO || invoice.applicable_tax > Decimal::ONE {
        errors.push(ValidationError::new(
            "applicable_tax",
            format!(
                "tax rate {} must be a fraction between 0 and 1",
                invoice.applicable_tax
            ),
        ));
    }

    if invoice.due_date < invoice.invoice_date {
        errors.push(ValidationError::new(
            "due_date",
            "due date must not be before the invoice date",
        ));
    }

    // BR-CO-10: Sum of Invoice line net amount
    if !invoice.line_items.is_empty() {
        let line_sum = invoice
            .line_items
            .iter()
            .try_fold(Decimal::ZERO, |sum, line| {
                sum.checked_add(line.net_amount().ok()?)
            });
        match line_sum {
            None => errors.push(ValidationError::new(
                "line_items",
                "sum of line net amounts is out of range",
            )),
            Some(line_sum)
                if line_sum.round_dp(DEFAULT_DECIMALS)
                    != invoice.total_amount.round_dp(DEFAULT_DECIMALS) =>
            {
            errors.push(ValidationError::with_rule(
                "total_amount",
                format!(
                    "total amount {} does not match the sum of line net amounts {}",
                    invoice.total_amount, line_sum
                ),
                "BR-CO-10",
            ));
            }
            Some(_) => {}
        }
    }

    if invoice.grand_total().is_err() || invoice.tax_percent().is_err() {
        errors.push(ValidationError::new(
            "total_amount",
            "tax or gross amount is out of range",
        ));
    }

    errors
}

fn validate_party(
    party: Option<&TradeParty>,
    prefix: &str,
    rule: &str,
    errors: &mut Vec<ValidationError>,
) {
    let Some(party) = party else {
        errors.push(ValidationError::with_rule(
            prefix,
            format!("{prefix} trade party is required"),
            rule,
        ));
        return;
    };

    if party.name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.name"),
            format!("{prefix} name must not be empty"),
            rule,
        ));
    }
    if party.city.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.city"),
            format!("{prefix} city must not be empty"),
        ));
    }
}
