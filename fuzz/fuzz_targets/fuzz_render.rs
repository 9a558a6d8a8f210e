#![no_main]

use libfuzzer_sys::fuzz_target;
use quick_xml::Reader;
use quick_xml::events::Event;
use rust_decimal::Decimal;
use zugferd_cii::core::*;
use zugferd_cii::zugferd;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Spread the input over every free-text field the renderer writes.
    let mut parts = s.split('|');
    let mut next = || parts.next().unwrap_or("").to_string();
    let number = next();
    let party = |name: String, street: String| {
        TradePartyBuilder::new(name, street, "Berlin", "10115", CountryCode::DE)
            .contact_name(s.chars().rev().collect::<String>())
            .tax_registration(TaxScheme::Vat, s)
            .build()
    };
    let seller = party(next(), next());
    let buyer = party(next(), next());
    let line_name = next();
    let cents = i64::from(data.first().copied().unwrap_or(0));

    let Ok(invoice) = InvoiceBuilder::new(number, chrono::NaiveDate::MIN, CurrencyCode::EUR)
        .seller(seller)
        .buyer(buyer)
        .add_line(LineItemBuilder::new(line_name, Decimal::ONE, UnitCode::PIECE, Decimal::new(cents, 2)).build())
        .total_amount(Decimal::new(cents, 2))
        .build_unchecked()
    else {
        return;
    };

    // Rendering must not panic; whatever it produces must parse back.
    if let Ok(xml) = zugferd::to_xml(&invoice) {
        let mut reader = Reader::from_str(&xml);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("renderer produced malformed XML: {e}"),
            }
        }
    }
});
