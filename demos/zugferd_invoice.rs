use chrono::NaiveDate;
use rust_decimal_macros::dec;
use zugferd_cii::core::*;
use zugferd_cii::zugferd::{self, Attachment, LineNumbering, RenderOptions};

fn main() {
    let invoice = InvoiceBuilder::new(
        "A12345",
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        CurrencyCode::USD,
    )
    .type_code(InvoiceTypeCode::Invoice)
    .profile(Profile::Comfort)
    .buyer(
        TradePartyBuilder::new("Text Control GmbH", "Überseetor 18", "Bremen", "28217", CountryCode::DE)
            .id("TX_1")
            .contact_name("Peter Paulsen")
            .build(),
    )
    .seller(
        TradePartyBuilder::new(
            "Text Control, LLC",
            "6926 Shannon Willow Rd, Suite 400",
            "Charlotte, NC",
            "28210",
            CountryCode::US,
        )
        .id("TX_2")
        .contact_name("Jack Jackson")
        .tax_registration(TaxScheme::Vat, "US12367623")
        .build(),
    )
    .add_line(
        LineItemBuilder::new("Product A", dec!(5), UnitCode::PIECE, dec!(200))
            .product_id("A123")
            .build(),
    )
    .total_amount(dec!(1000))
    .build()
    .expect("invoice should be valid");

    let xml = zugferd::to_xml(&invoice).expect("CII rendering failed");
    println!("{xml}\n");

    // Same document on a single line, with the legacy line numbering
    let options = RenderOptions::default()
        .with_indent(None)
        .with_line_numbering(LineNumbering::Constant);
    let compact = zugferd::to_xml_with(&invoice, &options).expect("CII rendering failed");
    println!("compact: {} bytes", compact.len());

    // Everything the PDF/A step needs to attach the payload
    let attachment =
        Attachment::for_invoice(&invoice, &RenderOptions::default()).expect("CII rendering failed");
    println!(
        "attach {} ({}, AFRelationship /{}): {} bytes",
        attachment.filename,
        attachment.mime_type,
        attachment.relationship,
        attachment.data.len()
    );
    println!("XMP packet: {} bytes", attachment.metadata.len());
}
