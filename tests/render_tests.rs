#![cfg(feature = "zugferd")]

use chrono::NaiveDate;
use quick_xml::Reader;
use quick_xml::events::Event;
use rust_decimal_macros::dec;
use zugferd_cii::core::*;
use zugferd_cii::zugferd::{self, Attachment, LineNumbering, RenderOptions};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seller() -> TradeParty {
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
    .build()
}

fn buyer() -> TradeParty {
    TradePartyBuilder::new("Text Control GmbH", "Überseetor 18", "Bremen", "28217", CountryCode::DE)
        .id("TX_1")
        .contact_name("Peter Paulsen")
        .build()
}

fn sample_builder() -> InvoiceBuilder {
    InvoiceBuilder::new("A12345", date(2024, 1, 5), CurrencyCode::USD)
        .type_code(InvoiceTypeCode::Invoice)
        .profile(Profile::Comfort)
        .buyer(buyer())
        .seller(seller())
        .add_line(
            LineItemBuilder::new("Product A", dec!(5), UnitCode::PIECE, dec!(200))
                .product_id("A123")
                .total(dec!(1000))
                .build(),
        )
        .total_amount(dec!(1000))
}

fn sample_invoice() -> Invoice {
    sample_builder().build().unwrap()
}

/// Texts of every leaf element named `name`, in document order.
fn element_texts(xml: &str, name: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut out = Vec::new();
    let mut inside = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => inside = e.name().as_ref() == name.as_bytes(),
            Event::Text(t) if inside => {
                out.push(t.unescape().unwrap().into_owned());
                inside = false;
            }
            Event::End(_) => inside = false,
            Event::Eof => break,
            _ => {}
        }
    }
    out
}

fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut roots = 0;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Ok(Event::Empty(_)) => {
                if depth == 0 {
                    roots += 1;
                }
            }
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => break,
            Err(e) => panic!("malformed XML at {}: {e}", reader.buffer_position()),
            _ => {}
        }
    }
    assert_eq!(depth, 0, "unbalanced tags");
    assert_eq!(roots, 1, "expected exactly one root element");
}

fn position(xml: &str, needle: &str) -> usize {
    xml.find(needle)
        .unwrap_or_else(|| panic!("{needle} not found in output"))
}

// ---------------------------------------------------------------------------
// Document skeleton
// ---------------------------------------------------------------------------

#[test]
fn root_and_namespaces() {
    let xml = zugferd::to_xml(&sample_invoice()).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(
        r#"<rsm:CrossIndustryInvoice xmlns:a="urn:un:unece:uncefact:data:standard:QualifiedDataType:100" xmlns:rsm="urn:un:unece:uncefact:data:standard:CrossIndustryInvoice:100" xmlns:qdt="urn:un:unece:uncefact:data:standard:QualifiedDataType:10" xmlns:ram="urn:un:unece:uncefact:data:standard:ReusableAggregateBusinessInformationEntity:100" xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns:udt="urn:un:unece:uncefact:data:standard:UnqualifiedDataType:100">"#
    ));
    assert!(xml.trim_end().ends_with("</rsm:CrossIndustryInvoice>"));
    assert_well_formed(&xml);
}

#[test]
fn guideline_id_per_profile() {
    for (profile, suffix) in [
        (Profile::Basic, "basic"),
        (Profile::Comfort, "comfort"),
        (Profile::Extended, "extended"),
        (Profile::Unknown, "unknown"),
    ] {
        let inv = sample_builder().profile(profile).build().unwrap();
        let xml = zugferd::to_xml(&inv).unwrap();
        let ids = element_texts(&xml, "ram:ID");
        assert_eq!(
            ids[0],
            format!("urn:cen.eu:en16931:2017#compliant#urn:zugferd.de:2p0:{suffix}")
        );
    }
}

#[test]
fn exchanged_document_header() {
    let inv = sample_builder()
        .type_code(InvoiceTypeCode::CreditNote)
        .build()
        .unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    assert_eq!(element_texts(&xml, "ram:ID")[1], "A12345");
    assert_eq!(element_texts(&xml, "ram:TypeCode")[0], "381");
    assert!(xml.contains(
        r#"<ram:IssueDateTime>
      <udt:DateTimeString format="102">20240105</udt:DateTimeString>
    </ram:IssueDateTime>"#
    ));
}

#[test]
fn sections_in_schema_order() {
    let xml = zugferd::to_xml(&sample_invoice()).unwrap();
    let order = [
        "<rsm:ExchangedDocumentContext>",
        "<rsm:ExchangedDocument>",
        "<rsm:SupplyChainTradeTransaction>",
        "<ram:IncludedSupplyChainTradeLineItem>",
        "<ram:ApplicableHeaderTradeAgreement>",
        "<ram:SellerTradeParty>",
        "<ram:BuyerTradeParty>",
        "<ram:ApplicableHeaderTradeDelivery>",
        "<ram:ApplicableHeaderTradeSettlement>",
        "<ram:SpecifiedTradePaymentTerms>",
        "<ram:SpecifiedTradeSettlementHeaderMonetarySummation>",
        "</ram:ApplicableHeaderTradeSettlement>",
        "</rsm:SupplyChainTradeTransaction>",
    ];
    let positions: Vec<usize> = order.iter().map(|tag| position(&xml, tag)).collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "sections out of order: {positions:?}"
    );
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn rendering_is_deterministic() {
    let inv = sample_invoice();
    let first = zugferd::to_xml(&inv).unwrap();
    let second = zugferd::to_xml(&inv).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, zugferd::to_xml(&inv.clone()).unwrap());
}

#[test]
fn delivery_date_defaults_to_invoice_date() {
    let xml = zugferd::to_xml(&sample_invoice()).unwrap();
    assert!(xml.contains(
        r#"<ram:OccurrenceDateTime>
          <udt:DateTimeString format="102">20240105</udt:DateTimeString>
        </ram:OccurrenceDateTime>"#
    ));
}

#[test]
fn explicit_delivery_date() {
    let inv = sample_builder().delivery_date(date(2023, 12, 28)).build().unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    let dates = element_texts(&xml, "udt:DateTimeString");
    // issue, delivery, due
    assert_eq!(dates, ["20240105", "20231228", "20240204"]);
}

// ---------------------------------------------------------------------------
// Line items
// ---------------------------------------------------------------------------

fn three_line_builder(profile: Profile) -> InvoiceBuilder {
    InvoiceBuilder::new("RE-3", date(2024, 3, 1), CurrencyCode::EUR)
        .profile(profile)
        .seller(seller())
        .buyer(buyer())
        .add_line(LineItemBuilder::new("Alpha", dec!(1), UnitCode::PIECE, dec!(10)).build())
        .add_line(LineItemBuilder::new("Beta", dec!(2.5), UnitCode::HOUR, dec!(80)).build())
        .add_line(LineItemBuilder::new("Gamma", dec!(3), UnitCode::DAY, dec!(0.99)).build())
        .total_amount(dec!(212.97))
}

#[test]
fn basic_profile_omits_net_price() {
    let inv = three_line_builder(Profile::Basic).build().unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    assert!(!xml.contains("NetPriceProductTradePrice"));
    assert!(!xml.contains("SpecifiedLineTradeAgreement"));
    assert_well_formed(&xml);
}

#[test]
fn comfort_and_extended_include_net_price_per_line() {
    for profile in [Profile::Comfort, Profile::Extended] {
        let inv = three_line_builder(profile).build().unwrap();
        let xml = zugferd::to_xml(&inv).unwrap();
        assert_eq!(xml.matches("<ram:NetPriceProductTradePrice>").count(), 3);
        assert_eq!(element_texts(&xml, "ram:ChargeAmount"), ["10", "80", "0.99"]);
    }
}

#[test]
fn line_order_is_preserved() {
    let inv = three_line_builder(Profile::Comfort).build().unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    // Party names come after the line items
    let names = element_texts(&xml, "ram:Name");
    assert_eq!(&names[..3], ["Alpha", "Beta", "Gamma"]);
    assert_eq!(element_texts(&xml, "ram:BilledQuantity"), ["1", "2.5", "3"]);
    assert!(xml.contains(r#"<ram:BilledQuantity unitCode="HUR">2.5</ram:BilledQuantity>"#));
}

#[test]
fn sequential_line_ids() {
    let inv = three_line_builder(Profile::Comfort).build().unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    assert_eq!(element_texts(&xml, "ram:LineID"), ["1", "2", "3"]);
}

#[test]
fn constant_line_ids_reproduce_legacy_output() {
    let inv = three_line_builder(Profile::Comfort).build().unwrap();
    let options = RenderOptions::default().with_line_numbering(LineNumbering::Constant);
    let xml = zugferd::to_xml_with(&inv, &options).unwrap();
    assert_eq!(element_texts(&xml, "ram:LineID"), ["1", "1", "1"]);
}

#[test]
fn line_total_is_recomputed() {
    let inv = sample_builder()
        .add_line(
            LineItemBuilder::new("Product B", dec!(5), UnitCode::PIECE, dec!(200))
                .total(dec!(42))
                .build(),
        )
        .total_amount(dec!(2000))
        .build()
        .unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    let line_totals = element_texts(&xml, "ram:LineTotalAmount");
    // two lines, then the header summation
    assert_eq!(line_totals, ["1000.00", "1000.00", "2000.00"]);
}

#[test]
fn line_total_rounds_to_two_decimals() {
    let inv = three_line_builder(Profile::Comfort).build().unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    let line_totals = element_texts(&xml, "ram:LineTotalAmount");
    assert_eq!(&line_totals[..3], ["10.00", "200.00", "2.97"]);
}

#[test]
fn empty_product_name_is_omitted() {
    let inv = InvoiceBuilder::new("RE-4", date(2024, 3, 1), CurrencyCode::EUR)
        .profile(Profile::Comfort)
        .seller(seller())
        .buyer(buyer())
        .add_line(LineItemBuilder::new("", dec!(1), UnitCode::PIECE, dec!(10)).build())
        .total_amount(dec!(10))
        .build()
        .unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    assert!(xml.contains("<ram:SpecifiedTradeProduct/>"));
    assert_well_formed(&xml);
}

#[test]
fn line_tax_rate_follows_invoice_rate() {
    let inv = three_line_builder(Profile::Comfort)
        .applicable_tax(dec!(0.07))
        .build()
        .unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    // three lines plus the header tax
    assert_eq!(
        element_texts(&xml, "ram:RateApplicablePercent"),
        ["7", "7", "7", "7"]
    );
}

// ---------------------------------------------------------------------------
// Trade parties
// ---------------------------------------------------------------------------

#[test]
fn contact_name_moves_street_to_line_two() {
    let xml = zugferd::to_xml(&sample_invoice()).unwrap();
    assert_eq!(element_texts(&xml, "ram:LineOne"), ["Jack Jackson", "Peter Paulsen"]);
    assert_eq!(
        element_texts(&xml, "ram:LineTwo"),
        ["6926 Shannon Willow Rd, Suite 400", "Überseetor 18"]
    );
}

#[test]
fn without_contact_street_is_line_one() {
    let plain_buyer =
        TradePartyBuilder::new("Kunde AG", "Marienplatz 1", "München", "80331", CountryCode::DE)
            .build();
    let mut empty_contact = plain_buyer.clone();
    empty_contact.contact_name = Some(String::new());

    for party in [plain_buyer, empty_contact] {
        let inv = sample_builder().buyer(party).build().unwrap();
        let xml = zugferd::to_xml(&inv).unwrap();
        assert_eq!(element_texts(&xml, "ram:LineOne"), ["Jack Jackson", "Marienplatz 1"]);
        assert_eq!(element_texts(&xml, "ram:LineTwo"), ["6926 Shannon Willow Rd, Suite 400"]);
        assert_eq!(xml.matches("Marienplatz 1").count(), 1);
    }
}

#[test]
fn seller_precedes_buyer() {
    let xml = zugferd::to_xml(&sample_invoice()).unwrap();
    assert!(position(&xml, "<ram:SellerTradeParty>") < position(&xml, "<ram:BuyerTradeParty>"));
    assert!(position(&xml, "Text Control, LLC") < position(&xml, "Text Control GmbH"));
}

#[test]
fn address_fields() {
    let xml = zugferd::to_xml(&sample_invoice()).unwrap();
    assert_eq!(element_texts(&xml, "ram:PostcodeCode"), ["28210", "28217"]);
    assert_eq!(element_texts(&xml, "ram:CityName"), ["Charlotte, NC", "Bremen"]);
    assert_eq!(element_texts(&xml, "ram:CountryID"), ["US", "DE"]);
}

#[test]
fn tax_registrations_in_insertion_order() {
    let party = TradePartyBuilder::new("ACME GmbH", "Hauptstr. 1", "Berlin", "10115", CountryCode::DE)
        .tax_registration(TaxScheme::FiscalCode, "201/113/40209")
        .tax_registration(TaxScheme::Vat, "DE123456789")
        .tax_registration(TaxScheme::Vat, "ATU12345678")
        .build();
    let inv = sample_builder().seller(party).build().unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();

    assert_eq!(xml.matches("<ram:SpecifiedTaxRegistration>").count(), 3);
    let first = position(&xml, r#"<ram:ID schemeID="FC">201/113/40209</ram:ID>"#);
    let second = position(&xml, r#"<ram:ID schemeID="VA">DE123456789</ram:ID>"#);
    let third = position(&xml, r#"<ram:ID schemeID="VA">ATU12345678</ram:ID>"#);
    assert!(first < second && second < third);
}

#[test]
fn party_without_registrations() {
    let inv = sample_builder()
        .seller(
            TradePartyBuilder::new("ACME GmbH", "Hauptstr. 1", "Berlin", "10115", CountryCode::DE)
                .build(),
        )
        .build()
        .unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    assert!(!xml.contains("SpecifiedTaxRegistration"));
}

#[test]
fn missing_party_is_an_error_by_default() {
    let mut inv = sample_invoice();
    inv.buyer = None;
    let err = zugferd::to_xml(&inv).unwrap_err();
    assert!(matches!(
        err,
        InvoiceError::MissingRequiredParty(PartyRole::Buyer)
    ));

    let mut inv = sample_invoice();
    inv.seller = None;
    let err = zugferd::to_xml(&inv).unwrap_err();
    assert!(matches!(
        err,
        InvoiceError::MissingRequiredParty(PartyRole::Seller)
    ));
}

#[test]
fn missing_party_is_omitted_when_lenient() {
    let mut inv = sample_invoice();
    inv.buyer = None;
    let options = RenderOptions::default().with_require_parties(false);
    let xml = zugferd::to_xml_with(&inv, &options).unwrap();
    assert!(xml.contains("<ram:SellerTradeParty>"));
    assert!(!xml.contains("BuyerTradeParty"));
    assert_well_formed(&xml);
}

#[test]
fn party_name_is_escaped() {
    let party = TradePartyBuilder::new("Müller & Söhne <GmbH>", "Weg 1", "Köln", "50667", CountryCode::DE)
        .build();
    let inv = sample_builder().seller(party).build().unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    assert!(xml.contains("Müller &amp; Söhne &lt;GmbH&gt;"));
    assert_eq!(element_texts(&xml, "ram:Name")[1], "Müller & Söhne <GmbH>");
    assert_well_formed(&xml);
}

#[test]
fn control_character_in_party_name_is_rejected() {
    let party = TradePartyBuilder::new("A\u{1}B", "Weg 1", "Köln", "50667", CountryCode::DE).build();
    let inv = sample_builder().seller(party).build().unwrap();
    let err = zugferd::to_xml(&inv).unwrap_err();
    assert!(matches!(err, InvoiceError::InvalidDocumentStructure(_)));
    assert!(err.to_string().contains("U+0001"), "{err}");
}

#[test]
fn control_character_in_product_name_is_rejected() {
    let inv = InvoiceBuilder::new("RE-6", date(2024, 3, 1), CurrencyCode::EUR)
        .seller(seller())
        .buyer(buyer())
        .add_line(LineItemBuilder::new("Kabel\u{0B}3m", dec!(1), UnitCode::PIECE, dec!(10)).build())
        .total_amount(dec!(10))
        .build()
        .unwrap();
    assert!(matches!(
        zugferd::to_xml(&inv),
        Err(InvoiceError::InvalidDocumentStructure(_))
    ));
}

#[test]
fn amount_overflow_is_an_error() {
    let inv = sample_builder()
        .total_amount(rust_decimal::Decimal::MAX)
        .build_unchecked()
        .unwrap();
    let err = zugferd::to_xml(&inv).unwrap_err();
    assert!(matches!(err, InvoiceError::Overflow(_)), "{err}");
}

// ---------------------------------------------------------------------------
// Settlement and totals
// ---------------------------------------------------------------------------

#[test]
fn header_totals() {
    let xml = zugferd::to_xml(&sample_invoice()).unwrap();
    assert!(xml.contains(r#"<ram:TaxTotalAmount currencyID="USD">190.00</ram:TaxTotalAmount>"#));
    assert!(xml.contains("<ram:GrandTotalAmount>1190.00</ram:GrandTotalAmount>"));
    assert!(xml.contains("<ram:DuePayableAmount>1190.00</ram:DuePayableAmount>"));
    assert!(xml.contains("<ram:TaxBasisTotalAmount>1000.00</ram:TaxBasisTotalAmount>"));
    assert!(xml.contains("<ram:ChargeTotalAmount>0.00</ram:ChargeTotalAmount>"));
    assert!(xml.contains("<ram:AllowanceTotalAmount>0.00</ram:AllowanceTotalAmount>"));
}

#[test]
fn header_tax_block() {
    let xml = zugferd::to_xml(&sample_invoice()).unwrap();
    assert_eq!(element_texts(&xml, "ram:InvoiceCurrencyCode"), ["USD"]);
    assert_eq!(element_texts(&xml, "ram:CalculatedAmount"), ["190.00"]);
    assert!(xml.contains(r#"<ram:CalculatedAmount currencyID="USD">190.00</ram:CalculatedAmount>"#));
    assert_eq!(element_texts(&xml, "ram:BasisAmount"), ["1000.00"]);
    assert!(xml.contains("<ram:BasisAmount>1000.00</ram:BasisAmount>"));
}

#[test]
fn total_amount_is_trusted() {
    // The renderer does not reconcile the header total with the lines.
    let inv = sample_builder().total_amount(dec!(500)).build_unchecked().unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    assert_eq!(element_texts(&xml, "ram:LineTotalAmount"), ["1000.00", "500.00"]);
    assert!(xml.contains("<ram:GrandTotalAmount>595.00</ram:GrandTotalAmount>"));
}

#[test]
fn tax_amount_rounding() {
    let inv = InvoiceBuilder::new("RE-5", date(2024, 3, 1), CurrencyCode::EUR)
        .profile(Profile::Basic)
        .seller(seller())
        .buyer(buyer())
        .add_line(LineItemBuilder::new("X", dec!(1), UnitCode::PIECE, dec!(0.5)).build())
        .total_amount(dec!(0.5))
        .build()
        .unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    // 0.5 × 0.19 = 0.095 → 0.10 (half away from zero)
    assert_eq!(element_texts(&xml, "ram:CalculatedAmount"), ["0.10"]);
    assert!(xml.contains(r#"<ram:TaxTotalAmount currencyID="EUR">0.10</ram:TaxTotalAmount>"#));
    assert!(xml.contains("<ram:GrandTotalAmount>0.60</ram:GrandTotalAmount>"));
}

#[test]
fn custom_amount_decimals() {
    let options = RenderOptions::default().with_amount_decimals(3);
    let xml = zugferd::to_xml_with(&sample_invoice(), &options).unwrap();
    assert!(xml.contains("<ram:GrandTotalAmount>1190.000</ram:GrandTotalAmount>"));
}

#[test]
fn due_date_default_and_explicit() {
    let xml = zugferd::to_xml(&sample_invoice()).unwrap();
    assert_eq!(element_texts(&xml, "udt:DateTimeString")[2], "20240204");

    let inv = sample_builder().due_date(date(2024, 1, 19)).build().unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    assert_eq!(element_texts(&xml, "udt:DateTimeString")[2], "20240119");
}

// ---------------------------------------------------------------------------
// Output formatting
// ---------------------------------------------------------------------------

#[test]
fn compact_output_has_no_line_breaks() {
    let options = RenderOptions::default().with_indent(None);
    let compact = zugferd::to_xml_with(&sample_invoice(), &options).unwrap();
    assert!(!compact.contains('\n'));
    assert_well_formed(&compact);

    let pretty = zugferd::to_xml(&sample_invoice()).unwrap();
    assert_eq!(
        element_texts(&compact, "ram:LineTotalAmount"),
        element_texts(&pretty, "ram:LineTotalAmount")
    );
}

#[test]
fn many_lines_stay_well_formed() {
    let mut builder = InvoiceBuilder::new("BIG", date(2024, 3, 1), CurrencyCode::EUR)
        .profile(Profile::Extended)
        .seller(seller())
        .buyer(buyer());
    for i in 1..=250 {
        builder = builder.add_line(
            LineItemBuilder::new(format!("Item {i}"), dec!(1), UnitCode::PIECE, dec!(1)).build(),
        );
    }
    let inv = builder.total_amount(dec!(250)).build().unwrap();
    let xml = zugferd::to_xml(&inv).unwrap();
    assert_well_formed(&xml);
    let ids = element_texts(&xml, "ram:LineID");
    assert_eq!(ids.len(), 250);
    assert_eq!(ids.last().map(String::as_str), Some("250"));
}

// ---------------------------------------------------------------------------
// Attachment packaging
// ---------------------------------------------------------------------------

#[test]
fn attachment_for_invoice() {
    let inv = sample_invoice();
    let att = Attachment::for_invoice(&inv, &RenderOptions::default()).unwrap();
    assert_eq!(att.filename, "ZUGFeRD-invoice.xml");
    assert_eq!(att.mime_type, "application/xml");
    assert_eq!(att.description, "ZUGFeRD-invoice");
    assert_eq!(att.relationship, "Alternative");
    assert_eq!(att.xml().unwrap(), zugferd::to_xml(&inv).unwrap());
    assert!(att.metadata.contains("<fx:ConformanceLevel>COMFORT</fx:ConformanceLevel>"));
}

#[test]
fn attachment_propagates_render_errors() {
    let mut inv = sample_invoice();
    inv.seller = None;
    assert!(Attachment::for_invoice(&inv, &RenderOptions::default()).is_err());
}

// ---------------------------------------------------------------------------
// Snapshot (insta)
// ---------------------------------------------------------------------------

#[test]
fn snapshot_comfort_sample_invoice() {
    let xml = zugferd::to_xml(&sample_invoice()).unwrap();
    insta::assert_snapshot!("comfort_sample_invoice", xml);
}
