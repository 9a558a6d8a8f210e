//! UN/CEFACT Recommendation 20 unit codes.
//!
//! The full Rec 20 list has ~2000 codes; this covers the subset most
//! relevant to European e-invoicing. Written to the `unitCode` attribute of
//! `ram:BilledQuantity`.

use super::error::CodeKind;

code_newtype!(
    /// UN/ECE Rec 20 unit of measure.
    UnitCode,
    COMMON_UNIT_CODES,
    CodeKind::Unit
);

impl UnitCode {
    /// One (piece).
    pub const PIECE: Self = Self("C62");
    pub const HOUR: Self = Self("HUR");
    pub const DAY: Self = Self("DAY");
    pub const KILOGRAM: Self = Self("KGM");
}

/// Check whether `code` is a known UN/CEFACT Rec 20 unit code.
pub fn is_known_unit_code(code: &str) -> bool {
    COMMON_UNIT_CODES.binary_search(&code).is_ok()
}

/// Sorted list of common UN/CEFACT Rec 20 unit codes.
/// Sorted for binary search.
static COMMON_UNIT_CODES: &[&str] = &[
    "2N",  // Decibel
    "4K",  // Kilovolt-ampere (reactive)
    "ANN", // Year
    "BAR", // Bar (pressure)
    "BLL", // Barrel (US)
    "BX",  // Box
    "C62", // One (piece/unit)
    "CCM", // Cubic centimetre
    "CLT", // Centilitre
    "CMK", // Square centimetre
    "CMT", // Centimetre
    "CS",  // Case
    "CT",  // Carton
    "DAY", // Day
    "DMQ", // Cubic decimetre (litre)
    "DMT", // Decimetre
    "DZN", // Dozen
    "EA",  // Each
    "FOT", // Foot
    "GLL", // Gallon (US)
    "GM",  // Gram per square metre
    "GRM", // Gram
    "GRO", // Gross
    "GWH", // Gigawatt-hour
    "HAR", // Hectare
    "HLT", // Hectolitre
    "HUR", // Hour
    "INH", // Inch
    "JOU", // Joule
    "KGM", // Kilogram
    "KGS", // Kilogram per second
    "KHZ", // Kilohertz
    "KMH", // Kilometre per hour
    "KMT", // Kilometre
    "KTM", // Kilometre
    "KVA", // Kilovolt-ampere
    "KVT", // Kilovolt
    "KWH", // Kilowatt-hour
    "KWT", // Kilowatt
    "LBR", // Pound
    "LE",  // Lite
    "LM",  // Linear metre
    "LPA", // Litre of pure alcohol
    "LS",  // Lump sum
    "LTR", // Litre
    "MAW", // Megawatt
    "MBR", // Millibar
    "MGM", // Milligram
    "MHZ", // Megahertz
    "MIN", // Minute
    "MLT", // Millilitre
    "MMK", // Square millimetre
    "MMT", // Millimetre
    "MON", // Month
    "MQH", // Cubic metre per hour
    "MTK", // Square metre
    "MTQ", // Cubic metre
    "MTR", // Metre
    "MTS", // Metre per second
    "MWH", // Megawatt-hour
    "NAR", // Number of articles
    "NPR", // Number of pairs
    "P1",  // Percent
    "PA",  // Packet
    "PK",  // Pack
    "PR",  // Pair
    "QTI", // Quantity (imperial)
    "RO",  // Roll
    "SA",  // Sack
    "SEC", // Second
    "SET", // Set
    "SMI", // Mile (statute)
    "ST",  // Sheet
    "STN", // Short ton (US)
    "TNE", // Tonne (metric ton)
    "WEE", // Week
    "XBD", // Bundle
    "XBG", // Bag
    "XBX", // Box
    "XCT", // Carton
    "XPA", // Packet
    "XPK", // Package
    "XPX", // Pallet
    "XRO", // Roll
    "XSA", // Sack
    "XST", // Sheet
    "YRD", // Yard
];
