//! # Mapping Line Parser Module
//!
//! Parses one line of an SDL-style `gamecontrollerdb.txt` database into a
//! [`MappingRecord`] plus the device identity it applies to.
//!
//! ## Line Format
//!
//! ```text
//! <32+ hex char GUID>,<name>,<platform field>,<key:value>,<key:value>,...
//! ```
//!
//! | Field | Content |
//! |-------|---------|
//! | 0 | GUID hex string; vendor id at offset 16, product id at offset 24 |
//! | 1 | Human-readable name (diagnostics only) |
//! | 2 | Platform tag |
//! | 3.. | `key:value` tokens, order-independent |
//!
//! Parsing is deliberately permissive: a line that cannot be parsed is
//! skipped, never an error. Unknown keys are ignored, and a recognized key
//! with an unparsable value leaves its slot unmapped. The worst outcome of a
//! corrupt database is fewer mappings loaded.

use super::record::{AxisMapping, AxisSlot, ButtonSlot, DeviceIdentity, MappingRecord};

/// A successfully parsed database line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMapping {
    /// Identity decoded from the GUID field; [`DeviceIdentity::ZERO`] when
    /// the GUID was too short or not valid hex.
    pub identity: DeviceIdentity,
    /// Human-readable controller name from the line. Not used for lookups.
    pub name: String,
    /// The parsed mapping record.
    pub record: MappingRecord,
}

/// Parses one database line, or returns `None` if the line is skipped.
///
/// A line is skipped when it is empty, is a `#` comment, does not contain
/// `platform_needle` (the `platform:<tag>` token for the accepted platform),
/// or has no token region after the third comma.
///
/// # Examples
///
/// ```
/// use gamepad_remap::db::parser::parse_line;
/// use gamepad_remap::db::ButtonSlot;
///
/// let line = "03000000000000000000000000000000,Pad,platform:Windows,a:b0";
/// let parsed = parse_line(line, "platform:Windows").unwrap();
/// assert_eq!(parsed.record.buttons[ButtonSlot::A.index()], Some(0));
///
/// assert!(parse_line(line, "platform:Linux").is_none());
/// assert!(parse_line("# comment", "platform:Windows").is_none());
/// ```
#[must_use]
pub fn parse_line(line: &str, platform_needle: &str) -> Option<ParsedMapping> {
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    if !line.contains(platform_needle) {
        return None;
    }

    // splitn keeps the token region after the third comma intact; a line
    // without that region is rejected like any other malformed line.
    let mut fields = line.splitn(4, ',');
    let guid = fields.next()?;
    let name = fields.next()?;
    let _platform_field = fields.next()?;
    let tokens = fields.next()?;

    let identity = decode_identity(guid);
    let mut record = MappingRecord::new();

    for token in tokens.split(',') {
        let Some((key, value)) = token.split_once(':') else {
            continue;
        };
        if let Some(slot) = ButtonSlot::from_key(key) {
            record.buttons[slot.index()] = parse_button_source(value);
        } else if let Some(slot) = AxisSlot::from_key(key) {
            record.axes[slot.index()] = parse_axis_source(value);
        }
        // Unknown keys (dpup, crc, platform, ...) are silently ignored.
    }

    Some(ParsedMapping {
        identity,
        name: name.to_string(),
        record,
    })
}

/// Decodes the device identity embedded in a GUID hex string.
///
/// The vendor id is the 8 hex characters at offset 16, the product id the 8
/// at offset 24. A GUID shorter than 32 characters or with non-hex segments
/// yields [`DeviceIdentity::ZERO`] rather than failing the line.
#[must_use]
pub fn decode_identity(guid: &str) -> DeviceIdentity {
    if guid.len() >= 32 {
        let vendor = guid
            .get(16..24)
            .and_then(|hex| u32::from_str_radix(hex, 16).ok());
        let product = guid
            .get(24..32)
            .and_then(|hex| u32::from_str_radix(hex, 16).ok());
        if let (Some(vendor_id), Some(product_id)) = (vendor, product) {
            return DeviceIdentity::new(vendor_id, product_id);
        }
    }
    DeviceIdentity::ZERO
}

/// Parses a button token value (`b<index>`), or `None` when unparsable.
fn parse_button_source(value: &str) -> Option<usize> {
    value.strip_prefix('b')?.parse::<usize>().ok()
}

/// Parses an axis token value (`a<index>`, optionally carrying a `~`
/// inversion marker anywhere in the value).
///
/// The first `~` is removed before the index is parsed. When parsing fails
/// the slot is unmapped and the polarity stays `+1`.
fn parse_axis_source(value: &str) -> AxisMapping {
    let inverted = value.contains('~');
    let stripped = value.replacen('~', "", 1);
    match stripped.strip_prefix('a').and_then(|digits| digits.parse::<usize>().ok()) {
        Some(index) => AxisMapping::new(index, inverted),
        None => AxisMapping::default(),
    }
}
