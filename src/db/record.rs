//! # Mapping Record Module
//!
//! The parsed, canonical result of one database line.
//!
//! ## Logical Layout
//!
//! | Slot | Button | Slot | Axis |
//! |------|--------|------|------|
//! | 0 | A | 0 | Left Stick X |
//! | 1 | B | 1 | Left Stick Y |
//! | 2 | X | 2 | Right Stick X |
//! | 3 | Y | 3 | Right Stick Y |
//! | 4 | Back | 4 | Left Trigger |
//! | 5 | Guide | 5 | Right Trigger |
//! | 6 | Start | | |
//! | 7 | Left Stick | | |
//! | 8 | Right Stick | | |
//! | 9 | Left Shoulder | | |
//! | 10 | Right Shoulder | | |
//!
//! A record stores, for each logical slot, which raw button or axis index
//! feeds it. Unmapped slots are `None` rather than a sentinel index, so an
//! unmapped slot can never be mistaken for a valid raw index.

/// Number of logical button slots in a mapping record.
pub const BUTTON_SLOT_COUNT: usize = 11;

/// Number of logical axis slots in a mapping record.
pub const AXIS_SLOT_COUNT: usize = 6;

/// Logical button slots, in the fixed order used by the database format.
///
/// The discriminant is the slot index into [`MappingRecord::buttons`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum ButtonSlot {
    A = 0,
    B = 1,
    X = 2,
    Y = 3,
    Back = 4,
    Guide = 5,
    Start = 6,
    LeftStick = 7,
    RightStick = 8,
    LeftShoulder = 9,
    RightShoulder = 10,
}

impl ButtonSlot {
    /// Decodes a database key into a button slot.
    ///
    /// Keys are matched exactly and case-sensitively; anything else is an
    /// unknown key and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gamepad_remap::db::ButtonSlot;
    ///
    /// assert_eq!(ButtonSlot::from_key("a"), Some(ButtonSlot::A));
    /// assert_eq!(ButtonSlot::from_key("leftshoulder"), Some(ButtonSlot::LeftShoulder));
    /// assert_eq!(ButtonSlot::from_key("A"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            "back" => Some(Self::Back),
            "guide" => Some(Self::Guide),
            "start" => Some(Self::Start),
            "leftstick" => Some(Self::LeftStick),
            "rightstick" => Some(Self::RightStick),
            "leftshoulder" => Some(Self::LeftShoulder),
            "rightshoulder" => Some(Self::RightShoulder),
            _ => None,
        }
    }

    /// Returns the slot index into [`MappingRecord::buttons`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Logical axis slots, in the fixed order used by the database format.
///
/// The discriminant is the slot index into [`MappingRecord::axes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum AxisSlot {
    LeftX = 0,
    LeftY = 1,
    RightX = 2,
    RightY = 3,
    LeftTrigger = 4,
    RightTrigger = 5,
}

impl AxisSlot {
    /// Decodes a database key into an axis slot.
    ///
    /// Keys are matched exactly and case-sensitively; anything else is an
    /// unknown key and returns `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "leftx" => Some(Self::LeftX),
            "lefty" => Some(Self::LeftY),
            "rightx" => Some(Self::RightX),
            "righty" => Some(Self::RightY),
            "lefttrigger" => Some(Self::LeftTrigger),
            "righttrigger" => Some(Self::RightTrigger),
            _ => None,
        }
    }

    /// Returns the slot index into [`MappingRecord::axes`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One logical axis slot's source: a raw axis index plus polarity.
///
/// `inverted` corresponds to the `~` marker in the database format and means
/// the raw reading is negated before it reaches the logical axis. When index
/// parsing fails the slot stays unmapped with polarity `+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisMapping {
    /// Raw axis index feeding this slot, or `None` if unmapped.
    pub source: Option<usize>,
    /// Whether the raw reading is sign-inverted.
    pub inverted: bool,
}

impl AxisMapping {
    /// Creates a mapping from a raw axis index.
    #[must_use]
    pub fn new(source: usize, inverted: bool) -> Self {
        Self {
            source: Some(source),
            inverted,
        }
    }

    /// Returns the multiplier applied to the raw reading (`1.0` or `-1.0`).
    ///
    /// # Examples
    ///
    /// ```
    /// use gamepad_remap::db::AxisMapping;
    ///
    /// assert_eq!(AxisMapping::new(0, false).sign(), 1.0);
    /// assert_eq!(AxisMapping::new(0, true).sign(), -1.0);
    /// ```
    #[must_use]
    pub fn sign(&self) -> f32 {
        if self.inverted { -1.0 } else { 1.0 }
    }
}

/// Parsed translation table from raw controller indices to logical slots.
///
/// A freshly parsed record always has every slot initialized: unmapped slots
/// are `None` (buttons) or `AxisMapping::default()` (axes, polarity `+1`).
///
/// # Examples
///
/// ```
/// use gamepad_remap::db::{ButtonSlot, MappingRecord};
///
/// let record = MappingRecord::default();
/// assert_eq!(record.buttons[ButtonSlot::A.index()], None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MappingRecord {
    /// Raw button index feeding each logical button slot.
    pub buttons: [Option<usize>; BUTTON_SLOT_COUNT],
    /// Raw axis source and polarity for each logical axis slot.
    pub axes: [AxisMapping; AXIS_SLOT_COUNT],
}

impl MappingRecord {
    /// Creates a fully unmapped record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no slot maps to a raw index.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.iter().all(Option::is_none)
            && self.axes.iter().all(|a| a.source.is_none())
    }
}

/// (vendor id, product id) pair uniquely addressing a controller model.
///
/// Decoded from hex segments embedded in the database GUID field. The
/// all-zero identity means "no reliable identity" and is still a valid
/// lookup key (a record that failed identity decoding is inserted under it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceIdentity {
    pub vendor_id: u32,
    pub product_id: u32,
}

impl DeviceIdentity {
    /// The "no reliable identity" key.
    pub const ZERO: Self = Self {
        vendor_id: 0,
        product_id: 0,
    };

    /// Creates an identity from a vendor/product pair.
    #[must_use]
    pub fn new(vendor_id: u32, product_id: u32) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Slot Key Tests ====================

    #[test]
    fn test_button_slot_keys_in_order() {
        let keys = [
            "a",
            "b",
            "x",
            "y",
            "back",
            "guide",
            "start",
            "leftstick",
            "rightstick",
            "leftshoulder",
            "rightshoulder",
        ];
        for (index, key) in keys.iter().enumerate() {
            let slot = ButtonSlot::from_key(key).unwrap();
            assert_eq!(slot.index(), index, "Key {} should map to slot {}", key, index);
        }
    }

    #[test]
    fn test_axis_slot_keys_in_order() {
        let keys = ["leftx", "lefty", "rightx", "righty", "lefttrigger", "righttrigger"];
        for (index, key) in keys.iter().enumerate() {
            let slot = AxisSlot::from_key(key).unwrap();
            assert_eq!(slot.index(), index, "Key {} should map to slot {}", key, index);
        }
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert_eq!(ButtonSlot::from_key("dpup"), None);
        assert_eq!(ButtonSlot::from_key("platform"), None);
        assert_eq!(AxisSlot::from_key("dpdown"), None);
        assert_eq!(AxisSlot::from_key(""), None);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert_eq!(ButtonSlot::from_key("Back"), None);
        assert_eq!(AxisSlot::from_key("LeftX"), None);
    }

    // ==================== AxisMapping Tests ====================

    #[test]
    fn test_axis_mapping_default_unmapped_positive() {
        let mapping = AxisMapping::default();
        assert_eq!(mapping.source, None);
        assert!(!mapping.inverted);
        assert_eq!(mapping.sign(), 1.0);
    }

    #[test]
    fn test_axis_mapping_sign() {
        assert_eq!(AxisMapping::new(3, false).sign(), 1.0);
        assert_eq!(AxisMapping::new(3, true).sign(), -1.0);
    }

    // ==================== MappingRecord Tests ====================

    #[test]
    fn test_record_default_fully_unmapped() {
        let record = MappingRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.buttons.len(), BUTTON_SLOT_COUNT);
        assert_eq!(record.axes.len(), AXIS_SLOT_COUNT);
        for slot in &record.buttons {
            assert_eq!(*slot, None);
        }
        for axis in &record.axes {
            assert_eq!(*axis, AxisMapping::default());
        }
    }

    #[test]
    fn test_record_is_empty_detects_mappings() {
        let mut record = MappingRecord::new();
        record.buttons[ButtonSlot::A.index()] = Some(0);
        assert!(!record.is_empty());

        let mut record = MappingRecord::new();
        record.axes[AxisSlot::LeftX.index()] = AxisMapping::new(0, false);
        assert!(!record.is_empty());
    }

    // ==================== DeviceIdentity Tests ====================

    #[test]
    fn test_identity_equality() {
        let a = DeviceIdentity::new(0x045e, 0x028e);
        let b = DeviceIdentity::new(0x045e, 0x028e);
        let c = DeviceIdentity::new(0x045e, 0x02ff);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_identity_zero() {
        assert_eq!(DeviceIdentity::ZERO, DeviceIdentity::new(0, 0));
    }
}
