//! # Controller State Module
//!
//! Raw per-device snapshot consumed and produced by the remapper.
//!
//! The snapshot has a fixed shape: a button array indexed by raw button
//! index and an axis array indexed by axis index, both sized to the hosting
//! joystick layer's capacities. The database layer never inspects state; it
//! only produces the records the remapper applies to it.

/// Maximum number of raw buttons in a snapshot.
pub const MAX_BUTTONS: usize = 32;

/// Maximum number of axes in a snapshot.
pub const MAX_AXES: usize = 8;

/// A raw button/axis snapshot for one controller.
///
/// Button values are plain pressed flags. Axis values are floats in the
/// hosting layer's convention ([-1, 1] for sticks, [0, 1] for triggers);
/// the remapper only copies and negates them, it never rescales.
///
/// # Examples
///
/// ```
/// use gamepad_remap::state::ControllerState;
///
/// let state = ControllerState::default();
/// assert!(!state.buttons[0]);
/// assert_eq!(state.axes[0], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState {
    /// Pressed state per raw button index.
    pub buttons: [bool; MAX_BUTTONS],
    /// Value per axis index.
    pub axes: [f32; MAX_AXES],
}

impl Default for ControllerState {
    /// Creates a snapshot with all buttons released and all axes at zero.
    fn default() -> Self {
        Self {
            buttons: [false; MAX_BUTTONS],
            axes: [0.0; MAX_AXES],
        }
    }
}

impl ControllerState {
    /// Creates a snapshot with default (released/zero) values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if any button is currently pressed.
    ///
    /// # Examples
    ///
    /// ```
    /// use gamepad_remap::state::ControllerState;
    ///
    /// let mut state = ControllerState::new();
    /// assert!(!state.any_button_pressed());
    ///
    /// state.buttons[4] = true;
    /// assert!(state.any_button_pressed());
    /// ```
    #[must_use]
    pub fn any_button_pressed(&self) -> bool {
        self.buttons.iter().any(|&pressed| pressed)
    }
}
