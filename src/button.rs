//! The close, maximize and minimize buttons.
//!
//! A [`Button`] only holds the visual state of a button: whether it is
//! hovered or held down, and whether its window is active or maximized.
//! What clicking it does is decided by the interaction state machine.

use strum::{Display, EnumString, IntoStaticStr};
use strum_macros::EnumIter;

/// The hover progress of a hovered button.
pub const HOVERED: f64 = 1.0;
/// The hover progress of a button at rest.
pub const NORMAL: f64 = 0.0;
/// The hover progress of a button being held down.
pub const PRESSED: f64 = -0.7;

/// The kinds of buttons a decoration can hold.
///
/// The string forms are the names used in layout descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ButtonType {
    /// Closes the window.
    Close,
    /// Toggles the window between maximized and its previous size.
    #[strum(to_string = "maximize")]
    #[cfg_attr(feature = "serde", serde(rename = "maximize"))]
    ToggleMaximize,
    /// Minimizes the window.
    Minimize,
}

/// The visual state of a single button.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    button_type: ButtonType,
    hovered: bool,
    pressed: bool,
    active: bool,
    maximized: bool,
    hover: f64,
    damaged: bool,
}

impl Button {
    /// Creates a new button at rest.
    pub fn new(button_type: ButtonType) -> Self {
        Self {
            button_type,
            hovered: false,
            pressed: false,
            active: true,
            maximized: false,
            hover: NORMAL,
            damaged: true,
        }
    }

    /// The type of the button.
    pub fn button_type(&self) -> ButtonType {
        self.button_type
    }

    /// Whether the pointer is over the button.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the button is being held down.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the window owning the button is maximized.
    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Whether the window owning the button is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The value the hover animation should move towards.
    ///
    /// This is [`PRESSED`] while held, otherwise [`HOVERED`] or [`NORMAL`].
    pub fn hover_target(&self) -> f64 {
        self.hover
    }

    /// Sets the button hover state.
    ///
    /// A held button keeps its pressed look until it is released.
    pub fn set_hover(&mut self, hovered: bool) {
        self.hovered = hovered;
        if !self.pressed {
            self.hover = if hovered { HOVERED } else { NORMAL };
        }
        self.damaged = true;
    }

    /// Sets whether the button is held down.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
        self.hover = match (pressed, self.hovered) {
            (true, _) => PRESSED,
            (false, true) => HOVERED,
            (false, false) => NORMAL,
        };
        self.damaged = true;
    }

    /// Sets the activation status of the button's window.
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            self.active = active;
            self.damaged = true;
        }
    }

    /// Sets the maximized status of the button's window.
    pub fn set_maximized(&mut self, maximized: bool) {
        if self.maximized != maximized {
            self.maximized = maximized;
            self.damaged = true;
        }
    }

    /// Returns whether the button needs a repaint, and clears the flag.
    pub fn take_damage(&mut self) -> bool {
        std::mem::take(&mut self.damaged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_button_names() {
        assert_eq!("close".parse::<ButtonType>(), Ok(ButtonType::Close));
        assert_eq!("maximize".parse::<ButtonType>(), Ok(ButtonType::ToggleMaximize));
        assert_eq!("minimize".parse::<ButtonType>(), Ok(ButtonType::Minimize));
        assert!("togglemaximize".parse::<ButtonType>().is_err());

        let names: Vec<String> = ButtonType::iter().map(|b| b.to_string()).collect();
        assert_eq!(names, vec!["close", "maximize", "minimize"]);
    }

    #[test]
    fn test_press_overrides_hover() {
        let mut button = Button::new(ButtonType::Close);
        assert!(button.take_damage());
        assert!(!button.take_damage());

        button.set_hover(true);
        assert_eq!(button.hover_target(), HOVERED);

        button.set_pressed(true);
        assert_eq!(button.hover_target(), PRESSED);

        // leaving while held keeps the pressed look
        button.set_hover(false);
        assert_eq!(button.hover_target(), PRESSED);

        button.set_pressed(false);
        assert_eq!(button.hover_target(), NORMAL);
        assert!(button.take_damage());
    }

    #[test]
    fn test_window_state_only_damages_on_change() {
        let mut button = Button::new(ButtonType::ToggleMaximize);
        button.take_damage();

        button.set_active(true);
        assert!(!button.take_damage());

        button.set_maximized(true);
        assert!(button.is_maximized());
        assert!(button.take_damage());
    }
}
