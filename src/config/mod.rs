//! Types and helpers for configuring decorations.
//!
//! The central item here is [`DecorationConfig`], the trait through which
//! the layout engine reads its theme. A compositor will usually implement
//! it on top of its own option store so that edits take effect live; the
//! provided [`ThemeConfig`] is a plain owned implementation, built with
//! [`ThemeConfigBuilder`].

mod section;

pub use section::ConfigSection;

use firedecor_macro::ConfigSection;

use crate::border::{parse_border, BorderSize};
use crate::types::RoundedCorners;
use crate::{DecorError::*, Result};

/// A type that can supply the theme of a decoration.
///
/// All sizes are in logical pixels. Strings are handed over unparsed,
/// because they are user-editable and are re-read on every rebuild.
pub trait DecorationConfig: ConfigSection {
    /// The layout descriptor, see the [`layout`][crate::layout] module.
    fn layout(&self) -> &str;

    /// The border size shorthand, see the [`border`][crate::border] module.
    fn border_size(&self) -> &str;

    /// The side of the square close/maximize/minimize buttons.
    fn button_size(&self) -> i32;

    /// The side of the square application icon.
    fn icon_size(&self) -> i32;

    /// The length of a `p` spacer.
    fn padding_size(&self) -> i32;

    /// The radius of rounded corners.
    ///
    /// The layout engine only uses this to drop accent spans too short
    /// to hold their own rounded ends.
    fn corner_radius(&self) -> i32;

    /// The longest a title may be before it is cut short with an ellipsis.
    fn max_title_size(&self) -> i32;

    /// Which frame corners are drawn rounded, e.g. `"tl tr"` or `"all"`.
    fn round_on(&self) -> &str;

    /// The parsed border size. Malformed descriptors give zero borders.
    fn border(&self) -> BorderSize {
        parse_border(self.border_size())
    }

    /// The parsed corner selection.
    fn rounded_corners(&self) -> RoundedCorners {
        RoundedCorners::parse(self.round_on())
    }

    /// Checks the theme before a decoration starts using it.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// The default implementation of [`DecorationConfig`].
///
/// # Example
///
/// ```rust
/// use firedecor::config::{ThemeConfig, DecorationConfig};
///
/// let theme = ThemeConfig::builder()
///     .layout("| title | close")
///     .border_size("30 4")
///     .finish()
///     .expect("invalid theme");
///
/// assert_eq!(theme.border().top, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, ConfigSection)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThemeConfig {
    #[key]
    layout: String,
    #[key]
    border_size: String,
    #[key]
    button_size: i32,
    #[key]
    icon_size: i32,
    #[key]
    padding_size: i32,
    #[key]
    corner_radius: i32,
    #[key]
    max_title_size: i32,
    #[key]
    round_on: String,
}

impl ThemeConfig {
    /// Returns a [`ThemeConfigBuilder`] to build a theme with the
    /// 'builder' idiom.
    pub fn builder() -> ThemeConfigBuilder {
        ThemeConfigBuilder::new()
    }

    /// Checks the theme to verify that all invariants are upheld.
    ///
    /// Only the numeric options are checked. The string options are
    /// lenient by nature and degrade on their own when malformed.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("button_size", self.button_size),
            ("icon_size", self.icon_size),
            ("padding_size", self.padding_size),
            ("corner_radius", self.corner_radius),
            ("max_title_size", self.max_title_size),
        ];

        for (name, value) in sizes {
            if value < 0 {
                return Err(InvalidConfig(format!("{} is negative ({})", name, value)));
            }
        }
        Ok(())
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            layout: "a | icon p title | minimize p maximize p close a".into(),
            border_size: "30 4".into(),
            button_size: 18,
            icon_size: 20,
            padding_size: 8,
            corner_radius: 10,
            max_title_size: 750,
            round_on: "all".into(),
        }
    }
}

impl DecorationConfig for ThemeConfig {
    fn layout(&self) -> &str {
        &self.layout
    }

    fn border_size(&self) -> &str {
        &self.border_size
    }

    fn button_size(&self) -> i32 {
        self.button_size
    }

    fn icon_size(&self) -> i32 {
        self.icon_size
    }

    fn padding_size(&self) -> i32 {
        self.padding_size
    }

    fn corner_radius(&self) -> i32 {
        self.corner_radius
    }

    fn max_title_size(&self) -> i32 {
        self.max_title_size
    }

    fn round_on(&self) -> &str {
        &self.round_on
    }

    fn validate(&self) -> Result<()> {
        ThemeConfig::validate(self)
    }
}

/// A helper type to construct a [`ThemeConfig`].
#[derive(Debug, Default)]
pub struct ThemeConfigBuilder {
    inner: ThemeConfig,
}

impl ThemeConfigBuilder {
    /// Creates a new `ThemeConfigBuilder` starting from the default theme.
    pub fn new() -> Self {
        Self {
            inner: ThemeConfig::default(),
        }
    }

    /// Sets the layout descriptor.
    pub fn layout<S: Into<String>>(mut self, layout: S) -> Self {
        self.inner.layout = layout.into();
        self
    }

    /// Sets the border size shorthand.
    pub fn border_size<S: Into<String>>(mut self, border_size: S) -> Self {
        self.inner.border_size = border_size.into();
        self
    }

    /// Sets the button size, in pixels.
    pub fn button_size(mut self, button_size: i32) -> Self {
        self.inner.button_size = button_size;
        self
    }

    /// Sets the icon size, in pixels.
    pub fn icon_size(mut self, icon_size: i32) -> Self {
        self.inner.icon_size = icon_size;
        self
    }

    /// Sets the length of a `p` spacer, in pixels.
    pub fn padding_size(mut self, padding_size: i32) -> Self {
        self.inner.padding_size = padding_size;
        self
    }

    /// Sets the corner radius, in pixels.
    pub fn corner_radius(mut self, corner_radius: i32) -> Self {
        self.inner.corner_radius = corner_radius;
        self
    }

    /// Sets the longest a title may grow before being truncated.
    pub fn max_title_size(mut self, max_title_size: i32) -> Self {
        self.inner.max_title_size = max_title_size;
        self
    }

    /// Sets which corners are rounded.
    pub fn round_on<S: Into<String>>(mut self, round_on: S) -> Self {
        self.inner.round_on = round_on.into();
        self
    }

    /// Finishes theme construction, validates it and returns
    /// the theme if validation is successful.
    pub fn finish(self) -> Result<ThemeConfig> {
        let config = self.inner;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecorError;

    #[test]
    fn test_default_theme_is_valid() {
        ThemeConfig::default().validate().expect("invalid default theme");
    }

    #[test]
    fn test_builder_rejects_negative_sizes() {
        let err = ThemeConfig::builder().button_size(-1).finish().unwrap_err();
        assert!(matches!(err, DecorError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_section_keys() {
        let theme = ThemeConfig::builder().icon_size(24).finish().unwrap();

        assert_eq!(theme.get_key_static::<i32>("icon_size"), Some(&24));
        assert_eq!(
            theme.get_key_static::<String>("round_on").map(String::as_str),
            Some("all")
        );
        assert!(theme.get_key("colour").is_none());
        // wrong type
        assert!(theme.get_key_static::<u8>("icon_size").is_none());
        assert_eq!(theme.keys().len(), 8);
        assert!(theme.keys().contains(&"max_title_size"));
    }

    #[test]
    fn test_parsed_helpers() {
        let theme = ThemeConfig::builder()
            .border_size("5 10")
            .round_on("tl tr")
            .finish()
            .unwrap();

        assert_eq!(theme.border(), BorderSize::new(5, 10, 10, 10));
        assert_eq!(
            theme.rounded_corners(),
            RoundedCorners::TOP_LEFT | RoundedCorners::TOP_RIGHT
        );
    }
}
