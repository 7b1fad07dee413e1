//! Configuration sections.

use std::any::Any;

/// An object that exposes its options by name.
///
/// Compositors keep their options in a string-keyed store, and reload
/// them whenever the user edits the config file. This trait lets such a
/// store look up any option of a section without knowing its concrete
/// type, which is what [`DecorationConfig`][1] builds on.
///
/// # Retrieving Arbitrary Values
///
/// `get_key` returns a dynamically typed trait object (i.e. `&dyn Any`).
/// It is then up to the caller to see if this object is of the
/// needed type, by calling [`downcast_ref`][2] on it:
///
/// ```rust
/// use firedecor::config::{ConfigSection, ThemeConfig};
///
/// let theme = ThemeConfig::default();
///
/// let Some(val) = theme.get_key("button_size") else {
///     panic!("no button_size");
/// };
/// assert!(val.downcast_ref::<i32>().is_some());
/// ```
///
/// A provided method, `get_key_static`, does this call for you,
/// but the trade-off is that it cannot be called on a trait object.
///
/// This trait is usually derived with `#[derive(ConfigSection)]`.
///
/// [1]: super::DecorationConfig
/// [2]: https://doc.rust-lang.org/std/any/trait.Any.html#method.downcast_ref
pub trait ConfigSection {
    /// Retrieve an option by name.
    ///
    /// Should return None if the key does not exist in this section.
    fn get_key(&self, key: &str) -> Option<&dyn Any>;

    /// The names of all options exposed by this section.
    fn keys(&self) -> &'static [&'static str];

    /// A monomorphizable, easier-to-use version of `get_key`.
    ///
    /// Unfortunately, this means that this method cannot be
    /// called on a trait object.
    fn get_key_static<V: Any>(&self, key: &str) -> Option<&V>
    where
        Self: Sized,
    {
        self.get_key(key).and_then(|v| v.downcast_ref::<V>())
    }
}
