//! Border sizes and the shorthand used to describe them.
//!
//! A border size is written as one to four whitespace-separated integers:
//!
//! | tokens | top | left | bottom | right |
//! |--------|-----|------|--------|-------|
//! | `a`       | a | a | a | a |
//! | `a b`     | a | b | b | b |
//! | `a b c`   | a | a | a | a |
//! | `a b c d` | a | b | c | d |
//!
//! The three-token form ignores its last two values. Existing themes
//! rely on this, so it is kept as is. Values above [`MAX_LENGTH`] are
//! clamped to it.

use std::str::FromStr;

use tracing::warn;

use crate::layout::edge::Edge;
use crate::types::{Rectangle, Size, MAX_LENGTH};
use crate::{DecorError, Result};

/// The thickness of the border on each edge of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderSize {
    /// Thickness of the top border.
    pub top: i32,
    /// Thickness of the left border.
    pub left: i32,
    /// Thickness of the bottom border.
    pub bottom: i32,
    /// Thickness of the right border.
    pub right: i32,
}

impl BorderSize {
    /// Creates a new `BorderSize`.
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self { top, left, bottom, right }
    }

    /// A border of the same thickness on every edge.
    pub const fn uniform(size: i32) -> Self {
        Self::new(size, size, size, size)
    }

    /// A border of zero thickness, as used for fullscreen windows.
    pub const fn zeroed() -> Self {
        Self::uniform(0)
    }

    /// The thickness on a single edge.
    pub fn get(&self, edge: Edge) -> i32 {
        match edge {
            Edge::Top => self.top,
            Edge::Left => self.left,
            Edge::Bottom => self.bottom,
            Edge::Right => self.right,
        }
    }

    /// Grows the geometry of a window's contents to the geometry of
    /// the whole decorated frame.
    #[must_use]
    pub fn expand(&self, content: Rectangle) -> Rectangle {
        Rectangle::new(
            content.point.x - self.left,
            content.point.y - self.top,
            content.size.width + self.left + self.right,
            content.size.height + self.top + self.bottom,
        )
    }

    /// Takes a target frame size and returns the size left for the
    /// window's contents. Neither dimension drops below 1.
    #[must_use]
    pub fn shrink_size(&self, target: Size) -> Size {
        Size::new(
            (target.width - self.left - self.right).max(1),
            (target.height - self.top - self.bottom).max(1),
        )
    }
}

impl FromStr for BorderSize {
    type Err = DecorError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DecorError::InvalidBorder(s.to_string());

        let values = s
            .split_whitespace()
            .map(|tok| tok.parse::<i32>().ok().filter(|v| *v >= 0))
            .collect::<Option<Vec<i32>>>()
            .ok_or_else(invalid)?;

        if values.iter().any(|v| *v > MAX_LENGTH) {
            warn!("border size `{}` is too large, clamping to {}", s, MAX_LENGTH);
        }
        let values: Vec<i32> = values.into_iter().map(|v| v.min(MAX_LENGTH)).collect();

        match values[..] {
            [all] => Ok(BorderSize::uniform(all)),
            [top, rest] => Ok(BorderSize::new(top, rest, rest, rest)),
            [all, _, _] => Ok(BorderSize::uniform(all)),
            [top, left, bottom, right] => Ok(BorderSize::new(top, left, bottom, right)),
            _ => Err(invalid()),
        }
    }
}

/// Parses a border size shorthand, falling back to zero borders if it
/// is malformed.
///
/// The border size is user-editable and re-read live, so a typo must
/// not take the decoration down with it. Use [`BorderSize::from_str`]
/// to get at the error instead.
pub fn parse_border(s: &str) -> BorderSize {
    s.parse().unwrap_or_else(|e| {
        warn!("{}, falling back to zero borders", e);
        BorderSize::zeroed()
    })
}
