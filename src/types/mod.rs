//! Basic core types used throughout this crate at a high level.

pub mod geometry;

pub use geometry::*;

use bitflags::bitflags;
use glam::IVec2;

/// The largest length, in pixels, a theme may ask for.
///
/// Border sizes and spacers beyond this are clamped to it, so that the
/// layout arithmetic stays well clear of `i32` overflow.
pub const MAX_LENGTH: i32 = 1 << 15;

/// A transformation on the decoration's 2D plane.
///
/// Each variant maps a strip coordinate `(along, across)` onto
/// the layout plane. Rotations are clockwise on screen (with y pointing down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transform {
    /// The identity transform (nothing happens).
    #[default]
    Ident,
    /// The plane is rotated by 90 degrees.
    Rot90,
    /// The plane is rotated by 270 degrees.
    Rot270,
    /// The plane is flipped vertically.
    Flipped,
}

impl Transform {
    /// The images of the unit vectors along and across a strip.
    pub fn axes(self) -> (IVec2, IVec2) {
        match self {
            Transform::Ident => (IVec2::X, IVec2::Y),
            Transform::Rot90 => (IVec2::Y, IVec2::NEG_X),
            Transform::Rot270 => (IVec2::NEG_Y, IVec2::X),
            Transform::Flipped => (IVec2::X, IVec2::NEG_Y),
        }
    }

    /// Applies the transform to a strip coordinate, without translation.
    pub fn apply(self, along: i32, across: i32) -> IVec2 {
        let (a, c) = self.axes();
        a * along + c * across
    }
}

bitflags! {

/// Bitmask representing one or a combination of window edges.
///
/// The values match the edge values used by wlroots, so the mask can
/// be passed straight through in a resize request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Edges: u32 {
    /// The top edge.
    const TOP    = 1 << 0;
    /// The bottom edge.
    const BOTTOM = 1 << 1;
    /// The left edge.
    const LEFT   = 1 << 2;
    /// The right edge.
    const RIGHT  = 1 << 3;
}

/// The corners of a window frame that should be drawn rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoundedCorners: u8 {
    /// The top left corner.
    const TOP_LEFT     = 1 << 0;
    /// The top right corner.
    const TOP_RIGHT    = 1 << 1;
    /// The bottom left corner.
    const BOTTOM_LEFT  = 1 << 2;
    /// The bottom right corner.
    const BOTTOM_RIGHT = 1 << 3;
}

}

impl RoundedCorners {
    /// Parses a corner selection string such as `"tl tr"` or `"all"`.
    ///
    /// Unknown words are ignored, so a bad entry only loses that corner.
    pub fn parse(s: &str) -> Self {
        s.split_whitespace().fold(RoundedCorners::empty(), |acc, word| {
            acc | match word {
                "all" => RoundedCorners::all(),
                "tl" => RoundedCorners::TOP_LEFT,
                "tr" => RoundedCorners::TOP_RIGHT,
                "bl" => RoundedCorners::BOTTOM_LEFT,
                "br" => RoundedCorners::BOTTOM_RIGHT,
                other => {
                    tracing::debug!("ignoring unknown corner `{}`", other);
                    RoundedCorners::empty()
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_axes_are_orthonormal() {
        for t in [Transform::Ident, Transform::Rot90, Transform::Rot270, Transform::Flipped] {
            let (a, c) = t.axes();
            assert_eq!(a.dot(c), 0, "{:?}", t);
            assert_eq!(a.abs().element_sum(), 1);
            assert_eq!(c.abs().element_sum(), 1);
        }
    }

    #[test]
    fn test_transform_apply() {
        assert_eq!(Transform::Ident.apply(3, 2), IVec2::new(3, 2));
        assert_eq!(Transform::Rot90.apply(3, 2), IVec2::new(-2, 3));
        assert_eq!(Transform::Rot270.apply(3, 2), IVec2::new(2, -3));
        assert_eq!(Transform::Flipped.apply(3, 2), IVec2::new(3, -2));
    }

    #[test]
    fn test_parse_rounded_corners() {
        assert_eq!(RoundedCorners::parse("all"), RoundedCorners::all());
        assert_eq!(
            RoundedCorners::parse("tl br nonsense"),
            RoundedCorners::TOP_LEFT | RoundedCorners::BOTTOM_RIGHT
        );
        assert!(RoundedCorners::parse("").is_empty());
    }
}
