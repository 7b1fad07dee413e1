//! Per-edge coordinate frames.
//!
//! Every edge of the decoration is laid out with the same algorithm, in
//! *strip* coordinates: a `shift` running along the edge and a `padding`
//! running across it, away from the window's outside. An [`EdgeFrame`]
//! converts those into layout coordinates through the edge's [`Transform`]
//! and origin.

use glam::IVec2;

use crate::border::BorderSize;
use crate::types::{Edges, Point, Rectangle, Size, Transform};

/// One of the four sides of the decoration frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The top edge, laid out left to right.
    Top,
    /// The left edge, laid out bottom to top.
    Left,
    /// The bottom edge, laid out left to right.
    Bottom,
    /// The right edge, laid out top to bottom.
    Right,
}

impl Edge {
    /// All edges, in the order their layout segments are written in.
    pub const RING: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];

    /// The transform from strip coordinates to layout coordinates.
    pub fn transform(self) -> Transform {
        match self {
            Edge::Top => Transform::Ident,
            Edge::Left => Transform::Rot270,
            Edge::Bottom => Transform::Flipped,
            Edge::Right => Transform::Rot90,
        }
    }

    /// The resize mask for this edge.
    pub fn mask(self) -> Edges {
        match self {
            Edge::Top => Edges::TOP,
            Edge::Left => Edges::LEFT,
            Edge::Bottom => Edges::BOTTOM,
            Edge::Right => Edges::RIGHT,
        }
    }
}

/// The coordinate frame of a single edge for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeFrame {
    edge: Edge,
    transform: Transform,
    origin: IVec2,
    strip_length: i32,
    thickness: i32,
}

impl EdgeFrame {
    /// Creates the frame of `edge` for a decoration surface of `size`.
    ///
    /// The horizontal edges span the whole width. The vertical edges
    /// only span the space between the top and bottom borders, so the
    /// corners belong to the horizontal edges.
    pub fn new(edge: Edge, size: Size, border: &BorderSize) -> Self {
        let Size { width, height } = size;
        let side = height
            .saturating_sub(border.top)
            .saturating_sub(border.bottom)
            .max(0);

        let (origin, strip_length) = match edge {
            Edge::Top => (IVec2::ZERO, width),
            Edge::Left => (IVec2::new(0, height.saturating_sub(border.bottom)), side),
            Edge::Bottom => (IVec2::new(0, height), width),
            Edge::Right => (IVec2::new(width, border.top), side),
        };

        Self {
            edge,
            transform: edge.transform(),
            origin,
            strip_length: strip_length.max(0),
            thickness: border.get(edge),
        }
    }

    /// The edge this frame belongs to.
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// The length of the strip along the edge.
    pub fn strip_length(&self) -> i32 {
        self.strip_length
    }

    /// Converts a strip coordinate into a layout point.
    pub fn to_layout(&self, shift: i32, padding: i32) -> Point {
        let p = self.origin.saturating_add(self.transform.apply(shift, padding));
        Point::new(p.x, p.y)
    }

    /// Converts a box in strip coordinates into a layout rectangle.
    pub fn map_box(&self, shift: i32, padding: i32, length: i32, depth: i32) -> Rectangle {
        Rectangle::from_corners(
            self.to_layout(shift, padding),
            self.to_layout(shift.saturating_add(length), padding.saturating_add(depth)),
        )
    }

    /// Places an item of `size` (length along the strip, depth across it)
    /// at `shift`, centred across the border.
    pub fn place(&self, shift: i32, size: Size) -> Rectangle {
        let padding = (self.thickness.saturating_sub(size.height) / 2).max(0);
        self.map_box(shift, padding, size.width, size.height)
    }

    /// A box covering the full border thickness from `from` to `to`.
    pub fn span(&self, from: i32, to: i32) -> Rectangle {
        self.map_box(from, 0, to.saturating_sub(from), self.thickness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::new(200, 100);
    const BORDER: BorderSize = BorderSize::new(30, 4, 6, 8);

    #[test]
    fn test_strip_lengths() {
        let lengths: Vec<i32> = Edge::RING
            .iter()
            .map(|e| EdgeFrame::new(*e, SIZE, &BORDER).strip_length())
            .collect();

        assert_eq!(lengths, vec![200, 64, 200, 64]);
    }

    #[test]
    fn test_top_is_identity() {
        let frame = EdgeFrame::new(Edge::Top, SIZE, &BORDER);
        assert_eq!(frame.map_box(10, 2, 20, 5), Rectangle::new(10, 2, 20, 5));
    }

    #[test]
    fn test_left_reads_bottom_to_top() {
        let frame = EdgeFrame::new(Edge::Left, SIZE, &BORDER);

        // the start of the strip sits just above the bottom border
        assert_eq!(frame.to_layout(0, 0), Point::new(0, 94));
        assert_eq!(frame.map_box(0, 1, 10, 2), Rectangle::new(1, 84, 2, 10));
        // the far end of the strip touches the top border
        assert_eq!(frame.span(0, 64), Rectangle::new(0, 30, 4, 64));
    }

    #[test]
    fn test_bottom_measures_padding_upwards() {
        let frame = EdgeFrame::new(Edge::Bottom, SIZE, &BORDER);

        assert_eq!(frame.span(0, 200), Rectangle::new(0, 94, 200, 6));
        assert_eq!(frame.map_box(5, 1, 10, 4), Rectangle::new(5, 95, 10, 4));
    }

    #[test]
    fn test_right_reads_top_to_bottom() {
        let frame = EdgeFrame::new(Edge::Right, SIZE, &BORDER);

        assert_eq!(frame.span(0, 64), Rectangle::new(192, 30, 8, 64));
        assert_eq!(frame.map_box(10, 0, 5, 8), Rectangle::new(192, 40, 8, 5));
    }

    #[test]
    fn test_huge_border_leaves_no_side() {
        let border = BorderSize::uniform(i32::MAX);
        let frame = EdgeFrame::new(Edge::Left, SIZE, &border);

        assert_eq!(frame.strip_length(), 0);
        assert_eq!(frame.to_layout(0, 0), Point::new(0, 100 - i32::MAX));
    }

    #[test]
    fn test_far_shift_saturates() {
        let frame = EdgeFrame::new(Edge::Top, SIZE, &BORDER);
        let rect = frame.map_box(i32::MAX - 10, 0, 100, 5);

        assert_eq!(rect, Rectangle::new(i32::MAX - 10, 0, 10, 5));
    }

    #[test]
    fn test_place_centres_across() {
        let frame = EdgeFrame::new(Edge::Top, SIZE, &BORDER);
        assert_eq!(frame.place(50, Size::new(18, 18)), Rectangle::new(50, 6, 18, 18));

        // an item thicker than the border hugs the outside
        let frame = EdgeFrame::new(Edge::Left, SIZE, &BORDER);
        assert_eq!(frame.place(0, Size::new(10, 18)).point.x, 0);
    }
}
