//! Primitives for working with decoration geometries.
//!
//! This module contains the core types [`Point`], [`Size`], [`Rectangle`] and
//! [`Region`]. All of them work in layout-local coordinates, that is, relative
//! to the top left corner of the decoration surface, in whole pixels.

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A type for representing a point on the decoration surface.
///
/// Implements [`PartialEq`], so you can compare it directly with
/// another Point. You can also directly add and subtract `Point`s,
/// as they implement [`Add`] and [`Sub`] on themselves.
///
/// # Note
///
/// The (0, 0) reference is taken from the top left
/// corner of the decoration surface.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// The `Point`'s X-coordinate.
    pub x: i32,
    /// The `Point`'s Y-coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a new Point.
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Creates a new Point where both coordinates are zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use firedecor::types::Point;
    ///
    /// assert_eq!(Point::zeroed(), Point::new(0, 0));
    /// ```
    pub const fn zeroed() -> Point {
        Point { x: 0, y: 0 }
    }

    /// Calculates the x and y offsets between itself and another Point.
    ///
    /// Offset is calculated with reference to itself.
    ///
    /// # Example
    ///
    /// ```rust
    /// use firedecor::types::Point;
    ///
    /// let original = Point::new(50, 50);
    /// let new = Point::new(20, 30);
    ///
    /// assert_eq!(original.calculate_offset(new), (-30, -20));
    /// ```
    pub fn calculate_offset(&self, other: Point) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A type for representing a 2D rectangular space, without
/// respect to its position on the coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// The width of the Size.
    pub width: i32,
    /// The height of the Size.
    pub height: i32,
}

impl Size {
    /// Creates a new Size.
    pub const fn new(width: i32, height: i32) -> Size {
        Size { width, height }
    }

    /// Creates a new Size where both dimensions are zero.
    pub const fn zeroed() -> Size {
        Size { width: 0, height: 0 }
    }

    /// Checks whether the Size covers no area, i.e. at least
    /// one of its dimensions is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}

/// A type for representing a 2D rectangular space, anchored to a
/// Point on the coordinate space.
///
/// Rectangles take their gravity from the top-left corner,
/// that is, any increase in `point` is an offset to the right
/// or downwards.
///
/// _Note:_ The Default impl returns Rectangle {0, 0, 0, 0}.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    /// The point that the Rectangle is anchored to.
    pub point: Point,
    /// The size of the Rectangle.
    pub size: Size,
}

impl Rectangle {
    /// Constructs a new `Rectangle` from its top left corner
    /// and its dimensions.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rectangle {
            point: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Convenience function for constructing a `Rectangle` with all fields
    /// set to zero.
    pub const fn zeroed() -> Self {
        Rectangle::new(0, 0, 0, 0)
    }

    /// Creates the smallest `Rectangle` that has both `a` and `b` as corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);

        Rectangle::new(x, y, a.x.max(b.x).saturating_sub(x), a.y.max(b.y).saturating_sub(y))
    }

    /// The x-coordinate one past the right edge.
    pub fn right(&self) -> i32 {
        self.point.x.saturating_add(self.size.width)
    }

    /// The y-coordinate one past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.point.y.saturating_add(self.size.height)
    }

    /// Checks whether the Rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check whether this Rectangle contains a certain point.
    ///
    /// The left and top edges are inclusive, the right and bottom
    /// edges are exclusive, so adjacent rectangles never both contain
    /// the same point.
    ///
    /// # Example
    ///
    /// ```rust
    /// use firedecor::types::{Rectangle, Point};
    ///
    /// let original = Rectangle::new(0, 0, 200, 100);
    ///
    /// assert!(original.contains_point(Point::new(50, 50)));
    /// assert!(!original.contains_point(Point::new(200, 50)));
    /// ```
    pub fn contains_point(&self, pt: Point) -> bool {
        let wrange = self.point.x..self.right();
        let hrange = self.point.y..self.bottom();

        wrange.contains(&pt.x) && hrange.contains(&pt.y)
    }

    /// Check whether this Rectangle shares any area with `other`.
    pub fn overlaps_with(&self, other: &Self) -> bool {
        !(self.is_empty()
            || other.is_empty()
            // my left edge is to the right of their right
            || self.point.x >= other.right()
            // my right edge is to the left of their left
            || self.right() <= other.point.x
            // my top edge is below their bottom
            || self.point.y >= other.bottom()
            // my bottom edge is above their top
            || self.bottom() <= other.point.y)
    }

    /// Returns the smallest Rectangle enclosing both `self` and `other`.
    ///
    /// Empty rectangles are ignored.
    #[must_use]
    pub fn bounding(&self, other: &Self) -> Self {
        match (self.is_empty(), other.is_empty()) {
            (true, _) => *other,
            (_, true) => *self,
            _ => {
                let x = self.point.x.min(other.point.x);
                let y = self.point.y.min(other.point.y);
                let right = self.right().max(other.right());
                let bottom = self.bottom().max(other.bottom());

                Rectangle::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
            }
        }
    }

    /// Returns a copy of the Rectangle moved by `delta`.
    #[must_use]
    pub fn offset(&self, delta: Point) -> Self {
        Rectangle {
            point: self.point + delta,
            size: self.size,
        }
    }
}

impl Add<Point> for Rectangle {
    type Output = Self;
    fn add(self, delta: Point) -> Self {
        self.offset(delta)
    }
}

/// A set of rectangles, treated as their union.
///
/// This is what a host surface uses to decide whether an input event
/// at some point should be delivered to the decoration at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Region {
    rects: Vec<Rectangle>,
}

impl Region {
    /// Creates an empty Region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rectangle to the Region. Empty rectangles are dropped.
    pub fn add(&mut self, rect: Rectangle) {
        if !rect.is_empty() {
            self.rects.push(rect);
        }
    }

    /// Removes everything from the Region.
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    /// Whether the Region covers no area.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The rectangles making up the Region.
    pub fn rects(&self) -> &[Rectangle] {
        &self.rects
    }

    /// Whether any rectangle in the Region contains `pt`.
    pub fn contains_point(&self, pt: Point) -> bool {
        self.rects.iter().any(|r| r.contains_point(pt))
    }

    /// The smallest Rectangle enclosing the whole Region.
    pub fn bounding_box(&self) -> Rectangle {
        self.rects
            .iter()
            .fold(Rectangle::zeroed(), |acc, r| acc.bounding(r))
    }
}

impl FromIterator<Rectangle> for Region {
    fn from_iter<I: IntoIterator<Item = Rectangle>>(iter: I) -> Self {
        let mut region = Region::new();
        for rect in iter {
            region.add(rect);
        }
        region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_half_open() {
        let rect = Rectangle::new(10, 10, 5, 5);

        assert!(rect.contains_point(Point::new(10, 10)));
        assert!(rect.contains_point(Point::new(14, 14)));
        assert!(!rect.contains_point(Point::new(15, 14)));
        assert!(!rect.contains_point(Point::new(14, 15)));
        assert!(!rect.contains_point(Point::new(9, 12)));
    }

    #[test]
    fn test_from_corners_normalizes() {
        let rect = Rectangle::from_corners(Point::new(10, 40), Point::new(4, 30));
        assert_eq!(rect, Rectangle::new(4, 30, 6, 10));
    }

    #[test]
    fn test_extreme_corners_saturate() {
        let rect = Rectangle::from_corners(Point::new(-i32::MAX, 0), Point::new(i32::MAX, 10));

        assert_eq!(rect.size, Size::new(i32::MAX, 10));
        assert_eq!(rect.right(), 0);
        assert!(!rect.contains_point(Point::new(5, 5)));

        let far = Rectangle::new(i32::MAX - 5, 0, 100, 10);
        assert_eq!(far.right(), i32::MAX);
        assert!(far.contains_point(Point::new(i32::MAX - 1, 5)));
    }

    #[test]
    fn test_bounding_ignores_empty() {
        let a = Rectangle::new(0, 0, 10, 10);
        let b = Rectangle::new(20, 5, 5, 20);
        let empty = Rectangle::new(-100, -100, 0, 50);

        assert_eq!(a.bounding(&b), Rectangle::new(0, 0, 25, 25));
        assert_eq!(a.bounding(&empty), a);
        assert_eq!(empty.bounding(&b), b);
    }

    #[test]
    fn test_overlap() {
        let a = Rectangle::new(0, 0, 10, 10);

        assert!(a.overlaps_with(&Rectangle::new(9, 9, 10, 10)));
        // touching edges do not overlap
        assert!(!a.overlaps_with(&Rectangle::new(10, 0, 10, 10)));
    }

    #[test]
    fn test_region() {
        let region: Region = vec![
            Rectangle::new(0, 0, 100, 4),
            Rectangle::new(0, 0, 0, 100),
            Rectangle::new(0, 96, 100, 4),
        ]
        .into_iter()
        .collect();

        assert_eq!(region.rects().len(), 2);
        assert!(region.contains_point(Point::new(50, 2)));
        assert!(!region.contains_point(Point::new(50, 50)));
        assert_eq!(region.bounding_box(), Rectangle::new(0, 0, 100, 100));
    }
}
