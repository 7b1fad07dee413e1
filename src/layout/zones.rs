//! Move and resize grips synthesized around the frame.
//!
//! Every edge gets a resize grip along its outer side. Whatever border is
//! left between the grip and the inner side becomes a move strip, so that
//! dragging anywhere on the frame does something useful.

use tracing::trace;

use crate::border::BorderSize;
use crate::types::{Rectangle, Size};

use super::area::{AreaKind, DecorationArea};
use super::edge::Edge;

/// The thinnest a resize grip may be, border permitting.
pub const MIN_RESIZE_THICKNESS: i32 = 7;

/// The thickness of the resize grip on an edge of `border` pixels whose
/// thickest item is `content_height` pixels deep.
///
/// The grip takes whatever the content leaves free, but never less than
/// [`MIN_RESIZE_THICKNESS`] and never more than the border itself.
pub fn resize_strip_thickness(border: i32, content_height: i32) -> i32 {
    border
        .saturating_sub(content_height)
        .max(MIN_RESIZE_THICKNESS)
        .min(border)
        .max(0)
}

/// The resize grip thickness of every edge for a layout pass whose
/// thickest item is `content_height` pixels deep.
///
/// Every edge leaves room for that item, whether or not it holds one.
pub fn grip_sizes(border: &BorderSize, content_height: i32) -> BorderSize {
    BorderSize::new(
        resize_strip_thickness(border.top, content_height),
        resize_strip_thickness(border.left, content_height),
        resize_strip_thickness(border.bottom, content_height),
        resize_strip_thickness(border.right, content_height),
    )
}

/// The four resize grips in ring order. Grips span the whole side of the
/// frame, so neighbouring grips overlap at the corners.
pub fn resize_strips(size: Size, grips: &BorderSize) -> Vec<DecorationArea> {
    let Size { width, height } = size;

    Edge::RING
        .iter()
        .map(|&edge| {
            let r = grips.get(edge);
            let geometry = match edge {
                Edge::Top => Rectangle::new(0, 0, width, r),
                Edge::Left => Rectangle::new(0, 0, r, height),
                Edge::Bottom => Rectangle::new(0, height.saturating_sub(r), width, r),
                Edge::Right => Rectangle::new(width.saturating_sub(r), 0, r, height),
            };
            DecorationArea::new(AreaKind::ResizeEdge(edge.mask()), geometry, edge)
        })
        .filter(non_degenerate)
        .collect()
}

/// The four move strips in ring order, filling the border between each
/// resize grip and the window.
pub fn move_strips(size: Size, border: &BorderSize, grips: &BorderSize) -> Vec<DecorationArea> {
    let Size { width, height } = size;
    let inner_width = width.saturating_sub(grips.left).saturating_sub(grips.right);
    let side = height.saturating_sub(border.top).saturating_sub(border.bottom);

    Edge::RING
        .iter()
        .map(|&edge| {
            let geometry = match edge {
                Edge::Top => Rectangle::new(grips.left, grips.top, inner_width, border.top - grips.top),
                Edge::Left => Rectangle::new(grips.left, border.top, border.left - grips.left, side),
                Edge::Bottom => Rectangle::new(
                    grips.left,
                    height.saturating_sub(border.bottom),
                    inner_width,
                    border.bottom - grips.bottom,
                ),
                Edge::Right => Rectangle::new(
                    width.saturating_sub(border.right),
                    border.top,
                    border.right - grips.right,
                    side,
                ),
            };
            DecorationArea::new(AreaKind::Move, geometry, edge)
        })
        .filter(non_degenerate)
        .collect()
}

fn non_degenerate(area: &DecorationArea) -> bool {
    let keep = !area.geometry().is_empty();
    if !keep {
        trace!("dropping degenerate {:?} strip on {:?}", area.kind(), area.edge());
    }
    keep
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Edges;

    #[test]
    fn test_resize_thickness_bounds() {
        for border in 0..40 {
            for content in 0..=border {
                let r = resize_strip_thickness(border, content);
                assert!(r >= MIN_RESIZE_THICKNESS.min(border), "{} {} -> {}", border, content, r);
                assert!(r <= border, "{} {} -> {}", border, content, r);
            }
        }
    }

    #[test]
    fn test_resize_thickness_values() {
        assert_eq!(resize_strip_thickness(30, 18), 12);
        assert_eq!(resize_strip_thickness(30, 28), 7);
        assert_eq!(resize_strip_thickness(4, 18), 4);
        assert_eq!(resize_strip_thickness(4, 0), 4);
        assert_eq!(resize_strip_thickness(0, 0), 0);
        assert_eq!(resize_strip_thickness(20, 20), 7);
        assert_eq!(resize_strip_thickness(i32::MAX, 0), i32::MAX);
        assert_eq!(resize_strip_thickness(3, i32::MIN), 3);
    }

    #[test]
    fn test_grips_share_one_content_height() {
        let border = BorderSize::new(30, 20, 10, 4);
        assert_eq!(grip_sizes(&border, 20), BorderSize::new(10, 7, 7, 4));
        assert_eq!(grip_sizes(&border, 0), border);
    }

    #[test]
    fn test_resize_strips_cover_the_sides() {
        let grips = BorderSize::new(12, 7, 7, 7);
        let strips = resize_strips(Size::new(200, 100), &grips);

        let got: Vec<(AreaKind, Rectangle)> = strips.iter().map(|a| (a.kind(), a.geometry())).collect();
        assert_eq!(
            got,
            vec![
                (AreaKind::ResizeEdge(Edges::TOP), Rectangle::new(0, 0, 200, 12)),
                (AreaKind::ResizeEdge(Edges::LEFT), Rectangle::new(0, 0, 7, 100)),
                (AreaKind::ResizeEdge(Edges::BOTTOM), Rectangle::new(0, 93, 200, 7)),
                (AreaKind::ResizeEdge(Edges::RIGHT), Rectangle::new(193, 0, 7, 100)),
            ]
        );
    }

    #[test]
    fn test_move_strips_fill_the_slack() {
        let border = BorderSize::new(30, 10, 10, 10);
        let grips = BorderSize::new(12, 7, 7, 7);
        let strips = move_strips(Size::new(200, 100), &border, &grips);

        let got: Vec<Rectangle> = strips.iter().map(DecorationArea::geometry).collect();
        assert_eq!(
            got,
            vec![
                Rectangle::new(7, 12, 186, 18),
                Rectangle::new(7, 30, 3, 60),
                Rectangle::new(7, 90, 186, 3),
                Rectangle::new(190, 30, 3, 60),
            ]
        );
        assert!(strips.iter().all(|a| a.kind() == AreaKind::Move));
    }

    #[test]
    fn test_huge_border_does_not_overflow() {
        let border = BorderSize::uniform(i32::MAX);
        let grips = grip_sizes(&border, 20);
        let size = Size::new(200, 100);

        assert!(move_strips(size, &border, &grips).iter().all(|a| a.kind() == AreaKind::Move));
        assert_eq!(resize_strips(size, &grips).len(), 4);
    }

    #[test_log::test]
    fn test_full_grips_leave_no_move_strips() {
        let border = BorderSize::uniform(4);
        let grips = grip_sizes(&border, 18);
        assert_eq!(grips, border);

        assert!(move_strips(Size::new(200, 40), &border, &grips).is_empty());
        assert_eq!(resize_strips(Size::new(200, 40), &grips).len(), 4);
    }
}
