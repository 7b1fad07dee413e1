use tracing::trace;

use crate::border::BorderSize;
use crate::types::Size;

use super::area::{BackgroundArea, DecorationArea};
use super::dsl::{place_segment, LayoutMetrics, Segment};
use super::edge::{Edge, EdgeFrame};
use super::zones;

/// Assembles the complete area lists of one layout pass.
///
/// Each edge is placed on its own through [`place_segment`], then the
/// move strips and resize grips are appended behind the declared areas,
/// so that declared areas win every hit test.
#[derive(Debug, Clone, Copy)]
pub struct AreaBuilder {
    size: Size,
    border: BorderSize,
    metrics: LayoutMetrics,
}

/// The output of an [`AreaBuilder`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuiltAreas {
    /// Hit-testable areas, in priority order.
    pub interactive: Vec<DecorationArea>,
    /// Paint-only spans.
    pub background: Vec<BackgroundArea>,
}

impl AreaBuilder {
    /// Creates a builder for a decoration surface of `size`.
    pub fn new(size: Size, border: BorderSize, metrics: LayoutMetrics) -> Self {
        Self { size, border, metrics }
    }

    /// Lays out all four segments, in [`Edge::RING`] order.
    pub fn build(&self, segments: &[Segment; 4]) -> BuiltAreas {
        let mut built = BuiltAreas::default();

        for (edge, segment) in Edge::RING.iter().zip(segments) {
            let frame = EdgeFrame::new(*edge, self.size, &self.border);
            let placed = place_segment(&frame, segment, &self.metrics);

            trace!(
                "{:?}: {} areas, {} spans, natural widths {:?}",
                edge,
                placed.areas.len(),
                placed.spans.len(),
                placed.natural_widths
            );

            built.interactive.extend(placed.areas);
            built.background.extend(placed.spans);
        }

        let grips = zones::grip_sizes(&self.border, self.metrics.content_height());
        built
            .interactive
            .extend(zones::move_strips(self.size, &self.border, &grips));
        built.interactive.extend(zones::resize_strips(self.size, &grips));

        built
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::area::AreaKind;
    use crate::layout::dsl::parse_layout;
    use crate::layout::TitleMetrics;
    use crate::types::{Edges, Point, Rectangle};

    fn metrics() -> LayoutMetrics {
        LayoutMetrics {
            title: TitleMetrics::new(Size::new(60, 14)),
            icon_size: 20,
            button_size: 18,
            padding_size: 8,
            corner_radius: 10,
        }
    }

    #[test_log::test]
    fn test_empty_edges_keep_move_strips() {
        let builder = AreaBuilder::new(Size::new(200, 100), BorderSize::uniform(20), metrics());
        let built = builder.build(&parse_layout("| title |"));

        let grips: Vec<(AreaKind, Rectangle)> = built
            .interactive
            .iter()
            .filter(|a| matches!(a.kind(), AreaKind::ResizeEdge(_)))
            .map(|a| (a.kind(), a.geometry()))
            .collect();
        assert_eq!(
            grips,
            vec![
                (AreaKind::ResizeEdge(Edges::TOP), Rectangle::new(0, 0, 200, 7)),
                (AreaKind::ResizeEdge(Edges::LEFT), Rectangle::new(0, 0, 7, 100)),
                (AreaKind::ResizeEdge(Edges::BOTTOM), Rectangle::new(0, 93, 200, 7)),
                (AreaKind::ResizeEdge(Edges::RIGHT), Rectangle::new(193, 0, 7, 100)),
            ]
        );

        let left_move = built
            .interactive
            .iter()
            .find(|a| a.kind() == AreaKind::Move && a.edge() == Edge::Left)
            .unwrap();
        assert_eq!(left_move.geometry(), Rectangle::new(7, 20, 13, 60));

        let hit = built
            .interactive
            .iter()
            .find(|a| a.geometry().contains_point(Point::new(10, 50)))
            .unwrap();
        assert_eq!(hit.kind(), AreaKind::Move);
    }

    #[test]
    fn test_overlong_layout_does_not_overflow() {
        let builder = AreaBuilder::new(Size::new(200, 100), BorderSize::new(30, 4, 4, 4), metrics());
        let built = builder.build(&parse_layout("P2147483647 P1 title - a P40000 a - | icon | P9 P9"));

        assert_eq!(built.interactive.iter().filter(|a| a.kind() == AreaKind::Title).count(), 1);
        assert!(built.background.iter().all(|s| !s.geometry().is_empty()));
    }
}
