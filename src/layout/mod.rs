//! Laying out the areas of a decoration.
//!
//! # Layout descriptors
//!
//! A layout descriptor is a whitespace-separated list of tokens. It is
//! split into up to four *segments* by `-` tokens, which describe the top,
//! left, bottom and right edges in that order. Each segment is further
//! split into a left, center and right *group* by `|` tokens:
//!
//! ```text
//! a | icon p title | minimize p maximize p close a - a | | a
//! ```
//!
//! The left group starts at the beginning of the edge, the center group is
//! centred on it and the right group ends flush with its end. The top and
//! bottom edges run left to right; the left edge runs bottom to top and the
//! right edge top to bottom. See [`dsl`] for the tokens themselves.
//!
//! Every layout pass also synthesizes a resize grip along the outside of
//! each edge and a move strip in whatever border is left over, see
//! [`zones`].
//!
//! # Hit testing
//!
//! [`LayoutState`] keeps the resulting areas in two lists. The interactive
//! list is hit-tested in order, so earlier areas win: the declared title,
//! icon and buttons come first, then the move strips, then the resize
//! grips. The background list is for painting only.

pub mod area;
pub mod builder;
pub mod dsl;
pub mod edge;
pub mod zones;

use tracing::{debug, instrument};

use crate::border::BorderSize;
use crate::button::Button;
use crate::config::DecorationConfig;
use crate::types::{Edges, Point, Region, Size};

use area::{AreaKind, BackgroundArea, Capabilities, DecorationArea};
use builder::AreaBuilder;
use dsl::{parse_layout, LayoutMetrics};

/// The measured size of a window title, as laid out.
///
/// Text measurement is the host's business, so the host measures the
/// title (and the ellipsis it is cut short with) and hands the results in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TitleMetrics {
    /// The box the title text is drawn in.
    pub title: Size,
    /// The box of the ellipsis following a truncated title.
    pub dots: Option<Size>,
}

impl TitleMetrics {
    /// A title shown in full.
    pub fn new(title: Size) -> Self {
        Self { title, dots: None }
    }

    /// Fits a title measured at `measured` into `max_title_size`.
    ///
    /// A title that is too wide is cut so that it and an ellipsis of size
    /// `dots` together take up exactly `max_title_size`.
    pub fn fit(measured: Size, dots: Size, max_title_size: i32) -> Self {
        if measured.width <= max_title_size {
            return Self::new(measured);
        }

        let width = max_title_size.saturating_sub(dots.width).max(0);
        Self {
            title: Size::new(width, measured.height),
            dots: Some(dots),
        }
    }

    /// Whether the title was truncated.
    pub fn is_truncated(&self) -> bool {
        self.dots.is_some()
    }

    /// The length the title takes along its edge, ellipsis included.
    pub fn reserved_length(&self) -> i32 {
        self.title.width.saturating_add(self.dots.map_or(0, |d| d.width))
    }
}

/// The areas of a decoration, as of its last layout pass.
///
/// The state is thrown away and rebuilt from scratch whenever the size,
/// the title or the theme changes. Nothing should hold on to an area
/// across a rebuild; look it up again by position instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutState {
    interactive: Vec<DecorationArea>,
    background: Vec<BackgroundArea>,
}

impl LayoutState {
    /// Creates a new, empty `LayoutState`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Throws away the current areas and lays them out again.
    #[instrument(level = "trace", skip(self, config))]
    pub fn rebuild<C>(&mut self, config: &C, border: BorderSize, size: Size, title: TitleMetrics)
    where
        C: DecorationConfig + ?Sized,
    {
        self.clear();

        let segments = parse_layout(config.layout());
        let metrics = LayoutMetrics::from_config(config, title);
        let built = AreaBuilder::new(size, border, metrics).build(&segments);

        self.interactive = built.interactive;
        self.background = built.background;

        debug!(
            "laid out {} interactive and {} background areas",
            self.interactive.len(),
            self.background.len()
        );
    }

    /// Removes all areas.
    pub fn clear(&mut self) {
        self.interactive.clear();
        self.background.clear();
    }

    /// Whether there are no areas at all.
    pub fn is_empty(&self) -> bool {
        self.interactive.is_empty() && self.background.is_empty()
    }

    /// All hit-testable areas, in priority order.
    pub fn interactive_areas(&self) -> &[DecorationArea] {
        &self.interactive
    }

    /// The paint-only background and accent spans.
    pub fn background_areas(&self) -> &[BackgroundArea] {
        &self.background
    }

    /// The interactive areas the renderer has to draw, in order.
    pub fn renderable_areas(&self) -> impl Iterator<Item = &DecorationArea> {
        self.interactive
            .iter()
            .filter(|a| a.kind().has(Capabilities::RENDERABLE))
    }

    /// The index of the first interactive area containing `point`.
    pub fn find_index_at(&self, point: Point) -> Option<usize> {
        self.interactive
            .iter()
            .position(|a| a.geometry().contains_point(point))
    }

    /// The first interactive area containing `point`.
    pub fn find_area_at(&self, point: Point) -> Option<&DecorationArea> {
        self.find_index_at(point).map(|idx| &self.interactive[idx])
    }

    /// The interactive area at `idx`.
    pub fn area(&self, idx: usize) -> Option<&DecorationArea> {
        self.interactive.get(idx)
    }

    /// The interactive area at `idx`, mutably.
    pub fn area_mut(&mut self, idx: usize) -> Option<&mut DecorationArea> {
        self.interactive.get_mut(idx)
    }

    /// Applies `f` to every button.
    pub fn for_each_button<F>(&mut self, f: F)
    where
        F: FnMut(&mut Button),
    {
        self.interactive
            .iter_mut()
            .filter_map(DecorationArea::button_mut)
            .for_each(f);
    }

    /// The union of the edges of every resize grip containing `point`.
    pub fn calculate_resize_edges(&self, point: Point) -> Edges {
        self.interactive
            .iter()
            .filter(|a| a.geometry().contains_point(point))
            .filter_map(|a| match a.kind() {
                AreaKind::ResizeEdge(edges) => Some(edges),
                _ => None,
            })
            .fold(Edges::empty(), |acc, e| acc | e)
    }

    /// The region covered by the decoration, used to accept input.
    pub fn calculate_region(&self) -> Region {
        self.interactive
            .iter()
            .map(DecorationArea::geometry)
            .chain(self.background.iter().map(BackgroundArea::geometry))
            .collect()
    }
}
