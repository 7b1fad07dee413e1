//! The layout descriptor language.
//!
//! A descriptor holds up to four segments separated by `-`, one per edge
//! in [`Edge::RING`] order. Each segment is split by up to two `|` into
//! a left, center and right group. The tokens are:
//!
//! | token | meaning |
//! |-------|---------|
//! | `title` | the window title |
//! | `icon` | the application icon |
//! | `close`, `maximize`, `minimize` | a button |
//! | `p` | a spacer of the theme's padding size |
//! | `P<n>` | a spacer of `n` pixels, at most [`MAX_LENGTH`] |
//! | `a`, `A…`, `d`, `D…` | an accent/background boundary |
//!
//! Boundaries alternate between closing a stretch of plain border and a
//! stretch of accent. The boundary token itself is kept as the span's
//! corner style, for the renderer to interpret.

use std::str::FromStr;

use tracing::{trace, warn};

use crate::button::ButtonType;
use crate::config::DecorationConfig;
use crate::types::{Size, MAX_LENGTH};
use crate::{DecorError, Result};

use super::area::{AreaKind, BackgroundArea, DecorationArea};
use super::edge::EdgeFrame;
use super::TitleMetrics;

/// A single token of a layout segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `title`
    Title,
    /// `icon`
    Icon,
    /// `close`, `maximize` or `minimize`
    Button(ButtonType),
    /// `p`
    Padding,
    /// `P<n>`
    Spacer(i32),
    /// `a`, `A…`, `d` or `D…`
    Marker(String),
}

impl FromStr for Token {
    type Err = DecorError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DecorError::InvalidLayoutToken(s.to_string());

        match s {
            "title" => Ok(Token::Title),
            "icon" => Ok(Token::Icon),
            "p" => Ok(Token::Padding),
            "a" | "d" => Ok(Token::Marker(s.to_string())),
            _ if s.starts_with('P') => s[1..]
                .parse::<i32>()
                .ok()
                .filter(|n| *n >= 0)
                .map(|n| Token::Spacer(n.min(MAX_LENGTH)))
                .ok_or_else(invalid),
            _ if s.starts_with('A') || s.starts_with('D') => Ok(Token::Marker(s.to_string())),
            _ => s.parse::<ButtonType>().map(Token::Button).map_err(|_| invalid()),
        }
    }
}

/// The tokens of one edge, split into its left, center and right groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    /// The left, center and right groups.
    pub groups: [Vec<Token>; 3],
}

impl Segment {
    /// Whether the segment holds no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    /// All tokens of the segment, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.groups.iter().flatten()
    }
}

/// Splits a layout descriptor into its four edge segments.
///
/// This never fails: unknown tokens, surplus `|` and surplus segments are
/// dropped with a warning, and missing segments are empty.
pub fn parse_layout(layout: &str) -> [Segment; 4] {
    let mut segments: [Segment; 4] = Default::default();
    let mut edge = 0;
    let mut group = 0;

    for word in layout.split_whitespace() {
        match word {
            "-" => {
                if edge == segments.len() - 1 {
                    warn!("layout has more than {} segments, ignoring the rest", segments.len());
                    break;
                }
                edge += 1;
                group = 0;
            }
            "|" => {
                if group < 2 {
                    group += 1;
                } else {
                    warn!("extra `|` in segment {}, ignoring it", edge);
                }
            }
            _ => match word.parse::<Token>() {
                Ok(token) => segments[edge].groups[group].push(token),
                Err(e) => warn!("{}, skipping it", e),
            },
        }
    }

    segments
}

/// The sizes the layout engine works with for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutMetrics {
    /// The title box and its ellipsis.
    pub title: TitleMetrics,
    /// The side of the square icon.
    pub icon_size: i32,
    /// The side of the square buttons.
    pub button_size: i32,
    /// The length of a `p` spacer.
    pub padding_size: i32,
    /// The shortest accent span that may be closed.
    pub corner_radius: i32,
}

impl LayoutMetrics {
    /// Reads the sizes of a layout pass from a theme.
    pub fn from_config<C: DecorationConfig + ?Sized>(config: &C, title: TitleMetrics) -> Self {
        Self {
            title,
            icon_size: config.icon_size().clamp(0, MAX_LENGTH),
            button_size: config.button_size().clamp(0, MAX_LENGTH),
            padding_size: config.padding_size().clamp(0, MAX_LENGTH),
            corner_radius: config.corner_radius().clamp(0, MAX_LENGTH),
        }
    }

    /// The depth of the thickest item a layout may hold: the title, the
    /// icon or a button. Resize grips leave this much of every border free.
    pub fn content_height(&self) -> i32 {
        self.title
            .title
            .height
            .max(self.icon_size)
            .max(self.button_size)
            .max(0)
    }

    /// The size a token occupies: length along the strip and depth across it.
    ///
    /// Spacers have no depth and markers take no room at all.
    pub fn token_size(&self, token: &Token) -> Size {
        match token {
            Token::Title => Size::new(self.title.reserved_length(), self.title.title.height),
            Token::Icon => Size::new(self.icon_size, self.icon_size),
            Token::Button(_) => Size::new(self.button_size, self.button_size),
            Token::Padding => Size::new(self.padding_size, 0),
            Token::Spacer(n) => Size::new(*n, 0),
            Token::Marker(_) => Size::zeroed(),
        }
    }

    /// The summed length of a group of tokens.
    pub fn natural_width(&self, group: &[Token]) -> i32 {
        group
            .iter()
            .map(|t| self.token_size(t).width)
            .fold(0, i32::saturating_add)
    }
}

/// Everything laid out on a single edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentPlacement {
    /// The title, icon and button areas, in declaration order.
    pub areas: Vec<DecorationArea>,
    /// The background and accent spans, in order along the strip.
    pub spans: Vec<BackgroundArea>,
    /// The natural width of the left, center and right groups.
    pub natural_widths: [i32; 3],
}

/// Lays out one segment along an edge.
///
/// This only depends on its arguments, so each edge is laid out
/// independently of the others.
pub fn place_segment(frame: &EdgeFrame, segment: &Segment, metrics: &LayoutMetrics) -> SegmentPlacement {
    let strip_length = frame.strip_length();
    let mut placement = SegmentPlacement::default();
    let mut runs = SpanRuns::new(frame, metrics.corner_radius);

    for (idx, group) in segment.groups.iter().enumerate() {
        let natural = metrics.natural_width(group);
        placement.natural_widths[idx] = natural;

        let mut shift = match idx {
            0 => 0,
            1 => strip_length.saturating_sub(natural) / 2,
            _ => strip_length.saturating_sub(natural),
        };

        for token in group {
            let size = metrics.token_size(token);

            let area = match token {
                Token::Title => {
                    let title = metrics.title.title;
                    let dots = metrics
                        .title
                        .dots
                        .map(|d| frame.place(shift.saturating_add(title.width), d));
                    let area = DecorationArea::new(AreaKind::Title, frame.place(shift, title), frame.edge());
                    Some(area.with_dots(dots))
                }
                Token::Icon => Some(DecorationArea::new(AreaKind::Icon, frame.place(shift, size), frame.edge())),
                Token::Button(ty) => Some(DecorationArea::new(
                    AreaKind::Button(*ty),
                    frame.place(shift, size),
                    frame.edge(),
                )),
                Token::Marker(style) => {
                    runs.mark(shift, style, &mut placement.spans);
                    None
                }
                Token::Padding | Token::Spacer(_) => None,
            };

            if let Some(area) = area {
                push_area(&mut placement.areas, area);
            }

            shift = shift.saturating_add(size.width);
        }
    }

    runs.finish(strip_length, &mut placement.spans);
    placement
}

fn push_area(areas: &mut Vec<DecorationArea>, area: DecorationArea) {
    if area.geometry().is_empty() {
        trace!("dropping degenerate {:?} area at {:?}", area.kind(), area.geometry());
    } else {
        areas.push(area);
    }
}

/// Tracks the alternating background and accent runs along a strip.
struct SpanRuns<'f> {
    frame: &'f EdgeFrame,
    min_length: i32,
    last: i32,
    counter: u32,
    opener: Option<String>,
}

impl<'f> SpanRuns<'f> {
    fn new(frame: &'f EdgeFrame, corner_radius: i32) -> Self {
        Self {
            frame,
            min_length: corner_radius.max(0),
            last: 0,
            counter: 0,
            opener: None,
        }
    }

    fn kind(&self) -> AreaKind {
        if self.counter % 2 == 0 {
            AreaKind::Background
        } else {
            AreaKind::Accent
        }
    }

    /// Closes the current run at `shift`, unless the run is too short to
    /// hold its own corners. The first marker of an edge always closes.
    fn mark(&mut self, shift: i32, style: &str, spans: &mut Vec<BackgroundArea>) {
        if shift.saturating_sub(self.last) <= self.min_length && self.counter > 0 {
            trace!("marker `{}` at {} is too close to {}, ignoring it", style, shift, self.last);
            return;
        }

        self.emit(shift, spans);
        self.last = shift;
        self.counter += 1;
        self.opener = Some(style.to_string());
    }

    /// Closes the last run at the far end of the strip.
    fn finish(mut self, strip_length: i32, spans: &mut Vec<BackgroundArea>) {
        self.emit(strip_length, spans);
    }

    fn emit(&mut self, to: i32, spans: &mut Vec<BackgroundArea>) {
        let opener = self.opener.take();
        if to <= self.last {
            return;
        }

        let geometry = self.frame.span(self.last, to);
        if geometry.is_empty() {
            trace!("dropping degenerate span at {:?}", geometry);
            return;
        }

        spans.push(BackgroundArea::new(self.kind(), geometry, self.frame.edge(), opener));
    }
}
