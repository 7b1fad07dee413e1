//! The areas a decoration is made of.

use bitflags::bitflags;

use crate::button::{Button, ButtonType};
use crate::types::{Edges, Rectangle};

use super::edge::Edge;

bitflags! {

/// What can be done with an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities: u8 {
    /// The renderer draws something in the area.
    const RENDERABLE = 1 << 0;
    /// Pressing in the area starts a resize.
    const RESIZABLE  = 1 << 1;
    /// Dragging the area moves the window.
    const MOVABLE    = 1 << 2;
}

}

/// The different kinds of areas around the decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaKind {
    /// Empty border space that moves the window when dragged.
    Move,
    /// The window title.
    Title,
    /// The application icon.
    Icon,
    /// A button.
    Button(ButtonType),
    /// A resize grip for the given edges.
    ResizeEdge(Edges),
    /// A paint-only stretch of plain border.
    Background,
    /// A paint-only stretch of accent-coloured border.
    Accent,
}

impl AreaKind {
    /// The capabilities of this kind of area.
    pub fn capabilities(&self) -> Capabilities {
        use Capabilities as C;

        match self {
            AreaKind::Move => C::MOVABLE,
            AreaKind::Title | AreaKind::Icon => C::MOVABLE | C::RENDERABLE,
            AreaKind::Button(_) => C::RENDERABLE,
            AreaKind::ResizeEdge(_) => C::RESIZABLE,
            AreaKind::Background | AreaKind::Accent => C::RENDERABLE,
        }
    }

    /// Shorthand for checking a single capability.
    pub fn has(&self, caps: Capabilities) -> bool {
        self.capabilities().contains(caps)
    }
}

/// An area of the decoration which reacts to input events.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationArea {
    kind: AreaKind,
    geometry: Rectangle,
    edge: Edge,
    button: Option<Button>,
    dots: Option<Rectangle>,
}

impl DecorationArea {
    /// Creates a new area. Button areas get their own [`Button`].
    pub fn new(kind: AreaKind, geometry: Rectangle, edge: Edge) -> Self {
        let button = match kind {
            AreaKind::Button(ty) => Some(Button::new(ty)),
            _ => None,
        };

        Self {
            kind,
            geometry,
            edge,
            button,
            dots: None,
        }
    }

    /// Attaches the geometry of a title's ellipsis.
    pub(crate) fn with_dots(mut self, dots: Option<Rectangle>) -> Self {
        self.dots = dots;
        self
    }

    /// The kind of the area.
    pub fn kind(&self) -> AreaKind {
        self.kind
    }

    /// The geometry of the area, relative to the layout.
    pub fn geometry(&self) -> Rectangle {
        self.geometry
    }

    /// The edge the area was laid out on.
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// The geometry of the "..." following a truncated title, if any.
    pub fn dots(&self) -> Option<Rectangle> {
        self.dots
    }

    /// The area's button, if it is a button.
    pub fn button(&self) -> Option<&Button> {
        self.button.as_ref()
    }

    /// The area's button, mutably, if it is a button.
    pub fn button_mut(&mut self) -> Option<&mut Button> {
        self.button.as_mut()
    }
}

/// A paint-only area along an edge: either plain border or accent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundArea {
    kind: AreaKind,
    geometry: Rectangle,
    edge: Edge,
    corner_style: Option<String>,
}

impl BackgroundArea {
    /// Creates a new background or accent span.
    pub fn new(kind: AreaKind, geometry: Rectangle, edge: Edge, corner_style: Option<String>) -> Self {
        debug_assert!(matches!(kind, AreaKind::Background | AreaKind::Accent));
        Self {
            kind,
            geometry,
            edge,
            corner_style,
        }
    }

    /// Either [`AreaKind::Background`] or [`AreaKind::Accent`].
    pub fn kind(&self) -> AreaKind {
        self.kind
    }

    /// The geometry of the span, relative to the layout.
    pub fn geometry(&self) -> Rectangle {
        self.geometry
    }

    /// The edge the span runs along.
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// The marker that opened the span, e.g. `a` or `Atr`.
    ///
    /// This is passed through untouched for the renderer to decide
    /// which ends of the span to round.
    pub fn corner_style(&self) -> Option<&str> {
        self.corner_style.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities() {
        assert!(AreaKind::Title.has(Capabilities::MOVABLE));
        assert!(AreaKind::Icon.has(Capabilities::MOVABLE | Capabilities::RENDERABLE));
        assert!(!AreaKind::Button(ButtonType::Close).has(Capabilities::MOVABLE));
        assert!(AreaKind::ResizeEdge(Edges::TOP).has(Capabilities::RESIZABLE));
        assert!(!AreaKind::Move.has(Capabilities::RENDERABLE));
        assert!(!AreaKind::Accent.has(Capabilities::MOVABLE));
    }

    #[test]
    fn test_only_buttons_own_a_button() {
        let rect = Rectangle::new(0, 0, 10, 10);

        let area = DecorationArea::new(AreaKind::Button(ButtonType::Minimize), rect, Edge::Top);
        assert_eq!(area.button().map(Button::button_type), Some(ButtonType::Minimize));

        let area = DecorationArea::new(AreaKind::Title, rect, Edge::Top);
        assert!(area.button().is_none());
    }
}
