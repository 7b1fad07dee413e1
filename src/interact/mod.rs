//! Turning pointer and touch input into window management actions.
//!
//! [`InteractionState`] is a small state machine fed with motion, press,
//! release and focus-lost events. A press alone cannot tell a click on the
//! title from the start of a drag, so that is settled lazily: the first
//! motion while grabbed turns the grab into a move. Buttons act on release,
//! and only if the pointer is still on the button it was pressed on.
//! Two presses on a movable area within [`DOUBLE_CLICK_TIMEOUT`] toggle
//! maximization.
//!
//! The state machine never holds on to an area. It borrows the
//! [`LayoutState`] for the length of one event and looks areas up by
//! position, so the layout may be rebuilt freely between events.
//!
//! [`DOUBLE_CLICK_TIMEOUT`]: timer::DOUBLE_CLICK_TIMEOUT

pub mod timer;

use custom_debug_derive::Debug;
use strum::{Display, IntoStaticStr};
use tracing::{debug, trace, warn};

use crate::button::{Button, ButtonType};
use crate::layout::area::{AreaKind, Capabilities};
use crate::layout::LayoutState;
use crate::types::{Edges, Point};

use timer::{DebounceTimer, Scheduler, DOUBLE_CLICK_TIMEOUT};

/// What the window manager should do with the decorated window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum DecorationAction {
    /// Nothing.
    #[default]
    None,
    /// Start an interactive move.
    Move,
    /// Start an interactive resize along the response's edges.
    Resize,
    /// Close the window.
    Close,
    /// Maximize or restore the window.
    ToggleMaximize,
    /// Minimize the window.
    Minimize,
}

impl From<ButtonType> for DecorationAction {
    fn from(button: ButtonType) -> Self {
        match button {
            ButtonType::Close => DecorationAction::Close,
            ButtonType::ToggleMaximize => DecorationAction::ToggleMaximize,
            ButtonType::Minimize => DecorationAction::Minimize,
        }
    }
}

/// The answer to an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActionResponse {
    /// The action to carry out.
    pub action: DecorationAction,
    /// The edges to resize along, for [`DecorationAction::Resize`].
    pub edges: Edges,
}

impl ActionResponse {
    /// A response that asks for nothing.
    pub const fn none() -> Self {
        Self {
            action: DecorationAction::None,
            edges: Edges::empty(),
        }
    }

    /// A response carrying `action` and no edges.
    pub const fn new(action: DecorationAction) -> Self {
        Self {
            action,
            edges: Edges::empty(),
        }
    }

    /// A resize along `edges`.
    pub const fn resize(edges: Edges) -> Self {
        Self {
            action: DecorationAction::Resize,
            edges,
        }
    }

    /// Whether the response asks for nothing.
    pub fn is_none(&self) -> bool {
        self.action == DecorationAction::None
    }
}

/// The pointer cursor to show over the decoration.
///
/// The string forms are the standard xcursor names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CursorShape {
    /// The regular arrow.
    #[default]
    Default,
    /// Resizing along the top edge.
    TopSide,
    /// Resizing along the bottom edge.
    BottomSide,
    /// Resizing along the left edge.
    LeftSide,
    /// Resizing along the right edge.
    RightSide,
    /// Resizing from the top left corner.
    TopLeftCorner,
    /// Resizing from the top right corner.
    TopRightCorner,
    /// Resizing from the bottom left corner.
    BottomLeftCorner,
    /// Resizing from the bottom right corner.
    BottomRightCorner,
}

impl CursorShape {
    /// The cursor for resizing along `edges`.
    pub fn from_edges(edges: Edges) -> Self {
        const TOP: u32 = Edges::TOP.bits();
        const BOTTOM: u32 = Edges::BOTTOM.bits();
        const LEFT: u32 = Edges::LEFT.bits();
        const RIGHT: u32 = Edges::RIGHT.bits();
        const TOP_LEFT: u32 = TOP | LEFT;
        const TOP_RIGHT: u32 = TOP | RIGHT;
        const BOTTOM_LEFT: u32 = BOTTOM | LEFT;
        const BOTTOM_RIGHT: u32 = BOTTOM | RIGHT;

        match edges.bits() {
            TOP => CursorShape::TopSide,
            BOTTOM => CursorShape::BottomSide,
            LEFT => CursorShape::LeftSide,
            RIGHT => CursorShape::RightSide,
            TOP_LEFT => CursorShape::TopLeftCorner,
            TOP_RIGHT => CursorShape::TopRightCorner,
            BOTTOM_LEFT => CursorShape::BottomLeftCorner,
            BOTTOM_RIGHT => CursorShape::BottomRightCorner,
            _ => CursorShape::Default,
        }
    }

    /// The xcursor name of the shape.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A coarse view of where the state machine is at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerState {
    /// The pointer is outside every area.
    Idle,
    /// The pointer is over an area, no button held.
    Hovering,
    /// A press is held and has not been resolved yet.
    Grabbed,
    /// A press on a movable area was released recently enough that the
    /// next press makes a double click.
    AwaitingDoubleClick,
}

/// The input state of a single decoration.
#[derive(Debug)]
pub struct InteractionState<S: Scheduler> {
    current_input: Point,
    grab_origin: Point,
    is_grabbed: bool,
    hovering: bool,
    double_click_pending: bool,
    cursor: CursorShape,
    debounce: DebounceTimer<S::Token>,
    #[debug(skip)]
    scheduler: S,
}

impl<S: Scheduler> InteractionState<S> {
    /// Creates an idle state machine arming its timers on `scheduler`.
    pub fn new(scheduler: S) -> Self {
        Self {
            current_input: Point::zeroed(),
            grab_origin: Point::zeroed(),
            is_grabbed: false,
            hovering: false,
            double_click_pending: false,
            cursor: CursorShape::Default,
            debounce: DebounceTimer::new(),
            scheduler,
        }
    }

    /// The scheduler timers are armed on.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The last known pointer position.
    pub fn position(&self) -> Point {
        self.current_input
    }

    /// The cursor that should be shown at the last known position.
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// Whether a press is held.
    pub fn is_grabbed(&self) -> bool {
        self.is_grabbed
    }

    /// Where the state machine is at.
    ///
    /// A held press reports [`PointerState::Grabbed`], even when it is the
    /// second press of a double click.
    pub fn state(&self) -> PointerState {
        if self.is_grabbed {
            PointerState::Grabbed
        } else if self.double_click_pending || self.debounce.is_pending() {
            PointerState::AwaitingDoubleClick
        } else if self.hovering {
            PointerState::Hovering
        } else {
            PointerState::Idle
        }
    }

    /// Handles the pointer moving to `point`.
    pub fn handle_motion(&mut self, layout: &mut LayoutState, point: Point) -> ActionResponse {
        let previous = layout.find_index_at(self.current_input);
        let current = layout.find_index_at(point);
        let mut response = ActionResponse::none();

        if previous == current {
            let movable = current
                .and_then(|idx| layout.area(idx))
                .is_some_and(|area| area.kind().has(Capabilities::MOVABLE));

            if self.is_grabbed && movable {
                debug!("drag on a movable area, starting a move");
                self.is_grabbed = false;
                response = ActionResponse::new(DecorationAction::Move);
            }
        } else {
            with_button(layout, previous, |b| b.set_hover(false));
            with_button(layout, current, |b| b.set_hover(true));
        }

        self.current_input = point;
        self.hovering = current.is_some();
        self.cursor = CursorShape::from_edges(layout.calculate_resize_edges(point));

        response
    }

    /// Handles a button or touch press at the last known position.
    pub fn handle_press(&mut self, layout: &mut LayoutState) -> ActionResponse {
        let idx = layout.find_index_at(self.current_input);
        let kind = idx.and_then(|idx| layout.area(idx)).map(|area| area.kind());
        let mut response = ActionResponse::none();

        if let Some(kind) = kind {
            trace!("press on {:?} at {:?}", kind, self.current_input);

            if kind.has(Capabilities::MOVABLE) {
                if self.debounce.is_pending() {
                    debug!("second press within the double click window");
                    self.debounce.disarm(&self.scheduler);
                    self.double_click_pending = true;
                } else if let Err(e) = self.debounce.arm(&self.scheduler, DOUBLE_CLICK_TIMEOUT) {
                    warn!("{}, double clicks will not be detected", e);
                }
            }

            if kind.has(Capabilities::RESIZABLE) {
                response = ActionResponse::resize(layout.calculate_resize_edges(self.current_input));
            }

            if let AreaKind::Button(_) = kind {
                with_button(layout, idx, |b| b.set_pressed(true));
            }
        }

        self.grab_origin = self.current_input;
        self.is_grabbed = true;

        response
    }

    /// Handles a button or touch release.
    pub fn handle_release(&mut self, layout: &mut LayoutState) -> ActionResponse {
        if self.double_click_pending {
            debug!("double click, toggling maximize");
            self.double_click_pending = false;
            self.is_grabbed = false;
            let origin = layout.find_index_at(self.grab_origin);
            with_button(layout, origin, |b| b.set_pressed(false));
            return ActionResponse::new(DecorationAction::ToggleMaximize);
        }

        if !self.is_grabbed {
            return ActionResponse::none();
        }
        self.is_grabbed = false;

        let begin = layout.find_index_at(self.grab_origin);
        let end = layout.find_index_at(self.current_input);
        let mut response = ActionResponse::none();

        with_button(layout, begin, |b| {
            b.set_pressed(false);
            if begin == end {
                response = ActionResponse::new(b.button_type().into());
            } else {
                trace!("pointer left the {} button before release", b.button_type());
            }
        });

        response
    }

    /// Handles the pointer or touch point leaving the decoration.
    ///
    /// Any held button is released without acting, and hover is cleared.
    pub fn handle_focus_lost(&mut self, layout: &mut LayoutState) {
        if self.is_grabbed {
            let origin = layout.find_index_at(self.grab_origin);
            with_button(layout, origin, |b| b.set_pressed(false));
            self.is_grabbed = false;
        }

        let current = layout.find_index_at(self.current_input);
        with_button(layout, current, |b| b.set_hover(false));
        self.hovering = false;
        self.cursor = CursorShape::Default;
    }

    /// Cancels the double-click timer, if armed.
    pub fn cancel_timers(&mut self) {
        self.debounce.disarm(&self.scheduler);
        self.double_click_pending = false;
    }
}

fn with_button<F>(layout: &mut LayoutState, idx: Option<usize>, f: F)
where
    F: FnOnce(&mut Button),
{
    if let Some(button) = idx
        .and_then(|idx| layout.area_mut(idx))
        .and_then(|area| area.button_mut())
    {
        f(button);
    }
}
