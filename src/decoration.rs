//! The decoration of a single window.

use tracing::{debug, info, instrument};

use crate::border::BorderSize;
use crate::config::DecorationConfig;
use crate::interact::{ActionResponse, InteractionState};
use crate::interact::timer::Scheduler;
use crate::layout::{LayoutState, TitleMetrics};
use crate::types::{Point, Rectangle, Region, RoundedCorners, Size};
use crate::Result;

/// An input event on the decoration surface.
///
/// Coordinates are relative to the top left corner of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// The pointer entered the surface.
    PointerEnter {
        /// Horizontal position.
        x: i32,
        /// Vertical position.
        y: i32,
    },
    /// The pointer left the surface.
    PointerLeave,
    /// The pointer moved.
    PointerMotion {
        /// Horizontal position.
        x: i32,
        /// Vertical position.
        y: i32,
    },
    /// The primary pointer button changed state.
    PointerButton {
        /// Whether it was pressed or released.
        pressed: bool,
    },
    /// A touch point went down.
    TouchDown {
        /// Horizontal position.
        x: i32,
        /// Vertical position.
        y: i32,
    },
    /// A touch point moved.
    TouchMotion {
        /// Horizontal position.
        x: i32,
        /// Vertical position.
        y: i32,
    },
    /// A touch point was lifted.
    TouchUp,
}

/// Everything needed to decorate one window.
///
/// A `Decoration` owns the window's theme, its current layout and its
/// input state. The host feeds it sizes, titles and input events, and
/// reads back areas to paint and actions to carry out.
///
/// # Example
///
/// ```rust
/// use firedecor::{Decoration, InputEvent, ManualScheduler, ThemeConfig, TitleMetrics};
/// use firedecor::interact::DecorationAction;
/// use firedecor::types::Size;
///
/// let theme = ThemeConfig::builder()
///     .layout("| title | close")
///     .border_size("30 4")
///     .finish()
///     .unwrap();
///
/// let mut deco = Decoration::new(theme, ManualScheduler::new()).unwrap();
/// deco.set_title(TitleMetrics::new(Size::new(60, 14)));
/// deco.resize(Size::new(200, 100));
///
/// deco.handle_event(InputEvent::PointerMotion { x: 190, y: 12 });
/// deco.handle_event(InputEvent::PointerButton { pressed: true });
/// let response = deco.handle_event(InputEvent::PointerButton { pressed: false });
///
/// assert_eq!(response.action, DecorationAction::Close);
/// ```
#[derive(Debug)]
pub struct Decoration<C: DecorationConfig, S: Scheduler> {
    config: C,
    border: BorderSize,
    size: Size,
    title: TitleMetrics,
    fullscreen: bool,
    active: bool,
    maximized: bool,
    layout: LayoutState,
    interaction: InteractionState<S>,
}

impl<C: DecorationConfig, S: Scheduler> Decoration<C, S> {
    /// Creates the decoration of a window with the theme `config`, arming
    /// its timers on `scheduler`.
    ///
    /// The decoration is empty until it is given a size.
    pub fn new(config: C, scheduler: S) -> Result<Self> {
        config.validate()?;
        let border = config.border();

        Ok(Self {
            config,
            border,
            size: Size::zeroed(),
            title: TitleMetrics::default(),
            fullscreen: false,
            active: true,
            maximized: false,
            layout: LayoutState::new(),
            interaction: InteractionState::new(scheduler),
        })
    }

    /// The theme in use.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// The border sizes in use. All zero while fullscreen.
    pub fn border(&self) -> BorderSize {
        self.border
    }

    /// The size of the decoration surface.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The current layout.
    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    /// The current layout, mutably, e.g. to clear button damage.
    pub fn layout_mut(&mut self) -> &mut LayoutState {
        &mut self.layout
    }

    /// The input state.
    pub fn interaction(&self) -> &InteractionState<S> {
        &self.interaction
    }

    /// Whether the window is fullscreen.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Resizes the decoration surface and lays it out again.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.relayout();
    }

    /// Sets the measured title and lays the decoration out again.
    pub fn set_title(&mut self, title: TitleMetrics) {
        self.title = title;
        self.relayout();
    }

    /// Fits a title of size `measured` into the theme's maximum title
    /// size, cutting it short with an ellipsis of size `dots` if needed.
    pub fn fit_title(&mut self, measured: Size, dots: Size) {
        let title = TitleMetrics::fit(measured, dots, self.config.max_title_size());
        self.set_title(title);
    }

    /// Swaps in a new theme.
    ///
    /// The new theme is checked first; if it is rejected, the old one
    /// stays in use.
    #[instrument(level = "debug", skip_all)]
    pub fn reconfigure(&mut self, config: C) -> Result<()> {
        config.validate()?;
        self.config = config;
        if !self.fullscreen {
            self.border = self.config.border();
        }
        self.relayout();
        Ok(())
    }

    /// Hides or restores the frame for a fullscreen window.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        if self.fullscreen == fullscreen {
            return;
        }

        info!("fullscreen: {}", fullscreen);
        self.fullscreen = fullscreen;
        if fullscreen {
            self.interaction.handle_focus_lost(&mut self.layout);
            self.interaction.cancel_timers();
            self.border = BorderSize::zeroed();
        } else {
            self.border = self.config.border();
        }
        self.relayout();
    }

    /// Sets whether the window is active, for the buttons to draw.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.layout.for_each_button(|b| b.set_active(active));
    }

    /// Sets whether the window is maximized, for the buttons to draw.
    pub fn set_maximized(&mut self, maximized: bool) {
        self.maximized = maximized;
        self.layout.for_each_button(|b| b.set_maximized(maximized));
    }

    /// The rounded corners to draw. None while fullscreen.
    pub fn corners(&self) -> RoundedCorners {
        if self.fullscreen {
            RoundedCorners::empty()
        } else {
            self.config.rounded_corners()
        }
    }

    /// The region of the surface that belongs to the decoration.
    pub fn region(&self) -> Region {
        self.layout.calculate_region()
    }

    /// Whether input at `(x, y)` lands on the decoration.
    pub fn accepts_input(&self, x: i32, y: i32) -> bool {
        self.layout
            .interactive_areas()
            .iter()
            .map(|a| a.geometry())
            .chain(self.layout.background_areas().iter().map(|a| a.geometry()))
            .any(|r| r.contains_point(Point::new(x, y)))
    }

    /// The geometry of the whole frame around a window of geometry `content`.
    pub fn expand_geometry(&self, content: Rectangle) -> Rectangle {
        self.border.expand(content)
    }

    /// The window size that makes the whole frame `target` large.
    pub fn content_size(&self, target: Size) -> Size {
        self.border.shrink_size(target)
    }

    /// Feeds an input event to the state machine.
    pub fn handle_event(&mut self, event: InputEvent) -> ActionResponse {
        let (layout, state) = (&mut self.layout, &mut self.interaction);

        let response = match event {
            InputEvent::PointerEnter { x, y } => {
                state.handle_motion(layout, Point::new(x, y));
                ActionResponse::none()
            }
            InputEvent::PointerLeave => {
                state.handle_focus_lost(layout);
                ActionResponse::none()
            }
            InputEvent::PointerMotion { x, y } | InputEvent::TouchMotion { x, y } => {
                state.handle_motion(layout, Point::new(x, y))
            }
            InputEvent::PointerButton { pressed: true } => state.handle_press(layout),
            InputEvent::PointerButton { pressed: false } => state.handle_release(layout),
            InputEvent::TouchDown { x, y } => {
                state.handle_motion(layout, Point::new(x, y));
                state.handle_press(layout)
            }
            InputEvent::TouchUp => {
                let response = state.handle_release(layout);
                state.handle_focus_lost(layout);
                response
            }
        };

        if !response.is_none() {
            debug!("{:?} -> {:?}", event, response);
        }
        response
    }

    fn relayout(&mut self) {
        if self.fullscreen {
            self.layout.clear();
            return;
        }

        self.layout.rebuild(&self.config, self.border, self.size, self.title);

        let (active, maximized) = (self.active, self.maximized);
        self.layout.for_each_button(|b| {
            b.set_active(active);
            b.set_maximized(maximized);
        });
    }
}

impl<C: DecorationConfig, S: Scheduler> Drop for Decoration<C, S> {
    fn drop(&mut self) {
        self.interaction.cancel_timers();
    }
}
