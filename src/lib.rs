//! # Firedecor - server-side window decorations
//!
//! Firedecor draws the frame around application windows on a Wayland
//! compositor: borders, a title, the application icon, and the close,
//! maximize and minimize buttons. This crate holds the part of that job
//! that is independent of any particular compositor or renderer: working
//! out *where* everything goes, and *what* a click or a drag on the frame
//! means.
//!
//! ## Design
//!
//! The crate is split into two halves that meet at [`LayoutState`]:
//!
//! - The [`layout`] module reads a textual layout descriptor and a border
//!   size descriptor from a [`DecorationConfig`], and turns them into an
//!   ordered list of interactive areas (title, icon, buttons, move and
//!   resize grips) plus a list of paint-only background and accent spans.
//! - The [`interact`] module runs a small state machine over pointer and
//!   touch events, hit-tests them against the `LayoutState`, and answers
//!   with an [`ActionResponse`] telling the window manager whether to move,
//!   resize, close, maximize or minimize the window.
//!
//! The [`Decoration`] type ties both halves together for a single window
//! and is what a compositor would normally hold on to.
//!
//! ### Rendering and the Window Manager
//!
//! Firedecor never draws anything and never touches a window. A renderer
//! walks [`LayoutState::renderable_areas`] and
//! [`LayoutState::background_areas`] to paint the frame, and the window
//! manager executes the returned `ActionResponse`. Text measurement is
//! likewise left to the host, which supplies [`TitleMetrics`].
//!
//! ### Event Loops
//!
//! Everything here runs on the compositor's single event thread. The only
//! deferred work, the double-click timeout, goes through the [`Scheduler`]
//! trait, which [`CalloopScheduler`] implements on top of a `calloop`
//! event loop.
//!
//! ## Layout Descriptors
//!
//! A layout looks like this:
//!
//! ```text
//! a | icon P7 title | minimize p maximize p close a - a | | a - a | | a - a | | a
//! ```
//!
//! The four `-`-separated segments describe the top, left, bottom and right
//! edges, and each segment is split by `|` into a left, center and right
//! group. See the [`layout`] module documentation for the full grammar.

#![warn(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs
)]

pub mod border;
pub mod button;
pub mod config;
pub mod decoration;
pub mod interact;
pub mod layout;
pub mod types;

#[doc(inline)]
pub use crate::border::{parse_border, BorderSize};
#[doc(inline)]
pub use crate::config::{DecorationConfig, ThemeConfig};
#[doc(inline)]
pub use crate::decoration::{Decoration, InputEvent};
#[doc(inline)]
pub use crate::interact::{
    timer::{CalloopScheduler, ManualScheduler, Scheduler},
    ActionResponse, DecorationAction, InteractionState,
};
#[doc(inline)]
pub use crate::layout::{LayoutState, TitleMetrics};

use thiserror::Error;

/// Everything that could possibly go wrong while building a decoration.
///
/// None of these are fatal: a bad theme should degrade the visuals of a
/// window, never its management. The lenient entry points (such as
/// [`parse_border`]) log these and fall back to a documented default.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecorError {
    /// A border size descriptor could not be parsed.
    #[error("invalid border size `{0}`")]
    InvalidBorder(String),

    /// A token in a layout descriptor could not be understood.
    #[error("invalid layout token `{0}`")]
    InvalidLayoutToken(String),

    /// One or more configuration invariants was not upheld.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The scheduler could not arm a timer.
    #[error("could not schedule timer: {0}")]
    Scheduler(String),
}

/// The general result type used by firedecor.
pub type Result<T> = ::core::result::Result<T, DecorError>;
