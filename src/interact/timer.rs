//! One-shot timers for telling a double click from two single clicks.
//!
//! Timers go through the [`Scheduler`] trait so that the state machine
//! can run on any single-threaded event loop. [`CalloopScheduler`] is the
//! real thing; [`ManualScheduler`] runs on a virtual clock that only moves
//! when told to.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use calloop::timer::{TimeoutAction, Timer};
use calloop::{LoopHandle, RegistrationToken};
use custom_debug_derive::Debug;
use tracing::{debug, trace};

use crate::{DecorError, Result};

/// The callback run when a timer expires.
pub type TimerCallback = Box<dyn FnOnce()>;

/// Something that can run a callback once after a delay.
///
/// Callbacks run on the same thread as everything else, from the host's
/// event loop. A cancelled timer never runs its callback.
pub trait Scheduler {
    /// Identifies an armed timer.
    type Token: fmt::Debug;

    /// Arms a timer that runs `callback` once `delay` has passed.
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Result<Self::Token>;

    /// Disarms a timer. Cancelling a timer that already fired does nothing.
    fn cancel(&self, token: Self::Token);
}

/// A [`Scheduler`] running timers on a `calloop` event loop.
#[derive(Debug)]
pub struct CalloopScheduler<'l, D> {
    #[debug(skip)]
    handle: LoopHandle<'l, D>,
}

impl<'l, D> CalloopScheduler<'l, D> {
    /// Creates a scheduler inserting its timers into the loop behind `handle`.
    pub fn new(handle: LoopHandle<'l, D>) -> Self {
        Self { handle }
    }
}

impl<'l, D> Scheduler for CalloopScheduler<'l, D> {
    type Token = RegistrationToken;

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Result<RegistrationToken> {
        let mut callback = Some(callback);

        self.handle
            .insert_source(Timer::from_duration(delay), move |_, _, _| {
                if let Some(cb) = callback.take() {
                    cb();
                }
                TimeoutAction::Drop
            })
            .map_err(|e| DecorError::Scheduler(e.error.to_string()))
    }

    fn cancel(&self, token: RegistrationToken) {
        self.handle.remove(token);
    }
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_id: u64,
    // keyed by (deadline, id) so that equal deadlines fire in arming order
    pending: BTreeMap<(Duration, u64), TimerCallback>,
}

/// A [`Scheduler`] with a virtual clock.
///
/// Time stands still until [`advance`](ManualScheduler::advance) is called.
/// Clones share the same clock, so a host can keep one to drive the
/// timers of a scheduler it handed away.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &inner.now)
            .field("pending", &inner.pending.len())
            .finish()
    }
}

/// The token of a [`ManualScheduler`] timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManualToken {
    deadline: Duration,
    id: u64,
}

impl ManualScheduler {
    /// Creates a new scheduler at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The time on the virtual clock.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// The number of armed timers.
    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Moves the clock forward by `by`, running every timer that expires
    /// on the way, in deadline order.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now + by;

        loop {
            // the borrow must end before the callback runs, as it may arm
            // another timer
            let next = {
                let mut inner = self.inner.borrow_mut();
                match inner.pending.keys().next().copied() {
                    Some(key) if key.0 <= target => {
                        inner.now = key.0;
                        inner.pending.remove(&key)
                    }
                    _ => None,
                }
            };

            match next {
                Some(cb) => cb(),
                None => break,
            }
        }

        self.inner.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Token = ManualToken;

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Result<ManualToken> {
        let mut inner = self.inner.borrow_mut();
        let token = ManualToken {
            deadline: inner.now + delay,
            id: inner.next_id,
        };
        inner.next_id += 1;
        inner.pending.insert((token.deadline, token.id), callback);

        Ok(token)
    }

    fn cancel(&self, token: ManualToken) {
        self.inner
            .borrow_mut()
            .pending
            .remove(&(token.deadline, token.id));
    }
}

/// The double-click window.
pub const DOUBLE_CLICK_TIMEOUT: Duration = Duration::from_millis(300);

/// A timer that remembers whether it is still running.
#[derive(Debug)]
pub struct DebounceTimer<T> {
    pending: Rc<Cell<bool>>,
    token: Option<T>,
}

impl<T> Default for DebounceTimer<T> {
    fn default() -> Self {
        Self {
            pending: Rc::new(Cell::new(false)),
            token: None,
        }
    }
}

impl<T: fmt::Debug> DebounceTimer<T> {
    /// Creates a disarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the timer is armed and has not expired yet.
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// (Re)arms the timer to expire after `delay`.
    pub fn arm<S>(&mut self, scheduler: &S, delay: Duration) -> Result<()>
    where
        S: Scheduler<Token = T>,
    {
        self.disarm(scheduler);

        let flag = Rc::clone(&self.pending);
        let token = scheduler.schedule(delay, Box::new(move || {
            trace!("debounce timer expired");
            flag.set(false);
        }))?;

        self.pending.set(true);
        self.token = Some(token);
        Ok(())
    }

    /// Disarms the timer if it is running.
    pub fn disarm<S>(&mut self, scheduler: &S)
    where
        S: Scheduler<Token = T>,
    {
        let token = self.token.take();
        if self.pending.replace(false) {
            if let Some(token) = token {
                debug!("cancelling debounce timer {:?}", token);
                scheduler.cancel(token);
            }
        }
    }
}
