//! Where “now” and the local time zone come from.
//!
//! Everything that reads the current time or converts to local time goes
//! through a `Clock`. The system clock is used unless a different one has
//! been installed for the current thread with `with_clock`, which is how
//! tests pin `is_today` and friends to a fixed instant.
//!
//! The override is per-thread. Other threads, including any spawned from
//! inside the closure given to `with_clock`, keep reading the system clock
//! unless they install a clock of their own. A `Clock` only needs to be
//! usable from the thread that installed it, so it doesn’t have to be
//! `Send` or `Sync`.
//!
//! ```
//! use calpoint::clock::{with_clock, FixedClock};
//! use calpoint::{Instant, PointInTime};
//!
//! let pinned = FixedClock::new(Instant::at(1_744_120_325), 0);
//! let now = with_clock(pinned, PointInTime::now);
//! assert_eq!(now.epoch_milliseconds(), 1_744_120_325_000);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::instant::Instant;
use crate::system::sys_local_offset;


/// A source of the current instant and of the local time zone’s offset.
pub trait Clock {

    /// The current instant.
    fn now(&self) -> Instant;

    /// The local zone’s offset from UTC, in seconds east, at the given
    /// instant.
    fn local_offset(&self, at: Instant) -> i32;
}

/// The operating system’s clock and time zone.
#[derive(PartialEq, Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn local_offset(&self, at: Instant) -> i32 {
        sys_local_offset(at.seconds())
    }
}

/// A clock that is stopped at one instant, in a zone with a fixed offset.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct FixedClock {
    now: Instant,
    offset_seconds: i32,
}

impl FixedClock {

    /// A clock reading `now`, with local time `offset_seconds` east of UTC.
    pub fn new(now: Instant, offset_seconds: i32) -> Self {
        Self { now, offset_seconds }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.now
    }

    fn local_offset(&self, _at: Instant) -> i32 {
        self.offset_seconds
    }
}


thread_local! {
    static OVERRIDE: RefCell<Option<Rc<dyn Clock>>> = RefCell::new(None);
}

/// Runs `f` with `clock` standing in for the system clock on this thread,
/// putting the previous clock back afterwards, even if `f` panics. Threads
/// spawned by `f` do not see it.
pub fn with_clock<C, F, R>(clock: C, f: F) -> R
where C: Clock + 'static,
      F: FnOnce() -> R,
{
    let previous = OVERRIDE.with(|o| o.borrow_mut().replace(Rc::new(clock)));
    debug!(nested = previous.is_some(), "clock override installed");

    let _restore = Restore(previous);
    f()
}

struct Restore(Option<Rc<dyn Clock>>);

impl Drop for Restore {
    fn drop(&mut self) {
        let previous = self.0.take();
        OVERRIDE.with(|o| *o.borrow_mut() = previous);
        debug!("clock override removed");
    }
}

/// Calls `f` with whichever clock is in effect on this thread.
fn with_current<R>(f: impl FnOnce(&dyn Clock) -> R) -> R {
    let installed = OVERRIDE.with(|o| o.borrow().clone());
    match installed {
        Some(clock) => f(&*clock),
        None        => f(&SystemClock),
    }
}

/// The current instant, according to the clock in effect.
pub fn now() -> Instant {
    with_current(|clock| clock.now())
}

/// The local offset at an instant, according to the clock in effect.
pub(crate) fn local_offset(at: Instant) -> i32 {
    with_current(|clock| clock.local_offset(at))
}
