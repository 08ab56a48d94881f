//! Time source used to pace animations.
//!
//! Animations never sleep on their own: every pause goes through a
//! [`Clock`], so the same routines run against the hardware timer on the
//! device and against virtual time in tests.

use embassy_time::{Duration, Instant};

/// Blocking time source
pub trait Clock {
    /// Current instant
    fn now(&self) -> Instant;

    /// Block until `duration` has elapsed
    fn delay(&mut self, duration: Duration);
}

/// Clock backed by the global `embassy-time` driver.
///
/// Delays busy-wait on the driver tick, which keeps the LED state committed
/// for the whole pause.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn delay(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn delay(&mut self, duration: Duration) {
        (**self).delay(duration);
    }
}
