//! Time sources for the debounce timer.
//!
//! The view-model never reads the wall clock directly. Production code uses
//! [`SystemClock`]; tests drive a [`ManualClock`] forward explicitly so that
//! debounce windows elapse deterministically.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
	fn now(&self) -> Instant;
}

/// Reads [`Instant::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Instant {
		Instant::now()
	}
}

/// Virtual clock that only moves when [`ManualClock::advance`] is called.
///
/// Clones share the same timeline, so a test can keep one handle while the
/// view-model owns another.
#[derive(Clone, Debug)]
pub struct ManualClock {
	origin: Instant,
	elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
	#[must_use]
	pub fn new() -> Self {
		Self {
			origin: Instant::now(),
			elapsed: Rc::new(Cell::new(Duration::ZERO)),
		}
	}

	/// Move the clock forward by `by`.
	pub fn advance(&self, by: Duration) {
		self.elapsed.set(self.elapsed.get() + by);
	}

	/// Move the clock forward by `millis` milliseconds.
	pub fn advance_ms(&self, millis: u64) {
		self.advance(Duration::from_millis(millis));
	}

	/// Total time advanced since the clock was created.
	#[must_use]
	pub fn elapsed(&self) -> Duration {
		self.elapsed.get()
	}
}

impl Default for ManualClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Instant {
		self.origin + self.elapsed.get()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clones_share_the_timeline() {
		let clock = ManualClock::new();
		let handle = clock.clone();
		let start = clock.now();

		handle.advance_ms(250);

		assert_eq!(clock.now() - start, Duration::from_millis(250));
		assert_eq!(clock.elapsed(), Duration::from_millis(250));
	}
}
