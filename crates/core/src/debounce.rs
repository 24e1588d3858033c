//! Trailing-edge debounce with an explicit, pollable timer.
//!
//! A [`Debouncer`] holds at most one pending value. Scheduling a new value
//! replaces the pending one and restarts the window from the time of the new
//! call, so only the last value of a burst is ever released. Nothing runs on
//! its own: the owner polls [`Debouncer::take_due`] from its event loop.

use std::time::{Duration, Instant};

use tracing::trace;

#[derive(Debug)]
struct Pending<T> {
	value: T,
	deadline: Instant,
}

/// Cancellable single-slot timer.
#[derive(Debug)]
pub struct Debouncer<T> {
	window: Duration,
	pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
	#[must_use]
	pub fn new(window: Duration) -> Self {
		Self {
			window,
			pending: None,
		}
	}

	#[must_use]
	pub fn window(&self) -> Duration {
		self.window
	}

	/// Arm the timer with `value`, superseding any pending value.
	pub fn schedule(&mut self, value: T, now: Instant) {
		if self.pending.is_some() {
			trace!("superseding pending debounced call");
		}
		self.pending = Some(Pending {
			value,
			deadline: now + self.window,
		});
	}

	/// Release the pending value once its deadline has been reached.
	pub fn take_due(&mut self, now: Instant) -> Option<T> {
		match &self.pending {
			Some(pending) if now >= pending.deadline => {
				self.pending.take().map(|pending| pending.value)
			}
			_ => None,
		}
	}

	/// Drop the pending value, if any. Returns whether one was dropped.
	pub fn cancel(&mut self) -> bool {
		self.pending.take().is_some()
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// When the pending value becomes due.
	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const WINDOW: Duration = Duration::from_millis(1000);

	#[test]
	fn releases_after_the_window() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(WINDOW);
		debouncer.schedule("a", start);

		assert_eq!(debouncer.take_due(start + Duration::from_millis(999)), None);
		assert_eq!(debouncer.take_due(start + WINDOW), Some("a"));
		assert!(!debouncer.is_pending());
		assert_eq!(debouncer.take_due(start + WINDOW * 2), None);
	}

	#[test]
	fn rescheduling_restarts_the_window() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(WINDOW);
		debouncer.schedule("a", start);
		debouncer.schedule("ab", start + Duration::from_millis(600));

		assert_eq!(debouncer.take_due(start + WINDOW), None);
		assert_eq!(
			debouncer.deadline(),
			Some(start + Duration::from_millis(1600))
		);
		assert_eq!(
			debouncer.take_due(start + Duration::from_millis(1600)),
			Some("ab")
		);
	}

	#[test]
	fn cancel_discards_the_pending_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(WINDOW);
		assert!(!debouncer.cancel());

		debouncer.schedule(1, start);
		assert!(debouncer.cancel());
		assert_eq!(debouncer.deadline(), None);
		assert_eq!(debouncer.take_due(start + WINDOW), None);
	}
}
