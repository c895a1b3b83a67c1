use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

/// Source of the current wall-clock time so tests can control it.
/// The default source follows the system clock; [`TimeSource::test`] creates
/// one that stands still until advanced explicitly.
#[derive(Clone, Default)]
pub struct TimeSource {
	test_time: Option<Arc<parking_lot::Mutex<DateTime<Utc>>>>,
}

impl TimeSource {
	pub fn test() -> Self {
		Self {
			test_time: Some(Arc::new(parking_lot::Mutex::new(DateTime::<Utc>::UNIX_EPOCH))),
		}
	}

	pub fn now(&self) -> DateTime<Utc> {
		match &self.test_time {
			None => Utc::now(),
			Some(test_time) => *test_time.lock(),
		}
	}

	pub fn advance_time(&self, by_duration: Duration) {
		let test_time = self.test_time.as_ref().expect("Can only be called in test mode.");
		*test_time.lock() += by_duration;
	}
}
