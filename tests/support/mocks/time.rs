// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use craftstore::application::ports::time::Clock;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Starts at a fixed instant and moves one second forward per reading, so records
/// created one after another get distinct, ordered timestamps.
#[derive(Default)]
pub struct FixedClock {
    ticks: AtomicI64,
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}
