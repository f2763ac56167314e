//! Transcript clock.

use chrono::Utc;

/// Stamps transcript entries with unix milliseconds, strictly increasing within one session.
///
/// Two entries recorded in the same millisecond, or across a wall clock step backwards, still
/// sort in the order they were appended.
#[derive(Debug, Clone, Default)]
pub struct EntryClock {
    last_ms: u64,
}

impl EntryClock {
    /// Stamp for an entry recorded now.
    pub fn stamp(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        self.stamp_at(now)
    }

    /// Stamp for an entry recorded at `now_ms`.
    pub fn stamp_at(&mut self, now_ms: u64) -> u64 {
        let next = if self.last_ms == 0 {
            now_ms
        } else {
            now_ms.max(self.last_ms.saturating_add(1))
        };
        self.last_ms = next;
        next
    }

    /// Most recent stamp handed out, or zero before the first entry.
    pub fn last(&self) -> u64 {
        self.last_ms
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stamps_follow_wall_clock_when_it_advances() {
        let mut clock = EntryClock::default();
        assert_eq!(clock.stamp_at(1_000), 1_000);
        assert_eq!(clock.stamp_at(1_250), 1_250);
        assert_eq!(clock.last(), 1_250);
    }

    #[test]
    fn same_millisecond_and_clock_steps_back_still_increase() {
        let mut clock = EntryClock::default();
        assert_eq!(clock.stamp_at(5_000), 5_000);
        assert_eq!(clock.stamp_at(5_000), 5_001);
        assert_eq!(clock.stamp_at(4_000), 5_002);
    }

    #[test]
    fn live_stamps_strictly_increase() {
        let mut clock = EntryClock::default();
        let first = clock.stamp();
        let second = clock.stamp();
        assert!(first > 0);
        assert!(second > first);
    }
}
