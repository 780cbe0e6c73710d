//! Scroll settle gate.
//!
//! Scroll events arrive as a dense burst while the user drags. Only the
//! resting position is worth recording: a scroll report is emitted once the
//! stream has been quiet for a short settle window, and bursts cannot emit
//! more often than the gap floor.

use chrono::{DateTime, Duration, Utc};

/// Quiet period after the last movement before a report may fire.
const SETTLE_MS: i64 = 50;
/// Minimum spacing between two emitted scroll reports.
const MIN_GAP_MS: i64 = 100;

#[derive(Clone, Debug, Default)]
pub struct ScrollGate {
    last_activity: Option<DateTime<Utc>>,
    last_emit: Option<DateTime<Utc>>,
}

impl ScrollGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note raw scroll movement at `now`.
    pub fn record_activity(&mut self, now: DateTime<Utc>) {
        self.last_activity = Some(now);
    }

    /// Whether a settled scroll should be reported at `now`. Consumes the
    /// pending activity when it fires.
    pub fn should_emit(&mut self, now: DateTime<Utc>) -> bool {
        let Some(activity) = self.last_activity else {
            return false;
        };
        if now - activity < Duration::milliseconds(SETTLE_MS) {
            return false;
        }
        if let Some(emit) = self.last_emit {
            if now - emit <= Duration::milliseconds(MIN_GAP_MS) {
                // Still inside the gap floor; drop this burst entirely.
                self.last_activity = None;
                return false;
            }
        }
        self.last_activity = None;
        self.last_emit = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(ms)
    }

    #[test]
    fn emits_only_after_settle_window() {
        let mut gate = ScrollGate::new();
        gate.record_activity(at(0));
        assert!(!gate.should_emit(at(20)));
        assert!(gate.should_emit(at(60)));
        // Consumed; nothing further pending.
        assert!(!gate.should_emit(at(200)));
    }

    #[test]
    fn gap_floor_suppresses_rapid_reports() {
        let mut gate = ScrollGate::new();
        gate.record_activity(at(0));
        assert!(gate.should_emit(at(60)));
        gate.record_activity(at(80));
        assert!(!gate.should_emit(at(140)));
        gate.record_activity(at(300));
        assert!(gate.should_emit(at(400)));
    }
}
