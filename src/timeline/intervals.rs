//! Stopped-interval reconstruction from the raw event stream.

use crate::timeline::types::StoppedInterval;
use crate::workout::{EventKind, WorkoutEvent};

/// Reconstruct the paused time ranges of a workout from its event stream.
///
/// Events arrive in no particular order; they are sorted by timestamp and
/// scanned once with at most one pending pause. Consecutive pause events
/// collapse to the first, a resume without a pending pause is ignored, and a
/// trailing unmatched pause produces no interval: the recorded end of the
/// workout never doubles as an implicit resume.
///
/// The result is sorted by start time and non-overlapping.
pub fn stopped_intervals(events: &[WorkoutEvent]) -> Vec<StoppedInterval> {
    let mut sorted: Vec<&WorkoutEvent> = events.iter().collect();
    sorted.sort_by_key(|event| event.timestamp);

    let mut intervals = Vec::new();
    let mut pending_pause: Option<chrono::DateTime<chrono::Utc>> = None;

    for event in sorted {
        match event.kind {
            EventKind::Pause => {
                if pending_pause.is_none() {
                    pending_pause = Some(event.timestamp);
                }
            }
            EventKind::Resume => {
                if let Some(start) = pending_pause.take() {
                    intervals.push(StoppedInterval {
                        start,
                        end: event.timestamp,
                    });
                }
            }
            _ => {}
        }
    }

    intervals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap() + chrono::Duration::seconds(second as i64)
    }

    fn event(second: u32, kind: EventKind) -> WorkoutEvent {
        WorkoutEvent::new(at(second), kind)
    }

    #[test]
    fn test_duplicate_pauses_collapse_to_first() {
        let events = vec![
            event(10, EventKind::Pause),
            event(20, EventKind::Resume),
            event(30, EventKind::Pause),
            event(35, EventKind::Pause),
            event(40, EventKind::Resume),
        ];

        let intervals = stopped_intervals(&events);
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0], StoppedInterval { start: at(10), end: at(20) });
        assert_eq!(intervals[1], StoppedInterval { start: at(30), end: at(40) });
    }

    #[test]
    fn test_unordered_events_are_sorted() {
        let events = vec![
            event(40, EventKind::Resume),
            event(10, EventKind::Pause),
            event(30, EventKind::Pause),
            event(20, EventKind::Resume),
        ];

        let intervals = stopped_intervals(&events);
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0], StoppedInterval { start: at(10), end: at(20) });
        assert_eq!(intervals[1], StoppedInterval { start: at(30), end: at(40) });
    }

    #[test]
    fn test_trailing_pause_is_dropped() {
        let events = vec![
            event(10, EventKind::Pause),
            event(20, EventKind::Resume),
            event(50, EventKind::Pause),
        ];

        let intervals = stopped_intervals(&events);
        assert_eq!(intervals, vec![StoppedInterval { start: at(10), end: at(20) }]);
    }

    #[test]
    fn test_resume_without_pause_is_ignored() {
        let events = vec![
            event(5, EventKind::Resume),
            event(10, EventKind::Pause),
            event(20, EventKind::Resume),
        ];

        let intervals = stopped_intervals(&events);
        assert_eq!(intervals, vec![StoppedInterval { start: at(10), end: at(20) }]);
    }

    #[test]
    fn test_other_event_kinds_are_ignored() {
        let events = vec![
            event(10, EventKind::Pause),
            event(15, EventKind::Lap),
            event(18, EventKind::Marker),
            event(20, EventKind::Resume),
        ];

        let intervals = stopped_intervals(&events);
        assert_eq!(intervals.len(), 1);
    }

    #[test]
    fn test_empty_stream() {
        assert!(stopped_intervals(&[]).is_empty());
    }
}
