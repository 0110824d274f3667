//! Dense record timeline construction.
//!
//! Builds one `Record` per whole second of a workout and merges the
//! irregular sample series into their second buckets. The timeline is an
//! arena indexed by `(second - start_second)`, so a lookup by second is
//! plain index arithmetic.

use crate::timeline::types::{Record, StoppedInterval};
use crate::workout::{LocationSample, Quantity, Sport};
use chrono::{DateTime, Utc};

/// Sample series merged into the dense timeline.
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    /// GPS fixes
    pub locations: Vec<LocationSample>,
    /// Heart rate samples in bpm
    pub heart_rate: Vec<Quantity>,
    /// Cadence samples in rpm
    pub cadence: Vec<Quantity>,
    /// Pace samples in seconds per meter
    pub pace: Vec<Quantity>,
    /// Ambient temperature samples in degrees Celsius
    pub temperature: Vec<Quantity>,
}

/// Build the dense per-second record timeline for a workout.
///
/// Produces one record per whole second from `floor(start)` to `floor(end)`
/// inclusive. Seconds inside a stopped interval are flagged inactive.
/// Location and temperature samples merge last-wins; heart rate, cadence and
/// pace take the maximum of all samples landing in a second, so a
/// whole-second bucket keeps its spike.
///
/// Samples timestamped outside the workout window are ignored.
///
/// # Panics
///
/// Panics when `end` precedes `start`: a negative duration is an upstream
/// data-integrity violation, not a recoverable condition.
pub fn build_records(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    stopped: &[StoppedInterval],
    samples: &SampleSet,
) -> Vec<Record> {
    assert!(end >= start, "workout end precedes start");

    let start_second = start.timestamp();
    let end_second = end.timestamp();
    let count = (end_second - start_second + 1) as usize;

    // Whole-second base; the fallback is unreachable for any timestamp that
    // round-trips through `timestamp()`.
    let base = DateTime::<Utc>::from_timestamp(start_second, 0).unwrap_or(start);

    let mut records = Vec::with_capacity(count);
    for offset in 0..count {
        let timestamp = base + chrono::Duration::seconds(offset as i64);
        let mut record = Record::new(timestamp);
        record.is_active = !stopped.iter().any(|interval| interval.contains(timestamp));
        records.push(record);
    }

    let index_of = |at: DateTime<Utc>| -> Option<usize> {
        let offset = at.timestamp() - start_second;
        if offset < 0 || offset as usize >= count {
            None
        } else {
            Some(offset as usize)
        }
    };

    for location in &samples.locations {
        if let Some(i) = index_of(location.timestamp) {
            let record = &mut records[i];
            record.is_location = true;
            record.latitude = location.latitude;
            record.longitude = location.longitude;
            record.altitude = location.altitude;
            record.speed = location.speed;
        }
    }

    for sample in &samples.heart_rate {
        if let Some(i) = index_of(sample.start) {
            records[i].heart_rate = records[i].heart_rate.max(sample.value);
        }
    }

    for sample in &samples.cadence {
        if let Some(i) = index_of(sample.start) {
            records[i].cadence = records[i].cadence.max(sample.value);
        }
    }

    for sample in &samples.pace {
        if let Some(i) = index_of(sample.start) {
            records[i].pace = records[i].pace.max(sample.value);
        }
    }

    for sample in &samples.temperature {
        if let Some(i) = index_of(sample.start) {
            records[i].temperature = sample.value;
        }
    }

    records
}

/// Movement-filtered view of a record timeline.
pub fn moving_records(records: &[Record], sport: Sport) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.is_moving(sport))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap() + chrono::Duration::seconds(second as i64)
    }

    fn hr(second: u32, bpm: f64) -> Quantity {
        Quantity::instant(at(second), bpm)
    }

    #[test]
    fn test_one_record_per_second_inclusive() {
        let records = build_records(at(0), at(100), &[], &SampleSet::default());
        assert_eq!(records.len(), 101);
        assert_eq!(records[0].timestamp, at(0));
        assert_eq!(records[100].timestamp, at(100));
    }

    #[test]
    fn test_zero_duration_workout() {
        let records = build_records(at(0), at(0), &[], &SampleSet::default());
        assert_eq!(records.len(), 1);
    }

    #[test]
    #[should_panic(expected = "workout end precedes start")]
    fn test_negative_duration_panics() {
        build_records(at(10), at(0), &[], &SampleSet::default());
    }

    #[test]
    fn test_active_flag_around_stopped_interval() {
        let stopped = vec![StoppedInterval { start: at(40), end: at(60) }];
        let records = build_records(at(0), at(100), &stopped, &SampleSet::default());

        assert!(records[30].is_active);
        assert!(!records[45].is_active);
        assert!(records[70].is_active);

        // Boundary seconds: pause second is stopped, resume second is active
        assert!(!records[40].is_active);
        assert!(records[60].is_active);
    }

    #[test]
    fn test_heart_rate_bucket_takes_maximum() {
        let samples = SampleSet {
            heart_rate: vec![hr(5, 140.0), hr(5, 152.0), hr(5, 148.0)],
            ..Default::default()
        };

        let records = build_records(at(0), at(10), &[], &samples);
        assert_eq!(records[5].heart_rate, 152.0);
    }

    #[test]
    fn test_location_bucket_is_last_wins() {
        let fix = |second: u32, speed: f64| LocationSample {
            timestamp: at(second),
            latitude: 45.0,
            longitude: -122.0,
            altitude: 120.0,
            speed,
        };
        let samples = SampleSet {
            locations: vec![fix(5, 2.0), fix(5, 3.5)],
            ..Default::default()
        };

        let records = build_records(at(0), at(10), &[], &samples);
        assert!(records[5].is_location);
        assert_eq!(records[5].speed, 3.5);
        assert!(!records[4].is_location);
    }

    #[test]
    fn test_temperature_bucket_is_last_wins() {
        let samples = SampleSet {
            temperature: vec![
                Quantity::instant(at(3), 18.5),
                Quantity::instant(at(3), 19.0),
            ],
            ..Default::default()
        };

        let records = build_records(at(0), at(10), &[], &samples);
        assert_eq!(records[3].temperature, 19.0);
    }

    #[test]
    fn test_out_of_window_samples_are_ignored() {
        let samples = SampleSet {
            heart_rate: vec![hr(500, 190.0)],
            ..Default::default()
        };

        let records = build_records(at(0), at(10), &[], &samples);
        assert!(records.iter().all(|r| r.heart_rate == 0.0));
    }

    #[test]
    fn test_subsecond_timestamps_floor_to_their_bucket() {
        let inside = at(5) + chrono::Duration::milliseconds(750);
        let samples = SampleSet {
            heart_rate: vec![Quantity::instant(inside, 141.0)],
            ..Default::default()
        };

        let records = build_records(at(0), at(10), &[], &samples);
        assert_eq!(records[5].heart_rate, 141.0);
    }

    #[test]
    fn test_moving_records_filters_by_sport() {
        let fix = |second: u32, speed: f64| LocationSample {
            timestamp: at(second),
            latitude: 45.0,
            longitude: -122.0,
            altitude: 120.0,
            speed,
        };
        let samples = SampleSet {
            locations: vec![fix(1, 0.0), fix(2, 3.0)],
            ..Default::default()
        };
        let stopped = vec![StoppedInterval { start: at(4), end: at(6) }];
        let records = build_records(at(0), at(10), &stopped, &samples);

        // Speed-capable: only the second with nonzero speed moves
        assert_eq!(moving_records(&records, Sport::Run).len(), 1);
        // Non-speed sport: every active second moves
        assert_eq!(moving_records(&records, Sport::Swim).len(), 9);
    }
}
