//! Training impulse (TRIMP) from heart rate reserve.
//!
//! Implements the Banister model: every second of the workout contributes
//! `minutes × HRR × 0.64 × e^(k × HRR)` with a gender-specific exponent
//! (1.92 male, 1.67 female), where HRR is the fraction of the range between
//! resting and maximum heart rate a reading represents.

use serde::{Deserialize, Serialize};

/// Gender, used to select the Banister exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Banister exponential factor for males.
const MALE_EXPONENT: f64 = 1.92;
/// Banister exponential factor for females.
const FEMALE_EXPONENT: f64 = 1.67;
const BASE_MULTIPLIER: f64 = 0.64;

/// Computes TRIMP and heart-rate-reserve metrics for one athlete.
///
/// Training load is a capability, not a fallible operation: without a gender
/// or with unusable heart rate bounds the score is reported as zero and the
/// feature should be treated as unavailable.
#[derive(Debug, Clone, Copy)]
pub struct TrainingLoadCalculator {
    max_hr: u16,
    resting_hr: u16,
    gender: Option<Gender>,
}

impl TrainingLoadCalculator {
    /// Create a calculator for one athlete's physiological bounds.
    pub fn new(max_hr: u16, resting_hr: u16, gender: Option<Gender>) -> Self {
        Self {
            max_hr,
            resting_hr,
            gender,
        }
    }

    /// Whether the inputs allow a meaningful score.
    pub fn is_supported(&self) -> bool {
        self.gender.is_some() && self.max_hr > 0 && self.max_hr > self.resting_hr
    }

    /// Fraction of heart rate reserve one reading represents, clamped to
    /// `[0, 1]`.
    pub fn reserve_fraction(&self, heart_rate: f64) -> f64 {
        if self.max_hr <= self.resting_hr {
            return 0.0;
        }
        let reserve = f64::from(self.max_hr - self.resting_hr);
        ((heart_rate - f64::from(self.resting_hr)) / reserve).clamp(0.0, 1.0)
    }

    /// Cumulative TRIMP over a per-second heart rate series.
    ///
    /// The series must already cover the full workout duration; use
    /// [`pad_series`] to fill zero gaps forward first. Returns 0 when the
    /// feature is unsupported.
    pub fn trimp(&self, samples: &[f64]) -> u32 {
        let Some(gender) = self.gender else {
            return 0;
        };
        if !self.is_supported() {
            return 0;
        }

        let exponent = match gender {
            Gender::Male => MALE_EXPONENT,
            Gender::Female => FEMALE_EXPONENT,
        };

        // Each per-second sample stands for 1/60 of a minute.
        let minutes_per_sample = 1.0 / 60.0;
        let total: f64 = samples
            .iter()
            .map(|heart_rate| {
                let fraction = self.reserve_fraction(*heart_rate);
                minutes_per_sample * fraction * BASE_MULTIPLIER * (exponent * fraction).exp()
            })
            .sum();

        total.round() as u32
    }

    /// Percent of heart rate reserve an average heart rate represents
    /// (0-100). Returns 0 when the feature is unsupported.
    pub fn percent_heart_rate_reserve(&self, avg_heart_rate: f64) -> u16 {
        if !self.is_supported() {
            return 0;
        }
        (self.reserve_fraction(avg_heart_rate) * 100.0).round() as u16
    }
}

/// Pad a per-second series out to `duration_seconds`, carrying the last
/// nonzero value forward across zero gaps.
pub fn pad_series(samples: &[f64], duration_seconds: usize) -> Vec<f64> {
    let mut padded = Vec::with_capacity(duration_seconds);
    let mut last = 0.0;
    for i in 0..duration_seconds {
        let value = samples.get(i).copied().unwrap_or(0.0);
        if value > 0.0 {
            last = value;
        }
        padded.push(last);
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_fraction_clamps() {
        let calc = TrainingLoadCalculator::new(190, 60, Some(Gender::Male));

        assert_eq!(calc.reserve_fraction(60.0), 0.0);
        assert_eq!(calc.reserve_fraction(190.0), 1.0);
        assert_eq!(calc.reserve_fraction(40.0), 0.0); // below resting
        assert_eq!(calc.reserve_fraction(250.0), 1.0); // above max
        assert!((calc.reserve_fraction(125.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_trimp_matches_banister_formula() {
        let calc = TrainingLoadCalculator::new(190, 60, Some(Gender::Male));

        // One hour at constant 150 bpm: fraction = 90/130
        let samples = vec![150.0; 3600];
        let fraction: f64 = 90.0 / 130.0;
        let expected = 60.0 * fraction * 0.64 * (1.92 * fraction).exp();

        assert_eq!(calc.trimp(&samples), expected.round() as u32);
    }

    #[test]
    fn test_female_exponent_weights_lower() {
        let male = TrainingLoadCalculator::new(190, 60, Some(Gender::Male));
        let female = TrainingLoadCalculator::new(190, 60, Some(Gender::Female));

        let samples = vec![160.0; 3600];
        assert!(male.trimp(&samples) > female.trimp(&samples));
    }

    #[test]
    fn test_trimp_monotone_in_heart_rate() {
        let calc = TrainingLoadCalculator::new(190, 60, Some(Gender::Male));

        let mut previous = 0;
        for hr in [100.0, 120.0, 140.0, 160.0, 180.0] {
            let samples = vec![hr; 3600];
            let score = calc.trimp(&samples);
            assert!(score > previous, "trimp not increasing at {hr} bpm");
            previous = score;
        }
    }

    #[test]
    fn test_unsupported_inputs_report_zero() {
        // No gender
        let calc = TrainingLoadCalculator::new(190, 60, None);
        assert!(!calc.is_supported());
        assert_eq!(calc.trimp(&[150.0; 600]), 0);
        assert_eq!(calc.percent_heart_rate_reserve(150.0), 0);

        // Inverted bounds
        let calc = TrainingLoadCalculator::new(60, 190, Some(Gender::Male));
        assert!(!calc.is_supported());
        assert_eq!(calc.trimp(&[150.0; 600]), 0);

        // No max heart rate
        let calc = TrainingLoadCalculator::new(0, 0, Some(Gender::Male));
        assert!(!calc.is_supported());
    }

    #[test]
    fn test_percent_heart_rate_reserve() {
        let calc = TrainingLoadCalculator::new(190, 60, Some(Gender::Female));

        assert_eq!(calc.percent_heart_rate_reserve(125.0), 50);
        assert_eq!(calc.percent_heart_rate_reserve(190.0), 100);
        assert_eq!(calc.percent_heart_rate_reserve(50.0), 0);
    }

    #[test]
    fn test_pad_series_fills_zero_gaps_forward() {
        let padded = pad_series(&[0.0, 120.0, 0.0, 0.0, 130.0], 8);
        assert_eq!(padded, vec![0.0, 120.0, 120.0, 120.0, 130.0, 130.0, 130.0, 130.0]);
    }

    #[test]
    fn test_pad_series_truncates_nothing() {
        // A series already at full length passes through with gaps filled
        let padded = pad_series(&[100.0, 0.0, 110.0], 3);
        assert_eq!(padded, vec![100.0, 100.0, 110.0]);
    }
}
