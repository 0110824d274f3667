//! Positional linear resampling onto an even grid.

/// Resample an ordered value sequence at a fixed positional interval.
///
/// `interval` is expressed in source samples per output sample: an interval
/// of `2.0` halves the series, `1.0` returns it unchanged. Output values are
/// linearly interpolated between the two nearest positional neighbors and
/// the output length is `ceil(len / interval)`.
///
/// An empty input yields an empty output. `interval` must be positive; every
/// caller derives it from a nonzero series length and point count.
pub fn resample(points: &[f64], interval: f64) -> Vec<f64> {
    debug_assert!(interval > 0.0, "resample interval must be positive");

    let n = points.len();
    if n == 0 {
        return Vec::new();
    }

    // Tolerate float dust in the division so an exact ratio stays exact.
    let exact = n as f64 / interval;
    let count = if (exact - exact.round()).abs() < 1e-9 {
        exact.round() as usize
    } else {
        exact.ceil() as usize
    };

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let position = i as f64 * interval;
        let lower = position.floor() as usize;
        if lower >= n - 1 {
            out.push(points[n - 1]);
            continue;
        }
        let fraction = position - lower as f64;
        out.push(points[lower] + (points[lower + 1] - points[lower]) * fraction);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(resample(&[], 2.0).is_empty());
    }

    #[test]
    fn test_single_sample() {
        assert_eq!(resample(&[7.0], 1.0), vec![7.0]);
        assert_eq!(resample(&[7.0], 0.5), vec![7.0, 7.0]);
    }

    #[test]
    fn test_unit_interval_is_identity() {
        let points: Vec<f64> = (0..10).map(|i| i as f64 * 1.5).collect();
        assert_eq!(resample(&points, 1.0), points);
    }

    #[test]
    fn test_output_length_matches_ceil() {
        for len in [1usize, 10, 1000] {
            let points: Vec<f64> = (0..len).map(|i| i as f64).collect();
            for interval in [0.5, 1.0, 2.0, 3.3] {
                let expected = (len as f64 / interval).ceil() as usize;
                assert_eq!(resample(&points, interval).len(), expected, "len={len} interval={interval}");
            }
        }
    }

    #[test]
    fn test_linear_interpolation_between_neighbors() {
        let points = vec![0.0, 10.0, 20.0, 30.0];
        let resampled = resample(&points, 1.5);

        // Positions 0.0, 1.5, 3.0 -> values 0, 15, 30
        assert_eq!(resampled, vec![0.0, 15.0, 30.0]);
    }

    #[test]
    fn test_downsampling_long_series() {
        let points: Vec<f64> = (0..3601).map(|i| i as f64).collect();
        let interval = points.len() as f64 / 500.0;
        let resampled = resample(&points, interval);

        assert_eq!(resampled.len(), 500);
        // Values stay monotone under linear interpolation of a monotone series
        assert!(resampled.windows(2).all(|w| w[0] <= w[1]));
    }
}
