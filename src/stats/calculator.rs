//! Statistics Calculator Module
//!
//! Plain numeric routines used by the chart builders: duration parsing,
//! frequency ranking, histogram binning, kernel density estimation and
//! Pearson correlation.

use std::cmp::Ordering;
use std::collections::HashMap;

use statrs::distribution::{Continuous, Normal};

/// One histogram bin over `[start, end)` (the last bin is closed).
#[derive(Debug, Clone, PartialEq)]
pub struct HistBin {
    pub start: f64,
    pub end: f64,
    pub count: u32,
}

impl HistBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

pub struct StatsCalculator;

impl StatsCalculator {
    /// Parses the leading integer of a duration string.
    ///
    /// "90 min" becomes 90.0 and "3 Seasons" becomes 3.0: the unit suffix
    /// is dropped, so season counts land on the same numeric scale as
    /// minutes. Callers that want true minutes must filter to movies
    /// before parsing.
    pub fn duration_value(raw: &str) -> Option<f64> {
        let digits: String = raw
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            None
        } else {
            digits.parse().ok()
        }
    }

    /// Numeric encoding of the content type: Movie is 0.0, TV Show is 1.0.
    pub fn encode_type(raw: &str) -> Option<f64> {
        match raw {
            "Movie" => Some(0.0),
            "TV Show" => Some(1.0),
            _ => None,
        }
    }

    /// Counts occurrences and ranks them by descending count, ties broken
    /// alphabetically so equal counts always come back in the same order.
    pub fn rank_by_count(values: impl Iterator<Item = String>) -> Vec<(String, u32)> {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for value in values {
            *counts.entry(value).or_insert(0) += 1;
        }

        let mut ranked: Vec<(String, u32)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    /// Automatic bin count: the larger of the Sturges and Freedman-Diaconis
    /// estimates, clamped to at least 1.
    pub fn auto_bin_count(values: &[f64]) -> usize {
        let n = values.len();
        if n < 2 {
            return 1;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let range = sorted[n - 1] - sorted[0];
        if range <= 0.0 {
            return 1;
        }

        let sturges = (n as f64).log2().ceil() as usize + 1;

        let iqr = Self::percentile(&sorted, 75.0) - Self::percentile(&sorted, 25.0);
        if iqr <= 0.0 {
            return sturges.max(1);
        }

        let fd_width = 2.0 * iqr / (n as f64).powf(1.0 / 3.0);
        let fd = (range / fd_width).ceil() as usize;

        sturges.max(fd).max(1)
    }

    /// Equal-width histogram over the full value range. Values equal to the
    /// range maximum fall into the last bin.
    pub fn histogram(values: &[f64], bins: usize) -> Vec<HistBin> {
        if values.is_empty() || bins == 0 {
            return Vec::new();
        }

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        if range <= 0.0 {
            return vec![HistBin {
                start: min - 0.5,
                end: min + 0.5,
                count: values.len() as u32,
            }];
        }

        let width = range / bins as f64;
        let mut counts = vec![0u32; bins];
        for &value in values {
            let index = (((value - min) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistBin {
                start: min + i as f64 * width,
                end: min + (i + 1) as f64 * width,
                count,
            })
            .collect()
    }

    /// Gaussian kernel density estimate sampled on an even grid, using
    /// Scott's bandwidth and scaled to histogram counts (density times
    /// n times bin width) so the curve overlays count bars directly.
    pub fn kde_curve(values: &[f64], bin_width: f64, samples: usize) -> Vec<[f64; 2]> {
        let n = values.len();
        if n < 2 || samples < 2 || bin_width <= 0.0 {
            return Vec::new();
        }

        let mean = values.iter().sum::<f64>() / n as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        let std_dev = variance.sqrt();

        let bandwidth = std_dev * (n as f64).powf(-0.2);
        if bandwidth <= 0.0 || !bandwidth.is_finite() {
            return Vec::new();
        }

        let normal = match Normal::new(0.0, 1.0) {
            Ok(dist) => dist,
            Err(_) => return Vec::new(),
        };

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let lo = min - 3.0 * bandwidth;
        let hi = max + 3.0 * bandwidth;
        let step = (hi - lo) / (samples - 1) as f64;

        let scale = bin_width / bandwidth;
        (0..samples)
            .map(|i| {
                let x = lo + i as f64 * step;
                let density: f64 = values.iter().map(|v| normal.pdf((x - v) / bandwidth)).sum();
                [x, scale * density]
            })
            .collect()
    }

    /// Pearson correlation coefficient. NaN when either side is constant
    /// or fewer than two pairs are available.
    pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
        let n = xs.len().min(ys.len());
        if n < 2 {
            return f64::NAN;
        }

        let mean_x = xs.iter().take(n).sum::<f64>() / n as f64;
        let mean_y = ys.iter().take(n).sum::<f64>() / n as f64;

        let mut sxy = 0.0;
        let mut sxx = 0.0;
        let mut syy = 0.0;
        for i in 0..n {
            let dx = xs[i] - mean_x;
            let dy = ys[i] - mean_y;
            sxy += dx * dy;
            sxx += dx * dx;
            syy += dy * dy;
        }

        let denom = (sxx * syy).sqrt();
        if denom == 0.0 {
            f64::NAN
        } else {
            sxy / denom
        }
    }

    /// Pairwise correlation matrix. Diagonal cells are pinned to exactly
    /// 1.0 rather than recomputed, so they never drift from rounding.
    pub fn correlation_matrix(series: &[Vec<f64>]) -> Vec<Vec<f64>> {
        let k = series.len();
        let mut matrix = vec![vec![0.0; k]; k];
        for i in 0..k {
            for j in 0..k {
                matrix[i][j] = if i == j {
                    1.0
                } else {
                    Self::pearson(&series[i], &series[j])
                };
            }
        }
        matrix
    }

    /// Percentile with linear interpolation between ranks. The input slice
    /// must already be sorted ascending.
    pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        if sorted_values.is_empty() {
            return 0.0;
        }

        let n = sorted_values.len();
        let rank = (p / 100.0) * (n - 1) as f64;
        let lower_index = rank.floor() as usize;
        let upper_index = rank.ceil() as usize;

        if lower_index == upper_index {
            sorted_values[lower_index]
        } else {
            let weight = rank - lower_index as f64;
            sorted_values[lower_index] * (1.0 - weight) + sorted_values[upper_index] * weight
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_leading_integer_of_a_duration() {
        assert_eq!(StatsCalculator::duration_value("90 min"), Some(90.0));
        assert_eq!(StatsCalculator::duration_value("3 Seasons"), Some(3.0));
        assert_eq!(StatsCalculator::duration_value("1 Season"), Some(1.0));
        assert_eq!(StatsCalculator::duration_value("  120 min"), Some(120.0));
    }

    #[test]
    fn rejects_durations_without_a_leading_integer() {
        assert_eq!(StatsCalculator::duration_value("min 90"), None);
        assert_eq!(StatsCalculator::duration_value(""), None);
        assert_eq!(StatsCalculator::duration_value("Seasons"), None);
    }

    #[test]
    fn encodes_the_two_content_types() {
        assert_eq!(StatsCalculator::encode_type("Movie"), Some(0.0));
        assert_eq!(StatsCalculator::encode_type("TV Show"), Some(1.0));
        assert_eq!(StatsCalculator::encode_type("Documentary"), None);
    }

    #[test]
    fn ranks_by_descending_count_with_alphabetical_ties() {
        let values = ["b", "a", "c", "a", "b", "a"]
            .iter()
            .map(|s| s.to_string());
        let ranked = StatsCalculator::rank_by_count(values);

        assert_eq!(
            ranked,
            vec![
                ("a".to_string(), 3),
                ("b".to_string(), 2),
                ("c".to_string(), 1),
            ]
        );
    }

    #[test]
    fn histogram_counts_every_value_exactly_once() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let bins = StatsCalculator::histogram(&values, 10);

        assert_eq!(bins.len(), 10);
        let total: u32 = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn histogram_puts_the_maximum_in_the_last_bin() {
        let values = vec![0.0, 4.0, 10.0];
        let bins = StatsCalculator::histogram(&values, 2);

        assert_eq!(bins[0].count, 2);
        assert_eq!(bins[1].count, 1);
    }

    #[test]
    fn histogram_of_identical_values_is_a_single_bin() {
        let values = vec![7.0; 5];
        let bins = StatsCalculator::histogram(&values, 4);

        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 5);
    }

    #[test]
    fn auto_bin_count_grows_with_the_sample() {
        let small: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let large: Vec<f64> = (0..10_000).map(|i| (i % 250) as f64).collect();

        let few = StatsCalculator::auto_bin_count(&small);
        let many = StatsCalculator::auto_bin_count(&large);

        assert!(few >= 1);
        assert!(many > few);
    }

    #[test]
    fn auto_bin_count_handles_constant_data() {
        assert_eq!(StatsCalculator::auto_bin_count(&[3.0, 3.0, 3.0]), 1);
        assert_eq!(StatsCalculator::auto_bin_count(&[3.0]), 1);
    }

    #[test]
    fn kde_curve_peaks_near_the_data_mean() {
        let values = vec![9.0, 9.5, 10.0, 10.0, 10.5, 11.0];
        let curve = StatsCalculator::kde_curve(&values, 1.0, 200);

        assert!(!curve.is_empty());
        let peak = curve
            .iter()
            .max_by(|a, b| a[1].partial_cmp(&b[1]).unwrap())
            .unwrap();
        assert!((peak[0] - 10.0).abs() < 1.0);
    }

    #[test]
    fn kde_curve_needs_at_least_two_values() {
        assert!(StatsCalculator::kde_curve(&[5.0], 1.0, 100).is_empty());
    }

    #[test]
    fn pearson_detects_perfect_correlation() {
        let xs = vec![1.0, 2.0, 3.0, 4.0];
        let up: Vec<f64> = xs.iter().map(|v| 2.0 * v + 1.0).collect();
        let down: Vec<f64> = xs.iter().map(|v| -v).collect();

        assert!((StatsCalculator::pearson(&xs, &up) - 1.0).abs() < 1e-12);
        assert!((StatsCalculator::pearson(&xs, &down) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_of_constant_data_is_nan() {
        let xs = vec![1.0, 1.0, 1.0];
        let ys = vec![1.0, 2.0, 3.0];
        assert!(StatsCalculator::pearson(&xs, &ys).is_nan());
    }

    #[test]
    fn correlation_matrix_diagonal_is_exactly_one() {
        let series = vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![4.0, 3.0, 2.0, 1.0],
            vec![1.0, 3.0, 2.0, 4.0],
        ];
        let matrix = StatsCalculator::correlation_matrix(&series);

        for (i, row) in matrix.iter().enumerate() {
            assert_eq!(row[i], 1.0);
        }
        assert!((matrix[0][1] + 1.0).abs() < 1e-12);
        assert!((matrix[0][1] - matrix[1][0]).abs() < 1e-12);
    }

    #[test]
    fn percentile_interpolates_between_ranks() {
        let sorted = vec![10.0, 20.0, 30.0, 40.0];

        assert_eq!(StatsCalculator::percentile(&sorted, 0.0), 10.0);
        assert_eq!(StatsCalculator::percentile(&sorted, 100.0), 40.0);
        assert_eq!(StatsCalculator::percentile(&sorted, 50.0), 25.0);
    }
}
