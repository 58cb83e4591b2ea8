use std::fmt;

/// Descriptive statistics over a set of values.
///
/// `std` is the population standard deviation: squared deviations are
/// divided by the full count N, never N-1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl Statistics {
    /// Compute all five statistics in one pass plus a sort.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter();
        let mut sorted: Vec<f64> = Vec::with_capacity(values.size_hint().0);
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for v in values {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
            sum += v;
            sorted.push(v);
        }

        let mean = Self::mean(sum, sorted.len())?;
        let std = Self::std_deviation(&sorted, mean);

        sorted.sort_unstable_by(f64::total_cmp);
        let median = Self::median(&sorted)?;

        Some(Statistics {
            mean,
            median,
            std,
            min,
            max,
        })
    }

    fn mean(sum: f64, count: usize) -> Option<f64> {
        match count {
            positive if positive > 0 => Some(sum / count as f64),
            _ => None,
        }
    }

    fn std_deviation(data: &[f64], mean: f64) -> f64 {
        let variance = data
            .iter()
            .map(|value| {
                let diff = mean - *value;

                diff * diff
            })
            .sum::<f64>()
            / data.len() as f64;

        variance.sqrt()
    }

    /// Median of an ascending slice.
    fn median(sorted: &[f64]) -> Option<f64> {
        let len = sorted.len();
        if len == 0 {
            return None;
        }
        if len % 2 == 0 {
            Some((sorted[len / 2 - 1] + sorted[len / 2]) / 2.0)
        } else {
            Some(sorted[len / 2])
        }
    }

    /// True when every field agrees within `rel_tol` relative tolerance.
    ///
    /// Values near zero are compared against an absolute floor of `rel_tol`.
    pub fn approx_eq(&self, other: &Statistics, rel_tol: f64) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() <= rel_tol * a.abs().max(b.abs()).max(1.0);

        close(self.mean, other.mean)
            && close(self.median, other.median)
            && close(self.std, other.std)
            && close(self.min, other.min)
            && close(self.max, other.max)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tmean:   {:.6}", self.mean)?;
        writeln!(f, "\tmedian: {:.6}", self.median)?;
        writeln!(f, "\tstddev: {:.6}", self.std)?;
        writeln!(f, "\tmin:    {:.6}", self.min)?;
        write!(f, "\tmax:    {:.6}", self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::Statistics;

    fn assert_close(actual: f64, expected: f64) {
        let eps = 1e-12_f64;
        assert!(
            (actual - expected).abs() <= eps,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_input_has_no_statistics() {
        assert_eq!(Statistics::from_values(Vec::<f64>::new()), None);
    }

    #[test]
    fn single_value() {
        let stats = Statistics::from_values([5.0]).unwrap();
        assert_close(stats.mean, 5.0);
        assert_close(stats.median, 5.0);
        assert_close(stats.std, 0.0);
        assert_close(stats.min, 5.0);
        assert_close(stats.max, 5.0);
    }

    #[test]
    fn odd_count_median_is_middle_value() {
        let stats = Statistics::from_values([5.0, 1.0, 4.0, 2.0, 3.0]).unwrap();
        assert_close(stats.median, 3.0);
        assert_close(stats.mean, 3.0);
    }

    #[test]
    fn even_count_median_averages_middle_pair() {
        let stats = Statistics::from_values([4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_close(stats.median, 2.5);
    }

    #[test]
    fn std_is_population_not_sample() {
        let stats = Statistics::from_values([1.0, 2.0, 3.0, 4.0]).unwrap();
        // population variance = (2.25 + 0.25 + 0.25 + 2.25) / 4 = 1.25
        assert_close(stats.std, 1.25_f64.sqrt());
        assert!((stats.std - 1.1180).abs() < 1e-4);
    }

    #[test]
    fn mean_is_sum_over_count() {
        let values = [0.5, 10.25, -3.0, 7.125, 1e3];
        let stats = Statistics::from_values(values).unwrap();
        let expected = values.iter().sum::<f64>() / values.len() as f64;
        assert_close(stats.mean, expected);
    }

    #[test]
    fn min_and_max_over_unsorted_input() {
        let stats = Statistics::from_values([3.0, -7.5, 12.0, 0.0]).unwrap();
        assert_close(stats.min, -7.5);
        assert_close(stats.max, 12.0);
    }

    #[test]
    fn approx_eq_tolerates_rounding_only() {
        let a = Statistics::from_values([1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut b = a;
        b.mean += a.mean * 1e-12;
        assert!(a.approx_eq(&b, 1e-9));

        b.max += 0.5;
        assert!(!a.approx_eq(&b, 1e-9));
    }

    #[test]
    fn display_uses_fixed_point() {
        let stats = Statistics::from_values([1.0, 2.0]).unwrap();
        let text = stats.to_string();
        assert!(text.contains("mean:   1.500000"), "{text}");
        assert!(text.contains("max:    2.000000"), "{text}");
    }
}
