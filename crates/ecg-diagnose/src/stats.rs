//! Interval statistics.

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`); 0 for an empty slice.
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_series_has_zero_spread() {
        assert_eq!(population_std(&[160.0, 160.0, 160.0]), 0.0);
    }

    #[test]
    fn divides_by_n() {
        // mean 5, squared deviations 9 + 1 + 1 + 9 = 20, 20 / 4 = 5
        let std = population_std(&[2.0, 4.0, 6.0, 8.0]);
        assert!((std - 5.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(population_std(&[]), 0.0);
    }
}
