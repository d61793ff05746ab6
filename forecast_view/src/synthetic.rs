//! Seeded generator of daily passenger-like series
//!
//! value = trend * month factor * weekday factor + N(0, trend * noise),
//! truncated to a whole number, where trend = base * growth^(years elapsed).

use crate::error::{Result, ViewError};
use crate::series::{Observation, Series};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Month-of-year profile of the classic monthly airline passenger series,
/// each month's mean divided by the overall mean.
const MONTH_FACTORS: [f64; 12] = [
    0.8625, 0.8384, 0.9639, 0.9528, 0.9698, 1.1119, 1.2534, 1.2525, 1.0789, 0.9511, 0.8307,
    0.9341,
];

/// Builder for a synthetic daily series
#[derive(Debug, Clone)]
pub struct SyntheticSeries {
    start: NaiveDate,
    days: usize,
    seed: u64,
    base: f64,
    growth: f64,
    noise: f64,
}

impl SyntheticSeries {
    /// `days` consecutive daily points starting at `start`
    pub fn new(start: NaiveDate, days: usize) -> Self {
        Self {
            start,
            days,
            seed: 42,
            base: 120.0,
            growth: 1.06,
            noise: 0.05,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Starting level of the trend
    pub fn base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }

    /// Yearly growth multiplier of the trend
    pub fn growth(mut self, growth: f64) -> Self {
        self.growth = growth;
        self
    }

    /// Noise standard deviation as a fraction of the trend
    pub fn noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    pub fn generate(&self) -> Result<Series> {
        if !(self.noise >= 0.0 && self.noise.is_finite()) {
            return Err(ViewError::InvalidArgument(
                "noise must be a finite, non-negative fraction".to_string(),
            ));
        }
        if !(self.growth > 0.0 && self.growth.is_finite()) {
            return Err(ViewError::InvalidArgument(
                "growth must be a finite, positive multiplier".to_string(),
            ));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let standard = Normal::new(0.0, 1.0)
            .map_err(|e| ViewError::InvalidArgument(format!("noise distribution: {}", e)))?;

        let mut observations = Vec::with_capacity(self.days);
        for i in 0..self.days {
            let date = self
                .start
                .checked_add_days(Days::new(i as u64))
                .ok_or_else(|| ViewError::InvalidArgument("date range overflows".to_string()))?;

            let trend = self.base * self.growth.powf(i as f64 / 365.25);
            let seasonal = MONTH_FACTORS[date.month0() as usize];
            let noise = standard.sample(&mut rng) * trend * self.noise;
            let value = (trend * seasonal * weekday_factor(date.weekday()) + noise).trunc();

            observations.push(Observation::new(date, value));
        }

        Series::new(observations)
    }
}

fn weekday_factor(weekday: Weekday) -> f64 {
    match weekday {
        Weekday::Fri => 1.05,
        Weekday::Sun => 1.02,
        Weekday::Tue | Weekday::Wed => 0.95,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(1950, 1, 1).unwrap()
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = SyntheticSeries::new(start(), 400).seed(7).generate().unwrap();
        let b = SyntheticSeries::new(start(), 400).seed(7).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_daily_dates_are_consecutive() {
        let series = SyntheticSeries::new(start(), 60).generate().unwrap();

        assert_eq!(series.len(), 60);
        assert_eq!(series.first().unwrap().date, start());
        assert_eq!(
            series.last().unwrap().date,
            NaiveDate::from_ymd_opt(1950, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_noise_free_values_follow_profile() {
        let series = SyntheticSeries::new(start(), 1).noise(0.0).generate().unwrap();
        // 1950-01-01 is a Sunday.
        let expected = (120.0 * MONTH_FACTORS[0] * 1.02_f64).trunc();
        assert_eq!(series.first().unwrap().value, expected);
    }

    #[test]
    fn test_negative_noise_is_rejected() {
        let result = SyntheticSeries::new(start(), 10).noise(-1.0).generate();
        assert!(matches!(result, Err(ViewError::InvalidArgument(_))));
    }
}
