//! Population growth extrapolation.
//!
//! The growth rate is the compound annual rate between the 2011 census and
//! the 2025 projection. The projection is then extended year by year from
//! the 2025 figure.

use waste_map_analytics_models::ForecastSeries;

/// Year of the last census.
pub const CENSUS_YEAR: i32 = 2011;

/// Year of the population projection the forecast is anchored on.
pub const BASE_YEAR: i32 = 2025;

/// Last forecast year shown in reports.
pub const HORIZON_END: i32 = 2030;

/// The default forecast horizon, `2025..=2030`.
#[must_use]
pub fn default_horizon() -> Vec<i32> {
    (BASE_YEAR..=HORIZON_END).collect()
}

/// Compound annual growth rate from the census to the base-year projection.
///
/// Returns `0.0` when the census population is not positive.
#[must_use]
pub fn cagr(census: f64, projected_base: f64) -> f64 {
    if census > 0.0 {
        (projected_base / census).powf(1.0 / f64::from(BASE_YEAR - CENSUS_YEAR)) - 1.0
    } else {
        0.0
    }
}

/// Projects population for each of `years`.
///
/// `value(Y) = projected_base * (1 + cagr)^(Y - 2025)`. With a zero census
/// the rate is zero and every year equals `projected_base`.
#[must_use]
pub fn forecast(census: f64, projected_base: f64, years: &[i32]) -> ForecastSeries {
    let cagr = cagr(census, projected_base);
    let values = years
        .iter()
        .map(|&year| projected_base * (1.0 + cagr).powi(year - BASE_YEAR))
        .collect();

    ForecastSeries {
        base_year: BASE_YEAR,
        cagr,
        years: years.to_vec(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_is_2025_to_2030() {
        assert_eq!(default_horizon(), vec![2025, 2026, 2027, 2028, 2029, 2030]);
    }

    #[test]
    fn zero_census_gives_flat_series() {
        let series = forecast(0.0, 54_321.0, &default_horizon());
        assert!(series.cagr == 0.0);
        for (_, value) in series.points() {
            assert!((value - 54_321.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn base_year_is_identity() {
        let series = forecast(1_000_000.0, 1_234_567.0, &[2025]);
        assert_eq!(series.values, vec![1_234_567.0]);
    }

    #[test]
    fn first_value_is_projection() {
        let series = forecast(90_000.0, 100_000.0, &default_horizon());
        assert!((series.values[0] - 100_000.0).abs() < f64::EPSILON);
        assert_eq!(series.years.len(), series.values.len());
    }

    #[test]
    fn worked_example() {
        let series = forecast(100_000.0, 120_000.0, &default_horizon());
        assert!((series.cagr - 0.013_108).abs() < 1e-5, "cagr {}", series.cagr);

        let y2030 = series.value_for(2030).unwrap();
        assert!((y2030 - 128_073.79).abs() < 0.01, "2030 = {y2030}");
        assert!((y2030.round() - 128_100.0).abs() <= 100.0);

        let y2026 = series.value_for(2026).unwrap();
        assert!((y2026 - 121_572.98).abs() < 0.01);
    }

    #[test]
    fn shrinking_population() {
        let series = forecast(200_000.0, 150_000.0, &default_horizon());
        assert!(series.cagr < 0.0);
        assert!(series.values.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn years_before_base_extrapolate_backwards() {
        let series = forecast(100_000.0, 120_000.0, &[2011]);
        assert!((series.values[0] - 100_000.0).abs() < 1e-6);
    }
}
