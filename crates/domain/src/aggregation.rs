//! Forecast aggregation
//!
//! Collapses a provider's 3-hourly readings into one summary per UTC
//! calendar day.
//!
//! Rounding is half away from zero (`f64::round`) at every site: the three
//! temperature figures round to whole degrees and the wind average rounds
//! to one decimal place.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::{
    entities::{CityInfo, DailySummary, ForecastResult, Observation},
    errors::DomainError,
};

/// Maximum number of daily summaries in a forecast
pub const MAX_FORECAST_DAYS: usize = 5;

/// Observations that share one UTC calendar date
#[derive(Debug)]
struct DailyGroup<'a> {
    day_name: &'static str,
    members: Vec<&'a Observation>,
}

/// Group observations by UTC date and summarize each day
///
/// Summaries come back ascending by date and are truncated to the
/// [`MAX_FORECAST_DAYS`] earliest days. `city` is returned unchanged.
///
/// # Examples
///
/// ```
/// use domain::{CityInfo, Observation, aggregate};
///
/// let observations = vec![
///     Observation::new(1_744_502_400, 10.0, "Rain", "10d", 2.0),
///     Observation::new(1_744_513_200, 14.0, "Clouds", "04d", 3.0),
/// ];
/// let result = aggregate(CityInfo::new("London", "GB"), &observations).unwrap();
///
/// assert_eq!(result.forecast.len(), 1);
/// assert_eq!(result.forecast[0].temp_avg, 12);
/// ```
///
/// # Errors
///
/// Fails fast on the first observation whose timestamp cannot be turned
/// into a date or whose temperature or wind speed is not finite.
pub fn aggregate(
    city: CityInfo,
    observations: &[Observation],
) -> Result<ForecastResult, DomainError> {
    let mut groups: BTreeMap<NaiveDate, DailyGroup<'_>> = BTreeMap::new();

    for observation in observations {
        observation.ensure_finite()?;
        let date = observation.utc_date()?;
        groups
            .entry(date)
            .or_insert_with(|| DailyGroup {
                day_name: weekday_name(date),
                members: Vec::new(),
            })
            .members
            .push(observation);
    }

    let forecast = groups
        .into_iter()
        .take(MAX_FORECAST_DAYS)
        .map(|(date, group)| summarize(date, &group))
        .collect();

    Ok(ForecastResult { city, forecast })
}

/// Most frequent label, ties going to the label seen first
///
/// Returns `None` for an empty input.
///
/// # Examples
///
/// ```
/// use domain::most_frequent;
///
/// assert_eq!(most_frequent(["Clear", "Clouds", "Clouds", "Clear"]), Some("Clear"));
/// assert_eq!(most_frequent(["Rain", "Clear", "Clear"]), Some("Clear"));
/// ```
pub fn most_frequent<'a, I>(labels: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    // Tally in first-seen order so a strict `>` below keeps the earliest on ties.
    let mut tally: Vec<(&'a str, usize)> = Vec::new();
    for label in labels {
        match tally.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => tally.push((label, 1)),
        }
    }

    let mut best: Option<(&'a str, usize)> = None;
    for (label, count) in tally {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}

fn summarize(date: NaiveDate, group: &DailyGroup<'_>) -> DailySummary {
    let members = &group.members;
    #[allow(clippy::cast_precision_loss)]
    let count = members.len() as f64;

    let temp_max = members
        .iter()
        .map(|o| o.temperature)
        .fold(f64::NEG_INFINITY, f64::max);
    let temp_min = members
        .iter()
        .map(|o| o.temperature)
        .fold(f64::INFINITY, f64::min);
    let temp_mean = members.iter().map(|o| o.temperature).sum::<f64>() / count;
    let wind_mean = members.iter().map(|o| o.wind_speed).sum::<f64>() / count;

    let condition = most_frequent(members.iter().map(|o| o.condition.as_str()))
        .unwrap_or_default()
        .to_string();
    let icon = most_frequent(members.iter().map(|o| o.icon.as_str()))
        .unwrap_or_default()
        .to_string();

    DailySummary {
        date,
        day_name: group.day_name.to_string(),
        temp_max: round_to_int(temp_max),
        temp_min: round_to_int(temp_min),
        temp_avg: round_to_int(temp_mean),
        condition,
        icon,
        wind_speed_avg: (wind_mean * 10.0).round() / 10.0,
        observation_count: members.len(),
    }
}

/// Round half away from zero to a whole degree
///
/// Inputs are finite (checked by `Observation::ensure_finite`). Values past
/// the `i32` range saturate at `i32::MIN`/`i32::MAX`, far outside any
/// physical temperature.
#[allow(clippy::cast_possible_truncation)]
fn round_to_int(value: f64) -> i32 {
    value
        .round()
        .clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2025-04-13T00:00:00Z
    const APRIL_13: i64 = 1_744_502_400;
    const HOURS_3: i64 = 3 * 3600;
    const DAY: i64 = 86_400;

    fn london() -> CityInfo {
        CityInfo::new("London", "GB")
    }

    fn obs(ts: i64, temp: f64, condition: &str, wind: f64) -> Observation {
        let icon = match condition {
            "Rain" => "10d",
            "Clouds" => "04d",
            "Clear" => "01d",
            _ => "50d",
        };
        Observation::new(ts, temp, condition, icon, wind)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn single_day_scenario() {
        let temps = [10.0, 12.0, 15.0, 14.0, 13.0, 11.0, 16.0, 12.0];
        let conditions = [
            "Rain", "Rain", "Clouds", "Rain", "Clouds", "Rain", "Rain", "Clouds",
        ];
        let winds = [2.0, 2.5, 3.0, 2.8, 2.1, 1.9, 3.2, 2.6];
        let observations: Vec<Observation> = (0..8)
            .map(|i| {
                obs(
                    APRIL_13 + i64::try_from(i).expect("small") * HOURS_3,
                    temps[i],
                    conditions[i],
                    winds[i],
                )
            })
            .collect();

        let result = aggregate(london(), &observations).expect("aggregate");
        assert_eq!(result.forecast.len(), 1);

        let day = &result.forecast[0];
        assert_eq!(day.date, date(2025, 4, 13));
        assert_eq!(day.day_name, "Sunday");
        assert_eq!(day.temp_max, 16);
        assert_eq!(day.temp_min, 10);
        assert_eq!(day.temp_avg, 13);
        assert_eq!(day.condition, "Rain");
        assert_eq!(day.icon, "10d");
        assert!((day.wind_speed_avg - 2.5).abs() < f64::EPSILON);
        assert_eq!(day.observation_count, 8);
    }

    #[test]
    fn empty_input_passes_city_through() {
        let result = aggregate(london(), &[]).expect("aggregate");
        assert!(result.forecast.is_empty());
        assert_eq!(result.city, london());
    }

    #[test]
    fn truncates_to_five_earliest_days() {
        // Seven days, fed latest first
        let observations: Vec<Observation> = (0..7)
            .rev()
            .map(|d| obs(APRIL_13 + d * DAY + 12 * 3600, 20.0, "Clear", 1.0))
            .collect();

        let result = aggregate(london(), &observations).expect("aggregate");
        let dates: Vec<NaiveDate> = result.forecast.iter().map(|s| s.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2025, 4, 13),
                date(2025, 4, 14),
                date(2025, 4, 15),
                date(2025, 4, 16),
                date(2025, 4, 17),
            ]
        );
    }

    #[test]
    fn fewer_than_five_days_are_all_kept() {
        let observations = vec![
            obs(APRIL_13, 5.0, "Clear", 1.0),
            obs(APRIL_13 + DAY, 6.0, "Clear", 1.0),
        ];
        let result = aggregate(london(), &observations).expect("aggregate");
        assert_eq!(result.forecast.len(), 2);
    }

    #[test]
    fn output_is_sorted_regardless_of_input_order() {
        let observations = vec![
            obs(APRIL_13 + 2 * DAY, 5.0, "Clear", 1.0),
            obs(APRIL_13, 6.0, "Clear", 1.0),
            obs(APRIL_13 + DAY, 7.0, "Clear", 1.0),
            obs(APRIL_13 + 2 * DAY + HOURS_3, 9.0, "Clear", 1.0),
        ];
        let result = aggregate(london(), &observations).expect("aggregate");
        let dates: Vec<NaiveDate> = result.forecast.iter().map(|s| s.date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 4, 13), date(2025, 4, 14), date(2025, 4, 15)]
        );
        assert_eq!(result.forecast[2].observation_count, 2);
        assert_eq!(result.forecast[2].temp_max, 9);
    }

    #[test]
    fn condition_tie_goes_to_first_seen() {
        let observations = vec![
            obs(APRIL_13, 20.0, "Clear", 1.0),
            obs(APRIL_13 + HOURS_3, 20.0, "Clouds", 1.0),
            obs(APRIL_13 + 2 * HOURS_3, 20.0, "Clouds", 1.0),
            obs(APRIL_13 + 3 * HOURS_3, 20.0, "Clear", 1.0),
        ];
        let result = aggregate(london(), &observations).expect("aggregate");
        assert_eq!(result.forecast[0].condition, "Clear");
        assert_eq!(result.forecast[0].icon, "01d");
    }

    #[test]
    fn icon_mode_is_independent_of_condition_mode() {
        let observations = vec![
            Observation::new(APRIL_13, 10.0, "Clouds", "03n", 1.0),
            Observation::new(APRIL_13 + HOURS_3, 10.0, "Clouds", "04d", 1.0),
            Observation::new(APRIL_13 + 2 * HOURS_3, 10.0, "Rain", "04d", 1.0),
        ];
        let result = aggregate(london(), &observations).expect("aggregate");
        assert_eq!(result.forecast[0].condition, "Clouds");
        assert_eq!(result.forecast[0].icon, "04d");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        let observations = vec![
            obs(APRIL_13, -2.5, "Snow", 0.25),
            obs(APRIL_13 + HOURS_3, 2.5, "Snow", 0.25),
        ];
        let result = aggregate(london(), &observations).expect("aggregate");
        let day = &result.forecast[0];
        assert_eq!(day.temp_min, -3);
        assert_eq!(day.temp_max, 3);
        assert_eq!(day.temp_avg, 0);
        assert!((day.wind_speed_avg - 0.3).abs() < 1e-9);
    }

    #[test]
    fn negative_temperatures() {
        let observations = vec![
            obs(APRIL_13, -10.4, "Snow", 5.0),
            obs(APRIL_13 + HOURS_3, -3.6, "Snow", 7.0),
        ];
        let day = &aggregate(london(), &observations).expect("aggregate").forecast[0];
        assert_eq!(day.temp_min, -10);
        assert_eq!(day.temp_max, -4);
        assert_eq!(day.temp_avg, -7);
        assert!((day.wind_speed_avg - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn groups_by_utc_date_not_by_24h_window() {
        let observations = vec![
            obs(APRIL_13 + DAY - 1, 1.0, "Clear", 1.0),
            obs(APRIL_13 + DAY, 2.0, "Clear", 1.0),
        ];
        let result = aggregate(london(), &observations).expect("aggregate");
        assert_eq!(result.forecast.len(), 2);
        assert_eq!(result.forecast[0].date, date(2025, 4, 13));
        assert_eq!(result.forecast[1].date, date(2025, 4, 14));
    }

    #[test]
    fn invalid_timestamp_fails_fast() {
        let observations = vec![
            obs(APRIL_13, 1.0, "Clear", 1.0),
            obs(i64::MIN, 1.0, "Clear", 1.0),
        ];
        assert!(matches!(
            aggregate(london(), &observations),
            Err(DomainError::InvalidTimestamp(i64::MIN))
        ));
    }

    #[test]
    fn non_finite_temperature_fails_fast() {
        let observations = vec![obs(APRIL_13, f64::NAN, "Clear", 1.0)];
        assert!(matches!(
            aggregate(london(), &observations),
            Err(DomainError::NonFiniteReading { .. })
        ));
    }

    #[test]
    fn aggregate_is_idempotent() {
        let observations = vec![
            obs(APRIL_13, 3.3, "Rain", 4.4),
            obs(APRIL_13 + DAY, 5.5, "Clouds", 6.6),
        ];
        let first = aggregate(london(), &observations).expect("aggregate");
        let second = aggregate(london(), &observations).expect("aggregate");
        assert_eq!(first, second);
    }

    #[test]
    fn most_frequent_empty_is_none() {
        assert_eq!(most_frequent(std::iter::empty::<&str>()), None);
    }

    #[test]
    fn most_frequent_picks_highest_count() {
        assert_eq!(most_frequent(["a", "b", "b", "c", "b", "a"]), Some("b"));
    }

    #[test]
    fn most_frequent_three_way_tie_keeps_first_seen() {
        assert_eq!(most_frequent(["z", "y", "x", "x", "y", "z"]), Some("z"));
    }

    #[test]
    fn most_frequent_later_majority_beats_earlier_label() {
        assert_eq!(most_frequent(["Clear", "Rain", "Rain"]), Some("Rain"));
    }

    #[test]
    fn round_to_int_saturates_outside_i32() {
        assert_eq!(round_to_int(2.5), 3);
        assert_eq!(round_to_int(-2.5), -3);
        assert_eq!(round_to_int(1e12), i32::MAX);
        assert_eq!(round_to_int(-1e12), i32::MIN);
    }

    #[test]
    fn weekday_names_cover_the_week() {
        let names: Vec<&str> = (13..=19).map(|d| weekday_name(date(2025, 4, d))).collect();
        assert_eq!(
            names,
            vec![
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday"
            ]
        );
    }
}
