//! Calendar dates, durations and instants.
//!
//! Dates are drawn with day granularity and rendered with
//! [`DATE_OUTPUT_FORMAT`], e.g. `Monday 2 Jan 2006`. Inputs use
//! [`DATE_INPUT_FORMAT`].

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeDelta, Utc};
use rand::{Rng, RngCore};

use crate::error::RandomError;
use crate::source::RandomSource;

/// `strftime` pattern accepted by [`parse_date`].
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// `strftime` pattern used for rendered dates.
pub const DATE_OUTPUT_FORMAT: &str = "%A %-d %b %Y";

/// Earliest date produced by an open lower bound.
const EARLIEST: NaiveDate = match NaiveDate::from_ymd_opt(1, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Range constraint for [`RandomSource::date_in_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBounds {
    /// Any day of the current UTC year.
    Unbounded,
    /// Any day from 0001-01-01 up to and including the given date.
    Until(NaiveDate),
    /// Any day between the two dates, both inclusive.
    Between(NaiveDate, NaiveDate),
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`RandomError::InvalidDate`] when `value` is not a valid calendar
/// date in that format.
///
/// # Example
///
/// ```
/// use random_data::parse_date;
///
/// assert!(parse_date("2016-02-29").is_ok());
/// assert!(parse_date("2015-02-29").is_err());
/// ```
pub fn parse_date(value: &str) -> Result<NaiveDate, RandomError> {
    NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT).map_err(|_| RandomError::InvalidDate {
        value: value.to_owned(),
    })
}

/// Renders `date` with [`DATE_OUTPUT_FORMAT`].
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_OUTPUT_FORMAT).to_string()
}

impl<R: RngCore> RandomSource<R> {
    /// Returns a day of `year`: the month is uniform, then the day is uniform
    /// within that month.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::YearOutOfRange`] when chrono cannot represent
    /// the drawn month of `year`.
    pub fn date_in_year(&self, year: i32) -> Result<NaiveDate, RandomError> {
        let month = self.with_rng(|rng| rng.random_range(1..=12_u32));
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(RandomError::YearOutOfRange { year })?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or(RandomError::YearOutOfRange { year })?;
        let day = self.with_rng(|rng| rng.random_range(1..=last.day()));
        first
            .with_day(day)
            .ok_or(RandomError::YearOutOfRange { year })
    }

    /// Returns a formatted day of the current UTC year.
    pub fn full_date(&self) -> String {
        format_date(self.date_in_current_year())
    }

    /// Returns a day satisfying `bounds`.
    ///
    /// When the upper bound does not lie after the lower bound the upper
    /// bound itself is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use random_data::{DateBounds, RandomSource, parse_date};
    ///
    /// let min = parse_date("2016-01-01").expect("date");
    /// let max = parse_date("2016-12-31").expect("date");
    /// let date = RandomSource::from_seed(3).date_in_range(DateBounds::Between(min, max));
    ///
    /// assert!((min..=max).contains(&date));
    /// ```
    pub fn date_in_range(&self, bounds: DateBounds) -> NaiveDate {
        match bounds {
            DateBounds::Unbounded => self.date_in_current_year(),
            DateBounds::Until(max) => self.date_between(EARLIEST, max),
            DateBounds::Between(min, max) => self.date_between(min, max),
        }
    }

    /// Returns [`RandomSource::date_in_range`] rendered with
    /// [`DATE_OUTPUT_FORMAT`].
    pub fn full_date_in_range(&self, bounds: DateBounds) -> String {
        format_date(self.date_in_range(bounds))
    }

    /// Returns a duration in `[0, max)` with nanosecond resolution, or zero
    /// when `max` is not positive.
    pub fn duration(&self, max: TimeDelta) -> TimeDelta {
        if max <= TimeDelta::zero() {
            return TimeDelta::zero();
        }
        // Positive spans past the nanosecond range saturate.
        let limit = max.num_nanoseconds().unwrap_or(i64::MAX);
        TimeDelta::nanoseconds(self.with_rng(|rng| rng.random_range(0..limit)))
    }

    /// Returns an instant in `[start, start + range)`.
    pub fn time(&self, start: DateTime<Utc>, range: TimeDelta) -> DateTime<Utc> {
        offset_by(start, self.duration(range))
    }

    /// Returns two ordered instants, both in `[start, start + range)`.
    pub fn time_range(
        &self,
        start: DateTime<Utc>,
        range: TimeDelta,
    ) -> (DateTime<Utc>, DateTime<Utc>) {
        let lead = self.duration(range);
        let span = self.duration(range.checked_sub(&lead).unwrap_or_default());
        let first = offset_by(start, lead);
        (first, offset_by(first, span))
    }

    fn date_in_current_year(&self) -> NaiveDate {
        let today = Utc::now().date_naive();
        self.date_in_year(today.year()).unwrap_or(today)
    }

    fn date_between(&self, min: NaiveDate, max: NaiveDate) -> NaiveDate {
        if max <= min {
            return max;
        }
        let span = u64::try_from((max - min).num_days()).unwrap_or_default();
        let back = self.uniform_inclusive(0, span);
        max.checked_sub_days(Days::new(back)).unwrap_or(min)
    }
}

fn offset_by(instant: DateTime<Utc>, delta: TimeDelta) -> DateTime<Utc> {
    instant.checked_add_signed(delta).unwrap_or(instant)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn source() -> RandomSource {
        RandomSource::from_seed(1234)
    }

    fn date(value: &str) -> NaiveDate {
        parse_date(value).expect("valid date")
    }

    #[rstest]
    #[case("2016-01-01", 2016, 1, 1)]
    #[case("2016-02-29", 2016, 2, 29)]
    #[case("0001-01-01", 1, 1, 1)]
    fn parses_valid_dates(
        #[case] value: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let expected = NaiveDate::from_ymd_opt(year, month, day).expect("date");
        assert_eq!(parse_date(value), Ok(expected));
    }

    #[rstest]
    #[case("2015-02-29")]
    #[case("2016-13-01")]
    #[case("16-01-01x")]
    #[case("")]
    fn rejects_invalid_dates(#[case] value: &str) {
        assert_eq!(
            parse_date(value),
            Err(RandomError::InvalidDate {
                value: value.to_owned()
            })
        );
    }

    #[test]
    fn formats_with_weekday_and_short_month() {
        assert_eq!(format_date(date("2006-01-02")), "Monday 2 Jan 2006");
    }

    #[rstest]
    fn date_in_year_stays_in_year(source: RandomSource, #[values(1900, 2016, 2023)] year: i32) {
        let mut months = HashSet::new();
        for _ in 0..500 {
            let drawn = source.date_in_year(year).expect("representable year");
            assert_eq!(drawn.year(), year);
            months.insert(drawn.month());
        }
        assert_eq!(months.len(), 12);
    }

    #[rstest]
    fn date_in_year_reaches_leap_day(source: RandomSource) {
        let hit = (0..5_000)
            .filter_map(|_| source.date_in_year(2016).ok())
            .any(|drawn| drawn.month() == 2 && drawn.day() == 29);
        assert!(hit);
    }

    #[rstest]
    fn date_in_year_rejects_unrepresentable_years(source: RandomSource) {
        assert_eq!(
            source.date_in_year(400_000),
            Err(RandomError::YearOutOfRange { year: 400_000 })
        );
    }

    #[rstest]
    fn full_date_is_in_the_current_year(source: RandomSource) {
        let year = Utc::now().year().to_string();
        let rendered = source.full_date();
        assert!(rendered.ends_with(&year), "{rendered}");
    }

    #[rstest]
    fn between_is_inclusive(source: RandomSource) {
        let min = date("2016-01-01");
        let max = date("2016-01-03");
        let seen: HashSet<NaiveDate> = (0..300)
            .map(|_| source.date_in_range(DateBounds::Between(min, max)))
            .collect();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|drawn| (min..=max).contains(drawn)));
    }

    #[rstest]
    #[case("2016-05-05", "2016-05-05")]
    #[case("2017-01-01", "2016-01-01")]
    fn non_increasing_bounds_return_the_upper_bound(
        source: RandomSource,
        #[case] min: &str,
        #[case] max: &str,
    ) {
        assert_eq!(
            source.date_in_range(DateBounds::Between(date(min), date(max))),
            date(max)
        );
    }

    #[rstest]
    fn until_stays_at_or_before_the_bound(source: RandomSource) {
        let max = date("1999-12-31");
        for _ in 0..200 {
            let drawn = source.date_in_range(DateBounds::Until(max));
            assert!((EARLIEST..=max).contains(&drawn), "{drawn}");
        }
    }

    #[rstest]
    fn full_date_in_range_is_rendered(source: RandomSource) {
        let day = date("2016-07-04");
        assert_eq!(
            source.full_date_in_range(DateBounds::Between(day, day)),
            "Monday 4 Jul 2016"
        );
    }

    #[rstest]
    fn duration_stays_below_max(source: RandomSource) {
        let max = TimeDelta::hours(3);
        for _ in 0..200 {
            let drawn = source.duration(max);
            assert!(drawn >= TimeDelta::zero() && drawn < max, "{drawn}");
        }
    }

    #[rstest]
    #[case(TimeDelta::zero())]
    #[case(TimeDelta::seconds(-5))]
    #[case(TimeDelta::days(-200_000))]
    #[case(TimeDelta::MIN)]
    fn duration_of_non_positive_max_is_zero(source: RandomSource, #[case] max: TimeDelta) {
        assert_eq!(source.duration(max), TimeDelta::zero());
    }

    #[rstest]
    fn duration_beyond_nanosecond_range_stays_non_negative(source: RandomSource) {
        for _ in 0..50 {
            let drawn = source.duration(TimeDelta::MAX);
            assert!(drawn >= TimeDelta::zero() && drawn < TimeDelta::MAX, "{drawn}");
        }
    }

    #[rstest]
    #[case(TimeDelta::days(-200_000))]
    #[case(TimeDelta::MIN)]
    fn non_positive_ranges_pin_instants_to_start(source: RandomSource, #[case] range: TimeDelta) {
        let start = Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).single().expect("instant");
        assert_eq!(source.time(start, range), start);
        assert_eq!(source.time_range(start, range), (start, start));
    }

    #[rstest]
    fn time_range_is_ordered_and_bounded(source: RandomSource) {
        let start = Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).single().expect("instant");
        let range = TimeDelta::days(30);
        for _ in 0..200 {
            let (first, second) = source.time_range(start, range);
            assert!(start <= first && first <= second);
            assert!(second < start + range);
        }
    }

    #[rstest]
    fn time_stays_in_window(source: RandomSource) {
        let start = Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).single().expect("instant");
        let range = TimeDelta::minutes(10);
        for _ in 0..200 {
            let drawn = source.time(start, range);
            assert!(start <= drawn && drawn < start + range);
        }
    }
}
