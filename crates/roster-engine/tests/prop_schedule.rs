//! Property-based tests for the schedule engine using proptest.
//!
//! These verify invariants that should hold for *any* input, not just the
//! specific examples in `engine_tests.rs`.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use roster_engine::engine::effective_week;
use roster_engine::{DailyAvailability, ScheduleError, TimeOff, WeeklyAvailability};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Any date within a few decades of 2020-01-06 (a Monday).
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..8000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 6).unwrap() + Duration::days(offset)
    })
}

/// Any Monday within the same range.
fn arb_monday() -> impl Strategy<Value = NaiveDate> {
    (0i64..1000).prop_map(|weeks| {
        NaiveDate::from_ymd_opt(2020, 1, 6).unwrap() + Duration::weeks(weeks)
    })
}

/// A weekly pattern with arbitrary working windows and off days.
fn arb_weekly() -> impl Strategy<Value = WeeklyAvailability> {
    proptest::array::uniform7((0u8..12, 12u8..24, any::<bool>())).prop_map(|days| {
        WeeklyAvailability::new(days.map(|(start, end, off)| {
            if off {
                DailyAvailability::off()
            } else {
                DailyAvailability::working(start, end)
            }
        }))
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Non-Monday anchors always fail, Monday anchors always succeed.
    #[test]
    fn anchor_validation_is_exact(date in arb_date(), base in arb_weekly()) {
        let result = effective_week(date, base.clone(), &[]);
        if date.weekday() == Weekday::Mon {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(ScheduleError::NotMonday(date)));
        }
    }

    /// With no time off at all, the effective schedule is the base schedule.
    #[test]
    fn empty_time_off_is_identity(monday in arb_monday(), base in arb_weekly()) {
        let result = effective_week(monday, base.clone(), &[]).unwrap();
        prop_assert_eq!(result, base);
    }

    /// A request entirely outside the requested week never changes anything,
    /// approved or not.
    #[test]
    fn out_of_week_request_is_identity(
        monday in arb_monday(),
        base in arb_weekly(),
        weeks_away in 1i64..52,
        approved in any::<bool>(),
    ) {
        let start = (monday - Duration::weeks(weeks_away)).and_hms_opt(9, 0, 0).unwrap();
        let request = TimeOff {
            start,
            end: start + Duration::hours(3),
            approved,
        };
        let result = effective_week(monday, base.clone(), &[request]).unwrap();
        prop_assert_eq!(result, base);
    }

    /// Days the engine did not mark as modified are bit-identical to the base.
    #[test]
    fn unmodified_days_equal_base(
        monday in arb_monday(),
        base in arb_weekly(),
        start_day in 0u32..7,
        span_days in 0i64..7,
        start_hour in 0u32..12,
        len_hours in 1i64..12,
        approved in any::<bool>(),
    ) {
        let start = (monday + Duration::days(start_day as i64))
            .and_hms_opt(start_hour, 0, 0)
            .unwrap();
        let end = start + Duration::days(span_days) + Duration::hours(len_hours);
        let request = TimeOff { start, end, approved };

        let result = effective_week(monday, base.clone(), &[request]).unwrap();
        for d in 0..7 {
            if !result[d].modified {
                prop_assert_eq!(result[d], base[d], "day {} diverged without being marked", d);
            }
        }
    }

    /// The engine never revives a day that is off in the base pattern.
    #[test]
    fn base_off_days_stay_off(
        monday in arb_monday(),
        start_day in 0u32..6,
        span_days in 1i64..6,
    ) {
        let base = WeeklyAvailability::new([DailyAvailability::off(); 7]);
        let start = (monday + Duration::days(start_day as i64)).and_hms_opt(0, 0, 0).unwrap();
        let end = start + Duration::days(span_days);
        let request = TimeOff { start, end, approved: true };

        let result = effective_week(monday, base, &[request]).unwrap();
        for d in 0..7 {
            prop_assert!(result[d].off);
            prop_assert!(!result[d].modified);
        }
    }
}
