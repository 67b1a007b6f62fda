//! "Updated N units ago" labels.

use chrono::{DateTime, Utc};

pub const RECENTLY_UPDATED: &str = "Recently updated";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days between two instants, rounded up. `None` when the difference
/// cannot be represented.
pub fn days_between(now: DateTime<Utc>, then: DateTime<Utc>) -> Option<i64> {
    now.timestamp_millis()
        .checked_sub(then.timestamp_millis())
        .and_then(days_from_millis)
}

fn days_from_millis(diff_ms: i64) -> Option<i64> {
    let abs = diff_ms.checked_abs()?;
    let days = abs / MILLIS_PER_DAY;
    if abs % MILLIS_PER_DAY == 0 {
        Some(days)
    } else {
        days.checked_add(1)
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Format a non-negative day count.
pub fn format_days(days: i64) -> String {
    let amount = if days < 7 {
        plural(days, "day")
    } else if days < 30 {
        plural(days / 7, "week")
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        plural(days / 365, "year")
    };
    format!("Updated {} ago", amount)
}

/// Label for a repository last updated at `updated`, as seen at `now`.
pub fn recency_label(updated: DateTime<Utc>, now: DateTime<Utc>) -> String {
    label_for(days_between(now, updated))
}

fn label_for(days: Option<i64>) -> String {
    match days {
        Some(days) => format_days(days),
        None => RECENTLY_UPDATED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn boundaries() {
        let cases = [
            (0, "Updated 0 days ago"),
            (1, "Updated 1 day ago"),
            (2, "Updated 2 days ago"),
            (6, "Updated 6 days ago"),
            (7, "Updated 1 week ago"),
            (13, "Updated 1 week ago"),
            (14, "Updated 2 weeks ago"),
            (29, "Updated 4 weeks ago"),
            (30, "Updated 1 month ago"),
            (59, "Updated 1 month ago"),
            (60, "Updated 2 months ago"),
            (364, "Updated 12 months ago"),
            (365, "Updated 1 year ago"),
            (730, "Updated 2 years ago"),
        ];
        for (days, expected) in cases {
            assert_eq!(format_days(days), expected, "d = {days}");
        }
    }

    #[test]
    fn monotonic_in_days() {
        fn rank(label: &str) -> (u8, i64) {
            let mut parts = label.split_whitespace().skip(1);
            let count: i64 = parts.next().unwrap().parse().unwrap();
            let unit = match parts.next().unwrap().trim_end_matches('s') {
                "day" => 0,
                "week" => 1,
                "month" => 2,
                "year" => 3,
                other => panic!("unexpected unit {other}"),
            };
            (unit, count)
        }

        let mut previous = rank(&format_days(0));
        for days in 1..2000 {
            let current = rank(&format_days(days));
            assert!(current >= previous, "label went backwards at d = {days}");
            previous = current;
        }
    }

    #[test]
    fn partial_days_round_up() {
        let now = now();
        assert_eq!(days_between(now, now), Some(0));
        assert_eq!(days_between(now, now - Duration::milliseconds(1)), Some(1));
        assert_eq!(days_between(now, now - Duration::hours(36)), Some(2));
        assert_eq!(days_between(now, now - Duration::days(3)), Some(3));
    }

    #[test]
    fn future_dates_use_absolute_difference() {
        let now = now();
        assert_eq!(days_between(now, now + Duration::days(2)), Some(2));
        assert_eq!(
            recency_label(now + Duration::days(8), now),
            "Updated 1 week ago"
        );
    }

    #[test]
    fn unresolved_default_is_zero_days() {
        let now = now();
        assert_eq!(recency_label(now, now), "Updated 0 days ago");
    }

    #[test]
    fn resolved_date_labels() {
        let now = now();
        assert_eq!(
            recency_label(now - Duration::days(45), now),
            "Updated 1 month ago"
        );
        assert_eq!(
            recency_label(now - Duration::days(800), now),
            "Updated 2 years ago"
        );
    }

    #[test]
    fn failed_computation_falls_back() {
        assert_eq!(days_from_millis(i64::MIN), None);
        assert_eq!(label_for(days_from_millis(i64::MIN)), "Recently updated");
        assert_eq!(label_for(None), RECENTLY_UPDATED);
    }
}
