use chrono::{DateTime, Utc};
use tracing::warn;

/// Returned whenever no age can be derived.
pub const UNKNOWN_AGE: &str = "unknown";

/// Estimates how old an account is. Output is a display label, never authoritative.
pub trait AgeEstimator: Send + Sync {
    fn estimate(&self, id: u64, now: DateTime<Utc>) -> String;
}

/// Reads the upper 32 bits of an id as the Unix time the account was created.
///
/// This is an observation about how Telegram has allocated ids, not a documented
/// guarantee. Recent ids often decode to timestamps that are meaningless.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdTimestampEstimator;

impl IdTimestampEstimator {
    /// Whole days between the id's embedded timestamp and `now`.
    pub fn elapsed_days(id: u64, now: DateTime<Utc>) -> Option<i64> {
        let secs = (id >> 32) & 0xFFFF_FFFF;
        let created = DateTime::from_timestamp(i64::try_from(secs).ok()?, 0)?;
        let days = now.signed_duration_since(created).num_days();
        (days >= 0).then_some(days)
    }
}

impl AgeEstimator for IdTimestampEstimator {
    fn estimate(&self, id: u64, now: DateTime<Utc>) -> String {
        match Self::elapsed_days(id, now) {
            Some(days) if days > 365 => count_label(days / 365, "year"),
            Some(days) => count_label(days / 30, "month"),
            None => {
                warn!("Couldn't estimate account age for id {}", id);
                UNKNOWN_AGE.to_string()
            }
        }
    }
}

// Plural only above one, so zero reads "0 month".
fn count_label(count: i64, unit: &str) -> String {
    if count > 1 {
        format!("{} {}s", count, unit)
    } else {
        format!("{} {}", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn is_well_formed(label: &str) -> bool {
        if label == UNKNOWN_AGE {
            return true;
        }
        let Some((count, unit)) = label.split_once(' ') else {
            return false;
        };
        !count.is_empty()
            && count.chars().all(|c| c.is_ascii_digit())
            && matches!(unit, "year" | "years" | "month" | "months")
    }

    fn ts(secs: u64) -> u64 {
        secs << 32
    }

    #[test]
    fn test_epoch_id_is_54_years_in_2024() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(IdTimestampEstimator.estimate(5_000_000_000, now), "54 years");
    }

    #[test]
    fn test_months_below_a_year() {
        let created = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let id = ts(created.timestamp() as u64);
        let now = created + Duration::days(95);
        assert_eq!(IdTimestampEstimator.estimate(id, now), "3 months");
    }

    #[test]
    fn test_singular_and_zero_counts() {
        let created = Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap();
        let id = ts(created.timestamp() as u64);

        assert_eq!(IdTimestampEstimator.estimate(id, created), "0 month");
        assert_eq!(
            IdTimestampEstimator.estimate(id, created + Duration::days(45)),
            "1 month"
        );
        assert_eq!(
            IdTimestampEstimator.estimate(id, created + Duration::days(400)),
            "1 year"
        );
        assert_eq!(
            IdTimestampEstimator.estimate(id, created + Duration::days(800)),
            "2 years"
        );
    }

    #[test]
    fn test_exactly_365_days_is_still_months() {
        let created = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let id = ts(created.timestamp() as u64);
        let now = created + Duration::days(365);
        assert_eq!(IdTimestampEstimator.estimate(id, now), "12 months");
    }

    #[test]
    fn test_future_creation_is_unknown() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        // Upper bits decode to 2106.
        assert_eq!(IdTimestampEstimator.estimate(u64::MAX, now), UNKNOWN_AGE);
    }

    #[test]
    fn test_small_ids_decode_to_epoch() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(IdTimestampEstimator.estimate(0, now), "54 years");
        assert_eq!(IdTimestampEstimator.estimate(123_456_789, now), "54 years");
    }

    #[test]
    fn test_output_always_well_formed() {
        let now = Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap();
        let ids = [
            0,
            1,
            5_000_000_000,
            ts(1_600_000_000),
            ts(1_752_000_000),
            ts(u32::MAX as u64),
            u64::MAX / 3,
            u64::MAX,
        ];
        for id in ids {
            let label = IdTimestampEstimator.estimate(id, now);
            assert!(is_well_formed(&label), "bad label {:?} for id {}", label, id);
        }
    }

    #[test]
    fn test_day_count_monotonic_in_now() {
        let id = ts(1_500_000_000);
        let start = Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap();
        let mut previous = None;
        for step in 0..200 {
            let now = start + Duration::days(step * 7);
            let days = IdTimestampEstimator::elapsed_days(id, now);
            if let (Some(prev), Some(cur)) = (previous, days) {
                assert!(cur >= prev);
            }
            // Once known, it never drops back to unknown.
            if previous.is_some() {
                assert!(days.is_some());
            }
            previous = days.or(previous);
        }
    }
}
