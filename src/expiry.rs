//! Expiration policy: relative-to-absolute expiry computation and the
//! decode-time expiry check.

use chrono::Utc;
use serde_json::Value;

use crate::types::Claims;

/// Relative expiration specification for
/// [`encode_with_expiry`](crate::encode_with_expiry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiration {
    /// Expire `n` seconds from now.
    In(i64),
    /// Expire `offset` seconds past the start of the current hour.
    Hourly(i64),
    /// Expire `offset` seconds past the start of the current day.
    Daily(i64),
}

/// Current unix time in whole seconds.
pub(crate) fn unix_now() -> i64 {
    Utc::now().timestamp()
}

/// Compute the absolute expiry epoch for `spec` relative to `now`.
///
/// `Hourly` and `Daily` anchor to the containing hour or day, so every call
/// within the same hour (or day) produces the same result regardless of
/// where `now` falls inside it.
pub(crate) fn compute(spec: Expiration, now: i64) -> i64 {
    match spec {
        Expiration::In(seconds) => now + seconds,
        Expiration::Hourly(offset) => now - now.rem_euclid(3600) + offset,
        Expiration::Daily(offset) => now - now.rem_euclid(86_400) + offset,
    }
}

/// Whether the claims set is expired at `now`.
///
/// A missing `exp` claim never expires; a non-integer `exp` is ignored.
/// An `exp` exactly equal to `now` counts as expired: only a strictly
/// positive number of remaining seconds keeps a token alive.
pub(crate) fn is_expired(claims: &Claims, now: i64) -> bool {
    match claims.get("exp").and_then(Value::as_i64) {
        Some(exp) => exp - now <= 0,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn relative_seconds_add_to_now() {
        assert_eq!(compute(Expiration::In(600), 1_700_000_000), 1_700_000_600);
        assert_eq!(compute(Expiration::In(0), 1_700_000_000), 1_700_000_000);
    }

    #[test]
    fn hourly_anchors_to_start_of_hour() {
        // 2023-11-14T22:13:20Z; the containing hour starts at 22:00:00.
        let now = 1_700_000_000;
        let hour_start = now - now % 3600;
        assert_eq!(compute(Expiration::Hourly(1800), now), hour_start + 1800);
    }

    #[test]
    fn hourly_is_stable_within_the_hour() {
        let hour_start = 1_699_999_200; // a multiple of 3600
        let early = compute(Expiration::Hourly(1800), hour_start + 7);
        let late = compute(Expiration::Hourly(1800), hour_start + 3500);
        assert_eq!(early, late);
        assert_eq!(early, hour_start + 1800);
    }

    #[test]
    fn daily_anchors_to_start_of_day() {
        let day_start = 1_699_920_000; // a multiple of 86400
        let morning = compute(Expiration::Daily(600), day_start + 3601);
        let evening = compute(Expiration::Daily(600), day_start + 80_000);
        assert_eq!(morning, day_start + 600);
        assert_eq!(morning, evening);
    }

    #[test]
    fn expiry_boundary_is_strict() {
        let now = 1_700_000_000;
        let at = |exp: i64| -> Claims { [("exp", json!(exp))].into_iter().collect() };

        assert!(is_expired(&at(now - 1), now));
        assert!(is_expired(&at(now), now));
        assert!(!is_expired(&at(now + 1), now));
    }

    #[test]
    fn missing_exp_never_expires() {
        let claims: Claims = [("sub", json!("user-1"))].into_iter().collect();
        assert!(!is_expired(&claims, i64::MAX));
    }

    #[test]
    fn non_integer_exp_is_ignored() {
        let claims: Claims = [("exp", json!("tomorrow"))].into_iter().collect();
        assert!(!is_expired(&claims, 1_700_000_000));
    }
}
