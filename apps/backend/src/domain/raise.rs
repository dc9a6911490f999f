//! Raise arithmetic: the next amount a bid moves to and its cap check.

use crate::errors::domain::DomainError;

/// The amount a raise would take the bid to: current plus the configured
/// increment. Rejected with `BidTooHigh` when it would exceed the team's
/// affordability ceiling.
pub fn next_raise(current: i64, min_increment: i64, max_allowed: i64) -> Result<i64, DomainError> {
    let next = current + min_increment;
    if next > max_allowed {
        return Err(DomainError::BidTooHigh { max_allowed });
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_raises_step_by_increment() {
        // seeded at 2500, increment 500
        assert_eq!(next_raise(2500, 500, 65_000).unwrap(), 3000);
        assert_eq!(next_raise(3000, 500, 65_000).unwrap(), 3500);
    }

    #[test]
    fn raise_at_exact_cap_is_allowed() {
        assert_eq!(next_raise(1500, 500, 2000).unwrap(), 2000);
    }

    #[test]
    fn raise_past_cap_reports_ceiling() {
        let err = next_raise(2000, 500, 2000).unwrap_err();
        assert!(matches!(err, DomainError::BidTooHigh { max_allowed: 2000 }));
    }

    #[test]
    fn zero_cap_rejects_any_raise() {
        assert!(next_raise(2500, 500, 0).is_err());
    }
}
