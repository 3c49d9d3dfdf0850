//! Pure progress computation for goals.
//!
//! Total over its input domain: no validation, no side effects, no clock
//! access. Callers pass `now` explicitly, which keeps the status derivation
//! deterministic and testable.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::goals_model::{Goal, GoalStatus};

/// Derived fields for one goal at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    /// Percentage of target reached, in `[0, 100]`.
    pub progress: Decimal,
    /// `max(target - current, 0)`.
    pub remaining_amount: Decimal,
    pub status: GoalStatus,
}

/// Percentage of `target` covered by `current`, capped at 100.
///
/// A zero target yields 0 rather than dividing; negative inputs are the
/// caller's responsibility and are only clamped, not rejected.
pub fn progress_percent(current: Decimal, target: Decimal) -> Decimal {
    if target.is_zero() {
        return Decimal::ZERO;
    }
    let pct = current / target * dec!(100);
    pct.clamp(Decimal::ZERO, dec!(100)).round_dp(2)
}

/// `max(target - current, 0)`.
pub fn remaining_amount(current: Decimal, target: Decimal) -> Decimal {
    (target - current).max(Decimal::ZERO)
}

/// Status precedence, first match wins: inactive, expired, completed, active.
/// The activity flag dominates, so an inactive-but-completed goal reports
/// `inactive`.
pub fn derive_status(goal: &Goal, now: NaiveDateTime) -> GoalStatus {
    if !goal.is_active {
        GoalStatus::Inactive
    } else if now > goal.end_date {
        GoalStatus::Expired
    } else if goal.current_amount >= goal.target_amount {
        GoalStatus::Completed
    } else {
        GoalStatus::Active
    }
}

/// Evaluates all derived fields for `goal` at `now`.
pub fn evaluate(goal: &Goal, now: NaiveDateTime) -> GoalProgress {
    GoalProgress {
        progress: progress_percent(goal.current_amount, goal.target_amount),
        remaining_amount: remaining_amount(goal.current_amount, goal.target_amount),
        status: derive_status(goal, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::goals_model::GoalPeriod;
    use crate::transactions::FlowKind;
    use chrono::NaiveDate;

    fn sample_goal(current: Decimal, target: Decimal, is_active: bool) -> Goal {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap().and_hms_opt(23, 59, 59).unwrap();
        Goal {
            id: "g-1".to_string(),
            user_id: "u-1".to_string(),
            kind: FlowKind::Expense,
            title: "Groceries".to_string(),
            description: None,
            category: "Groceries".to_string(),
            target_amount: target,
            current_amount: current,
            period: GoalPeriod::Monthly,
            start_date: start,
            end_date: end,
            is_active,
            notifications_enabled: false,
            color: None,
            icon: None,
            created_at: start,
            updated_at: start,
        }
    }

    fn mid_window() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn past_window() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn progress_is_bounded() {
        assert_eq!(progress_percent(dec!(600), dec!(1000)), dec!(60));
        assert_eq!(progress_percent(dec!(1100), dec!(1000)), dec!(100));
        assert_eq!(progress_percent(dec!(0), dec!(1000)), dec!(0));
    }

    #[test]
    fn zero_target_means_zero_progress() {
        assert_eq!(progress_percent(dec!(500), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn remaining_never_negative() {
        assert_eq!(remaining_amount(dec!(600), dec!(1000)), dec!(400));
        assert_eq!(remaining_amount(dec!(1100), dec!(1000)), Decimal::ZERO);
        assert_eq!(remaining_amount(dec!(1000), dec!(1000)), Decimal::ZERO);
    }

    #[test]
    fn status_active_when_under_target_inside_window() {
        let goal = sample_goal(dec!(600), dec!(1000), true);
        assert_eq!(derive_status(&goal, mid_window()), GoalStatus::Active);
    }

    #[test]
    fn status_completed_when_target_reached() {
        let goal = sample_goal(dec!(1000), dec!(1000), true);
        assert_eq!(derive_status(&goal, mid_window()), GoalStatus::Completed);
    }

    #[test]
    fn status_expired_past_end_date() {
        let goal = sample_goal(dec!(1000), dec!(1000), true);
        assert_eq!(derive_status(&goal, past_window()), GoalStatus::Expired);
    }

    #[test]
    fn inactive_dominates_everything() {
        // Inactive wins even over completed and expired.
        let goal = sample_goal(dec!(2000), dec!(1000), false);
        assert_eq!(derive_status(&goal, mid_window()), GoalStatus::Inactive);
        assert_eq!(derive_status(&goal, past_window()), GoalStatus::Inactive);
    }

    #[test]
    fn evaluate_combines_all_fields() {
        let goal = sample_goal(dec!(1100), dec!(1000), true);
        let derived = evaluate(&goal, mid_window());
        assert_eq!(derived.progress, dec!(100));
        assert_eq!(derived.remaining_amount, Decimal::ZERO);
        assert_eq!(derived.status, GoalStatus::Completed);
    }
}
