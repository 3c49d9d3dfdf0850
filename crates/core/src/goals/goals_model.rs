//! Goal domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::FlowKind;
use crate::utils::{serde_datetime, serde_datetime_opt};

/// How a goal's date window was chosen. Descriptive only; no computation
/// depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Custom,
}

impl Default for GoalPeriod {
    fn default() -> Self {
        GoalPeriod::Custom
    }
}

impl GoalPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalPeriod::Daily => "daily",
            GoalPeriod::Weekly => "weekly",
            GoalPeriod::Monthly => "monthly",
            GoalPeriod::Yearly => "yearly",
            GoalPeriod::Custom => "custom",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "daily" => Some(GoalPeriod::Daily),
            "weekly" => Some(GoalPeriod::Weekly),
            "monthly" => Some(GoalPeriod::Monthly),
            "yearly" => Some(GoalPeriod::Yearly),
            "custom" => Some(GoalPeriod::Custom),
            _ => None,
        }
    }
}

/// Derived lifecycle state of a goal. Never stored; recomputed on every read
/// so it can never go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Inactive,
    Expired,
    Completed,
    Active,
}

/// Domain model for a goal as persisted. Derived fields (progress,
/// remaining amount, status) live on [`GoalView`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: FlowKind,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub period: GoalPeriod,
    #[serde(with = "serde_datetime")]
    pub start_date: NaiveDateTime,
    #[serde(with = "serde_datetime")]
    pub end_date: NaiveDateTime,
    pub is_active: bool,
    /// Descriptive only; no computation depends on it.
    pub notifications_enabled: bool,
    pub color: Option<String>,
    pub icon: Option<String>,
    #[serde(with = "serde_datetime")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serde_datetime")]
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(rename = "type")]
    pub kind: FlowKind,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub period: GoalPeriod,
    /// Defaults to now when absent.
    #[serde(default, with = "serde_datetime_opt")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(with = "serde_datetime")]
    pub end_date: NaiveDateTime,
    #[serde(default)]
    pub notifications_enabled: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Partial update; `None` fields are left untouched. `current_amount` and
/// `is_active` have dedicated operations and are not part of this payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    #[serde(rename = "type")]
    pub kind: Option<FlowKind>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub target_amount: Option<Decimal>,
    pub period: Option<GoalPeriod>,
    #[serde(default, with = "serde_datetime_opt")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default, with = "serde_datetime_opt")]
    pub end_date: Option<NaiveDateTime>,
    pub notifications_enabled: Option<bool>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// A goal together with its derived fields, as returned by every read path.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalView {
    #[serde(flatten)]
    pub goal: Goal,
    pub progress: Decimal,
    pub remaining_amount: Decimal,
    pub status: GoalStatus,
}

/// Optional list filters. Status filtering happens in memory after the
/// derived fields are computed, since status is never stored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsQuery {
    #[serde(rename = "type")]
    pub kind: Option<FlowKind>,
    pub is_active: Option<bool>,
    pub status: Option<GoalStatus>,
}

/// Aggregate counts and totals across one user's goals.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalsSummary {
    pub total_goals: usize,
    pub active: usize,
    pub completed: usize,
    pub expired: usize,
    pub inactive: usize,
    pub total_target_amount: Decimal,
    pub total_current_amount: Decimal,
    /// Capped percentage across all targets, 0 when there are no targets.
    pub overall_progress: Decimal,
}
