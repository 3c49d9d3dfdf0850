//! Transaction domain models.
//!
//! Transactions form the ledger that goal progress is computed from. The
//! goal synchronizer treats them as read-only; mutation happens only through
//! the transaction service.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::{serde_datetime, serde_datetime_opt};

/// Direction of a money flow. Shared between transactions and goals:
/// a transaction only counts toward a goal when both kinds match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Income,
    Expense,
}

impl FlowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowKind::Income => "income",
            FlowKind::Expense => "expense",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "income" => Some(FlowKind::Income),
            "expense" => Some(FlowKind::Expense),
            _ => None,
        }
    }
}

/// Domain model for a ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: FlowKind,
    pub category: String,
    pub amount: Decimal,
    pub description: Option<String>,
    #[serde(with = "serde_datetime")]
    pub date: NaiveDateTime,
    #[serde(with = "serde_datetime")]
    pub created_at: NaiveDateTime,
}

/// Input model for recording a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: FlowKind,
    pub category: String,
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to now when absent.
    #[serde(default, with = "serde_datetime_opt")]
    pub date: Option<NaiveDateTime>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    #[serde(rename = "type")]
    pub kind: Option<FlowKind>,
    pub category: Option<String>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    #[serde(default, with = "serde_datetime_opt")]
    pub date: Option<NaiveDateTime>,
}

/// Optional list filters, all combined with AND.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilters {
    #[serde(rename = "type")]
    pub kind: Option<FlowKind>,
    pub category: Option<String>,
    #[serde(default, with = "serde_datetime_opt")]
    pub from: Option<NaiveDateTime>,
    #[serde(default, with = "serde_datetime_opt")]
    pub to: Option<NaiveDateTime>,
}
