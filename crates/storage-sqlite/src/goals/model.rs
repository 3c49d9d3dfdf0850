//! Database models for goals.
//!
//! Like transactions, monetary columns are TEXT parsed to `Decimal` at this
//! boundary; an unparseable stored amount reads as zero.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use fintrack_core::goals::{Goal, GoalPeriod};
use fintrack_core::transactions::FlowKind;

use crate::errors::StorageError;
use crate::transactions::decode_amount;

#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub target_amount: String,
    pub current_amount: String,
    pub period: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub is_active: bool,
    pub notifications_enabled: bool,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<GoalDB> for Goal {
    type Error = StorageError;

    fn try_from(db: GoalDB) -> Result<Self, Self::Error> {
        let kind = FlowKind::parse(&db.kind)
            .ok_or_else(|| StorageError::Decode(format!("unknown goal kind: {}", db.kind)))?;
        let period = GoalPeriod::parse(&db.period)
            .ok_or_else(|| StorageError::Decode(format!("unknown goal period: {}", db.period)))?;
        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            kind,
            title: db.title,
            description: db.description,
            category: db.category,
            target_amount: decode_amount(&db.target_amount),
            current_amount: decode_amount(&db.current_amount),
            period,
            start_date: db.start_date,
            end_date: db.end_date,
            is_active: db.is_active,
            notifications_enabled: db.notifications_enabled,
            color: db.color,
            icon: db.icon,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<Goal> for GoalDB {
    fn from(domain: Goal) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            kind: domain.kind.as_str().to_string(),
            title: domain.title,
            description: domain.description,
            category: domain.category,
            target_amount: domain.target_amount.to_string(),
            current_amount: domain.current_amount.to_string(),
            period: domain.period.as_str().to_string(),
            start_date: domain.start_date,
            end_date: domain.end_date,
            is_active: domain.is_active,
            notifications_enabled: domain.notifications_enabled,
            color: domain.color,
            icon: domain.icon,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
