//! Database models for transactions.
//!
//! Amounts are stored as TEXT and parsed to `Decimal` on the way out; a
//! missing or unparseable stored amount reads as zero so one bad row cannot
//! poison a ledger sum.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use fintrack_core::transactions::{FlowKind, Transaction};

use crate::errors::StorageError;

#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub description: Option<String>,
    pub transaction_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

pub(crate) fn decode_amount(raw: &str) -> Decimal {
    Decimal::from_str(raw).unwrap_or(Decimal::ZERO)
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = StorageError;

    fn try_from(db: TransactionDB) -> Result<Self, Self::Error> {
        let kind = FlowKind::parse(&db.kind)
            .ok_or_else(|| StorageError::Decode(format!("unknown transaction kind: {}", db.kind)))?;
        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            kind,
            category: db.category,
            amount: decode_amount(&db.amount),
            description: db.description,
            date: db.transaction_date,
            created_at: db.created_at,
        })
    }
}

impl From<Transaction> for TransactionDB {
    fn from(domain: Transaction) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            kind: domain.kind.as_str().to_string(),
            category: domain.category,
            amount: domain.amount.to_string(),
            description: domain.description,
            transaction_date: domain.date,
            created_at: domain.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn unparseable_amount_reads_as_zero() {
        assert_eq!(decode_amount("garbage"), Decimal::ZERO);
        assert_eq!(decode_amount(""), Decimal::ZERO);
        assert_eq!(decode_amount("12.50"), dec!(12.50));
    }
}
