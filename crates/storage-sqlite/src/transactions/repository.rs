use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use fintrack_core::transactions::{
    FlowKind, NewTransaction, Transaction, TransactionFilters, TransactionRepositoryTrait,
};
use fintrack_core::Result;

use super::model::TransactionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::transactions;

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }

    fn decode_rows(rows: Vec<TransactionDB>) -> Result<Vec<Transaction>> {
        rows.into_iter()
            .map(|row| Transaction::try_from(row).map_err(Into::into))
            .collect()
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn list_transactions(
        &self,
        user_id: &str,
        filters: &TransactionFilters,
    ) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = transactions::table
            .filter(transactions::user_id.eq(user_id))
            .into_boxed();

        if let Some(kind) = filters.kind {
            query = query.filter(transactions::kind.eq(kind.as_str()));
        }
        if let Some(category) = &filters.category {
            query = query.filter(transactions::category.eq(category.clone()));
        }
        if let Some(from) = filters.from {
            query = query.filter(transactions::transaction_date.ge(from));
        }
        if let Some(to) = filters.to {
            query = query.filter(transactions::transaction_date.le(to));
        }

        let rows = query
            .order(transactions::transaction_date.desc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::decode_rows(rows)
    }

    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;
        let row = transactions::table
            .filter(transactions::id.eq(transaction_id))
            .filter(transactions::user_id.eq(user_id))
            .first::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Transaction::try_from(row)?)
    }

    fn transactions_in_window(
        &self,
        user_id: &str,
        category: &str,
        kind: FlowKind,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .filter(transactions::user_id.eq(user_id))
            .filter(transactions::category.eq(category))
            .filter(transactions::kind.eq(kind.as_str()))
            .filter(transactions::transaction_date.between(start, end))
            .order(transactions::transaction_date.asc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::decode_rows(rows)
    }

    async fn insert_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn| -> Result<Transaction> {
                let now = Utc::now().naive_utc();
                let row = TransactionDB {
                    id: Uuid::new_v4().to_string(),
                    user_id,
                    kind: new_transaction.kind.as_str().to_string(),
                    category: new_transaction.category,
                    amount: new_transaction.amount.to_string(),
                    description: new_transaction.description,
                    transaction_date: new_transaction.date.unwrap_or(now),
                    created_at: now,
                };
                let inserted = diesel::insert_into(transactions::table)
                    .values(&row)
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Transaction::try_from(inserted)?)
            })
            .await
    }

    async fn save_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        let row = TransactionDB::from(transaction);
        self.writer
            .exec(move |conn| -> Result<Transaction> {
                let affected = diesel::update(
                    transactions::table
                        .filter(transactions::id.eq(row.id.clone()))
                        .filter(transactions::user_id.eq(row.user_id.clone())),
                )
                .set(&row)
                .execute(conn)
                .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(StorageError::QueryFailed(diesel::result::Error::NotFound).into());
                }
                Ok(Transaction::try_from(row)?)
            })
            .await
    }

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let transaction_id = transaction_id.to_string();
        self.writer
            .exec(move |conn| -> Result<usize> {
                Ok(diesel::delete(
                    transactions::table
                        .filter(transactions::id.eq(transaction_id))
                        .filter(transactions::user_id.eq(user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
