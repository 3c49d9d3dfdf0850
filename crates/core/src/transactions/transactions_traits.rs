use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::errors::Result;
use crate::transactions::transactions_model::{
    FlowKind, NewTransaction, Transaction, TransactionFilters,
};

/// Trait for transaction repository operations.
///
/// All lookups are scoped by `user_id`; a record owned by another user is
/// reported as not found.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    fn list_transactions(
        &self,
        user_id: &str,
        filters: &TransactionFilters,
    ) -> Result<Vec<Transaction>>;

    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction>;

    /// Transactions matching a goal's window: same user, category and kind,
    /// with `date` in `[start, end]` inclusive.
    fn transactions_in_window(
        &self,
        user_id: &str,
        category: &str,
        kind: FlowKind,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Transaction>>;

    async fn insert_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;

    /// Persists a full transaction row; the row is matched by id and owner.
    async fn save_transaction(&self, transaction: Transaction) -> Result<Transaction>;

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<usize>;
}

/// Trait for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn list_transactions(
        &self,
        user_id: &str,
        filters: TransactionFilters,
    ) -> Result<Vec<Transaction>>;

    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction>;

    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;

    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        update: crate::transactions::TransactionUpdate,
    ) -> Result<Transaction>;

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<()>;
}
