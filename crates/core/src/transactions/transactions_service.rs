use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};
use crate::transactions::transactions_model::{
    NewTransaction, Transaction, TransactionFilters, TransactionUpdate,
};
use crate::transactions::transactions_traits::{
    TransactionRepositoryTrait, TransactionServiceTrait,
};

pub struct TransactionService {
    transaction_repo: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(transaction_repo: Arc<dyn TransactionRepositoryTrait>) -> Self {
        TransactionService { transaction_repo }
    }

    fn validate_amount(amount: Decimal) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount(amount.to_string()).into());
        }
        Ok(())
    }

    fn validate_category(category: &str) -> Result<()> {
        if category.trim().is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn list_transactions(
        &self,
        user_id: &str,
        filters: TransactionFilters,
    ) -> Result<Vec<Transaction>> {
        self.transaction_repo.list_transactions(user_id, &filters)
    }

    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction> {
        self.transaction_repo.get_transaction(user_id, transaction_id)
    }

    async fn create_transaction(
        &self,
        user_id: &str,
        mut new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        Self::validate_amount(new_transaction.amount)?;
        Self::validate_category(&new_transaction.category)?;
        if new_transaction.date.is_none() {
            new_transaction.date = Some(Utc::now().naive_utc());
        }
        self.transaction_repo
            .insert_transaction(user_id, new_transaction)
            .await
    }

    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction> {
        let mut transaction = self.transaction_repo.get_transaction(user_id, transaction_id)?;

        if let Some(kind) = update.kind {
            transaction.kind = kind;
        }
        if let Some(category) = update.category {
            transaction.category = category;
        }
        if let Some(amount) = update.amount {
            transaction.amount = amount;
        }
        if let Some(description) = update.description {
            transaction.description = Some(description);
        }
        if let Some(date) = update.date {
            transaction.date = date;
        }

        Self::validate_amount(transaction.amount)?;
        Self::validate_category(&transaction.category)?;
        self.transaction_repo.save_transaction(transaction).await
    }

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<()> {
        // Surfaces NotFound for absent/foreign rows before attempting the delete.
        self.transaction_repo.get_transaction(user_id, transaction_id)?;
        self.transaction_repo
            .delete_transaction(user_id, transaction_id)
            .await?;
        Ok(())
    }
}
