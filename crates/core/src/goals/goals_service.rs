use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};
use crate::goals::goals_model::{
    Goal, GoalStatus, GoalUpdate, GoalView, GoalsQuery, GoalsSummary, NewGoal,
};
use crate::goals::goals_progress;
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::transactions::TransactionRepositoryTrait;

/// Goal business logic: validation, the progress synchronizer, and the
/// derived-field computation on every read path.
pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    transaction_repo: Arc<dyn TransactionRepositoryTrait>,
}

impl GoalService {
    pub fn new(
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        transaction_repo: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        GoalService {
            goal_repo,
            transaction_repo,
        }
    }

    fn validate_target(target_amount: Decimal) -> Result<()> {
        if target_amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount(target_amount.to_string()).into());
        }
        Ok(())
    }

    fn validate_window(start: NaiveDateTime, end: NaiveDateTime) -> Result<()> {
        if end <= start {
            return Err(ValidationError::InvalidDateRange.into());
        }
        Ok(())
    }

    fn view(goal: Goal, now: NaiveDateTime) -> GoalView {
        let derived = goals_progress::evaluate(&goal, now);
        GoalView {
            goal,
            progress: derived.progress,
            remaining_amount: derived.remaining_amount,
            status: derived.status,
        }
    }

    /// Recomputes `current_amount` from the ledger and persists it when it
    /// differs from the stored value. Returns the recomputed sum. At most
    /// one write per invocation; no write when nothing changed.
    async fn sync_amount(&self, goal: &Goal) -> Result<Decimal> {
        let transactions = self.transaction_repo.transactions_in_window(
            &goal.user_id,
            &goal.category,
            goal.kind,
            goal.start_date,
            goal.end_date,
        )?;
        let total: Decimal = transactions.iter().map(|t| t.amount).sum();
        if total != goal.current_amount {
            debug!(
                "goal {} current amount {} -> {}",
                goal.id, goal.current_amount, total
            );
            self.goal_repo
                .set_current_amount(&goal.user_id, &goal.id, total)
                .await?;
        }
        Ok(total)
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn create_goal(&self, user_id: &str, mut new_goal: NewGoal) -> Result<GoalView> {
        Self::validate_target(new_goal.target_amount)?;
        if new_goal.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }
        if new_goal.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
        }
        let now = Utc::now().naive_utc();
        let start = *new_goal.start_date.get_or_insert(now);
        Self::validate_window(start, new_goal.end_date)?;

        let goal = self.goal_repo.insert_goal(user_id, new_goal).await?;
        Ok(Self::view(goal, now))
    }

    async fn list_goals(&self, user_id: &str, query: GoalsQuery) -> Result<Vec<GoalView>> {
        let mut goals = self.goal_repo.list_goals(user_id)?;

        // Sync pass over active goals before answering. Inactive goals are
        // skipped entirely. Any failure aborts the whole listing.
        for goal in goals.iter_mut().filter(|g| g.is_active) {
            goal.current_amount = self.sync_amount(goal).await?;
        }

        let now = Utc::now().naive_utc();
        let views = goals
            .into_iter()
            .filter(|g| query.kind.map_or(true, |k| g.kind == k))
            .filter(|g| query.is_active.map_or(true, |a| g.is_active == a))
            .map(|g| Self::view(g, now))
            .filter(|v| query.status.map_or(true, |s| v.status == s))
            .collect();
        Ok(views)
    }

    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<GoalView> {
        let goal = self.goal_repo.get_goal(user_id, goal_id)?;
        Ok(Self::view(goal, Utc::now().naive_utc()))
    }

    fn get_goals_summary(&self, user_id: &str) -> Result<GoalsSummary> {
        let goals = self.goal_repo.list_goals(user_id)?;
        let now = Utc::now().naive_utc();

        let mut summary = GoalsSummary {
            total_goals: goals.len(),
            ..Default::default()
        };
        for goal in goals {
            summary.total_target_amount += goal.target_amount;
            summary.total_current_amount += goal.current_amount;
            match goals_progress::derive_status(&goal, now) {
                GoalStatus::Active => summary.active += 1,
                GoalStatus::Completed => summary.completed += 1,
                GoalStatus::Expired => summary.expired += 1,
                GoalStatus::Inactive => summary.inactive += 1,
            }
        }
        summary.overall_progress = goals_progress::progress_percent(
            summary.total_current_amount,
            summary.total_target_amount,
        );
        Ok(summary)
    }

    async fn update_goal(
        &self,
        user_id: &str,
        goal_id: &str,
        update: GoalUpdate,
    ) -> Result<GoalView> {
        let mut goal = self.goal_repo.get_goal(user_id, goal_id)?;

        if let Some(kind) = update.kind {
            goal.kind = kind;
        }
        if let Some(title) = update.title {
            goal.title = title;
        }
        if let Some(description) = update.description {
            goal.description = Some(description);
        }
        if let Some(category) = update.category {
            goal.category = category;
        }
        if let Some(target_amount) = update.target_amount {
            goal.target_amount = target_amount;
        }
        if let Some(period) = update.period {
            goal.period = period;
        }
        if let Some(start_date) = update.start_date {
            goal.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            goal.end_date = end_date;
        }
        if let Some(notifications_enabled) = update.notifications_enabled {
            goal.notifications_enabled = notifications_enabled;
        }
        if let Some(color) = update.color {
            goal.color = Some(color);
        }
        if let Some(icon) = update.icon {
            goal.icon = Some(icon);
        }

        Self::validate_target(goal.target_amount)?;
        Self::validate_window(goal.start_date, goal.end_date)?;

        let saved = self.goal_repo.save_goal(goal).await?;
        Ok(Self::view(saved, Utc::now().naive_utc()))
    }

    async fn update_progress(
        &self,
        user_id: &str,
        goal_id: &str,
        current_amount: Decimal,
    ) -> Result<GoalView> {
        if current_amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount(current_amount.to_string()).into());
        }
        // Ownership check first so foreign goals surface as not found.
        let mut goal = self.goal_repo.get_goal(user_id, goal_id)?;
        self.goal_repo
            .set_current_amount(user_id, goal_id, current_amount)
            .await?;
        goal.current_amount = current_amount;
        Ok(Self::view(goal, Utc::now().naive_utc()))
    }

    async fn toggle_active(&self, user_id: &str, goal_id: &str) -> Result<GoalView> {
        let mut goal = self.goal_repo.get_goal(user_id, goal_id)?;
        goal.is_active = !goal.is_active;
        let saved = self.goal_repo.save_goal(goal).await?;
        Ok(Self::view(saved, Utc::now().naive_utc()))
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<()> {
        self.goal_repo.get_goal(user_id, goal_id)?;
        self.goal_repo.delete_goal(user_id, goal_id).await?;
        Ok(())
    }

    async fn sync_goal(&self, user_id: &str, goal_id: &str) -> Result<GoalView> {
        // Explicit sync runs regardless of the activity flag.
        let mut goal = self.goal_repo.get_goal(user_id, goal_id)?;
        goal.current_amount = self.sync_amount(&goal).await?;
        Ok(Self::view(goal, Utc::now().naive_utc()))
    }
}
