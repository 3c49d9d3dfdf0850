use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, GoalView, GoalsQuery, GoalsSummary, NewGoal};

/// Trait for goal repository operations.
///
/// All lookups are scoped by `user_id`; a goal owned by another user is
/// reported as not found.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn list_goals(&self, user_id: &str) -> Result<Vec<Goal>>;

    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal>;

    async fn insert_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;

    /// Persists a full goal row; the row is matched by id and owner.
    async fn save_goal(&self, goal: Goal) -> Result<Goal>;

    /// Writes only `current_amount` (and the updated timestamp). Used by the
    /// synchronizer so a sync touches at most one column set.
    async fn set_current_amount(
        &self,
        user_id: &str,
        goal_id: &str,
        amount: Decimal,
    ) -> Result<()>;

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<GoalView>;

    /// Lists goals after running the synchronizer over every active goal.
    /// A sync failure on any goal fails the whole listing.
    async fn list_goals(&self, user_id: &str, query: GoalsQuery) -> Result<Vec<GoalView>>;

    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<GoalView>;

    fn get_goals_summary(&self, user_id: &str) -> Result<GoalsSummary>;

    async fn update_goal(
        &self,
        user_id: &str,
        goal_id: &str,
        update: GoalUpdate,
    ) -> Result<GoalView>;

    /// Manual override: sets `current_amount` directly, bypassing the ledger.
    async fn update_progress(
        &self,
        user_id: &str,
        goal_id: &str,
        current_amount: Decimal,
    ) -> Result<GoalView>;

    async fn toggle_active(&self, user_id: &str, goal_id: &str) -> Result<GoalView>;

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<()>;

    /// Explicit synchronizer run for one goal, regardless of `is_active`.
    async fn sync_goal(&self, user_id: &str, goal_id: &str) -> Result<GoalView>;
}
