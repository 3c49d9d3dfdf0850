use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use fintrack_core::goals::{Goal, GoalRepositoryTrait, NewGoal};
use fintrack_core::Result;

use super::model::GoalDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goals;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn list_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = goals::table
            .filter(goals::user_id.eq(user_id))
            .order(goals::created_at.asc())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|row| Goal::try_from(row).map_err(Into::into))
            .collect()
    }

    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        let row = goals::table
            .filter(goals::id.eq(goal_id))
            .filter(goals::user_id.eq(user_id))
            .first::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Goal::try_from(row)?)
    }

    async fn insert_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn| -> Result<Goal> {
                let now = Utc::now().naive_utc();
                let row = GoalDB {
                    id: Uuid::new_v4().to_string(),
                    user_id,
                    kind: new_goal.kind.as_str().to_string(),
                    title: new_goal.title,
                    description: new_goal.description,
                    category: new_goal.category,
                    target_amount: new_goal.target_amount.to_string(),
                    current_amount: Decimal::ZERO.to_string(),
                    period: new_goal.period.as_str().to_string(),
                    start_date: new_goal.start_date.unwrap_or(now),
                    end_date: new_goal.end_date,
                    is_active: true,
                    notifications_enabled: new_goal.notifications_enabled,
                    color: new_goal.color,
                    icon: new_goal.icon,
                    created_at: now,
                    updated_at: now,
                };
                let inserted = diesel::insert_into(goals::table)
                    .values(&row)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::try_from(inserted)?)
            })
            .await
    }

    async fn save_goal(&self, goal: Goal) -> Result<Goal> {
        let mut row = GoalDB::from(goal);
        row.updated_at = Utc::now().naive_utc();
        self.writer
            .exec(move |conn| -> Result<Goal> {
                let affected = diesel::update(
                    goals::table
                        .filter(goals::id.eq(row.id.clone()))
                        .filter(goals::user_id.eq(row.user_id.clone())),
                )
                .set(&row)
                .execute(conn)
                .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(StorageError::QueryFailed(diesel::result::Error::NotFound).into());
                }
                Ok(Goal::try_from(row)?)
            })
            .await
    }

    async fn set_current_amount(
        &self,
        user_id: &str,
        goal_id: &str,
        amount: Decimal,
    ) -> Result<()> {
        let user_id = user_id.to_string();
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn| -> Result<()> {
                let affected = diesel::update(
                    goals::table
                        .filter(goals::id.eq(goal_id))
                        .filter(goals::user_id.eq(user_id)),
                )
                .set((
                    goals::current_amount.eq(amount.to_string()),
                    goals::updated_at.eq(Utc::now().naive_utc()),
                ))
                .execute(conn)
                .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(StorageError::QueryFailed(diesel::result::Error::NotFound).into());
                }
                Ok(())
            })
            .await
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn| -> Result<usize> {
                Ok(diesel::delete(
                    goals::table
                        .filter(goals::id.eq(goal_id))
                        .filter(goals::user_id.eq(user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
