use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Extension, Json, Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use fintrack_core::goals::{GoalUpdate, GoalsQuery, NewGoal};

use crate::api::shared::ApiResponse;
use crate::auth::AuthedUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", post(create_goal).get(list_goals))
        .route("/goals/summary", get(goals_summary))
        .route(
            "/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
        .route("/goals/{id}/progress", patch(update_progress))
        .route("/goals/{id}/toggle", patch(toggle_active))
        .route("/goals/{id}/sync", post(sync_goal))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
    Json(payload): Json<NewGoal>,
) -> ApiResult<impl IntoResponse> {
    let view = state.goal_service.create_goal(&authed.id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(view, "goal created")),
    ))
}

async fn list_goals(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
    Query(query): Query<GoalsQuery>,
) -> ApiResult<impl IntoResponse> {
    let views = state.goal_service.list_goals(&authed.id, query).await?;
    Ok(Json(ApiResponse::new(views)))
}

async fn goals_summary(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
) -> ApiResult<impl IntoResponse> {
    let summary = state.goal_service.get_goals_summary(&authed.id)?;
    Ok(Json(ApiResponse::new(summary)))
}

async fn get_goal(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let view = state.goal_service.get_goal(&authed.id, &id)?;
    Ok(Json(ApiResponse::new(view)))
}

async fn update_goal(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
    Path(id): Path<String>,
    Json(payload): Json<GoalUpdate>,
) -> ApiResult<impl IntoResponse> {
    let view = state.goal_service.update_goal(&authed.id, &id, payload).await?;
    Ok(Json(ApiResponse::with_message(view, "goal updated")))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProgressPayload {
    current_amount: Decimal,
}

/// Manual override of the tracked amount. The next synchronizer run will
/// reconcile it back to the ledger sum.
async fn update_progress(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
    Path(id): Path<String>,
    Json(payload): Json<ProgressPayload>,
) -> ApiResult<impl IntoResponse> {
    let view = state
        .goal_service
        .update_progress(&authed.id, &id, payload.current_amount)
        .await?;
    Ok(Json(ApiResponse::with_message(view, "progress updated")))
}

async fn toggle_active(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let view = state.goal_service.toggle_active(&authed.id, &id).await?;
    let message = if view.goal.is_active {
        "goal activated"
    } else {
        "goal deactivated"
    };
    Ok(Json(ApiResponse::with_message(view, message)))
}

async fn delete_goal(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.goal_service.delete_goal(&authed.id, &id).await?;
    Ok(Json(ApiResponse::message_only("goal deleted")))
}

async fn sync_goal(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let view = state.goal_service.sync_goal(&authed.id, &id).await?;
    Ok(Json(ApiResponse::with_message(view, "goal synchronized")))
}
