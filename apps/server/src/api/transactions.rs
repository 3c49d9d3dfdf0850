use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};

use fintrack_core::transactions::{NewTransaction, TransactionFilters, TransactionUpdate};

use crate::api::shared::ApiResponse;
use crate::auth::AuthedUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transactions", post(create_transaction).get(list_transactions))
        .route(
            "/transactions/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}

async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
    Json(payload): Json<NewTransaction>,
) -> ApiResult<impl IntoResponse> {
    let transaction = state
        .transaction_service
        .create_transaction(&authed.id, payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(transaction, "transaction recorded")),
    ))
}

async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
    Query(filters): Query<TransactionFilters>,
) -> ApiResult<impl IntoResponse> {
    let transactions = state
        .transaction_service
        .list_transactions(&authed.id, filters)?;
    Ok(Json(ApiResponse::new(transactions)))
}

async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let transaction = state.transaction_service.get_transaction(&authed.id, &id)?;
    Ok(Json(ApiResponse::new(transaction)))
}

async fn update_transaction(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
    Path(id): Path<String>,
    Json(payload): Json<TransactionUpdate>,
) -> ApiResult<impl IntoResponse> {
    let transaction = state
        .transaction_service
        .update_transaction(&authed.id, &id, payload)
        .await?;
    Ok(Json(ApiResponse::with_message(transaction, "transaction updated")))
}

async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state
        .transaction_service
        .delete_transaction(&authed.id, &id)
        .await?;
    Ok(Json(ApiResponse::message_only("transaction deleted")))
}
