/*
* Utility Bill History API Routes
* -------------------------------
* Read-only analytics over per-user utility-bill payment history. Four
* endpoints, one query parameter, no writes.
*
* GET /api/utility-bill-history/payment-consistency - on-time % and early/late averages
* GET /api/utility-bill-history/payment-defaults    - missed payments and longest on-time streak
* GET /api/utility-bill-history/account-history     - per-account age in months
* GET /api/utility-bill-history/payment-amounts     - per-utility average amounts and trends
*
* Every endpoint takes a `userId` query parameter and answers 404 with
* {"error":"User not found"} when the user is not in the store. Handlers
* are stateless; the store is shared read-only behind an Arc, so there is
* nothing to lock.
*/

use std::sync::Arc;

use axum::extract::{Query, Request, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::core::analytics::{
    AccountHistory, BillAnalytics, PaymentAmounts, PaymentConsistency, PaymentDefaults,
};
use crate::core::errors::HistoryError;

#[derive(Clone)]
pub struct AppState {
    pub analytics: BillAnalytics,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

impl UserQuery {
    // An absent userId never matches a stored user, so it falls through
    // to the same 404 as an unknown id.
    fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or("")
    }
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/utility-bill-history/payment-consistency",
            get(get_payment_consistency),
        )
        .route(
            "/api/utility-bill-history/payment-defaults",
            get(get_payment_defaults),
        )
        .route(
            "/api/utility-bill-history/account-history",
            get(get_account_history),
        )
        .route(
            "/api/utility-bill-history/payment-amounts",
            get(get_payment_amounts),
        )
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[axum::debug_handler]
async fn get_payment_consistency(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<PaymentConsistency>, HistoryError> {
    debug!(user_id = query.user_id(), "payment consistency requested");
    let summary = state.analytics.payment_consistency(query.user_id()).await?;
    Ok(Json(summary))
}

#[axum::debug_handler]
async fn get_payment_defaults(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<PaymentDefaults>, HistoryError> {
    debug!(user_id = query.user_id(), "payment defaults requested");
    let summary = state.analytics.payment_defaults(query.user_id()).await?;
    Ok(Json(summary))
}

#[axum::debug_handler]
async fn get_account_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<AccountHistory>, HistoryError> {
    debug!(user_id = query.user_id(), "account history requested");
    let summary = state.analytics.account_history(query.user_id()).await?;
    Ok(Json(summary))
}

#[axum::debug_handler]
async fn get_payment_amounts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<PaymentAmounts>, HistoryError> {
    debug!(user_id = query.user_id(), "payment amounts requested");
    let summary = state.analytics.payment_amounts(query.user_id()).await?;
    Ok(Json(summary))
}

async fn fallback_handler(req: Request) -> StatusCode {
    warn!(path = %req.uri().path(), "no route matched");
    StatusCode::NOT_FOUND
}
