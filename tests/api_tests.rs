use std::sync::Arc;

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use utility_bill_history::{create_router, AppState, BillAnalytics, InMemoryStore};

fn app() -> Router {
    let store = Arc::new(InMemoryStore::sample());
    let analytics = BillAnalytics::new(store);
    create_router(Arc::new(AppState { analytics }))
}

async fn get_json(app: Router, uri: &str) -> Result<(StatusCode, Value)> {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    Ok((status, body))
}

#[tokio::test]
async fn test_payment_consistency_endpoint() -> Result<()> {
    let (status, body) = get_json(
        app(),
        "/api/utility-bill-history/payment-consistency?userId=userId1",
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["onTimePaymentPercentage"], 50.0);
    assert_eq!(body["averageDaysEarly"], 0.0);
    assert_eq!(body["averageDaysLate"], 2.5);
    Ok(())
}

#[tokio::test]
async fn test_payment_defaults_endpoint() -> Result<()> {
    let (status, body) = get_json(
        app(),
        "/api/utility-bill-history/payment-defaults?userId=userId1",
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["missedPayments"], 1);
    assert_eq!(body["longestOnTimeStreak"], 1);
    Ok(())
}

#[tokio::test]
async fn test_account_history_endpoint() -> Result<()> {
    let (status, body) = get_json(
        app(),
        "/api/utility-bill-history/account-history?userId=userId1",
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalNumberOfAccounts"], 3);
    assert_eq!(body["accountHistory"]["electricity"]["lengthInMonths"], 20);
    assert_eq!(body["accountHistory"]["water"]["lengthInMonths"], 15);
    assert_eq!(body["accountHistory"]["internet"]["lengthInMonths"], 20);
    Ok(())
}

#[tokio::test]
async fn test_payment_amounts_endpoint() -> Result<()> {
    let (status, body) = get_json(
        app(),
        "/api/utility-bill-history/payment-amounts?userId=userId1",
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["averageMonthlyPayments"]["electricity"], 105.0);
    assert_eq!(body["paymentTrends"]["electricity"], "stable");
    Ok(())
}

// The early payments in the second sample user show up in the early
// average but never in the late one.
#[tokio::test]
async fn test_payment_consistency_early_payer() -> Result<()> {
    let (status, body) = get_json(
        app(),
        "/api/utility-bill-history/payment-consistency?userId=userId2",
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["onTimePaymentPercentage"], 80.0);
    assert_eq!(body["averageDaysEarly"], 0.6);
    assert_eq!(body["averageDaysLate"], 0.6);
    Ok(())
}

// All four endpoints answer an unknown user with the same 404 body.
#[tokio::test]
async fn test_unknown_user_returns_uniform_404() -> Result<()> {
    let paths = [
        "/api/utility-bill-history/payment-consistency?userId=ghost",
        "/api/utility-bill-history/payment-defaults?userId=ghost",
        "/api/utility-bill-history/account-history?userId=ghost",
        "/api/utility-bill-history/payment-amounts?userId=ghost",
    ];

    for path in paths {
        let (status, body) = get_json(app(), path).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(body["error"], "User not found", "{path}");
    }
    Ok(())
}

// A request without userId takes the same unknown-user path.
#[tokio::test]
async fn test_missing_user_id_returns_404() -> Result<()> {
    let (status, body) =
        get_json(app(), "/api/utility-bill-history/payment-consistency").await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
    Ok(())
}

#[tokio::test]
async fn test_unknown_path_falls_through_to_404() -> Result<()> {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/utility-bill-history/does-not-exist")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}
