use std::collections::HashMap;
use std::sync::Arc;

use chrono::Datelike;
use serde::Serialize;

use crate::core::errors::{HistoryError, HistoryResult};
use crate::core::records::{AccountInfo, PaymentRecord, UserRecord};
use crate::core::store::RecordStore;

/// Account age is measured against a fixed anchor month, not the clock.
const ANCHOR_YEAR: i32 = 2024;
const ANCHOR_MONTH: u32 = 9;

const STABLE_TREND: &str = "stable";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConsistency {
    pub on_time_payment_percentage: f64,
    pub average_days_early: f64,
    pub average_days_late: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDefaults {
    pub missed_payments: u64,
    pub longest_on_time_streak: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAge {
    pub length_in_months: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHistory {
    pub account_history: HashMap<String, AccountAge>,
    pub total_number_of_accounts: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAmounts {
    pub average_monthly_payments: HashMap<String, f64>,
    pub payment_trends: HashMap<String, &'static str>,
}

/// The four payment-history calculators.
///
/// Each operation fetches the user from the store (absent user is the one
/// uniform error) and runs a pure computation over the fetched record, so
/// repeated calls against the unchanged store return identical results.
#[derive(Clone)]
pub struct BillAnalytics {
    store: Arc<dyn RecordStore>,
}

impl BillAnalytics {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn payment_consistency(&self, user_id: &str) -> HistoryResult<PaymentConsistency> {
        let user = self.fetch(user_id).await?;
        Ok(consistency_of(&user.payment_history))
    }

    pub async fn payment_defaults(&self, user_id: &str) -> HistoryResult<PaymentDefaults> {
        let user = self.fetch(user_id).await?;
        Ok(defaults_of(&user.payment_history))
    }

    pub async fn account_history(&self, user_id: &str) -> HistoryResult<AccountHistory> {
        let user = self.fetch(user_id).await?;
        Ok(account_history_of(&user.accounts))
    }

    pub async fn payment_amounts(&self, user_id: &str) -> HistoryResult<PaymentAmounts> {
        let user = self.fetch(user_id).await?;
        Ok(amounts_of(&user.payment_history))
    }

    async fn fetch(&self, user_id: &str) -> HistoryResult<UserRecord> {
        self.store
            .fetch_user(user_id)
            .await
            .ok_or(HistoryError::UserNotFound)
    }
}

/// On-time percentage plus early/late averages.
///
/// Both averages divide by the total record count, not by the early/late
/// subset count: a payment that was neither early nor late contributes 0
/// to the sum but still counts in the denominator. An empty history
/// yields 0 for all three fields.
fn consistency_of(payments: &[PaymentRecord]) -> PaymentConsistency {
    let total = payments.len();
    if total == 0 {
        return PaymentConsistency {
            on_time_payment_percentage: 0.0,
            average_days_early: 0.0,
            average_days_late: 0.0,
        };
    }

    let on_time = payments.iter().filter(|p| p.paid_on_time).count();
    let days_early: i64 = payments
        .iter()
        .map(PaymentRecord::days_late_or_zero)
        .filter(|&d| d < 0)
        .map(|d| -d)
        .sum();
    let days_late: i64 = payments
        .iter()
        .map(PaymentRecord::days_late_or_zero)
        .filter(|&d| d > 0)
        .sum();

    PaymentConsistency {
        on_time_payment_percentage: (on_time as f64 / total as f64) * 100.0,
        average_days_early: days_early as f64 / total as f64,
        average_days_late: days_late as f64 / total as f64,
    }
}

/// Missed-payment count and the longest contiguous on-time run, in stored
/// order. A late payment resets the running streak.
fn defaults_of(payments: &[PaymentRecord]) -> PaymentDefaults {
    let missed = payments.iter().filter(|p| !p.paid_on_time).count() as u64;

    let mut current_streak = 0u64;
    let mut max_streak = 0u64;
    for payment in payments {
        if payment.paid_on_time {
            current_streak += 1;
            max_streak = max_streak.max(current_streak);
        } else {
            current_streak = 0;
        }
    }

    PaymentDefaults {
        missed_payments: missed,
        longest_on_time_streak: max_streak,
    }
}

fn account_history_of(accounts: &HashMap<String, AccountInfo>) -> AccountHistory {
    let account_history = accounts
        .iter()
        .map(|(utility, info)| {
            let months = i64::from(ANCHOR_YEAR - info.start_date.year()) * 12
                + (i64::from(ANCHOR_MONTH) - i64::from(info.start_date.month()));
            (utility.clone(), AccountAge { length_in_months: months })
        })
        .collect();

    AccountHistory {
        account_history,
        total_number_of_accounts: accounts.len(),
    }
}

/// Per-utility mean payment amount, plus the trend placeholder.
fn amounts_of(payments: &[PaymentRecord]) -> PaymentAmounts {
    let mut totals: HashMap<String, f64> = HashMap::new();
    let mut counts: HashMap<String, u64> = HashMap::new();

    for payment in payments {
        *totals.entry(payment.utility.clone()).or_insert(0.0) += payment.amount;
        *counts.entry(payment.utility.clone()).or_insert(0) += 1;
    }

    let average_monthly_payments = totals
        .iter()
        .map(|(utility, total)| (utility.clone(), total / counts[utility] as f64))
        .collect();

    // No real trend inference; every utility reports the same constant.
    let payment_trends = totals
        .keys()
        .map(|utility| (utility.clone(), STABLE_TREND))
        .collect();

    PaymentAmounts {
        average_monthly_payments,
        payment_trends,
    }
}
