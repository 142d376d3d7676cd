use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One historical bill payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub date: NaiveDate,
    pub amount: f64,
    pub utility: String,
    pub paid_on_time: bool,
    /// Positive = paid that many days late, negative = that many days early.
    /// Absent means "not applicable" and counts as 0 in every aggregate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_late: Option<i64>,
}

impl PaymentRecord {
    pub fn days_late_or_zero(&self) -> i64 {
        self.days_late.unwrap_or(0)
    }
}

/// One utility account held by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub start_date: NaiveDate,
}

/// A user's full record: payment history plus account metadata.
///
/// `payment_history` order is the streak order; the caller is responsible
/// for chronological ordering. History utilities and account keys are
/// independent views and are never cross-validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub payment_history: Vec<PaymentRecord>,
    pub accounts: HashMap<String, AccountInfo>,
}
