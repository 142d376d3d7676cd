use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::records::{AccountInfo, PaymentRecord, UserRecord};

/// Read interface over the payment-history dataset.
///
/// The service only ever fetches a whole user record by id. A real
/// deployment would back this with a database; here it is a fixed
/// in-memory map.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch_user(&self, user_id: &str) -> Option<UserRecord>;
}

pub struct InMemoryStore {
    users: HashMap<String, UserRecord>,
}

impl InMemoryStore {
    pub fn with_users(users: HashMap<String, UserRecord>) -> Self {
        Self { users }
    }

    /// Demo dataset. Built once at startup and read-only afterwards.
    pub fn sample() -> Self {
        let mut users = HashMap::new();

        users.insert(
            "userId1".to_string(),
            UserRecord {
                payment_history: vec![
                    payment(date(2024, 1, 1), 100.0, "electricity", true, None),
                    payment(date(2024, 2, 1), 110.0, "electricity", false, Some(5)),
                ],
                accounts: HashMap::from([
                    account("electricity", date(2023, 1, 1)),
                    account("water", date(2023, 6, 1)),
                    account("internet", date(2023, 1, 1)),
                ]),
            },
        );

        users.insert(
            "userId2".to_string(),
            UserRecord {
                payment_history: vec![
                    payment(date(2024, 1, 15), 45.5, "water", true, Some(-2)),
                    payment(date(2024, 1, 20), 95.0, "electricity", true, None),
                    payment(date(2024, 2, 15), 48.25, "water", false, Some(3)),
                    payment(date(2024, 2, 20), 102.4, "electricity", true, None),
                    payment(date(2024, 3, 15), 44.0, "water", true, Some(-1)),
                ],
                accounts: HashMap::from([
                    account("water", date(2022, 11, 1)),
                    account("electricity", date(2023, 3, 1)),
                ]),
            },
        );

        Self { users }
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn fetch_user(&self, user_id: &str) -> Option<UserRecord> {
        self.users.get(user_id).cloned()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn payment(
    date: NaiveDate,
    amount: f64,
    utility: &str,
    paid_on_time: bool,
    days_late: Option<i64>,
) -> PaymentRecord {
    PaymentRecord {
        date,
        amount,
        utility: utility.to_string(),
        paid_on_time,
        days_late,
    }
}

fn account(utility: &str, start_date: NaiveDate) -> (String, AccountInfo) {
    (utility.to_string(), AccountInfo { start_date })
}
