use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::id::DbId;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: DbId,
    pub order_id: DbId,
    pub amount: Decimal,
    pub payment_date: DateTime<Utc>,
    pub payment_method: String,
    pub payment_status: String,
    #[serde(default)]
    pub transaction_code: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    pub order_id: DbId,
    pub amount: Decimal,
    pub payment_method: String,
    pub transaction_code: Option<String>,
    pub notes: Option<String>,
}
