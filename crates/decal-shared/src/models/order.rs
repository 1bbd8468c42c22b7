use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::id::DbId;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: DbId,
    pub order_date: DateTime<Utc>,
    pub order_status: String,
    pub total_amount: Decimal,
    pub customer_id: DbId,
    #[serde(default)]
    pub assigned_employee_id: Option<DbId>,
    #[serde(default)]
    pub vehicle_id: Option<DbId>,
    #[serde(default)]
    pub current_stage: Option<String>,
    #[serde(default)]
    pub is_custom_decal: bool,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_id: DbId,
    pub vehicle_id: Option<DbId>,
    pub assigned_employee_id: Option<DbId>,
    pub total_amount: Decimal,
    pub order_status: String,
    pub current_stage: Option<String>,
    pub is_custom_decal: bool,
}

/// One service line of an order
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub order_detail_id: DbId,
    pub order_id: DbId,
    pub service_id: DbId,
    pub quantity: u32,
    pub price: Decimal,
    #[serde(default)]
    pub final_calculated_price: Option<Decimal>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailDraft {
    pub order_id: DbId,
    pub service_id: DbId,
    pub quantity: u32,
    pub price: Decimal,
}

/// A stage an order has moved through (for example survey, printing, install)
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderStageHistory {
    pub order_stage_history_id: DbId,
    pub order_id: DbId,
    pub stage_name: String,
    pub changed_date: DateTime<Utc>,
    #[serde(default)]
    pub changed_by_employee_id: Option<DbId>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderStageHistoryDraft {
    pub order_id: DbId,
    pub stage_name: String,
    pub changed_by_employee_id: Option<DbId>,
    pub notes: Option<String>,
}

impl OrderDetail {
    /// The price that is charged for this line
    pub fn line_total(&self) -> Decimal {
        self.final_calculated_price
            .unwrap_or_else(|| self.price * Decimal::from(self.quantity))
    }
}
