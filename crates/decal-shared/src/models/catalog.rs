use rust_decimal::Decimal;

use crate::id::DbId;

/// A decal job the shop offers, with its list price
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecalService {
    pub service_id: DbId,
    pub service_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub standard_work_units: Option<u32>,
    #[serde(default)]
    pub decal_type_name: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub store_id: DbId,
    pub store_name: String,
    pub address: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
