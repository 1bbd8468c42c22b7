use crate::id::DbId;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleBrand {
    pub brand_id: DbId,
    pub brand_name: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleModel {
    pub model_id: DbId,
    pub model_name: String,
    pub brand_id: DbId,
    #[serde(default)]
    pub chassis_type: Option<String>,
}

/// A vehicle owned by a customer
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerVehicle {
    pub vehicle_id: DbId,
    pub customer_id: DbId,
    pub model_id: DbId,
    pub license_plate: String,
    #[serde(default)]
    pub chassis_number: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerVehicleDraft {
    pub customer_id: DbId,
    pub model_id: DbId,
    pub license_plate: String,
    pub chassis_number: Option<String>,
    pub color: Option<String>,
    pub year: Option<u16>,
}
