use crate::id::DbId;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: DbId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub store_id: Option<DbId>,
    #[serde(default)]
    pub account_id: Option<DbId>,
    /// Name of the role of the linked account, as the server spells it
    #[serde(default)]
    pub account_role_name: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}
