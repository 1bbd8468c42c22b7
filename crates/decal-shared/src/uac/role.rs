use serde::{Deserialize, Serialize};

/// The closed set of account roles known to the remote API
#[derive(
    Debug,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Role {
    Admin,
    Manager,
    Sales,
    Technician,
    Customer,
}

/// The areas of the mobile app that are gated by role
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
pub enum Feature {
    Customers,
    Vehicles,
    Services,
    Orders,
    OrderProgress,
    Payments,
    Profile,
}

impl Role {
    /// Only these roles may sign in to the mobile app, management roles use
    /// the back office
    pub fn is_mobile_login_allowed(&self) -> bool {
        match self {
            Role::Technician | Role::Sales | Role::Customer => true,
            Role::Admin | Role::Manager => false,
        }
    }

    pub fn can_access(&self, feature: Feature) -> bool {
        match self {
            Role::Admin | Role::Manager | Role::Sales => true,
            Role::Technician => matches!(
                feature,
                Feature::Services | Feature::Orders | Feature::OrderProgress | Feature::Profile
            ),
            Role::Customer => matches!(
                feature,
                Feature::Services
                    | Feature::Orders
                    | Feature::OrderProgress
                    | Feature::Payments
                    | Feature::Profile
            ),
        }
    }
}
