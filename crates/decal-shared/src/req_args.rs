//! This module stores the expected format of the arguments for the requests.
//! Arguments holding secrets are not `Serialize`; the client builds their JSON
//! body explicitly so the secret is only exposed at that one point.

use crate::id::DbId;
use secrecy::{ExposeSecret, SecretString};
use std::fmt::Debug;

#[derive(Clone)]
pub struct LoginReqArgs {
    pub username: String,
    pub password: SecretString,
}

impl LoginReqArgs {
    pub fn new<S: Into<String>>(username: S, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn password(mut self, password: SecretString) -> Self {
        self.password = password;
        self
    }
}

impl Debug for LoginReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginReqArgs")
            .field("username", &self.username)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .finish()
    }
}

#[derive(Clone)]
pub struct RegisterReqArgs {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl Debug for RegisterReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterReqArgs")
            .field("full_name", &self.full_name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .finish()
    }
}

#[derive(Clone)]
pub struct ChangePasswordReqArgs {
    pub current_password: SecretString,
    pub new_password: SecretString,
    pub new_password_check: SecretString,
}

impl Debug for ChangePasswordReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangePasswordReqArgs").finish_non_exhaustive()
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct IdReqArgs {
    pub id: DbId,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ByCustomerReqArgs {
    pub customer_id: DbId,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ByStoreReqArgs {
    pub store_id: DbId,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ByOrderReqArgs {
    pub order_id: DbId,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ByBrandReqArgs {
    pub brand_id: DbId,
}

impl From<DbId> for IdReqArgs {
    fn from(id: DbId) -> Self {
        Self { id }
    }
}
