use crate::token::{AccessToken, RefreshToken, TokenPair};

use super::User;

/// Body of a successful `/api/auth/login`
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: AccessToken,
    pub refresh_token: RefreshToken,
    pub account: User,
}

impl LoginResponse {
    pub fn into_parts(self) -> (TokenPair, User) {
        (
            TokenPair {
                access: self.access_token,
                refresh: self.refresh_token,
            },
            self.account,
        )
    }
}
