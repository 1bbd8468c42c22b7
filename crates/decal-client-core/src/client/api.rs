use async_trait::async_trait;
use decal_shared::{
    const_config::path::{
        PATH_API_ACCOUNT, PATH_API_ACCOUNT_CHANGE_PASSWORD, PATH_API_AUTH_LOGIN,
        PATH_API_AUTH_LOGOUT, PATH_API_AUTH_ME, PATH_API_AUTH_REGISTER,
    },
    id::DbId,
    req_args::{ChangePasswordReqArgs, IdReqArgs, LoginReqArgs, RegisterReqArgs},
    uac::User,
};
use secrecy::ExposeSecret as _;

use super::{await_response, DUMMY_ARGUMENT};
use crate::{
    facade::{AccountApi, AuthApi},
    Client,
};

mod catalog;
mod customer;
mod order;
mod payment;
mod vehicle;

#[async_trait]
impl AuthApi for Client {
    #[tracing::instrument]
    async fn login(&self, args: LoginReqArgs) -> anyhow::Result<User> {
        let args = serde_json::json!({
            "username": args.username,
            "password": args.password.expose_secret(),
        });
        await_response(self.send_login_request(PATH_API_AUTH_LOGIN, &args)).await
    }

    #[tracing::instrument]
    async fn register(&self, args: RegisterReqArgs) -> anyhow::Result<User> {
        let args = serde_json::json!({
            "fullName": args.full_name,
            "username": args.username,
            "email": args.email,
            "phoneNumber": args.phone_number,
            "password": args.password.expose_secret(),
        });
        self.request_json(PATH_API_AUTH_REGISTER, &args).await
    }

    #[tracing::instrument]
    async fn logout(&self) -> anyhow::Result<()> {
        let stored = self.token_store.read().await;
        let args = serde_json::json!({
            "refreshToken": stored.refresh.as_ref().map(|token| token.expose_secret()),
        });
        // Headers are captured when the request is sent so clearing right after
        // does not affect it
        let rx = self.send_request_expect_empty(PATH_API_AUTH_LOGOUT, &args);
        self.clear_tokens().await; // Clear tokens even if logout fails
        await_response(rx).await
    }

    #[tracing::instrument(ret)]
    async fn is_logged_in(&self) -> bool {
        self.reload_access_token().await
    }

    #[tracing::instrument]
    async fn current_user(&self) -> anyhow::Result<User> {
        self.request_json(PATH_API_AUTH_ME, &DUMMY_ARGUMENT).await
    }
}

#[async_trait]
impl AccountApi for Client {
    #[tracing::instrument]
    async fn get_account(&self, id: DbId) -> anyhow::Result<User> {
        self.request_json(PATH_API_ACCOUNT, &IdReqArgs::from(id))
            .await
    }

    #[tracing::instrument(skip(args))]
    async fn change_password(&self, args: ChangePasswordReqArgs) -> anyhow::Result<()> {
        let args = serde_json::json!({
            "currentPassword": args.current_password.expose_secret(),
            "newPassword": args.new_password.expose_secret(),
            "confirmPassword": args.new_password_check.expose_secret(),
        });
        self.request_empty(PATH_API_ACCOUNT_CHANGE_PASSWORD, &args)
            .await
    }
}
