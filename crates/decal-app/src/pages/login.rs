use anyhow::anyhow;
use decal_client_core::{AuthResult, SessionBackend, SessionManager};
use decal_shared::{
    uac::{RoleRejectedError, User},
    validation::validate_login,
};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::{info, warn};

use super::ScreenState;

/// Checks the input locally, logs in and then refuses roles that may not use
/// the mobile app.
///
/// A refused role still leaves the session logged in as that account unless
/// `logout_on_rejected_role` is set.
#[tracing::instrument(skip(session, password))]
pub async fn attempt_login<B: SessionBackend>(
    session: &SessionManager<B>,
    username: &str,
    password: SecretString,
    logout_on_rejected_role: bool,
) -> AuthResult {
    if let Err(e) = validate_login(username, &password) {
        info!(%e, "login input rejected");
        return AuthResult::Error(e.to_string());
    }
    match session.login(username.trim(), password).await {
        AuthResult::Success(user) if !user.role.is_mobile_login_allowed() => {
            warn!(role = %user.role, "role may not use the mobile app");
            if logout_on_rejected_role {
                session.logout().await;
            }
            AuthResult::Error(RoleRejectedError(user.role).to_string())
        }
        outcome => outcome,
    }
}

#[derive(Debug)]
pub struct LoginScreen<B> {
    session: Arc<SessionManager<B>>,
    logout_on_rejected_role: bool,
    pub state: ScreenState<Arc<User>>,
}

impl<B: SessionBackend> LoginScreen<B> {
    pub fn new(session: Arc<SessionManager<B>>, logout_on_rejected_role: bool) -> Self {
        Self {
            session,
            logout_on_rejected_role,
            state: ScreenState::new(),
        }
    }

    /// Runs [`attempt_login`] and records the outcome on [`Self::state`]
    pub async fn submit(&self, username: &str, password: SecretString) -> AuthResult {
        let mut rejection = None;
        let call = async {
            match attempt_login(
                &self.session,
                username,
                password,
                self.logout_on_rejected_role,
            )
            .await
            {
                AuthResult::Success(user) => Ok(user),
                AuthResult::Error(msg) => {
                    rejection = Some(msg.clone());
                    Err(anyhow!(msg))
                }
            }
        };
        match self.state.mutate(call).await {
            Some(user) => {
                self.state.set_data(Arc::clone(&user));
                AuthResult::Success(user)
            }
            None => AuthResult::Error(rejection.unwrap_or_default()),
        }
    }
}
