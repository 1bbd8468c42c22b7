use decal_client_core::{AuthApi, SessionBackend, SessionManager};
use decal_shared::{req_args::RegisterReqArgs, uac::User, validation::validate_registration};
use std::sync::Arc;
use tracing::info;

use super::ScreenState;

/// Creating an account does not log it in
#[derive(Debug)]
pub struct RegisterScreen<B> {
    session: Arc<SessionManager<B>>,
    pub state: ScreenState<User>,
}

impl<B: SessionBackend> RegisterScreen<B> {
    pub fn new(session: Arc<SessionManager<B>>) -> Self {
        Self {
            session,
            state: ScreenState::new(),
        }
    }

    /// Returns the created account. Invalid input is reported without
    /// contacting the server.
    #[tracing::instrument(skip(self))]
    pub async fn register(&self, args: RegisterReqArgs) -> Option<User> {
        if let Err(e) = validate_registration(&args) {
            info!(%e, "registration input rejected");
            self.state.set_error(e.to_string());
            return None;
        }
        let user = self
            .state
            .mutate(self.session.backend().register(args))
            .await?;
        self.state.set_data(user.clone());
        Some(user)
    }
}
