use decal_client_core::{AccountApi, RemoteService, SessionManager};
use decal_shared::{
    req_args::ChangePasswordReqArgs,
    uac::{EmployeeInfo, Feature, User},
    validation::validate_password_change,
};
use std::sync::Arc;
use tracing::info;

use super::{check_access, ScreenState};

/// What the profile screen shows, taken from the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub user: Arc<User>,
    pub employee_info: Option<Arc<EmployeeInfo>>,
}

#[derive(Debug)]
pub struct ProfileScreen<R> {
    session: Arc<SessionManager<R>>,
    pub state: ScreenState<ProfileView>,
}

impl<R: RemoteService> ProfileScreen<R> {
    pub fn new(session: Arc<SessionManager<R>>) -> Self {
        Self {
            session,
            state: ScreenState::new(),
        }
    }

    /// Shows the current session, no request is made
    pub fn load(&self) {
        if let Err(msg) = check_access(&self.session, Feature::Profile) {
            return self.state.set_error(msg);
        }
        let session = self.session.session();
        if let Some(user) = session.current_user() {
            self.state.set_data(ProfileView {
                user: Arc::clone(user),
                employee_info: session.current_employee_info().cloned(),
            });
        }
    }

    /// Returns `true` if the password was changed
    #[tracing::instrument(skip(self))]
    pub async fn change_password(&self, args: ChangePasswordReqArgs) -> bool {
        if let Err(msg) = check_access(&self.session, Feature::Profile) {
            self.state.set_error(msg);
            return false;
        }
        if let Err(e) = validate_password_change(&args) {
            info!(%e, "password change input rejected");
            self.state.set_error(e.to_string());
            return false;
        }
        self.state
            .mutate(self.session.backend().change_password(args))
            .await
            .is_some()
    }

    /// Always ends logged out, see [`SessionManager::logout`]
    pub async fn logout(&self) {
        self.session.logout().await;
        self.state.reset();
    }
}
