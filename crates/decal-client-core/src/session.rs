//! The single source of truth for who is logged in.
//!
//! [`SessionManager`] is constructed once with the backend it should talk to
//! and then shared (usually as an `Arc`) with everything that needs to know
//! about the session. Readers either take a snapshot with
//! [`SessionManager::session`] or keep a [`watch::Receiver`] from
//! [`SessionManager::subscribe`] to be told about every change.
//!
//! Mutations are last write wins. Concurrent login and logout are not
//! serialized against each other.

use anyhow::Context as _;
use decal_shared::{
    log_err_as_warn,
    req_args::LoginReqArgs,
    session::Session,
    uac::{EmployeeInfo, User},
};
use secrecy::SecretString;
use std::{fmt::Debug, sync::Arc};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::facade::SessionBackend;

/// Outcome of [`SessionManager::login`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Success(Arc<User>),
    Error(String),
}

impl AuthResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

pub struct SessionManager<B> {
    backend: Arc<B>,
    state: watch::Sender<Session>,
}

impl<B> Debug for SessionManager<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("session", &*self.state.borrow())
            .field("receiver_count", &self.state.receiver_count())
            .finish()
    }
}

impl<B: SessionBackend> SessionManager<B> {
    /// Starts out logged out. Call [`Self::initialize`] to restore a persisted
    /// session.
    pub fn new(backend: Arc<B>) -> Self {
        let (state, _) = watch::channel(Session::logged_out());
        Self { backend, state }
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.borrow().is_logged_in()
    }

    pub fn current_user(&self) -> Option<Arc<User>> {
        self.state.borrow().current_user().cloned()
    }

    pub fn current_employee_info(&self) -> Option<Arc<EmployeeInfo>> {
        self.state.borrow().current_employee_info().cloned()
    }

    /// Restores the session from the persisted tokens.
    ///
    /// Fails closed: if the user or their employee info cannot be fetched the
    /// session is published as logged out.
    #[instrument(skip(self))]
    pub async fn initialize(&self) {
        if !self.backend.is_logged_in().await {
            debug!("no stored access token");
            self.publish(Session::logged_out());
            return;
        }
        match self.restore().await {
            Ok(session) => {
                info!(user = ?session.current_user().map(|u| u.username.to_string()), "session restored");
                self.publish(session);
            }
            Err(e) => {
                warn!(?e, "unable to restore session, treating as logged out");
                self.publish(Session::logged_out());
            }
        }
    }

    async fn restore(&self) -> anyhow::Result<Session> {
        let user = self
            .backend
            .current_user()
            .await
            .context("failed to fetch current user")?;
        let employee_info = self.fetch_employee_info(&user).await?;
        Ok(Session::logged_in(user).with_employee_info(employee_info))
    }

    /// On success the authenticated session is published before the employee
    /// info is looked up. Not finding the employee info does not fail the
    /// login. On failure the session is left as it was.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: SecretString) -> AuthResult {
        let args = LoginReqArgs::new(username, password);
        let user = match self.backend.login(args).await {
            Ok(user) => Arc::new(user),
            Err(e) => {
                info!(?e, "login failed");
                return AuthResult::Error(e.to_string());
            }
        };
        info!(username = %user.username, role = %user.role, "logged in");
        self.publish(Session::logged_in(Arc::clone(&user)));

        let employee_info = match self.fetch_employee_info(&user).await {
            Ok(employee_info) => employee_info,
            Err(e) => {
                warn!(?e, "continuing without employee info");
                None
            }
        };
        self.apply_employee_info(&user, employee_info);
        AuthResult::Success(user)
    }

    /// Fails open: the session is always logged out afterwards, even if the
    /// server could not be told.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        log_err_as_warn!(self.backend.logout().await);
        self.publish(Session::logged_out());
        info!("logged out");
    }

    /// Reconciles the session with the backend, for example after the tokens
    /// expired or were removed. Returns if the session is logged in afterwards.
    #[instrument(skip(self))]
    pub async fn check_auth_status(&self) -> bool {
        if !self.backend.is_logged_in().await {
            self.publish(Session::logged_out());
            return false;
        }
        let user = match self.backend.current_user().await {
            Ok(user) => user,
            Err(e) => {
                warn!(?e, "server no longer accepts the session");
                self.publish(Session::logged_out());
                return false;
            }
        };
        let current = self.session();
        if current.is_account_of(&user) {
            // Same account, keep the employee info we already have
            let employee_info = current.current_employee_info().map(|info| (**info).clone());
            self.publish(Session::logged_in(user).with_employee_info(employee_info));
        } else {
            let employee_info = match self.fetch_employee_info(&user).await {
                Ok(employee_info) => employee_info,
                Err(e) => {
                    warn!(?e, "continuing without employee info");
                    None
                }
            };
            self.publish(Session::logged_in(user).with_employee_info(employee_info));
        }
        true
    }

    /// `Ok(None)` for accounts that are not linked to an employee
    async fn fetch_employee_info(&self, user: &User) -> anyhow::Result<Option<EmployeeInfo>> {
        let Some(employee_id) = user.employee_id else {
            return Ok(None);
        };
        let employee = self
            .backend
            .get_employee(employee_id)
            .await
            .with_context(|| format!("failed to fetch employee {employee_id}"))?;
        let employee_info = EmployeeInfo::from_employee(employee)?;
        Ok(Some(employee_info))
    }

    fn apply_employee_info(&self, user: &User, employee_info: Option<EmployeeInfo>) {
        self.state.send_if_modified(|session| {
            if session.is_account_of(user) {
                *session = std::mem::take(session).with_employee_info(employee_info);
                true
            } else {
                debug!("session changed while fetching employee info, discarding it");
                false
            }
        });
    }

    fn publish(&self, session: Session) {
        self.state.send_replace(session);
    }
}
