use std::sync::Arc;

use crate::uac::{EmployeeInfo, Feature, Role, User};

/// Who is logged in, as last published by the session manager.
///
/// Fields are private so that being logged out always means that there is
/// neither a user nor employee info.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_user: Option<Arc<User>>,
    current_employee_info: Option<Arc<EmployeeInfo>>,
}

impl Session {
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn logged_in(user: impl Into<Arc<User>>) -> Self {
        Self {
            current_user: Some(user.into()),
            current_employee_info: None,
        }
    }

    /// Returns a copy with the employee info replaced. Has no effect on a
    /// logged out session.
    #[must_use]
    pub fn with_employee_info(mut self, employee_info: Option<EmployeeInfo>) -> Self {
        if self.is_logged_in() {
            self.current_employee_info = employee_info.map(Arc::new);
        }
        self
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&Arc<User>> {
        self.current_user.as_ref()
    }

    pub fn current_employee_info(&self) -> Option<&Arc<EmployeeInfo>> {
        self.current_employee_info.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.current_user.as_ref().map(|user| user.role)
    }

    /// `true` if the session belongs to `user`'s account
    pub fn is_account_of(&self, user: &User) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|current| current.is_same_account(user))
    }

    pub fn can_access(&self, feature: Feature) -> bool {
        self.role().is_some_and(|role| role.can_access(feature))
    }
}
