use super::{Feature, Role};

/// Authentication succeeded but the role is not permitted to use the mobile app
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("Tài khoản {0} không được phép đăng nhập trên ứng dụng di động")]
pub struct RoleRejectedError(pub Role);

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("Bạn không có quyền truy cập chức năng này")]
pub struct AccessDeniedError {
    pub role: Role,
    pub feature: Feature,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
#[error("Unknown role name: '{0}'")]
pub struct UnknownRoleError(pub String);
