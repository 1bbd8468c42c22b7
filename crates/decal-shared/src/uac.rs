//! Shared items related to user account control

mod employee_info;
mod errors;
mod responses;
mod role;
mod user;

pub use employee_info::EmployeeInfo;
pub use errors::{AccessDeniedError, RoleRejectedError, UnknownRoleError};
pub use responses::LoginResponse;
pub use role::{Feature, Role};
pub use user::{User, Username};
