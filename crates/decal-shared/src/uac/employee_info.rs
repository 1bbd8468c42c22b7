use crate::{id::DbId, models::Employee};

use super::{Role, UnknownRoleError};

/// Read-only view of the employee record behind an account, with the role name
/// resolved. Derived on demand and never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeInfo {
    pub employee_id: DbId,
    pub full_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub store_id: Option<DbId>,
    pub role: Role,
    pub is_active: bool,
}

impl EmployeeInfo {
    pub fn from_employee(employee: Employee) -> Result<Self, UnknownRoleError> {
        let role_name = employee.account_role_name.unwrap_or_default();
        let role = role_name
            .trim()
            .parse::<Role>()
            .map_err(|_| UnknownRoleError(role_name.clone()))?;
        Ok(Self {
            employee_id: employee.employee_id,
            full_name: format!("{} {}", employee.first_name, employee.last_name)
                .trim()
                .to_string(),
            email: employee.email,
            phone_number: employee.phone_number,
            store_id: employee.store_id,
            role,
            is_active: employee.is_active,
        })
    }
}
