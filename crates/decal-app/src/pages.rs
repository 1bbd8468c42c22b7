//! One container per feature screen. Each holds a [`ScreenState`] that the
//! presentation layer observes and exposes the actions the user can trigger.

use decal_client_core::{SessionBackend, SessionManager};
use decal_shared::{
    errors::NotLoggedInError,
    uac::{AccessDeniedError, Feature},
};

pub mod customers;
pub mod login;
pub mod orders;
pub mod payments;
pub mod profile;
pub mod register;
pub mod screen_state;
pub mod services;
pub mod vehicles;

pub use customers::{CustomerDetail, CustomerDetailScreen, CustomerListScreen};
pub use login::{attempt_login, LoginScreen};
pub use orders::{OrderDetailScreen, OrderDetailView, OrderFilter, OrderListScreen};
pub use payments::PaymentScreen;
pub use profile::{ProfileScreen, ProfileView};
pub use register::RegisterScreen;
pub use screen_state::{ScreenSnapshot, ScreenState};
pub use services::ServiceListScreen;
pub use vehicles::VehicleScreen;

/// The message to show instead of the screen if the current session may not
/// use `feature`
pub fn check_access<B: SessionBackend>(
    session: &SessionManager<B>,
    feature: Feature,
) -> Result<(), String> {
    let Some(role) = session.session().role() else {
        return Err(NotLoggedInError.to_string());
    };
    if role.can_access(feature) {
        Ok(())
    } else {
        Err(AccessDeniedError { role, feature }.to_string())
    }
}
