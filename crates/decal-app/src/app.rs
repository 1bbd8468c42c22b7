use anyhow::Context as _;
use decal_client_core::{Client, FileTokenStore, RemoteService, SessionManager};
use std::sync::Arc;
use tracing::info;

use crate::{
    configuration::{AuthSettings, Configuration},
    pages::{
        CustomerDetailScreen, CustomerListScreen, LoginScreen, OrderDetailScreen,
        OrderListScreen, PaymentScreen, ProfileScreen, RegisterScreen, ServiceListScreen,
        VehicleScreen,
    },
};

/// Builds every screen from the one remote service and session manager it
/// was created with. Cheap to clone.
#[derive(Debug)]
pub struct DecalApp<R> {
    session: Arc<SessionManager<R>>,
    auth_settings: AuthSettings,
}

impl<R> Clone for DecalApp<R> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            auth_settings: self.auth_settings.clone(),
        }
    }
}

impl DecalApp<Client> {
    /// Talks to the configured server and keeps the tokens in the configured
    /// file
    #[tracing::instrument(name = "NEW DECAL APP")]
    pub fn from_configuration(configuration: &Configuration) -> anyhow::Result<Self> {
        let token_store = Arc::new(FileTokenStore::new(&configuration.client.token_file));
        let client = Client::new(configuration.client.server_address.clone(), token_store)
            .context("failed to create client")?;
        info!(server_address = %client.server_address(), "client created");
        Ok(Self::new(Arc::new(client), configuration.auth.clone()))
    }
}

impl<R: RemoteService> DecalApp<R> {
    pub fn new(remote: Arc<R>, auth_settings: AuthSettings) -> Self {
        Self {
            session: Arc::new(SessionManager::new(remote)),
            auth_settings,
        }
    }

    pub fn session(&self) -> &Arc<SessionManager<R>> {
        &self.session
    }

    pub fn remote(&self) -> &Arc<R> {
        self.session.backend()
    }

    /// Restores the session from the stored tokens
    pub async fn initialize(&self) {
        self.session.initialize().await;
    }

    pub fn login_screen(&self) -> LoginScreen<R> {
        LoginScreen::new(
            self.session.clone(),
            self.auth_settings.logout_on_rejected_role,
        )
    }

    pub fn register_screen(&self) -> RegisterScreen<R> {
        RegisterScreen::new(self.session.clone())
    }

    pub fn customer_list_screen(&self) -> CustomerListScreen<R> {
        CustomerListScreen::new(self.session.clone())
    }

    pub fn customer_detail_screen(&self) -> CustomerDetailScreen<R> {
        CustomerDetailScreen::new(self.session.clone())
    }

    pub fn vehicle_screen(&self) -> VehicleScreen<R> {
        VehicleScreen::new(self.session.clone())
    }

    pub fn service_list_screen(&self) -> ServiceListScreen<R> {
        ServiceListScreen::new(self.session.clone())
    }

    pub fn order_list_screen(&self) -> OrderListScreen<R> {
        OrderListScreen::new(self.session.clone())
    }

    pub fn order_detail_screen(&self) -> OrderDetailScreen<R> {
        OrderDetailScreen::new(self.session.clone())
    }

    pub fn payment_screen(&self) -> PaymentScreen<R> {
        PaymentScreen::new(self.session.clone())
    }

    pub fn profile_screen(&self) -> ProfileScreen<R> {
        ProfileScreen::new(self.session.clone())
    }
}
