use decal_client_core::{CustomerApi, CustomerVehicleApi, OrderApi, RemoteService, SessionManager};
use decal_shared::{
    id::DbId,
    models::{Customer, CustomerDraft, CustomerVehicle, Order},
    uac::Feature,
};
use std::sync::Arc;

use super::{check_access, ScreenState};

#[derive(Debug)]
pub struct CustomerListScreen<R> {
    session: Arc<SessionManager<R>>,
    pub state: ScreenState<Vec<Customer>>,
}

impl<R: RemoteService> CustomerListScreen<R> {
    pub fn new(session: Arc<SessionManager<R>>) -> Self {
        Self {
            session,
            state: ScreenState::new(),
        }
    }

    pub async fn load(&self) {
        if let Err(msg) = check_access(&self.session, Feature::Customers) {
            return self.state.set_error(msg);
        }
        self.state
            .load(self.session.backend().list_customers())
            .await;
    }

    pub async fn create_customer(&self, draft: CustomerDraft) -> Option<Customer> {
        let remote = self.allowed_remote()?;
        let customer = self.state.mutate(remote.create_customer(draft)).await?;
        self.load().await;
        Some(customer)
    }

    pub async fn update_customer(&self, customer: Customer) -> Option<Customer> {
        let remote = self.allowed_remote()?;
        let customer = self.state.mutate(remote.update_customer(customer)).await?;
        self.load().await;
        Some(customer)
    }

    /// Returns `true` if the customer was deleted
    pub async fn delete_customer(&self, id: DbId) -> bool {
        let Some(remote) = self.allowed_remote() else {
            return false;
        };
        let is_deleted = self.state.mutate(remote.delete_customer(id)).await.is_some();
        if is_deleted {
            self.load().await;
        }
        is_deleted
    }

    fn allowed_remote(&self) -> Option<&Arc<R>> {
        match check_access(&self.session, Feature::Customers) {
            Ok(()) => Some(self.session.backend()),
            Err(msg) => {
                self.state.set_error(msg);
                None
            }
        }
    }
}

/// A customer together with their vehicles and orders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetail {
    pub customer: Customer,
    pub vehicles: Vec<CustomerVehicle>,
    pub orders: Vec<Order>,
}

#[derive(Debug)]
pub struct CustomerDetailScreen<R> {
    session: Arc<SessionManager<R>>,
    pub state: ScreenState<CustomerDetail>,
}

impl<R: RemoteService> CustomerDetailScreen<R> {
    pub fn new(session: Arc<SessionManager<R>>) -> Self {
        Self {
            session,
            state: ScreenState::new(),
        }
    }

    /// Fails as a whole if any of the three parts cannot be fetched
    pub async fn load(&self, customer_id: DbId) {
        if let Err(msg) = check_access(&self.session, Feature::Customers) {
            return self.state.set_error(msg);
        }
        let remote = self.session.backend();
        self.state
            .load(async {
                let (customer, vehicles, orders) = futures::try_join!(
                    remote.get_customer(customer_id),
                    remote.customer_vehicles_by_customer(customer_id),
                    remote.orders_by_customer(customer_id),
                )?;
                Ok(CustomerDetail {
                    customer,
                    vehicles,
                    orders,
                })
            })
            .await;
    }
}
