use decal_client_core::{CustomerVehicleApi, RemoteService, SessionManager, VehicleApi};
use decal_shared::{
    id::DbId,
    models::{CustomerVehicle, CustomerVehicleDraft, VehicleBrand, VehicleModel},
    uac::Feature,
};
use std::sync::Arc;

use super::{check_access, ScreenState};

/// Picking a brand and model and registering a vehicle for a customer. Each
/// list has its own state so they load independently.
#[derive(Debug)]
pub struct VehicleScreen<R> {
    session: Arc<SessionManager<R>>,
    pub brands: ScreenState<Vec<VehicleBrand>>,
    pub models: ScreenState<Vec<VehicleModel>>,
    pub vehicles: ScreenState<Vec<CustomerVehicle>>,
}

impl<R: RemoteService> VehicleScreen<R> {
    pub fn new(session: Arc<SessionManager<R>>) -> Self {
        Self {
            session,
            brands: ScreenState::new(),
            models: ScreenState::new(),
            vehicles: ScreenState::new(),
        }
    }

    pub async fn load_brands(&self) {
        if let Err(msg) = check_access(&self.session, Feature::Vehicles) {
            return self.brands.set_error(msg);
        }
        self.brands
            .load(self.session.backend().list_vehicle_brands())
            .await;
    }

    pub async fn select_brand(&self, brand_id: DbId) {
        if let Err(msg) = check_access(&self.session, Feature::Vehicles) {
            return self.models.set_error(msg);
        }
        self.models
            .load(self.session.backend().vehicle_models_by_brand(brand_id))
            .await;
    }

    pub async fn load_customer_vehicles(&self, customer_id: DbId) {
        if let Err(msg) = check_access(&self.session, Feature::Vehicles) {
            return self.vehicles.set_error(msg);
        }
        self.vehicles
            .load(
                self.session
                    .backend()
                    .customer_vehicles_by_customer(customer_id),
            )
            .await;
    }

    /// Registers the vehicle and reloads the vehicles of its owner
    pub async fn create_vehicle(&self, draft: CustomerVehicleDraft) -> Option<CustomerVehicle> {
        if let Err(msg) = check_access(&self.session, Feature::Vehicles) {
            self.vehicles.set_error(msg);
            return None;
        }
        let customer_id = draft.customer_id;
        let vehicle = self
            .vehicles
            .mutate(self.session.backend().create_customer_vehicle(draft))
            .await?;
        self.load_customer_vehicles(customer_id).await;
        Some(vehicle)
    }
}
