use async_trait::async_trait;
use decal_shared::{
    const_config::path::{
        PATH_API_CUSTOMER, PATH_API_CUSTOMER_CREATE, PATH_API_CUSTOMER_DELETE,
        PATH_API_CUSTOMER_LIST, PATH_API_CUSTOMER_UPDATE, PATH_API_CUSTOMER_VEHICLE,
        PATH_API_CUSTOMER_VEHICLE_BY_CUSTOMER, PATH_API_CUSTOMER_VEHICLE_CREATE,
        PATH_API_CUSTOMER_VEHICLE_DELETE, PATH_API_CUSTOMER_VEHICLE_LIST,
        PATH_API_CUSTOMER_VEHICLE_UPDATE,
    },
    id::DbId,
    models::{Customer, CustomerDraft, CustomerVehicle, CustomerVehicleDraft},
    req_args::{ByCustomerReqArgs, IdReqArgs},
};

use crate::{
    client::DUMMY_ARGUMENT,
    facade::{CustomerApi, CustomerVehicleApi},
    Client,
};

#[async_trait]
impl CustomerApi for Client {
    #[tracing::instrument]
    async fn list_customers(&self) -> anyhow::Result<Vec<Customer>> {
        self.request_json(PATH_API_CUSTOMER_LIST, &DUMMY_ARGUMENT)
            .await
    }

    #[tracing::instrument]
    async fn get_customer(&self, id: DbId) -> anyhow::Result<Customer> {
        self.request_json(PATH_API_CUSTOMER, &IdReqArgs::from(id))
            .await
    }

    #[tracing::instrument]
    async fn create_customer(&self, draft: CustomerDraft) -> anyhow::Result<Customer> {
        self.request_json(PATH_API_CUSTOMER_CREATE, &draft).await
    }

    #[tracing::instrument]
    async fn update_customer(&self, customer: Customer) -> anyhow::Result<Customer> {
        self.request_json(PATH_API_CUSTOMER_UPDATE, &customer).await
    }

    #[tracing::instrument]
    async fn delete_customer(&self, id: DbId) -> anyhow::Result<()> {
        self.request_empty(PATH_API_CUSTOMER_DELETE, &IdReqArgs::from(id))
            .await
    }
}

#[async_trait]
impl CustomerVehicleApi for Client {
    #[tracing::instrument]
    async fn list_customer_vehicles(&self) -> anyhow::Result<Vec<CustomerVehicle>> {
        self.request_json(PATH_API_CUSTOMER_VEHICLE_LIST, &DUMMY_ARGUMENT)
            .await
    }

    #[tracing::instrument]
    async fn get_customer_vehicle(&self, id: DbId) -> anyhow::Result<CustomerVehicle> {
        self.request_json(PATH_API_CUSTOMER_VEHICLE, &IdReqArgs::from(id))
            .await
    }

    #[tracing::instrument]
    async fn customer_vehicles_by_customer(
        &self,
        customer_id: DbId,
    ) -> anyhow::Result<Vec<CustomerVehicle>> {
        let args = ByCustomerReqArgs { customer_id };
        self.request_json(PATH_API_CUSTOMER_VEHICLE_BY_CUSTOMER, &args)
            .await
    }

    #[tracing::instrument]
    async fn create_customer_vehicle(
        &self,
        draft: CustomerVehicleDraft,
    ) -> anyhow::Result<CustomerVehicle> {
        self.request_json(PATH_API_CUSTOMER_VEHICLE_CREATE, &draft)
            .await
    }

    #[tracing::instrument]
    async fn update_customer_vehicle(
        &self,
        vehicle: CustomerVehicle,
    ) -> anyhow::Result<CustomerVehicle> {
        self.request_json(PATH_API_CUSTOMER_VEHICLE_UPDATE, &vehicle)
            .await
    }

    #[tracing::instrument]
    async fn delete_customer_vehicle(&self, id: DbId) -> anyhow::Result<()> {
        self.request_empty(PATH_API_CUSTOMER_VEHICLE_DELETE, &IdReqArgs::from(id))
            .await
    }
}
