//! Read only resources: decal services, stores and employees

use async_trait::async_trait;
use decal_shared::{
    const_config::path::{
        PATH_API_DECAL_SERVICE, PATH_API_DECAL_SERVICE_LIST, PATH_API_EMPLOYEE,
        PATH_API_EMPLOYEE_BY_STORE, PATH_API_EMPLOYEE_LIST, PATH_API_STORE, PATH_API_STORE_LIST,
    },
    id::DbId,
    models::{DecalService, Employee, Store},
    req_args::{ByStoreReqArgs, IdReqArgs},
};

use crate::{
    client::DUMMY_ARGUMENT,
    facade::{DecalServiceApi, EmployeeApi, StoreApi},
    Client,
};

#[async_trait]
impl DecalServiceApi for Client {
    #[tracing::instrument]
    async fn list_decal_services(&self) -> anyhow::Result<Vec<DecalService>> {
        self.request_json(PATH_API_DECAL_SERVICE_LIST, &DUMMY_ARGUMENT)
            .await
    }

    #[tracing::instrument]
    async fn get_decal_service(&self, id: DbId) -> anyhow::Result<DecalService> {
        self.request_json(PATH_API_DECAL_SERVICE, &IdReqArgs::from(id))
            .await
    }
}

#[async_trait]
impl EmployeeApi for Client {
    #[tracing::instrument]
    async fn list_employees(&self) -> anyhow::Result<Vec<Employee>> {
        self.request_json(PATH_API_EMPLOYEE_LIST, &DUMMY_ARGUMENT)
            .await
    }

    #[tracing::instrument]
    async fn get_employee(&self, id: DbId) -> anyhow::Result<Employee> {
        self.request_json(PATH_API_EMPLOYEE, &IdReqArgs::from(id))
            .await
    }

    #[tracing::instrument]
    async fn employees_by_store(&self, store_id: DbId) -> anyhow::Result<Vec<Employee>> {
        self.request_json(PATH_API_EMPLOYEE_BY_STORE, &ByStoreReqArgs { store_id })
            .await
    }
}

#[async_trait]
impl StoreApi for Client {
    #[tracing::instrument]
    async fn list_stores(&self) -> anyhow::Result<Vec<Store>> {
        self.request_json(PATH_API_STORE_LIST, &DUMMY_ARGUMENT).await
    }

    #[tracing::instrument]
    async fn get_store(&self, id: DbId) -> anyhow::Result<Store> {
        self.request_json(PATH_API_STORE, &IdReqArgs::from(id)).await
    }
}
