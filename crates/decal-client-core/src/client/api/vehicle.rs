use async_trait::async_trait;
use decal_shared::{
    const_config::path::{PATH_API_VEHICLE_BRAND_LIST, PATH_API_VEHICLE_MODEL_BY_BRAND},
    id::DbId,
    models::{VehicleBrand, VehicleModel},
    req_args::ByBrandReqArgs,
};

use crate::{client::DUMMY_ARGUMENT, facade::VehicleApi, Client};

#[async_trait]
impl VehicleApi for Client {
    #[tracing::instrument]
    async fn list_vehicle_brands(&self) -> anyhow::Result<Vec<VehicleBrand>> {
        self.request_json(PATH_API_VEHICLE_BRAND_LIST, &DUMMY_ARGUMENT)
            .await
    }

    #[tracing::instrument]
    async fn vehicle_models_by_brand(&self, brand_id: DbId) -> anyhow::Result<Vec<VehicleModel>> {
        self.request_json(PATH_API_VEHICLE_MODEL_BY_BRAND, &ByBrandReqArgs { brand_id })
            .await
    }
}
