use async_trait::async_trait;
use decal_shared::{
    const_config::path::{
        PATH_API_PAYMENT, PATH_API_PAYMENT_BY_ORDER, PATH_API_PAYMENT_CREATE,
        PATH_API_PAYMENT_LIST,
    },
    id::DbId,
    models::{Payment, PaymentDraft},
    req_args::{ByOrderReqArgs, IdReqArgs},
};

use crate::{client::DUMMY_ARGUMENT, facade::PaymentApi, Client};

#[async_trait]
impl PaymentApi for Client {
    #[tracing::instrument]
    async fn list_payments(&self) -> anyhow::Result<Vec<Payment>> {
        self.request_json(PATH_API_PAYMENT_LIST, &DUMMY_ARGUMENT).await
    }

    #[tracing::instrument]
    async fn get_payment(&self, id: DbId) -> anyhow::Result<Payment> {
        self.request_json(PATH_API_PAYMENT, &IdReqArgs::from(id)).await
    }

    #[tracing::instrument]
    async fn payments_by_order(&self, order_id: DbId) -> anyhow::Result<Vec<Payment>> {
        self.request_json(PATH_API_PAYMENT_BY_ORDER, &ByOrderReqArgs { order_id })
            .await
    }

    #[tracing::instrument]
    async fn create_payment(&self, draft: PaymentDraft) -> anyhow::Result<Payment> {
        self.request_json(PATH_API_PAYMENT_CREATE, &draft).await
    }
}
