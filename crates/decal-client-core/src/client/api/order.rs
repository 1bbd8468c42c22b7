use async_trait::async_trait;
use decal_shared::{
    const_config::path::{
        PATH_API_ORDER, PATH_API_ORDER_BY_CUSTOMER, PATH_API_ORDER_BY_STORE,
        PATH_API_ORDER_CREATE, PATH_API_ORDER_DELETE, PATH_API_ORDER_DETAIL,
        PATH_API_ORDER_DETAIL_BY_ORDER, PATH_API_ORDER_DETAIL_CREATE,
        PATH_API_ORDER_DETAIL_DELETE, PATH_API_ORDER_LIST, PATH_API_ORDER_STAGE_HISTORY_BY_ORDER,
        PATH_API_ORDER_STAGE_HISTORY_CREATE, PATH_API_ORDER_UPDATE,
    },
    id::DbId,
    models::{
        Order, OrderDetail, OrderDetailDraft, OrderDraft, OrderStageHistory,
        OrderStageHistoryDraft,
    },
    req_args::{ByCustomerReqArgs, ByOrderReqArgs, ByStoreReqArgs, IdReqArgs},
};

use crate::{
    client::DUMMY_ARGUMENT,
    facade::{OrderApi, OrderDetailApi, OrderStageHistoryApi},
    Client,
};

#[async_trait]
impl OrderApi for Client {
    #[tracing::instrument]
    async fn list_orders(&self) -> anyhow::Result<Vec<Order>> {
        self.request_json(PATH_API_ORDER_LIST, &DUMMY_ARGUMENT).await
    }

    #[tracing::instrument]
    async fn get_order(&self, id: DbId) -> anyhow::Result<Order> {
        self.request_json(PATH_API_ORDER, &IdReqArgs::from(id)).await
    }

    #[tracing::instrument]
    async fn orders_by_customer(&self, customer_id: DbId) -> anyhow::Result<Vec<Order>> {
        self.request_json(PATH_API_ORDER_BY_CUSTOMER, &ByCustomerReqArgs { customer_id })
            .await
    }

    #[tracing::instrument]
    async fn orders_by_store(&self, store_id: DbId) -> anyhow::Result<Vec<Order>> {
        self.request_json(PATH_API_ORDER_BY_STORE, &ByStoreReqArgs { store_id })
            .await
    }

    #[tracing::instrument]
    async fn create_order(&self, draft: OrderDraft) -> anyhow::Result<Order> {
        self.request_json(PATH_API_ORDER_CREATE, &draft).await
    }

    #[tracing::instrument]
    async fn update_order(&self, order: Order) -> anyhow::Result<Order> {
        self.request_json(PATH_API_ORDER_UPDATE, &order).await
    }

    #[tracing::instrument]
    async fn delete_order(&self, id: DbId) -> anyhow::Result<()> {
        self.request_empty(PATH_API_ORDER_DELETE, &IdReqArgs::from(id))
            .await
    }
}

#[async_trait]
impl OrderDetailApi for Client {
    #[tracing::instrument]
    async fn get_order_detail(&self, id: DbId) -> anyhow::Result<OrderDetail> {
        self.request_json(PATH_API_ORDER_DETAIL, &IdReqArgs::from(id))
            .await
    }

    #[tracing::instrument]
    async fn order_details_by_order(&self, order_id: DbId) -> anyhow::Result<Vec<OrderDetail>> {
        self.request_json(PATH_API_ORDER_DETAIL_BY_ORDER, &ByOrderReqArgs { order_id })
            .await
    }

    #[tracing::instrument]
    async fn create_order_detail(&self, draft: OrderDetailDraft) -> anyhow::Result<OrderDetail> {
        self.request_json(PATH_API_ORDER_DETAIL_CREATE, &draft).await
    }

    #[tracing::instrument]
    async fn delete_order_detail(&self, id: DbId) -> anyhow::Result<()> {
        self.request_empty(PATH_API_ORDER_DETAIL_DELETE, &IdReqArgs::from(id))
            .await
    }
}

#[async_trait]
impl OrderStageHistoryApi for Client {
    #[tracing::instrument]
    async fn stage_history_by_order(
        &self,
        order_id: DbId,
    ) -> anyhow::Result<Vec<OrderStageHistory>> {
        self.request_json(
            PATH_API_ORDER_STAGE_HISTORY_BY_ORDER,
            &ByOrderReqArgs { order_id },
        )
        .await
    }

    #[tracing::instrument]
    async fn create_stage_history(
        &self,
        draft: OrderStageHistoryDraft,
    ) -> anyhow::Result<OrderStageHistory> {
        self.request_json(PATH_API_ORDER_STAGE_HISTORY_CREATE, &draft)
            .await
    }
}
