use decal_client_core::{
    OrderApi, OrderDetailApi, OrderStageHistoryApi, RemoteService, SessionManager,
};
use decal_shared::{
    id::DbId,
    models::{Order, OrderDetail, OrderStageHistory, OrderStageHistoryDraft},
    uac::Feature,
};
use std::sync::Arc;

use super::{check_access, ScreenState};

/// Which orders [`OrderListScreen`] shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderFilter {
    #[default]
    All,
    ByCustomer(DbId),
    ByStore(DbId),
}

#[derive(Debug)]
pub struct OrderListScreen<R> {
    session: Arc<SessionManager<R>>,
    pub state: ScreenState<Vec<Order>>,
}

impl<R: RemoteService> OrderListScreen<R> {
    pub fn new(session: Arc<SessionManager<R>>) -> Self {
        Self {
            session,
            state: ScreenState::new(),
        }
    }

    pub async fn load(&self, filter: OrderFilter) {
        if let Err(msg) = check_access(&self.session, Feature::Orders) {
            return self.state.set_error(msg);
        }
        let remote = self.session.backend();
        match filter {
            OrderFilter::All => self.state.load(remote.list_orders()).await,
            OrderFilter::ByCustomer(customer_id) => {
                self.state.load(remote.orders_by_customer(customer_id)).await
            }
            OrderFilter::ByStore(store_id) => {
                self.state.load(remote.orders_by_store(store_id)).await
            }
        }
    }
}

/// An order with its line items and the stages it went through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailView {
    pub order: Order,
    pub details: Vec<OrderDetail>,
    pub stage_history: Vec<OrderStageHistory>,
}

#[derive(Debug)]
pub struct OrderDetailScreen<R> {
    session: Arc<SessionManager<R>>,
    pub state: ScreenState<OrderDetailView>,
}

impl<R: RemoteService> OrderDetailScreen<R> {
    pub fn new(session: Arc<SessionManager<R>>) -> Self {
        Self {
            session,
            state: ScreenState::new(),
        }
    }

    pub async fn load(&self, order_id: DbId) {
        if let Err(msg) = check_access(&self.session, Feature::OrderProgress) {
            return self.state.set_error(msg);
        }
        let remote = self.session.backend();
        self.state
            .load(async {
                let (order, details, stage_history) = futures::try_join!(
                    remote.get_order(order_id),
                    remote.order_details_by_order(order_id),
                    remote.stage_history_by_order(order_id),
                )?;
                Ok(OrderDetailView {
                    order,
                    details,
                    stage_history,
                })
            })
            .await;
    }

    /// Moves the order to a new stage and reloads it
    pub async fn add_stage(&self, draft: OrderStageHistoryDraft) -> Option<OrderStageHistory> {
        if let Err(msg) = check_access(&self.session, Feature::OrderProgress) {
            self.state.set_error(msg);
            return None;
        }
        let order_id = draft.order_id;
        let entry = self
            .state
            .mutate(self.session.backend().create_stage_history(draft))
            .await?;
        self.load(order_id).await;
        Some(entry)
    }
}
