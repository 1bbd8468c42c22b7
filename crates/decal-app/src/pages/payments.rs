use decal_client_core::{PaymentApi, RemoteService, SessionManager};
use decal_shared::{
    id::DbId,
    models::{Payment, PaymentDraft},
    uac::Feature,
};
use std::sync::Arc;

use super::{check_access, ScreenState};

/// Payments of a single order
#[derive(Debug)]
pub struct PaymentScreen<R> {
    session: Arc<SessionManager<R>>,
    pub state: ScreenState<Vec<Payment>>,
}

impl<R: RemoteService> PaymentScreen<R> {
    pub fn new(session: Arc<SessionManager<R>>) -> Self {
        Self {
            session,
            state: ScreenState::new(),
        }
    }

    pub async fn load(&self, order_id: DbId) {
        if let Err(msg) = check_access(&self.session, Feature::Payments) {
            return self.state.set_error(msg);
        }
        self.state
            .load(self.session.backend().payments_by_order(order_id))
            .await;
    }

    /// Records a payment and reloads the payments of its order
    pub async fn create_payment(&self, draft: PaymentDraft) -> Option<Payment> {
        if let Err(msg) = check_access(&self.session, Feature::Payments) {
            self.state.set_error(msg);
            return None;
        }
        let order_id = draft.order_id;
        let payment = self
            .state
            .mutate(self.session.backend().create_payment(draft))
            .await?;
        self.load(order_id).await;
        Some(payment)
    }
}
