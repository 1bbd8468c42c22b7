use decal_client_core::{DecalServiceApi, RemoteService, SessionManager};
use decal_shared::{models::DecalService, uac::Feature};
use std::sync::Arc;

use super::{check_access, ScreenState};

#[derive(Debug)]
pub struct ServiceListScreen<R> {
    session: Arc<SessionManager<R>>,
    pub state: ScreenState<Vec<DecalService>>,
}

impl<R: RemoteService> ServiceListScreen<R> {
    pub fn new(session: Arc<SessionManager<R>>) -> Self {
        Self {
            session,
            state: ScreenState::new(),
        }
    }

    pub async fn load(&self) {
        if let Err(msg) = check_access(&self.session, Feature::Services) {
            return self.state.set_error(msg);
        }
        self.state
            .load(self.session.backend().list_decal_services())
            .await;
    }
}
