use decal_client_core::{AuthApi as _, Client, MemoryTokenStore, TokenStore};
use decal_shared::{req_args::LoginReqArgs, uac::User};
use std::sync::Arc;

pub use decal_test_helper::{
    spawn_stub_server, StubServer, MSG_CUSTOMER_NOT_FOUND, MSG_INVALID_CREDENTIALS,
    STUB_ACCESS_TOKEN, STUB_PASSWORD, STUB_REFRESH_TOKEN, STUB_USERNAME,
};

pub struct TestApp {
    pub stub: StubServer,
    pub core_client: Client,
    pub token_store: Arc<MemoryTokenStore>,
}

pub async fn spawn_app() -> TestApp {
    let stub = spawn_stub_server().await;
    let token_store = Arc::new(MemoryTokenStore::default());
    let core_client = build_client(&stub, token_store.clone());
    TestApp {
        stub,
        core_client,
        token_store,
    }
}

pub fn build_client(stub: &StubServer, token_store: Arc<dyn TokenStore>) -> Client {
    Client::new(stub.address.clone(), token_store).expect("failed to build client")
}

pub fn login_args() -> LoginReqArgs {
    LoginReqArgs::new(STUB_USERNAME, STUB_PASSWORD.to_string().into())
}

impl TestApp {
    pub async fn login(&self) -> anyhow::Result<User> {
        self.core_client.login(login_args()).await
    }
}
