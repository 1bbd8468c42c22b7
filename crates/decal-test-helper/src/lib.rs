//! A stand in for the decal shop API. Only the endpoints the client tests need
//! are served and all data lives in memory. Every request is recorded so tests
//! can check what the client actually sent.

#![warn(unused_crate_dependencies)]

use actix_web::{
    dev::{Service as _, ServiceRequest},
    http::header::AUTHORIZATION,
    web, App, HttpRequest, HttpResponse, HttpServer,
};
use chrono::{TimeZone as _, Utc};
use decal_shared::{
    const_config::path::{
        PATH_API_AUTH_LOGIN, PATH_API_AUTH_LOGOUT, PATH_API_AUTH_ME, PATH_API_CUSTOMER,
        PATH_API_CUSTOMER_CREATE, PATH_API_CUSTOMER_LIST, PATH_HEALTH_CHECK,
    },
    id::DbId,
    models::{Customer, CustomerDraft},
    req_args::IdReqArgs,
    telemetry::{self, get_subscriber, init_subscriber},
    uac::{Role, User},
};
use std::{
    fmt::Debug,
    net::TcpListener,
    ops::Deref,
    sync::{
        atomic::{AtomicBool, Ordering},
        LazyLock, Mutex,
    },
};
use tracing::info;
use uuid::Uuid;

pub const STUB_USERNAME: &str = "alice";
pub const STUB_PASSWORD: &str = "hunter2";
pub const STUB_ACCESS_TOKEN: &str = "access-1";
pub const STUB_REFRESH_TOKEN: &str = "refresh-1";
pub const STUB_EMPLOYEE_ID: u64 = 7;
pub const MSG_INVALID_CREDENTIALS: &str = "Sai tên đăng nhập hoặc mật khẩu";
pub const MSG_CUSTOMER_NOT_FOUND: &str = "Không tìm thấy khách hàng";

// Ensure that the `tracing` stack is only initialised once
pub static TRACING: LazyLock<String> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let log_file_name = format!("client_tests{}", Uuid::new_v4());
        let (file, path) = telemetry::create_trace_file(&log_file_name).unwrap();
        let subscriber = get_subscriber(subscriber_name, default_filter_level, file);
        init_subscriber(subscriber).unwrap();
        format!("Traces for tests being written to: {path:?}")
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).unwrap();
        "Traces set to std::io::sink".to_string()
    }
});

/// What the stub saw of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

#[derive(Debug, Default)]
pub struct StubState {
    requests: Mutex<Vec<RecordedRequest>>,
    logout_bodies: Mutex<Vec<serde_json::Value>>,
    customers: Mutex<Vec<Customer>>,
    fail_logout: AtomicBool,
    revoked: AtomicBool,
}

pub struct StubServer {
    pub address: String,
    state: web::Data<StubState>,
}

impl Debug for StubServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StubServer")
            .field("address", &self.address)
            .finish()
    }
}

impl StubServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }

    pub fn logout_bodies(&self) -> Vec<serde_json::Value> {
        self.state.logout_bodies.lock().unwrap().clone()
    }

    pub fn set_fail_logout(&self, value: bool) {
        self.state.fail_logout.store(value, Ordering::SeqCst);
    }

    /// Makes the server reject the access token it issued
    pub fn revoke_tokens(&self) {
        self.state.revoked.store(true, Ordering::SeqCst);
    }

    pub fn seed_customer(&self, draft: CustomerDraft) -> Customer {
        self.state.insert_customer(draft)
    }
}

impl StubState {
    fn record(&self, req: &ServiceRequest) {
        let recorded = RecordedRequest {
            method: req.method().to_string(),
            path: req.path().to_string(),
            authorization: req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
        };
        self.requests.lock().unwrap().push(recorded);
    }

    fn is_authorized(&self, req: &HttpRequest) -> bool {
        let expected = format!("Bearer {STUB_ACCESS_TOKEN}");
        !self.revoked.load(Ordering::SeqCst)
            && req
                .headers()
                .get(AUTHORIZATION)
                .is_some_and(|value| value.as_bytes() == expected.as_bytes())
    }

    fn insert_customer(&self, draft: CustomerDraft) -> Customer {
        let mut customers = self.customers.lock().unwrap();
        let customer = Customer {
            customer_id: DbId::from(customers.len() as u64 + 1),
            first_name: draft.first_name,
            last_name: draft.last_name,
            phone_number: draft.phone_number,
            email: draft.email,
            address: draft.address,
            account_id: None,
            created_at: Some(Utc::now()),
        };
        customers.push(customer.clone());
        customer
    }
}

/// The account the stub logs in as
pub fn stub_user() -> User {
    User {
        account_id: 1.into(),
        username: STUB_USERNAME.try_into().unwrap(),
        email: "alice@example.com".to_string(),
        full_name: "Alice Nguyen".to_string(),
        phone_number: Some("0900000001".to_string()),
        role: Role::Sales,
        is_active: true,
        created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        last_login_at: None,
        employee_id: Some(STUB_EMPLOYEE_ID.into()),
    }
}

pub fn port_to_test_address(application_port: u16) -> String {
    format!("http://127.0.0.1:{application_port}")
}

/// Starts the stub on a random port in the background of the current tokio
/// runtime
pub async fn spawn_stub_server() -> StubServer {
    start_tracing();
    let state = web::Data::new(StubState::default());
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
    let port = listener
        .local_addr()
        .expect("failed to get local address of listener")
        .port();

    let server_state = state.clone();
    let server = HttpServer::new(move || {
        let recorder = server_state.clone();
        App::new()
            .wrap_fn(move |req, srv| {
                recorder.record(&req);
                srv.call(req)
            })
            .app_data(server_state.clone())
            .route(PATH_HEALTH_CHECK.path, web::get().to(health_check))
            .route(PATH_API_AUTH_LOGIN.path, web::post().to(login))
            .route(PATH_API_AUTH_LOGOUT.path, web::post().to(logout))
            .route(PATH_API_AUTH_ME.path, web::get().to(me))
            .route(PATH_API_CUSTOMER_LIST.path, web::get().to(customer_list))
            .route(PATH_API_CUSTOMER.path, web::get().to(customer))
            .route(PATH_API_CUSTOMER_CREATE.path, web::post().to(customer_create))
    })
    .workers(1)
    .listen(listener)
    .expect("failed to bind stub server to listener")
    .run();
    tokio::spawn(server);
    info!(?port, "stub server started");

    StubServer {
        address: port_to_test_address(port),
        state,
    }
}

fn start_tracing() {
    // Accessing TRACING also forces the LazyLock to initialize
    let logging_msg = TRACING.deref();
    println!("{logging_msg}");
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[derive(Debug, serde::Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

async fn login(state: web::Data<StubState>, body: web::Json<LoginBody>) -> HttpResponse {
    if body.username != STUB_USERNAME || body.password != STUB_PASSWORD {
        return HttpResponse::Unauthorized().body(MSG_INVALID_CREDENTIALS);
    }
    state.revoked.store(false, Ordering::SeqCst);
    HttpResponse::Ok().json(serde_json::json!({
        "accessToken": STUB_ACCESS_TOKEN,
        "refreshToken": STUB_REFRESH_TOKEN,
        "account": stub_user(),
    }))
}

async fn logout(state: web::Data<StubState>, body: web::Json<serde_json::Value>) -> HttpResponse {
    state.logout_bodies.lock().unwrap().push(body.into_inner());
    if state.fail_logout.load(Ordering::SeqCst) {
        return HttpResponse::InternalServerError().body("logout failed");
    }
    state.revoked.store(true, Ordering::SeqCst);
    HttpResponse::Ok().finish()
}

async fn me(req: HttpRequest, state: web::Data<StubState>) -> HttpResponse {
    if !state.is_authorized(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    HttpResponse::Ok().json(stub_user())
}

async fn customer_list(req: HttpRequest, state: web::Data<StubState>) -> HttpResponse {
    if !state.is_authorized(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    let customers = state.customers.lock().unwrap().clone();
    HttpResponse::Ok().json(customers)
}

async fn customer(
    req: HttpRequest,
    state: web::Data<StubState>,
    args: web::Query<IdReqArgs>,
) -> HttpResponse {
    if !state.is_authorized(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    let found = state
        .customers
        .lock()
        .unwrap()
        .iter()
        .find(|customer| customer.customer_id == args.id)
        .cloned();
    match found {
        Some(customer) => HttpResponse::Ok().json(customer),
        None => HttpResponse::NotFound().body(MSG_CUSTOMER_NOT_FOUND),
    }
}

async fn customer_create(
    req: HttpRequest,
    state: web::Data<StubState>,
    draft: web::Json<CustomerDraft>,
) -> HttpResponse {
    if !state.is_authorized(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    HttpResponse::Created().json(state.insert_customer(draft.into_inner()))
}
