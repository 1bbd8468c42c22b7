//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

pub mod client {
    /// Used when no server address is configured
    pub const CLIENT_DEFAULT_SERVER_ADDRESS: &str = "http://localhost:8789";
    pub const CLIENT_DEFAULT_TOKEN_FILE: &str = "decal_tokens.ron";
}

pub mod validation {
    pub const VALIDATION_PASSWORD_MIN_LENGTH: usize = 6;
    pub const VALIDATION_EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
}

pub mod path {
    mod path_spec;
    pub use path_spec::PathSpec;

    pub const PATH_API_ACCOUNT: PathSpec = PathSpec::get("/api/account/");
    pub const PATH_API_ACCOUNT_CHANGE_PASSWORD: PathSpec =
        PathSpec::post("/api/account/change_password");
    pub const PATH_API_AUTH_LOGIN: PathSpec = PathSpec::post("/api/auth/login");
    pub const PATH_API_AUTH_LOGOUT: PathSpec = PathSpec::post("/api/auth/logout");
    pub const PATH_API_AUTH_ME: PathSpec = PathSpec::get("/api/auth/me");
    pub const PATH_API_AUTH_REGISTER: PathSpec = PathSpec::post("/api/auth/register");
    pub const PATH_API_CUSTOMER: PathSpec = PathSpec::get("/api/customer/");
    pub const PATH_API_CUSTOMER_CREATE: PathSpec = PathSpec::post("/api/customer/create");
    pub const PATH_API_CUSTOMER_DELETE: PathSpec = PathSpec::post("/api/customer/delete");
    pub const PATH_API_CUSTOMER_LIST: PathSpec = PathSpec::get("/api/customer/list");
    pub const PATH_API_CUSTOMER_UPDATE: PathSpec = PathSpec::post("/api/customer/update");
    pub const PATH_API_CUSTOMER_VEHICLE: PathSpec = PathSpec::get("/api/customer_vehicle/");
    pub const PATH_API_CUSTOMER_VEHICLE_BY_CUSTOMER: PathSpec =
        PathSpec::get("/api/customer_vehicle/by_customer");
    pub const PATH_API_CUSTOMER_VEHICLE_CREATE: PathSpec =
        PathSpec::post("/api/customer_vehicle/create");
    pub const PATH_API_CUSTOMER_VEHICLE_DELETE: PathSpec =
        PathSpec::post("/api/customer_vehicle/delete");
    pub const PATH_API_CUSTOMER_VEHICLE_LIST: PathSpec =
        PathSpec::get("/api/customer_vehicle/list");
    pub const PATH_API_CUSTOMER_VEHICLE_UPDATE: PathSpec =
        PathSpec::post("/api/customer_vehicle/update");
    pub const PATH_API_DECAL_SERVICE: PathSpec = PathSpec::get("/api/decal_service/");
    pub const PATH_API_DECAL_SERVICE_LIST: PathSpec = PathSpec::get("/api/decal_service/list");
    pub const PATH_API_EMPLOYEE: PathSpec = PathSpec::get("/api/employee/");
    pub const PATH_API_EMPLOYEE_BY_STORE: PathSpec = PathSpec::get("/api/employee/by_store");
    pub const PATH_API_EMPLOYEE_LIST: PathSpec = PathSpec::get("/api/employee/list");
    pub const PATH_API_ORDER: PathSpec = PathSpec::get("/api/order/");
    pub const PATH_API_ORDER_BY_CUSTOMER: PathSpec = PathSpec::get("/api/order/by_customer");
    pub const PATH_API_ORDER_BY_STORE: PathSpec = PathSpec::get("/api/order/by_store");
    pub const PATH_API_ORDER_CREATE: PathSpec = PathSpec::post("/api/order/create");
    pub const PATH_API_ORDER_DELETE: PathSpec = PathSpec::post("/api/order/delete");
    pub const PATH_API_ORDER_LIST: PathSpec = PathSpec::get("/api/order/list");
    pub const PATH_API_ORDER_UPDATE: PathSpec = PathSpec::post("/api/order/update");
    pub const PATH_API_ORDER_DETAIL: PathSpec = PathSpec::get("/api/order_detail/");
    pub const PATH_API_ORDER_DETAIL_BY_ORDER: PathSpec =
        PathSpec::get("/api/order_detail/by_order");
    pub const PATH_API_ORDER_DETAIL_CREATE: PathSpec = PathSpec::post("/api/order_detail/create");
    pub const PATH_API_ORDER_DETAIL_DELETE: PathSpec = PathSpec::post("/api/order_detail/delete");
    pub const PATH_API_ORDER_STAGE_HISTORY_BY_ORDER: PathSpec =
        PathSpec::get("/api/order_stage_history/by_order");
    pub const PATH_API_ORDER_STAGE_HISTORY_CREATE: PathSpec =
        PathSpec::post("/api/order_stage_history/create");
    pub const PATH_API_PAYMENT: PathSpec = PathSpec::get("/api/payment/");
    pub const PATH_API_PAYMENT_BY_ORDER: PathSpec = PathSpec::get("/api/payment/by_order");
    pub const PATH_API_PAYMENT_CREATE: PathSpec = PathSpec::post("/api/payment/create");
    pub const PATH_API_PAYMENT_LIST: PathSpec = PathSpec::get("/api/payment/list");
    pub const PATH_API_STORE: PathSpec = PathSpec::get("/api/store/");
    pub const PATH_API_STORE_LIST: PathSpec = PathSpec::get("/api/store/list");
    pub const PATH_API_VEHICLE_BRAND_LIST: PathSpec = PathSpec::get("/api/vehicle_brand/list");
    pub const PATH_API_VEHICLE_MODEL_BY_BRAND: PathSpec =
        PathSpec::get("/api/vehicle_model/by_brand");
    pub const PATH_HEALTH_CHECK: PathSpec = PathSpec::get("/health_check");
}
