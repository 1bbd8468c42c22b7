//! Stores functionality that should be shared between different clients of the
//! decal shop API: the HTTP facade, durable token storage and the session
//! manager built on top of them.
//! NB: The assumption is made that the tokio runtime has already been started
//! before any functions from this library are called

#![warn(unused_crate_dependencies)]


mod client;
pub mod facade;
pub mod session;
pub mod token_store;

pub use client::{Client, DUMMY_ARGUMENT};
pub use facade::{
    AccountApi, AuthApi, CustomerApi, CustomerVehicleApi, DecalServiceApi, EmployeeApi, OrderApi,
    OrderDetailApi, OrderStageHistoryApi, PaymentApi, RemoteService, SessionBackend, StoreApi,
    VehicleApi,
};
pub use session::{AuthResult, SessionManager};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
