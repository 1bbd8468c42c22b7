//! Screen state and use-cases of the decal shop client. Everything here is
//! generic over [`decal_client_core::RemoteService`] so it can run against
//! the HTTP client or an in memory implementation.
//! NB: The assumption is made that the tokio runtime has already been started
//! before any functions from this library are called

#![warn(unused_crate_dependencies)]


mod app;
pub mod cli;
pub mod configuration;
pub mod pages;
pub mod tracing;

pub use app::DecalApp;
