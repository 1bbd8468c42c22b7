//! Code shared between the decal shop client crates

#![warn(unused_crate_dependencies)]

pub mod const_config;
pub mod errors;
pub mod id;
mod macros;
pub mod models;
pub mod req_args;
pub mod session;
pub mod telemetry;
pub mod token;
pub mod uac;
pub mod validation;
