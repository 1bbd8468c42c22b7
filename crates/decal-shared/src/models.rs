//! Flat records mirroring the resources of the remote API.
//!
//! Field names are camelCase on the wire. `*Draft` types carry the fields a
//! client sends when creating a record; the server assigns the id.

mod catalog;
mod customer;
mod employee;
mod order;
mod payment;
mod vehicle;

pub use catalog::{DecalService, Store};
pub use customer::{Customer, CustomerDraft};
pub use employee::Employee;
pub use order::{
    Order, OrderDetail, OrderDetailDraft, OrderDraft, OrderStageHistory, OrderStageHistoryDraft,
};
pub use payment::{Payment, PaymentDraft};
pub use vehicle::{CustomerVehicle, CustomerVehicleDraft, VehicleBrand, VehicleModel};
