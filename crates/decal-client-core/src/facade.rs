//! One trait per remote resource. [`crate::Client`] implements all of them over
//! HTTP; the session manager and the screens only see these traits so they can
//! be driven by any implementation.

use async_trait::async_trait;
use decal_shared::{
    id::DbId,
    models::{
        Customer, CustomerDraft, CustomerVehicle, CustomerVehicleDraft, DecalService, Employee,
        Order, OrderDetail, OrderDetailDraft, OrderDraft, OrderStageHistory,
        OrderStageHistoryDraft, Payment, PaymentDraft, Store, VehicleBrand, VehicleModel,
    },
    req_args::{ChangePasswordReqArgs, LoginReqArgs, RegisterReqArgs},
    uac::User,
};

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Checks the credentials and on success stores the issued tokens
    async fn login(&self, args: LoginReqArgs) -> anyhow::Result<User>;

    /// Creates an account. Does not log the new account in.
    async fn register(&self, args: RegisterReqArgs) -> anyhow::Result<User>;

    /// Invalidates the tokens on the server. Local tokens are cleared even if
    /// this returns an error.
    async fn logout(&self) -> anyhow::Result<()>;

    /// `true` if an access token is stored locally. Says nothing about whether
    /// the server still accepts it.
    async fn is_logged_in(&self) -> bool;

    async fn current_user(&self) -> anyhow::Result<User>;
}

#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn get_account(&self, id: DbId) -> anyhow::Result<User>;
    async fn change_password(&self, args: ChangePasswordReqArgs) -> anyhow::Result<()>;
}

#[async_trait]
pub trait CustomerApi: Send + Sync {
    async fn list_customers(&self) -> anyhow::Result<Vec<Customer>>;
    async fn get_customer(&self, id: DbId) -> anyhow::Result<Customer>;
    async fn create_customer(&self, draft: CustomerDraft) -> anyhow::Result<Customer>;
    async fn update_customer(&self, customer: Customer) -> anyhow::Result<Customer>;
    async fn delete_customer(&self, id: DbId) -> anyhow::Result<()>;
}

#[async_trait]
pub trait CustomerVehicleApi: Send + Sync {
    async fn list_customer_vehicles(&self) -> anyhow::Result<Vec<CustomerVehicle>>;
    async fn get_customer_vehicle(&self, id: DbId) -> anyhow::Result<CustomerVehicle>;
    async fn customer_vehicles_by_customer(
        &self,
        customer_id: DbId,
    ) -> anyhow::Result<Vec<CustomerVehicle>>;
    async fn create_customer_vehicle(
        &self,
        draft: CustomerVehicleDraft,
    ) -> anyhow::Result<CustomerVehicle>;
    async fn update_customer_vehicle(
        &self,
        vehicle: CustomerVehicle,
    ) -> anyhow::Result<CustomerVehicle>;
    async fn delete_customer_vehicle(&self, id: DbId) -> anyhow::Result<()>;
}

#[async_trait]
pub trait DecalServiceApi: Send + Sync {
    async fn list_decal_services(&self) -> anyhow::Result<Vec<DecalService>>;
    async fn get_decal_service(&self, id: DbId) -> anyhow::Result<DecalService>;
}

#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list_employees(&self) -> anyhow::Result<Vec<Employee>>;
    async fn get_employee(&self, id: DbId) -> anyhow::Result<Employee>;
    async fn employees_by_store(&self, store_id: DbId) -> anyhow::Result<Vec<Employee>>;
}

#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn list_orders(&self) -> anyhow::Result<Vec<Order>>;
    async fn get_order(&self, id: DbId) -> anyhow::Result<Order>;
    async fn orders_by_customer(&self, customer_id: DbId) -> anyhow::Result<Vec<Order>>;
    async fn orders_by_store(&self, store_id: DbId) -> anyhow::Result<Vec<Order>>;
    async fn create_order(&self, draft: OrderDraft) -> anyhow::Result<Order>;
    async fn update_order(&self, order: Order) -> anyhow::Result<Order>;
    async fn delete_order(&self, id: DbId) -> anyhow::Result<()>;
}

#[async_trait]
pub trait OrderDetailApi: Send + Sync {
    async fn get_order_detail(&self, id: DbId) -> anyhow::Result<OrderDetail>;
    async fn order_details_by_order(&self, order_id: DbId) -> anyhow::Result<Vec<OrderDetail>>;
    async fn create_order_detail(&self, draft: OrderDetailDraft) -> anyhow::Result<OrderDetail>;
    async fn delete_order_detail(&self, id: DbId) -> anyhow::Result<()>;
}

#[async_trait]
pub trait OrderStageHistoryApi: Send + Sync {
    async fn stage_history_by_order(
        &self,
        order_id: DbId,
    ) -> anyhow::Result<Vec<OrderStageHistory>>;
    async fn create_stage_history(
        &self,
        draft: OrderStageHistoryDraft,
    ) -> anyhow::Result<OrderStageHistory>;
}

#[async_trait]
pub trait PaymentApi: Send + Sync {
    async fn list_payments(&self) -> anyhow::Result<Vec<Payment>>;
    async fn get_payment(&self, id: DbId) -> anyhow::Result<Payment>;
    async fn payments_by_order(&self, order_id: DbId) -> anyhow::Result<Vec<Payment>>;
    async fn create_payment(&self, draft: PaymentDraft) -> anyhow::Result<Payment>;
}

#[async_trait]
pub trait StoreApi: Send + Sync {
    async fn list_stores(&self) -> anyhow::Result<Vec<Store>>;
    async fn get_store(&self, id: DbId) -> anyhow::Result<Store>;
}

#[async_trait]
pub trait VehicleApi: Send + Sync {
    async fn list_vehicle_brands(&self) -> anyhow::Result<Vec<VehicleBrand>>;
    async fn vehicle_models_by_brand(&self, brand_id: DbId) -> anyhow::Result<Vec<VehicleModel>>;
}

/// What the session manager needs from the remote side
pub trait SessionBackend: AuthApi + EmployeeApi + 'static {}
impl<T> SessionBackend for T where T: AuthApi + EmployeeApi + 'static {}

/// Every resource of the remote API
pub trait RemoteService:
    SessionBackend
    + AccountApi
    + CustomerApi
    + CustomerVehicleApi
    + DecalServiceApi
    + OrderApi
    + OrderDetailApi
    + OrderStageHistoryApi
    + PaymentApi
    + StoreApi
    + VehicleApi
{
}
impl<T> RemoteService for T where
    T: SessionBackend
        + AccountApi
        + CustomerApi
        + CustomerVehicleApi
        + DecalServiceApi
        + OrderApi
        + OrderDetailApi
        + OrderStageHistoryApi
        + PaymentApi
        + StoreApi
        + VehicleApi
{
}
