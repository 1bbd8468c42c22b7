use anyhow::{bail, Context as _};
use async_trait::async_trait;
use chrono::{TimeZone as _, Utc};
use decal_app::{configuration::AuthSettings, DecalApp};
use decal_client_core::{
    AccountApi, AuthApi, CustomerApi, CustomerVehicleApi, DecalServiceApi, EmployeeApi, OrderApi,
    OrderDetailApi, OrderStageHistoryApi, PaymentApi, StoreApi, VehicleApi,
};
use decal_shared::{
    id::DbId,
    models::{
        Customer, CustomerDraft, CustomerVehicle, CustomerVehicleDraft, DecalService, Employee,
        Order, OrderDetail, OrderDetailDraft, OrderDraft, OrderStageHistory,
        OrderStageHistoryDraft, Payment, PaymentDraft, Store, VehicleBrand, VehicleModel,
    },
    req_args::{ChangePasswordReqArgs, LoginReqArgs, RegisterReqArgs},
    uac::{Role, User},
};
use futures::channel::oneshot;
use rust_decimal::Decimal;
use secrecy::{ExposeSecret as _, SecretString};
use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

pub const MSG_INVALID_CREDENTIALS: &str = "Sai tên đăng nhập hoặc mật khẩu";
pub const MSG_NOT_FOUND: &str = "Không tìm thấy dữ liệu";
pub const ALICE_EMPLOYEE_ID: u64 = 7;

/// In memory stand in for the remote API.
///
/// Every call is counted. `fail_with` makes every data call (not auth) fail
/// with that message. Customer list calls can be held back with
/// [`FakeRemote::hold_customer_lists`].
#[derive(Debug, Default)]
pub struct FakeRemote {
    data: Mutex<FakeData>,
    calls: AtomicUsize,
    has_token: AtomicBool,
    fail_logout: AtomicBool,
    fail_with: Mutex<Option<String>>,
    held_customer_lists: Mutex<VecDeque<oneshot::Receiver<Vec<Customer>>>>,
}

#[derive(Debug, Default)]
struct FakeData {
    accounts: Vec<(String, User)>,
    employees: Vec<Employee>,
    customers: Vec<Customer>,
    vehicles: Vec<CustomerVehicle>,
    brands: Vec<VehicleBrand>,
    models: Vec<VehicleModel>,
    services: Vec<DecalService>,
    stores: Vec<Store>,
    orders: Vec<Order>,
    details: Vec<OrderDetail>,
    stages: Vec<OrderStageHistory>,
    payments: Vec<Payment>,
    last_id: u64,
}

impl FakeData {
    fn next_id(&mut self) -> DbId {
        self.last_id += 1;
        self.last_id.into()
    }
}

pub struct TestApp {
    pub app: DecalApp<FakeRemote>,
    pub remote: Arc<FakeRemote>,
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(AuthSettings::default())
}

pub fn spawn_app_with(auth_settings: AuthSettings) -> TestApp {
    let remote = Arc::new(FakeRemote::seeded());
    let app = DecalApp::new(Arc::clone(&remote), auth_settings);
    TestApp { app, remote }
}

pub fn password(value: &str) -> SecretString {
    value.to_string().into()
}

impl TestApp {
    /// Logs in through the session manager, panics on failure
    pub async fn login_as(&self, username: &str, password_value: &str) {
        let outcome = self
            .app
            .session()
            .login(username, password(password_value))
            .await;
        assert!(outcome.is_success(), "login failed: {outcome:?}");
    }

    pub async fn login_as_sales(&self) {
        self.login_as("alice", "hunter2").await
    }
}

pub fn user(account_id: u64, username: &str, role: Role, employee_id: Option<u64>) -> User {
    User {
        account_id: account_id.into(),
        username: username.try_into().unwrap(),
        email: format!("{username}@example.com"),
        full_name: format!("{username} full name"),
        phone_number: None,
        role,
        is_active: true,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
        last_login_at: None,
        employee_id: employee_id.map(Into::into),
    }
}

pub fn customer_draft(first_name: &str) -> CustomerDraft {
    CustomerDraft {
        first_name: first_name.to_string(),
        last_name: "Pham".to_string(),
        phone_number: "0911111111".to_string(),
        ..Default::default()
    }
}

fn customer_from(id: DbId, draft: CustomerDraft) -> Customer {
    Customer {
        customer_id: id,
        first_name: draft.first_name,
        last_name: draft.last_name,
        phone_number: draft.phone_number,
        email: draft.email,
        address: draft.address,
        account_id: None,
        created_at: None,
    }
}

impl FakeRemote {
    /// Accounts for every role plus one customer with a vehicle, an order and
    /// a payment
    pub fn seeded() -> Self {
        let mut data = FakeData::default();
        data.accounts = vec![
            (
                "hunter2".to_string(),
                user(1, "alice", Role::Sales, Some(ALICE_EMPLOYEE_ID)),
            ),
            ("secret1".to_string(), user(2, "boss", Role::Manager, Some(8))),
            ("secret2".to_string(), user(3, "tech", Role::Technician, Some(9))),
            ("secret3".to_string(), user(4, "lan", Role::Customer, None)),
            ("secret4".to_string(), user(5, "root", Role::Admin, None)),
        ];
        data.employees = vec![Employee {
            employee_id: ALICE_EMPLOYEE_ID.into(),
            first_name: "Alice".to_string(),
            last_name: "Nguyen".to_string(),
            phone_number: Some("0900000001".to_string()),
            email: Some("alice@example.com".to_string()),
            store_id: Some(1.into()),
            account_id: Some(1.into()),
            account_role_name: Some("SALES".to_string()),
            is_active: true,
        }];
        data.last_id = 100;
        data.brands = vec![
            VehicleBrand {
                brand_id: 1.into(),
                brand_name: "Honda".to_string(),
            },
            VehicleBrand {
                brand_id: 2.into(),
                brand_name: "Yamaha".to_string(),
            },
        ];
        data.models = vec![
            VehicleModel {
                model_id: 11.into(),
                model_name: "Vision".to_string(),
                brand_id: 1.into(),
                chassis_type: None,
            },
            VehicleModel {
                model_id: 21.into(),
                model_name: "Exciter".to_string(),
                brand_id: 2.into(),
                chassis_type: Some("underbone".to_string()),
            },
        ];
        data.services = vec![DecalService {
            service_id: 31.into(),
            service_name: "Dán decal toàn xe".to_string(),
            description: None,
            price: Decimal::new(1_500_000, 0),
            standard_work_units: Some(4),
            decal_type_name: None,
        }];
        let customer = customer_from(41.into(), customer_draft("Lan"));
        data.vehicles = vec![CustomerVehicle {
            vehicle_id: 51.into(),
            customer_id: customer.customer_id,
            model_id: 11.into(),
            license_plate: "59X1-12345".to_string(),
            chassis_number: None,
            color: Some("Đỏ".to_string()),
            year: Some(2022),
        }];
        data.orders = vec![Order {
            order_id: 61.into(),
            order_date: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            order_status: "NEW".to_string(),
            total_amount: Decimal::new(1_500_000, 0),
            customer_id: customer.customer_id,
            assigned_employee_id: Some(ALICE_EMPLOYEE_ID.into()),
            vehicle_id: Some(51.into()),
            current_stage: None,
            is_custom_decal: false,
        }];
        data.details = vec![OrderDetail {
            order_detail_id: 71.into(),
            order_id: 61.into(),
            service_id: 31.into(),
            quantity: 1,
            price: Decimal::new(1_500_000, 0),
            final_calculated_price: None,
        }];
        data.payments = vec![Payment {
            payment_id: 81.into(),
            order_id: 61.into(),
            amount: Decimal::new(500_000, 0),
            payment_date: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
            payment_method: "CASH".to_string(),
            payment_status: "PAID".to_string(),
            transaction_code: None,
            notes: None,
        }];
        data.customers = vec![customer];
        Self {
            data: Mutex::new(data),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn has_token(&self) -> bool {
        self.has_token.load(Ordering::SeqCst)
    }

    pub fn set_fail_logout(&self, value: bool) {
        self.fail_logout.store(value, Ordering::SeqCst);
    }

    pub fn fail_with(&self, msg: Option<&str>) {
        *self.fail_with.lock().unwrap() = msg.map(str::to_string);
    }

    /// The next customer list calls wait for and return what is sent on the
    /// matching sender, in call order
    pub fn hold_customer_lists(&self, count: usize) -> Vec<oneshot::Sender<Vec<Customer>>> {
        let mut held = self.held_customer_lists.lock().unwrap();
        (0..count)
            .map(|_| {
                let (tx, rx) = oneshot::channel();
                held.push_back(rx);
                tx
            })
            .collect()
    }

    pub fn customers(&self) -> Vec<Customer> {
        self.data.lock().unwrap().customers.clone()
    }

    fn count(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Counts the call and fails it if a failure is set
    fn data_call(&self) -> anyhow::Result<std::sync::MutexGuard<'_, FakeData>> {
        self.count();
        if let Some(msg) = self.fail_with.lock().unwrap().clone() {
            bail!(msg);
        }
        Ok(self.data.lock().unwrap())
    }
}

fn find<T: Clone>(items: &[T], is_match: impl Fn(&T) -> bool) -> anyhow::Result<T> {
    items.iter().find(|item| is_match(item)).cloned().context(MSG_NOT_FOUND)
}

#[async_trait]
impl AuthApi for FakeRemote {
    async fn login(&self, args: LoginReqArgs) -> anyhow::Result<User> {
        self.count();
        let data = self.data.lock().unwrap();
        let user = data
            .accounts
            .iter()
            .find(|(password, user)| {
                user.username == args.username.as_str()
                    && password.as_str() == args.password.expose_secret()
            })
            .map(|(_, user)| user.clone())
            .context(MSG_INVALID_CREDENTIALS)?;
        self.has_token.store(true, Ordering::SeqCst);
        Ok(user)
    }

    async fn register(&self, args: RegisterReqArgs) -> anyhow::Result<User> {
        let mut data = self.data_call()?;
        let account_id = data.next_id();
        let mut created = user(account_id.into(), &args.username, Role::Customer, None);
        created.full_name = args.full_name;
        created.email = args.email;
        created.phone_number = args.phone_number;
        data.accounts
            .push((args.password.expose_secret().to_string(), created.clone()));
        Ok(created)
    }

    async fn logout(&self) -> anyhow::Result<()> {
        self.count();
        self.has_token.store(false, Ordering::SeqCst);
        if self.fail_logout.load(Ordering::SeqCst) {
            bail!("Không thể kết nối máy chủ");
        }
        Ok(())
    }

    async fn is_logged_in(&self) -> bool {
        self.has_token()
    }

    async fn current_user(&self) -> anyhow::Result<User> {
        self.count();
        // Only alice is ever restored in these tests
        let data = self.data.lock().unwrap();
        find(&data.accounts, |(_, user)| user.username == "alice").map(|(_, user)| user)
    }
}

#[async_trait]
impl AccountApi for FakeRemote {
    async fn get_account(&self, id: DbId) -> anyhow::Result<User> {
        let data = self.data_call()?;
        find(&data.accounts, |(_, user)| user.account_id == id).map(|(_, user)| user)
    }

    async fn change_password(&self, _args: ChangePasswordReqArgs) -> anyhow::Result<()> {
        self.data_call()?;
        Ok(())
    }
}

#[async_trait]
impl CustomerApi for FakeRemote {
    async fn list_customers(&self) -> anyhow::Result<Vec<Customer>> {
        let held = self.held_customer_lists.lock().unwrap().pop_front();
        if let Some(rx) = held {
            self.count();
            return rx.await.context("held list was dropped");
        }
        Ok(self.data_call()?.customers.clone())
    }

    async fn get_customer(&self, id: DbId) -> anyhow::Result<Customer> {
        let data = self.data_call()?;
        find(&data.customers, |customer| customer.customer_id == id)
    }

    async fn create_customer(&self, draft: CustomerDraft) -> anyhow::Result<Customer> {
        let mut data = self.data_call()?;
        let id = data.next_id();
        let customer = customer_from(id, draft);
        data.customers.push(customer.clone());
        Ok(customer)
    }

    async fn update_customer(&self, customer: Customer) -> anyhow::Result<Customer> {
        let mut data = self.data_call()?;
        let existing = data
            .customers
            .iter_mut()
            .find(|existing| existing.customer_id == customer.customer_id)
            .context(MSG_NOT_FOUND)?;
        *existing = customer.clone();
        Ok(customer)
    }

    async fn delete_customer(&self, id: DbId) -> anyhow::Result<()> {
        let mut data = self.data_call()?;
        let before = data.customers.len();
        data.customers.retain(|customer| customer.customer_id != id);
        anyhow::ensure!(data.customers.len() < before, MSG_NOT_FOUND);
        Ok(())
    }
}

#[async_trait]
impl CustomerVehicleApi for FakeRemote {
    async fn list_customer_vehicles(&self) -> anyhow::Result<Vec<CustomerVehicle>> {
        Ok(self.data_call()?.vehicles.clone())
    }

    async fn get_customer_vehicle(&self, id: DbId) -> anyhow::Result<CustomerVehicle> {
        let data = self.data_call()?;
        find(&data.vehicles, |vehicle| vehicle.vehicle_id == id)
    }

    async fn customer_vehicles_by_customer(
        &self,
        customer_id: DbId,
    ) -> anyhow::Result<Vec<CustomerVehicle>> {
        let data = self.data_call()?;
        Ok(data
            .vehicles
            .iter()
            .filter(|vehicle| vehicle.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn create_customer_vehicle(
        &self,
        draft: CustomerVehicleDraft,
    ) -> anyhow::Result<CustomerVehicle> {
        let mut data = self.data_call()?;
        let vehicle = CustomerVehicle {
            vehicle_id: data.next_id(),
            customer_id: draft.customer_id,
            model_id: draft.model_id,
            license_plate: draft.license_plate,
            chassis_number: draft.chassis_number,
            color: draft.color,
            year: draft.year,
        };
        data.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn update_customer_vehicle(
        &self,
        vehicle: CustomerVehicle,
    ) -> anyhow::Result<CustomerVehicle> {
        let mut data = self.data_call()?;
        let existing = data
            .vehicles
            .iter_mut()
            .find(|existing| existing.vehicle_id == vehicle.vehicle_id)
            .context(MSG_NOT_FOUND)?;
        *existing = vehicle.clone();
        Ok(vehicle)
    }

    async fn delete_customer_vehicle(&self, id: DbId) -> anyhow::Result<()> {
        let mut data = self.data_call()?;
        data.vehicles.retain(|vehicle| vehicle.vehicle_id != id);
        Ok(())
    }
}

#[async_trait]
impl DecalServiceApi for FakeRemote {
    async fn list_decal_services(&self) -> anyhow::Result<Vec<DecalService>> {
        Ok(self.data_call()?.services.clone())
    }

    async fn get_decal_service(&self, id: DbId) -> anyhow::Result<DecalService> {
        let data = self.data_call()?;
        find(&data.services, |service| service.service_id == id)
    }
}

#[async_trait]
impl EmployeeApi for FakeRemote {
    async fn list_employees(&self) -> anyhow::Result<Vec<Employee>> {
        Ok(self.data_call()?.employees.clone())
    }

    async fn get_employee(&self, id: DbId) -> anyhow::Result<Employee> {
        let data = self.data_call()?;
        find(&data.employees, |employee| employee.employee_id == id)
    }

    async fn employees_by_store(&self, store_id: DbId) -> anyhow::Result<Vec<Employee>> {
        let data = self.data_call()?;
        Ok(data
            .employees
            .iter()
            .filter(|employee| employee.store_id == Some(store_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl OrderApi for FakeRemote {
    async fn list_orders(&self) -> anyhow::Result<Vec<Order>> {
        Ok(self.data_call()?.orders.clone())
    }

    async fn get_order(&self, id: DbId) -> anyhow::Result<Order> {
        let data = self.data_call()?;
        find(&data.orders, |order| order.order_id == id)
    }

    async fn orders_by_customer(&self, customer_id: DbId) -> anyhow::Result<Vec<Order>> {
        let data = self.data_call()?;
        Ok(data
            .orders
            .iter()
            .filter(|order| order.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn orders_by_store(&self, store_id: DbId) -> anyhow::Result<Vec<Order>> {
        let data = self.data_call()?;
        let staff: Vec<DbId> = data
            .employees
            .iter()
            .filter(|employee| employee.store_id == Some(store_id))
            .map(|employee| employee.employee_id)
            .collect();
        Ok(data
            .orders
            .iter()
            .filter(|order| {
                order
                    .assigned_employee_id
                    .is_some_and(|id| staff.contains(&id))
            })
            .cloned()
            .collect())
    }

    async fn create_order(&self, draft: OrderDraft) -> anyhow::Result<Order> {
        let mut data = self.data_call()?;
        let order = Order {
            order_id: data.next_id(),
            order_date: Utc::now(),
            order_status: draft.order_status,
            total_amount: draft.total_amount,
            customer_id: draft.customer_id,
            assigned_employee_id: draft.assigned_employee_id,
            vehicle_id: draft.vehicle_id,
            current_stage: draft.current_stage,
            is_custom_decal: draft.is_custom_decal,
        };
        data.orders.push(order.clone());
        Ok(order)
    }

    async fn update_order(&self, order: Order) -> anyhow::Result<Order> {
        let mut data = self.data_call()?;
        let existing = data
            .orders
            .iter_mut()
            .find(|existing| existing.order_id == order.order_id)
            .context(MSG_NOT_FOUND)?;
        *existing = order.clone();
        Ok(order)
    }

    async fn delete_order(&self, id: DbId) -> anyhow::Result<()> {
        let mut data = self.data_call()?;
        data.orders.retain(|order| order.order_id != id);
        Ok(())
    }
}

#[async_trait]
impl OrderDetailApi for FakeRemote {
    async fn get_order_detail(&self, id: DbId) -> anyhow::Result<OrderDetail> {
        let data = self.data_call()?;
        find(&data.details, |detail| detail.order_detail_id == id)
    }

    async fn order_details_by_order(&self, order_id: DbId) -> anyhow::Result<Vec<OrderDetail>> {
        let data = self.data_call()?;
        Ok(data
            .details
            .iter()
            .filter(|detail| detail.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn create_order_detail(&self, draft: OrderDetailDraft) -> anyhow::Result<OrderDetail> {
        let mut data = self.data_call()?;
        let detail = OrderDetail {
            order_detail_id: data.next_id(),
            order_id: draft.order_id,
            service_id: draft.service_id,
            quantity: draft.quantity,
            price: draft.price,
            final_calculated_price: None,
        };
        data.details.push(detail.clone());
        Ok(detail)
    }

    async fn delete_order_detail(&self, id: DbId) -> anyhow::Result<()> {
        let mut data = self.data_call()?;
        data.details.retain(|detail| detail.order_detail_id != id);
        Ok(())
    }
}

#[async_trait]
impl OrderStageHistoryApi for FakeRemote {
    async fn stage_history_by_order(
        &self,
        order_id: DbId,
    ) -> anyhow::Result<Vec<OrderStageHistory>> {
        let data = self.data_call()?;
        Ok(data
            .stages
            .iter()
            .filter(|stage| stage.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn create_stage_history(
        &self,
        draft: OrderStageHistoryDraft,
    ) -> anyhow::Result<OrderStageHistory> {
        let mut data = self.data_call()?;
        let stage = OrderStageHistory {
            order_stage_history_id: data.next_id(),
            order_id: draft.order_id,
            stage_name: draft.stage_name,
            changed_date: Utc::now(),
            changed_by_employee_id: draft.changed_by_employee_id,
            notes: draft.notes,
        };
        data.stages.push(stage.clone());
        Ok(stage)
    }
}

#[async_trait]
impl PaymentApi for FakeRemote {
    async fn list_payments(&self) -> anyhow::Result<Vec<Payment>> {
        Ok(self.data_call()?.payments.clone())
    }

    async fn get_payment(&self, id: DbId) -> anyhow::Result<Payment> {
        let data = self.data_call()?;
        find(&data.payments, |payment| payment.payment_id == id)
    }

    async fn payments_by_order(&self, order_id: DbId) -> anyhow::Result<Vec<Payment>> {
        let data = self.data_call()?;
        Ok(data
            .payments
            .iter()
            .filter(|payment| payment.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn create_payment(&self, draft: PaymentDraft) -> anyhow::Result<Payment> {
        let mut data = self.data_call()?;
        let payment = Payment {
            payment_id: data.next_id(),
            order_id: draft.order_id,
            amount: draft.amount,
            payment_date: Utc::now(),
            payment_method: draft.payment_method,
            payment_status: "PAID".to_string(),
            transaction_code: draft.transaction_code,
            notes: draft.notes,
        };
        data.payments.push(payment.clone());
        Ok(payment)
    }
}

#[async_trait]
impl StoreApi for FakeRemote {
    async fn list_stores(&self) -> anyhow::Result<Vec<Store>> {
        Ok(self.data_call()?.stores.clone())
    }

    async fn get_store(&self, id: DbId) -> anyhow::Result<Store> {
        let data = self.data_call()?;
        find(&data.stores, |store| store.store_id == id)
    }
}

#[async_trait]
impl VehicleApi for FakeRemote {
    async fn list_vehicle_brands(&self) -> anyhow::Result<Vec<VehicleBrand>> {
        Ok(self.data_call()?.brands.clone())
    }

    async fn vehicle_models_by_brand(&self, brand_id: DbId) -> anyhow::Result<Vec<VehicleModel>> {
        let data = self.data_call()?;
        Ok(data
            .models
            .iter()
            .filter(|model| model.brand_id == brand_id)
            .cloned()
            .collect())
    }
}
