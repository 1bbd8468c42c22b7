use decal_app::pages::OrderFilter;
use decal_shared::{
    id::DbId,
    models::{CustomerVehicleDraft, OrderStageHistoryDraft, PaymentDraft},
};
use rust_decimal::Decimal;

use crate::helpers::{spawn_app, ALICE_EMPLOYEE_ID};

#[tokio::test]
async fn orders_can_be_filtered_by_customer() {
    // Arrange
    let app = spawn_app();
    app.login_as_sales().await;
    let screen = app.app.order_list_screen();

    // Act
    screen.load(OrderFilter::ByCustomer(DbId::from(41))).await;
    let for_customer = screen.state.data().unwrap();
    screen.load(OrderFilter::ByCustomer(DbId::from(999))).await;
    let for_stranger = screen.state.data().unwrap();

    // Assert
    assert_eq!(for_customer.len(), 1);
    assert_eq!(for_customer[0].order_id, DbId::from(61));
    assert!(for_stranger.is_empty());
}

#[tokio::test]
async fn technician_sees_orders() {
    let app = spawn_app();
    app.login_as("tech", "secret2").await;
    let screen = app.app.order_list_screen();

    screen.load(OrderFilter::All).await;

    assert_eq!(screen.state.snapshot().error, None);
    assert_eq!(screen.state.data().unwrap().len(), 1);
}

#[tokio::test]
async fn adding_a_stage_reloads_the_order() {
    // Arrange
    let app = spawn_app();
    app.login_as("tech", "secret2").await;
    let screen = app.app.order_detail_screen();
    screen.load(DbId::from(61)).await;
    assert!(screen.state.data().unwrap().stage_history.is_empty());

    // Act
    let entry = screen
        .add_stage(OrderStageHistoryDraft {
            order_id: DbId::from(61),
            stage_name: "DESIGNING".to_string(),
            changed_by_employee_id: Some(DbId::from(9)),
            notes: None,
        })
        .await;

    // Assert
    assert_eq!(entry.unwrap().stage_name, "DESIGNING");
    let view = screen.state.data().unwrap();
    assert_eq!(view.order.order_id, DbId::from(61));
    assert_eq!(view.details.len(), 1);
    assert_eq!(view.stage_history.len(), 1);
    assert_eq!(view.stage_history[0].stage_name, "DESIGNING");
}

#[tokio::test]
async fn customer_records_payment_and_sees_it() {
    // Arrange
    let app = spawn_app();
    app.login_as("lan", "secret3").await;
    let screen = app.app.payment_screen();
    screen.load(DbId::from(61)).await;

    // Act
    let payment = screen
        .create_payment(PaymentDraft {
            order_id: DbId::from(61),
            amount: Decimal::new(1_000_000, 0),
            payment_method: "TRANSFER".to_string(),
            transaction_code: Some("TX-1".to_string()),
            notes: None,
        })
        .await;

    // Assert
    assert!(payment.is_some());
    let payments = screen.state.data().unwrap();
    let total: Decimal = payments.iter().map(|payment| payment.amount).sum();
    assert_eq!(payments.len(), 2);
    assert_eq!(total, Decimal::new(1_500_000, 0));
}

#[tokio::test]
async fn technician_may_not_see_payments() {
    let app = spawn_app();
    app.login_as("tech", "secret2").await;
    let screen = app.app.payment_screen();

    screen.load(DbId::from(61)).await;

    assert_eq!(
        screen.state.snapshot().error.as_deref(),
        Some("Bạn không có quyền truy cập chức năng này")
    );
}

#[tokio::test]
async fn services_are_listed_for_every_mobile_role() {
    for (username, password) in [("alice", "hunter2"), ("tech", "secret2"), ("lan", "secret3")] {
        let app = spawn_app();
        app.login_as(username, password).await;
        let screen = app.app.service_list_screen();

        screen.load().await;

        let services = screen.state.data().unwrap();
        assert_eq!(services.len(), 1, "for {username}");
        assert_eq!(services[0].price, Decimal::new(1_500_000, 0));
    }
}

#[tokio::test]
async fn picking_a_brand_loads_its_models() {
    // Arrange
    let app = spawn_app();
    app.login_as_sales().await;
    let screen = app.app.vehicle_screen();
    screen.load_brands().await;
    let yamaha = screen.brands.data().unwrap()[1].brand_id;

    // Act
    screen.select_brand(yamaha).await;

    // Assert
    let models = screen.models.data().unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].model_name, "Exciter");
}

#[tokio::test]
async fn registering_a_vehicle_reloads_the_owners_vehicles() {
    // Arrange
    let app = spawn_app();
    app.login_as_sales().await;
    let screen = app.app.vehicle_screen();

    // Act
    let vehicle = screen
        .create_vehicle(CustomerVehicleDraft {
            customer_id: DbId::from(41),
            model_id: DbId::from(21),
            license_plate: "59X1-67890".to_string(),
            chassis_number: None,
            color: None,
            year: Some(2023),
        })
        .await;

    // Assert
    assert!(vehicle.is_some());
    let plates: Vec<String> = screen
        .vehicles
        .data()
        .unwrap()
        .into_iter()
        .map(|vehicle| vehicle.license_plate)
        .collect();
    assert_eq!(plates, ["59X1-12345", "59X1-67890"]);
    assert_eq!(
        app.app.session().current_employee_info().unwrap().employee_id,
        DbId::from(ALICE_EMPLOYEE_ID)
    );
}
