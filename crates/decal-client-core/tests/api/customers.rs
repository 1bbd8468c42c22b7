use crate::helpers::{spawn_app, MSG_CUSTOMER_NOT_FOUND};
use decal_client_core::CustomerApi as _;
use decal_shared::{id::DbId, models::CustomerDraft};

fn draft(first_name: &str) -> CustomerDraft {
    CustomerDraft {
        first_name: first_name.to_string(),
        last_name: "Pham".to_string(),
        phone_number: "0911111111".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn list_customers_returns_seeded_records() {
    // Arrange
    let app = spawn_app().await;
    app.login().await.unwrap();
    let lan = app.stub.seed_customer(draft("Lan"));
    let minh = app.stub.seed_customer(draft("Minh"));

    // Act
    let actual = app.core_client.list_customers().await.unwrap();

    // Assert
    assert_eq!(actual, vec![lan, minh]);
}

#[tokio::test]
async fn get_customer_by_id() {
    // Arrange
    let app = spawn_app().await;
    app.login().await.unwrap();
    app.stub.seed_customer(draft("Lan"));
    let minh = app.stub.seed_customer(draft("Minh"));

    // Act
    let actual = app.core_client.get_customer(minh.customer_id).await.unwrap();

    // Assert
    assert_eq!(actual, minh);
}

#[tokio::test]
async fn missing_customer_error_is_the_response_body() {
    // Arrange
    let app = spawn_app().await;
    app.login().await.unwrap();

    // Act
    let actual = app.core_client.get_customer(DbId::from(99)).await;

    // Assert
    assert_eq!(actual.unwrap_err().to_string(), MSG_CUSTOMER_NOT_FOUND);
}

#[tokio::test]
async fn create_customer_returns_created_record() {
    // Arrange
    let app = spawn_app().await;
    app.login().await.unwrap();

    // Act
    let created = app.core_client.create_customer(draft("Lan")).await.unwrap();

    // Assert
    assert_eq!(created.full_name(), "Lan Pham");
    let listed = app.core_client.list_customers().await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn list_customers_requires_login() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let actual = app.core_client.list_customers().await;

    // Assert
    assert_eq!(
        actual.unwrap_err().to_string(),
        "request failed with status code: 401 Unauthorized and no body"
    );
}
