use serde_json::{json, Value};
use uuid::Uuid;

use crate::helpers::TestApp;
use delivery_comms::{config::get_configuration, startup::Application};

#[tokio::test]
async fn next_delivery_returns_200_for_a_single_active_subscription() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app
        .get_next_delivery("618f4ed6-1c5b-4993-a149-f64700bf31dd")
        .await;

    assert_eq!(200, response.status().as_u16());

    let body: Value = response.json().await.expect("Response body is not JSON.");

    assert_eq!(
        body,
        json!({
            "title": "Your next delivery for Betsy",
            "message": "Hey Cordell! In two days' time, we'll be charging you for your next order for Betsy's fresh food.",
            "totalPrice": 69.0,
            "freeGift": false
        })
    );
}

#[tokio::test]
async fn next_delivery_grants_a_free_gift_above_120() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app
        .get_next_delivery("ddd21c3a-c45e-4d5a-b3a4-a6851d58a351")
        .await;

    assert_eq!(200, response.status().as_u16());

    let body: Value = response.json().await.expect("Response body is not JSON.");

    assert_eq!(
        body,
        json!({
            "title": "Your next delivery for Willie and Chaz",
            "message": "Hey Herman! In two days' time, we'll be charging you for your next order for Willie and Chaz's fresh food.",
            "totalPrice": 125.5,
            "freeGift": true
        })
    );
}

#[tokio::test]
async fn next_delivery_lists_three_names_without_oxford_comma() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app
        .get_next_delivery("ea17433d-7527-45a5-acbc-2e2f78f95c6e")
        .await;
    let body: Value = response.json().await.expect("Response body is not JSON.");

    assert_eq!(
        body["title"],
        "Your next delivery for Cristina, Mariah and Rebekah"
    );
    assert_eq!(body["totalPrice"], 197.5);
    assert_eq!(body["freeGift"], true);
}

#[tokio::test]
async fn next_delivery_skips_inactive_subscriptions() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app
        .get_next_delivery("76d6eb8d-5c2e-49f7-b798-d69700dda4c3")
        .await;
    let body: Value = response.json().await.expect("Response body is not JSON.");

    assert_eq!(body["title"], "Your next delivery for Destiny and Alexandre");
    assert_eq!(body["totalPrice"], 126.75);
}

#[tokio::test]
async fn next_delivery_without_active_subscriptions_has_no_text() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app
        .get_next_delivery("0f6b1c2e-8d7a-4e5b-9c3d-2a1b0c9d8e7f")
        .await;

    assert_eq!(200, response.status().as_u16());

    let body: Value = response.json().await.expect("Response body is not JSON.");

    assert_eq!(
        body,
        json!({
            "title": null,
            "message": null,
            "totalPrice": 0.0,
            "freeGift": false
        })
    );
}

#[tokio::test]
async fn next_delivery_returns_400_when_customer_id_is_malformed() {
    let test_app = TestApp::spawn_app().await;

    // This is a common practice and it is called table-driven tests.
    let test_cases = vec![
        ("not-an-id", "random text"),
        ("618F4ED6-1C5B-4993-A149-F64700BF31DD", "uppercase hex digits"),
        ("618f4ed61c5b4993a149f64700bf31dd", "missing hyphens"),
        ("618f4ed6-1c5b-4993-a149-f64700bf31d", "too short"),
        ("%21%40%23", "symbols"),
    ];

    for (customer_id, error_message) in test_cases {
        let response = test_app.get_next_delivery(customer_id).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 status when the id was {}",
            error_message
        );
    }
}

#[tokio::test]
async fn next_delivery_returns_404_when_customer_does_not_exist() {
    let test_app = TestApp::spawn_app().await;

    let test_cases = vec![
        String::from("00000000-0000-0000-0000-000000000000"),
        Uuid::new_v4().to_string(),
    ];

    for customer_id in test_cases {
        let response = test_app.get_next_delivery(&customer_id).await;

        assert_eq!(
            404,
            response.status().as_u16(),
            "The API did not fail with 404 status for {}",
            customer_id
        );
    }
}

#[tokio::test]
async fn application_does_not_start_without_a_directory() {
    let mut config = get_configuration().expect("Missing configuration file.");

    config.set_app_port(0);
    config.set_directory_path(String::from("data/missing.json"));

    assert!(Application::build(config).await.is_err());
}
