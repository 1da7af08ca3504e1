//! Harness flows against a mock booking API.

#![allow(clippy::unwrap_used, clippy::expect_used)]
// The mock server has to outlive every request a test sends.
#![allow(clippy::significant_drop_tightening)]

use booker_acceptance::{Harness, HarnessError};
use booker_application::fixtures::{default_dates, fixed_booking};
use booker_application::{ApplicationError, PayloadFactory};
use booker_domain::{
    AcceptFormat, Assertion, AuthToken, BookingFilter, BookingId, BookingIdEntry, BookingPayload,
    PartialBookingPayload, TestSuite, TokenPlacement,
};
use booker_infrastructure::BookerConfig;
use mockito::{Matcher, Server, ServerGuard};
use pretty_assertions::assert_eq;
use serde_json::json;

fn harness(server: &ServerGuard) -> Harness {
    Harness::with_config(BookerConfig::default().with_base_url(server.url())).unwrap()
}

fn created_body(id: u64, payload: &BookingPayload) -> String {
    json!({ "bookingid": id, "booking": payload }).to_string()
}

async fn mock_auth(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("POST", "/auth")
        .match_body(Matcher::Json(json!({"username": "admin", "password": "password123"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"abc123"}"#)
        .create_async()
        .await
}

#[tokio::test]
async fn create_then_get_returns_same_booking() {
    let mut server = Server::new_async().await;
    let harness = harness(&server);

    for (id, seed) in (100..).zip([1, 2, 3, 5, 8, 13]) {
        let payload = PayloadFactory::seeded(seed).booking();
        let create = server
            .mock("POST", "/booking")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(payload.to_value().unwrap()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(created_body(id, &payload))
            .create_async()
            .await;
        let get = server
            .mock("GET", format!("/booking/{id}").as_str())
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(payload.to_json().unwrap())
            .create_async()
            .await;

        let created = harness.create_booking(&payload).await.unwrap();
        let response = harness
            .bookings()
            .specific_booking(&created, AcceptFormat::Json)
            .await
            .unwrap();

        assert_eq!(created, BookingId::from(id));
        harness.assert_suite(
            &TestSuite::new(format!("GET /booking/{id}"))
                .with_assertion(Assertion::status(200))
                .with_assertion(Assertion::content_type("application/json")),
            &response,
        );
        assert_eq!(
            response.json::<BookingPayload>().unwrap(),
            payload,
            "seed {seed}"
        );
        create.assert_async().await;
        get.assert_async().await;
    }
}

#[tokio::test]
async fn update_sends_cookie_token_and_compares_json_semantically() {
    let mut server = Server::new_async().await;
    let update = fixed_booking();
    let auth = mock_auth(&mut server).await;
    // Same document, different key order and spacing.
    let echoed = r#"{ "additionalneeds": "Breakfast",
        "bookingdates": {"checkout": "2010-12-11", "checkin": "2010-11-11"},
        "depositpaid": true, "totalprice": 111, "lastname": "Brown", "firstname": "Jim" }"#;
    let put = server
        .mock("PUT", "/booking/5")
        .match_header("cookie", "token=abc123")
        .match_body(Matcher::Json(update.to_value().unwrap()))
        .with_status(200)
        .with_body(echoed)
        .create_async()
        .await;
    let harness = harness(&server);

    let token = harness.token().await.unwrap();
    let response = harness
        .bookings()
        .update_booking(&BookingId::from(5), &update, &token)
        .await
        .unwrap();

    harness.assert_suite(
        &TestSuite::new("PUT /booking/5")
            .with_assertion(Assertion::status(200))
            .with_assertion(Assertion::BodyJson(update.to_value().unwrap())),
        &response,
    );
    auth.assert_async().await;
    put.assert_async().await;
}

#[tokio::test]
async fn filter_by_stay_dates_finds_random_stay() {
    let mut server = Server::new_async().await;
    let mut factory = PayloadFactory::seeded(11);
    let payload = factory.booking_with_random_stay(default_dates().checkin);
    let dates = payload.bookingdates;
    let mock = server
        .mock("GET", "/booking")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("checkin".into(), dates.checkin.to_string()),
            Matcher::UrlEncoded("checkout".into(), dates.checkout.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"bookingid":12},{"bookingid":"13"}]"#)
        .create_async()
        .await;
    let harness = harness(&server);

    let response = harness
        .bookings()
        .filter_bookings(&BookingFilter::by_dates(dates.checkin, dates.checkout))
        .await
        .unwrap();

    assert!(dates.checkout > dates.checkin);
    let ids: Vec<BookingIdEntry> = response.json().unwrap();
    assert_eq!(
        ids.into_iter().map(|e| e.bookingid).collect::<Vec<_>>(),
        vec![BookingId::from(12), BookingId::from(13)]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn bearer_placement_from_config() {
    let mut server = Server::new_async().await;
    let patch = server
        .mock("PATCH", "/booking/5")
        .match_header("authorization", "Bearer abc123")
        .match_header("cookie", Matcher::Missing)
        .match_body(Matcher::Json(json!({"firstname": "James"})))
        .with_status(200)
        .with_body(r#"{"firstname":"James"}"#)
        .create_async()
        .await;
    let mut config = BookerConfig::default().with_base_url(server.url());
    config.token_placement = TokenPlacement::Bearer;
    let harness = Harness::with_config(config).unwrap();

    let response = harness
        .bookings()
        .partial_update_booking(
            &BookingId::from(5),
            &PartialBookingPayload::new().with_firstname("James"),
            &AuthToken::new("abc123").unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    patch.assert_async().await;
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let mut server = Server::new_async().await;
    let auth = mock_auth(&mut server).await;
    let delete = server
        .mock("DELETE", "/booking/9")
        .match_header("cookie", "token=abc123")
        .with_status(201)
        .with_body("Created")
        .create_async()
        .await;
    let get = server
        .mock("GET", "/booking/9")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;
    let harness = harness(&server);
    let id = BookingId::from(9);

    let token = harness.token().await.unwrap();
    let deleted = harness
        .bookings()
        .delete_booking(&id, &token)
        .await
        .unwrap();
    let fetched = harness
        .bookings()
        .specific_booking(&id, AcceptFormat::Json)
        .await
        .unwrap();

    assert_eq!(deleted.status, 201);
    assert_eq!(fetched.status, 404);
    auth.assert_async().await;
    delete.assert_async().await;
    get.assert_async().await;
}

#[tokio::test]
async fn text_accept_is_a_teapot() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/booking/1")
        .match_header("accept", "text/plain")
        .with_status(418)
        .with_body("I'm a Teapot")
        .create_async()
        .await;
    let harness = harness(&server);

    let response = harness
        .bookings()
        .specific_booking(&BookingId::from(1), AcceptFormat::Text)
        .await
        .unwrap();

    let results = harness.check(
        &TestSuite::new("teapot").with_assertion(Assertion::status(418)),
        &response,
    );
    assert!(results.all_passed(), "{}", results.report());
    mock.assert_async().await;
}

#[tokio::test]
async fn xml_accept_returns_xml() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/booking/1")
        .match_header("accept", "application/xml")
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body("<?xml version='1.0'?><booking><firstname>Jim</firstname></booking>")
        .create_async()
        .await;
    let harness = harness(&server);

    let response = harness
        .bookings()
        .specific_booking(&BookingId::from(1), AcceptFormat::Xml)
        .await
        .unwrap();

    let results = harness.check(
        &TestSuite::new("GET /booking/1 as XML")
            .with_assertion(Assertion::status(200))
            .with_assertion(Assertion::content_type("xml"))
            .with_assertion(Assertion::IsJson),
        &response,
    );
    assert_eq!(results.passed(), 2);
    let not_json = results.results[2].error.as_deref().unwrap();
    assert!(not_json.starts_with("body is not JSON"), "{not_json}");
    mock.assert_async().await;
}

#[tokio::test]
async fn create_with_unexpected_status_is_an_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/booking")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;
    let harness = harness(&server);

    let result = harness.create_booking(&fixed_booking()).await;

    assert!(matches!(
        result,
        Err(HarnessError::Application(ApplicationError::UnexpectedStatus {
            expected: 200,
            actual: 500,
            ..
        }))
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn refused_credentials_surface_the_reason() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/auth")
        .with_status(200)
        .with_body(r#"{"reason":"Bad credentials"}"#)
        .create_async()
        .await;
    let mut config = BookerConfig::default().with_base_url(server.url());
    config.password = "wrong".to_string();
    let harness = Harness::with_config(config).unwrap();

    let err = harness.token().await.unwrap_err();

    assert_eq!(err.to_string(), "authentication failed: Bad credentials");
    mock.assert_async().await;
}

#[tokio::test]
async fn ping_is_created() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/ping")
        .with_status(201)
        .with_body("Created")
        .create_async()
        .await;
    let harness = harness(&server);

    let response = harness.bookings().ping().await.unwrap();

    harness.assert_suite(
        &TestSuite::new("GET /ping").with_assertion(Assertion::status(201)),
        &response,
    );
    mock.assert_async().await;
}

#[tokio::test]
#[should_panic(expected = "FAILED status is 201: expected status 201, got 503")]
async fn assert_suite_reports_failures() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/ping")
        .with_status(503)
        .create_async()
        .await;
    let harness = harness(&server);

    let response = harness.bookings().ping().await.unwrap();

    harness.assert_suite(
        &TestSuite::new("GET /ping").with_assertion(Assertion::status(201)),
        &response,
    );
}
