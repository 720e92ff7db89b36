use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ntc_cli::cli::{BookingArgs, ScheduleArgs};
use ntc_cli::logic::client::{account, commuter, routes, schedules};
use ntc_cli::logic::session::SessionStore;

#[tokio::test]
async fn login_persists_the_returned_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .and(body_partial_json(json!({
            "email": "kasun@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Kasun",
            "email": "kasun@example.com",
            "role": "Admin",
            "token": "tok-abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::at(dir.path());
    account::login(
        &server.uri(),
        &store,
        "kasun@example.com".into(),
        "hunter2".into(),
    )
    .await
    .unwrap();

    let session = store.load().expect("session should be persisted");
    assert_eq!(session.token, "tok-abc");
    assert_eq!(session.role, "Admin");
    assert!(session.is_admin());
}

#[tokio::test]
async fn view_routes_sends_the_stored_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/routes"))
        .and(header("authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "routeNumber": "R1",
            "routeName": "Galle Express",
            "startingPoint": "Colombo",
            "endingPoint": "Galle",
            "distance": 116.0
        }])))
        .expect(1)
        .mount(&server)
        .await;

    routes::list(&server.uri(), "tok-abc").await.unwrap();
}

#[tokio::test]
async fn bus_search_passes_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commuter/searchbus"))
        .and(query_param("departurePoint", "Colombo"))
        .and(query_param("arrivalPoint", "Galle"))
        .and(query_param("date", "2026-09-01"))
        .and(header("authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    commuter::search(
        &server.uri(),
        "tok-abc",
        "Colombo".into(),
        "Galle".into(),
        "2026-09-01".into(),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn add_schedule_sends_the_nested_coerced_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/operator/schedules"))
        .and(header("authorization", "Bearer tok-abc"))
        .and(body_partial_json(json!({
            "route": { "routeNumber": "R1", "routeName": "Galle Express" },
            "bus": { "registrationNumber": "WP-NA-4321", "ticketPrice": 1450.5 },
            "stops": ["Kalutara", "Ambalangoda"],
            "scheduleValid": { "startDate": "2026-01-01", "endDate": "2026-06-30" },
            "scheduleToken": "SCH-1",
            "isActive": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "scheduleToken": "SCH-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let args = ScheduleArgs {
        route_number: "R1".into(),
        route_name: "Galle Express".into(),
        registration_number: "WP-NA-4321".into(),
        operator_name: "SLTB".into(),
        bus_type: "Luxury".into(),
        ticket_price: 1450.5,
        capacity: 54,
        available_seats: 54,
        departure_point: "Colombo".into(),
        departure_time: "06:30".into(),
        arrival_point: "Galle".into(),
        arrival_time: "09:15".into(),
        stops: "Kalutara,Ambalangoda".into(),
        start_date: "2026-01-01".into(),
        end_date: "2026-06-30".into(),
        schedule_token: "SCH-1".into(),
        is_active: "true".into(),
    };
    schedules::add(&server.uri(), "tok-abc", args).await.unwrap();
}

#[tokio::test]
async fn delete_schedule_addresses_the_token_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/operator/schedules/SCH-1"))
        .and(header("authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "deleted": true })))
        .expect(1)
        .mount(&server)
        .await;

    schedules::delete(&server.uri(), "tok-abc", "SCH-1".into())
        .await
        .unwrap();
}

#[tokio::test]
async fn service_errors_are_reported_without_failing_the_command() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/commuter/bookbus"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Not enough seats" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let booking = BookingArgs {
        booking_number: "BK-9".into(),
        user_name: "Kasun".into(),
        seat_count: 3,
        booking_date: "2026-09-01".into(),
        schedule_token: "SCH-1".into(),
        booking_token: "BT-9".into(),
    };
    // The error is printed, not propagated.
    commuter::book(&server.uri(), "tok-abc", booking).await.unwrap();
}

#[tokio::test]
async fn failed_login_leaves_no_session_behind() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::at(dir.path());
    account::login(&server.uri(), &store, "kasun@example.com".into(), "wrong".into())
        .await
        .unwrap();
    assert!(store.load().is_none());
}
