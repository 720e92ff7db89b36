use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::cli::ScheduleArgs;
use crate::logic::client::url_utils::api_url;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleRoute {
    route_number: String,
    route_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleBus {
    registration_number: String,
    operator_name: String,
    bus_type: String,
    ticket_price: f64,
    capacity: u32,
    available_seats: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleValidity {
    start_date: String,
    end_date: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SchedulePayload {
    route: ScheduleRoute,
    bus: ScheduleBus,
    departure_point: String,
    departure_time: String,
    arrival_point: String,
    arrival_time: String,
    stops: Vec<String>,
    schedule_valid: ScheduleValidity,
    schedule_token: String,
    is_active: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleUpdatePayload {
    departure_point: String,
    departure_time: String,
    arrival_point: String,
    arrival_time: String,
    stops: Vec<String>,
}

/// Stops arrive on the command line as one comma-separated string.
fn split_stops(stops: &str) -> Vec<String> {
    stops.split(',').map(str::to_string).collect()
}

/// Only the literal `true` activates a schedule; anything else is inactive.
fn coerce_active(raw: &str) -> bool {
    raw == "true"
}

fn build_payload(args: ScheduleArgs) -> SchedulePayload {
    SchedulePayload {
        route: ScheduleRoute {
            route_number: args.route_number,
            route_name: args.route_name,
        },
        bus: ScheduleBus {
            registration_number: args.registration_number,
            operator_name: args.operator_name,
            bus_type: args.bus_type,
            ticket_price: args.ticket_price,
            capacity: args.capacity,
            available_seats: args.available_seats,
        },
        departure_point: args.departure_point,
        departure_time: args.departure_time,
        arrival_point: args.arrival_point,
        arrival_time: args.arrival_time,
        stops: split_stops(&args.stops),
        schedule_valid: ScheduleValidity {
            start_date: args.start_date,
            end_date: args.end_date,
        },
        schedule_token: args.schedule_token,
        is_active: coerce_active(&args.is_active),
    }
}

pub async fn add(api: &str, token: &str, args: ScheduleArgs) -> anyhow::Result<()> {
    let url = api_url(api, "/operator/schedules");
    let payload = build_payload(args);
    let resp = Client::new()
        .post(&url)
        .bearer_auth(token)
        .json(&payload)
        .send()
        .await?;

    if resp.status().is_success() {
        let body: Value = resp.json().await?;
        println!("✓ Schedule `{}` added", payload.schedule_token);
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        eprintln!("✗ Failed to add schedule: {}", resp.text().await?);
    }
    Ok(())
}

pub async fn update(
    api: &str,
    token: &str,
    schedule_token: String,
    departure_point: String,
    departure_time: String,
    arrival_point: String,
    arrival_time: String,
    stops: String,
) -> anyhow::Result<()> {
    let url = api_url(api, &format!("/operator/schedules/{}", schedule_token));
    let payload = ScheduleUpdatePayload {
        departure_point,
        departure_time,
        arrival_point,
        arrival_time,
        stops: split_stops(&stops),
    };
    let resp = Client::new()
        .put(&url)
        .bearer_auth(token)
        .json(&payload)
        .send()
        .await?;

    if resp.status().is_success() {
        let body: Value = resp.json().await?;
        println!("✓ Schedule `{}` updated", schedule_token);
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        eprintln!("✗ Failed to update schedule: {}", resp.text().await?);
    }
    Ok(())
}

pub async fn delete(api: &str, token: &str, schedule_token: String) -> anyhow::Result<()> {
    let url = api_url(api, &format!("/operator/schedules/{}", schedule_token));
    let resp = Client::new().delete(&url).bearer_auth(token).send().await?;

    if resp.status().is_success() {
        println!("✓ Schedule `{}` deleted", schedule_token);
    } else {
        eprintln!("✗ Failed to delete schedule: {}", resp.text().await?);
    }
    Ok(())
}

/// Public listing, no session required.
pub async fn view(api: &str) -> anyhow::Result<()> {
    let url = api_url(api, "/schedules");
    let resp = Client::new().get(&url).send().await?;

    if !resp.status().is_success() {
        eprintln!("✗ Failed to fetch schedules: {}", resp.text().await?);
        return Ok(());
    }

    let body: Value = resp.json().await?;
    println!("Available schedules:");
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
