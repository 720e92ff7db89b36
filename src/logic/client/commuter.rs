use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::cli::BookingArgs;
use crate::logic::client::url_utils::api_url;
use crate::logic::types::AvailableBus;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookingPayload<'a> {
    booking_number: &'a str,
    user_name: &'a str,
    seat_count: u32,
    booking_date: &'a str,
    schedule_token: &'a str,
    booking_token: &'a str,
}

pub async fn search(
    api: &str,
    token: &str,
    departure_point: String,
    arrival_point: String,
    date: String,
) -> anyhow::Result<()> {
    let url = api_url(api, "/commuter/searchbus");
    let resp = Client::new()
        .get(&url)
        .query(&[
            ("departurePoint", departure_point.as_str()),
            ("arrivalPoint", arrival_point.as_str()),
            ("date", date.as_str()),
        ])
        .bearer_auth(token)
        .send()
        .await?;

    if !resp.status().is_success() {
        eprintln!("✗ Failed to fetch available buses: {}", resp.text().await?);
        return Ok(());
    }

    let buses: Vec<AvailableBus> = resp.json().await?;
    if buses.is_empty() {
        println!(
            "No buses available from {} to {} on {}.",
            departure_point, arrival_point, date
        );
        return Ok(());
    }

    println!(
        "Available Buses from {} to {} on {}:",
        departure_point, arrival_point, date
    );
    for (i, bus) in buses.iter().enumerate() {
        println!(
            "{}. Bus Number: {}, Driver: {}, Conductor: {}, Type: {}, Capacity: {}, Price: {}, Available Seats: {}, Registration Number: {}, Departure Time: {}",
            i + 1,
            bus.bus_number,
            bus.driver_name,
            bus.conductor_name,
            bus.bustype,
            bus.capacity,
            bus.price,
            bus.available_seats,
            bus.registration_number,
            bus.departure_time
        );
    }
    Ok(())
}

pub async fn book(api: &str, token: &str, booking: BookingArgs) -> anyhow::Result<()> {
    let url = api_url(api, "/commuter/bookbus");
    let payload = BookingPayload {
        booking_number: &booking.booking_number,
        user_name: &booking.user_name,
        seat_count: booking.seat_count,
        booking_date: &booking.booking_date,
        schedule_token: &booking.schedule_token,
        booking_token: &booking.booking_token,
    };
    let resp = Client::new()
        .post(&url)
        .bearer_auth(token)
        .json(&payload)
        .send()
        .await?;

    if resp.status().is_success() {
        let body: Value = resp.json().await?;
        println!("✓ Bus booked under `{}`", booking.booking_number);
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        eprintln!("✗ Booking failed: {}", resp.text().await?);
    }
    Ok(())
}
