use colored::*;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::cli::BusArgs;
use crate::logic::client::url_utils::api_url;
use crate::logic::types::BusInfo;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BusPayload<'a> {
    bus_number: &'a str,
    driver_name: &'a str,
    conductor_name: &'a str,
    operator_name: &'a str,
    bustype: &'a str,
    capacity: u32,
    price: f64,
    available_seats: u32,
    registration_number: &'a str,
    route_number: &'a str,
}

pub async fn add(api: &str, token: &str, bus: BusArgs) -> anyhow::Result<()> {
    let url = api_url(api, "/admin/buses");
    let payload = BusPayload {
        bus_number: &bus.bus_number,
        driver_name: &bus.driver_name,
        conductor_name: &bus.conductor_name,
        operator_name: &bus.operator_name,
        bustype: &bus.bustype,
        capacity: bus.capacity,
        price: bus.price,
        available_seats: bus.available_seats,
        registration_number: &bus.registration_number,
        route_number: &bus.route_number,
    };
    let resp = Client::new()
        .post(&url)
        .bearer_auth(token)
        .json(&payload)
        .send()
        .await?;

    if resp.status().is_success() {
        let body: Value = resp.json().await?;
        println!("✓ Bus `{}` added", bus.bus_number);
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        eprintln!("✗ Failed to add bus: {}", resp.text().await?);
    }
    Ok(())
}

pub async fn list(api: &str, token: &str) -> anyhow::Result<()> {
    let url = api_url(api, "/admin/buses");
    let resp = Client::new().get(&url).bearer_auth(token).send().await?;

    if !resp.status().is_success() {
        eprintln!("✗ Failed to fetch buses: {}", resp.text().await?);
        return Ok(());
    }

    let buses: Vec<BusInfo> = resp.json().await?;
    if buses.is_empty() {
        println!("No buses found.");
        return Ok(());
    }

    println!("Buses with Assigned Routes:");
    for (i, bus) in buses.iter().enumerate() {
        let route = match &bus.route {
            Some(r) => r.route_name.green().to_string(),
            None => "Unassigned".yellow().to_string(),
        };
        println!(
            "{}. Bus Number: {}, Driver: {}, Conductor: {}, Operator: {}, Type: {}, Capacity: {}, Price: {}, Available Seats: {}, Registration Number: {}, Route: {}",
            i + 1,
            bus.bus_number,
            bus.driver_name,
            bus.conductor_name,
            bus.operator_name,
            bus.bustype,
            bus.capacity,
            bus.price,
            bus.available_seats,
            bus.registration_number,
            route
        );
    }
    Ok(())
}
