use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::logic::client::url_utils::api_url;
use crate::logic::types::RouteInfo;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoutePayload<'a> {
    route_number: &'a str,
    route_name: &'a str,
    starting_point: &'a str,
    ending_point: &'a str,
    distance: f64,
}

pub async fn add(
    api: &str,
    token: &str,
    route_number: String,
    route_name: String,
    starting_point: String,
    ending_point: String,
    distance: f64,
) -> anyhow::Result<()> {
    let url = api_url(api, "/admin/routes");
    let payload = RoutePayload {
        route_number: &route_number,
        route_name: &route_name,
        starting_point: &starting_point,
        ending_point: &ending_point,
        distance,
    };
    let resp = Client::new()
        .post(&url)
        .bearer_auth(token)
        .json(&payload)
        .send()
        .await?;

    if resp.status().is_success() {
        let body: Value = resp.json().await?;
        println!("✓ Route `{}` added", route_number);
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        eprintln!("✗ Failed to add route: {}", resp.text().await?);
    }
    Ok(())
}

pub async fn list(api: &str, token: &str) -> anyhow::Result<()> {
    let url = api_url(api, "/admin/routes");
    let resp = Client::new().get(&url).bearer_auth(token).send().await?;

    if !resp.status().is_success() {
        eprintln!("✗ Failed to fetch routes: {}", resp.text().await?);
        return Ok(());
    }

    let routes: Vec<RouteInfo> = resp.json().await?;
    if routes.is_empty() {
        println!("No routes found.");
        return Ok(());
    }

    println!("Bus Routes:");
    for (i, r) in routes.iter().enumerate() {
        println!(
            "{}. Route Number: {}, Name: {}, Start: {}, End: {}, Distance: {}",
            i + 1,
            r.route_number,
            r.route_name,
            r.starting_point,
            r.ending_point,
            r.distance
        );
    }
    Ok(())
}
