use serde::Deserialize;

/// Route record as returned by `GET /admin/routes`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    pub route_number: String,
    pub route_name: String,
    pub starting_point: String,
    pub ending_point: String,
    pub distance: f64,
}

/// The slice of a route the bus listing embeds.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRef {
    pub route_name: String,
}

/// Bus record as returned by `GET /admin/buses`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusInfo {
    pub bus_number: String,
    pub driver_name: String,
    pub conductor_name: String,
    pub operator_name: String,
    pub bustype: String,
    pub capacity: u32,
    pub price: f64,
    pub available_seats: u32,
    pub registration_number: String,
    /// Absent when the bus has no route assigned yet.
    #[serde(default)]
    pub route: Option<RouteRef>,
}

/// Search hit from `GET /commuter/searchbus`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableBus {
    pub bus_number: String,
    pub driver_name: String,
    pub conductor_name: String,
    pub bustype: String,
    pub capacity: u32,
    pub price: f64,
    pub available_seats: u32,
    pub registration_number: String,
    pub departure_time: String,
}
