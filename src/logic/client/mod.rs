pub mod account;
pub mod buses;
pub mod commuter;
pub mod routes;
pub mod schedules;
pub mod url_utils;
