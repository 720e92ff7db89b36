pub mod client;
pub mod notes;
pub mod session;
pub mod types;
