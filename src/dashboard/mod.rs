//! Client side of the lead dashboard: view state and the controller that
//! keeps it in sync with the REST API.

pub mod client;
pub mod state;
