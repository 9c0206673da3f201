// --- File: crates/freeslot_gcal/src/lib.rs ---
pub mod auth;
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod routes;
#[cfg(test)]
mod routes_test;
pub mod service;

pub use handlers::{GcalState, SharedCalendarService};
pub use routes::{build_state, routes};
