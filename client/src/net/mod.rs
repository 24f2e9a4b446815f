//! Networking modules for the dashboard's HTTP calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the auth endpoints served by the `server` crate and `types`
//! defines the JSON shapes they exchange.

pub mod api;
pub mod types;
