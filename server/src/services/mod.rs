//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own external calls and persistence so route handlers stay
//! focused on cookies, status codes, and redirects.

pub mod auth;
pub mod session;
