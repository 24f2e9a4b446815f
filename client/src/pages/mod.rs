//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Dashboard pages render inside `DashboardShell` via the router outlet and
//! read the auth context it provides. `login` sits outside the shell.

pub mod login;
pub mod overview;
pub mod settings;
