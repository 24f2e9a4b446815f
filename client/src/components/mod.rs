//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `DashboardShell` composes `AuthProvider` and `Sidebar`; pages render into
//! its content region and never mount those collaborators themselves.

pub mod auth_provider;
pub mod dashboard_shell;
pub mod sidebar;
