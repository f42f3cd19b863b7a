//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and calls `jobtrack_core::services` through
//! a fresh dispatcher from `net::api`. Pure input handling lives in small
//! helpers next to each page so it can be tested natively.

pub mod application_form;
pub mod applications;
pub mod dashboard;
pub mod login;
pub mod register;
