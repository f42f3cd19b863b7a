//! Typed calls to the backend API.
//!
//! ARCHITECTURE
//! ============
//! Services are free functions over a [`Dispatcher`](crate::Dispatcher) so
//! every call goes through the same credential and 401 handling. Each module
//! maps one backend resource.

pub mod applications;
pub mod auth;
pub mod dashboard;
pub mod interviews;
