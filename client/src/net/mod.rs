//! Browser networking: the `gloo-net` transport and dispatcher wiring.

pub mod api;
pub mod transport;
