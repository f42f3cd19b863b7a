//! Client-side session, dispatch, and routing core for the job tracker.
//!
//! This crate owns everything both front-ends (`cli` and `client`) share:
//! the durable session store, the request dispatcher that attaches
//! credentials and tears the session down on rejected authorization, the
//! route guard, and typed services for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Front-ends inject three things: a [`storage::KeyValueStorage`] backend, a
//! [`dispatch::Transport`] that performs HTTP, and a
//! [`dispatch::UnauthorizedHandler`] that sends the user back to login.
//! Everything else is environment-independent and tested here.

pub mod dispatch;
pub mod error;
pub mod guard;
pub mod routes;
pub mod services;
pub mod session;
pub mod storage;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use dispatch::{ApiRequest, ApiResponse, Dispatcher, Method, Transport, UnauthorizedHandler};
pub use error::{ApiError, StorageError};
pub use guard::{GuardOutcome, RouteGuard};
pub use routes::Route;
pub use session::{AuthScheme, Profile, SessionStore};
pub use storage::{KeyValueStorage, MemoryStorage};
