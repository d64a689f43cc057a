//! Name My Cat HTTP service.
//!
//! A website for naming your new pet cat. Every visit to `/` shows a random
//! name from the database; visitors can submit new candidates with a form.
//!
//! - `GET /` renders a random name, or "Cat" when none are stored
//! - `POST /` validates and stores a submitted name, then redirects back
//! - `GET /health` reports service status
//!
//! Notifications survive the redirect in a signed flash cookie.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod crypto;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
