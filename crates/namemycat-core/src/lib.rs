//! Core types for namemycat.
//!
//! This crate provides the domain types shared by the store and the HTTP service:
//!
//! - **Names**: `Name`, `NameId`, and the `DEFAULT_NAME` shown when nothing is stored
//! - **Display**: `title_case` for rendering names on the home page
//! - **Validation**: `validate_name` and `NameError`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod display;
pub mod error;
pub mod name;

pub use display::title_case;
pub use error::{NameError, Result};
pub use name::{validate_name, Name, NameId, DEFAULT_NAME};
