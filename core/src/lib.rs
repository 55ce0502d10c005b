//! Client core for the ingredient inventory service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), renders the ingredient table
//! and runs the add/edit form and row selection as explicit state.
//!
//! # Design
//! - `InventoryClient` is stateless; it holds only `base_url`.
//! - Each API operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - `InventoryApp` owns the view state and talks to the outside world only
//!   through the `Transport` and `Dialogs` traits.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod render;
pub mod types;

pub use app::{AppState, Dialogs, Event, InventoryApp};
pub use client::InventoryClient;
pub use error::{ApiError, ValidationError};
pub use form::{FormMode, FormState};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use render::{format_timestamp, format_timestamp_in, render_rows, TableRow};
pub use types::{DeleteIngredients, Ingredient, Unit, UpsertIngredient};
