//! Aniverse API service
//!
//! HTTP boundary for the Aniverse platform: routing, request validation,
//! and the JSON-file-backed snapshot store. The engine crates stay pure;
//! everything fallible or stateful lives here.

pub mod routes;
pub mod server;
pub mod store;

pub use server::AppState;
pub use store::JsonStore;
