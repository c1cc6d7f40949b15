//! Core modules for the student-residence administration backend.
//!
//! This crate contains the data layer behind the residence administration
//! screens: the HTTP client for the schema-less record store, the in-memory
//! snapshot of its collections, and the pure join, aggregation and search
//! services the dashboard and listing views are rendered from. Rendering,
//! form handling, and durable session storage are the host application's
//! concern; everything exposed here is plain data.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod service;
pub mod store;
pub mod util;
