//! Driving Adapters
//!
//! Entry points into the application: the REST API.

pub mod api_rest;
