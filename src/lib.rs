//! Country Currency API
//!
//! A Rust-based microservice that mirrors country reference data and
//! USD exchange rates into a local store, following Clean/Hexagonal
//! Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
