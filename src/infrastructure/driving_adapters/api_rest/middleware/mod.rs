//! API Middleware

pub mod request_id;
