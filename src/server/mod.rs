//! HTTP server layer
//!
//! Exposes the extraction service to browser clients. The surface is a
//! single POST endpoint plus the CORS handling browsers need for it.

mod routes;

pub use routes::{router, serve, AnalyzeRequest, ErrorBody};
