//! # buildcraft API
//!
//! REST API for buildcraft, served with actix-web.
//!
//! All successful responses wrap their payload as `{"result": ...}`; failures
//! carry `{"error": "..."}` with a status derived from the error kind.

pub mod rest;

pub use rest::{routes, RestApi, DEFAULT_PHASE, DEFAULT_TOP_K};
