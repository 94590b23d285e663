//! # birdview-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve **full dashboard pages** for every path in the route table
//! - Serve **settings fragments** at `/fragments/settings/{panel}` for
//!   partial refreshes of a settings panel
//! - Adapt the incoming request into a plain path + settings snapshot before
//!   calling the render service, so no axum type reaches the core
//! - Map rendering failures to HTTP status codes (404 / 500)
//!
//! ## Dependency rule
//! Depends on `birdview-app` (for port traits and the render service) and
//! `birdview-domain` (for error types). Never leaks axum types into the domain.

pub mod error;
pub mod pages;
pub mod router;
pub mod state;
