//! # birdview-domain
//!
//! Pure domain model for the birdview dashboard rendering layer.
//!
//! ## Responsibilities
//! - Error conventions shared by every layer (`RouteError`, `RenderError`,
//!   `BirdviewError`)
//! - Define the **settings snapshot** (`Settings`): the read-only view of
//!   global configuration that rendering consumes
//! - Define **route descriptors** and the path normalization rule
//! - Define the render-ready views derived from settings: **locale entries**
//!   and **prepared species** lists
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod locale;
pub mod route;
pub mod settings;
pub mod species;
