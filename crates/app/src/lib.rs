//! # birdview-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TemplateRenderer`: render a named template with a render context
//!   - `SettingsProvider`: hand out the current settings snapshot
//! - Build the **route table** of top-level pages, frozen before serving
//! - Prepare render-ready data from settings (locales, species)
//! - Assemble the **render context** for pages and settings fragments
//! - Dispatch rendering of full pages and fragments (`RenderService`)
//! - Publish settings snapshots atomically (`SettingsStore`)
//!
//! ## Dependency rule
//! Depends on `birdview-domain` only (plus `arc-swap` for snapshot publication).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod context;
pub mod ports;
pub mod preparers;
pub mod route_table;
pub mod services;
pub mod settings_store;
