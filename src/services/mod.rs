//! Service layer containing lookup logic and side-effect helpers.
//!
//! ## Service map
//! - `config.rs` — rules root discovery and alias table loading.
//! - `locator.rs` — query resolution (alias, path, path + `.md`).
//! - `catalog.rs` — recursive document listing.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Services never write outside stdout/stderr; the rules root is read-only.
//! - Keep command handlers thin; delegate to services.

pub mod catalog;
pub mod config;
pub mod locator;
pub mod output;
