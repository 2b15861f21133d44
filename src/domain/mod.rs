//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — alias, document and JSON output structs.
//! - `constants.rs` — built-in alias table and fixed messages.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
