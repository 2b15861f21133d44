//! Command handler layer.
//!
//! Maps the single CLI query onto the services and wires their output.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate lookup logic to `services/*`.
//! - Keep output schema stable.

pub mod lookup;

pub use lookup::handle_query;
