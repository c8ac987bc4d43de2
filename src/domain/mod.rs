//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — per-mutant outcome and run report structs.
//! - `constants.rs` — fixed workspace paths, report markers, batch size.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/process side effects.
//! Changes in these structs affect the `--json` output schema.

pub mod constants;
pub mod models;
