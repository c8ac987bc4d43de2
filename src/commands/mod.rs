//! Command handler layer.
//!
//! The binary has a single command: run the full mutant batch. CLI inputs are
//! matched here and all filesystem/process work is delegated to `services/*`.

pub mod run;

pub use run::handle_run;
